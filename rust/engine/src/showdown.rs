use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hand::{compare_hands, Category, EvaluationResult};

/// Orders two results by category, then high card, then kicker.
/// Suits never take part.
pub fn compare(a: &EvaluationResult, b: &EvaluationResult) -> Ordering {
    compare_hands(a, b)
}

/// Indices of every result equal to the best one.
///
/// Folded results never win; an empty slice or a slice of folded results
/// yields no winners.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::Rank;
/// use holdem_engine::hand::{Category, EvaluationResult};
/// use holdem_engine::showdown::determine_winners;
///
/// let pair = EvaluationResult { category: Category::OnePair, high_card: Rank::Nine, kicker: Rank::Ace };
/// let trips = EvaluationResult { category: Category::ThreeOfAKind, high_card: Rank::Two, kicker: Rank::Ace };
/// assert_eq!(determine_winners(&[pair, trips, pair]), vec![1]);
/// assert_eq!(determine_winners(&[pair, pair]), vec![0, 1]);
/// ```
pub fn determine_winners(results: &[EvaluationResult]) -> Vec<usize> {
    let mut best: Option<&EvaluationResult> = None;
    let mut winners = Vec::new();

    for (i, result) in results.iter().enumerate() {
        if result.category == Category::Folded {
            continue;
        }
        match best.map(|b| compare(result, b)) {
            None | Some(Ordering::Greater) => {
                best = Some(result);
                winners.clear();
                winners.push(i);
            }
            Some(Ordering::Equal) => winners.push(i),
            Some(Ordering::Less) => {}
        }
    }
    winners
}

/// Chips credited to one seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub seat: usize,
    pub amount: u32,
}

/// Splits `pot` evenly among `winners`, which must be given in priority
/// order. The `pot % n` leftover chips go one each to the first winners.
///
/// ```
/// use holdem_engine::showdown::{split_pot, Payout};
///
/// let payouts = split_pot(101, &[4, 1]);
/// assert_eq!(payouts, vec![Payout { seat: 4, amount: 51 }, Payout { seat: 1, amount: 50 }]);
/// ```
pub fn split_pot(pot: u32, winners: &[usize]) -> Vec<Payout> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = pot / n;
    let remainder = (pot % n) as usize;

    let payouts: Vec<Payout> = winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| Payout {
            seat,
            amount: share + u32::from(i < remainder),
        })
        .collect();
    info!(pot, winners = winners.len(), share, remainder, "pot split");
    payouts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn result(category: Category, high_card: Rank, kicker: Rank) -> EvaluationResult {
        EvaluationResult {
            category,
            high_card,
            kicker,
        }
    }

    #[test]
    fn kicker_breaks_ties_after_high_card() {
        let a = result(Category::OnePair, Rank::Ten, Rank::King);
        let b = result(Category::OnePair, Rank::Ten, Rank::Queen);
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn folded_results_never_win() {
        let folded = EvaluationResult::folded();
        assert!(determine_winners(&[folded, folded]).is_empty());
        assert!(determine_winners(&[]).is_empty());
        let weak = result(Category::NoPair, Rank::Seven, Rank::Two);
        assert_eq!(determine_winners(&[folded, weak]), vec![1]);
    }

    #[test]
    fn split_pot_conserves_chips() {
        for pot in [0, 1, 7, 100, 333] {
            for n in 1..=5 {
                let seats: Vec<usize> = (0..n).collect();
                let total: u32 = split_pot(pot, &seats).iter().map(|p| p.amount).sum();
                assert_eq!(total, pot);
            }
        }
        assert!(split_pot(50, &[]).is_empty());
    }
}
