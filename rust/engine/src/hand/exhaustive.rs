//! Best-of-21 evaluation: every five-card subset of the seven cards is
//! scored and the strongest one is reported.

use crate::cards::{Card, Rank};

use super::{Category, EvaluationResult, HAND_SIZE};

/// Category plus the five ranks in tie-break order (grouped ranks first,
/// larger groups before smaller, then by rank).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
struct Score {
    category: Category,
    ranks: [Rank; 5],
}

pub(super) fn evaluate(hand: &[Card; HAND_SIZE]) -> EvaluationResult {
    // choosing five of seven is the same as leaving out two
    let mut best = score(&without(hand, 0, 1));
    for skip_a in 0..HAND_SIZE {
        for skip_b in (skip_a + 1)..HAND_SIZE {
            best = best.max(score(&without(hand, skip_a, skip_b)));
        }
    }

    let (high_card, kicker) = if best.ranks[4] == Rank::LowAce {
        (Rank::LowAce, Rank::Five)
    } else {
        let high = best.ranks[0];
        let kicker = best.ranks.iter().copied().find(|r| *r != high).unwrap_or(high);
        (high, kicker)
    };

    EvaluationResult {
        category: best.category,
        high_card,
        kicker,
    }
}

fn without(hand: &[Card; HAND_SIZE], skip_a: usize, skip_b: usize) -> [Card; 5] {
    let mut five = [hand[0]; 5];
    let kept = (0..HAND_SIZE).filter(|&i| i != skip_a && i != skip_b);
    for (slot, i) in five.iter_mut().zip(kept) {
        *slot = hand[i];
    }
    five
}

fn score(five: &[Card; 5]) -> Score {
    let mut ranks = five.map(|c| c.rank);
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = five.iter().all(|c| c.suit == five[0].suit);
    let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    let straight_top = if distinct && ranks[0].value() - ranks[4].value() == 4 {
        Some(ranks[0])
    } else if ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        ranks = [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::LowAce];
        Some(Rank::Five)
    } else {
        None
    };

    if let Some(top) = straight_top {
        let category = match (flush, top) {
            (true, Rank::Ace) => Category::RoyalFlush,
            (true, _) => Category::StraightFlush,
            (false, _) => Category::Straight,
        };
        return Score { category, ranks };
    }

    // (count, rank), biggest group first
    let mut groups: Vec<(usize, Rank)> = Vec::with_capacity(5);
    for r in ranks {
        match groups.iter_mut().find(|(_, g)| *g == r) {
            Some((n, _)) => *n += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut ordered = ranks;
    let mut slot = 0;
    for &(n, r) in &groups {
        for _ in 0..n {
            ordered[slot] = r;
            slot += 1;
        }
    }

    let category = match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, Some(2)) => Category::FullHouse,
        _ if flush => Category::Flush,
        (3, _) => Category::ThreeOfAKind,
        (2, Some(2)) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::NoPair,
    };

    Score {
        category,
        ranks: ordered,
    }
}
