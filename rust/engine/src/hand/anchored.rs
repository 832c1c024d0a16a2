//! Own-card anchored evaluation.
//!
//! Every category check starts from one of the player's two hole cards,
//! highest first, and scans outward over the rank-sorted seven cards.
//! Checks run strongest first and later checks only run while they could
//! still improve the category found so far.

use crate::cards::{Card, Rank, Suit};

use super::{Category, EvaluationResult, HAND_SIZE};

const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

struct Run {
    len: usize,
    top: Rank,
}

/// `hand` holds the two own cards first, then the five shared cards.
pub(super) fn evaluate(hand: &[Card; HAND_SIZE]) -> EvaluationResult {
    let own = [hand[0], hand[1]];
    let mut cards = *hand;
    // stable: equal ranks keep their input order
    cards.sort_by_key(|c| c.rank);
    let anchors = anchors(&cards);

    if let Some((category, high)) = straight_flush(&cards, &anchors) {
        return finish(own, category, high);
    }

    let mut category = Category::NoPair;
    let mut high = None;
    if let Some((c, h)) = sets(&cards, &anchors) {
        category = c;
        high = Some(h);
    }
    if category < Category::Flush {
        if let Some(h) = flush(&cards, &anchors) {
            category = Category::Flush;
            high = Some(h);
        }
    }
    if category < Category::Straight {
        if let Some(h) = straight(&cards, &anchors) {
            category = Category::Straight;
            high = Some(h);
        }
    }

    let high = high.unwrap_or_else(|| own[0].rank.max(own[1].rank));
    finish(own, category, high)
}

/// Positions of the own cards, scanning from the top of the sorted hand.
fn anchors(cards: &[Card; HAND_SIZE]) -> [usize; 2] {
    let mut found = [0; 2];
    let mut n = 0;
    for (i, card) in cards.iter().enumerate().rev() {
        if card.own && n < found.len() {
            found[n] = i;
            n += 1;
        }
    }
    found
}

fn finish(own: [Card; 2], category: Category, high_card: Rank) -> EvaluationResult {
    EvaluationResult {
        category,
        high_card,
        kicker: kicker(own, high_card),
    }
}

/// The own card that does not make up the high card. For a wheel the Ace
/// is the high card. When both own cards qualify the higher one wins; when
/// neither does (a pocket pair inside quads) the high card is repeated.
fn kicker(own: [Card; 2], high: Rank) -> Rank {
    let taken = if high == Rank::LowAce { Rank::Ace } else { high };
    own.iter()
        .map(|c| c.rank)
        .filter(|r| *r != taken)
        .max()
        .unwrap_or(own[0].rank)
}

/// Length and top of the consecutive-rank run through `anchor`, grown
/// upward first and then downward, capped at five. With a suit only cards of
/// that suit extend the run; rank duplicates are skipped either way.
fn run_through(cards: &[Card; HAND_SIZE], anchor: usize, suit: Option<Suit>) -> Run {
    let fits = |c: &Card| suit.map_or(true, |s| c.suit == s);
    let mut len = 1;

    let mut top = cards[anchor].rank;
    for c in &cards[anchor + 1..] {
        if len == 5 {
            break;
        }
        if c.rank == top {
            continue;
        }
        if Some(c.rank) != top.next() {
            break;
        }
        if fits(c) {
            top = c.rank;
            len += 1;
        }
    }

    let mut bottom = cards[anchor].rank;
    for c in cards[..anchor].iter().rev() {
        if len == 5 {
            break;
        }
        if c.rank == bottom {
            continue;
        }
        if c.rank.next() != Some(bottom) {
            break;
        }
        if fits(c) {
            bottom = c.rank;
            len += 1;
        }
    }

    Run { len, top }
}

/// Whether the anchor takes part in an A-2-3-4-5 run.
fn wheel(cards: &[Card; HAND_SIZE], anchor: usize, suit: Option<Suit>) -> bool {
    let fits = |c: &Card| suit.map_or(true, |s| c.suit == s);
    WHEEL.contains(&cards[anchor].rank)
        && WHEEL
            .iter()
            .all(|r| cards.iter().any(|c| c.rank == *r && fits(c)))
}

fn straight_flush(cards: &[Card; HAND_SIZE], anchors: &[usize; 2]) -> Option<(Category, Rank)> {
    for &a in anchors {
        let run = run_through(cards, a, Some(cards[a].suit));
        if run.len == 5 {
            let category = if run.top == Rank::Ace {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return Some((category, run.top));
        }
    }
    anchors
        .iter()
        .any(|&a| wheel(cards, a, Some(cards[a].suit)))
        .then_some((Category::StraightFlush, Rank::LowAce))
}

fn straight(cards: &[Card; HAND_SIZE], anchors: &[usize; 2]) -> Option<Rank> {
    for &a in anchors {
        let run = run_through(cards, a, None);
        if run.len == 5 {
            return Some(run.top);
        }
    }
    anchors
        .iter()
        .any(|&a| wheel(cards, a, None))
        .then_some(Rank::LowAce)
}

fn flush(cards: &[Card; HAND_SIZE], anchors: &[usize; 2]) -> Option<Rank> {
    anchors
        .iter()
        .find(|&&a| cards.iter().filter(|c| c.suit == cards[a].suit).count() > 4)
        .map(|&a| cards[a].rank)
}

fn occurrences(cards: &[Card; HAND_SIZE], rank: Rank) -> usize {
    cards.iter().filter(|c| c.rank == rank).count()
}

/// Four of a kind, full house, trips, two pair and one pair, all built on
/// an own card's rank.
fn sets(cards: &[Card; HAND_SIZE], anchors: &[usize; 2]) -> Option<(Category, Rank)> {
    // (matches among the other six cards, rank) per anchor
    let counted = anchors.map(|a| (occurrences(cards, cards[a].rank) - 1, cards[a].rank));

    if let Some(&(_, rank)) = counted.iter().find(|(m, _)| *m == 3) {
        return Some((Category::FourOfAKind, rank));
    }

    // more matches first, then the higher rank
    let (matches, primary) = counted.into_iter().max()?;
    if matches == 0 {
        return None;
    }

    let mut others = cards
        .iter()
        .filter(|c| c.rank != primary)
        .map(|c| occurrences(cards, c.rank));
    let category = if others
        .clone()
        .any(|occ| occ >= 3 || (matches == 2 && occ >= 2))
    {
        Category::FullHouse
    } else if matches == 2 {
        Category::ThreeOfAKind
    } else if others.any(|occ| occ == 2) {
        Category::TwoPair
    } else {
        Category::OnePair
    };
    Some((category, primary))
}
