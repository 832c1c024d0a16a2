//! Seven-card hand evaluation.
//!
//! Two strategies share the same input checks and result type:
//!
//! - [`Strategy::Anchored`] walks the sorted cards starting from the
//!   player's own cards only. It reproduces the historical fixture files.
//! - [`Strategy::Exhaustive`] scores all 21 five-card subsets and keeps the
//!   best, so hands played entirely on the board are ranked correctly.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, CardId, Rank};
use crate::errors::{EngineError, HandDefect};

mod anchored;
mod exhaustive;

/// Number of private cards per player.
pub const HOLE_SIZE: usize = 2;
/// Number of shared cards on a full board.
pub const BOARD_SIZE: usize = 5;
/// Cards in an evaluated hand.
pub const HAND_SIZE: usize = HOLE_SIZE + BOARD_SIZE;

/// Hand categories, weakest first. The declaration order is the strength
/// order, so the derived `Ord` is the comparison key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    /// Player left the hand; loses to everything
    Folded,
    NoPair,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Folded,
        Category::NoPair,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Display name as written to fixture files.
    pub fn name(self) -> &'static str {
        match self {
            Category::Folded => "Folded",
            Category::NoPair => "No Pair",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of evaluating one player's seven cards.
///
/// Field order matters: the derived ordering compares category, then high
/// card, then kicker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub category: Category,
    /// Rank that defines the category (the trip's rank, a straight's top
    /// card, `LowAce` for a wheel)
    pub high_card: Rank,
    /// Secondary rank used to break ties
    pub kicker: Rank,
}

impl EvaluationResult {
    /// Result recorded for a player who folded.
    pub fn folded() -> Self {
        Self {
            category: Category::Folded,
            high_card: Rank::LowAce,
            kicker: Rank::LowAce,
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (high card {}, kicker {})",
            self.category,
            self.high_card.name(),
            self.kicker.name()
        )
    }
}

/// Which search the evaluator runs.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Runs anchored on the player's own cards (fixture compatible)
    #[default]
    Anchored,
    /// Best of all 21 five-card subsets
    Exhaustive,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Anchored => "anchored",
            Strategy::Exhaustive => "exhaustive",
        }
    }

    /// Evaluates two own cards against five shared cards.
    ///
    /// The `own` flag of the inputs is ignored: the position of a card in
    /// the call decides whether it is private or shared.
    ///
    /// # Errors
    ///
    /// [`EngineError::MalformedHand`] when the same card appears twice.
    pub fn evaluate(
        self,
        own: [Card; HOLE_SIZE],
        shared: [Card; BOARD_SIZE],
    ) -> Result<EvaluationResult, EngineError> {
        let hand = combine(own, shared)?;
        let result = match self {
            Strategy::Anchored => anchored::evaluate(&hand),
            Strategy::Exhaustive => exhaustive::evaluate(&hand),
        };
        debug!(strategy = self.as_str(), %result, "hand evaluated");
        Ok(result)
    }

    /// Evaluates a flat list of seven cards, using each card's `own` flag.
    pub fn evaluate_cards(self, cards: &[Card]) -> Result<EvaluationResult, EngineError> {
        if cards.len() != HAND_SIZE {
            return Err(HandDefect::CardCount(cards.len()).into());
        }
        let (own, shared): (Vec<Card>, Vec<Card>) = cards.iter().copied().partition(|c| c.own);
        let own: [Card; HOLE_SIZE] = own
            .try_into()
            .map_err(|v: Vec<Card>| HandDefect::OwnCardCount(v.len()))?;
        let shared: [Card; BOARD_SIZE] = shared
            .try_into()
            .map_err(|v: Vec<Card>| HandDefect::OwnCardCount(HAND_SIZE - v.len()))?;
        self.evaluate(own, shared)
    }

    /// Decodes and evaluates card ids.
    pub fn evaluate_ids(
        self,
        own: [CardId; HOLE_SIZE],
        shared: [CardId; BOARD_SIZE],
    ) -> Result<EvaluationResult, EngineError> {
        let own_cards = [Card::from_id(own[0], true)?, Card::from_id(own[1], true)?];
        let shared_cards = [
            Card::from_id(shared[0], false)?,
            Card::from_id(shared[1], false)?,
            Card::from_id(shared[2], false)?,
            Card::from_id(shared[3], false)?,
            Card::from_id(shared[4], false)?,
        ];
        self.evaluate(own_cards, shared_cards)
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anchored" => Ok(Strategy::Anchored),
            "exhaustive" => Ok(Strategy::Exhaustive),
            other => Err(format!(
                "unknown strategy '{}' (expected anchored or exhaustive)",
                other
            )),
        }
    }
}

/// Evaluates a hand with the default anchored strategy.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::{Card, Rank as R, Suit as S};
/// use holdem_engine::hand::{evaluate, Category};
///
/// let own = [Card::own(R::Ace, S::Spades), Card::own(R::King, S::Spades)];
/// let shared = [
///     Card::new(R::Queen, S::Spades),
///     Card::new(R::Jack, S::Spades),
///     Card::new(R::Ten, S::Spades),
///     Card::new(R::Two, S::Clubs),
///     Card::new(R::Three, S::Diamonds),
/// ];
/// let result = evaluate(own, shared).unwrap();
/// assert_eq!(result.category, Category::RoyalFlush);
/// assert_eq!(result.high_card, R::Ace);
/// ```
pub fn evaluate(
    own: [Card; HOLE_SIZE],
    shared: [Card; BOARD_SIZE],
) -> Result<EvaluationResult, EngineError> {
    Strategy::Anchored.evaluate(own, shared)
}

pub fn compare_hands(a: &EvaluationResult, b: &EvaluationResult) -> Ordering {
    a.category
        .cmp(&b.category)
        .then(a.high_card.cmp(&b.high_card))
        .then(a.kicker.cmp(&b.kicker))
}

/// Lays out own cards first, then shared, with the `own` flags normalized.
fn combine(
    own: [Card; HOLE_SIZE],
    shared: [Card; BOARD_SIZE],
) -> Result<[Card; HAND_SIZE], EngineError> {
    let mut hand = [own[0]; HAND_SIZE];
    for (i, card) in own.iter().enumerate() {
        hand[i] = card.with_own(true);
    }
    for (i, card) in shared.iter().enumerate() {
        hand[HOLE_SIZE + i] = card.with_own(false);
    }
    for (i, a) in hand.iter().enumerate() {
        if hand[i + 1..].iter().any(|b| a.same_card(b)) {
            return Err(HandDefect::Duplicate {
                rank: a.rank,
                suit: a.suit,
            }
            .into());
        }
    }
    Ok(hand)
}
