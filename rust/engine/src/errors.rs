use thiserror::Error;

use crate::cards::{CardId, Rank, Suit};
use crate::table::Phase;

/// Why a set of cards could not be evaluated as a hand.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HandDefect {
    #[error("expected 7 cards, got {0}")]
    CardCount(usize),
    #[error("expected 2 own cards, got {0}")]
    OwnCardCount(usize),
    #[error("{rank:?} of {suit:?} appears more than once")]
    Duplicate { rank: Rank, suit: Suit },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card id: {0} (must be below 52)")]
    InvalidCardId(CardId),
    #[error("Invalid card name: {0:?}")]
    InvalidCardName(String),
    #[error("Malformed hand: {0}")]
    MalformedHand(#[from] HandDefect),
    #[error("Deck exhausted: requested {requested} cards, {remaining} left before wrapping")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Not enough players: {seated} seated, at least {minimum} required")]
    InsufficientPlayers { seated: usize, minimum: usize },
    #[error("Invalid player name: name must not be empty")]
    InvalidPlayerName,
    #[error("Invalid seat {seat} (table has {max} seats)")]
    InvalidSeat { seat: usize, max: usize },
    #[error("Seat {0} is already taken")]
    SeatTaken(usize),
    #[error("Seat {0} is empty")]
    EmptySeat(usize),
    #[error("Seat {0} is not in this round")]
    NotInHand(usize),
    #[error("Seat {0} has already folded")]
    AlreadyFolded(usize),
    #[error("Action requires phase {expected:?}, table is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("Invalid phase transition from {from:?} to {to:?}")]
    InvalidTransition { from: Phase, to: Phase },
    #[error("Seat {0} is the last active player and cannot fold")]
    LastActivePlayer(usize),
}
