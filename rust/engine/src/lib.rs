//! # holdem-engine: Texas Hold'em hand evaluation
//!
//! Decodes compact card ids, shuffles and deals a seeded deck, evaluates
//! seven-card hands and settles showdowns. Everything is synchronous and
//! deterministic for a given seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card codec: id `0..52` to (Rank, Suit) and back, card names
//! - [`deck`] - Four-pass shuffle with a dealer's cut, wrapping deal cursor
//! - [`hand`] - Hand evaluation (anchored and exhaustive strategies)
//! - [`showdown`] - Result ordering, co-winner detection, pot splitting
//! - [`table`] - Seats, phases, blinds and rounds
//! - [`fixtures`] - JSON-lines regression fixtures
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let own = [Card::own(Rank::Five, Suit::Clubs), Card::own(Rank::Five, Suit::Diamonds)];
//! let shared = [
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Five, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Three, Suit::Diamonds),
//!     Card::new(Rank::Four, Suit::Hearts),
//! ];
//! let result = evaluate(own, shared).unwrap();
//! assert_eq!(result.category, Category::FourOfAKind);
//! assert_eq!(result.high_card, Rank::Five);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal(7).unwrap(), b.deal(7).unwrap());
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use holdem_engine::table::{Table, TableConfig};
//!
//! let mut table = Table::new(TableConfig { seed: Some(7), ..TableConfig::default() });
//! table.sit(0, "alice").unwrap();
//! table.sit(3, "bob").unwrap();
//! table.start_round().unwrap();
//! table.deal().unwrap();
//! let outcome = table.showdown().unwrap();
//! assert!(!outcome.winners.is_empty());
//! table.next_round().unwrap();
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod fixtures;
pub mod hand;
pub mod showdown;
pub mod table;
