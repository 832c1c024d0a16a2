//! Card, hand and result formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal supports Unicode and fall back
//! to h d c s otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::hand::EvaluationResult;
use holdem_engine::showdown::Payout;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

/// Single-character rank (2-9, T, J, Q, K, A). A low ace prints as A.
pub fn format_rank(rank: &Rank) -> &'static str {
    match rank {
        Rank::LowAce | Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Bracketed, space separated cards: `[A♠ K♥ Q♦]`, or `[]`.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// `Royal Flush (high Ace, kicker King)`; a folded result prints as `Folded`.
pub fn format_result(result: &EvaluationResult) -> String {
    if result.category == holdem_engine::hand::Category::Folded {
        return result.category.name().to_string();
    }
    format!(
        "{} (high {}, kicker {})",
        result.category,
        result.high_card.name(),
        result.kicker.name()
    )
}

/// `seat 3 +15, seat 7 +15`, or `none`.
pub fn format_payouts(payouts: &[Payout]) -> String {
    if payouts.is_empty() {
        return "none".to_string();
    }
    payouts
        .iter()
        .map(|p| format!("seat {} +{}", p.seat, p.amount))
        .collect::<Vec<_>>()
        .join(", ")
}
