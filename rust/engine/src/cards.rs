use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Compact card identifier in `0..52`.
pub type CardId = u8;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no strength; the derived ordering is only used to break
/// ties in the opening-dealer draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs = 0,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn from_index(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// Represents the rank (face value) of a playing card.
///
/// `LowAce` never comes out of the codec: it only exists so an Ace can
/// play as the bottom card of the 5-4-3-2-A straight (the wheel).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace playing low (1)
    LowAce = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::LowAce),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// The rank directly above this one, if any.
    pub fn next(self) -> Option<Rank> {
        Rank::from_u8(self.value() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::LowAce => "LowAce",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    pub fn from_name(s: &str) -> Option<Rank> {
        (1..=14)
            .filter_map(Rank::from_u8)
            .find(|r| r.name().eq_ignore_ascii_case(s))
    }

    fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace | Rank::LowAce => 'A',
            r => char::from(b'0' + r.value()),
        }
    }

    fn from_symbol(s: &str) -> Option<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Some(Rank::Ace),
            "K" => Some(Rank::King),
            "Q" => Some(Rank::Queen),
            "J" => Some(Rank::Jack),
            "T" | "10" => Some(Rank::Ten),
            d if d.len() == 1 => d
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .and_then(Rank::from_u8),
            _ => None,
        }
    }
}

/// Decodes a card id into its rank and suit.
///
/// `rank = id mod 13 + 2` and `suit = id mod 4`; since 13 and 4 are coprime
/// every id in `0..52` maps to a distinct pair.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCardId`] when `id` is 52 or more.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::{decode, Rank, Suit};
///
/// assert_eq!(decode(0).unwrap(), (Rank::Two, Suit::Clubs));
/// assert_eq!(decode(12).unwrap(), (Rank::Ace, Suit::Clubs));
/// assert!(decode(52).is_err());
/// ```
pub fn decode(id: CardId) -> Result<(Rank, Suit), EngineError> {
    if id as usize >= DECK_SIZE {
        return Err(EngineError::InvalidCardId(id));
    }
    let rank = Rank::from_u8(id % 13 + 2).ok_or(EngineError::InvalidCardId(id))?;
    let suit = Suit::from_index(id % 4).ok_or(EngineError::InvalidCardId(id))?;
    Ok((rank, suit))
}

/// Inverse of [`decode`]. `LowAce` encodes as the Ace of the same suit.
pub fn encode(rank: Rank, suit: Suit) -> CardId {
    let rank = if rank == Rank::LowAce { Rank::Ace } else { rank };
    let r = rank.value() - 2;
    // 13 ≡ 1 (mod 4): each step of 13 moves the suit residue by one
    let k = (suit as u8 + 4 - r % 4) % 4;
    r + 13 * k
}

/// A decoded playing card.
///
/// `own` marks the evaluating player's hole cards; shared board cards carry
/// `false`. Two cards are the same physical card when rank and suit match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
    /// Whether this is one of the player's private cards
    #[serde(default)]
    pub own: bool,
}

impl Card {
    /// A shared (board) card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            own: false,
        }
    }

    /// A private (hole) card.
    pub fn own(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            own: true,
        }
    }

    pub fn from_id(id: CardId, own: bool) -> Result<Self, EngineError> {
        let (rank, suit) = decode(id)?;
        Ok(Self { rank, suit, own })
    }

    pub fn id(&self) -> CardId {
        encode(self.rank, self.suit)
    }

    pub fn with_own(self, own: bool) -> Self {
        Self { own, ..self }
    }

    pub fn same_card(&self, other: &Card) -> bool {
        self.id() == other.id()
    }

    /// Long name used in fixture files, e.g. `"Ace of Spades"`.
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// Two-character notation, e.g. `"As"`, `"Td"`.
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.letter())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Parses either the long form (`"Ace of Spades"`) or the short form
/// (`"As"`, `"10h"`). Parsed cards are shared cards.
impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || EngineError::InvalidCardName(s.to_string());

        if let Some((rank, suit)) = text.split_once(" of ") {
            let rank = Rank::from_name(rank.trim())
                .filter(|r| *r != Rank::LowAce)
                .ok_or_else(invalid)?;
            let suit = all_suits()
                .into_iter()
                .find(|x| x.name().eq_ignore_ascii_case(suit.trim()))
                .ok_or_else(invalid)?;
            return Ok(Card::new(rank, suit));
        }

        let mut chars = text.chars();
        let suit_char = chars.next_back().ok_or_else(invalid)?;
        let suit = all_suits()
            .into_iter()
            .find(|x| x.letter() == suit_char.to_ascii_lowercase())
            .ok_or_else(invalid)?;
        let rank = Rank::from_symbol(chars.as_str()).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All 52 ids in ascending order.
pub fn full_deck() -> [CardId; DECK_SIZE] {
    let mut ids = [0; DECK_SIZE];
    for (i, id) in ids.iter_mut().enumerate() {
        *id = i as CardId;
    }
    ids
}

/// Parses a whitespace or comma separated list of cards.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, EngineError> {
    if text.contains(" of ") {
        return text.split(',').map(str::parse).collect();
    }
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_inverts_decode_for_every_id() {
        for id in 0..DECK_SIZE as CardId {
            let (rank, suit) = decode(id).unwrap();
            assert_eq!(encode(rank, suit), id);
        }
    }

    #[test]
    fn low_ace_encodes_as_ace() {
        assert_eq!(
            encode(Rank::LowAce, Suit::Hearts),
            encode(Rank::Ace, Suit::Hearts)
        );
    }

    #[test]
    fn short_and_long_names_parse() {
        let a: Card = "As".parse().unwrap();
        let b: Card = "Ace of Spades".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!("10h".parse::<Card>().unwrap().rank, Rank::Ten);
        assert_eq!("Td".parse::<Card>().unwrap().short(), "Td");
        assert!("1s".parse::<Card>().is_err());
        assert!("LowAce of Spades".parse::<Card>().is_err());
        assert!("Zx".parse::<Card>().is_err());
    }

    #[test]
    fn parse_cards_accepts_both_list_forms() {
        let short = parse_cards("As, Ks Qs").unwrap();
        assert_eq!(short.len(), 3);
        let long = parse_cards("Ace of Spades, King of Spades").unwrap();
        assert_eq!(long, short[..2].to_vec());
    }
}
