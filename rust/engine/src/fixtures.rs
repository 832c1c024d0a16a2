//! Regression fixtures: one evaluated hand per line of JSON.
//!
//! ```text
//! {"id":1,"hole":["Jack of Spades","Five of Hearts"],"board":[...],"hand":"No Pair","highCard":"Jack","kicker":"Five"}
//! ```

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{EvaluationResult, Strategy, BOARD_SIZE, HAND_SIZE, HOLE_SIZE};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    /// Sequence number, starting at 1
    pub id: u32,
    /// Long card names, e.g. "Ace of Spades"
    pub hole: [String; HOLE_SIZE],
    pub board: [String; BOARD_SIZE],
    /// Category name, e.g. "Three of a Kind"
    pub hand: String,
    #[serde(rename = "highCard")]
    pub high_card: String,
    pub kicker: String,
}

impl FixtureRecord {
    pub fn from_hand(
        id: u32,
        hole: &[Card; HOLE_SIZE],
        board: &[Card; BOARD_SIZE],
        result: &EvaluationResult,
    ) -> Self {
        Self {
            id,
            hole: hole.each_ref().map(Card::name),
            board: board.each_ref().map(Card::name),
            hand: result.category.name().to_string(),
            high_card: result.high_card.name().to_string(),
            kicker: result.kicker.name().to_string(),
        }
    }

    /// Parses the recorded card names back into own and shared cards.
    pub fn cards(&self) -> Result<([Card; HOLE_SIZE], [Card; BOARD_SIZE]), EngineError> {
        let parse = |name: &String, own: bool| name.parse::<Card>().map(|c| c.with_own(own));
        let hole = [parse(&self.hole[0], true)?, parse(&self.hole[1], true)?];
        let board = [
            parse(&self.board[0], false)?,
            parse(&self.board[1], false)?,
            parse(&self.board[2], false)?,
            parse(&self.board[3], false)?,
            parse(&self.board[4], false)?,
        ];
        Ok((hole, board))
    }

    /// Whether `result` matches what this record says.
    pub fn matches(&self, result: &EvaluationResult) -> bool {
        self.hand == result.category.name()
            && self.high_card == result.high_card.name()
            && self.kicker == result.kicker.name()
    }
}

/// Deals and evaluates `count` hands lazily, one record per step. Each hand
/// reshuffles the deck and takes the top seven cards: two hole cards, then
/// five board cards.
pub fn generate(
    deck: &mut Deck,
    strategy: Strategy,
    count: u32,
) -> impl Iterator<Item = Result<FixtureRecord, EngineError>> + '_ {
    (1..=count).map(move |id| deal_record(deck, strategy, id))
}

fn deal_record(deck: &mut Deck, strategy: Strategy, id: u32) -> Result<FixtureRecord, EngineError> {
    deck.shuffle();
    let ids = deck.deal(HAND_SIZE)?;
    let hole = [Card::from_id(ids[0], true)?, Card::from_id(ids[1], true)?];
    let board = [
        Card::from_id(ids[2], false)?,
        Card::from_id(ids[3], false)?,
        Card::from_id(ids[4], false)?,
        Card::from_id(ids[5], false)?,
        Card::from_id(ids[6], false)?,
    ];
    let result = strategy.evaluate(hole, board)?;
    debug!(id, strategy = strategy.as_str(), "fixture generated");
    Ok(FixtureRecord::from_hand(id, &hole, &board, &result))
}

/// Writes fixture records as JSON lines, `\n` terminated.
pub struct FixtureWriter {
    writer: BufWriter<File>,
}

impl FixtureWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    /// Appends one record and flushes it, so a partial run leaves every
    /// finished record on disk.
    pub fn write(&mut self, record: &FixtureRecord) -> std::io::Result<()> {
        let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
