//! A table of up to ten seats that plays rounds from seating to showdown.
//!
//! The table owns its deck and all round state; nothing is global. Rounds
//! move through an explicit [`Phase`] transition table, and every operation
//! checks the phase before it touches any state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::{EvaluationResult, Strategy, BOARD_SIZE, HOLE_SIZE};
use crate::showdown::{determine_winners, split_pot, Payout};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const STARTING_CHIPS: u32 = 500;

/// Table settings. `seed: None` seeds the deck from entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub seed: Option<u64>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_chips: u32,
    pub strategy: Strategy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            small_blind: 5,
            big_blind: 10,
            starting_chips: STARTING_CHIPS,
            strategy: Strategy::default(),
        }
    }
}

/// Where a table is in its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players may sit down and leave
    Seating,
    /// Dealer chosen and blinds posted
    RoundStart,
    /// Hole cards and board are out
    Dealt,
    /// Pot settled; cards still visible
    Showdown,
}

impl Phase {
    /// The only legal successor of each phase.
    pub fn successor(self) -> Phase {
        match self {
            Phase::Seating => Phase::RoundStart,
            Phase::RoundStart => Phase::Dealt,
            Phase::Dealt => Phase::Showdown,
            Phase::Showdown => Phase::Seating,
        }
    }

    pub fn can_advance_to(self, next: Phase) -> bool {
        self.successor() == next
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    chips: u32,
    hole: Option<[Card; HOLE_SIZE]>,
    in_hand: bool,
    folded: bool,
}

impl Player {
    fn new(name: &str, chips: u32) -> Self {
        Self {
            name: name.to_string(),
            chips,
            hole: None,
            in_hand: false,
            folded: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole(&self) -> Option<[Card; HOLE_SIZE]> {
        self.hole
    }
    /// Dealt into the current round.
    pub fn in_hand(&self) -> bool {
        self.in_hand
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    fn is_active(&self) -> bool {
        self.in_hand && !self.folded
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SeatResult {
    pub seat: usize,
    pub result: EvaluationResult,
}

/// What happened at showdown. `results` and `winners` are in payout
/// priority order, clockwise from the seat left of the dealer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowdownOutcome {
    pub pot: u32,
    pub results: Vec<SeatResult>,
    pub winners: Vec<usize>,
    pub payouts: Vec<Payout>,
}

#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    deck: Deck,
    seats: Vec<Option<Player>>,
    phase: Phase,
    dealer: Option<usize>,
    board: Option<[Card; BOARD_SIZE]>,
    pot: u32,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let deck = match config.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::from_entropy(),
        };
        Self {
            config,
            deck,
            seats: vec![None; MAX_PLAYERS],
            phase: Phase::Seating,
            dealer: None,
            board: None,
            pot: 0,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn dealer(&self) -> Option<usize> {
        self.dealer
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn board(&self) -> Option<[Card; BOARD_SIZE]> {
        self.board
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.seats.get(seat).and_then(Option::as_ref)
    }

    /// Occupied seats with their players, in seat order.
    pub fn players(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| (i, p)))
    }

    pub fn seated(&self) -> usize {
        self.players().count()
    }

    pub fn sit(&mut self, seat: usize, name: &str) -> Result<(), EngineError> {
        self.expect_phase(Phase::Seating)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidPlayerName);
        }
        match self.seats.get_mut(seat) {
            None => Err(EngineError::InvalidSeat {
                seat,
                max: MAX_PLAYERS,
            }),
            Some(Some(_)) => Err(EngineError::SeatTaken(seat)),
            Some(slot) => {
                *slot = Some(Player::new(name, self.config.starting_chips));
                info!(seat, name, "player seated");
                Ok(())
            }
        }
    }

    pub fn leave(&mut self, seat: usize) -> Result<Player, EngineError> {
        self.expect_phase(Phase::Seating)?;
        let slot = self.seats.get_mut(seat).ok_or(EngineError::InvalidSeat {
            seat,
            max: MAX_PLAYERS,
        })?;
        let player = slot.take().ok_or(EngineError::EmptySeat(seat))?;
        info!(seat, name = player.name(), "player left");
        Ok(player)
    }

    /// Picks the dealer, marks who plays this round and posts the blinds.
    ///
    /// The first round draws one card per player: highest rank deals, suit
    /// breaks ties. Later rounds pass the button clockwise.
    ///
    /// # Errors
    ///
    /// [`EngineError::InsufficientPlayers`] when fewer than two seated
    /// players have chips. The table is left exactly as it was.
    pub fn start_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Seating)?;
        let playing: Vec<usize> = self
            .players()
            .filter(|(_, p)| p.chips > 0)
            .map(|(i, _)| i)
            .collect();
        if playing.len() < MIN_PLAYERS {
            warn!(
                seated = playing.len(),
                minimum = MIN_PLAYERS,
                "round refused, add at least two players"
            );
            return Err(EngineError::InsufficientPlayers {
                seated: playing.len(),
                minimum: MIN_PLAYERS,
            });
        }

        let dealer = match self.dealer {
            None => self.opening_draw(&playing)?,
            Some(prev) => next_in(&playing, prev),
        };

        for &seat in &playing {
            if let Some(p) = self.seats[seat].as_mut() {
                p.in_hand = true;
                p.folded = false;
                p.hole = None;
            }
        }
        self.dealer = Some(dealer);
        self.board = None;

        let (small, big) = if playing.len() == 2 {
            (dealer, next_in(&playing, dealer))
        } else {
            let small = next_in(&playing, dealer);
            (small, next_in(&playing, small))
        };
        let posted_small = self.post(small, self.config.small_blind);
        let posted_big = self.post(big, self.config.big_blind);

        self.advance(Phase::RoundStart)?;
        info!(
            dealer,
            players = playing.len(),
            small_blind = posted_small,
            big_blind = posted_big,
            pot = self.pot,
            "round started"
        );
        Ok(())
    }

    /// Shuffles and deals two hole cards to every player, one at a time
    /// starting left of the dealer, then the five board cards.
    pub fn deal(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::RoundStart)?;
        let order = self.priority_order();
        let n = order.len();

        self.deck.shuffle();
        let ids = self.deck.deal(HOLE_SIZE * n + BOARD_SIZE)?;
        let card = |i: usize, own: bool| Card::from_id(ids[i], own);

        let mut holes = Vec::with_capacity(n);
        for k in 0..n {
            holes.push([card(k, true)?, card(n + k, true)?]);
        }
        let b = HOLE_SIZE * n;
        let board = [
            card(b, false)?,
            card(b + 1, false)?,
            card(b + 2, false)?,
            card(b + 3, false)?,
            card(b + 4, false)?,
        ];

        for (&seat, hole) in order.iter().zip(holes) {
            if let Some(p) = self.seats[seat].as_mut() {
                p.hole = Some(hole);
            }
        }
        self.board = Some(board);
        self.advance(Phase::Dealt)?;
        debug!(players = n, "hands dealt");
        Ok(())
    }

    pub fn fold(&mut self, seat: usize) -> Result<(), EngineError> {
        self.expect_phase(Phase::Dealt)?;
        if seat >= MAX_PLAYERS {
            return Err(EngineError::InvalidSeat {
                seat,
                max: MAX_PLAYERS,
            });
        }
        let active = self.players().filter(|(_, p)| p.is_active()).count();
        let player = self.seats[seat].as_mut().ok_or(EngineError::EmptySeat(seat))?;
        if !player.in_hand {
            return Err(EngineError::NotInHand(seat));
        }
        if player.folded {
            return Err(EngineError::AlreadyFolded(seat));
        }
        if active <= 1 {
            return Err(EngineError::LastActivePlayer(seat));
        }
        player.folded = true;
        info!(seat, "player folded");
        Ok(())
    }

    /// Evaluates every player in the round, settles the pot and credits the
    /// winners. Folded players are recorded with the Folded result.
    pub fn showdown(&mut self) -> Result<ShowdownOutcome, EngineError> {
        self.expect_phase(Phase::Dealt)?;
        let board = self.board.ok_or(EngineError::WrongPhase {
            expected: Phase::Dealt,
            actual: self.phase,
        })?;
        let strategy = self.config.strategy;

        let mut results = Vec::new();
        for seat in self.priority_order() {
            let Some(p) = self.seats[seat].as_ref() else {
                continue;
            };
            let result = match (p.folded, p.hole) {
                (false, Some(hole)) => strategy.evaluate(hole, board)?,
                _ => EvaluationResult::folded(),
            };
            results.push(SeatResult { seat, result });
        }

        let evaluated: Vec<EvaluationResult> = results.iter().map(|r| r.result).collect();
        let winners: Vec<usize> = determine_winners(&evaluated)
            .into_iter()
            .map(|i| results[i].seat)
            .collect();
        let pot = self.pot;
        let payouts = split_pot(pot, &winners);
        for payout in &payouts {
            if let Some(p) = self.seats[payout.seat].as_mut() {
                p.chips += payout.amount;
            }
        }
        self.pot = 0;
        self.advance(Phase::Showdown)?;
        info!(pot, winners = ?winners, "showdown settled");

        Ok(ShowdownOutcome {
            pot,
            results,
            winners,
            payouts,
        })
    }

    /// Clears the round and reopens the table for seating.
    pub fn next_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Showdown)?;
        for p in self.seats.iter_mut().flatten() {
            p.hole = None;
            p.in_hand = false;
            p.folded = false;
        }
        self.board = None;
        self.advance(Phase::Seating)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn advance(&mut self, next: Phase) -> Result<(), EngineError> {
        if !self.phase.can_advance_to(next) {
            return Err(EngineError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }

    /// Highest card deals; the deck is reshuffled before the draw.
    fn opening_draw(&mut self, playing: &[usize]) -> Result<usize, EngineError> {
        self.deck.shuffle();
        let mut best: Option<(Card, usize)> = None;
        for &seat in playing {
            let card = Card::from_id(self.deck.next_card(), false)?;
            debug!(seat, card = %card, "opening draw");
            if best.map_or(true, |(b, _)| (card.rank, card.suit) > (b.rank, b.suit)) {
                best = Some((card, seat));
            }
        }
        let dealer = best.map_or(playing[0], |(_, seat)| seat);
        info!(dealer, "opening dealer chosen");
        Ok(dealer)
    }

    fn post(&mut self, seat: usize, amount: u32) -> u32 {
        let Some(p) = self.seats[seat].as_mut() else {
            return 0;
        };
        let posted = amount.min(p.chips);
        p.chips -= posted;
        self.pot += posted;
        posted
    }

    /// Seats in the round, clockwise from the one left of the dealer.
    fn priority_order(&self) -> Vec<usize> {
        let dealer = self.dealer.unwrap_or(MAX_PLAYERS - 1);
        (1..=MAX_PLAYERS)
            .map(|k| (dealer + k) % MAX_PLAYERS)
            .filter(|&s| self.player(s).is_some_and(Player::in_hand))
            .collect()
    }
}

/// The first seat in `seats` (sorted ascending) clockwise after `from`.
fn next_in(seats: &[usize], from: usize) -> usize {
    seats
        .iter()
        .copied()
        .find(|&s| s > from)
        .unwrap_or(seats[0])
}
