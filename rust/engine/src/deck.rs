use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, CardId, DECK_SIZE};
use crate::errors::EngineError;

/// Number of swap passes per shuffle; the cut happens before the last one.
pub const SHUFFLE_PASSES: usize = 4;

/// Highest position a swap pass may draw from.
const SWAP_LIMIT: usize = DECK_SIZE - 2;

/// Inclusive bounds of the cut point, a band around the midpoint.
const CUT_MIN: usize = 22;
const CUT_MAX: usize = 28;

/// A 52-card deck of ids with a wrapping deal cursor.
///
/// The deck owns a single ChaCha20 generator for its whole lifetime, so two
/// decks built with the same seed produce the same sequence of shuffles.
#[derive(Debug, Clone)]
pub struct Deck {
    ids: [CardId; DECK_SIZE],
    position: usize,
    rng: ChaCha20Rng,
    seed: u64,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            ids: full_deck(),
            position: 0,
            rng,
            seed,
        }
    }

    /// A deck seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// The seed the generator was built from, for reproducing a run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Randomizes the order of the ids and rewinds the deal cursor.
    ///
    /// Runs [`SHUFFLE_PASSES`] swap passes: position `i` (for `i` in `0..=50`)
    /// is swapped with a position drawn uniformly from `i..=50`. The deck is
    /// cut before the final pass.
    pub fn shuffle(&mut self) {
        for pass in 0..SHUFFLE_PASSES {
            if pass == SHUFFLE_PASSES - 1 {
                self.cut();
            }
            for i in 0..=SWAP_LIMIT {
                let j = self.rng.random_range(i..=SWAP_LIMIT);
                self.ids.swap(i, j);
            }
        }
        self.position = 0;
        debug!(seed = self.seed, "deck shuffled");
    }

    /// Cuts the deck like a dealer would: the cards after the cut point move
    /// to the front and the cards before it go to the back.
    ///
    /// Returns the cut point.
    pub fn cut(&mut self) -> usize {
        let point = self.rng.random_range(CUT_MIN..=CUT_MAX);
        self.ids.rotate_left(point);
        debug!(cut_point = point, "deck cut");
        point
    }

    /// Takes the card under the cursor. The cursor wraps back to the top
    /// after the 52nd card.
    pub fn next_card(&mut self) -> CardId {
        let id = self.ids[self.position];
        self.position = (self.position + 1) % DECK_SIZE;
        id
    }

    /// Takes `n` cards in order.
    ///
    /// # Errors
    ///
    /// [`EngineError::DeckExhausted`] when fewer than `n` cards remain before
    /// the cursor would wrap; the cursor is left untouched.
    pub fn deal(&mut self, n: usize) -> Result<Vec<CardId>, EngineError> {
        if n > self.remaining() {
            return Err(EngineError::DeckExhausted {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let dealt = self.ids[self.position..self.position + n].to_vec();
        self.position = (self.position + n) % DECK_SIZE;
        debug!(count = n, cursor = self.position, "cards dealt");
        Ok(dealt)
    }

    pub fn ids(&self) -> &[CardId; DECK_SIZE] {
        &self.ids
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deck_is_in_factory_order() {
        let deck = Deck::new_with_seed(9);
        assert_eq!(deck.ids(), &full_deck());
        assert_eq!(deck.remaining(), DECK_SIZE);
    }

    #[test]
    fn deal_to_the_bottom_wraps_cursor() {
        let mut deck = Deck::new_with_seed(3);
        deck.deal(50).unwrap();
        assert_eq!(deck.remaining(), 2);
        deck.deal(2).unwrap();
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn next_card_wraps_silently() {
        let mut deck = Deck::new_with_seed(3);
        deck.deal(51).unwrap();
        assert_eq!(deck.next_card(), 51);
        assert_eq!(deck.next_card(), 0);
    }

    #[test]
    fn cut_point_stays_in_band() {
        let mut deck = Deck::new_with_seed(11);
        for _ in 0..100 {
            let p = deck.cut();
            assert!((CUT_MIN..=CUT_MAX).contains(&p));
        }
    }
}
