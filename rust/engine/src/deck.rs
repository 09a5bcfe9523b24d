use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DealError;

/// A 52-card deck dealt from the top, shuffled with a seedable ChaCha20 RNG.
///
/// Cards handed out between two shuffles never repeat.
///
/// # Examples
///
/// ```
/// use pokerdrill_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// deck.shuffle();
/// let hole = deck.deal(2).unwrap();
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.remaining(), 50);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Deck seeded from the thread RNG.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Gathers all 52 cards back and shuffles them.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals `n` cards, or nothing if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DealError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
