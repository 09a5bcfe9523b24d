use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::{DealError, EvalError};
use crate::hand::{evaluate, CardHighlight, HandEvaluation};

/// One dealt hand: an id, two hole cards and, once computed, its evaluation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerHand {
    /// Seat index in dealing order
    pub id: usize,
    /// The two hole cards
    pub cards: [Card; 2],
    /// Best hand against the round's board, absent until evaluated
    pub evaluation: Option<HandEvaluation>,
}

impl PlayerHand {
    pub fn new(id: usize, cards: [Card; 2]) -> Self {
        Self {
            id,
            cards,
            evaluation: None,
        }
    }

    pub fn evaluate(&mut self, board: &[Card]) -> Result<&HandEvaluation, EvalError> {
        let eval = evaluate(&self.cards, board)?;
        Ok(self.evaluation.insert(eval))
    }

    pub fn score(&self) -> Option<u32> {
        self.evaluation.as_ref().map(|e| e.score)
    }
}

/// Outcome of a guess at the strongest hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    /// Wrong hand picked, or no pick at all
    Wrong { winner: usize },
}

/// A board and the hands dealt against it, all evaluated.
///
/// Deserializing goes through [`Round::new`], so stored evaluations are
/// recomputed and shared cards are rejected.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundData")]
pub struct Round {
    number: u64,
    board: Vec<Card>,
    hands: Vec<PlayerHand>,
}

#[derive(Deserialize)]
struct RoundData {
    number: u64,
    board: Vec<Card>,
    hands: Vec<PlayerHand>,
}

impl TryFrom<RoundData> for Round {
    type Error = EvalError;

    fn try_from(data: RoundData) -> Result<Self, Self::Error> {
        Round::new(data.number, data.board, data.hands)
    }
}

impl Round {
    /// Evaluates every hand against `board`.
    ///
    /// # Errors
    ///
    /// Fails if any hand is malformed against the board or if a card is
    /// shared between hands.
    pub fn new(
        number: u64,
        board: Vec<Card>,
        mut hands: Vec<PlayerHand>,
    ) -> Result<Self, EvalError> {
        let mut seen: HashSet<Card> = board.iter().copied().collect();
        for &card in hands.iter().flat_map(|h| h.cards.iter()) {
            if !seen.insert(card) {
                return Err(EvalError::DuplicateCard { card });
            }
        }
        evaluate_all(&mut hands, &board)?;
        Ok(Self {
            number,
            board,
            hands,
        })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn hands(&self) -> &[PlayerHand] {
        &self.hands
    }

    /// Highest scoring hand; on an exact tie the one dealt first.
    pub fn winner(&self) -> Option<&PlayerHand> {
        self.hands.iter().fold(None, |best, hand| match best {
            Some(b) if b.score() >= hand.score() => Some(b),
            _ => Some(hand),
        })
    }

    /// Every hand sharing the top score.
    pub fn winners(&self) -> Vec<&PlayerHand> {
        let top = self.winner().and_then(PlayerHand::score);
        self.hands.iter().filter(|h| h.score() == top).collect()
    }

    /// Judges a pick against the winner. `None` is a timed-out guess.
    /// Returns `None` for a round without hands.
    pub fn judge(&self, guess: Option<usize>) -> Option<Verdict> {
        let winner = self.winner()?.id;
        Some(if guess == Some(winner) {
            Verdict::Correct
        } else {
            Verdict::Wrong { winner }
        })
    }

    /// How `card` shows against the winning hand.
    pub fn highlight(&self, card: &Card) -> CardHighlight {
        self.winner()
            .and_then(|w| w.evaluation.as_ref())
            .map_or(CardHighlight::Dimmed, |e| e.highlight(card))
    }
}

#[cfg(feature = "parallel")]
fn evaluate_all(hands: &mut [PlayerHand], board: &[Card]) -> Result<(), EvalError> {
    use rayon::prelude::*;
    hands
        .par_iter_mut()
        .try_for_each(|h| h.evaluate(board).map(|_| ()))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(hands: &mut [PlayerHand], board: &[Card]) -> Result<(), EvalError> {
    hands
        .iter_mut()
        .try_for_each(|h| h.evaluate(board).map(|_| ()))
}

/// Deals drill rounds from one deck.
///
/// # Examples
///
/// ```
/// use pokerdrill_engine::config::TableConfig;
/// use pokerdrill_engine::table::Table;
///
/// let config = TableConfig { opponents: 3, seed: Some(7), ..TableConfig::default() };
/// let mut table = Table::new(config);
/// let round = table.deal_round().unwrap();
/// assert_eq!(round.board().len(), 5);
/// assert_eq!(round.hands().len(), 4);
/// assert!(round.winner().is_some());
/// ```
#[derive(Debug)]
pub struct Table {
    config: TableConfig,
    deck: Deck,
    rounds: u64,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let deck = config.seed.map_or_else(Deck::new, Deck::new_with_seed);
        Self {
            config,
            deck,
            rounds: 0,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Shuffles, deals the board then one hand per seat, and evaluates them.
    pub fn deal_round(&mut self) -> Result<Round, DealError> {
        self.deck.shuffle();
        let board = if self.config.hide_board {
            Vec::new()
        } else {
            self.deck.deal(5)?
        };
        let hands = (0..self.config.hands())
            .map(|id| {
                let hole = self.deck.deal(2)?;
                Ok(PlayerHand::new(id, [hole[0], hole[1]]))
            })
            .collect::<Result<Vec<_>, DealError>>()?;

        self.rounds += 1;
        let round = Round::new(self.rounds, board, hands)?;
        debug!(
            round = round.number,
            hands = round.hands.len(),
            board = round.board.len(),
            winner = ?round.winner().map(|w| w.id),
            "dealt round"
        );
        Ok(round)
    }
}
