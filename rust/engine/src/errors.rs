use thiserror::Error;

use crate::cards::Card;

/// Rejected evaluator input. Returned before any evaluation work happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Expected 2 hole cards, got {actual}")]
    HoleCardCount { actual: usize },
    #[error("Expected 0 or 5 community cards, got {actual}")]
    BoardCardCount { actual: usize },
    #[error("Card {card} appears more than once")]
    DuplicateCard { card: Card },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid card notation: {0:?}")]
pub struct ParseCardError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
