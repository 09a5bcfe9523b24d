//! # pokerdrill-engine: Poker Hand Evaluation Core
//!
//! Evaluates two hole cards against an empty or five card board, finds the
//! best five card hand, scores it on a single comparable number, and tells
//! apart the cards forming the combination from the kickers. Around the
//! evaluator sit the pieces a "spot the winning hand" drill needs: a seeded
//! deck, round dealing with winner resolution, and table configuration.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation parsing
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand evaluation, scoring and card highlighting
//! - [`table`] - Round dealing, winner resolution and guess judging
//! - [`config`] - Table settings from defaults, TOML and environment
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerdrill_engine::cards::{parse_cards, Card};
//! use pokerdrill_engine::hand::{evaluate, HandRank};
//!
//! let hole = parse_cards("7c 7d").unwrap();
//! let board = parse_cards("7h 7s 2c 9d Kh").unwrap();
//! let eval = evaluate(&hole, &board).unwrap();
//!
//! assert_eq!(eval.rank, HandRank::FourOfAKind);
//! assert_eq!(eval.core_cards.len(), 4);
//! assert_eq!(eval.winning_cards[4], "Kh".parse::<Card>().unwrap());
//! ```
//!
//! ## Comparing Hands
//!
//! Scores alone order hands: a higher category always scores higher, and
//! within a category the kickers decide.
//!
//! ```rust
//! use pokerdrill_engine::cards::parse_cards;
//! use pokerdrill_engine::hand::evaluate;
//!
//! let board = parse_cards("Qs 9h 5d 4c 2s").unwrap();
//! let pair = evaluate(&parse_cards("Qh 3c").unwrap(), &board).unwrap();
//! let high = evaluate(&parse_cards("Ah Kc").unwrap(), &board).unwrap();
//! assert!(pair.score > high.score);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod table;

pub use hand::{evaluate, HandEvaluation, HandRank};
