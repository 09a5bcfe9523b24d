//! Best-hand evaluation for two hole cards against an empty or full board.
//!
//! Post-flop hands are classified by an ordered chain of classifiers, from
//! straight flush down to one pair, with high card as the fallback. The
//! first classifier that matches decides the hand, so a seven card set that
//! satisfies several categories is always reported as the strongest one.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::cards::{Card, Rank};
use crate::errors::EvalError;

/// Positional base of the score encoding. Must exceed the Ace value (14).
pub const SCORE_BASE: u32 = 15;

const WHEEL: [u8; 5] = [5, 4, 3, 2, 14];

/// The ten hand categories, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRank {
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }

    /// Frequency of the category as the best hand out of seven cards.
    pub fn probability(self) -> &'static str {
        match self {
            HandRank::HighCard => "50.1%",
            HandRank::Pair => "43.8%",
            HandRank::TwoPair => "23.5%",
            HandRank::ThreeOfAKind => "4.83%",
            HandRank::Straight => "4.62%",
            HandRank::Flush => "3.03%",
            HandRank::FullHouse => "2.60%",
            HandRank::FourOfAKind => "0.168%",
            HandRank::StraightFlush => "0.0279%",
            HandRank::RoyalFlush => "0.0032%",
        }
    }

    /// All categories, strongest first.
    pub fn all() -> [HandRank; 10] {
        [
            HandRank::RoyalFlush,
            HandRank::StraightFlush,
            HandRank::FourOfAKind,
            HandRank::FullHouse,
            HandRank::Flush,
            HandRank::Straight,
            HandRank::ThreeOfAKind,
            HandRank::TwoPair,
            HandRank::Pair,
            HandRank::HighCard,
        ]
    }
}

/// How a card should be shown once the winning hand is revealed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CardHighlight {
    /// Part of the named combination
    Winner,
    /// Fills the best five but is not part of the combination
    Kicker,
    /// Not used by the best five
    Dimmed,
}

/// Result of evaluating one hand against a board.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandEvaluation {
    /// Hand category
    pub rank: HandRank,
    /// Category and kickers packed into one comparable number
    pub score: u32,
    /// Best five cards (only two pre-flop), core first then kickers, by significance
    pub winning_cards: Vec<Card>,
    /// The cards forming the combination itself, without kickers
    pub core_cards: Vec<Card>,
}

impl HandEvaluation {
    fn new(rank: HandRank, winning_cards: Vec<Card>, core_cards: Vec<Card>) -> Self {
        Self {
            rank,
            score: score(rank, &winning_cards),
            winning_cards,
            core_cards,
        }
    }

    /// Display name; a pair made only from the hole cards is a pocket pair.
    pub fn name(&self) -> &'static str {
        if self.rank == HandRank::Pair && self.winning_cards.len() == 2 {
            "Pocket Pair"
        } else {
            self.rank.name()
        }
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.winning_cards.contains(card)
    }

    pub fn is_core(&self, card: &Card) -> bool {
        self.core_cards.contains(card)
    }

    pub fn highlight(&self, card: &Card) -> CardHighlight {
        if self.is_core(card) {
            CardHighlight::Winner
        } else if self.contains(card) {
            CardHighlight::Kicker
        } else {
            CardHighlight::Dimmed
        }
    }
}

/// Orders two evaluations by hand strength.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.score.cmp(&b.score)
}

/// Packs `rank` and up to five card values into one number:
/// `rank * 15^5 + sum(value_i * 15^(4 - i))`.
///
/// The card part is at most `15^5 - 1`, so a higher rank always wins.
pub fn score(rank: HandRank, winning_cards: &[Card]) -> u32 {
    let base = rank.ordinal() * SCORE_BASE.pow(5);
    winning_cards
        .iter()
        .take(5)
        .enumerate()
        .fold(base, |acc, (i, c)| {
            acc + u32::from(c.value()) * SCORE_BASE.pow(4 - i as u32)
        })
}

/// Evaluates the best hand for `hole` (exactly 2 cards) against `board`
/// (0 or 5 cards).
///
/// # Errors
///
/// Returns [`EvalError`] for a wrong hole or board card count, or when a
/// card appears more than once.
///
/// # Examples
///
/// ```
/// use pokerdrill_engine::cards::parse_cards;
/// use pokerdrill_engine::hand::{evaluate, HandRank};
///
/// let hole = parse_cards("As Ks").unwrap();
/// let board = parse_cards("Qs Js Ts 3h 2d").unwrap();
/// let eval = evaluate(&hole, &board).unwrap();
/// assert_eq!(eval.rank, HandRank::RoyalFlush);
/// assert_eq!(eval.core_cards, eval.winning_cards);
/// ```
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<HandEvaluation, EvalError> {
    validate(hole, board).inspect_err(|e| warn!(error = %e, "rejected evaluation input"))?;

    let eval = if board.is_empty() {
        evaluate_preflop(hole[0], hole[1])
    } else {
        let mut cards: Vec<Card> = hole.iter().chain(board).copied().collect();
        // stable, so equal ranks keep dealing order
        cards.sort_by(|a, b| b.value().cmp(&a.value()));
        evaluate_sorted(&cards)
    };
    trace!(rank = ?eval.rank, score = eval.score, "evaluated hand");
    Ok(eval)
}

fn validate(hole: &[Card], board: &[Card]) -> Result<(), EvalError> {
    if hole.len() != 2 {
        return Err(EvalError::HoleCardCount { actual: hole.len() });
    }
    if !matches!(board.len(), 0 | 5) {
        return Err(EvalError::BoardCardCount {
            actual: board.len(),
        });
    }
    let mut seen = HashSet::with_capacity(7);
    for &card in hole.iter().chain(board) {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard { card });
        }
    }
    Ok(())
}

fn evaluate_preflop(a: Card, b: Card) -> HandEvaluation {
    let (high, low) = if b.value() > a.value() { (b, a) } else { (a, b) };
    let winning = vec![high, low];
    if a.rank == b.rank {
        HandEvaluation::new(HandRank::Pair, winning.clone(), winning)
    } else {
        HandEvaluation::new(HandRank::HighCard, winning, vec![high])
    }
}

type Classifier = fn(&[Card]) -> Option<HandEvaluation>;

// Strongest first; the first match wins.
const CLASSIFIERS: [Classifier; 8] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
];

/// `cards` must be sorted by descending rank value.
fn evaluate_sorted(cards: &[Card]) -> HandEvaluation {
    CLASSIFIERS
        .iter()
        .find_map(|classify| classify(cards))
        .unwrap_or_else(|| high_card(cards))
}

fn straight_flush(cards: &[Card]) -> Option<HandEvaluation> {
    let suited = detect_flush(cards)?;
    detect_straight(cards)?;
    let run = detect_straight(&suited)?;
    let rank = if run.first()?.rank == Rank::Ace {
        HandRank::RoyalFlush
    } else {
        HandRank::StraightFlush
    };
    Some(HandEvaluation::new(rank, run.clone(), run))
}

fn four_of_a_kind(cards: &[Card]) -> Option<HandEvaluation> {
    let quads = detect_n_of_a_kind(cards, 4)?;
    Some(HandEvaluation::new(
        HandRank::FourOfAKind,
        fill_kickers(&quads, cards),
        quads,
    ))
}

fn full_house(cards: &[Card]) -> Option<HandEvaluation> {
    let trips = detect_n_of_a_kind(cards, 3)?;
    let pair = detect_n_of_a_kind(&without(cards, &trips), 2)?;
    let hand: Vec<Card> = trips.into_iter().chain(pair).collect();
    Some(HandEvaluation::new(HandRank::FullHouse, hand.clone(), hand))
}

fn flush(cards: &[Card]) -> Option<HandEvaluation> {
    let suited = detect_flush(cards)?;
    let top: Vec<Card> = suited.into_iter().take(5).collect();
    Some(HandEvaluation::new(HandRank::Flush, top.clone(), top))
}

fn straight(cards: &[Card]) -> Option<HandEvaluation> {
    let run = detect_straight(cards)?;
    Some(HandEvaluation::new(HandRank::Straight, run.clone(), run))
}

fn three_of_a_kind(cards: &[Card]) -> Option<HandEvaluation> {
    let trips = detect_n_of_a_kind(cards, 3)?;
    Some(HandEvaluation::new(
        HandRank::ThreeOfAKind,
        fill_kickers(&trips, cards),
        trips,
    ))
}

fn two_pair(cards: &[Card]) -> Option<HandEvaluation> {
    let high = detect_n_of_a_kind(cards, 2)?;
    let low = detect_n_of_a_kind(&without(cards, &high), 2)?;
    let pairs: Vec<Card> = high.into_iter().chain(low).collect();
    Some(HandEvaluation::new(
        HandRank::TwoPair,
        fill_kickers(&pairs, cards),
        pairs,
    ))
}

fn one_pair(cards: &[Card]) -> Option<HandEvaluation> {
    let pair = detect_n_of_a_kind(cards, 2)?;
    Some(HandEvaluation::new(
        HandRank::Pair,
        fill_kickers(&pair, cards),
        pair,
    ))
}

fn high_card(cards: &[Card]) -> HandEvaluation {
    let best: Vec<Card> = cards.iter().take(5).copied().collect();
    let top = best.first().copied().into_iter().collect();
    HandEvaluation::new(HandRank::HighCard, best, top)
}

/// Cards of the first suit holding five or more, in input order.
fn detect_flush(cards: &[Card]) -> Option<Vec<Card>> {
    crate::cards::all_suits().into_iter().find_map(|suit| {
        let suited: Vec<Card> = cards.iter().filter(|c| c.suit == suit).copied().collect();
        (suited.len() >= 5).then_some(suited)
    })
}

/// Highest five-card run, one card per rank, highest first. The wheel comes
/// back as 5-4-3-2-A.
fn detect_straight(cards: &[Card]) -> Option<Vec<Card>> {
    let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();

    let run = values
        .windows(5)
        .find(|w| w[0] - w[4] == 4)
        .map(<[u8]>::to_vec)
        .or_else(|| {
            WHEEL
                .iter()
                .all(|v| values.contains(v))
                .then(|| WHEEL.to_vec())
        })?;

    run.iter()
        .map(|&v| cards.iter().find(|c| c.value() == v).copied())
        .collect()
}

/// The first `n` cards of the highest rank appearing at least `n` times.
fn detect_n_of_a_kind(cards: &[Card], n: usize) -> Option<Vec<Card>> {
    let mut counts = [0usize; 15];
    for c in cards {
        counts[c.value() as usize] += 1;
    }
    let value = (2..=14u8).rev().find(|&v| counts[v as usize] >= n)?;
    Some(
        cards
            .iter()
            .filter(|c| c.value() == value)
            .take(n)
            .copied()
            .collect(),
    )
}

/// `cards` minus the exact cards in `used`; other cards of the same rank stay.
fn without(cards: &[Card], used: &[Card]) -> Vec<Card> {
    cards.iter().filter(|c| !used.contains(c)).copied().collect()
}

/// Pads `core` to five cards with the highest unused cards.
fn fill_kickers(core: &[Card], cards: &[Card]) -> Vec<Card> {
    let need = 5usize.saturating_sub(core.len());
    core.iter()
        .copied()
        .chain(without(cards, core).into_iter().take(need))
        .take(5)
        .collect()
}
