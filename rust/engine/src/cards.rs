use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseCardError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ordering for hand strength; they only decide flushes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    /// Lowercase notation letter: `s`, `h`, `d` or `c`.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    /// Parses a suit letter, ignoring case.
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the strength value used by hand evaluation (2..=14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
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
    /// Strength value of the rank, Two = 2 through Ace = 14.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given strength value, if any.
    pub fn from_value(v: u8) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.value() == v)
    }

    /// Notation character: `2`..`9`, then `T`, `J`, `Q`, `K`, `A`.
    pub fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r.value()),
        }
    }

    /// Parses a rank character, ignoring case.
    pub fn from_symbol(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            d => d
                .to_digit(10)
                .and_then(|v| Rank::from_value(v as u8))
                .filter(|r| r.value() < 10),
        }
    }
}

/// Represents a single playing card with a rank and suit.
///
/// Two cards are the same card exactly when rank and suit match; within one
/// deck that pair is unique, so value equality doubles as card identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Strength value of the card's rank (2..=14).
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Stable textual key such as `"Ts"` or `"Ah"`.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError(s.to_string()));
        };
        match (Rank::from_symbol(r), Suit::from_symbol(su)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

/// The four suits in flush-detection order.
pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

/// The thirteen ranks, Two first.
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

/// All 52 cards in suit-major order, unshuffled.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

/// Parses a whitespace separated list such as `"As Kd 7c"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
