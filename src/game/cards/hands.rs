use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter;
use thiserror::Error;

use super::basic::Rank;

pub const HAND_SIZE: usize = 5;

/// Number of distinct ranks, the base of the tiebreak encoding.
const RANK_BASE: u32 = 13;

/// Exclusive upper bound of any tiebreak value.
const TIEBREAK_LIMIT: u32 = RANK_BASE.pow(HAND_SIZE as u32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid card symbol: {0:?}")]
    InvalidCardSymbol(char),
    #[error("Invalid hand length: expected 5 cards, got {0}")]
    InvalidHandLength(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, EnumIter)]
pub enum HandType {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    FullHouse = 5,
    FourOfAKind = 6,
    FiveOfAKind = 7,
}

impl HandType {
    pub fn strength(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            HandType::HighCard => "High card",
            HandType::OnePair => "One pair",
            HandType::TwoPair => "Two pair",
            HandType::ThreeOfAKind => "Three of a kind",
            HandType::FullHouse => "Full house",
            HandType::FourOfAKind => "Four of a kind",
            HandType::FiveOfAKind => "Five of a kind",
        }
    }

    /// Classify five cards by how many times each rank repeats.
    pub fn classify(cards: &[Rank; HAND_SIZE]) -> Self {
        let mut multiplicities: Vec<usize> = count_ranks(cards).into_values().collect();
        multiplicities.sort_unstable_by(|a, b| b.cmp(a));

        // First matching rule wins, so order matters here
        match multiplicities.as_slice() {
            [5, ..] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2, ..] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PartialOrd for HandType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.strength().cmp(&other.strength())
    }
}

fn count_ranks(cards: &[Rank]) -> HashMap<Rank, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

/// A classified five-card hand.
///
/// Hands are built once from their text and never change afterwards. Two
/// hands order first by [`HandType`] and then by their tiebreak, which reads
/// the five ranks as a base-13 number with the first card most significant.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Hand {
    repr: String,
    cards: [Rank; HAND_SIZE],
    hand_type: HandType,
    tiebreak: u32,
}

impl Hand {
    pub fn from_string(s: &str) -> Result<Self, HandError> {
        let length = s.chars().count();
        if length != HAND_SIZE {
            return Err(HandError::InvalidHandLength(length));
        }

        let mut cards = [Rank::Two; HAND_SIZE];
        for (slot, symbol) in cards.iter_mut().zip(s.chars()) {
            *slot = Rank::try_from(symbol)?;
        }

        Ok(Self::from_cards(cards))
    }

    pub fn from_cards(cards: [Rank; HAND_SIZE]) -> Self {
        let repr = cards.iter().map(|card| card.symbol()).collect();
        Self {
            repr,
            cards,
            hand_type: HandType::classify(&cards),
            tiebreak: Self::tiebreak_of(&cards),
        }
    }

    fn tiebreak_of(cards: &[Rank; HAND_SIZE]) -> u32 {
        cards
            .iter()
            .fold(0, |acc, card| acc * RANK_BASE + u32::from(card.value()))
    }

    /// Recover the card sequence encoded in a tiebreak value.
    pub fn ranks_from_tiebreak(tiebreak: u32) -> Option<[Rank; HAND_SIZE]> {
        if tiebreak >= TIEBREAK_LIMIT {
            return None;
        }

        let mut cards = [Rank::Two; HAND_SIZE];
        let mut remaining = tiebreak;
        for slot in cards.iter_mut().rev() {
            *slot = Rank::from_value((remaining % RANK_BASE) as u8)?;
            remaining /= RANK_BASE;
        }
        Some(cards)
    }

    pub fn as_str(&self) -> &str {
        &self.repr
    }

    pub fn cards(&self) -> &[Rank; HAND_SIZE] {
        &self.cards
    }

    pub fn hand_type(&self) -> HandType {
        self.hand_type
    }

    pub fn tiebreak(&self) -> u32 {
        self.tiebreak
    }

    /// The card ranks written as base-13 digits (`0-9`, `a-c`).
    pub fn base13(&self) -> String {
        self.cards
            .iter()
            .map(|card| format!("{:x}", card.value()))
            .collect()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} == {}_13)",
            self.repr,
            self.hand_type,
            self.tiebreak,
            self.base13()
        )
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.hand_type.cmp(&other.hand_type) {
            std::cmp::Ordering::Equal => self.tiebreak.cmp(&other.tiebreak),
            other => other,
        }
    }
}
