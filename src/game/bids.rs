use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::game::cards::{Hand, HandError, HandType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BidError {
    #[error("Malformed input line {line:?}: {reason}")]
    MalformedInputLine { line: String, reason: &'static str },
    #[error("Invalid hand: {0}")]
    Hand(#[from] HandError),
    #[error("Line {line_number}: {source}")]
    Line {
        line_number: usize,
        #[source]
        source: Box<BidError>,
    },
    #[error("Total winnings overflowed at rank {rank}")]
    WinningsOverflow { rank: usize },
}

impl BidError {
    fn malformed(line: &str, reason: &'static str) -> Self {
        BidError::MalformedInputLine {
            line: line.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bid {
    pub hand: Hand,
    pub amount: u64,
}

impl Bid {
    pub fn new(hand: Hand, amount: u64) -> Self {
        Self { hand, amount }
    }

    /// Parse a `<hand> <bid>` line. Exactly one space separates the fields.
    pub fn from_line(line: &str) -> Result<Self, BidError> {
        let mut fields = line.split(' ');
        let (hand, amount) = match (fields.next(), fields.next(), fields.next()) {
            (Some(hand), Some(amount), None) => (hand, amount),
            _ => return Err(BidError::malformed(line, "expected exactly two fields")),
        };

        if hand.is_empty() {
            return Err(BidError::malformed(line, "missing hand"));
        }
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BidError::malformed(line, "bid is not a non-negative integer"));
        }
        let amount = amount
            .parse::<u64>()
            .map_err(|_| BidError::malformed(line, "bid is out of range"))?;

        Ok(Self::new(Hand::from_string(hand)?, amount))
    }
}

/// Parse every non-empty line of `input`, stopping at the first bad one.
#[instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_bids(input: &str) -> Result<Vec<Bid>, BidError> {
    let bids = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            Bid::from_line(line).map_err(|e| BidError::Line {
                line_number: index + 1,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = bids.len(), "Parsed bids");
    Ok(bids)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: usize,
    pub hand: String,
    pub hand_type: HandType,
    pub tiebreak: u32,
    pub bid: u64,
    pub winnings: u64,
}

/// Bids ordered weakest first, with their 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    entries: Vec<Standing>,
    total_winnings: u64,
}

impl Standings {
    #[instrument(skip(bids), fields(count = bids.len()))]
    pub fn from_bids(mut bids: Vec<Bid>) -> Result<Self, BidError> {
        // Stable, so equal hands keep their input order
        bids.sort_by(|a, b| a.hand.cmp(&b.hand));

        let mut entries = Vec::with_capacity(bids.len());
        let mut total_winnings: u64 = 0;
        for (index, bid) in bids.into_iter().enumerate() {
            let rank = index + 1;
            let winnings = (rank as u64)
                .checked_mul(bid.amount)
                .ok_or(BidError::WinningsOverflow { rank })?;
            total_winnings = total_winnings
                .checked_add(winnings)
                .ok_or(BidError::WinningsOverflow { rank })?;

            debug!(rank = rank, hand = %bid.hand, bid = bid.amount, "Ranked bid");
            entries.push(Standing {
                rank,
                hand: bid.hand.as_str().to_string(),
                hand_type: bid.hand.hand_type(),
                tiebreak: bid.hand.tiebreak(),
                bid: bid.amount,
                winnings,
            });
        }

        info!(hands = entries.len(), total_winnings, "Standings computed");
        Ok(Self {
            entries,
            total_winnings,
        })
    }

    pub fn entries(&self) -> &[Standing] {
        &self.entries
    }

    pub fn total_winnings(&self) -> u64 {
        self.total_winnings
    }
}

/// Parse, rank and score a whole puzzle input.
pub fn total_winnings(input: &str) -> Result<u64, BidError> {
    let bids = parse_bids(input)?;
    Ok(Standings::from_bids(bids)?.total_winnings())
}
