// Public API
pub use bids::{parse_bids, total_winnings, Bid, BidError, Standing, Standings};
pub use cards::{decode_card, Hand, HandError, HandType, Rank, HAND_SIZE};

pub mod bids;
pub mod cards;
