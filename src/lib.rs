// Library crate for the Camel Cards solver
// This file exposes the public API for the binary and integration tests

pub mod game;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use game::{
    parse_bids, total_winnings, Bid, BidError, Hand, HandError, HandType, Rank, Standing,
    Standings,
};
pub use shared::{AppConfig, AppError, OutputFormat};
