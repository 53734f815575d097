pub mod basic;
pub mod hands;


pub use basic::{decode_card, Rank};
pub use hands::{Hand, HandError, HandType, HAND_SIZE};
