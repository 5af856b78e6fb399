//! This is the core module. It exports the code that is
//! agnostic to any cardroom format.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// The error type shared by every decoder.
mod error;
pub use self::error::HandHistoryError;
