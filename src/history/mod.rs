//! The records a decoded hand history is made of.
//!
//! These are plain data holders. They are filled in by a
//! decoder and read-only for everyone else.

/// Actions and streets.
mod action;
pub use self::action::{Action, HandAction, Street, is_action};

/// `Hand` and `Player`.
mod hand;
pub use self::hand::{Hand, Player};

/// Currency, operator and game type symbol sets.
mod table;
pub use self::table::{Currency, GameType, Operator};
