//! Decode the hand history logs written by poker room clients into
//! strongly typed hand records.
//!
//! Each hand of a log becomes a [`history::Hand`] holding the players and
//! their seats, the blinds, every action street by street, the cards that
//! were revealed and the pot.
//!
//! ```
//! use cardroom_history::winamax::WinamaxParser;
//!
//! let log = "Winamax Poker - CashGame - HandId: #9004445-57475-1473728657 - Holdem no limit (0.01€/0.02€) - 2016/09/13 01:04:17 UTC
//! Table: 'Tokyo 02' 9-max (real money) Seat #2 is the button
//! Seat 1: Fletan67 (0.89€)
//! Seat 2: Mikrethor (2€)
//! *** ANTE/BLINDS ***
//! Mikrethor posts small blind 0.01€
//! Fletan67 posts big blind 0.02€
//! Dealt to Mikrethor [Kc 3s]
//! *** PRE-FLOP *** 
//! Mikrethor folds
//! Fletan67 collected 0.02€ from pot
//! *** SUMMARY ***
//! Total pot 0.02€ | No rake
//! Seat 1: Fletan67 won 0.02€
//! ";
//!
//! let parser = WinamaxParser::builder()
//!     .game_type(cardroom_history::history::GameType::Cash)
//!     .build();
//! let parsed = parser.parse_str(log);
//! let hand = &parsed.hands["9004445-57475"];
//! assert_eq!("Mikrethor", hand.account_player().unwrap().name);
//! assert_eq!(2, hand.actions.len());
//! ```

/// Cards and the error type. Nothing in core knows about a
/// particular room.
pub mod core;
/// The decoded records.
pub mod history;
/// Reading log files from disk.
pub mod source;
/// The Winamax log format.
pub mod winamax;
