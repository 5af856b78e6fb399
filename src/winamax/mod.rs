//! Decoding of Winamax hand histories.
//!
//! A log file is split on every `Winamax Poker` header, then each hand is
//! walked section by section by a [`HandDecoder`]. Tournament and cash
//! game logs only differ in a few header fields, captured by
//! [`FieldRules`].

/// Anchors and the single field extractors.
pub mod fields;

mod cards;
pub use self::cards::read_cards;

mod action;
pub use self::action::read_action;

mod rules;
pub use self::rules::{CashGameRules, FieldRules, TournamentRules, rules_for};

mod decoder;
pub use self::decoder::{HandDecoder, NEW_HAND};

mod splitter;
pub use self::splitter::{HandBlocks, split_hands};

mod parser;
pub use self::parser::{ParsedHands, WinamaxParser, WinamaxParserBuilder};
