//! Anchor based field extractors.
//!
//! Every function here finds a fixed literal in one line and slices the
//! text between two offsets computed from it. Nothing is coerced: a slice
//! that is missing or does not convert is a `MalformedField`. The hand date
//! is the only exception, it falls back to the current time.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::event;

use crate::core::HandHistoryError;
use crate::history::Player;

pub(crate) const HANDID_HASHTAG: &str = "HandId: #";
pub(crate) const MINUS_HANDID: &str = " - HandId:";
pub(crate) const BUY_IN: &str = "buyIn: ";
pub(crate) const LEVEL: &str = "level:";
pub(crate) const LEVEL_SPACE: &str = "level: ";
pub(crate) const IS_THE_BUTTON: &str = "is the button";
pub(crate) const MAX: &str = "max";
pub(crate) const TOTAL_POT: &str = "Total pot ";
pub(crate) const DEALT_TO: &str = "Dealt to ";
pub(crate) const HAND_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

fn slice<'a>(
    line: &'a str,
    start: Option<usize>,
    end: Option<usize>,
    field: &'static str,
) -> Result<&'a str, HandHistoryError> {
    start
        .zip(end)
        .and_then(|(start, end)| line.get(start..end))
        .ok_or_else(|| HandHistoryError::malformed(field, line))
}

/// Parse a plain integer, such as a seat or a level.
pub fn parse_number<T: FromStr>(
    raw: &str,
    field: &'static str,
    line: &str,
) -> Result<T, HandHistoryError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| HandHistoryError::malformed(field, line))
}

/// Parse a money amount: strip the currency symbol, turn a decimal comma
/// into a point, then convert.
pub fn parse_amount(
    raw: &str,
    symbol: &str,
    field: &'static str,
    line: &str,
) -> Result<Decimal, HandHistoryError> {
    let normalized = raw.replace(symbol, "").replace(',', ".");
    Decimal::from_str(normalized.trim()).map_err(|_| HandHistoryError::malformed(field, line))
}

/// The hand id sits after `HandId: #` and runs up to the second dash.
///
/// ```
/// use cardroom_history::winamax::fields;
///
/// let line = "Winamax Poker - CashGame - HandId: #9004445-57475-1473728657 - Holdem no limit (0.01€/0.02€) - 2016/09/13 01:04:17 UTC";
/// assert_eq!("9004445-57475", fields::hand_id(line).unwrap());
/// ```
pub fn hand_id(line: &str) -> Result<String, HandHistoryError> {
    let start = line.find(HANDID_HASHTAG).map(|p| p + HANDID_HASHTAG.len());
    let first_dash = start.and_then(|s| line.get(s..)?.find('-').map(|p| p + s));
    let second_dash = first_dash.and_then(|d| line.get(d + 1..)?.find('-').map(|p| p + d + 1));
    slice(line, start, second_dash, "hand id").map(str::to_string)
}

/// The date between the last dash and the last space of the header.
///
/// Never fails: a date that can't be read is replaced by the current time.
pub fn hand_date(line: &str) -> DateTime<Utc> {
    let start = line.rfind('-').map(|p| p + 2);
    let end = line.rfind(' ');
    let parsed = slice(line, start, end, "hand date").ok().and_then(|raw| {
        NaiveDateTime::parse_from_str(raw, HAND_DATE_FORMAT)
            .ok()
            .map(|date| date.and_utc())
    });
    match parsed {
        Some(date) => date,
        None => {
            event!(
                tracing::Level::WARN,
                line,
                "Unreadable hand date, using the current time"
            );
            Utc::now()
        }
    }
}

pub fn level(line: &str) -> Result<u32, HandHistoryError> {
    let start = line.find(LEVEL_SPACE).map(|p| p + LEVEL_SPACE.len());
    let end = line.find(MINUS_HANDID);
    parse_number(slice(line, start, end, "level")?, "level", line)
}

/// Text between `buyIn: ` and `level:`, e.g. `0.45€ + 0.05€ ` or `Ticket only `.
fn buy_in_expression(line: &str) -> Result<&str, HandHistoryError> {
    let start = line.find(BUY_IN).map(|p| p + BUY_IN.len());
    let end = line.find(LEVEL);
    slice(line, start, end, "buy-in")
}

/// Tournament buy-in, the part before the `+`. A ticket entry has no `+`
/// and costs nothing.
pub fn buy_in(line: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
    let expression = buy_in_expression(line)?;
    match expression.find('+') {
        Some(plus) => parse_amount(&expression[..plus], symbol, "buy-in", line),
        None => Ok(Decimal::ZERO),
    }
}

/// Tournament fee, from after `+ ` up to the last money symbol.
pub fn fee(line: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
    let expression = buy_in_expression(line)?;
    let Some(plus) = expression.find('+') else {
        return Ok(Decimal::ZERO);
    };
    let start = expression
        .find("+ ")
        .map_or(plus + 1, |p| p + "+ ".len());
    let end = expression
        .rfind(symbol)
        .filter(|&e| e >= start)
        .unwrap_or(expression.len());
    parse_amount(&expression[start..end], symbol, "fee", line)
}

/// The stake expression `(ante/small/big)` or `(small/big)`,
/// returned as `(small, big)`.
pub fn stakes(line: &str, symbol: &str) -> Result<(Decimal, Decimal), HandHistoryError> {
    let from = line.find(HANDID_HASHTAG).unwrap_or(0);
    let open = line[from..].find('(').map(|p| p + from + 1);
    let close = open.and_then(|o| line[o..].find(')').map(|p| p + o));
    let blinds: Vec<&str> = slice(line, open, close, "blinds")?.split('/').collect();
    let (small, big) = match blinds.as_slice() {
        [_ante, small, big] => (small, big),
        [small, big] => (small, big),
        _ => return Err(HandHistoryError::malformed("blinds", line)),
    };
    Ok((
        parse_amount(small, symbol, "small blind", line)?,
        parse_amount(big, symbol, "big blind", line)?,
    ))
}

pub fn small_blind(line: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
    stakes(line, symbol).map(|(small, _)| small)
}

pub fn big_blind(line: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
    stakes(line, symbol).map(|(_, big)| big)
}

pub fn button_seat(line: &str) -> Result<u32, HandHistoryError> {
    let start = line.rfind('#').map(|p| p + 1);
    let end = line.find(IS_THE_BUTTON).and_then(|p| p.checked_sub(1));
    parse_number(slice(line, start, end, "button seat")?, "button seat", line)
}

/// Tournament tables are named `'<tournament>#<table>'`.
pub fn tournament_table_id(line: &str) -> Result<String, HandHistoryError> {
    let end = line.rfind('\'');
    let start = end.and_then(|q| line[..q].rfind('#')).map(|p| p + 1);
    slice(line, start, end, "table id").map(str::to_string)
}

/// Cash game tables are named by the whole quoted text.
pub fn cash_table_id(line: &str) -> Result<String, HandHistoryError> {
    let start = line.find('\'').map(|p| p + 1);
    let end = line.rfind('\'');
    slice(line, start, end, "table id").map(str::to_string)
}

/// The `9` of `' 9-max`.
pub fn seats_per_table(line: &str) -> Result<u32, HandHistoryError> {
    let start = line.rfind('\'').map(|p| p + 2);
    let end = line.rfind(MAX).and_then(|p| p.checked_sub(1));
    parse_number(slice(line, start, end, "seats per table")?, "seats per table", line)
}

/// The seat number of a `Seat 3: ...` line.
pub fn seat_number(line: &str) -> Result<u32, HandHistoryError> {
    let start = line.find(' ').map(|p| p + 1);
    let end = line.find(':');
    parse_number(slice(line, start, end, "seat")?, "seat", line)
}

/// A seat line, `Seat 1: Fletan67 (0.89€)`.
pub fn seat_player(line: &str, symbol: &str) -> Result<Player, HandHistoryError> {
    let seat = seat_number(line)?;
    let open = line.rfind('(');
    let close = line.rfind(')');
    let name_start = line.find(':').map(|p| p + 2);
    let name = slice(line, name_start, open.and_then(|o| o.checked_sub(1)), "player name")?;
    if name.is_empty() {
        return Err(HandHistoryError::malformed("player name", line));
    }
    let stack = slice(line, open.map(|o| o + 1), close, "stack")?;
    // Bounty tournaments add `, 2€ bounty` after the chips. A comma
    // with no space is a decimal comma and stays.
    let chips = stack.split(", ").next().unwrap_or(stack);
    let stack = parse_amount(chips, symbol, "stack", line)?;
    Ok(Player::new(seat, name, stack))
}

/// `Total pot 1140 | No rake`
pub fn total_pot(line: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
    let start = line.find(TOTAL_POT).map(|p| p + TOTAL_POT.len());
    let end = line.find('|').and_then(|p| p.checked_sub(1));
    parse_amount(slice(line, start, end, "total pot")?, symbol, "total pot", line)
}

/// The hero of a `Dealt to Mikrethor [Kc 3s]` line.
pub fn account_name(line: &str) -> Result<&str, HandHistoryError> {
    let start = line.find(DEALT_TO).map(|p| p + DEALT_TO.len());
    let end = line.rfind('[').and_then(|p| p.checked_sub(1));
    slice(line, start, end, "account player")
}
