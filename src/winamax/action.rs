use rust_decimal::Decimal;

use super::cards::read_cards;
use super::fields::parse_amount;
use crate::core::HandHistoryError;
use crate::history::{Action, Hand, HandAction, Street, is_action};

/// The actor of a tokenized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Actor {
    /// Index of the keyword token that ends the name.
    pub keyword: usize,
    pub name: String,
    pub seat: u32,
}

/// Find who is acting on a line split into tokens.
///
/// Names may hold spaces, and may even hold a keyword. Every keyword
/// token is a candidate boundary; the one giving the longest prefix that
/// is a seated player's name wins.
pub(crate) fn resolve_actor(
    tokens: &[&str],
    is_keyword: impl Fn(&str) -> bool,
    hand: &Hand,
    line: &str,
) -> Result<Actor, HandHistoryError> {
    let candidates: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| is_keyword(token))
        .map(|(idx, _)| idx)
        .collect();

    for &keyword in candidates.iter().rev() {
        let name = tokens[..keyword].join(" ");
        if let Some(seat) = hand.seat_of(&name) {
            return Ok(Actor {
                keyword,
                name,
                seat,
            });
        }
    }

    match candidates.first() {
        Some(&keyword) => Err(HandHistoryError::UnknownActor(
            tokens[..keyword].join(" "),
        )),
        None => Err(HandHistoryError::NoActionKeyword(line.to_string())),
    }
}

/// Decode one betting line into a `HandAction` on `street`.
///
/// # Examples
///
/// ```
/// use cardroom_history::history::{Action, Hand, Player, Street};
/// use cardroom_history::winamax::read_action;
/// use rust_decimal::Decimal;
///
/// let mut hand = Hand::new("1-1");
/// hand.add_player(Player::new(5, "phillippo", Decimal::from(1500)));
///
/// let action = read_action("phillippo raises 40 to 60", &hand, Street::Preflop, "€").unwrap();
/// assert_eq!(Action::Raise, action.action);
/// assert_eq!(Decimal::from(40), action.amount);
/// ```
pub fn read_action(
    line: &str,
    hand: &Hand,
    street: Street,
    symbol: &str,
) -> Result<HandAction, HandHistoryError> {
    let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
    let actor = resolve_actor(&tokens, is_action, hand, line)?;
    let action = Action::from_keyword(tokens[actor.keyword])
        .ok_or_else(|| HandHistoryError::NoActionKeyword(line.to_string()))?;

    let amount = if action.takes_amount() {
        let raw = tokens
            .get(actor.keyword + 1)
            .ok_or_else(|| HandHistoryError::malformed("amount", line))?;
        parse_amount(raw, symbol, "amount", line)?
    } else {
        Decimal::ZERO
    };

    let cards = match action {
        Action::Show => Some(read_cards(line)?),
        _ => None,
    };

    Ok(HandAction {
        player: actor.name,
        seat: actor.seat,
        action,
        amount,
        cards,
        street,
    })
}
