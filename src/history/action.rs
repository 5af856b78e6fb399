use rust_decimal::Decimal;

use crate::core::Card;

/// A move a player can make on a betting line.
///
/// The cardroom logs write them in the third person,
/// `keyword()` is that spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Fold,
    Call,
    Raise,
    Check,
    /// Player collects (part of) the pot
    Collect,
    Bet,
    /// Player shows their hole cards
    Show,
}

const ACTIONS: [Action; 7] = [
    Action::Fold,
    Action::Call,
    Action::Raise,
    Action::Check,
    Action::Collect,
    Action::Bet,
    Action::Show,
];

impl Action {
    pub fn actions() -> [Action; 7] {
        ACTIONS
    }

    /// The token the log uses for this action.
    pub fn keyword(self) -> &'static str {
        match self {
            Action::Fold => "folds",
            Action::Call => "calls",
            Action::Raise => "raises",
            Action::Check => "checks",
            Action::Collect => "collected",
            Action::Bet => "bets",
            Action::Show => "shows",
        }
    }

    pub fn from_keyword(token: &str) -> Option<Action> {
        ACTIONS.into_iter().find(|a| a.keyword() == token)
    }

    /// Is the keyword followed by an amount ?
    pub fn takes_amount(self) -> bool {
        matches!(
            self,
            Action::Call | Action::Raise | Action::Collect | Action::Bet
        )
    }
}

/// Is this token one of the seven action keywords ?
///
/// # Examples
///
/// ```
/// use cardroom_history::history::is_action;
///
/// assert!(is_action("raises"));
/// assert!(!is_action("posts"));
/// ```
pub fn is_action(token: &str) -> bool {
    Action::from_keyword(token).is_some()
}

/// The betting round an action was played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

const STREETS: [Street; 5] = [
    Street::Preflop,
    Street::Flop,
    Street::Turn,
    Street::River,
    Street::Showdown,
];

impl Street {
    /// All the streets in the order they are played.
    pub fn streets() -> [Street; 5] {
        STREETS
    }
}

/// One decoded betting line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandAction {
    /// Name of the acting player
    pub player: String,
    /// Seat of the acting player, a key of `Hand::players`
    pub seat: u32,
    pub action: Action,
    /// Zero unless `action.takes_amount()`
    pub amount: Decimal,
    /// Cards revealed by a `Show`
    pub cards: Option<Vec<Card>>,
    pub street: Street,
}
