use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{Currency, GameType, HandAction, Operator, Street};
use crate::core::Card;

/// A player seated at the table for one hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub seat: u32,
    pub name: String,
    /// Stack at the start of the hand.
    pub stack: Decimal,
    /// Seated and dealt in.
    pub on: bool,
    /// Hole cards, known for the hero or once shown.
    pub cards: Option<Vec<Card>>,
}

impl Player {
    pub fn new(seat: u32, name: impl Into<String>, stack: Decimal) -> Self {
        Self {
            seat,
            name: name.into(),
            stack,
            on: true,
            cards: None,
        }
    }
}

/// One complete dealt hand, as decoded from a hand history.
///
/// The designated roles (dealer, blinds and the account player) are
/// stored as seats. Use the accessor methods to get the `Player`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// The id the cardroom gave to this hand.
    pub cardroom_hand_id: String,
    pub operator: Operator,
    pub game_type: GameType,
    pub hand_date: DateTime<Utc>,

    pub small_blind: Decimal,
    pub big_blind: Decimal,
    /// Tournament buy-in, zero for cash games and ticket entries.
    pub buy_in: Decimal,
    pub fee: Decimal,
    /// Tournament blind level, zero for cash games.
    pub level: u32,
    pub currency: Currency,

    pub cardroom_table_id: String,
    /// Maximum number of seats at the table.
    pub number_of_player_by_table: u32,
    pub button_seat: u32,

    pub players: BTreeMap<u32, Player>,
    pub players_seat_by_name: HashMap<String, u32>,

    pub dealer_seat: Option<u32>,
    pub small_blind_seat: Option<u32>,
    pub big_blind_seat: Option<u32>,
    /// Seat of the hero, the player the hole cards were dealt to.
    pub account_seat: Option<u32>,

    pub preflop_actions: Vec<HandAction>,
    pub flop_actions: Vec<HandAction>,
    pub turn_actions: Vec<HandAction>,
    pub river_actions: Vec<HandAction>,
    pub showdown_actions: Vec<HandAction>,
    /// All the street actions in street order. Only filled
    /// once the summary has been read.
    pub actions: Vec<HandAction>,

    /// Last board snapshot seen in the hand.
    pub board: Vec<Card>,

    pub total_pot: Decimal,
    pub rake: Decimal,
}

impl Hand {
    /// A fresh hand with nothing but its id.
    pub fn new(cardroom_hand_id: impl Into<String>) -> Self {
        Self {
            cardroom_hand_id: cardroom_hand_id.into(),
            operator: Operator::default(),
            game_type: GameType::default(),
            hand_date: DateTime::<Utc>::default(),
            small_blind: Decimal::ZERO,
            big_blind: Decimal::ZERO,
            buy_in: Decimal::ZERO,
            fee: Decimal::ZERO,
            level: 0,
            currency: Currency::default(),
            cardroom_table_id: String::new(),
            number_of_player_by_table: 0,
            button_seat: 0,
            players: BTreeMap::new(),
            players_seat_by_name: HashMap::new(),
            dealer_seat: None,
            small_blind_seat: None,
            big_blind_seat: None,
            account_seat: None,
            preflop_actions: Vec::new(),
            flop_actions: Vec::new(),
            turn_actions: Vec::new(),
            river_actions: Vec::new(),
            showdown_actions: Vec::new(),
            actions: Vec::new(),
            board: Vec::new(),
            total_pot: Decimal::ZERO,
            rake: Decimal::ZERO,
        }
    }

    /// Seat a player, indexing them by seat and by name.
    /// A player already on that seat is replaced.
    pub fn add_player(&mut self, player: Player) {
        if let Some(previous) = self.players.get(&player.seat) {
            self.players_seat_by_name.remove(&previous.name);
        }
        self.players_seat_by_name
            .insert(player.name.clone(), player.seat);
        self.players.insert(player.seat, player);
    }

    pub fn seat_of(&self, name: &str) -> Option<u32> {
        self.players_seat_by_name.get(name).copied()
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.seat_of(name).and_then(|seat| self.players.get(&seat))
    }

    pub fn dealer_player(&self) -> Option<&Player> {
        self.dealer_seat.and_then(|s| self.players.get(&s))
    }

    pub fn small_blind_player(&self) -> Option<&Player> {
        self.small_blind_seat.and_then(|s| self.players.get(&s))
    }

    pub fn big_blind_player(&self) -> Option<&Player> {
        self.big_blind_seat.and_then(|s| self.players.get(&s))
    }

    pub fn account_player(&self) -> Option<&Player> {
        self.account_seat.and_then(|s| self.players.get(&s))
    }

    pub fn street_actions(&self, street: Street) -> &[HandAction] {
        match street {
            Street::Preflop => &self.preflop_actions,
            Street::Flop => &self.flop_actions,
            Street::Turn => &self.turn_actions,
            Street::River => &self.river_actions,
            Street::Showdown => &self.showdown_actions,
        }
    }

    pub fn street_actions_mut(&mut self, street: Street) -> &mut Vec<HandAction> {
        match street {
            Street::Preflop => &mut self.preflop_actions,
            Street::Flop => &mut self.flop_actions,
            Street::Turn => &mut self.turn_actions,
            Street::River => &mut self.river_actions,
            Street::Showdown => &mut self.showdown_actions,
        }
    }

    /// Rebuild `actions` from the street lists.
    pub(crate) fn collect_actions(&mut self) {
        let actions: Vec<HandAction> = Street::streets()
            .into_iter()
            .flat_map(|street| self.street_actions(street).iter().cloned())
            .collect();
        self.actions = actions;
    }
}
