use tracing::{event, trace_span};

use super::action::{read_action, resolve_actor};
use super::cards::read_cards;
use super::fields::{self, DEALT_TO, TOTAL_POT};
use super::rules::FieldRules;
use crate::core::HandHistoryError;
use crate::history::{Action, Currency, Hand, Operator, Street};

/// Every hand starts with this literal.
pub const NEW_HAND: &str = "Winamax Poker";
const TABLE: &str = "Table: ";
const SEAT: &str = "Seat ";
const ANTE_BLIND: &str = "*** ANTE/BLINDS ***";
const PRE_FLOP: &str = "*** PRE-FLOP ***";
const FLOP: &str = "*** FLOP ***";
const TURN: &str = "*** TURN ***";
const RIVER: &str = "*** RIVER ***";
const SHOW_DOWN: &str = "*** SHOW DOWN ***";
const SUMMARY: &str = "*** SUMMARY ***";
const BOARD: &str = "Board";
const DENIES: &str = "denies";
const POSTS: &str = "posts";
const SMALL: &str = "small";
const BIG: &str = "big";

/// The betting sections in the order the log writes them.
const STREET_MARKERS: [(Street, &str); 5] = [
    (Street::Preflop, PRE_FLOP),
    (Street::Flop, FLOP),
    (Street::Turn, TURN),
    (Street::River, RIVER),
    (Street::Showdown, SHOW_DOWN),
];

/// A forward only cursor over the lines of one hand.
#[derive(Debug)]
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    current: Option<&'a str>,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        let mut lines = text.lines();
        let current = lines.next();
        Self { lines, current }
    }

    fn current(&self) -> Option<&'a str> {
        self.current
    }

    fn advance(&mut self) {
        self.current = self.lines.next();
    }

    fn at(&self, marker: &str) -> bool {
        self.current.is_some_and(|line| line.starts_with(marker))
    }

    fn skip_blank(&mut self) {
        while self.current.is_some_and(|line| line.trim().is_empty()) {
            self.advance();
        }
    }
}

/// Does this line open a section after the current one ? Only the
/// streets from `later_streets` on are considered.
fn ends_section(line: &str, later_streets: usize) -> bool {
    STREET_MARKERS[later_streets..]
        .iter()
        .map(|(_, marker)| *marker)
        .chain([SUMMARY, NEW_HAND])
        .any(|marker| line.starts_with(marker))
}

/// Decodes the text of exactly one hand into a `Hand`.
///
/// The hand is walked once, section by section:
/// header, table, seats, antes and blinds, the five streets and
/// the summary. Each section scanner starts on its marker line and
/// leaves the cursor on the first line it does not own.
#[derive(Clone, Copy)]
pub struct HandDecoder<'r> {
    rules: &'r dyn FieldRules,
    currency: Currency,
}

impl<'r> HandDecoder<'r> {
    pub fn new(rules: &'r dyn FieldRules, currency: Currency) -> Self {
        Self { rules, currency }
    }

    fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Decode one hand.
    ///
    /// The text must hold a single hand, as produced by
    /// `split_hands`. A second header is rejected with
    /// `MultipleHands` rather than silently replacing the first hand.
    pub fn decode(&self, text: &str) -> Result<Hand, HandHistoryError> {
        let mut cursor = LineCursor::new(text);
        cursor.skip_blank();

        let mut hand = self.read_header(&mut cursor)?;
        let span = trace_span!("HandDecoder::decode", hand_id = %hand.cardroom_hand_id);
        let _enter = span.enter();

        self.read_table(&mut cursor, &mut hand)?;
        self.read_seats(&mut cursor, &mut hand)?;
        self.read_ante_blinds(&mut cursor, &mut hand)?;
        for (idx, (street, marker)) in STREET_MARKERS.iter().enumerate() {
            self.read_street(&mut cursor, &mut hand, *street, marker, idx + 1)?;
        }
        self.read_summary(&mut cursor, &mut hand)?;

        cursor.skip_blank();
        match cursor.current() {
            None => Ok(hand),
            Some(line) if line.starts_with(NEW_HAND) => {
                Err(HandHistoryError::MultipleHands(hand.cardroom_hand_id))
            }
            Some(line) => Err(HandHistoryError::UnexpectedLine(line.to_string())),
        }
    }

    fn read_header(&self, cursor: &mut LineCursor<'_>) -> Result<Hand, HandHistoryError> {
        let line = cursor
            .current()
            .filter(|line| line.starts_with(NEW_HAND))
            .ok_or(HandHistoryError::MissingSection(NEW_HAND))?;
        let symbol = self.symbol();

        let mut hand = Hand::new(fields::hand_id(line)?);
        hand.operator = Operator::Winamax;
        hand.game_type = self.rules.game_type();
        hand.currency = self.currency;
        hand.hand_date = fields::hand_date(line);
        hand.level = self.rules.level(line)?;
        hand.buy_in = self.rules.buy_in(line, symbol)?;
        hand.fee = self.rules.fee(line, symbol)?;
        hand.small_blind = self.rules.small_blind(line, symbol)?;
        hand.big_blind = self.rules.big_blind(line, symbol)?;

        cursor.advance();
        Ok(hand)
    }

    fn read_table(
        &self,
        cursor: &mut LineCursor<'_>,
        hand: &mut Hand,
    ) -> Result<(), HandHistoryError> {
        let line = cursor
            .current()
            .filter(|line| line.starts_with(TABLE))
            .ok_or(HandHistoryError::MissingSection(TABLE))?;

        hand.number_of_player_by_table = fields::seats_per_table(line)?;
        hand.button_seat = fields::button_seat(line)?;
        hand.cardroom_table_id = self.rules.table_id(line)?;

        cursor.advance();
        Ok(())
    }

    fn read_seats(
        &self,
        cursor: &mut LineCursor<'_>,
        hand: &mut Hand,
    ) -> Result<(), HandHistoryError> {
        while let Some(line) = cursor.current().filter(|line| line.starts_with(SEAT)) {
            let player = fields::seat_player(line, self.symbol())?;
            // The button may have busted on the previous hand, leaving
            // no dealer.
            if player.seat == hand.button_seat {
                hand.dealer_seat = Some(player.seat);
            }
            hand.add_player(player);
            cursor.advance();
        }
        Ok(())
    }

    fn read_ante_blinds(
        &self,
        cursor: &mut LineCursor<'_>,
        hand: &mut Hand,
    ) -> Result<(), HandHistoryError> {
        if !cursor.at(ANTE_BLIND) {
            return Ok(());
        }
        cursor.advance();

        while let Some(line) = cursor.current() {
            if line.starts_with(DEALT_TO) {
                self.read_dealt(line, hand)?;
            } else if ends_section(line, 0) {
                break;
            } else if !line.trim().is_empty() {
                self.read_blind(line, hand)?;
            }
            cursor.advance();
        }
        Ok(())
    }

    /// `Dealt to Mikrethor [Td 5d]` names the hero and their hole cards.
    fn read_dealt(&self, line: &str, hand: &mut Hand) -> Result<(), HandHistoryError> {
        let name = fields::account_name(line)?;
        let seat = hand
            .seat_of(name)
            .ok_or_else(|| HandHistoryError::UnknownActor(name.to_string()))?;
        let cards = read_cards(line)?;
        if let Some(player) = hand.players.get_mut(&seat) {
            player.cards = Some(cards);
        }
        hand.account_seat = Some(seat);
        Ok(())
    }

    /// The blind kind is the third token from the end:
    /// `Mikrethor posts small blind 10`, `Bob posts ante 5`.
    fn read_blind(&self, line: &str, hand: &mut Hand) -> Result<(), HandHistoryError> {
        let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
        if tokens.len() < 3 {
            return Err(HandHistoryError::malformed("blind", line));
        }
        let kind = tokens[tokens.len() - 3];
        if kind == DENIES {
            event!(tracing::Level::DEBUG, line, "Player denies the blind");
            return Ok(());
        }
        if ![POSTS, SMALL, BIG].contains(&kind) {
            event!(tracing::Level::DEBUG, line, "Skipping unknown blind line");
            return Ok(());
        }

        let actor = resolve_actor(&tokens, |token| token == POSTS, hand, line)?;
        match kind {
            SMALL => hand.small_blind_seat = Some(actor.seat),
            BIG => hand.big_blind_seat = Some(actor.seat),
            _ => {}
        }
        Ok(())
    }

    /// Read the betting lines of one street. `later` is the index of
    /// the first street whose marker closes this one.
    fn read_street(
        &self,
        cursor: &mut LineCursor<'_>,
        hand: &mut Hand,
        street: Street,
        marker: &str,
        later: usize,
    ) -> Result<(), HandHistoryError> {
        hand.street_actions_mut(street).clear();
        let Some(line) = cursor.current().filter(|line| line.starts_with(marker)) else {
            return Ok(());
        };
        if line.contains('[') {
            hand.board = read_cards(line)?;
        }
        cursor.advance();

        while let Some(line) = cursor.current() {
            if ends_section(line, later) {
                break;
            }
            if !line.trim().is_empty() {
                let action = read_action(line, hand, street, self.symbol())?;
                if action.action == Action::Show {
                    if let Some(player) = hand.players.get_mut(&action.seat) {
                        if player.cards.is_none() {
                            player.cards = action.cards.clone();
                        }
                    }
                }
                hand.street_actions_mut(street).push(action);
            }
            cursor.advance();
        }
        Ok(())
    }

    fn read_summary(
        &self,
        cursor: &mut LineCursor<'_>,
        hand: &mut Hand,
    ) -> Result<(), HandHistoryError> {
        match cursor.current() {
            Some(line) if line.starts_with(SUMMARY) => {}
            Some(line) if line.starts_with(NEW_HAND) => {
                return Err(HandHistoryError::MultipleHands(
                    hand.cardroom_hand_id.clone(),
                ));
            }
            Some(line) => return Err(HandHistoryError::UnexpectedLine(line.to_string())),
            None => return Err(HandHistoryError::MissingSection(SUMMARY)),
        }
        cursor.advance();

        while let Some(line) = cursor.current() {
            if line.starts_with(NEW_HAND) {
                break;
            }
            if line.starts_with(TOTAL_POT) {
                hand.total_pot = fields::total_pot(line, self.symbol())?;
                hand.rake = self.rules.rake(line, self.symbol())?;
            } else if line.starts_with(BOARD) {
                hand.board = read_cards(line)?;
            } else if line.starts_with(SEAT) && line.contains(']') {
                let cards = read_cards(line)?;
                let seat = fields::seat_number(line)?;
                if let Some(player) = hand.players.get_mut(&seat) {
                    if player.cards.is_none() {
                        player.cards = Some(cards);
                    }
                }
            }
            cursor.advance();
        }

        hand.collect_actions();
        Ok(())
    }
}
