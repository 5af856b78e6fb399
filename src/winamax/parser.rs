use std::collections::BTreeMap;
use std::path::Path;

use tracing::{event, trace_span};

use super::decoder::HandDecoder;
use super::rules::rules_for;
use super::splitter::split_hands;
use crate::core::HandHistoryError;
use crate::history::{Currency, GameType, Hand};
use crate::source::{game_type_from_filename, read_hand_file};

/// Everything decoded out of one log file.
///
/// A hand that fails to decode never stops the others, it is
/// listed in `failures` under its id.
#[derive(Debug, Default)]
pub struct ParsedHands {
    pub hands: BTreeMap<String, Hand>,
    pub failures: BTreeMap<String, HandHistoryError>,
    /// Hand ids found more than once in the file.
    pub duplicates: Vec<String>,
    /// Fragments that did not even carry a hand id.
    pub unidentified: Vec<HandHistoryError>,
}

/// Builder for a `WinamaxParser`.
///
/// # Examples
///
/// ```
/// use cardroom_history::history::{Currency, GameType};
/// use cardroom_history::winamax::WinamaxParserBuilder;
///
/// let parser = WinamaxParserBuilder::default()
///     .game_type(GameType::Cash)
///     .currency(Currency::Euro)
///     .parallel(false)
///     .build();
///
/// assert_eq!(Some(GameType::Cash), parser.game_type());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WinamaxParserBuilder {
    game_type: Option<GameType>,
    currency: Option<Currency>,
    parallel: Option<bool>,
}

impl WinamaxParserBuilder {
    /// Decode every hand with the rules of this game type. Without it
    /// files are classified by their name and text defaults to
    /// tournament rules.
    pub fn game_type(mut self, game_type: GameType) -> Self {
        self.game_type = Some(game_type);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Decode the hands of a file on the rayon thread pool. Ignored
    /// without the `parallel` feature.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn build(self) -> WinamaxParser {
        WinamaxParser {
            game_type: self.game_type,
            currency: self.currency.unwrap_or_default(),
            parallel: self.parallel.unwrap_or(cfg!(feature = "parallel")),
        }
    }
}

/// Decodes Winamax hand history logs.
#[derive(Debug, Clone, Copy)]
pub struct WinamaxParser {
    game_type: Option<GameType>,
    currency: Currency,
    parallel: bool,
}

impl Default for WinamaxParser {
    fn default() -> Self {
        WinamaxParserBuilder::default().build()
    }
}

impl WinamaxParser {
    pub fn builder() -> WinamaxParserBuilder {
        WinamaxParserBuilder::default()
    }

    pub fn game_type(&self) -> Option<GameType> {
        self.game_type
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn decoder(&self, game_type: GameType) -> HandDecoder<'static> {
        HandDecoder::new(rules_for(game_type), self.currency)
    }

    /// Decode the text of a single hand.
    pub fn decode_hand(&self, text: &str) -> Result<Hand, HandHistoryError> {
        self.decoder(self.game_type.unwrap_or_default())
            .decode(text)
    }

    /// Decode every hand of an already read log.
    pub fn parse_str(&self, text: &str) -> ParsedHands {
        self.parse_with(text, self.game_type.unwrap_or_default())
    }

    /// Read a log file and decode every hand in it.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedHands, HandHistoryError> {
        let span = trace_span!("WinamaxParser::parse_file", path = %path.display());
        let _enter = span.enter();

        let game_type = self.game_type.unwrap_or_else(|| {
            path.file_name()
                .map(|name| game_type_from_filename(&name.to_string_lossy()))
                .unwrap_or_default()
        });
        let text = read_hand_file(path)?;
        Ok(self.parse_with(&text, game_type))
    }

    fn parse_with(&self, text: &str, game_type: GameType) -> ParsedHands {
        let split = split_hands(text);
        let decoder = self.decoder(game_type);

        let mut parsed = ParsedHands {
            duplicates: split.duplicates,
            unidentified: split.rejected,
            ..Default::default()
        };
        for (id, result) in self.decode_blocks(&decoder, split.blocks) {
            match result {
                Ok(hand) => {
                    parsed.hands.insert(id, hand);
                }
                Err(e) => {
                    event!(tracing::Level::WARN, hand_id = %id, error = %e, "Unable to decode hand");
                    parsed.failures.insert(id, e);
                }
            }
        }
        event!(
            tracing::Level::DEBUG,
            hands = parsed.hands.len(),
            failures = parsed.failures.len(),
            "Decoded hand history"
        );
        parsed
    }

    #[cfg(feature = "parallel")]
    fn decode_blocks(
        &self,
        decoder: &HandDecoder<'_>,
        blocks: BTreeMap<String, String>,
    ) -> Vec<(String, Result<Hand, HandHistoryError>)> {
        use rayon::prelude::*;

        if !self.parallel {
            return decode_sequential(decoder, blocks);
        }
        blocks
            .into_par_iter()
            .map(|(id, text)| {
                let result = decoder.decode(&text);
                (id, result)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn decode_blocks(
        &self,
        decoder: &HandDecoder<'_>,
        blocks: BTreeMap<String, String>,
    ) -> Vec<(String, Result<Hand, HandHistoryError>)> {
        decode_sequential(decoder, blocks)
    }
}

fn decode_sequential(
    decoder: &HandDecoder<'_>,
    blocks: BTreeMap<String, String>,
) -> Vec<(String, Result<Hand, HandHistoryError>)> {
    blocks
        .into_iter()
        .map(|(id, text)| {
            let result = decoder.decode(&text);
            (id, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::history::{Action, Street};

    const TOURNAMENT_FILE: &str = include_str!("testdata/tournament.txt");
    const CASH_FILE: &str = include_str!("testdata/cash.txt");

    #[test_log::test]
    fn test_parse_tournament_file() {
        let parsed = WinamaxParser::default().parse_str(TOURNAMENT_FILE);

        assert_eq!(3, parsed.hands.len());
        assert_eq!(1, parsed.failures.len());
        assert!(parsed.duplicates.is_empty());
        assert!(parsed.unidentified.is_empty());

        for (id, hand) in &parsed.hands {
            assert_eq!(id, &hand.cardroom_hand_id);
            assert_eq!("Mikrethor", hand.account_player().unwrap().name);
            let total: usize = Street::streets()
                .into_iter()
                .map(|street| hand.street_actions(street).len())
                .sum();
            assert_eq!(total, hand.actions.len());
        }

        let first = &parsed.hands["236883548206792705-1"];
        assert_eq!(Decimal::from(1140), first.total_pot);
    }

    #[test_log::test]
    fn test_failures_are_isolated() {
        let parsed = WinamaxParser::default().parse_str(TOURNAMENT_FILE);
        match parsed.failures.get("236883548206792705-3") {
            Some(HandHistoryError::UnknownActor(name)) => assert_eq!("Ghost", name.as_str()),
            other => panic!("Expected an unknown actor, got {other:?}"),
        }
        assert!(parsed.hands.contains_key("236883548206792705-4"));
    }

    #[test_log::test]
    fn test_showdown_hand_from_file() {
        let parsed = WinamaxParser::default().parse_str(TOURNAMENT_FILE);
        let hand = &parsed.hands["236883548206792705-2"];

        assert_eq!(Decimal::new(45, 2), hand.buy_in);
        assert_eq!(Decimal::new(5, 2), hand.fee);
        assert_eq!(3, hand.showdown_actions.len());
        assert!(
            hand.showdown_actions
                .iter()
                .filter(|a| a.action == Action::Show)
                .all(|a| a.cards.as_ref().is_some_and(|c| c.len() == 2))
        );
        assert_eq!(2, hand.players.values().filter(|p| p.cards.is_some()).count());
    }

    #[test_log::test]
    fn test_sequential_matches_parallel() {
        let sequential = WinamaxParserBuilder::default()
            .parallel(false)
            .build()
            .parse_str(TOURNAMENT_FILE);
        let parallel = WinamaxParserBuilder::default()
            .parallel(true)
            .build()
            .parse_str(TOURNAMENT_FILE);

        assert_eq!(sequential.hands, parallel.hands);
        assert_eq!(
            sequential.failures.keys().collect::<Vec<_>>(),
            parallel.failures.keys().collect::<Vec<_>>()
        );
    }

    #[test_log::test]
    fn test_parse_cash_file() {
        let parser = WinamaxParserBuilder::default()
            .game_type(GameType::Cash)
            .build();
        let parsed = parser.parse_str(CASH_FILE);

        assert!(parsed.failures.is_empty(), "{:?}", parsed.failures);
        assert_eq!(2, parsed.hands.len());

        let hand = &parsed.hands["9004445-57475"];
        assert_eq!(GameType::Cash, hand.game_type);
        assert_eq!("Tokyo 02", hand.cardroom_table_id);
        assert_eq!(Decimal::new(2, 2), hand.big_blind);
        assert_eq!(Decimal::new(5, 2), hand.total_pot);
    }

    #[test_log::test]
    fn test_parse_file_uses_the_filename() {
        let dir = tempfile::tempdir().unwrap();

        let tournament = dir
            .path()
            .join("20130828_Super Freeroll Stade 2(55153749)_real_holdem_no-limit.txt");
        std::fs::write(&tournament, TOURNAMENT_FILE).unwrap();
        let parsed = WinamaxParser::default().parse_file(&tournament).unwrap();
        assert_eq!(3, parsed.hands.len());
        assert!(
            parsed
                .hands
                .values()
                .all(|h| h.game_type == GameType::Tournament)
        );

        let cash = dir.path().join("20160913_Tokyo 02_real_holdem_no-limit.txt");
        std::fs::write(&cash, CASH_FILE).unwrap();
        let parsed = WinamaxParser::default().parse_file(&cash).unwrap();
        assert_eq!(2, parsed.hands.len());
        assert!(parsed.hands.values().all(|h| h.game_type == GameType::Cash));
    }

    #[test_log::test]
    fn test_explicit_game_type_wins_over_filename() {
        let dir = tempfile::tempdir().unwrap();
        // Cash table named with parentheses, read as a tournament by name.
        let path = dir.path().join("20160913_Tokyo (02)_real_holdem_no-limit.txt");
        std::fs::write(&path, CASH_FILE).unwrap();

        let by_name = WinamaxParser::default().parse_file(&path).unwrap();
        assert_eq!(2, by_name.failures.len());

        let explicit = WinamaxParserBuilder::default()
            .game_type(GameType::Cash)
            .build()
            .parse_file(&path)
            .unwrap();
        assert_eq!(2, explicit.hands.len());
    }

    #[test_log::test]
    fn test_decode_hand() {
        let parsed = split_hands(TOURNAMENT_FILE);
        let text = &parsed.blocks["236883548206792705-4"];
        let hand = WinamaxParser::default().decode_hand(text).unwrap();
        assert_eq!("236883548206792705-4", hand.cardroom_hand_id);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            WinamaxParser::default().parse_file(&dir.path().join("nope(1).txt")),
            Err(HandHistoryError::Io(_))
        ));
    }
}
