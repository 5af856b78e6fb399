use rust_decimal::Decimal;

use super::fields;
use crate::core::HandHistoryError;
use crate::history::GameType;

/// The field extraction rules that change between the variants of a
/// room's log format.
///
/// The phase scanners are shared by every variant, only these
/// stake and identity extractors differ.
pub trait FieldRules: Send + Sync {
    fn game_type(&self) -> GameType;

    fn buy_in(&self, header: &str, symbol: &str) -> Result<Decimal, HandHistoryError>;

    fn fee(&self, header: &str, symbol: &str) -> Result<Decimal, HandHistoryError>;

    fn level(&self, header: &str) -> Result<u32, HandHistoryError>;

    fn small_blind(&self, header: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
        fields::small_blind(header, symbol)
    }

    fn big_blind(&self, header: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
        fields::big_blind(header, symbol)
    }

    fn table_id(&self, table_line: &str) -> Result<String, HandHistoryError>;

    /// Rake is not read from the summary yet; this always yields zero.
    // TODO: read `Rake 0.05€` from cash game summaries.
    fn rake(&self, _total_pot_line: &str, _symbol: &str) -> Result<Decimal, HandHistoryError> {
        Ok(Decimal::ZERO)
    }
}

/// Tournament hands: buy-in, fee and level are in the header and tables
/// are numbered inside the tournament.
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentRules;

impl FieldRules for TournamentRules {
    fn game_type(&self) -> GameType {
        GameType::Tournament
    }

    fn buy_in(&self, header: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
        fields::buy_in(header, symbol)
    }

    fn fee(&self, header: &str, symbol: &str) -> Result<Decimal, HandHistoryError> {
        fields::fee(header, symbol)
    }

    fn level(&self, header: &str) -> Result<u32, HandHistoryError> {
        fields::level(header)
    }

    fn table_id(&self, table_line: &str) -> Result<String, HandHistoryError> {
        fields::tournament_table_id(table_line)
    }
}

/// Cash game hands have no buy-in, fee or level, and the table is
/// identified by its whole name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashGameRules;

impl FieldRules for CashGameRules {
    fn game_type(&self) -> GameType {
        GameType::Cash
    }

    fn buy_in(&self, _header: &str, _symbol: &str) -> Result<Decimal, HandHistoryError> {
        Ok(Decimal::ZERO)
    }

    fn fee(&self, _header: &str, _symbol: &str) -> Result<Decimal, HandHistoryError> {
        Ok(Decimal::ZERO)
    }

    fn level(&self, _header: &str) -> Result<u32, HandHistoryError> {
        Ok(0)
    }

    fn table_id(&self, table_line: &str) -> Result<String, HandHistoryError> {
        fields::cash_table_id(table_line)
    }
}

static TOURNAMENT: TournamentRules = TournamentRules;
static CASH_GAME: CashGameRules = CashGameRules;

/// The rules to decode hands of the given game type.
pub fn rules_for(game_type: GameType) -> &'static dyn FieldRules {
    match game_type {
        GameType::Tournament => &TOURNAMENT,
        GameType::Cash => &CASH_GAME,
    }
}
