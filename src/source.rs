//! Reading hand history files and what their names tell.

use std::path::Path;

use crate::core::HandHistoryError;
use crate::history::GameType;

/// Read a whole hand history file as UTF-8, dropping a leading byte
/// order mark.
pub fn read_hand_file(path: &Path) -> Result<String, HandHistoryError> {
    let text = std::fs::read_to_string(path)?;
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

/// Tournament files carry the tournament id in parentheses, cash game
/// files don't.
///
/// This is only a heuristic: a cash table name holding parentheses
/// reads as a tournament. Prefer telling the parser the game type.
pub fn game_type_from_filename(file_name: &str) -> GameType {
    if file_name.contains('(') && file_name.contains(')') {
        GameType::Tournament
    } else {
        GameType::Cash
    }
}

/// The tournament id between the first pair of parentheses.
///
/// ```
/// use cardroom_history::source::game_id_from_filename;
///
/// let id = game_id_from_filename("20170722_Qualif. Ticket 5€(201796103)_real_holdem_no-limit.txt").unwrap();
/// assert_eq!("201796103", id);
/// ```
pub fn game_id_from_filename(file_name: &str) -> Result<String, HandHistoryError> {
    let start = file_name.find('(').map(|p| p + 1);
    let end = start.and_then(|s| file_name[s..].find(')').map(|p| p + s));
    start
        .zip(end)
        .and_then(|(start, end)| file_name.get(start..end))
        .map(str::to_string)
        .ok_or_else(|| HandHistoryError::malformed("game id", file_name))
}
