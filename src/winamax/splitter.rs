use std::collections::BTreeMap;

use tracing::event;

use super::decoder::NEW_HAND;
use super::fields;
use crate::core::HandHistoryError;

/// The hands of one log file, one text block per hand id.
#[derive(Debug, Default)]
pub struct HandBlocks {
    /// Hand id to the text of that hand, header included.
    pub blocks: BTreeMap<String, String>,
    /// Ids seen more than once. The last block read wins.
    pub duplicates: Vec<String>,
    /// Fragments whose hand id could not be read.
    pub rejected: Vec<HandHistoryError>,
}

/// Split a whole log on every header, one block per hand.
///
/// # Examples
///
/// ```
/// use cardroom_history::winamax::split_hands;
///
/// let text = "Winamax Poker - CashGame - HandId: #1-2-3 - x\n\nWinamax Poker - CashGame - HandId: #1-3-4 - y\n";
/// let split = split_hands(text);
/// assert_eq!(2, split.blocks.len());
/// assert!(split.blocks["1-2"].starts_with("Winamax Poker"));
/// ```
pub fn split_hands(text: &str) -> HandBlocks {
    let mut split = HandBlocks::default();

    for fragment in text.split(NEW_HAND).filter(|f| !f.trim().is_empty()) {
        let block = format!("{NEW_HAND}{fragment}");
        match fields::hand_id(&block) {
            Ok(id) => {
                if split.blocks.insert(id.clone(), block).is_some() {
                    event!(tracing::Level::WARN, hand_id = %id, "Duplicate hand id, keeping the last one");
                    split.duplicates.push(id);
                }
            }
            Err(e) => {
                event!(tracing::Level::WARN, error = %e, "Hand without a readable id");
                split.rejected.push(e);
            }
        }
    }
    split
}
