use crate::core::{Card, HandHistoryError};

/// Read every card of every `[..]` group on the line, left to right.
///
/// `*** TURN *** [9s 4d Tc][2d]` reads as four cards; the groups are
/// not told apart.
///
/// # Examples
///
/// ```
/// use cardroom_history::winamax::read_cards;
///
/// let cards = read_cards("Dealt to Mikrethor [Td 5d]").unwrap();
/// assert_eq!(2, cards.len());
/// assert_eq!("Td", cards[0].to_string());
/// ```
pub fn read_cards(line: &str) -> Result<Vec<Card>, HandHistoryError> {
    let mut cards = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        let group = &rest[open + 1..];
        let close = group
            .find(']')
            .ok_or_else(|| HandHistoryError::malformed("cards", line))?;
        for token in group[..close].split_whitespace() {
            cards.push(Card::try_from(token)?);
        }
        rest = &group[close + 1..];
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_hole_cards() {
        let cards = read_cards("Dealt to Mikrethor [Ks 3s]").unwrap();
        assert_eq!(
            vec![
                Card::new(Value::King, Suit::Spade),
                Card::new(Value::Three, Suit::Spade)
            ],
            cards
        );
    }

    #[test]
    fn test_several_groups() {
        let cards = read_cards("*** TURN *** [9s 4d Tc][2d]").unwrap();
        let tokens: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
        assert_eq!(vec!["9s", "4d", "Tc", "2d"], tokens);
    }

    #[test]
    fn test_no_groups() {
        assert!(read_cards("Seat 5: phillippo won 1140").unwrap().is_empty());
        assert!(read_cards("*** PRE-FLOP *** ").unwrap().is_empty());
    }

    #[test]
    fn test_summary_line() {
        let cards = read_cards(
            "Seat 2: Boubinho25 (big blind) showed [Ah Kd] and won 2000 with One pair : Aces",
        )
        .unwrap();
        assert_eq!(2, cards.len());
        assert_eq!(Card::new(Value::Ace, Suit::Heart), cards[0]);
    }

    #[test]
    fn test_bad_groups() {
        assert!(matches!(
            read_cards("Board: [9s 4d"),
            Err(HandHistoryError::MalformedField { field: "cards", .. })
        ));
        assert!(matches!(
            read_cards("Board: [9s 4x]"),
            Err(HandHistoryError::UnexpectedSuitChar('x'))
        ));
    }
}
