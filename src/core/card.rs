use std::fmt;

use super::HandHistoryError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Rank character as written by the cardroom logs.
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

/// A single playing card as it appears in a hand history:
/// a rank followed by a suit, e.g. `Ks` or `Td`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a two character token.
///
/// # Examples
///
/// ```
/// use cardroom_history::core::{Card, Suit, Value};
///
/// let card = Card::try_from("Ks").unwrap();
/// assert_eq!(Card::new(Value::King, Suit::Spade), card);
/// ```
impl TryFrom<&str> for Card {
    type Error = HandHistoryError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let mut chars = token.chars();
        let value_char = chars.next().ok_or(HandHistoryError::TooFewChars)?;
        let suit_char = chars.next().ok_or(HandHistoryError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(HandHistoryError::UnparsedCharsRemaining);
        }
        let value =
            Value::from_char(value_char).ok_or(HandHistoryError::UnexpectedValueChar(value_char))?;
        let suit =
            Suit::from_char(suit_char).ok_or(HandHistoryError::UnexpectedSuitChar(suit_char))?;
        Ok(Card::new(value, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 > c2);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            Card::new(Value::Ten, Suit::Diamond),
            Card::try_from("Td").unwrap()
        );
        assert_eq!(
            Card::new(Value::Two, Suit::Heart),
            Card::try_from("2h").unwrap()
        );
        assert_eq!(
            Card::new(Value::Ace, Suit::Club),
            Card::try_from("Ac").unwrap()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Card::try_from("K"),
            Err(HandHistoryError::TooFewChars)
        ));
        assert!(matches!(
            Card::try_from("Ksx"),
            Err(HandHistoryError::UnparsedCharsRemaining)
        ));
        assert!(matches!(
            Card::try_from("1s"),
            Err(HandHistoryError::UnexpectedValueChar('1'))
        ));
        assert!(matches!(
            Card::try_from("Kx"),
            Err(HandHistoryError::UnexpectedSuitChar('x'))
        ));
    }

    #[test]
    fn test_display_is_lossless() {
        for value in Value::values() {
            for suit in Suit::suits() {
                let card = Card::new(value, suit);
                assert_eq!(card, Card::try_from(card.to_string().as_str()).unwrap());
            }
        }
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
