/// Currency the stakes of a hand are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// The only currency Winamax uses.
    #[default]
    Euro,
    Dollar,
    Pound,
}

impl Currency {
    /// The money symbol stripped from amounts before conversion.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Euro => "€",
            Currency::Dollar => "$",
            Currency::Pound => "£",
        }
    }
}

/// The room that produced a hand history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    #[default]
    Winamax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameType {
    #[default]
    Tournament,
    Cash,
}
