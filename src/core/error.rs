use thiserror::Error;

/// This is the error type for decoding hand histories.
/// It uses `thiserror` to provide readable error messages.
#[derive(Error, Debug)]
pub enum HandHistoryError {
    #[error("Unable to parse value char {0:?}")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit char {0:?}")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Malformed {field} in line {line:?}")]
    MalformedField { field: &'static str, line: String },
    #[error("No seated player named {0:?}")]
    UnknownActor(String),
    #[error("No action keyword in line {0:?}")]
    NoActionKeyword(String),
    #[error("Missing section starting with {0:?}")]
    MissingSection(&'static str),
    #[error("Hand {0} is followed by another hand in the same block")]
    MultipleHands(String),
    #[error("Unexpected line {0:?}")]
    UnexpectedLine(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl HandHistoryError {
    pub(crate) fn malformed(field: &'static str, line: &str) -> Self {
        HandHistoryError::MalformedField {
            field,
            line: line.to_string(),
        }
    }
}
