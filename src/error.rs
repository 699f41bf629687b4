use std::fmt;

use thiserror::Error;

/// Position inside the decoded text. `offset` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Expected string key")]
    ExpectedStringKey,
    #[error("Expected : after key")]
    ExpectedColon,
    #[error("Expected }}")]
    ExpectedCloseBrace,
    #[error("Expected ]")]
    ExpectedCloseBracket,
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Expected {0}")]
    ExpectedLiteral(&'static str),
    #[error("Invalid number")]
    InvalidNumber,
    #[error("Unexpected trailing content")]
    TrailingContent,
    #[error("Nesting too deep")]
    DepthLimitExceeded,
}

/// A grammar violation together with where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at {location}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub location: Location,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// Human-readable message without the position suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn offset(&self) -> usize {
        self.location.offset
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("serialize failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("deserialize failed: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// The decode failure behind this error, if there is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}
