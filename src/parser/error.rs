use thiserror::Error;

use super::span::Location;
use crate::error::Error;

/// Errors produced while scanning or parsing.
///
/// Lexical and syntactic errors are local and recoverable: the parser
/// records them, wraps the offending tokens in an `Error` node, and
/// continues with the surrounding structure intact.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at {location}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
    },

    #[error("unexpected end of input, expected {expected} at {location}")]
    UnexpectedEndOfInput {
        expected: String,
        location: Location,
    },

    #[error("{message} at {location}")]
    InvalidSyntax { message: String, location: Location },

    #[error("unrecognized input {text:?} at {location}")]
    Lexical { text: String, location: Location },
}

impl ParseError {
    pub fn unexpected_token(expected: impl Into<String>, found: impl Into<String>, location: Location) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            location,
        }
    }

    pub fn unexpected_end_of_input(expected: impl Into<String>, location: Location) -> Self {
        ParseError::UnexpectedEndOfInput {
            expected: expected.into(),
            location,
        }
    }

    pub fn invalid_syntax(message: impl Into<String>, location: Location) -> Self {
        ParseError::InvalidSyntax {
            message: message.into(),
            location,
        }
    }

    /// Get the location of the error
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedToken { location, .. } => *location,
            ParseError::UnexpectedEndOfInput { location, .. } => *location,
            ParseError::InvalidSyntax { location, .. } => *location,
            ParseError::Lexical { location, .. } => *location,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let location = err.location();
        match err {
            ParseError::Lexical { text, .. } => Error::Lexical {
                line: location.line,
                column: location.column,
                message: format!("unrecognized input {:?}", text),
            },
            other => Error::Parse {
                line: location.line,
                column: location.column,
                message: other.to_string(),
            },
        }
    }
}
