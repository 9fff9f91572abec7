use thiserror::Error;

/// Errors that can occur when parsing an expression.
///
/// Every variant that points at a specific place in the input carries the
/// byte `offset` of the offending token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("expected {expected} at offset {offset}, found {found}")]
    UnexpectedToken {
        offset: usize,
        expected: &'static str,
        found: String,
    },

    #[error("expected {expected} at end of input")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown name {name:?} at offset {offset}")]
    UnknownName { offset: usize, name: String },

    #[error("{name:?} at offset {offset} is not a function")]
    NotCallable { offset: usize, name: String },

    #[error("function {name:?} at offset {offset} must be called, as in {name}(x)")]
    MissingCall { offset: usize, name: String },

    #[error("expression nests too deeply at offset {offset}")]
    TooDeep { offset: usize },
}

impl ParseError {
    /// Returns the byte offset of the error in the input, if it has one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Empty | Self::UnexpectedEnd { .. } => None,
            Self::UnexpectedChar { offset, .. }
            | Self::InvalidNumber { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnknownName { offset, .. }
            | Self::NotCallable { offset, .. }
            | Self::MissingCall { offset, .. }
            | Self::TooDeep { offset } => Some(*offset),
        }
    }
}
