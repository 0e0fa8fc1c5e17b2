use thiserror::Error;

use crate::{Position, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenizeErrorKind {
    /// Input ended inside a string that spans lines.
    UnterminatedString,
    /// Input ended inside brackets or after a backslash continuation.
    UnterminatedStatement,
    /// A dedent that lands on no enclosing indentation level.
    InconsistentDedent,
}

impl TokenizeErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            TokenizeErrorKind::UnterminatedString => "EOF in multi-line string",
            TokenizeErrorKind::UnterminatedStatement => "EOF in multi-line statement",
            TokenizeErrorKind::InconsistentDedent => {
                "unindent does not match any outer indentation level"
            }
        }
    }
}

/// The source text cannot be scanned.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{} at line {}, column {}", .kind.message(), .pos.line, .pos.col)]
pub struct TokenizeError {
    pub kind: TokenizeErrorKind,
    pub pos: Position,
    /// The physical line holding `pos`, when there is one.
    pub line: Option<String>,
}

impl TokenizeError {
    pub fn new(kind: TokenizeErrorKind, pos: Position) -> Self {
        Self {
            kind,
            pos,
            line: None,
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }
}

/// A token stream whose positions cannot be replayed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error(
    "token #{index} ({kind}) starts at {start}, behind the reconstruction cursor at {cursor}"
)]
pub struct ReconstructionError {
    pub index: usize,
    pub kind: TokenKind,
    pub start: Position,
    pub cursor: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_error_names_position() {
        let err = TokenizeError::new(TokenizeErrorKind::UnterminatedString, Position::new(3, 4));
        assert_eq!(
            err.to_string(),
            "EOF in multi-line string at line 3, column 4"
        );
    }
}
