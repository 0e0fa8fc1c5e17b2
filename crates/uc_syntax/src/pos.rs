//! Source positions.
//!
//! Lines are 1-based, columns are 0-based and counted in characters.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(line, col)` point in source text.
///
/// Serialized as a two-element array `[line, col]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// The first column of the first line.
    pub const fn origin() -> Self {
        Self::new(1, 0)
    }
}

impl From<(u32, u32)> for Position {
    fn from((line, col): (u32, u32)) -> Self {
        Self::new(line, col)
    }
}

impl From<Position> for (u32, u32) {
    fn from(p: Position) -> Self {
        (p.line, p.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(3, 1) < Position::new(3, 2));
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(4, 2)).unwrap();
        assert_eq!(json, "[4,2]");
        let back: Position = serde_json::from_str("[7,0]").unwrap();
        assert_eq!(back, Position::new(7, 0));
    }
}
