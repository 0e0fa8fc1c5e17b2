//! Token definitions.
//!
//! The closed set of lexical categories produced by the Python tokenizer,
//! and the token record carried through every stage of the pipeline.
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Position;

/// Token kind.
///
/// Wire names match the category names of the host tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// End of input.
    #[serde(rename = "ENDMARKER")]
    EndMarker,
    /// Identifier or keyword.
    #[serde(rename = "NAME")]
    Name,
    /// Numeric literal.
    #[serde(rename = "NUMBER")]
    Number,
    /// String literal, including prefix and quotes.
    #[serde(rename = "STRING")]
    String,
    /// End of a logical line.
    #[serde(rename = "NEWLINE")]
    Newline,
    /// Indentation increase.
    #[serde(rename = "INDENT")]
    Indent,
    /// Indentation decrease.
    #[serde(rename = "DEDENT")]
    Dedent,
    /// Operator or delimiter.
    #[serde(rename = "OP")]
    Op,
    /// `#` comment, without its line terminator.
    #[serde(rename = "COMMENT")]
    Comment,
    /// Non-logical line break (blank line, or inside brackets).
    #[serde(rename = "NL")]
    Nl,
    /// Text the scanner could not classify.
    #[serde(rename = "ERRORTOKEN")]
    ErrorToken,
}

impl TokenKind {
    pub const ALL: [TokenKind; 11] = [
        TokenKind::EndMarker,
        TokenKind::Name,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Newline,
        TokenKind::Indent,
        TokenKind::Dedent,
        TokenKind::Op,
        TokenKind::Comment,
        TokenKind::Nl,
        TokenKind::ErrorToken,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::EndMarker => "ENDMARKER",
            TokenKind::Name => "NAME",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Op => "OP",
            TokenKind::Comment => "COMMENT",
            TokenKind::Nl => "NL",
            TokenKind::ErrorToken => "ERRORTOKEN",
        }
    }

    /// Structural markers that never cover source text of their own.
    pub fn is_marker(self) -> bool {
        matches!(self, TokenKind::Dedent | TokenKind::EndMarker)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token.
///
/// Equality compares the record fields only; `line` is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Exact source text covered by the token.
    pub value: String,
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
    /// Physical line the token begins on. Diagnostics only; never sent.
    #[serde(skip)]
    pub line: Option<Arc<str>>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        value: impl Into<String>,
        start: impl Into<Position>,
        end: impl Into<Position>,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            start: start.into(),
            end: end.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: Arc<str>) -> Self {
        self.line = Some(line);
        self
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.value == other.value
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Token {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_record() {
        let tok = Token::new(TokenKind::Name, "x", (1, 0), (1, 1)).with_line(Arc::from("x = 1\n"));
        let json = serde_json::to_value(&tok).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "NAME", "value": "x", "start": [1, 0], "end": [1, 1] })
        );
    }

    #[test]
    fn wire_names_agree_with_as_str() {
        for kind in TokenKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn decoded_record_equals_lexed_token() {
        let lexed = Token::new(TokenKind::Op, "+", (2, 3), (2, 4)).with_line(Arc::from("a + b\n"));
        let back: Token = serde_json::from_str(&serde_json::to_string(&lexed).unwrap()).unwrap();
        assert!(back.line.is_none());
        assert_eq!(back, lexed);
    }
}
