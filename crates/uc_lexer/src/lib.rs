//! uc_lexer: Python tokenizer.
//!
//! Turns source text into a `TokenStream` with the same categories and
//! positions the host tokenizer reports.
//! Entry points: `lex(source)`, `Lexer::new(input).lex()` and
//! `PythonTokenizer`, the `uc_syntax::Tokenizer` implementation.
mod lexer;
mod tables;

pub use lexer::Lexer;
use uc_syntax::{TokenStream, TokenizeError, Tokenizer};

pub fn lex(source: &str) -> Result<TokenStream, TokenizeError> {
    Lexer::new(source).lex()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PythonTokenizer;

impl Tokenizer for PythonTokenizer {
    fn language(&self) -> &'static str {
        "python"
    }

    fn lex(&self, source: &str) -> Result<TokenStream, TokenizeError> {
        lex(source)
    }
}
