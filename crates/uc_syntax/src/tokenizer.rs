use crate::{TokenStream, TokenizeError};

/// A lexical scanner for one source language.
///
/// Implementations hold no mutable state between calls.
pub trait Tokenizer {
    /// Identifier of the source language, e.g. `"python"`.
    fn language(&self) -> &'static str;

    fn lex(&self, source: &str) -> Result<TokenStream, TokenizeError>;
}
