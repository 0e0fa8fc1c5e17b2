//! uc_syntax: shared lexical vocabulary.
//!
//! Token records, positions, token streams, the tokenizer seam and the
//! error types every other crate in the workspace speaks in.
mod error;
mod pos;
mod render;
mod stream;
mod token;
mod tokenizer;
mod util;

pub use error::{ReconstructionError, TokenizeError, TokenizeErrorKind};
pub use pos::Position;
pub use render::render_tokenize_error;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use util::{char_len, is_ident_continue, is_ident_start, is_whitespace_only};
