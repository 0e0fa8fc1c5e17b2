//! uc_normalize: token stream transforms.
//!
//! Display strings for single tokens, lossy scrubbing of layout noise,
//! and reconstruction of source text from a token stream.
mod delex;
mod scrub;
mod stringify;

pub use delex::delex;
pub use scrub::scrub;
pub use stringify::stringify;
