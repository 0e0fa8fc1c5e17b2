pub(crate) mod common;
pub(crate) mod roundtrip;
pub(crate) mod serve;
pub(crate) mod tokens;
