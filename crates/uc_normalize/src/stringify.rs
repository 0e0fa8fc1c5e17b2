use std::borrow::Cow;

use uc_syntax::{Token, TokenKind, is_whitespace_only};

/// Short display form of a token.
///
/// Comments and tokens whose value is blank render as `<KIND>`; every
/// other token renders as its value. Never returns an empty string.
pub fn stringify(token: &Token) -> Cow<'_, str> {
    if token.kind == TokenKind::Comment || is_whitespace_only(&token.value) {
        Cow::Owned(format!("<{}>", token.kind))
    } else {
        Cow::Borrowed(token.value.as_str())
    }
}
