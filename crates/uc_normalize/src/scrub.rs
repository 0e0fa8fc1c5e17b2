use uc_syntax::{Token, TokenKind, TokenStream};

/// Drop layout noise from a token stream.
///
/// Comments and `NL` tokens go first. Of what remains, a `NEWLINE` is
/// dropped when the next token is another `NEWLINE` or an `INDENT`.
/// Order is preserved and nothing is invented, and the removed tokens
/// cannot be recovered.
pub fn scrub(stream: &[Token]) -> TokenStream {
    let kept: Vec<&Token> = stream
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Comment | TokenKind::Nl))
        .collect();

    kept.iter()
        .enumerate()
        .filter(|&(i, t)| {
            t.kind != TokenKind::Newline
                || !kept
                    .get(i + 1)
                    .is_some_and(|next| matches!(next.kind, TokenKind::Newline | TokenKind::Indent))
        })
        .map(|(_, t)| (*t).clone())
        .collect()
}
