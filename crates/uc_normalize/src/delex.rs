//! Source reconstruction.
//!
//! Replays token positions with a `(line, col)` cursor: line breaks to
//! reach each token's line, spaces to reach its column, then its value.
//! Gaps between tokens are assumed to be spaces; tabs, form feeds and the
//! backslash of a line continuation are not recorded by the lexer and come
//! back as spaces or as a plain continuation.
use uc_syntax::{Position, ReconstructionError, Token, char_len};

/// Rebuild source text from tokens.
///
/// Exact for an unscrubbed stream lexed from space-separated source.
/// A scrubbed stream yields best-effort text.
pub fn delex(stream: &[Token]) -> Result<String, ReconstructionError> {
    let approx: usize = stream.iter().map(|t| t.value.len() + 1).sum();
    let mut out = String::with_capacity(approx);
    let mut cursor = Position::origin();

    for (index, tok) in stream.iter().enumerate() {
        if tok.start < cursor {
            return Err(ReconstructionError {
                index,
                kind: tok.kind,
                start: tok.start,
                cursor,
            });
        }
        // Zero-width DEDENT/ENDMARKER sit past the last line; they add no text.
        if tok.kind.is_marker() && tok.value.is_empty() {
            continue;
        }

        while cursor.line < tok.start.line {
            if cursor.col > 0 {
                out.push('\\');
            }
            out.push('\n');
            cursor.line += 1;
            cursor.col = 0;
        }
        out.extend(std::iter::repeat_n(' ', (tok.start.col - cursor.col) as usize));
        out.push_str(&tok.value);

        match tok.value.rfind('\n') {
            Some(last) => {
                cursor.line += tok.value.matches('\n').count() as u32;
                cursor.col = char_len(&tok.value[last + 1..]);
            }
            None => cursor.col = tok.start.col + char_len(&tok.value),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_syntax::TokenKind;

    #[test]
    fn pads_to_columns_and_lines() {
        let toks = vec![
            Token::new(TokenKind::Name, "a", (1, 0), (1, 1)),
            Token::new(TokenKind::Op, "=", (1, 4), (1, 5)),
            Token::new(TokenKind::Newline, "\n", (1, 5), (1, 6)),
            Token::new(TokenKind::Name, "b", (3, 2), (3, 3)),
        ];
        assert_eq!(delex(&toks).unwrap(), "a   =\n\n  b");
    }

    #[test]
    fn multiline_values_move_the_cursor() {
        let toks = vec![
            Token::new(TokenKind::String, "'''x\nyz'''", (1, 0), (2, 5)),
            Token::new(TokenKind::Op, "+", (2, 6), (2, 7)),
        ];
        assert_eq!(delex(&toks).unwrap(), "'''x\nyz''' +");
    }

    #[test]
    fn mid_line_jump_becomes_a_continuation() {
        let toks = vec![
            Token::new(TokenKind::Name, "x", (1, 0), (1, 1)),
            Token::new(TokenKind::Name, "y", (2, 4), (2, 5)),
        ];
        assert_eq!(delex(&toks).unwrap(), "x\\\n    y");
    }

    #[test]
    fn markers_emit_nothing() {
        let toks = vec![
            Token::new(TokenKind::Name, "x", (1, 0), (1, 1)),
            Token::new(TokenKind::Newline, "", (1, 1), (1, 2)),
            Token::new(TokenKind::Dedent, "", (2, 0), (2, 0)),
            Token::new(TokenKind::EndMarker, "", (2, 0), (2, 0)),
        ];
        assert_eq!(delex(&toks).unwrap(), "x");
    }

    #[test]
    fn backwards_start_is_rejected() {
        let toks = vec![
            Token::new(TokenKind::Name, "abc", (1, 0), (1, 3)),
            Token::new(TokenKind::Name, "d", (1, 1), (1, 2)),
        ];
        let err = delex(&toks).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.start, Position::new(1, 1));
        assert_eq!(err.cursor, Position::new(1, 3));
    }

    #[test]
    fn line_zero_is_behind_the_origin() {
        let toks = vec![Token::new(TokenKind::Name, "a", (0, 0), (0, 1))];
        assert!(delex(&toks).is_err());
    }
}
