//! Lexer implementation.
//!
//! Scans Python source one physical line at a time. Lines are split after
//! `\n` and keep their terminator, so every byte of input lands in exactly
//! one line. Across lines the lexer carries the bracket depth, a pending
//! backslash continuation, a string literal left open at end of line, and
//! the indentation stack.
//!
//! Design: single linear pass, no lookbehind, positions computed per line.
//!
//! Related: `uc_syntax` (token records/errors), `tables` (operator and prefix sets).
use std::sync::Arc;

use uc_syntax::{
    Position, Token, TokenKind, TokenStream, TokenizeError, TokenizeErrorKind, char_len,
    is_ident_continue, is_ident_start,
};

use crate::tables::{MAX_OPERATOR_LEN, OPERATORS, STRING_PREFIXES};

const TAB_SIZE: u32 = 8;

/// A string literal still open at the end of a line.
struct OpenString {
    start: Position,
    text: String,
    line: Arc<str>,
    closer: &'static str,
    /// Single-quoted: every further line must end in a backslash continuation.
    needs_continuation: bool,
}

/// The physical line being scanned.
struct Line<'a> {
    text: &'a str,
    shared: Arc<str>,
    no: u32,
}

impl Line<'_> {
    fn pos(&self, byte: usize) -> Position {
        Position::new(self.no, char_len(&self.text[..byte]))
    }
}

enum SingleQuoted {
    Closed(usize),
    Continued,
    Unterminated,
}

/// Python lexer.
pub struct Lexer<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    indent_stack: Vec<u32>,
    paren_depth: u32,
    continued: bool,
    open_string: Option<OpenString>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Vec::new(),
            indent_stack: vec![0],
            paren_depth: 0,
            continued: false,
            open_string: None,
        }
    }

    /// Run the lexer over the whole input.
    pub fn lex(mut self) -> Result<TokenStream, TokenizeError> {
        let approx = self.input.len().saturating_div(4).max(32);
        self.tokens.reserve(approx);

        let mut lnum = 0u32;
        let mut last_line = "";
        let input = self.input;
        for text in input.split_inclusive('\n') {
            lnum += 1;
            last_line = text;
            let line = Line {
                text,
                shared: Arc::from(text),
                no: lnum,
            };
            self.lex_line(&line)?;
        }
        let eof_line = lnum + 1;

        if let Some(open) = &self.open_string {
            return Err(TokenizeError::new(TokenizeErrorKind::UnterminatedString, open.start)
                .with_line(&*open.line));
        }
        if self.paren_depth > 0 || self.continued {
            return Err(TokenizeError::new(
                TokenizeErrorKind::UnterminatedStatement,
                Position::new(eof_line, 0),
            ));
        }

        if !last_line.is_empty()
            && !last_line.ends_with(['\r', '\n'])
            && !last_line.trim().starts_with('#')
        {
            let col = char_len(last_line);
            self.tokens.push(Token::new(
                TokenKind::Newline,
                "",
                (lnum, col),
                (lnum, col + 1),
            ));
        }

        let at = Position::new(eof_line, 0);
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, "", at, at));
        }
        self.tokens.push(Token::new(TokenKind::EndMarker, "", at, at));

        Ok(TokenStream::new(self.tokens))
    }

    fn lex_line(&mut self, line: &Line<'_>) -> Result<(), TokenizeError> {
        let text = line.text;
        let mut pos = 0;

        if let Some(mut open) = self.open_string.take() {
            match scan_to_closer(text, 0, open.closer) {
                Some(end) => {
                    open.text.push_str(&text[..end]);
                    self.tokens.push(
                        Token::new(TokenKind::String, open.text, open.start, line.pos(end))
                            .with_line(open.line),
                    );
                    pos = end;
                }
                None if open.needs_continuation && !ends_with_continuation(text) => {
                    open.text.push_str(text);
                    self.tokens.push(
                        Token::new(
                            TokenKind::ErrorToken,
                            open.text,
                            open.start,
                            line.pos(text.len()),
                        )
                        .with_line(open.line),
                    );
                    return Ok(());
                }
                None => {
                    open.text.push_str(text);
                    self.open_string = Some(open);
                    return Ok(());
                }
            }
        } else if self.paren_depth == 0 && !self.continued {
            match self.lex_indentation(line)? {
                Some(p) => pos = p,
                None => return Ok(()),
            }
        } else {
            self.continued = false;
        }

        self.lex_tokens(line, pos);
        Ok(())
    }

    /// Measure indentation at the start of a logical line and emit
    /// `INDENT`/`DEDENT`. Blank and comment-only lines are consumed here;
    /// `None` means nothing is left to scan on this line.
    fn lex_indentation(&mut self, line: &Line<'_>) -> Result<Option<usize>, TokenizeError> {
        let text = line.text;
        let bytes = text.as_bytes();
        let mut column = 0u32;
        let mut pos = 0;
        while pos < bytes.len() {
            match bytes[pos] {
                b' ' => column += 1,
                b'\t' => column = (column / TAB_SIZE + 1) * TAB_SIZE,
                b'\x0c' => column = 0,
                _ => break,
            }
            pos += 1;
        }

        // Whitespace-only last line; its width is carried by the synthetic NEWLINE.
        if pos == bytes.len() {
            return Ok(None);
        }

        match bytes[pos] {
            b'#' => {
                let comment = text[pos..].trim_end_matches(['\r', '\n']);
                let end = pos + comment.len();
                self.push(TokenKind::Comment, pos, end, line);
                self.push(TokenKind::Nl, end, text.len(), line);
                return Ok(None);
            }
            b'\r' | b'\n' => {
                self.push(TokenKind::Nl, pos, text.len(), line);
                return Ok(None);
            }
            _ => {}
        }

        let top = *self.indent_stack.last().unwrap_or(&0);
        if column > top {
            self.indent_stack.push(column);
            self.push(TokenKind::Indent, 0, pos, line);
            return Ok(Some(pos));
        }

        if column < top {
            if !self.indent_stack.contains(&column) {
                return Err(TokenizeError::new(
                    TokenizeErrorKind::InconsistentDedent,
                    line.pos(pos),
                )
                .with_line(text));
            }
            while self.indent_stack.last().is_some_and(|&level| level > column) {
                self.indent_stack.pop();
                self.push(TokenKind::Dedent, pos, pos, line);
            }
        }

        Ok(Some(pos))
    }

    fn lex_tokens(&mut self, line: &Line<'_>, mut pos: usize) {
        let text = line.text;
        let bytes = text.as_bytes();

        while pos < bytes.len() {
            while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\x0c') {
                pos += 1;
            }
            let start = pos;
            let rest = &text[start..];
            let Some(c) = rest.chars().next() else {
                break;
            };

            match c {
                '\\' => {
                    if rest == "\\\n" || rest == "\\\r\n" {
                        self.continued = true;
                        return;
                    }
                    pos = start + 1;
                    self.push(TokenKind::ErrorToken, start, pos, line);
                }
                '\n' => {
                    pos = text.len();
                    self.push(self.line_break_kind(), start, pos, line);
                }
                '\r' if rest.starts_with("\r\n") => {
                    pos = start + 2;
                    self.push(self.line_break_kind(), start, pos, line);
                }
                '#' => {
                    pos = rest
                        .find(['\r', '\n'])
                        .map_or(text.len(), |off| start + off);
                    self.push(TokenKind::Comment, start, pos, line);
                }
                '0'..='9' => {
                    pos = scan_number(bytes, start).unwrap_or(start + 1);
                    self.push(TokenKind::Number, start, pos, line);
                }
                '.' if bytes.get(start + 1).is_some_and(u8::is_ascii_digit) => {
                    pos = scan_number(bytes, start).unwrap_or(start + 1);
                    self.push(TokenKind::Number, start, pos, line);
                }
                '\'' | '"' => {
                    pos = self.lex_string(line, start, start);
                }
                c if is_ident_start(c) => {
                    pos = match string_prefix_len(rest) {
                        Some(plen) => self.lex_string(line, start, start + plen),
                        None => start,
                    };
                    if pos == start {
                        pos = scan_word(text, start);
                        self.push(TokenKind::Name, start, pos, line);
                    }
                }
                c if c.is_alphanumeric() => {
                    pos = scan_word(text, start);
                    self.push(TokenKind::ErrorToken, start, pos, line);
                }
                c => {
                    pos = match operator_len(rest) {
                        Some(len) => {
                            match c {
                                '(' | '[' | '{' => self.paren_depth += 1,
                                ')' | ']' | '}' => {
                                    self.paren_depth = self.paren_depth.saturating_sub(1)
                                }
                                _ => {}
                            }
                            self.push(TokenKind::Op, start, start + len, line);
                            start + len
                        }
                        None => {
                            let end = start + c.len_utf8();
                            self.push(TokenKind::ErrorToken, start, end, line);
                            end
                        }
                    };
                }
            }
        }
    }

    /// Lex a string literal whose prefix starts at `start` and whose
    /// opening quote sits at `quote_at`. Returns the position to resume
    /// scanning from, or `start` when no string literal begins here.
    fn lex_string(&mut self, line: &Line<'_>, start: usize, quote_at: usize) -> usize {
        let text = line.text;
        let triple = if text.as_bytes()[quote_at] == b'\'' {
            "'''"
        } else {
            "\"\"\""
        };

        if text[quote_at..].starts_with(triple) {
            return match scan_to_closer(text, quote_at + 3, triple) {
                Some(end) => {
                    self.push(TokenKind::String, start, end, line);
                    end
                }
                None => {
                    self.open(line, start, triple, false);
                    text.len()
                }
            };
        }

        let closer = &triple[..1];
        match scan_single_quoted(text, quote_at + 1, closer.as_bytes()[0]) {
            SingleQuoted::Closed(end) => {
                self.push(TokenKind::String, start, end, line);
                end
            }
            SingleQuoted::Continued => {
                self.open(line, start, closer, true);
                text.len()
            }
            SingleQuoted::Unterminated if quote_at == start => {
                let end = start + 1;
                self.push(TokenKind::ErrorToken, start, end, line);
                end
            }
            // The prefix lexes as a name and the quote as an error token.
            SingleQuoted::Unterminated => start,
        }
    }

    fn open(&mut self, line: &Line<'_>, start: usize, closer: &'static str, continuation: bool) {
        self.open_string = Some(OpenString {
            start: line.pos(start),
            text: line.text[start..].to_string(),
            line: line.shared.clone(),
            closer,
            needs_continuation: continuation,
        });
    }

    fn line_break_kind(&self) -> TokenKind {
        if self.paren_depth > 0 {
            TokenKind::Nl
        } else {
            TokenKind::Newline
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize, line: &Line<'_>) {
        self.tokens.push(
            Token::new(kind, &line.text[start..end], line.pos(start), line.pos(end))
                .with_line(line.shared.clone()),
        );
    }
}

fn ends_with_continuation(text: &str) -> bool {
    text.ends_with("\\\n") || text.ends_with("\\\r\n")
}

/// Length of a string prefix that is directly followed by a quote.
fn string_prefix_len(rest: &str) -> Option<usize> {
    (1..=2).find(|&plen| {
        rest.get(..plen).is_some_and(|prefix| {
            STRING_PREFIXES.contains(prefix.to_ascii_lowercase().as_str())
                && matches!(rest.as_bytes().get(plen), Some(b'\'' | b'"'))
        })
    })
}

fn operator_len(rest: &str) -> Option<usize> {
    (1..=MAX_OPERATOR_LEN)
        .rev()
        .find(|&len| rest.get(..len).is_some_and(|op| OPERATORS.contains(op)))
}

fn scan_word(text: &str, start: usize) -> usize {
    text[start..]
        .char_indices()
        .find(|&(_, ch)| !is_ident_continue(ch))
        .map_or(text.len(), |(off, _)| start + off)
}

/// Find the end of a string body that began before `from`. A backslash
/// escapes the byte after it. Only ASCII bytes are compared, so stepping
/// into the middle of a multi-byte character is harmless.
fn scan_to_closer(text: &str, from: usize, closer: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let quote = closer.as_bytes()[0];
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote && bytes[i..].starts_with(closer.as_bytes()) => {
                return Some(i + closer.len());
            }
            _ => i += 1,
        }
    }
    None
}

fn scan_single_quoted(text: &str, from: usize, quote: u8) -> SingleQuoted {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                let tail = &text[i..];
                if tail == "\\\n" || tail == "\\\r\n" {
                    return SingleQuoted::Continued;
                }
                if i + 1 >= bytes.len() {
                    return SingleQuoted::Unterminated;
                }
                i += 2;
            }
            b'\n' => return SingleQuoted::Unterminated,
            b if b == quote => return SingleQuoted::Closed(i + 1),
            _ => i += 1,
        }
    }
    SingleQuoted::Unterminated
}

/// `[0-9](?:_?[0-9])*`
fn digits(b: &[u8], i: usize) -> Option<usize> {
    if !b.get(i).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let mut j = i + 1;
    loop {
        match b.get(j) {
            Some(d) if d.is_ascii_digit() => j += 1,
            Some(b'_') if b.get(j + 1).is_some_and(u8::is_ascii_digit) => j += 2,
            _ => return Some(j),
        }
    }
}

fn exponent(b: &[u8], i: usize) -> Option<usize> {
    if !matches!(b.get(i), Some(b'e' | b'E')) {
        return None;
    }
    let j = if matches!(b.get(i + 1), Some(b'+' | b'-')) {
        i + 2
    } else {
        i + 1
    };
    digits(b, j)
}

fn point_float(b: &[u8], i: usize) -> Option<usize> {
    let end = match digits(b, i) {
        Some(j) if b.get(j) == Some(&b'.') => digits(b, j + 1).unwrap_or(j + 1),
        Some(_) => return None,
        None if b.get(i) == Some(&b'.') => digits(b, i + 1)?,
        None => return None,
    };
    Some(exponent(b, end).unwrap_or(end))
}

fn float_number(b: &[u8], i: usize) -> Option<usize> {
    point_float(b, i).or_else(|| exponent(b, digits(b, i)?))
}

fn imaginary(b: &[u8], j: usize) -> Option<usize> {
    matches!(b.get(j), Some(b'j' | b'J')).then_some(j + 1)
}

fn radix_int(b: &[u8], i: usize, marker: u8, is_digit: fn(&u8) -> bool) -> Option<usize> {
    if b.get(i) != Some(&b'0') || !b.get(i + 1).is_some_and(|m| m.eq_ignore_ascii_case(&marker)) {
        return None;
    }
    let mut j = i + 2;
    loop {
        match b.get(j) {
            Some(d) if is_digit(d) => j += 1,
            Some(b'_') if b.get(j + 1).is_some_and(is_digit) => j += 2,
            _ => break,
        }
    }
    (j > i + 2).then_some(j)
}

fn decimal_int(b: &[u8], i: usize) -> Option<usize> {
    match b.get(i) {
        Some(b'0') => {
            let mut j = i + 1;
            loop {
                match b.get(j) {
                    Some(b'0') => j += 1,
                    Some(b'_') if b.get(j + 1) == Some(&b'0') => j += 2,
                    _ => return Some(j),
                }
            }
        }
        Some(b'1'..=b'9') => digits(b, i),
        _ => None,
    }
}

/// Numeric literal starting at `i`. Alternatives are tried in order and
/// the first that matches wins, so `0777` lexes as `0` then `777`.
fn scan_number(b: &[u8], i: usize) -> Option<usize> {
    digits(b, i)
        .and_then(|j| imaginary(b, j))
        .or_else(|| float_number(b, i).and_then(|j| imaginary(b, j)))
        .or_else(|| float_number(b, i))
        .or_else(|| radix_int(b, i, b'x', u8::is_ascii_hexdigit))
        .or_else(|| radix_int(b, i, b'b', |d| matches!(*d, b'0' | b'1')))
        .or_else(|| radix_int(b, i, b'o', |d| matches!(*d, b'0'..=b'7')))
        .or_else(|| decimal_int(b, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(src: &str) -> &str {
        let end = scan_number(src.as_bytes(), 0).unwrap();
        &src[..end]
    }

    #[test]
    fn number_alternatives() {
        assert_eq!(number("1_000 "), "1_000");
        assert_eq!(number("0x_ff)"), "0x_ff");
        assert_eq!(number("0b101"), "0b101");
        assert_eq!(number("0o17"), "0o17");
        assert_eq!(number("3.14e-2"), "3.14e-2");
        assert_eq!(number("1."), "1.");
        assert_eq!(number(".5j"), ".5j");
        assert_eq!(number("1e5J"), "1e5J");
        assert_eq!(number("2e"), "2");
        assert_eq!(number("0777"), "0");
        assert_eq!(number("10L"), "10");
        assert_eq!(number("1__0"), "1");
    }

    #[test]
    fn single_quoted_scan() {
        assert!(matches!(
            scan_single_quoted("'a\\'b' + 1\n", 1, b'\''),
            SingleQuoted::Closed(6)
        ));
        assert!(matches!(
            scan_single_quoted("'abc\\\n", 1, b'\''),
            SingleQuoted::Continued
        ));
        assert!(matches!(
            scan_single_quoted("'abc\n", 1, b'\''),
            SingleQuoted::Unterminated
        ));
    }

    #[test]
    fn prefixes_need_a_quote() {
        assert_eq!(string_prefix_len("rb'x'"), Some(2));
        assert_eq!(string_prefix_len("F\"x\""), Some(1));
        assert_eq!(string_prefix_len("bx'"), None);
        assert_eq!(string_prefix_len("ub''"), None);
    }
}
