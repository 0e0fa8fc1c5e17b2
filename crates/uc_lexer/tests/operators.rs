use uc_lexer::lex;
use uc_syntax::TokenKind;

fn values(src: &str, kind: TokenKind) -> Vec<String> {
    lex(src)
        .unwrap()
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.value.clone())
        .collect()
}

#[test]
fn operators_match_longest_first() {
    let ops = values("a **= b // c -> d := e ... f != g >>= h\n", TokenKind::Op);
    assert_eq!(ops, vec!["**=", "//", "->", ":=", "...", "!=", ">>="]);
}

#[test]
fn two_dots_are_two_operators() {
    assert_eq!(values("a..b\n", TokenKind::Op), vec![".", "."]);
}

#[test]
fn leading_dot_number() {
    assert_eq!(values("x = .5 + 1.\n", TokenKind::Number), vec![".5", "1."]);
}

#[test]
fn legacy_octal_splits() {
    assert_eq!(values("mode = 0777\n", TokenKind::Number), vec!["0", "777"]);
}

#[test]
fn unknown_characters_are_error_tokens() {
    let errs = values("a ! b $ c ? `d`\n", TokenKind::ErrorToken);
    assert_eq!(errs, vec!["!", "$", "?", "`", "`"]);
}

#[test]
fn stray_backslash_is_error_token() {
    assert_eq!(values("a \\ b\n", TokenKind::ErrorToken), vec!["\\"]);
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(values("1abc\n", TokenKind::Number), vec!["1"]);
    assert_eq!(values("1abc\n", TokenKind::Name), vec!["abc"]);
}

#[test]
fn numeric_symbol_is_error_token() {
    assert_eq!(values("x = ² + 1\n", TokenKind::ErrorToken), vec!["²"]);
}
