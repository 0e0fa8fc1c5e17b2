use uc_lexer::lex;
use uc_normalize::{delex, scrub, stringify};
use uc_syntax::TokenKind;

const MODULE: &str = r#"#!/usr/bin/env python
"""Module docstring
spanning lines."""

import os  # trailing comment


class Widget(object):

    def __init__(self, name, *args, **kwargs):
        self.name = name
        self.data = {
            'a': 1,   'b': [1, 2,
                        3],
        }

    def render(self):
        if self.name:
            return u'<%s>' % (self.name,)
        # fall through
        return None
"#;

#[test]
fn module_round_trips() {
    let toks = lex(MODULE).unwrap();
    assert_eq!(delex(&toks).unwrap(), MODULE);
}

#[test]
fn round_trip_without_final_newline() {
    for src in ["a=1", "if x:\n  y", "x   ", "   ", "# only", ""] {
        let toks = lex(src).unwrap();
        assert_eq!(delex(&toks).unwrap(), src, "source {src:?}");
    }
}

#[test]
fn round_trip_keeps_crlf_and_blank_line_padding() {
    let src = "x = 1\r\n   \r\ndef f():  \r\n    pass\r\n";
    let toks = lex(src).unwrap();
    assert_eq!(delex(&toks).unwrap(), src);
}

#[test]
fn scrub_leaves_one_newline_per_statement() {
    let toks = lex("x = 1\n\n\ny = 2\n").unwrap();
    let scrubbed = scrub(&toks);
    let newlines = scrubbed
        .iter()
        .filter(|t| t.kind == TokenKind::Newline)
        .count();
    assert_eq!(newlines, 2);
    assert!(scrubbed.iter().all(|t| t.kind != TokenKind::Nl));
}

#[test]
fn scrub_removes_comments_and_newline_before_indent() {
    let toks = lex("def f():\n    # body\n    return 1\n").unwrap();
    let kinds: Vec<_> = scrub(&toks).iter().map(|t| t.kind).collect();
    use TokenKind::*;
    assert_eq!(
        kinds,
        vec![Name, Name, Op, Op, Op, Indent, Name, Number, Newline, Dedent, EndMarker]
    );
}

#[test]
fn scrubbed_source_does_not_round_trip() {
    let src = "def f():\n\n    # body\n    return 1\n";
    let toks = lex(src).unwrap();
    assert_eq!(delex(&toks).unwrap(), src);
    let rebuilt = delex(&scrub(&toks)).unwrap();
    assert_ne!(rebuilt, src);
    assert_eq!(rebuilt, "def f():\\\n\n\n    return 1\n");
}

#[test]
fn stringified_stream() {
    let toks = lex("x = 1  # set\n").unwrap();
    let shown: Vec<_> = toks.iter().map(|t| stringify(t).into_owned()).collect();
    assert_eq!(
        shown,
        vec!["x", "=", "1", "<COMMENT>", "<NEWLINE>", "<ENDMARKER>"]
    );
}
