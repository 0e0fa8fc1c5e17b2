use std::process::ExitCode;

use uc_normalize::scrub;
use uc_syntax::render_tokenize_error;

use crate::args::TokensArgs;
use crate::commands::common::{EXIT_FAILED, EXIT_USAGE, escape_visible, print_lines, read_source};

pub(crate) fn run(args: &TokensArgs) -> ExitCode {
    let source = match read_source(&args.file) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    let mut stream = match uc_lexer::lex(&source) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", render_tokenize_error(&args.file.display().to_string(), &e));
            return ExitCode::from(EXIT_FAILED);
        }
    };
    if args.scrub {
        stream = scrub(&stream);
    }

    if args.json {
        return match serde_json::to_string(&stream) {
            Ok(json) => print_lines([json]),
            Err(e) => {
                eprintln!("json error: {e}");
                ExitCode::from(EXIT_FAILED)
            }
        };
    }
    print_lines(stream.iter().map(|t| {
        format!("{}\t{}-{}\t{}", t.kind, t.start, t.end, escape_visible(&t.value))
    }))
}
