use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::debug;
use uc_normalize::delex;
use uc_syntax::render_tokenize_error;

use crate::args::RoundtripArgs;
use crate::commands::common::{EXIT_FAILED, EXIT_USAGE, read_source};

enum Outcome {
    Exact,
    Mismatch { line: usize },
    Failed(String),
}

pub(crate) fn run(args: &RoundtripArgs) -> ExitCode {
    let mut files = Vec::new();
    for path in &args.paths {
        if let Err(e) = collect_sources(path, &mut files) {
            eprintln!("{}: {e}", path.display());
            return ExitCode::from(EXIT_USAGE);
        }
    }

    let mut failed = 0usize;
    for file in &files {
        match check_file(file) {
            Outcome::Exact => debug!(file = %file.display(), "exact"),
            Outcome::Mismatch { line } => {
                failed += 1;
                eprintln!("{}:{line}: reconstruction differs", file.display());
            }
            Outcome::Failed(msg) => {
                failed += 1;
                eprintln!("{msg}");
            }
        }
    }

    println!("{} files, {} failed", files.len(), failed);
    if failed > 0 {
        ExitCode::from(EXIT_FAILED)
    } else {
        ExitCode::SUCCESS
    }
}

fn check_file(path: &Path) -> Outcome {
    let source = match read_source(path) {
        Ok(v) => v,
        Err(e) => return Outcome::Failed(e),
    };
    let stream = match uc_lexer::lex(&source) {
        Ok(v) => v,
        Err(e) => return Outcome::Failed(render_tokenize_error(&path.display().to_string(), &e)),
    };
    match delex(&stream) {
        Ok(text) if text == source => Outcome::Exact,
        Ok(text) => Outcome::Mismatch {
            line: first_difference(&source, &text),
        },
        Err(e) => Outcome::Failed(format!("{}: {e}", path.display())),
    }
}

/// 1-based line of the first byte where the two texts disagree.
fn first_difference(expected: &str, actual: &str) -> usize {
    let at = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| expected.len().min(actual.len()));
    expected.as_bytes()[..at].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Files are taken as given; directories contribute their `.py` files.
fn collect_sources(path: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    if !path.is_dir() {
        std::fs::metadata(path)?;
        out.push(path.to_path_buf());
        return Ok(());
    }
    let mut entries = std::fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    for entry in entries {
        if entry.is_dir() {
            collect_sources(&entry, out)?;
        } else if entry.extension().is_some_and(|ext| ext == "py") {
            out.push(entry);
        }
    }
    Ok(())
}
