use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

/// Usage and I/O failures.
pub(crate) const EXIT_USAGE: u8 = 2;
/// The input was read but did not pass.
pub(crate) const EXIT_FAILED: u8 = 1;

pub(crate) fn read_source(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("{}: read failed: {e}", path.display()))
}

/// Write lines to stdout, stopping quietly when the reader goes away.
pub(crate) fn print_lines<I>(lines: I) -> ExitCode
where
    I: IntoIterator<Item = String>,
{
    let mut out = io::stdout().lock();
    for line in lines {
        if let Err(e) = writeln!(out, "{line}") {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return ExitCode::SUCCESS;
            }
            eprintln!("stdout error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    }
    ExitCode::SUCCESS
}

pub(crate) fn escape_visible(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0c' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out
}
