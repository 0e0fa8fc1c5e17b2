//! Developer tasks: `cargo run -p xtask -- <command>`.
use std::env;
use std::path::Path;

mod process;

use process::{format_output, run_args, run_checked};

const CORPUS_DIR: &str = "testdata";

fn main() {
    let mut args = env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "verify".to_string());
    let next = args.next();
    let result = match cmd.as_str() {
        "verify" => verify(),
        "fmt" => fmt_check(),
        "clippy" => clippy(),
        "lint" => lint_strict(),
        "test" => test_workspace(),
        "corpus" => corpus(next.as_deref().unwrap_or(CORPUS_DIR)),
        _ => usage_error(&cmd),
    };
    if let Err(msg) = result {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

fn usage_error(cmd: &str) -> Result<(), String> {
    Err(format!(
        "Unknown command: {cmd}\nUsage: cargo run -p xtask -- <verify|fmt|clippy|lint|test|corpus [dir]>"
    ))
}

fn verify() -> Result<(), String> {
    fmt_check()?;
    clippy()?;
    test_workspace()?;
    if Path::new(CORPUS_DIR).is_dir() {
        corpus(CORPUS_DIR)?;
    } else {
        eprintln!("skip corpus: no {CORPUS_DIR}/ directory");
    }
    Ok(())
}

fn fmt_check() -> Result<(), String> {
    run_checked("cargo", &["fmt", "--all", "--", "--check"])
}

fn clippy() -> Result<(), String> {
    run_checked(
        "cargo",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )
}

fn lint_strict() -> Result<(), String> {
    run_checked(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
            "-W",
            "clippy::all",
            "-W",
            "clippy::perf",
            "-W",
            "clippy::nursery",
        ],
    )
}

fn test_workspace() -> Result<(), String> {
    run_checked("cargo", &["test", "--workspace", "--all-features"])
}

/// Round-trip every `.py` file under `dir` through the release binary.
fn corpus(dir: &str) -> Result<(), String> {
    if !Path::new(dir).is_dir() {
        return Err(format!("corpus: {dir} is not a directory"));
    }
    let o = run_args(
        "cargo",
        &["run", "-q", "--release", "-p", "uc_cli", "--bin", "uc", "--", "roundtrip", dir],
    )?;
    let summary = String::from_utf8_lossy(&o.stdout);
    if !o.status.success() {
        return Err(format!("corpus round-trip failed:\n{}", format_output(&o)));
    }
    eprintln!("corpus: {}", summary.trim());
    Ok(())
}
