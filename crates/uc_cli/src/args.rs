use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uc_server::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE};

#[derive(Parser)]
#[command(name = "uc", version)]
#[command(about = "Tokenize, scrub and reconstruct Python source")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the token stream of a file
    Tokens(TokensArgs),
    /// Check that files reconstruct byte-for-byte from their tokens
    Roundtrip(RoundtripArgs),
    /// Answer tokenization requests on a ZeroMQ reply socket
    Serve(ServeArgs),
}

#[derive(Args)]
pub(crate) struct TokensArgs {
    pub file: PathBuf,
    /// Drop comments and blank-line noise first
    #[arg(long)]
    pub scrub: bool,
    /// Print the token records as one JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub(crate) struct RoundtripArgs {
    /// Files or directories; directories are searched for `.py` files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args)]
pub(crate) struct ServeArgs {
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    #[arg(long, value_name = "LANG", default_value = DEFAULT_LANGUAGE)]
    pub language: String,
}
