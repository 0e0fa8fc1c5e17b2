use std::process::ExitCode;

use tracing::error;
use uc_server::{ServerConfig, ServerError};

use crate::args::ServeArgs;
use crate::commands::common::{EXIT_FAILED, EXIT_USAGE};

pub(crate) fn run(args: &ServeArgs) -> ExitCode {
    let config = ServerConfig::new(&args.endpoint, &args.language);
    match uc_server::serve(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ServerError::UnsupportedLanguage { .. }) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) => {
            error!(%e, "server stopped");
            ExitCode::from(EXIT_FAILED)
        }
    }
}
