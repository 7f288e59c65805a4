//! Binary crate for the `weather` command-line tool.
//!
//! One request, one line on stdout. Any failure is a single line on stderr
//! and exit status 1.

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "weather failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
