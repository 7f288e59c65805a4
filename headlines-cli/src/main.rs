//! Binary crate for the `headlines` command-line tool.
//!
//! Flags are validated before any request is sent. Any failure is a single
//! line on stderr and exit status 1.

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "headlines failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
