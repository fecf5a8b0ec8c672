//! merge-poller binary entry point

mod cli;

use clap::Parser;
use cli::{Cli, init_logging, run_poll_command};
use merge_poller::types::PollOptions;
use std::process::ExitCode;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = PollOptions {
        dry_run: cli.dry_run,
    };

    match run_poll_command(&cli.config, options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
