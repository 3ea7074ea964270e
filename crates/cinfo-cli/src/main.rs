use cinfo_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Logging goes to the state dir; stderr if that isn't writable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("cinfo error: {:#}", err);
        std::process::exit(1);
    }
}
