use clap::Parser;
use urlorg_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return;
    }

    // Initialize logging as early as possible; stderr if the log file is unusable.
    let log_opts = cli.log_options();
    if let Err(e) = logging::init_logging(log_opts) {
        logging::init_logging_stderr(log_opts);
        tracing::warn!("file logging unavailable: {:#}", e);
    }

    if let Err(err) = cli.run().await {
        tracing::error!("{:#}", err);
        eprintln!("urlorg error: {:#}", err);
        if let Ok(path) = logging::log_file_path() {
            eprintln!("Check the logs at '{}' for more information.", path.display());
        }
        std::process::exit(1);
    }
    tracing::info!("end of session");
}
