//! filedrop server binary

use clap::Parser;
use filedrop::server;
use filedrop::utils::logging::LoggingUtils;
use filedrop::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = LoggingUtils::init_logger(&cli.log_level, cli.log_format()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the multi-line bind hints readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
