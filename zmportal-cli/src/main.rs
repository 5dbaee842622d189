use clap::Parser;
use std::process::ExitCode;
use zmportal_cli::{Cli, report, run};
use zmportal_core::config::ensure_env_loaded;

#[tokio::main]
async fn main() -> ExitCode {
    // Load config/.env before clap reads ZM_USERNAME / ZM_PASSWORD.
    ensure_env_loaded();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(e.as_ref());
            ExitCode::FAILURE
        }
    }
}
