pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::OutputFormat;

use std::error::Error;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use zmportal_core::{AppConfig, Credentials, DiscoveryError, DiscoveryOptions, DiscoveryResolver};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.quiet);
    debug!(
        host = %cli.host,
        config = ?cli.config,
        format = ?cli.format,
        "CLI arguments parsed"
    );

    let config_path = cli.config.as_deref().map(expand_path);
    let mut config = AppConfig::load(config_path.as_deref())?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    }
    apply_cli_overrides(&cli, &mut config);
    let credentials = resolve_credentials(&cli, &config);

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling discovery");
            interrupt.cancel();
        }
    });

    let resolver = DiscoveryResolver::from_settings(&config.http);
    let result = resolver
        .discover(
            &cli.host,
            credentials.as_ref(),
            &DiscoveryOptions::with_cancel(cancel),
        )
        .await?;

    println!("{}", output::render(&result, cli.format)?);
    Ok(())
}

/// Print an error from [`run`] to stderr
pub fn report(error: &(dyn Error + 'static)) {
    match error.downcast_ref::<DiscoveryError>() {
        Some(discovery) => eprintln!("{}: {}", discovery.code(), discovery.user_message()),
        None => eprintln!("error: {error}"),
    }
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| path.to_string());
    PathBuf::from(expanded)
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(timeout) = cli.timeout.filter(|t| *t > 0) {
        info!(timeout_secs = timeout, "Overriding request timeout from CLI flag");
        config.http.timeout_secs = timeout;
    }
    if cli.insecure {
        info!("Accepting invalid TLS certificates");
        config.http.accept_invalid_certs = true;
    }
}

fn resolve_credentials(cli: &Cli, config: &AppConfig) -> Option<Credentials> {
    match (&cli.username, &cli.password) {
        (Some(username), Some(password)) => Some(Credentials::new(username, password)),
        (Some(username), None) => {
            warn!(
                user = %username,
                "Username given without a password, skipping authenticated lookup"
            );
            None
        }
        (None, _) => config.credentials.clone(),
    }
}
