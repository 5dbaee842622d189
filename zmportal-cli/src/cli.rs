use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "zmportal",
    version,
    about = "Discover the portal, API and streaming URLs of a ZoneMinder server"
)]
pub struct Cli {
    /// Host name, IP address or URL of the server
    pub host: String,
    /// Username for the authenticated CGI path lookup
    #[arg(long, short = 'u', env = "ZM_USERNAME")]
    pub username: Option<String>,
    #[arg(long, short = 'p', env = "ZM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Configuration file (defaults to config/zmportal.toml when present)
    #[arg(long)]
    pub config: Option<String>,
    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Accept self-signed TLS certificates
    #[arg(long)]
    pub insecure: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Disable log output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
