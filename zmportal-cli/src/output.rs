use clap::ValueEnum;
use zmportal_core::DiscoveryResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Render a discovery result for stdout
pub fn render(result: &DiscoveryResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result),
        OutputFormat::Text => Ok(format!(
            "portal: {}\napi:    {}\ncgi:    {}",
            result.portal_url, result.api_url, result.cgi_url
        )),
    }
}
