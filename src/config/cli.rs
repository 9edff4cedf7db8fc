use crate::config::toml_config::TomlConfig;
use crate::config::{ItemErrorPolicy, ScrapeConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "listing-scraper")]
#[command(about = "Fetch one listing page and save its item titles and prices as CSV")]
pub struct CliArgs {
    /// TOML file with [source], [extract] and [load] sections
    #[arg(short, long)]
    pub config: Option<String>,

    /// Page to fetch
    #[arg(long)]
    pub url: Option<String>,

    /// CSV file to create or overwrite
    #[arg(short, long)]
    pub output: Option<String>,

    /// Header row, exactly two names
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// What to do with an item that is missing its title or price
    #[arg(long, value_enum)]
    pub on_item_error: Option<ItemErrorPolicy>,

    /// Number of records echoed to the console before saving
    #[arg(long)]
    pub preview_limit: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the resolved configuration and exit without fetching
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Built-in defaults, then the TOML file if given, then explicit flags.
    pub fn resolve(&self) -> Result<ScrapeConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_scrape_config(),
            None => ScrapeConfig::default(),
        };

        if let Some(url) = &self.url {
            config.source_url = url.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(columns) = &self.columns {
            config.column_names = columns.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(policy) = self.on_item_error {
            config.on_item_error = policy;
        }
        if let Some(limit) = self.preview_limit {
            config.preview_limit = limit;
        }

        Ok(config)
    }
}
