#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "https://books.toscrape.com/";
pub const DEFAULT_OUTPUT_PATH: &str = "books.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// What the engine does with a matched container that lacks a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ItemErrorPolicy {
    /// Stop the run on the first incomplete item.
    #[default]
    Abort,
    /// Log the incomplete item and keep the rest.
    Skip,
}

/// The fixed page layout the extractor matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupConfig {
    pub container_tag: String,
    pub container_class: String,
    pub heading_tag: String,
    pub price_class: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            container_tag: "article".to_string(),
            container_class: "product_pod".to_string(),
            heading_tag: "h3".to_string(),
            price_class: "price_color".to_string(),
        }
    }
}

impl Validate for MarkupConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_css_identifier("extract.container_tag", &self.container_tag)?;
        validation::validate_css_identifier("extract.container_class", &self.container_class)?;
        validation::validate_css_identifier("extract.heading_tag", &self.heading_tag)?;
        validation::validate_css_identifier("extract.price_class", &self.price_class)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    pub source_url: String,
    pub output_path: String,
    pub column_names: Vec<String>,
    pub timeout_secs: u64,
    pub on_item_error: ItemErrorPolicy,
    pub preview_limit: usize,
    pub markup: MarkupConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            column_names: vec!["Title".to_string(), "Price".to_string()],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            on_item_error: ItemErrorPolicy::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            markup: MarkupConfig::default(),
        }
    }
}

impl ScrapeConfig {
    pub fn new(source_url: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Validate for ScrapeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.url", &self.source_url)?;
        validation::validate_path("load.output_path", &self.output_path)?;
        validation::validate_column_names("load.columns", &self.column_names)?;
        validation::validate_positive_number("source.timeout_seconds", self.timeout_secs, 1)?;
        self.markup.validate()
    }
}

impl ConfigProvider for ScrapeConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn column_names(&self) -> &[String] {
        &self.column_names
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn markup(&self) -> &MarkupConfig {
        &self.markup
    }
}
