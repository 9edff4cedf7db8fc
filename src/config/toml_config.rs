use crate::config::{ItemErrorPolicy, ScrapeConfig};
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every section and key is optional; absent keys keep
/// the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub extract: Option<ExtractConfig>,
    pub load: Option<LoadConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractConfig {
    pub container_tag: Option<String>,
    pub container_class: Option<String>,
    pub heading_tag: Option<String>,
    pub price_class: Option<String>,
    pub on_item_error: Option<ItemErrorPolicy>,
    pub preview_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    pub columns: Option<Vec<String>>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScrapeError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the values present in this file over `base`.
    pub fn apply_to(self, base: &mut ScrapeConfig) {
        if let Some(source) = self.source {
            if let Some(url) = source.url {
                base.source_url = url;
            }
            if let Some(timeout) = source.timeout_seconds {
                base.timeout_secs = timeout;
            }
        }

        if let Some(extract) = self.extract {
            if let Some(tag) = extract.container_tag {
                base.markup.container_tag = tag;
            }
            if let Some(class) = extract.container_class {
                base.markup.container_class = class;
            }
            if let Some(tag) = extract.heading_tag {
                base.markup.heading_tag = tag;
            }
            if let Some(class) = extract.price_class {
                base.markup.price_class = class;
            }
            if let Some(policy) = extract.on_item_error {
                base.on_item_error = policy;
            }
            if let Some(limit) = extract.preview_limit {
                base.preview_limit = limit;
            }
        }

        if let Some(load) = self.load {
            if let Some(path) = load.output_path {
                base.output_path = path;
            }
            if let Some(columns) = load.columns {
                base.column_names = columns;
            }
        }
    }

    pub fn into_scrape_config(self) -> ScrapeConfig {
        let mut config = ScrapeConfig::default();
        self.apply_to(&mut config);
        config
    }
}
