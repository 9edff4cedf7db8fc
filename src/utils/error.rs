use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Item #{index} could not be extracted: {reason}")]
    ExtractionError { index: usize, reason: String },

    #[error("Could not write to {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl ScrapeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::HttpError(e) if e.is_timeout() => {
                "The page took too long to respond".to_string()
            }
            ScrapeError::HttpError(_) => "Could not reach the source page".to_string(),
            ScrapeError::IoError(e) => format!("File system error: {}", e),
            ScrapeError::ConfigError { message } => format!("Configuration problem: {}", message),
            ScrapeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ScrapeError::SelectorError { selector, .. } => {
                format!("Markup selector '{}' is not valid CSS", selector)
            }
            ScrapeError::ExtractionError { index, reason } => {
                format!("Item #{} on the page is malformed: {}", index, reason)
            }
            ScrapeError::WriteError { path, .. } => {
                format!("Could not write to file {}", path)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::HttpError(e) if e.is_timeout() => {
                "Raise --timeout-secs or check the source host"
            }
            ScrapeError::HttpError(_) => "Check the URL and your network connection",
            ScrapeError::IoError(_) => "Check that the paths exist and are accessible",
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            ScrapeError::SelectorError { .. } => {
                "Markup tokens must be plain CSS identifiers such as 'product_pod'"
            }
            ScrapeError::ExtractionError { .. } => {
                "The page layout may have changed; rerun with --on-item-error skip to keep the rest"
            }
            ScrapeError::WriteError { .. } => "Check your file permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
