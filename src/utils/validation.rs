use crate::utils::error::{Result, ScrapeError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScrapeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Column names become the header row; the writer emits exactly two cells per row.
pub fn validate_column_names(field_name: &str, columns: &[String]) -> Result<()> {
    if columns.len() != 2 {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: columns.join(","),
            reason: format!("Expected 2 column names, got {}", columns.len()),
        });
    }

    let mut seen = HashSet::new();
    for column in columns {
        validate_non_empty_string(field_name, column)?;
        if !seen.insert(column.as_str()) {
            return Err(ScrapeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: columns.join(","),
                reason: format!("Duplicate column name: {}", column),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Markup tokens are spliced into CSS selectors, so only identifier characters pass.
pub fn validate_css_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let starts_with_digit = value.chars().next().is_some_and(|c| c.is_ascii_digit());
    let all_ident = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if starts_with_digit || !all_ident {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a CSS identifier (letters, digits, '-' or '_')".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.url", "https://books.toscrape.com/").is_ok());
        assert!(validate_url("source.url", "http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("source.url", "").is_err());
        assert!(validate_url("source.url", "invalid-url").is_err());
        assert!(validate_url("source.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("load.output_path", "books.csv").is_ok());
        assert!(validate_path("load.output_path", "").is_err());
        assert!(validate_path("load.output_path", "bad\0.csv").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("source.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("source.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_column_names() {
        let ok = vec!["Title".to_string(), "Price".to_string()];
        assert!(validate_column_names("load.columns", &ok).is_ok());

        let three = vec!["Title".to_string(), "Price".to_string(), "Stock".to_string()];
        assert!(validate_column_names("load.columns", &three).is_err());

        let dup = vec!["Title".to_string(), "Title".to_string()];
        assert!(validate_column_names("load.columns", &dup).is_err());

        let blank = vec!["Title".to_string(), "  ".to_string()];
        assert!(validate_column_names("load.columns", &blank).is_err());
    }

    #[test]
    fn test_validate_css_identifier() {
        assert!(validate_css_identifier("extract.container_class", "product_pod").is_ok());
        assert!(validate_css_identifier("extract.heading_tag", "h3").is_ok());
        assert!(validate_css_identifier("extract.price_class", "price-color").is_ok());
        assert!(validate_css_identifier("extract.price_class", "").is_err());
        assert!(validate_css_identifier("extract.price_class", "a b").is_err());
        assert!(validate_css_identifier("extract.price_class", "x>y").is_err());
        assert!(validate_css_identifier("extract.price_class", "3col").is_err());
    }
}
