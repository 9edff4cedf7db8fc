use serde::Serialize;
use std::fmt;

/// One listing entry as it appears on the page. Both fields are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub title: String,
    pub price: String,
}

impl ItemRecord {
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
        }
    }
}

/// Which piece of a matched container was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    Heading,
    Link,
    TitleAttribute,
    PriceParagraph,
    PriceText,
}

impl fmt::Display for MissingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MissingPart::Heading => "missing heading",
            MissingPart::Link => "missing link inside heading",
            MissingPart::TitleAttribute => "link has no non-empty title attribute",
            MissingPart::PriceParagraph => "missing price paragraph",
            MissingPart::PriceText => "price paragraph has no text",
        };
        f.write_str(text)
    }
}

/// A matched container that could not produce a complete record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFault {
    /// Zero-based position among matched containers.
    pub index: usize,
    pub missing: MissingPart,
}

impl fmt::Display for ItemFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item #{}: {}", self.index, self.missing)
    }
}

pub type ItemOutcome = std::result::Result<ItemRecord, ItemFault>;

/// Result of running the extractor over one document.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub page_title: Option<String>,
    /// One entry per matched container, in document order.
    pub items: Vec<ItemOutcome>,
}

impl Extraction {
    pub fn matched(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { status: u16, body: String },
    Failed { status: u16 },
}

/// How a run ended when nothing propagated as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Saved { path: String, records: usize },
    FetchFailed { status: u16 },
    WriteFailed { path: String, reason: String },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Saved { .. })
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Saved { path, records } => {
                write!(f, "Data successfully saved to {} ({} records)", path, records)
            }
            RunOutcome::FetchFailed { status } => {
                write!(f, "Failed to retrieve the webpage. Status code: {}", status)
            }
            RunOutcome::WriteFailed { path, reason } => write!(
                f,
                "Error: Could not write to file {} ({}). Check your file permissions.",
                path, reason
            ),
        }
    }
}
