use crate::config::{ItemErrorPolicy, DEFAULT_PREVIEW_LIMIT};
use crate::domain::model::{Extraction, FetchOutcome, ItemRecord, RunOutcome};
use crate::domain::ports::Pipeline;
use crate::utils::error::{Result, ScrapeError};

/// Drives one pass of fetch, extract, preview and save.
///
/// Fetch failures and write failures come back as [`RunOutcome`] variants.
/// Anything else (transport errors, an aborted extraction) is returned as an
/// error for the caller to report.
pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
    item_policy: ItemErrorPolicy,
    preview_limit: usize,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            item_policy: ItemErrorPolicy::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }

    pub fn with_item_policy(mut self, policy: ItemErrorPolicy) -> Self {
        self.item_policy = policy;
        self
    }

    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Fetching listing page");
        let body = match self.pipeline.fetch().await? {
            FetchOutcome::Success { status, body } => {
                println!(
                    "Success! Status code {}. Proceeding to parse the content...",
                    status
                );
                body
            }
            FetchOutcome::Failed { status } => {
                tracing::error!("Fetch returned status {}", status);
                let outcome = RunOutcome::FetchFailed { status };
                println!("{}", outcome);
                return Ok(outcome);
            }
        };

        let extraction = self.pipeline.extract(&body).await?;
        println!(
            "\nSuccessfully parsed the page! Title: {}",
            extraction.page_title.as_deref().unwrap_or("(no title)")
        );
        println!("\nFound {} items on the page.", extraction.matched());

        let records = self.collect_records(extraction)?;
        self.print_preview(&records);

        tracing::info!("Saving {} records", records.len());
        match self.pipeline.load(&records).await {
            Ok(path) => {
                let outcome = RunOutcome::Saved {
                    path,
                    records: records.len(),
                };
                println!("\n{}", outcome);
                Ok(outcome)
            }
            Err(ScrapeError::WriteError { path, source }) => {
                tracing::error!("Write to {} failed: {}", path, source);
                let outcome = RunOutcome::WriteFailed {
                    path,
                    reason: source.to_string(),
                };
                println!("\n{}", outcome);
                Ok(outcome)
            }
            Err(e) => Err(e),
        }
    }

    fn collect_records(&self, extraction: Extraction) -> Result<Vec<ItemRecord>> {
        let mut records = Vec::with_capacity(extraction.items.len());
        let mut skipped = 0usize;

        for item in extraction.items {
            match (item, self.item_policy) {
                (Ok(record), _) => records.push(record),
                (Err(fault), ItemErrorPolicy::Abort) => {
                    return Err(ScrapeError::ExtractionError {
                        index: fault.index,
                        reason: fault.missing.to_string(),
                    });
                }
                (Err(fault), ItemErrorPolicy::Skip) => {
                    tracing::warn!("Skipping {}", fault);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} incomplete items", skipped);
        }
        Ok(records)
    }

    fn print_preview(&self, records: &[ItemRecord]) {
        if self.preview_limit == 0 {
            return;
        }

        println!(
            "\n--- Extracted Titles and Prices (first {} items) ---",
            self.preview_limit
        );
        for record in records.iter().take(self.preview_limit) {
            println!("Title: {}, Price: {}", record.title, record.price);
        }
    }
}
