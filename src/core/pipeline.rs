use crate::core::extractor::Extractor;
use crate::core::fetcher::Fetcher;
use crate::core::writer;
use crate::domain::model::{Extraction, FetchOutcome, ItemRecord};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use std::path::Path;

pub struct ScrapePipeline<C: ConfigProvider> {
    config: C,
    fetcher: Fetcher,
}

impl<C: ConfigProvider> ScrapePipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        let fetcher = Fetcher::new(config.request_timeout())?;
        Ok(Self { config, fetcher })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for ScrapePipeline<C> {
    async fn fetch(&self) -> Result<FetchOutcome> {
        self.fetcher.fetch(self.config.source_url()).await
    }

    async fn extract(&self, body: &str) -> Result<Extraction> {
        let extractor = Extractor::new(self.config.markup())?;
        Ok(extractor.extract(body))
    }

    async fn load(&self, records: &[ItemRecord]) -> Result<String> {
        let output_path = self.config.output_path();
        writer::write_records(Path::new(output_path), self.config.column_names(), records)?;
        Ok(output_path.to_string())
    }
}
