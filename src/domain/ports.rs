use crate::config::MarkupConfig;
use crate::domain::model::{Extraction, FetchOutcome, ItemRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn column_names(&self) -> &[String];
    fn request_timeout(&self) -> Duration;
    fn markup(&self) -> &MarkupConfig;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<FetchOutcome>;
    async fn extract(&self, body: &str) -> Result<Extraction>;
    async fn load(&self, records: &[ItemRecord]) -> Result<String>;
}
