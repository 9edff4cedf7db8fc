pub mod etl;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{Extraction, FetchOutcome, ItemRecord, RunOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
