pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::{ItemErrorPolicy, MarkupConfig, ScrapeConfig};
pub use core::{etl::ScrapeEngine, pipeline::ScrapePipeline};
pub use domain::model::{ItemRecord, RunOutcome};
pub use utils::error::{Result, ScrapeError};
