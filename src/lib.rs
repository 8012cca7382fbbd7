pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{GeminiClient, HttpRecordSink, LocalObjectStore};
pub use config::RunnerConfig;
pub use core::pipeline::{ContentPipeline, PipelineSettings};
pub use domain::model::{ObjectEvent, ResultRecord, RunOutcome, RunReport};
pub use utils::error::{PipelineError, Result};
