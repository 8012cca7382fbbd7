pub mod runner;

pub use runner::RunnerConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// Flags for local runs against a directory-backed object store.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "promo-etl")]
#[command(about = "Generates marketing copy and images from product CSV files")]
pub struct CliConfig {
    /// Base directory holding the container subdirectories
    #[arg(long, default_value = "./data")]
    pub base_dir: String,

    /// Container (subdirectory) holding the input object
    #[arg(long, default_value = "input")]
    pub input_container: String,

    /// Object id of the CSV file to process
    #[arg(long)]
    pub object: String,

    #[arg(long, default_value = "images")]
    pub image_container: String,

    /// Quarantine container; omit to leave failed objects in place
    #[arg(long)]
    pub failed_container: Option<String>,

    /// Model API base URL
    #[arg(long, default_value = "https://generativelanguage.googleapis.com/v1beta")]
    pub api_base: String,

    /// Model API credential
    #[arg(long)]
    pub api_key: String,

    #[arg(long, default_value = "gemini-2.0-flash")]
    pub text_model: String,

    #[arg(long, default_value = "gemini-2.0-flash-exp-image-generation")]
    pub image_model: String,

    /// insertAll-style endpoint of the structured sink
    #[arg(long)]
    pub sink_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("base_dir", &self.base_dir)?;
        validate_non_empty_string("object", &self.object)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("api_base", &self.api_base)?;
        validate_url("sink_endpoint", &self.sink_endpoint)?;

        Ok(())
    }
}
