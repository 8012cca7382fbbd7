use crate::utils::error::{PipelineError, Result};
use std::env;

/// Environment-driven configuration for the event-triggered runner.
///
/// The API credential is the only hard requirement checked up front;
/// a missing credential aborts the invocation before any object is
/// touched. The failed container is optional and its absence turns
/// quarantine into a logged no-op.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub project_id: String,
    pub region: String,
    pub sink_dataset: String,
    pub sink_table: String,
    pub sink_endpoint: String,
    pub image_container: String,
    pub failed_container: Option<String>,
    pub api_base: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` wires
    /// in the process environment; tests pass a map instead.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // The credential is checked first: without it the invocation
        // aborts before any other key is consulted.
        let api_key = require(&lookup, "MODEL_API_KEY")?;

        let project_id = require(&lookup, "PROJECT_ID")?;
        let sink_dataset = require(&lookup, "SINK_DATASET")?;
        let sink_table = require(&lookup, "SINK_TABLE")?;
        let sink_endpoint = lookup("SINK_ENDPOINT").unwrap_or_else(|| {
            format!(
                "https://bigquery.googleapis.com/bigquery/v2/projects/{}/datasets/{}/tables/{}/insertAll",
                project_id, sink_dataset, sink_table
            )
        });

        Ok(Self {
            project_id,
            region: lookup("REGION").unwrap_or_else(|| "us-central1".to_string()),
            sink_dataset,
            sink_table,
            sink_endpoint,
            image_container: require(&lookup, "IMAGE_CONTAINER")?,
            failed_container: lookup("FAILED_CONTAINER"),
            api_base: lookup("MODEL_API_BASE").unwrap_or_else(|| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            api_key,
            text_model: lookup("TEXT_MODEL").unwrap_or_else(|| "gemini-2.0-flash".to_string()),
            image_model: lookup("IMAGE_MODEL")
                .unwrap_or_else(|| "gemini-2.0-flash-exp-image-generation".to_string()),
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name).ok_or_else(|| PipelineError::MissingConfigError {
        field: name.to_string(),
    })
}

impl crate::utils::validation::Validate for RunnerConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("project_id", &self.project_id)?;
        validate_region("region", &self.region)?;
        validate_non_empty_string("sink_dataset", &self.sink_dataset)?;
        validate_non_empty_string("sink_table", &self.sink_table)?;
        validate_url("sink_endpoint", &self.sink_endpoint)?;
        validate_container_name("image_container", &self.image_container)?;
        if let Some(failed) = &self.failed_container {
            validate_container_name("failed_container", failed)?;
        }
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("api_key", &self.api_key)?;

        tracing::info!("Runner configuration validation passed");
        Ok(())
    }
}
