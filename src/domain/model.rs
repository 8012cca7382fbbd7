use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder written to `generated_content` when the safety filter blocks a row.
pub const TEXT_BLOCKED_PLACEHOLDER: &str = "Content blocked by safety filter";
/// Placeholder written to `generated_content` when the text call errors.
pub const TEXT_FAILED_PLACEHOLDER: &str = "Error: Text generation failed.";
/// Written to `generated_image_url` whenever the image step is bypassed.
/// Reused verbatim for safety blocks as well as failures; downstream
/// consumers match on this exact string, so it stays inaccurate.
pub const IMAGE_SKIPPED_PLACEHOLDER: &str = "Skipped: Text generation failed.";
pub const IMAGE_EMPTY_RESPONSE: &str = "Error: No image returned.";
pub const IMAGE_FAILED_PLACEHOLDER: &str = "Error: Image generation failed.";

/// Trigger payload delivered by the external notifier when a new object
/// lands in the input container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectEvent {
    pub container_id: String,
    pub object_id: String,
}

/// One validated data line of the input CSV. Both fields are non-empty
/// after trimming; lines that cannot satisfy this are dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,
    pub keywords: String,
}

/// Result of one text-model invocation for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutcome {
    Success(String),
    Blocked,
    Failed(String),
}

impl TextOutcome {
    /// Reduces the outcome to the string stored in `generated_content`.
    pub fn display_text(&self) -> String {
        match self {
            TextOutcome::Success(text) => text.clone(),
            TextOutcome::Blocked => TEXT_BLOCKED_PLACEHOLDER.to_string(),
            TextOutcome::Failed(_) => TEXT_FAILED_PLACEHOLDER.to_string(),
        }
    }
}

/// Result of the image step for one row. `Skipped` records the bypass
/// when text generation did not succeed; `Blocked` is reserved for a
/// safety rejection from the image model itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Success(Vec<u8>),
    Skipped(String),
    Blocked,
    Failed(String),
}

/// One row of the structured sink. Written once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub product_name: String,
    pub keywords: String,
    pub generated_content: String,
    pub generated_image_url: String,
    pub source_file: String,
    pub processed_at: DateTime<Utc>,
}

/// Terminal state of one file run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Committed,
    Quarantined,
}

/// What one invocation did, handed back to the trigger handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub records_processed: usize,
    pub source_uri: String,
}
