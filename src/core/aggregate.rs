use crate::domain::model::{ProductRow, ResultRecord};
use chrono::{DateTime, Utc};

/// Assembles the sink record for one row. Pure field coercion; the
/// caller has already reduced the generation outcomes to display
/// strings, so error markers land here as ordinary values.
pub fn build_record(
    row: &ProductRow,
    generated_content: String,
    generated_image_url: String,
    source_file: &str,
    processed_at: DateTime<Utc>,
) -> ResultRecord {
    ResultRecord {
        product_name: row.name.clone(),
        keywords: row.keywords.clone(),
        generated_content,
        generated_image_url,
        source_file: source_file.to_string(),
        processed_at,
    }
}
