use crate::domain::model::{ProductRow, TextOutcome};
use crate::domain::ports::TextModel;

/// Marketing-copy prompt for one product. Name and keywords each appear
/// exactly once.
pub fn build_text_prompt(row: &ProductRow) -> String {
    format!(
        "Write a single short paragraph of enthusiastic marketing copy for a product \
         called \"{}\". Work in these keywords naturally: {}.",
        row.name, row.keywords
    )
}

/// Runs the text model for one row. Failures and safety blocks degrade
/// to an outcome variant; they never abort the file.
pub async fn generate_copy<M: TextModel>(model: &M, row: &ProductRow) -> TextOutcome {
    let prompt = build_text_prompt(row);

    match model.generate(&prompt).await {
        Ok(Some(text)) => TextOutcome::Success(text.trim().to_string()),
        Ok(None) => {
            tracing::warn!(product = %row.name, "Text generation blocked by safety filter");
            TextOutcome::Blocked
        }
        Err(e) => {
            tracing::error!(product = %row.name, error = %e, "Text generation failed");
            TextOutcome::Failed(e.to_string())
        }
    }
}
