use crate::domain::model::{
    ImageOutcome, ProductRow, TextOutcome, IMAGE_EMPTY_RESPONSE, IMAGE_FAILED_PLACEHOLDER,
    IMAGE_SKIPPED_PLACEHOLDER,
};
use crate::domain::ports::ImageModel;

/// Image prompt seeded by the product name and the opening of the
/// generated copy (at most 100 characters of it).
pub fn build_image_prompt(row: &ProductRow, generated_text: &str) -> String {
    let excerpt: String = generated_text.chars().take(100).collect();
    format!(
        "A clean product marketing photo of \"{}\". Style and mood: {}",
        row.name, excerpt
    )
}

/// Runs the image model for one row, gated on the text outcome: the
/// model is only invoked when text generation succeeded. The skip
/// message is identical for blocks and failures; downstream consumers
/// match on it verbatim.
pub async fn generate_image<M: ImageModel>(
    model: &M,
    row: &ProductRow,
    text: &TextOutcome,
) -> ImageOutcome {
    let generated_text = match text {
        TextOutcome::Success(t) => t,
        TextOutcome::Blocked | TextOutcome::Failed(_) => {
            return ImageOutcome::Skipped(IMAGE_SKIPPED_PLACEHOLDER.to_string());
        }
    };

    let prompt = build_image_prompt(row, generated_text);

    match model.generate(&prompt).await {
        Ok(parts) => match parts.into_iter().next() {
            Some(part) => ImageOutcome::Success(part.data),
            None => {
                tracing::warn!(product = %row.name, "Image model returned no usable parts");
                ImageOutcome::Failed(IMAGE_EMPTY_RESPONSE.to_string())
            }
        },
        Err(e) => {
            tracing::error!(product = %row.name, error = %e, "Image generation failed");
            ImageOutcome::Failed(IMAGE_FAILED_PLACEHOLDER.to_string())
        }
    }
}
