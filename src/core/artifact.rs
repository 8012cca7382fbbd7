use crate::domain::ports::ObjectStore;
use crate::utils::error::Result;
use std::time::{SystemTime, UNIX_EPOCH};

/// Object name for a generated image: lowercased product name with
/// spaces as underscores, suffixed with epoch seconds.
pub fn image_object_name(product_name: &str, epoch_secs: u64) -> String {
    let slug = product_name.to_lowercase().replace(' ', "_");
    format!("{}_{}.png", slug, epoch_secs)
}

/// Uploads one generated image to the public image container and
/// returns its public URL. Errors propagate to the caller, which treats
/// them as part of the image-generation step.
pub async fn upload_image<S: ObjectStore>(
    store: &S,
    container: &str,
    product_name: &str,
    bytes: &[u8],
) -> Result<String> {
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let object = image_object_name(product_name, epoch);

    store.upload(container, &object, bytes, "image/png").await?;

    Ok(store.public_url(container, &object))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_slug() {
        assert_eq!(image_object_name("Widget", 1700000000), "widget_1700000000.png");
        assert_eq!(
            image_object_name("Solar Garden Lamp", 42),
            "solar_garden_lamp_42.png"
        );
    }

    #[test]
    fn test_object_name_keeps_punctuation() {
        // Only spaces are rewritten; other characters pass through.
        assert_eq!(image_object_name("A-B c", 1), "a-b_c_1.png");
    }
}
