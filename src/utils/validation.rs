use crate::utils::error::{PipelineError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PipelineError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_container_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.len() < 3 || name.len() > 63 {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Container name must be between 3 and 63 characters".to_string(),
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.' || c == '_')
    {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason:
                "Container name can only contain lowercase letters, numbers, hyphens, dots, and underscores"
                    .to_string(),
        });
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Container name cannot start or end with a hyphen".to_string(),
        });
    }

    Ok(())
}

pub fn validate_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "Region can only contain lowercase letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("model_endpoint", "https://example.com").is_ok());
        assert!(validate_url("model_endpoint", "http://example.com").is_ok());
        assert!(validate_url("model_endpoint", "").is_err());
        assert!(validate_url("model_endpoint", "invalid-url").is_err());
        assert!(validate_url("model_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_container_name() {
        assert!(validate_container_name("image_container", "promo-images").is_ok());
        assert!(validate_container_name("image_container", "ab").is_err());
        assert!(validate_container_name("image_container", "Bad Name").is_err());
        assert!(validate_container_name("image_container", "-leading").is_err());
    }

    #[test]
    fn test_validate_region() {
        assert!(validate_region("region", "us-central1").is_ok());
        assert!(validate_region("region", "US_CENTRAL").is_err());
        assert!(validate_region("region", "  ").is_err());
    }
}
