use crate::domain::ports::{ImageModel, ImagePart, TextModel};
use crate::utils::error::{PipelineError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    safety_settings: Option<Vec<SafetySetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: String,
    threshold: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// HTTP client for a generateContent-style model API, covering both the
/// text and the image model. One instance per invocation; no global
/// client state.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, text_model: String, image_model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            text_model,
            image_model,
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        tracing::debug!(model, "Calling generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    fn safety_settings() -> Vec<SafetySetting> {
        HARM_CATEGORIES
            .iter()
            .map(|category| SafetySetting {
                category: category.to_string(),
                threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
            })
            .collect()
    }
}

impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    ..Part::default()
                }],
            }],
            safety_settings: Some(Self::safety_settings()),
            generation_config: None,
        };

        let response = self.generate_content(&self.text_model, &request).await?;

        // Zero candidates means the safety filter removed everything.
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text));

        Ok(text)
    }
}

impl ImageModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<ImagePart>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    ..Part::default()
                }],
            }],
            safety_settings: None,
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            }),
        };

        let response = self.generate_content(&self.image_model, &request).await?;

        let mut parts = Vec::new();
        for candidate in response.candidates {
            let Some(content) = candidate.content else {
                continue;
            };
            for part in content.parts {
                if let Some(inline) = part.inline_data {
                    let data = BASE64.decode(inline.data.as_bytes()).map_err(|e| {
                        PipelineError::ProcessingError {
                            message: format!("Invalid base64 image payload: {}", e),
                        }
                    })?;
                    parts.push(ImagePart {
                        mime_type: inline.mime_type,
                        data,
                    });
                }
            }
        }

        Ok(parts)
    }
}
