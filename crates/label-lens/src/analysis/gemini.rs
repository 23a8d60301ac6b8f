use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::gateway::{GatewayError, LabelImage, LabelReader, Narrator};
use crate::config::GeminiConfig;
use crate::scoring::ScoreResult;

const SERVICE: &str = "Gemini";
const API_KEY_HEADER: &str = "x-goog-api-key";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const READ_LABEL_PROMPT: &str =
    "Extract list of ingredients from the text. Output the list only and lower case the ingredients.";

/// Gemini `generateContent` client used both to read label photos and to narrate scores.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate(&self, parts: Vec<Part>) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model,
        );
        let request = GenerateRequest {
            contents: vec![Content { parts }],
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| {
                let source = source.without_url();
                error!(error = %source, model = %self.model, "gemini request failed");
                GatewayError::Transport {
                    service: SERVICE,
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "gemini returned an error");
            return Err(GatewayError::Upstream {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateResponse = response.json().await.map_err(|source| {
            GatewayError::Decode {
                service: SERVICE,
                source: source.without_url(),
            }
        })?;

        payload.text().ok_or(GatewayError::EmptyResponse(SERVICE))
    }
}

fn narration_prompt(result: &ScoreResult) -> String {
    let analysis = serde_json::to_string(result).unwrap_or_default();
    format!(
        "Read this analysis and write a 1-sentence, friendly summary for a user. \
         Focus on the score and the biggest pro or con. Keep it conversational.\n\
         Analysis: {analysis}"
    )
}

impl LabelReader for GeminiClient {
    async fn read_label(&self, image: &LabelImage) -> Result<String, GatewayError> {
        let parts = vec![
            Part::Text {
                text: READ_LABEL_PROMPT.to_string(),
            },
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.content_type().essence_str().to_string(),
                    data: general_purpose::STANDARD.encode(image.bytes()),
                },
            },
        ];

        let text = self.generate(parts).await?;
        debug!(characters = text.len(), "label text extracted");
        Ok(text)
    }
}

impl Narrator for GeminiClient {
    async fn narrate(&self, result: &ScoreResult) -> Result<String, GatewayError> {
        self.generate(vec![Part::Text {
            text: narration_prompt(result),
        }])
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::analysis::AnalysisError;
    use crate::error::AppError;
    use crate::scoring::{score, Lens};

    #[test]
    fn image_parts_use_inline_data() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: "read".to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: general_purpose::STANDARD.encode([1u8, 2, 3]),
                        },
                    },
                ],
            }],
        };

        let value = serde_json::to_value(request).expect("json");

        assert_eq!(value["contents"][0]["parts"][0], json!({"text": "read"}));
        assert_eq!(
            value["contents"][0]["parts"][1],
            json!({"inline_data": {"mime_type": "image/png", "data": "AQID"}})
        );
    }

    #[test]
    fn first_candidate_text_is_trimmed() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": " oats, salt \n"}]}}]
        }))
        .expect("response parses");

        assert_eq!(response.text().as_deref(), Some("oats, salt"));
    }

    #[test]
    fn blocked_responses_have_no_text() {
        let response: GenerateResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}}))
                .expect("response parses");

        assert!(response.text().is_none());
    }

    #[test]
    fn narration_prompt_embeds_the_analysis() {
        let result = score("oats, water, salt", Lens::RealFood, None).expect("score");

        let prompt = narration_prompt(&result);

        assert!(prompt.starts_with("Read this analysis"));
        assert!(prompt.contains("\"lens\":\"Real Food Score\""));
    }

    #[tokio::test]
    async fn transport_failures_never_expose_the_api_key() {
        let client = GeminiClient::new(&GeminiConfig {
            api_key: "gm-secret-key".to_string(),
            model: "gemini-test".to_string(),
        })
        .with_base_url("http://127.0.0.1:1");
        let image = LabelImage::new(vec![0xff, 0xd8], "image/jpeg", 16).expect("valid image");

        let error = client.read_label(&image).await.expect_err("nothing listens");

        assert!(matches!(error, GatewayError::Transport { .. }));
        let app_error = AppError::from(AnalysisError::LabelReading(error));
        assert!(!app_error.to_string().contains("gm-secret-key"));
        assert!(!format!("{app_error:?}").contains("gm-secret-key"));
    }
}
