use reqwest::Client;
use serde::Serialize;
use tracing::error;

use super::gateway::{GatewayError, SpeechSynthesizer};
use crate::config::ElevenLabsConfig;

const SERVICE: &str = "ElevenLabs";
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";
const OUTPUT_FORMAT: &str = "mp3_44100_128";

#[derive(Clone)]
pub struct ElevenLabsClient {
    api_key: String,
    voice_id: String,
    model_id: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsClient {
    pub fn new(config: &ElevenLabsConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            voice_id: config.voice_id.clone(),
            model_id: config.model_id.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/text-to-speech/{}?output_format={OUTPUT_FORMAT}",
            self.base_url.trim_end_matches('/'),
            self.voice_id
        )
    }
}

impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, GatewayError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("xi-api-key", &self.api_key)
            .json(&SpeechRequest {
                text,
                model_id: &self.model_id,
            })
            .send()
            .await
            .map_err(|source| {
                error!(error = %source, "speech request failed");
                GatewayError::Transport {
                    service: SERVICE,
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let audio = response.bytes().await.map_err(|source| GatewayError::Decode {
            service: SERVICE,
            source,
        })?;
        if audio.is_empty() {
            return Err(GatewayError::EmptyResponse(SERVICE));
        }
        Ok(audio.to_vec())
    }
}
