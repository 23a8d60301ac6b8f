use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::elevenlabs::ElevenLabsClient;
use super::gateway::{LabelImage, LabelReader, Narrator, SpeechSynthesizer};
use super::gemini::GeminiClient;
use super::service::{AnalysisError, AnalysisResponse, AnalysisService};
use crate::config::AnalysisConfig;
use crate::error::AppError;
use crate::scoring::{score, Lens, ScoreResult};

/// Room for multipart boundaries and the small text fields next to the photo.
const MULTIPART_OVERHEAD: usize = 64 * 1024;
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub type LiveAnalysisService = AnalysisService<GeminiClient, GeminiClient, ElevenLabsClient>;

/// Router state. `service` is absent when no label reader is configured.
pub struct AnalysisState<L, N, S> {
    service: Option<Arc<AnalysisService<L, N, S>>>,
    max_upload_bytes: usize,
}

impl<L, N, S> Clone for AnalysisState<L, N, S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}

impl<L, N, S> AnalysisState<L, N, S> {
    pub fn new(service: Option<Arc<AnalysisService<L, N, S>>>, max_upload_bytes: usize) -> Self {
        Self {
            service,
            max_upload_bytes,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }
}

impl AnalysisState<GeminiClient, GeminiClient, ElevenLabsClient> {
    /// Wire the hosted collaborators named in `config`; Gemini both reads and narrates.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let service = config.gemini.as_ref().map(|gemini| {
            let client = Arc::new(GeminiClient::new(gemini));
            let speech = config
                .elevenlabs
                .as_ref()
                .map(|speech| Arc::new(ElevenLabsClient::new(speech)));
            Arc::new(AnalysisService::new(client.clone(), client, speech))
        });

        Self::new(service, config.max_upload_bytes)
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub ingredients_text: String,
    pub lens: String,
    #[serde(default)]
    pub user_profile: Option<Value>,
}

/// `POST /api/v1/score` for text input and `POST /api/analyze` for label photos.
pub fn analysis_router<L, N, S>(state: AnalysisState<L, N, S>) -> Router
where
    L: LabelReader + 'static,
    N: Narrator + 'static,
    S: SpeechSynthesizer + 'static,
{
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route(
            "/api/analyze",
            post(analyze_handler::<L, N, S>).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

pub(crate) async fn score_handler(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    let lens: Lens = request.lens.parse()?;

    let result = score(&request.ingredients_text, lens, request.user_profile.as_ref())?;
    Ok(Json(result))
}

pub(crate) async fn analyze_handler<L, N, S>(
    State(state): State<AnalysisState<L, N, S>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError>
where
    L: LabelReader + 'static,
    N: Narrator + 'static,
    S: SpeechSynthesizer + 'static,
{
    let Some(service) = state.service.clone() else {
        return Err(AppError::Unavailable("label reading"));
    };

    let mut upload: Option<(Vec<u8>, String)> = None;
    let mut lens: Option<String> = None;
    let mut profile: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::InvalidRequest(err.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .or_else(|| {
                        field
                            .file_name()
                            .and_then(|file_name| mime_guess::from_path(file_name).first())
                            .map(|guessed| guessed.to_string())
                    })
                    .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::InvalidRequest(err.body_text()))?;
                upload = Some((bytes.to_vec(), content_type));
            }
            Some("lens") => {
                lens = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| AppError::InvalidRequest(err.body_text()))?,
                );
            }
            Some("user_profile") => {
                profile = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| AppError::InvalidRequest(err.body_text()))?,
                );
            }
            _ => {}
        }
    }

    let (bytes, content_type) =
        upload.ok_or_else(|| AppError::InvalidRequest("missing `file` field".to_string()))?;
    let lens: Lens = lens
        .ok_or_else(|| AppError::InvalidRequest("missing `lens` field".to_string()))?
        .parse()?;
    let profile = profile.and_then(profile_value);

    let image = LabelImage::new(bytes, &content_type, state.max_upload_bytes)
        .map_err(AnalysisError::from)?;
    let response = service.analyze(image, lens, profile.as_ref()).await?;
    Ok(Json(response))
}

/// Form fields carry the profile as JSON text. Text that is not JSON is passed on
/// as a plain string so scoring reports it in `notes` instead of failing.
fn profile_value(raw: String) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or(Value::String(raw)))
}
