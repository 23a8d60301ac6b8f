use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::gateway::{GatewayError, ImageError, LabelImage, LabelReader, Narrator, SpeechSynthesizer};
use crate::scoring::{score, CriterionHit, Lens, ScoreError, ScoreResult};

/// Payload returned to the mobile client for one analyzed photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub health_analysis: ScoreResult,
    pub narrative_text: String,
    pub audio_base64: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidImage(#[from] ImageError),
    #[error("could not read the label: {0}")]
    LabelReading(#[source] GatewayError),
    #[error(transparent)]
    Scoring(#[from] ScoreError),
}

/// Photo in, scored label plus narration out.
///
/// Only label reading and scoring can fail the request; narration falls back to a
/// locally composed sentence and audio is dropped when synthesis fails.
pub struct AnalysisService<L, N, S> {
    reader: Arc<L>,
    narrator: Arc<N>,
    speech: Option<Arc<S>>,
}

impl<L, N, S> AnalysisService<L, N, S>
where
    L: LabelReader + 'static,
    N: Narrator + 'static,
    S: SpeechSynthesizer + 'static,
{
    pub fn new(reader: Arc<L>, narrator: Arc<N>, speech: Option<Arc<S>>) -> Self {
        Self {
            reader,
            narrator,
            speech,
        }
    }

    pub async fn analyze(
        &self,
        image: LabelImage,
        lens: Lens,
        user_profile: Option<&Value>,
    ) -> Result<AnalysisResponse, AnalysisError> {
        info!(%lens, bytes = image.bytes().len(), "analyzing label photo");

        let ingredients_text = self
            .reader
            .read_label(&image)
            .await
            .map_err(AnalysisError::LabelReading)?;
        let health_analysis = score(&ingredients_text, lens, user_profile)?;

        let narrative_text = match self.narrator.narrate(&health_analysis).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "narration unavailable, using local summary");
                fallback_narrative(&health_analysis)
            }
        };

        let audio_base64 = match &self.speech {
            Some(speech) => match speech.synthesize(&narrative_text).await {
                Ok(audio) => Some(general_purpose::STANDARD.encode(audio)),
                Err(err) => {
                    warn!(error = %err, "speech synthesis failed, returning text only");
                    None
                }
            },
            None => None,
        };

        info!(%lens, score = health_analysis.score, audio = audio_base64.is_some(), "label analyzed");
        Ok(AnalysisResponse {
            health_analysis,
            narrative_text,
            audio_base64,
        })
    }
}

/// One deterministic sentence naming the score and the heaviest criterion.
pub fn fallback_narrative(result: &ScoreResult) -> String {
    let verdict = match result.score {
        70..=100 => "looks like a good fit",
        40..=69 => "is a mixed bag",
        _ => "is a tough fit",
    };

    let heaviest = result
        .criteria_hits
        .iter()
        .fold(None::<&CriterionHit>, |best, hit| match best {
            Some(current) if current.points >= hit.points => Some(current),
            _ => Some(hit),
        });

    match heaviest {
        Some(hit) => format!(
            "{} {}/100: this label {verdict}, and the biggest factor is \"{}\".",
            result.lens.label(),
            result.score,
            hit.name
        ),
        None => format!(
            "{} {}/100: this label {verdict}, with nothing on it moving the score much.",
            result.lens.label(),
            result.score
        ),
    }
}
