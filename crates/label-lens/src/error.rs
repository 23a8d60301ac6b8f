use crate::analysis::{AnalysisError, GatewayError};
use crate::config::ConfigError;
use crate::scoring::ScoreError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Scoring(ScoreError),
    Analysis(AnalysisError),
    InvalidRequest(String),
    Unavailable(&'static str),
}

impl AppError {
    /// Stable machine-readable discriminator for response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Telemetry(_) => "telemetry",
            AppError::Io(_) => "io",
            AppError::Server(_) => "server",
            AppError::Scoring(err) | AppError::Analysis(AnalysisError::Scoring(err)) => match err {
                ScoreError::EmptyInput => "empty_input",
                ScoreError::UnknownLens(_) => "unknown_lens",
            },
            AppError::Analysis(AnalysisError::InvalidImage(_)) => "invalid_image",
            AppError::Analysis(AnalysisError::LabelReading(GatewayError::NotConfigured(_)))
            | AppError::Unavailable(_) => "unavailable",
            AppError::Analysis(AnalysisError::LabelReading(_)) => "upstream",
            AppError::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Scoring(ScoreError::EmptyInput)
            | AppError::Analysis(AnalysisError::Scoring(ScoreError::EmptyInput)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Scoring(ScoreError::UnknownLens(_))
            | AppError::Analysis(AnalysisError::Scoring(ScoreError::UnknownLens(_)))
            | AppError::Analysis(AnalysisError::InvalidImage(_))
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Analysis(AnalysisError::LabelReading(GatewayError::NotConfigured(_)))
            | AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Analysis(AnalysisError::LabelReading(_)) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Scoring(err) => write!(f, "{}", err),
            AppError::Analysis(err) => write!(f, "{}", err),
            AppError::InvalidRequest(message) => write!(f, "invalid request: {}", message),
            AppError::Unavailable(feature) => {
                write!(f, "{} is not configured on this server", feature)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Analysis(err) => Some(err),
            AppError::InvalidRequest(_) | AppError::Unavailable(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.to_string(), "kind": self.kind() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ScoreError> for AppError {
    fn from(value: ScoreError) -> Self {
        Self::Scoring(value)
    }
}

impl From<AnalysisError> for AppError {
    fn from(value: AnalysisError) -> Self {
        Self::Analysis(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ImageError;

    #[test]
    fn statuses_follow_the_failure_source() {
        let cases = [
            (AppError::Scoring(ScoreError::EmptyInput), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::Scoring(ScoreError::UnknownLens("keto".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Analysis(AnalysisError::InvalidImage(ImageError::Empty)),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Analysis(AnalysisError::LabelReading(GatewayError::EmptyResponse(
                    "Gemini",
                ))),
                StatusCode::BAD_GATEWAY,
            ),
            (AppError::Unavailable("label reading"), StatusCode::SERVICE_UNAVAILABLE),
            (AppError::InvalidRequest("bad".to_string()), StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(error.status(), status, "{error}");
        }
    }

    #[test]
    fn empty_labels_read_from_photos_are_unprocessable() {
        let error = AppError::from(AnalysisError::Scoring(ScoreError::EmptyInput));

        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.kind(), "empty_input");
    }
}
