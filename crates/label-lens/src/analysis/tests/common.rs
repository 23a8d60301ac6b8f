use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::analysis::{
    AnalysisService, GatewayError, LabelImage, LabelReader, Narrator, SpeechSynthesizer,
};
use crate::scoring::ScoreResult;

pub(super) const SUGARY_BAR: &str = "sugar, corn syrup, natural flavors, almonds";
const BOUNDARY: &str = "label-lens-test-boundary";

fn upstream_failure() -> GatewayError {
    GatewayError::Upstream {
        service: "fake",
        status: 500,
        body: "unavailable".to_string(),
    }
}

/// Returns fixed label text, or fails like an unreachable upstream when `None`.
pub(super) struct FakeReader(pub(super) Option<&'static str>);

impl LabelReader for FakeReader {
    async fn read_label(&self, _image: &LabelImage) -> Result<String, GatewayError> {
        self.0.map(str::to_string).ok_or_else(upstream_failure)
    }
}

pub(super) struct FakeNarrator(pub(super) Option<&'static str>);

impl Narrator for FakeNarrator {
    async fn narrate(&self, _result: &ScoreResult) -> Result<String, GatewayError> {
        self.0.map(str::to_string).ok_or_else(upstream_failure)
    }
}

#[derive(Default)]
pub(super) struct FakeSpeech {
    audio: Option<Vec<u8>>,
    spoken: Mutex<Vec<String>>,
}

impl FakeSpeech {
    pub(super) fn returning(audio: &[u8]) -> Self {
        Self {
            audio: Some(audio.to_vec()),
            spoken: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn failing() -> Self {
        Self::default()
    }

    pub(super) fn spoken(&self) -> Vec<String> {
        self.spoken.lock().expect("speech mutex poisoned").clone()
    }
}

impl SpeechSynthesizer for FakeSpeech {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, GatewayError> {
        self.spoken
            .lock()
            .expect("speech mutex poisoned")
            .push(text.to_string());
        self.audio.clone().ok_or_else(upstream_failure)
    }
}

pub(super) type FakeService = AnalysisService<FakeReader, FakeNarrator, FakeSpeech>;

pub(super) fn service(
    label: Option<&'static str>,
    sentence: Option<&'static str>,
    speech: Option<Arc<FakeSpeech>>,
) -> Arc<FakeService> {
    Arc::new(AnalysisService::new(
        Arc::new(FakeReader(label)),
        Arc::new(FakeNarrator(sentence)),
        speech,
    ))
}

pub(super) fn photo() -> LabelImage {
    LabelImage::new(vec![0xff, 0xd8, 0xff], "image/jpeg", 1024).expect("valid photo")
}

pub(super) enum FormPart<'a> {
    Text(&'a str, &'a str),
    File {
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub(super) fn multipart_request(parts: &[FormPart<'_>]) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::Text(name, value) => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                    .as_bytes(),
            ),
            FormPart::File {
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request builds")
}

pub(super) fn json_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
