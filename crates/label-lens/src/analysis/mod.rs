//! Photo-to-narration pipeline around the scoring core.

pub mod elevenlabs;
pub mod gateway;
pub mod gemini;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use elevenlabs::ElevenLabsClient;
pub use gateway::{GatewayError, ImageError, LabelImage, LabelReader, Narrator, SpeechSynthesizer};
pub use gemini::GeminiClient;
pub use router::{analysis_router, AnalysisState, LiveAnalysisService};
pub use service::{fallback_narrative, AnalysisError, AnalysisResponse, AnalysisService};
