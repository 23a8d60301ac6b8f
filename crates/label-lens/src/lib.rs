//! Ingredient-label scoring: three deterministic lenses plus the photo analysis
//! pipeline and HTTP routes built around them.

pub mod analysis;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;

pub use scoring::{score, Lens, ScoreError, ScoreResult};
