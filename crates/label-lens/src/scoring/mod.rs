//! Deterministic ingredient scoring.
//!
//! Raw label text flows one way through the pipeline: [`normalize`] turns it into an
//! ordered [`IngredientList`], [`detect`] records vocabulary matches in a
//! [`SignalReport`], and a [`LensEngine`] applies one static rule table to produce a
//! [`ScoreResult`]. Nothing here performs I/O or keeps state between calls.

pub(crate) mod criteria;
pub mod glossary;
pub(crate) mod lenses;
pub mod normalizer;
pub mod partition;
pub mod profile;
pub mod result;
pub mod signals;
pub mod sources;
pub mod vocabulary;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use criteria::{CriterionHit, Direction};
pub use glossary::{LabLabel, LabelRelevance};
pub use normalizer::{normalize, Ingredient, IngredientList};
pub use partition::{Bucket, IngredientsBreakdown};
pub use profile::{AvoidPreference, Allergen, DietaryRule, Goal, HealthConsideration, UserProfile};
pub use result::{DetectedSignals, Reasons, ScoreBar, ScoreResult};
pub use signals::{detect, SignalHit, SignalReport};
pub use sources::SourceCitation;
pub use vocabulary::{standard_vocabularies, TermVocabulary, VocabularyKind};

use criteria::{Direction as Side, Evaluation};
use lenses::hard_rules::{self, HardRuleOutcome};
use lenses::LensDefinition;

const PROFILE_IGNORED: &str =
    "A user profile was supplied but only the Personal Fit lens uses it; it was ignored.";
pub(crate) const NUTRITION_FACTS: &str =
    "Ingredient lists do not show calories or portions; nutrition facts would improve accuracy.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("no ingredients could be read from the label text")]
    EmptyInput,
    #[error("unknown lens `{0}`; expected focus, real_food or personal")]
    UnknownLens(String),
}

/// The three scoring rubrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lens {
    Focus,
    RealFood,
    Personal,
}

impl Lens {
    pub const ALL: [Lens; 3] = [Lens::Focus, Lens::RealFood, Lens::Personal];

    pub fn label(self) -> &'static str {
        match self {
            Lens::Focus => "Focus Score",
            Lens::RealFood => "Real Food Score",
            Lens::Personal => "Personal Fit Score",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lens::Focus => "focus",
            Lens::RealFood => "real_food",
            Lens::Personal => "personal",
        }
    }
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lens {
    type Err = ScoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "focus" => Ok(Lens::Focus),
            "real_food" | "realfood" => Ok(Lens::RealFood),
            "personal" | "personal_fit" => Ok(Lens::Personal),
            _ => Err(ScoreError::UnknownLens(value.to_string())),
        }
    }
}

/// Score free-form label text under one lens.
///
/// `user_profile` is only consulted by [`Lens::Personal`]; unusable profile values
/// are reported in `notes` rather than rejected.
pub fn score(
    ingredient_text: &str,
    lens: Lens,
    user_profile: Option<&Value>,
) -> Result<ScoreResult, ScoreError> {
    let ingredients = normalize(ingredient_text)?;

    let (profile, mut notes) = match user_profile {
        None | Some(Value::Null) => (UserProfile::default(), Vec::new()),
        Some(value) if lens == Lens::Personal => UserProfile::from_json(value),
        Some(_) => (UserProfile::default(), vec![PROFILE_IGNORED.to_string()]),
    };

    let mut result = LensEngine::new(lens).evaluate(&ingredients, &profile);
    notes.append(&mut result.notes);
    result.notes = notes;
    Ok(result)
}

/// Applies one lens' rule table to a normalized list.
#[derive(Debug, Clone, Copy)]
pub struct LensEngine {
    lens: Lens,
    definition: &'static LensDefinition,
}

impl LensEngine {
    pub fn new(lens: Lens) -> Self {
        Self {
            lens,
            definition: lenses::definition(lens),
        }
    }

    pub fn lens(&self) -> Lens {
        self.lens
    }

    pub fn evaluate(&self, ingredients: &IngredientList, profile: &UserProfile) -> ScoreResult {
        let signals = detect(ingredients, &standard_vocabularies());
        let hard = if self.definition.hard_rules {
            hard_rules::evaluate(&signals, profile)
        } else {
            HardRuleOutcome::default()
        };

        let mut hits = hard.hits.clone();
        let mut notes = Vec::new();
        for criterion in self.definition.criteria {
            if !criterion.scope.applies(profile) {
                continue;
            }
            match criterion.evaluate(&signals) {
                Evaluation::Triggered(hit) => hits.push(hit),
                Evaluation::NotTriggered => {}
                Evaluation::Undetermined(note) => notes.push(note),
            }
        }

        let positive = points(&hits, Side::Positive);
        let negative = points(&hits, Side::Negative);
        let raw = self.definition.base_score + i32::from(positive)
            - i32::from(negative)
            - i32::from(hard.penalty);
        let score = raw.clamp(0, 100) as u8;

        let ingredients_breakdown =
            partition::partition(&self.definition.partition, &signals, &hits, &hard);
        let lab_labels = glossary::lab_labels(self.lens, &signals, profile, &hard);

        notes.extend(self.notes(&signals, profile, &hard, &hits, &lab_labels));

        let personal = self.lens == Lens::Personal;
        ScoreResult {
            lens: self.lens,
            score,
            bar: ScoreBar::new(self.lens, positive, negative.saturating_add(hard.penalty)),
            reasons: Reasons::rank(&hits),
            criteria_hits: hits,
            ingredients_breakdown,
            lab_labels,
            detected_signals: DetectedSignals::new(
                &signals,
                personal.then_some(profile),
                hard.penalty,
            ),
            sources_consulted: sources::sources_for(self.lens).to_vec(),
            notes,
        }
    }

    fn notes(
        &self,
        signals: &SignalReport,
        profile: &UserProfile,
        hard: &HardRuleOutcome,
        hits: &[CriterionHit],
        lab_labels: &[LabLabel],
    ) -> Vec<String> {
        let mut notes: Vec<String> = Vec::new();

        let umbrella =
            signals.names_for(&[VocabularyKind::Flavors, VocabularyKind::UmbrellaTerms]);
        if !umbrella.is_empty() {
            let note = format!(
                "Umbrella terms do not disclose their components: {}.",
                umbrella.join(", ")
            );
            push_unique(&mut notes, &note);
        }

        for note in &hard.notes {
            push_unique(&mut notes, note);
        }

        if self.lens == Lens::Personal
            && (profile.goal == Goal::WeightLoss
                || profile.considers(HealthConsideration::BloodSugarAware))
        {
            push_unique(&mut notes, NUTRITION_FACTS);
        }

        for caution in hits.iter().filter_map(|hit| hit.caution) {
            push_unique(&mut notes, caution);
        }

        let gaps: Vec<&str> = signals
            .unrecognized()
            .into_iter()
            .map(|ingredient| ingredient.name.as_str())
            .filter(|name| !lab_labels.iter().any(|label| label.ingredient == *name))
            .collect();
        if !gaps.is_empty() {
            let note = format!(
                "Not recognized by any ingredient vocabulary and classified neutral: {}.",
                gaps.join(", ")
            );
            push_unique(&mut notes, &note);
        }

        notes
    }
}

fn push_unique(notes: &mut Vec<String>, note: &str) {
    if !notes.iter().any(|existing| existing == note) {
        notes.push(note.to_string());
    }
}

fn points(hits: &[CriterionHit], direction: Side) -> u16 {
    hits.iter()
        .filter(|hit| !hit.hard_rule && hit.direction == direction)
        .map(|hit| hit.points)
        .fold(0u16, u16::saturating_add)
}
