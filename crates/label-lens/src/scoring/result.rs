use serde::{Serialize, Serializer};

use super::criteria::{CriterionHit, Direction};
use super::glossary::LabLabel;
use super::partition::IngredientsBreakdown;
use super::profile::UserProfile;
use super::signals::SignalReport;
use super::sources::SourceCitation;
use super::vocabulary::VocabularyKind::*;
use super::Lens;

const MAX_REASONS_PER_SIDE: usize = 3;

/// Everything a caller gets back for one scored label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    #[serde(serialize_with = "serialize_lens_label")]
    pub lens: Lens,
    pub score: u8,
    pub bar: ScoreBar,
    pub reasons: Reasons,
    pub criteria_hits: Vec<CriterionHit>,
    pub ingredients_breakdown: IngredientsBreakdown,
    pub lab_labels: Vec<LabLabel>,
    pub detected_signals: DetectedSignals,
    pub sources_consulted: Vec<SourceCitation>,
    pub notes: Vec<String>,
}

fn serialize_lens_label<S: Serializer>(lens: &Lens, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(lens.label())
}

/// Two-sided point bar. Personal Fit reports fit vs conflicts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreBar {
    Balance {
        positive_points: u16,
        negative_points: u16,
        positive_ratio: f64,
        negative_ratio: f64,
    },
    Fit {
        fits_you_points: u16,
        conflicts_points: u16,
        fits_you_ratio: f64,
        conflicts_ratio: f64,
    },
}

impl ScoreBar {
    pub(crate) fn new(lens: Lens, positive: u16, negative: u16) -> Self {
        let (positive_ratio, negative_ratio) = ratios(positive, negative);
        match lens {
            Lens::Personal => ScoreBar::Fit {
                fits_you_points: positive,
                conflicts_points: negative,
                fits_you_ratio: positive_ratio,
                conflicts_ratio: negative_ratio,
            },
            Lens::Focus | Lens::RealFood => ScoreBar::Balance {
                positive_points: positive,
                negative_points: negative,
                positive_ratio,
                negative_ratio,
            },
        }
    }

    pub fn positive_points(&self) -> u16 {
        match self {
            ScoreBar::Balance { positive_points, .. } => *positive_points,
            ScoreBar::Fit { fits_you_points, .. } => *fits_you_points,
        }
    }

    pub fn negative_points(&self) -> u16 {
        match self {
            ScoreBar::Balance { negative_points, .. } => *negative_points,
            ScoreBar::Fit { conflicts_points, .. } => *conflicts_points,
        }
    }

    pub fn positive_ratio(&self) -> f64 {
        match self {
            ScoreBar::Balance { positive_ratio, .. } => *positive_ratio,
            ScoreBar::Fit { fits_you_ratio, .. } => *fits_you_ratio,
        }
    }

    pub fn negative_ratio(&self) -> f64 {
        match self {
            ScoreBar::Balance { negative_ratio, .. } => *negative_ratio,
            ScoreBar::Fit { conflicts_ratio, .. } => *conflicts_ratio,
        }
    }
}

/// Shares of the two totals. The larger share is divided out and the smaller
/// one derived from it, which keeps the pair summing to exactly 1.0.
fn ratios(positive: u16, negative: u16) -> (f64, f64) {
    let total = f64::from(positive) + f64::from(negative);
    if total == 0.0 {
        return (0.5, 0.5);
    }
    if positive >= negative {
        let share = f64::from(positive) / total;
        (share, 1.0 - share)
    } else {
        let share = f64::from(negative) / total;
        (1.0 - share, share)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reasons {
    pub positives: Vec<String>,
    pub concerns: Vec<String>,
}

impl Reasons {
    /// Hard-rule concerns first, then the strongest criteria per side.
    ///
    /// `hits` must be in table declaration order; the stable sort keeps that
    /// order for equal weights.
    pub(crate) fn rank(hits: &[CriterionHit]) -> Self {
        let mut hard: Vec<&CriterionHit> = hits.iter().filter(|hit| hit.hard_rule).collect();
        hard.sort_by(|left, right| right.points.cmp(&left.points));

        let strongest = |direction: Direction| {
            let mut side: Vec<&CriterionHit> = hits
                .iter()
                .filter(|hit| !hit.hard_rule && hit.direction == direction)
                .collect();
            side.sort_by(|left, right| right.points.cmp(&left.points));
            side.truncate(MAX_REASONS_PER_SIDE);
            side
        };

        let concerns = hard
            .into_iter()
            .chain(strongest(Direction::Negative))
            .map(|hit| bullet("⚠️", hit))
            .collect();
        let positives = strongest(Direction::Positive)
            .into_iter()
            .map(|hit| bullet("✅", hit))
            .collect();

        Reasons {
            positives,
            concerns,
        }
    }
}

fn bullet(marker: &str, hit: &CriterionHit) -> String {
    let mut text = format!("{marker} {}: {}.", hit.name, hit.evidence);
    if let Some(caution) = hit.caution {
        text.push(' ');
        text.push_str(caution);
    }
    text
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SugarSignals {
    pub terms: Vec<String>,
    pub positions: Vec<usize>,
}

/// Raw detector output in one shape for every lens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedSignals {
    pub first_ingredient: String,
    pub ingredient_count: usize,
    pub sugars: SugarSignals,
    pub sweeteners: Vec<String>,
    pub colors: Vec<String>,
    pub stimulants: Vec<String>,
    pub omega3_sources: Vec<String>,
    pub nuts_seeds: Vec<String>,
    pub whole_grains: Vec<String>,
    pub protein_cues: Vec<String>,
    pub creatine: bool,
    pub additive_stack_markers: Vec<String>,
    pub flavors: Vec<String>,
    pub emulsifiers: Vec<String>,
    pub preservatives: Vec<String>,
    pub isolates: Vec<String>,
    pub profile: Option<UserProfile>,
    pub hard_fail_penalty: u16,
}

impl DetectedSignals {
    pub(crate) fn new(
        signals: &SignalReport,
        profile: Option<&UserProfile>,
        hard_fail_penalty: u16,
    ) -> Self {
        let sugars = signals.hits_for(&[Sugars]);
        Self {
            first_ingredient: signals
                .first_ingredient()
                .map(|ingredient| ingredient.name.clone())
                .unwrap_or_default(),
            ingredient_count: signals.ingredients().len(),
            sugars: SugarSignals {
                terms: sugars.iter().map(|hit| hit.ingredient.clone()).collect(),
                positions: sugars.iter().map(|hit| hit.position).collect(),
            },
            sweeteners: signals.names_for(&[NonNutritiveSweeteners, PlantSweeteners]),
            colors: signals.names_for(&[ArtificialColors]),
            stimulants: signals.names_for(&[Stimulants]),
            omega3_sources: signals.names_for(&[Omega3Sources]),
            nuts_seeds: signals.names_for(&[NutsSeeds]),
            whole_grains: signals.names_for(&[WholeGrains]),
            protein_cues: signals.names_for(&[ProteinCues]),
            creatine: signals.any(&[Creatine]),
            additive_stack_markers: signals.names_for(&[Flavors, Emulsifiers, Preservatives, Isolates]),
            flavors: signals.names_for(&[Flavors]),
            emulsifiers: signals.names_for(&[Emulsifiers]),
            preservatives: signals.names_for(&[Preservatives]),
            isolates: signals.names_for(&[Isolates]),
            profile: profile.cloned(),
            hard_fail_penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bar_splits_evenly() {
        let bar = ScoreBar::new(Lens::Focus, 0, 0);

        assert_eq!(bar.positive_ratio(), 0.5);
        assert_eq!(bar.negative_ratio(), 0.5);
    }

    #[test]
    fn ratios_sum_to_one() {
        for (positive, negative) in [(10, 30), (7, 3), (1, 2), (33, 100), (70, 13)] {
            let bar = ScoreBar::new(Lens::RealFood, positive, negative);
            assert_eq!(bar.positive_ratio() + bar.negative_ratio(), 1.0);
        }
    }

    #[test]
    fn personal_bar_uses_fit_keys() {
        let value = serde_json::to_value(ScoreBar::new(Lens::Personal, 4, 50)).expect("json");

        assert_eq!(value["fits_you_points"], 4);
        assert_eq!(value["conflicts_points"], 50);
        assert!(value.get("positive_points").is_none());
    }
}
