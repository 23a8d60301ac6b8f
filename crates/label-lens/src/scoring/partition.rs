use serde::Serialize;

use super::criteria::{CriterionHit, Direction};
use super::lenses::hard_rules::HardRuleOutcome;
use super::signals::SignalReport;
use super::vocabulary::VocabularyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Positive,
    Negative,
    Mixed,
    Neutral,
}

/// A static classification tier: tokens matching `kinds` land in `bucket`
/// unless they also match one of `unless`.
#[derive(Debug)]
pub(crate) struct Tier {
    pub bucket: Bucket,
    pub kinds: &'static [VocabularyKind],
    pub unless: &'static [VocabularyKind],
}

#[derive(Debug)]
pub(crate) enum PartitionRules {
    /// Tiers checked in order; unmatched tokens are neutral.
    Tiers(&'static [Tier]),
    /// Driven by what the triggered criteria cite.
    Evidence { ambiguous: &'static [VocabularyKind] },
}

/// Every ingredient token, placed in exactly one bucket, in label order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientsBreakdown {
    pub positive_for_lens: Vec<String>,
    pub negative_for_lens: Vec<String>,
    pub mixed_for_lens: Vec<String>,
    pub neutral_for_lens: Vec<String>,
}

impl IngredientsBreakdown {
    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Positive => &self.positive_for_lens,
            Bucket::Negative => &self.negative_for_lens,
            Bucket::Mixed => &self.mixed_for_lens,
            Bucket::Neutral => &self.neutral_for_lens,
        }
    }

    pub fn total(&self) -> usize {
        self.positive_for_lens.len()
            + self.negative_for_lens.len()
            + self.mixed_for_lens.len()
            + self.neutral_for_lens.len()
    }

    fn push(&mut self, bucket: Bucket, name: &str) {
        let target = match bucket {
            Bucket::Positive => &mut self.positive_for_lens,
            Bucket::Negative => &mut self.negative_for_lens,
            Bucket::Mixed => &mut self.mixed_for_lens,
            Bucket::Neutral => &mut self.neutral_for_lens,
        };
        target.push(name.to_string());
    }
}

pub(crate) fn partition(
    rules: &PartitionRules,
    signals: &SignalReport,
    hits: &[CriterionHit],
    hard: &HardRuleOutcome,
) -> IngredientsBreakdown {
    let mut breakdown = IngredientsBreakdown::default();

    for ingredient in signals.ingredients().iter() {
        let position = ingredient.position;
        let bucket = if hard.conflicts.contains(&position) {
            Bucket::Negative
        } else if hard.uncertain.contains(&position) {
            Bucket::Mixed
        } else {
            match rules {
                PartitionRules::Tiers(tiers) => classify_by_tier(tiers, signals, position),
                PartitionRules::Evidence { ambiguous } => {
                    classify_by_evidence(ambiguous, signals, hits, position)
                }
            }
        };
        breakdown.push(bucket, &ingredient.name);
    }

    breakdown
}

fn classify_by_tier(tiers: &[Tier], signals: &SignalReport, position: usize) -> Bucket {
    tiers
        .iter()
        .find(|tier| {
            signals.matches_any(position, tier.kinds) && !signals.matches_any(position, tier.unless)
        })
        .map_or(Bucket::Neutral, |tier| tier.bucket)
}

fn classify_by_evidence(
    ambiguous: &[VocabularyKind],
    signals: &SignalReport,
    hits: &[CriterionHit],
    position: usize,
) -> Bucket {
    let cited_by = |direction: Direction| {
        hits.iter().any(|hit| {
            !hit.hard_rule && hit.direction == direction && hit.positions.contains(&position)
        })
    };

    if cited_by(Direction::Negative) {
        Bucket::Negative
    } else if cited_by(Direction::Positive) {
        if signals.is_member(position, VocabularyKind::Isolates) {
            Bucket::Mixed
        } else {
            Bucket::Positive
        }
    } else if signals.matches_any(position, ambiguous) {
        Bucket::Mixed
    } else {
        Bucket::Neutral
    }
}
