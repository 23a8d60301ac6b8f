use std::collections::BTreeSet;

use serde::Serialize;

use super::profile::{AvoidPreference, Goal, HealthConsideration, UserProfile};
use super::signals::SignalReport;
use super::vocabulary::VocabularyKind::{self, *};

pub(crate) const ADDITIVE_STACK: &[VocabularyKind] = &[Flavors, Emulsifiers, Preservatives, Isolates];
pub(crate) const WHOLE_FOOD_KINDS: &[VocabularyKind] = &[WholeFoods, WholeGrains, NutsSeeds];
pub(crate) const SWEETENERS: &[VocabularyKind] = &[NonNutritiveSweeteners, PlantSweeteners];
pub(crate) const ANY_SWEETENING: &[VocabularyKind] =
    &[Sugars, NonNutritiveSweeteners, PlantSweeteners];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

/// A triggered criterion as it appears in `criteria_hits`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionHit {
    pub id: &'static str,
    pub name: &'static str,
    pub direction: Direction,
    pub points: u16,
    pub evidence: String,
    /// Label positions the evidence cites.
    #[serde(skip)]
    pub positions: Vec<usize>,
    #[serde(skip)]
    pub caution: Option<&'static str>,
    #[serde(skip)]
    pub hard_rule: bool,
}

/// Which profiles a criterion applies to. Focus and Real Food use `Always`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scope {
    Always,
    Goal(Goal),
    Avoid(AvoidPreference),
    Health(HealthConsideration),
}

impl Scope {
    pub(crate) fn applies(self, profile: &UserProfile) -> bool {
        match self {
            Scope::Always => true,
            Scope::Goal(goal) => profile.goal == goal,
            Scope::Avoid(preference) => profile.avoids(preference),
            Scope::Health(consideration) => profile.considers(consideration),
        }
    }
}

/// Trigger predicates. All conditions of a criterion must hold.
#[derive(Debug)]
pub(crate) enum Condition {
    AnyOf(&'static [VocabularyKind]),
    NoneOf(&'static [VocabularyKind]),
    /// A match at position 1 or 2.
    Dominant(&'static [VocabularyKind]),
    DistinctAtLeast(&'static [VocabularyKind], usize),
    AtMost(&'static [VocabularyKind], usize),
    FewerThan(usize),
    FirstIs(&'static [VocabularyKind]),
    Either(&'static [Condition]),
}

/// Point formulas. A formula that yields 0 leaves the criterion untriggered.
#[derive(Debug)]
pub(crate) enum Weight {
    Fixed(u16),
    /// `full` points when any `full_kinds` matched, otherwise `reduced`.
    Reduced {
        full_kinds: &'static [VocabularyKind],
        full: u16,
        reduced: u16,
    },
    /// Bands of `(minimum distinct count, points)`, highest minimum first.
    ByCount {
        kinds: &'static [VocabularyKind],
        bands: &'static [(usize, u16)],
    },
    /// Bands of `(minimum list length, points)`, highest minimum first.
    ByListLength(&'static [(usize, u16)]),
    ByFirstIngredient(&'static [(&'static [VocabularyKind], u16)]),
    ByProminence {
        kinds: &'static [VocabularyKind],
        dominant: u16,
        multiple: u16,
        single: u16,
    },
    /// Share of whole-food tokens among tokens that are not neutral basics.
    ByDensity {
        whole: &'static [VocabularyKind],
        neutral: &'static [VocabularyKind],
        high: u16,
        medium: u16,
    },
}

#[derive(Debug)]
pub(crate) struct Criterion {
    pub id: &'static str,
    pub name: &'static str,
    pub direction: Direction,
    pub scope: Scope,
    pub when: &'static [Condition],
    pub weight: Weight,
    pub caution: Option<&'static str>,
}

#[derive(Debug)]
pub(crate) enum Evaluation {
    Triggered(CriterionHit),
    NotTriggered,
    Undetermined(String),
}

#[derive(Debug, Default)]
struct Evidence {
    positions: BTreeSet<usize>,
    details: Vec<String>,
}

impl Evidence {
    fn cite(&mut self, positions: impl IntoIterator<Item = usize>) {
        self.positions.extend(positions);
    }

    fn merge(&mut self, other: Evidence) {
        self.positions.extend(other.positions);
        self.details.extend(other.details);
    }

    fn describe(&self, signals: &SignalReport) -> String {
        let cited: Vec<String> = self
            .positions
            .iter()
            .filter_map(|position| signals.ingredients().get(*position))
            .map(|ingredient| format!("{} (#{})", ingredient.name, ingredient.position))
            .collect();

        let mut parts = Vec::new();
        if !cited.is_empty() {
            parts.push(cited.join(", "));
        }
        parts.extend(self.details.iter().cloned());
        parts.join("; ")
    }
}

fn labels(kinds: &[VocabularyKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(" or ")
}

impl Condition {
    fn holds(&self, signals: &SignalReport, evidence: &mut Evidence) -> bool {
        match self {
            Condition::AnyOf(kinds) => {
                let hits = signals.hits_for(kinds);
                evidence.cite(hits.iter().map(|hit| hit.position));
                !hits.is_empty()
            }
            Condition::NoneOf(kinds) => {
                if signals.any(kinds) {
                    return false;
                }
                evidence.details.push(format!("no {} detected", labels(kinds)));
                true
            }
            Condition::Dominant(kinds) => {
                let dominant: Vec<usize> = signals
                    .hits_for(kinds)
                    .iter()
                    .map(|hit| hit.position)
                    .filter(|position| *position <= 2)
                    .collect();
                evidence.cite(dominant.iter().copied());
                !dominant.is_empty()
            }
            Condition::DistinctAtLeast(kinds, minimum) => {
                let hits = signals.hits_for(kinds);
                if hits.len() < *minimum {
                    return false;
                }
                evidence.cite(hits.iter().map(|hit| hit.position));
                true
            }
            Condition::AtMost(kinds, maximum) => {
                let count = signals.distinct_count(kinds);
                if count > *maximum {
                    return false;
                }
                if count == 0 {
                    evidence.details.push(format!("no {} detected", labels(kinds)));
                } else {
                    evidence.details.push(format!("{count} {}", labels(kinds)));
                }
                true
            }
            Condition::FewerThan(limit) => {
                let length = signals.ingredients().len();
                if length >= *limit {
                    return false;
                }
                evidence.details.push(format!("{length} ingredients"));
                true
            }
            Condition::FirstIs(kinds) => {
                if !signals.matches_any(1, kinds) {
                    return false;
                }
                evidence.cite([1]);
                true
            }
            Condition::Either(options) => {
                for option in options.iter() {
                    let mut scratch = Evidence::default();
                    if option.holds(signals, &mut scratch) {
                        evidence.merge(scratch);
                        return true;
                    }
                }
                false
            }
        }
    }
}

impl Weight {
    /// `None` when the formula cannot be evaluated for this list.
    fn points(&self, signals: &SignalReport, evidence: &mut Evidence) -> Option<u16> {
        match self {
            Weight::Fixed(points) => Some(*points),
            Weight::Reduced {
                full_kinds,
                full,
                reduced,
            } => Some(if signals.any(full_kinds) { *full } else { *reduced }),
            Weight::ByCount { kinds, bands } => {
                let hits = signals.hits_for(kinds);
                evidence.cite(hits.iter().map(|hit| hit.position));
                Some(band(bands, hits.len()))
            }
            Weight::ByListLength(bands) => {
                let length = signals.ingredients().len();
                evidence.details.push(format!("{length} ingredients"));
                Some(band(bands, length))
            }
            Weight::ByFirstIngredient(options) => {
                let points = options
                    .iter()
                    .find(|(kinds, _)| signals.matches_any(1, kinds))
                    .map_or(0, |(_, points)| *points);
                if points > 0 {
                    evidence.cite([1]);
                }
                Some(points)
            }
            Weight::ByProminence {
                kinds,
                dominant,
                multiple,
                single,
            } => {
                let hits = signals.hits_for(kinds);
                evidence.cite(hits.iter().map(|hit| hit.position));
                Some(if hits.iter().any(|hit| hit.position <= 2) {
                    *dominant
                } else if hits.len() >= 2 {
                    *multiple
                } else if hits.len() == 1 {
                    *single
                } else {
                    0
                })
            }
            Weight::ByDensity {
                whole,
                neutral,
                high,
                medium,
            } => {
                let considered: Vec<usize> = signals
                    .ingredients()
                    .iter()
                    .map(|ingredient| ingredient.position)
                    .filter(|position| !signals.matches_any(*position, neutral))
                    .collect();
                if considered.is_empty() {
                    return None;
                }
                let whole_positions: Vec<usize> = considered
                    .iter()
                    .copied()
                    .filter(|position| signals.matches_any(*position, whole))
                    .collect();

                let (count, total) = (whole_positions.len(), considered.len());
                let points = if count * 10 >= total * 6 {
                    *high
                } else if count * 10 >= total * 3 {
                    *medium
                } else {
                    0
                };
                evidence.cite(whole_positions);
                evidence
                    .details
                    .push(format!("{count} of {total} non-basic ingredients are whole foods"));
                Some(points)
            }
        }
    }
}

fn band(bands: &[(usize, u16)], value: usize) -> u16 {
    bands
        .iter()
        .find(|(minimum, _)| value >= *minimum)
        .map_or(0, |(_, points)| *points)
}

impl Criterion {
    pub(crate) fn evaluate(&self, signals: &SignalReport) -> Evaluation {
        let mut evidence = Evidence::default();

        if !self
            .when
            .iter()
            .all(|condition| condition.holds(signals, &mut evidence))
        {
            return Evaluation::NotTriggered;
        }

        let Some(points) = self.weight.points(signals, &mut evidence) else {
            return Evaluation::Undetermined(format!(
                "{} ({}) could not be determined from the ingredient list; treated as not triggered.",
                self.name, self.id
            ));
        };

        if points == 0 {
            return Evaluation::NotTriggered;
        }

        Evaluation::Triggered(CriterionHit {
            id: self.id,
            name: self.name,
            direction: self.direction,
            points,
            evidence: evidence.describe(signals),
            positions: evidence.positions.iter().copied().collect(),
            caution: self.caution,
            hard_rule: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalizer::normalize;
    use crate::scoring::signals::detect;
    use crate::scoring::vocabulary::standard_vocabularies;

    fn signals(text: &str) -> SignalReport {
        detect(&normalize(text).expect("tokens"), &standard_vocabularies())
    }

    fn criterion(when: &'static [Condition], weight: Weight) -> Criterion {
        Criterion {
            id: "T1",
            name: "Test criterion",
            direction: Direction::Negative,
            scope: Scope::Always,
            when,
            weight,
            caution: None,
        }
    }

    #[test]
    fn dominant_cites_only_the_leading_positions() {
        let rule = criterion(&[Condition::Dominant(&[Sugars])], Weight::Fixed(18));

        let Evaluation::Triggered(hit) = rule.evaluate(&signals("sugar, oats, dextrose")) else {
            panic!("expected trigger");
        };
        assert_eq!(hit.points, 18);
        assert_eq!(hit.positions, vec![1]);
        assert_eq!(hit.evidence, "sugar (#1)");
    }

    #[test]
    fn zero_point_formulas_do_not_trigger() {
        let rule = criterion(&[], Weight::ByListLength(&[(16, 10), (10, 6)]));

        assert!(matches!(
            rule.evaluate(&signals("oats, water")),
            Evaluation::NotTriggered
        ));
    }

    #[test]
    fn count_bands_pick_the_highest_matching_minimum() {
        let rule = criterion(
            &[Condition::AnyOf(&[Emulsifiers])],
            Weight::ByCount {
                kinds: &[Emulsifiers],
                bands: &[(5, 12), (3, 8), (1, 4)],
            },
        );

        let Evaluation::Triggered(hit) =
            rule.evaluate(&signals("water, guar gum, xanthan gum, carrageenan"))
        else {
            panic!("expected trigger");
        };
        assert_eq!(hit.points, 8);
    }

    #[test]
    fn density_over_neutral_only_lists_is_undetermined() {
        let rule = criterion(
            &[],
            Weight::ByDensity {
                whole: WHOLE_FOOD_KINDS,
                neutral: &[NeutralBasics],
                high: 10,
                medium: 6,
            },
        );

        assert!(matches!(
            rule.evaluate(&signals("water, salt")),
            Evaluation::Undetermined(_)
        ));
    }

    #[test]
    fn either_takes_the_first_branch_that_holds() {
        let rule = criterion(
            &[Condition::Either(&[
                Condition::AnyOf(&[Flavors]),
                Condition::DistinctAtLeast(ADDITIVE_STACK, 3),
            ])],
            Weight::Fixed(8),
        );

        assert!(matches!(
            rule.evaluate(&signals("oats, natural flavors")),
            Evaluation::Triggered(_)
        ));
        assert!(matches!(
            rule.evaluate(&signals("oats, salt")),
            Evaluation::NotTriggered
        ));
    }
}
