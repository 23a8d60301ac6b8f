use std::collections::BTreeSet;

use crate::scoring::criteria::{CriterionHit, Direction};
use crate::scoring::profile::{Allergen, DietaryRule, UserProfile};
use crate::scoring::signals::{SignalHit, SignalReport};
use crate::scoring::vocabulary::VocabularyKind;

pub(crate) const ALLERGEN_PENALTY: u16 = 70;
pub(crate) const DIET_PENALTY: u16 = 50;
pub(crate) const RELIGIOUS_PENALTY: u16 = 40;

/// Compatibility conflicts evaluated before any goal weights.
#[derive(Debug, Default)]
pub(crate) struct HardRuleOutcome {
    pub hits: Vec<CriterionHit>,
    pub penalty: u16,
    /// Positions that clearly conflict with the profile.
    pub conflicts: BTreeSet<usize>,
    /// Positions that may conflict but the label is not explicit enough to say.
    pub uncertain: BTreeSet<usize>,
    pub notes: Vec<String>,
}

pub(crate) fn evaluate(signals: &SignalReport, profile: &UserProfile) -> HardRuleOutcome {
    let mut outcome = HardRuleOutcome::default();

    check_allergens(signals, profile, &mut outcome);
    check_diet(signals, profile, &mut outcome);
    for rule in [DietaryRule::Halal, DietaryRule::Kosher] {
        if profile.has_rule(rule) {
            check_religious(signals, rule, &mut outcome);
        }
    }

    // A refined soy derivative can still be an explicit diet conflict.
    let conflicts = outcome.conflicts.clone();
    outcome.uncertain.retain(|position| !conflicts.contains(position));

    outcome.penalty = outcome
        .hits
        .iter()
        .map(|hit| hit.points)
        .max()
        .unwrap_or(0)
        .min(ALLERGEN_PENALTY);
    outcome
}

fn check_allergens(signals: &SignalReport, profile: &UserProfile, outcome: &mut HardRuleOutcome) {
    let mut evidence = Vec::new();
    let mut positions = Vec::new();

    for allergen in &profile.allergens {
        for hit in signals.hits(allergen.vocabulary()) {
            positions.push(hit.position);
            evidence.push(format!("contains {} ({})", hit.ingredient, allergen.label()));

            if *allergen == Allergen::Soy && signals.is_member(hit.position, VocabularyKind::RefinedSoy) {
                outcome.uncertain.insert(hit.position);
                outcome.notes.push(format!(
                    "{} is a highly refined soy derivative; some people with a soy allergy tolerate it, but it is still flagged.",
                    hit.ingredient
                ));
            } else {
                outcome.conflicts.insert(hit.position);
            }
        }
    }

    if !evidence.is_empty() {
        outcome.hits.push(hard_hit(
            "H1",
            "Allergen present",
            ALLERGEN_PENALTY,
            evidence.join(", "),
            positions,
        ));
    }
}

fn check_diet(signals: &SignalReport, profile: &UserProfile, outcome: &mut HardRuleOutcome) {
    let (kind, name, rule) = if profile.has_rule(DietaryRule::Vegan) {
        (VocabularyKind::VeganConflicts, "Vegan conflict", DietaryRule::Vegan)
    } else if profile.has_rule(DietaryRule::Vegetarian) {
        (
            VocabularyKind::VegetarianConflicts,
            "Vegetarian conflict",
            DietaryRule::Vegetarian,
        )
    } else {
        return;
    };

    let hits = signals.hits(kind);
    if hits.is_empty() {
        return;
    }

    outcome.conflicts.extend(hits.iter().map(|hit| hit.position));
    outcome.hits.push(hard_hit(
        "H2",
        name,
        DIET_PENALTY,
        describe(hits, rule),
        hits.iter().map(|hit| hit.position).collect(),
    ));
}

fn check_religious(signals: &SignalReport, rule: DietaryRule, outcome: &mut HardRuleOutcome) {
    let (kind, name) = match rule {
        DietaryRule::Kosher => (VocabularyKind::KosherConflicts, "Kosher conflict"),
        _ => (VocabularyKind::HalalConflicts, "Halal conflict"),
    };

    let hits = signals.hits(kind);
    if !hits.is_empty() {
        outcome.conflicts.extend(hits.iter().map(|hit| hit.position));
        outcome.hits.push(hard_hit(
            "H3",
            name,
            RELIGIOUS_PENALTY,
            describe(hits, rule),
            hits.iter().map(|hit| hit.position).collect(),
        ));
    }

    for hit in signals.hits(VocabularyKind::UnspecifiedGelatin) {
        flag_uncertain(
            outcome,
            hit,
            format!(
                "{}: source not specified; {} compliance cannot be confirmed from the label.",
                hit.ingredient,
                rule.label()
            ),
        );
    }

    if rule == DietaryRule::Halal {
        for hit in signals.hits(VocabularyKind::AlcoholDerived) {
            flag_uncertain(
                outcome,
                hit,
                format!(
                    "{}: may be made with alcohol or only named after a drink; halal compliance cannot be confirmed from the label.",
                    hit.ingredient
                ),
            );
        }
    }
}

fn flag_uncertain(outcome: &mut HardRuleOutcome, hit: &SignalHit, note: String) {
    if outcome.conflicts.contains(&hit.position) {
        return;
    }
    if outcome.uncertain.insert(hit.position) {
        outcome.notes.push(note);
    }
}

fn describe(hits: &[SignalHit], rule: DietaryRule) -> String {
    hits.iter()
        .map(|hit| format!("contains {} (not {})", hit.ingredient, rule.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn hard_hit(
    id: &'static str,
    name: &'static str,
    points: u16,
    evidence: String,
    positions: Vec<usize>,
) -> CriterionHit {
    CriterionHit {
        id,
        name,
        direction: Direction::Negative,
        points,
        evidence,
        positions,
        caution: None,
        hard_rule: true,
    }
}
