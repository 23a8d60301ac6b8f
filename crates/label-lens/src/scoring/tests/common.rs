use serde_json::Value;

use crate::scoring::{score, CriterionHit, Lens, ScoreResult};

pub(super) fn scored(text: &str, lens: Lens) -> ScoreResult {
    score(text, lens, None).expect("label should be scorable")
}

pub(super) fn scored_for(text: &str, profile: Value) -> ScoreResult {
    score(text, Lens::Personal, Some(&profile)).expect("label should be scorable")
}

pub(super) fn hit_ids(result: &ScoreResult) -> Vec<&'static str> {
    result.criteria_hits.iter().map(|hit| hit.id).collect()
}

pub(super) fn hit_points(result: &ScoreResult) -> Vec<(&'static str, u16)> {
    result
        .criteria_hits
        .iter()
        .map(|hit| (hit.id, hit.points))
        .collect()
}

pub(super) fn hit<'a>(result: &'a ScoreResult, id: &str) -> &'a CriterionHit {
    result
        .criteria_hits
        .iter()
        .find(|hit| hit.id == id)
        .unwrap_or_else(|| panic!("expected {id} in {:?}", hit_ids(result)))
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) const SAMPLE_LABELS: &[&str] = &[
    "sugar, corn syrup, natural flavors, almonds",
    "oats, water, salt",
    "milk, sugar, vanilla",
    "water, stevia, sucralose, citric acid, natural flavor, red 40",
    "Ingredients: whole wheat flour, canola oil, sea salt, yeast, soy lecithin",
    "whey protein isolate, cocoa, creatine monohydrate, caffeine, gelatin",
    "quuxberry, magnesium stearate, salt",
];
