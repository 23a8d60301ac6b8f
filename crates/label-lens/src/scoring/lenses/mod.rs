//! Static rule tables, one per lens, consumed by the shared evaluator.

mod focus;
pub(crate) mod hard_rules;
mod personal;
mod real_food;

use super::criteria::Criterion;
use super::partition::PartitionRules;
use super::Lens;

#[derive(Debug)]
pub(crate) struct LensDefinition {
    pub base_score: i32,
    pub criteria: &'static [Criterion],
    pub partition: PartitionRules,
    pub hard_rules: bool,
}

static FOCUS: LensDefinition = LensDefinition {
    base_score: 50,
    criteria: focus::CRITERIA,
    partition: PartitionRules::Tiers(focus::TIERS),
    hard_rules: false,
};

static REAL_FOOD: LensDefinition = LensDefinition {
    base_score: 100,
    criteria: real_food::CRITERIA,
    partition: PartitionRules::Tiers(real_food::TIERS),
    hard_rules: false,
};

static PERSONAL: LensDefinition = LensDefinition {
    base_score: 70,
    criteria: personal::CRITERIA,
    partition: PartitionRules::Evidence {
        ambiguous: personal::AMBIGUOUS,
    },
    hard_rules: true,
};

pub(crate) fn definition(lens: Lens) -> &'static LensDefinition {
    match lens {
        Lens::Focus => &FOCUS,
        Lens::RealFood => &REAL_FOOD,
        Lens::Personal => &PERSONAL,
    }
}
