use crate::scoring::criteria::{
    Condition::*, Criterion, Direction::*, Scope, Weight, ADDITIVE_STACK, ANY_SWEETENING,
    SWEETENERS, WHOLE_FOOD_KINDS,
};
use crate::scoring::profile::{AvoidPreference, Goal, HealthConsideration};
use crate::scoring::vocabulary::VocabularyKind::{self, *};
use crate::scoring::NUTRITION_FACTS;

const LIST_ONLY: Option<&str> = Some(NUTRITION_FACTS);

const REAL_FOOD: Scope = Scope::Goal(Goal::RealFood);
const STEADY_FOCUS: Scope = Scope::Goal(Goal::SteadyFocus);
const WEIGHT_LOSS: Scope = Scope::Goal(Goal::WeightLoss);
const WEIGHT_GAIN: Scope = Scope::Goal(Goal::WeightGain);
const BUILD_MUSCLE: Scope = Scope::Goal(Goal::BuildMuscle);
const BLOOD_SUGAR: Scope = Scope::Health(HealthConsideration::BloodSugarAware);

/// Tokens that are ambiguous for any profile unless a criterion cites them.
pub(crate) const AMBIGUOUS: &[VocabularyKind] =
    &[Flavors, UmbrellaTerms, Isolates, RefinedOils, ContextDependent];

pub(crate) static CRITERIA: &[Criterion] = &[
    // G1 real_food
    Criterion {
        id: "G1a",
        name: "Whole food listed first",
        direction: Positive,
        scope: REAL_FOOD,
        when: &[FirstIs(WHOLE_FOOD_KINDS)],
        weight: Weight::Fixed(8),
        caution: None,
    },
    Criterion {
        id: "G1b",
        name: "Short ingredient list",
        direction: Positive,
        scope: REAL_FOOD,
        when: &[FewerThan(10)],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "G1c",
        name: "Added flavorings",
        direction: Negative,
        scope: REAL_FOOD,
        when: &[AnyOf(&[Flavors])],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "G1d",
        name: "Several gums, emulsifiers or preservatives",
        direction: Negative,
        scope: REAL_FOOD,
        when: &[DistinctAtLeast(&[Emulsifiers, Preservatives], 3)],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "G1e",
        name: "Artificial colors",
        direction: Negative,
        scope: REAL_FOOD,
        when: &[AnyOf(&[ArtificialColors])],
        weight: Weight::Fixed(8),
        caution: None,
    },
    Criterion {
        id: "G1f",
        name: "Non-nutritive sweeteners",
        direction: Negative,
        scope: REAL_FOOD,
        when: &[AnyOf(SWEETENERS)],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "G1g",
        name: "Added sugar listed prominently",
        direction: Negative,
        scope: REAL_FOOD,
        when: &[Dominant(&[Sugars])],
        weight: Weight::Fixed(10),
        caution: None,
    },
    // G2 steady_focus
    Criterion {
        id: "G2a",
        name: "Nuts or seeds",
        direction: Positive,
        scope: STEADY_FOCUS,
        when: &[AnyOf(&[NutsSeeds])],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "G2b",
        name: "Omega-3 source",
        direction: Positive,
        scope: STEADY_FOCUS,
        when: &[AnyOf(&[Omega3Sources])],
        weight: Weight::Fixed(6),
        caution: Some("Flax and chia provide ALA; how much the body converts to DHA/EPA varies."),
    },
    Criterion {
        id: "G2c",
        name: "Whole grains",
        direction: Positive,
        scope: STEADY_FOCUS,
        when: &[AnyOf(&[WholeGrains])],
        weight: Weight::Fixed(4),
        caution: None,
    },
    Criterion {
        id: "G2d",
        name: "Creatine",
        direction: Positive,
        scope: STEADY_FOCUS,
        when: &[AnyOf(&[Creatine])],
        weight: Weight::Fixed(4),
        caution: Some(
            "Creatine is best known for exercise performance; studies of cognitive effects are mixed.",
        ),
    },
    Criterion {
        id: "G2e",
        name: "Sugar is a dominant ingredient",
        direction: Negative,
        scope: STEADY_FOCUS,
        when: &[Dominant(&[Sugars])],
        weight: Weight::Fixed(12),
        caution: None,
    },
    Criterion {
        id: "G2f",
        name: "Multiple added sugars",
        direction: Negative,
        scope: STEADY_FOCUS,
        when: &[DistinctAtLeast(&[Sugars], 2)],
        weight: Weight::Fixed(8),
        caution: None,
    },
    Criterion {
        id: "G2g",
        name: "Stimulant markers",
        direction: Negative,
        scope: STEADY_FOCUS,
        when: &[AnyOf(&[Stimulants])],
        weight: Weight::Fixed(6),
        caution: Some(
            "Stimulant effects vary between people; this score reflects steadiness, not alertness.",
        ),
    },
    Criterion {
        id: "G2h",
        name: "Artificial colors",
        direction: Negative,
        scope: STEADY_FOCUS,
        when: &[AnyOf(&[ArtificialColors])],
        weight: Weight::Fixed(6),
        caution: Some("Some people choose to limit artificial colors; evidence varies."),
    },
    // G3 weight_loss
    Criterion {
        id: "G3a",
        name: "Protein source",
        direction: Positive,
        scope: WEIGHT_LOSS,
        when: &[AnyOf(&[ProteinCues])],
        weight: Weight::Fixed(4),
        caution: LIST_ONLY,
    },
    Criterion {
        id: "G3b",
        name: "Whole grains",
        direction: Positive,
        scope: WEIGHT_LOSS,
        when: &[AnyOf(&[WholeGrains])],
        weight: Weight::Fixed(3),
        caution: LIST_ONLY,
    },
    Criterion {
        id: "G3c",
        name: "Nuts or seeds",
        direction: Positive,
        scope: WEIGHT_LOSS,
        when: &[AnyOf(&[NutsSeeds])],
        weight: Weight::Fixed(2),
        caution: LIST_ONLY,
    },
    Criterion {
        id: "G3d",
        name: "Sugar is a dominant ingredient",
        direction: Negative,
        scope: WEIGHT_LOSS,
        when: &[Dominant(&[Sugars])],
        weight: Weight::Fixed(10),
        caution: LIST_ONLY,
    },
    Criterion {
        id: "G3e",
        name: "Multiple added sugars",
        direction: Negative,
        scope: WEIGHT_LOSS,
        when: &[DistinctAtLeast(&[Sugars], 2)],
        weight: Weight::Fixed(6),
        caution: LIST_ONLY,
    },
    Criterion {
        id: "G3f",
        name: "Engineered sweeteners",
        direction: Negative,
        scope: WEIGHT_LOSS,
        when: &[AnyOf(SWEETENERS)],
        weight: Weight::Fixed(4),
        caution: LIST_ONLY,
    },
    // G4 weight_gain
    Criterion {
        id: "G4a",
        name: "Nuts, nut butters or oils",
        direction: Positive,
        scope: WEIGHT_GAIN,
        when: &[AnyOf(&[NutsSeeds, CulinaryOils])],
        weight: Weight::Fixed(4),
        caution: None,
    },
    Criterion {
        id: "G4b",
        name: "Protein source",
        direction: Positive,
        scope: WEIGHT_GAIN,
        when: &[AnyOf(&[ProteinCues])],
        weight: Weight::Fixed(4),
        caution: None,
    },
    Criterion {
        id: "G4c",
        name: "Whole grains",
        direction: Positive,
        scope: WEIGHT_GAIN,
        when: &[AnyOf(&[WholeGrains])],
        weight: Weight::Fixed(3),
        caution: None,
    },
    Criterion {
        id: "G4d",
        name: "Heavily engineered formulation",
        direction: Negative,
        scope: WEIGHT_GAIN,
        when: &[DistinctAtLeast(ADDITIVE_STACK, 3)],
        weight: Weight::Fixed(3),
        caution: None,
    },
    // G5 build_muscle
    Criterion {
        id: "G5a",
        name: "Protein source",
        direction: Positive,
        scope: BUILD_MUSCLE,
        when: &[AnyOf(&[ProteinCues])],
        weight: Weight::Fixed(8),
        caution: None,
    },
    Criterion {
        id: "G5b",
        name: "Creatine",
        direction: Positive,
        scope: BUILD_MUSCLE,
        when: &[AnyOf(&[Creatine])],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "G5c",
        name: "Sugar is a dominant ingredient",
        direction: Negative,
        scope: BUILD_MUSCLE,
        when: &[Dominant(&[Sugars])],
        weight: Weight::Fixed(6),
        caution: None,
    },
    // avoid list
    Criterion {
        id: "A1",
        name: "Artificial colors you avoid",
        direction: Negative,
        scope: Scope::Avoid(AvoidPreference::AvoidArtificialColors),
        when: &[AnyOf(&[ArtificialColors])],
        weight: Weight::Fixed(8),
        caution: None,
    },
    Criterion {
        id: "A2",
        name: "Sweeteners you avoid",
        direction: Negative,
        scope: Scope::Avoid(AvoidPreference::AvoidArtificialSweeteners),
        when: &[AnyOf(SWEETENERS)],
        weight: Weight::Reduced {
            full_kinds: &[NonNutritiveSweeteners],
            full: 8,
            reduced: 4,
        },
        caution: None,
    },
    Criterion {
        id: "A3a",
        name: "Stimulants while caffeine-sensitive",
        direction: Negative,
        scope: Scope::Avoid(AvoidPreference::CaffeineSensitive),
        when: &[AnyOf(&[Stimulants])],
        weight: Weight::Fixed(10),
        caution: None,
    },
    Criterion {
        id: "A3b",
        name: "No stimulant markers",
        direction: Positive,
        scope: Scope::Avoid(AvoidPreference::CaffeineSensitive),
        when: &[NoneOf(&[Stimulants])],
        weight: Weight::Fixed(2),
        caution: None,
    },
    Criterion {
        id: "A4a",
        name: "Ultra-processed markers",
        direction: Negative,
        scope: Scope::Avoid(AvoidPreference::AvoidUltraProcessed),
        when: &[Either(&[
            AnyOf(&[Flavors]),
            DistinctAtLeast(ADDITIVE_STACK, 3),
        ])],
        weight: Weight::Fixed(8),
        caution: None,
    },
    Criterion {
        id: "A4b",
        name: "Clean, short list",
        direction: Positive,
        scope: Scope::Avoid(AvoidPreference::AvoidUltraProcessed),
        when: &[FewerThan(10), NoneOf(&[Flavors]), AtMost(ADDITIVE_STACK, 2)],
        weight: Weight::Fixed(4),
        caution: None,
    },
    // health considerations
    Criterion {
        id: "C1a",
        name: "Sugar is a dominant ingredient",
        direction: Negative,
        scope: BLOOD_SUGAR,
        when: &[Dominant(&[Sugars])],
        weight: Weight::Fixed(12),
        caution: LIST_ONLY,
    },
    Criterion {
        id: "C1b",
        name: "Multiple added sugars",
        direction: Negative,
        scope: BLOOD_SUGAR,
        when: &[DistinctAtLeast(&[Sugars], 2)],
        weight: Weight::Fixed(8),
        caution: LIST_ONLY,
    },
    Criterion {
        id: "C1c",
        name: "No added sweeteners",
        direction: Positive,
        scope: BLOOD_SUGAR,
        when: &[NoneOf(ANY_SWEETENING)],
        weight: Weight::Fixed(3),
        caution: LIST_ONLY,
    },
];
