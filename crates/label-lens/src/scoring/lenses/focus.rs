use crate::scoring::criteria::{
    Condition::*, Criterion, Direction::*, Scope::Always, Weight, ADDITIVE_STACK, ANY_SWEETENING,
    SWEETENERS,
};
use crate::scoring::partition::{Bucket, Tier};
use crate::scoring::vocabulary::VocabularyKind::*;

pub(crate) static CRITERIA: &[Criterion] = &[
    Criterion {
        id: "N1",
        name: "Sugar is a dominant ingredient",
        direction: Negative,
        scope: Always,
        when: &[Dominant(&[Sugars])],
        weight: Weight::Fixed(18),
        caution: None,
    },
    Criterion {
        id: "N2",
        name: "Multiple added sugars",
        direction: Negative,
        scope: Always,
        when: &[DistinctAtLeast(&[Sugars], 2)],
        weight: Weight::Fixed(12),
        caution: None,
    },
    Criterion {
        id: "N3",
        name: "Artificial colors",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[ArtificialColors])],
        weight: Weight::Fixed(10),
        caution: Some("Some people choose to limit artificial colors; evidence varies."),
    },
    Criterion {
        id: "N4",
        name: "Stimulant markers",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[Stimulants])],
        weight: Weight::Fixed(8),
        caution: Some(
            "Stimulant effects vary between people; this score reflects steadiness, not alertness.",
        ),
    },
    Criterion {
        id: "N5",
        name: "Non-nutritive sweeteners",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(SWEETENERS)],
        weight: Weight::Reduced {
            full_kinds: &[NonNutritiveSweeteners],
            full: 6,
            reduced: 3,
        },
        caution: None,
    },
    Criterion {
        id: "N6",
        name: "Stack of flavorings and additives",
        direction: Negative,
        scope: Always,
        when: &[DistinctAtLeast(ADDITIVE_STACK, 3)],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "P1",
        name: "Nuts or seeds",
        direction: Positive,
        scope: Always,
        when: &[AnyOf(&[NutsSeeds])],
        weight: Weight::Fixed(10),
        caution: None,
    },
    Criterion {
        id: "P2",
        name: "Omega-3 source",
        direction: Positive,
        scope: Always,
        when: &[AnyOf(&[Omega3Sources])],
        weight: Weight::Fixed(10),
        caution: Some("Flax and chia provide ALA; how much the body converts to DHA/EPA varies."),
    },
    Criterion {
        id: "P3",
        name: "Whole grains",
        direction: Positive,
        scope: Always,
        when: &[AnyOf(&[WholeGrains])],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "P4",
        name: "Protein source",
        direction: Positive,
        scope: Always,
        when: &[AnyOf(&[ProteinCues])],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "P5",
        name: "Creatine",
        direction: Positive,
        scope: Always,
        when: &[AnyOf(&[Creatine])],
        weight: Weight::Fixed(8),
        caution: Some(
            "Creatine is best known for exercise performance; studies of cognitive effects are mixed.",
        ),
    },
    Criterion {
        id: "P6",
        name: "No added sweeteners",
        direction: Positive,
        scope: Always,
        when: &[NoneOf(ANY_SWEETENING)],
        weight: Weight::Fixed(6),
        caution: None,
    },
];

pub(crate) static TIERS: &[Tier] = &[
    Tier {
        bucket: Bucket::Negative,
        kinds: &[Sugars, NonNutritiveSweeteners, ArtificialColors, Stimulants],
        unless: &[UmbrellaTerms],
    },
    Tier {
        bucket: Bucket::Positive,
        kinds: &[NutsSeeds, Omega3Sources, WholeGrains, ProteinCues, Creatine],
        unless: &[Isolates],
    },
    Tier {
        bucket: Bucket::Mixed,
        kinds: &[
            PlantSweeteners,
            Flavors,
            Isolates,
            Emulsifiers,
            Preservatives,
            UmbrellaTerms,
            ContextDependent,
            RefinedOils,
        ],
        unless: &[],
    },
];
