use crate::scoring::criteria::{
    Condition::*, Criterion, Direction::*, Scope::Always, Weight, ANY_SWEETENING, SWEETENERS,
    WHOLE_FOOD_KINDS,
};
use crate::scoring::partition::{Bucket, Tier};
use crate::scoring::vocabulary::VocabularyKind::*;

pub(crate) static CRITERIA: &[Criterion] = &[
    Criterion {
        id: "P1",
        name: "Artificial colors",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[ArtificialColors])],
        weight: Weight::Fixed(12),
        caution: None,
    },
    Criterion {
        id: "P2",
        name: "Non-nutritive sweeteners",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(SWEETENERS)],
        weight: Weight::Reduced {
            full_kinds: &[NonNutritiveSweeteners],
            full: 10,
            reduced: 6,
        },
        caution: None,
    },
    Criterion {
        id: "P3",
        name: "Added sugars",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[Sugars])],
        weight: Weight::ByProminence {
            kinds: &[Sugars],
            dominant: 18,
            multiple: 12,
            single: 6,
        },
        caution: None,
    },
    Criterion {
        id: "P4",
        name: "Added flavorings",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[Flavors])],
        weight: Weight::Fixed(8),
        caution: Some("Flavorings are umbrella terms; the label does not disclose what they contain."),
    },
    Criterion {
        id: "P5",
        name: "Emulsifiers and gums",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[Emulsifiers])],
        weight: Weight::ByCount {
            kinds: &[Emulsifiers],
            bands: &[(5, 12), (3, 8), (1, 4)],
        },
        caution: None,
    },
    Criterion {
        id: "P6",
        name: "Preservatives",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[Preservatives])],
        weight: Weight::ByCount {
            kinds: &[Preservatives],
            bands: &[(2, 10), (1, 5)],
        },
        caution: None,
    },
    Criterion {
        id: "P7",
        name: "Refined isolates or modified starches",
        direction: Negative,
        scope: Always,
        when: &[AnyOf(&[Isolates])],
        weight: Weight::ByCount {
            kinds: &[Isolates],
            bands: &[(3, 10), (1, 5)],
        },
        caution: None,
    },
    Criterion {
        id: "P8",
        name: "Long ingredient list",
        direction: Negative,
        scope: Always,
        when: &[],
        weight: Weight::ByListLength(&[(16, 10), (10, 6)]),
        caution: None,
    },
    Criterion {
        id: "P9",
        name: "Processed first ingredient",
        direction: Negative,
        scope: Always,
        when: &[],
        weight: Weight::ByFirstIngredient(&[
            (&[Sugars, Isolates], 10),
            (&[RefinedFlours, RefinedOils], 6),
        ]),
        caution: None,
    },
    Criterion {
        id: "B1",
        name: "Whole food listed first",
        direction: Positive,
        scope: Always,
        when: &[FirstIs(WHOLE_FOOD_KINDS)],
        weight: Weight::Fixed(12),
        caution: None,
    },
    Criterion {
        id: "B2",
        name: "Short, kitchen-like list",
        direction: Positive,
        scope: Always,
        when: &[
            FewerThan(10),
            NoneOf(&[ArtificialColors]),
            NoneOf(&[Flavors]),
            AtMost(&[Emulsifiers], 2),
            NoneOf(&[Preservatives]),
        ],
        weight: Weight::Fixed(8),
        caution: None,
    },
    Criterion {
        id: "B3",
        name: "Mostly whole foods",
        direction: Positive,
        scope: Always,
        when: &[],
        weight: Weight::ByDensity {
            whole: WHOLE_FOOD_KINDS,
            neutral: &[NeutralBasics],
            high: 10,
            medium: 6,
        },
        caution: None,
    },
    Criterion {
        id: "B4",
        name: "No added sweeteners",
        direction: Positive,
        scope: Always,
        when: &[NoneOf(ANY_SWEETENING)],
        weight: Weight::Fixed(6),
        caution: None,
    },
    Criterion {
        id: "B5",
        name: "Minimal additives",
        direction: Positive,
        scope: Always,
        when: &[NoneOf(&[Emulsifiers, Preservatives, Flavors])],
        weight: Weight::Fixed(4),
        caution: None,
    },
];

pub(crate) static TIERS: &[Tier] = &[
    Tier {
        bucket: Bucket::Negative,
        kinds: &[
            Sugars,
            NonNutritiveSweeteners,
            PlantSweeteners,
            ArtificialColors,
            Preservatives,
            Emulsifiers,
            Isolates,
            RefinedFlours,
            RefinedOils,
        ],
        unless: &[ContextDependent, UmbrellaTerms],
    },
    Tier {
        bucket: Bucket::Positive,
        kinds: &[WholeFoods, WholeGrains, NutsSeeds, CulinaryOils],
        unless: &[],
    },
    Tier {
        bucket: Bucket::Mixed,
        kinds: &[Flavors, UmbrellaTerms, ContextDependent],
        unless: &[],
    },
];
