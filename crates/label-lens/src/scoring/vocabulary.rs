use serde::Serialize;

/// Named term classes recognised on ingredient labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    Sugars,
    NonNutritiveSweeteners,
    PlantSweeteners,
    ArtificialColors,
    Stimulants,
    Omega3Sources,
    NutsSeeds,
    WholeGrains,
    ProteinCues,
    Creatine,
    Flavors,
    Emulsifiers,
    Preservatives,
    Isolates,
    WholeFoods,
    RefinedFlours,
    RefinedOils,
    CulinaryOils,
    UmbrellaTerms,
    ContextDependent,
    NeutralBasics,
    PeanutAllergen,
    TreeNutAllergen,
    DairyAllergen,
    GlutenAllergen,
    EggAllergen,
    ShellfishAllergen,
    SesameAllergen,
    SoyAllergen,
    RefinedSoy,
    VeganConflicts,
    VegetarianConflicts,
    HalalConflicts,
    KosherConflicts,
    UnspecifiedGelatin,
    AlcoholDerived,
}

impl VocabularyKind {
    pub const ALL: [VocabularyKind; 36] = [
        VocabularyKind::Sugars,
        VocabularyKind::NonNutritiveSweeteners,
        VocabularyKind::PlantSweeteners,
        VocabularyKind::ArtificialColors,
        VocabularyKind::Stimulants,
        VocabularyKind::Omega3Sources,
        VocabularyKind::NutsSeeds,
        VocabularyKind::WholeGrains,
        VocabularyKind::ProteinCues,
        VocabularyKind::Creatine,
        VocabularyKind::Flavors,
        VocabularyKind::Emulsifiers,
        VocabularyKind::Preservatives,
        VocabularyKind::Isolates,
        VocabularyKind::WholeFoods,
        VocabularyKind::RefinedFlours,
        VocabularyKind::RefinedOils,
        VocabularyKind::CulinaryOils,
        VocabularyKind::UmbrellaTerms,
        VocabularyKind::ContextDependent,
        VocabularyKind::NeutralBasics,
        VocabularyKind::PeanutAllergen,
        VocabularyKind::TreeNutAllergen,
        VocabularyKind::DairyAllergen,
        VocabularyKind::GlutenAllergen,
        VocabularyKind::EggAllergen,
        VocabularyKind::ShellfishAllergen,
        VocabularyKind::SesameAllergen,
        VocabularyKind::SoyAllergen,
        VocabularyKind::RefinedSoy,
        VocabularyKind::VeganConflicts,
        VocabularyKind::VegetarianConflicts,
        VocabularyKind::HalalConflicts,
        VocabularyKind::KosherConflicts,
        VocabularyKind::UnspecifiedGelatin,
        VocabularyKind::AlcoholDerived,
    ];

    /// Short plural phrase used in evidence text.
    pub fn label(self) -> &'static str {
        match self {
            VocabularyKind::Sugars => "added sugars",
            VocabularyKind::NonNutritiveSweeteners => "non-nutritive sweeteners",
            VocabularyKind::PlantSweeteners => "plant-based sweeteners",
            VocabularyKind::ArtificialColors => "artificial colors",
            VocabularyKind::Stimulants => "stimulants",
            VocabularyKind::Omega3Sources => "omega-3 sources",
            VocabularyKind::NutsSeeds => "nuts or seeds",
            VocabularyKind::WholeGrains => "whole grains",
            VocabularyKind::ProteinCues => "protein sources",
            VocabularyKind::Creatine => "creatine",
            VocabularyKind::Flavors => "flavorings",
            VocabularyKind::Emulsifiers => "emulsifiers or gums",
            VocabularyKind::Preservatives => "preservatives",
            VocabularyKind::Isolates => "isolates or modified starches",
            VocabularyKind::WholeFoods => "whole foods",
            VocabularyKind::RefinedFlours => "refined flours",
            VocabularyKind::RefinedOils => "refined oils",
            VocabularyKind::CulinaryOils => "culinary oils or nut butters",
            VocabularyKind::UmbrellaTerms => "umbrella terms",
            VocabularyKind::ContextDependent => "context-dependent ingredients",
            VocabularyKind::NeutralBasics => "neutral basics",
            VocabularyKind::PeanutAllergen => "peanut",
            VocabularyKind::TreeNutAllergen => "tree nuts",
            VocabularyKind::DairyAllergen => "dairy",
            VocabularyKind::GlutenAllergen => "gluten",
            VocabularyKind::EggAllergen => "egg",
            VocabularyKind::ShellfishAllergen => "shellfish",
            VocabularyKind::SesameAllergen => "sesame",
            VocabularyKind::SoyAllergen => "soy",
            VocabularyKind::RefinedSoy => "highly refined soy",
            VocabularyKind::VeganConflicts => "animal-derived ingredients",
            VocabularyKind::VegetarianConflicts => "meat, fish or slaughter by-products",
            VocabularyKind::HalalConflicts => "non-halal ingredients",
            VocabularyKind::KosherConflicts => "non-kosher ingredients",
            VocabularyKind::UnspecifiedGelatin => "gelatin of unstated source",
            VocabularyKind::AlcoholDerived => "ingredients made from or named after alcoholic drinks",
        }
    }

    pub fn vocabulary(self) -> &'static TermVocabulary {
        match self {
            VocabularyKind::Sugars => &SUGARS,
            VocabularyKind::NonNutritiveSweeteners => &NON_NUTRITIVE_SWEETENERS,
            VocabularyKind::PlantSweeteners => &PLANT_SWEETENERS,
            VocabularyKind::ArtificialColors => &ARTIFICIAL_COLORS,
            VocabularyKind::Stimulants => &STIMULANTS,
            VocabularyKind::Omega3Sources => &OMEGA3_SOURCES,
            VocabularyKind::NutsSeeds => &NUTS_SEEDS,
            VocabularyKind::WholeGrains => &WHOLE_GRAINS,
            VocabularyKind::ProteinCues => &PROTEIN_CUES,
            VocabularyKind::Creatine => &CREATINE,
            VocabularyKind::Flavors => &FLAVORS,
            VocabularyKind::Emulsifiers => &EMULSIFIERS,
            VocabularyKind::Preservatives => &PRESERVATIVES,
            VocabularyKind::Isolates => &ISOLATES,
            VocabularyKind::WholeFoods => &WHOLE_FOODS,
            VocabularyKind::RefinedFlours => &REFINED_FLOURS,
            VocabularyKind::RefinedOils => &REFINED_OILS,
            VocabularyKind::CulinaryOils => &CULINARY_OILS,
            VocabularyKind::UmbrellaTerms => &UMBRELLA_TERMS,
            VocabularyKind::ContextDependent => &CONTEXT_DEPENDENT,
            VocabularyKind::NeutralBasics => &NEUTRAL_BASICS,
            VocabularyKind::PeanutAllergen => &PEANUT,
            VocabularyKind::TreeNutAllergen => &TREE_NUT,
            VocabularyKind::DairyAllergen => &DAIRY,
            VocabularyKind::GlutenAllergen => &GLUTEN,
            VocabularyKind::EggAllergen => &EGG,
            VocabularyKind::ShellfishAllergen => &SHELLFISH,
            VocabularyKind::SesameAllergen => &SESAME,
            VocabularyKind::SoyAllergen => &SOY,
            VocabularyKind::RefinedSoy => &REFINED_SOY,
            VocabularyKind::VeganConflicts => &VEGAN_CONFLICTS,
            VocabularyKind::VegetarianConflicts => &VEGETARIAN_CONFLICTS,
            VocabularyKind::HalalConflicts => &HALAL_CONFLICTS,
            VocabularyKind::KosherConflicts => &KOSHER_CONFLICTS,
            VocabularyKind::UnspecifiedGelatin => &UNSPECIFIED_GELATIN,
            VocabularyKind::AlcoholDerived => &ALCOHOL_DERIVED,
        }
    }
}

/// A term list plus the exclusion phrases that veto a match on the same token.
///
/// Terms and exclusions are stored in normalized form (lower-case, single-spaced,
/// no punctuation) so they compare directly against normalized ingredient tokens.
#[derive(Debug)]
pub struct TermVocabulary {
    pub kind: VocabularyKind,
    pub terms: &'static [&'static str],
    pub exclusions: &'static [&'static str],
}

impl TermVocabulary {
    /// Longest term that matches `ingredient` as a whole-word phrase, unless an
    /// exclusion phrase also appears in it. Ties go to the earlier term.
    pub fn find(&self, ingredient: &str) -> Option<&'static str> {
        let words: Vec<&str> = ingredient.split(' ').collect();

        if self
            .exclusions
            .iter()
            .any(|exclusion| phrase_in(&words, exclusion))
        {
            return None;
        }

        let mut best: Option<&'static str> = None;
        for term in self.terms {
            if phrase_in(&words, term) && best.map_or(true, |current| term.len() > current.len())
            {
                best = Some(*term);
            }
        }
        best
    }

    pub fn matches(&self, ingredient: &str) -> bool {
        self.find(ingredient).is_some()
    }
}

/// Whole-word phrase containment where each token word may carry a plural ending.
pub(crate) fn phrase_in(words: &[&str], phrase: &str) -> bool {
    let phrase_words: Vec<&str> = phrase.split(' ').collect();
    if phrase_words.is_empty() || phrase_words.len() > words.len() {
        return false;
    }

    words.windows(phrase_words.len()).any(|window| {
        window
            .iter()
            .zip(&phrase_words)
            .all(|(word, expected)| word_matches(word, expected))
    })
}

fn word_matches(word: &str, expected: &str) -> bool {
    if word == expected {
        return true;
    }
    if let Some(stem) = word.strip_suffix("es").filter(|stem| *stem == expected) {
        return !stem.is_empty();
    }
    if word.strip_suffix('s') == Some(expected) {
        return true;
    }
    match (word.strip_suffix("ies"), expected.strip_suffix('y')) {
        (Some(word_stem), Some(expected_stem)) => !word_stem.is_empty() && word_stem == expected_stem,
        _ => false,
    }
}

/// Every vocabulary the detector consults, in [`VocabularyKind::ALL`] order.
pub fn standard_vocabularies() -> Vec<&'static TermVocabulary> {
    VocabularyKind::ALL
        .iter()
        .map(|kind| kind.vocabulary())
        .collect()
}

const PLANT_MILKS: &[&str] = &[
    "coconut milk",
    "almond milk",
    "oat milk",
    "soy milk",
    "rice milk",
    "cashew milk",
    "milk thistle",
    "cocoa butter",
    "cacao butter",
    "peanut butter",
    "nut butter",
    "almond butter",
    "cashew butter",
    "seed butter",
    "shea butter",
    "apple butter",
    "cream of tartar",
    "coconut cream",
];

static SUGARS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Sugars,
    terms: &[
        "sugar",
        "cane sugar",
        "brown sugar",
        "raw sugar",
        "powdered sugar",
        "invert sugar",
        "coconut sugar",
        "corn syrup",
        "high fructose corn syrup",
        "hfcs",
        "corn syrup solids",
        "dextrose",
        "glucose",
        "glucose syrup",
        "glucose fructose",
        "fructose",
        "maltose",
        "sucrose",
        "honey",
        "agave",
        "agave nectar",
        "molasses",
        "syrup",
        "rice syrup",
        "brown rice syrup",
        "maple syrup",
        "malt syrup",
        "fruit juice concentrate",
        "evaporated cane juice",
        "cane juice",
    ],
    exclusions: &["sugar alcohol"],
};

static NON_NUTRITIVE_SWEETENERS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::NonNutritiveSweeteners,
    terms: &[
        "aspartame",
        "sucralose",
        "acesulfame k",
        "acesulfame potassium",
        "ace k",
        "saccharin",
        "sodium saccharin",
        "neotame",
        "advantame",
        "cyclamate",
        "sodium cyclamate",
    ],
    exclusions: &[],
};

static PLANT_SWEETENERS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::PlantSweeteners,
    terms: &[
        "stevia",
        "stevia leaf extract",
        "steviol glycosides",
        "rebaudioside a",
        "reb a",
        "monk fruit",
        "monk fruit extract",
        "luo han guo",
    ],
    exclusions: &[],
};

static ARTIFICIAL_COLORS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::ArtificialColors,
    terms: &[
        "red 40",
        "red no 40",
        "red 3",
        "red no 3",
        "yellow 5",
        "yellow no 5",
        "yellow 6",
        "yellow no 6",
        "blue 1",
        "blue no 1",
        "blue 2",
        "blue no 2",
        "green 3",
        "green no 3",
        "fd c",
        "artificial color",
        "artificial colour",
        "color added",
        "colour added",
        "allura red",
        "tartrazine",
        "sunset yellow",
        "brilliant blue",
        "erythrosine",
        "titanium dioxide",
    ],
    exclusions: &[],
};

static STIMULANTS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Stimulants,
    terms: &[
        "caffeine",
        "guarana",
        "yerba mate",
        "green coffee extract",
        "green coffee bean extract",
        "energy blend",
        "kola nut",
        "green tea extract",
    ],
    exclusions: &["decaffeinated", "caffeine free"],
};

static OMEGA3_SOURCES: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Omega3Sources,
    terms: &[
        "fish oil",
        "algae oil",
        "algal oil",
        "dha",
        "epa",
        "flax",
        "flaxseed",
        "flax seed",
        "flaxseed oil",
        "chia",
        "chia seed",
        "omega 3",
    ],
    exclusions: &[],
};

static NUTS_SEEDS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::NutsSeeds,
    terms: &[
        "almond",
        "walnut",
        "peanut",
        "cashew",
        "pistachio",
        "pecan",
        "hazelnut",
        "macadamia",
        "brazil nut",
        "pine nut",
        "chia",
        "chia seed",
        "flax",
        "flaxseed",
        "pumpkin seed",
        "sunflower seed",
        "hemp seed",
        "sesame seed",
        "peanut butter",
        "almond butter",
    ],
    exclusions: &["oil", "milk", "extract", "flavor", "flavour"],
};

static WHOLE_GRAINS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::WholeGrains,
    terms: &[
        "oat",
        "whole oat",
        "rolled oat",
        "oat bran",
        "whole wheat",
        "whole grain",
        "brown rice",
        "quinoa",
        "barley",
        "bran",
        "millet",
        "buckwheat",
        "whole rye",
        "sorghum",
        "farro",
    ],
    exclusions: &["syrup", "malt", "extract", "starch", "milk", "fiber"],
};

static PROTEIN_CUES: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::ProteinCues,
    terms: &[
        "egg",
        "egg white",
        "yogurt",
        "greek yogurt",
        "milk protein",
        "whey",
        "whey protein",
        "soy protein",
        "pea protein",
        "protein isolate",
        "casein",
        "bean",
        "black bean",
        "lentil",
        "chickpea",
        "legume",
    ],
    exclusions: &["locust bean", "vanilla bean", "coffee bean", "cocoa bean"],
};

static CREATINE: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Creatine,
    terms: &["creatine", "creatine monohydrate"],
    exclusions: &[],
};

static FLAVORS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Flavors,
    terms: &[
        "flavor",
        "flavour",
        "flavoring",
        "flavouring",
        "natural flavor",
        "natural flavour",
        "artificial flavor",
        "artificial flavour",
        "natural artificial flavor",
        "natural artificial flavour",
        "smoke flavor",
    ],
    exclusions: &[],
};

static EMULSIFIERS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Emulsifiers,
    terms: &[
        "polysorbate",
        "polysorbate 80",
        "mono diglycerides",
        "mono di glycerides",
        "monoglycerides",
        "diglycerides",
        "lecithin",
        "soy lecithin",
        "sunflower lecithin",
        "carrageenan",
        "xanthan gum",
        "guar gum",
        "cellulose gum",
        "gellan gum",
        "locust bean gum",
        "gum arabic",
        "acacia gum",
        "datem",
        "cellulose",
        "modified cellulose",
        "carboxymethylcellulose",
        "methylcellulose",
        "sodium stearoyl lactylate",
        "sorbitan monostearate",
    ],
    exclusions: &[],
};

static PRESERVATIVES: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Preservatives,
    terms: &[
        "sodium benzoate",
        "potassium benzoate",
        "potassium sorbate",
        "calcium sorbate",
        "sorbic acid",
        "benzoic acid",
        "calcium propionate",
        "sodium propionate",
        "bha",
        "bht",
        "tbhq",
        "sodium nitrite",
        "sodium nitrate",
        "sulfur dioxide",
        "sodium metabisulfite",
        "potassium metabisulfite",
        "sodium bisulfite",
        "calcium disodium edta",
        "disodium edta",
        "edta",
        "natamycin",
        "nisin",
    ],
    exclusions: &[],
};

static ISOLATES: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::Isolates,
    terms: &[
        "maltodextrin",
        "modified starch",
        "modified food starch",
        "modified corn starch",
        "protein isolate",
        "whey protein isolate",
        "soy protein isolate",
        "pea protein isolate",
        "protein concentrate",
        "milk protein concentrate",
        "isolated fiber",
        "inulin",
        "chicory root fiber",
        "chicory fiber",
        "soluble corn fiber",
        "resistant dextrin",
        "polydextrose",
        "hydrolyzed protein",
        "hydrolyzed vegetable protein",
    ],
    exclusions: &[],
};

static WHOLE_FOODS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::WholeFoods,
    terms: &[
        "oat",
        "rolled oat",
        "milk",
        "whole milk",
        "peanut",
        "almond",
        "walnut",
        "cashew",
        "pecan",
        "bean",
        "lentil",
        "chickpea",
        "pea",
        "egg",
        "yogurt",
        "cheese",
        "cream",
        "butter",
        "apple",
        "banana",
        "date",
        "raisin",
        "strawberry",
        "blueberry",
        "raspberry",
        "cherry",
        "mango",
        "orange",
        "lemon",
        "tomato",
        "potato",
        "sweet potato",
        "carrot",
        "spinach",
        "kale",
        "onion",
        "garlic",
        "pumpkin",
        "coconut",
        "cocoa",
        "cacao",
        "rice",
        "brown rice",
        "quinoa",
        "corn",
        "avocado",
        "olive",
        "chicken",
        "beef",
        "salmon",
        "tuna",
        "fruit",
        "vegetable",
    ],
    exclusions: &[
        "syrup",
        "starch",
        "concentrate",
        "isolate",
        "extract",
        "oil",
        "solids",
        "flour",
        "protein",
        "juice",
        "flavor",
        "flavour",
        "sugar",
        "tartar",
        "gum",
        "powder",
    ],
};

static REFINED_FLOURS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::RefinedFlours,
    terms: &[
        "enriched flour",
        "enriched wheat flour",
        "wheat flour",
        "white flour",
        "bleached flour",
        "unbleached flour",
        "all purpose flour",
        "refined flour",
        "cake flour",
        "rice flour",
        "corn flour",
        "semolina",
    ],
    exclusions: &["whole"],
};

static REFINED_OILS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::RefinedOils,
    terms: &[
        "canola oil",
        "soybean oil",
        "vegetable oil",
        "palm oil",
        "palm kernel oil",
        "cottonseed oil",
        "sunflower oil",
        "safflower oil",
        "corn oil",
        "rapeseed oil",
        "hydrogenated",
        "partially hydrogenated",
        "shortening",
        "interesterified",
    ],
    exclusions: &[],
};

static CULINARY_OILS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::CulinaryOils,
    terms: &[
        "olive oil",
        "extra virgin olive oil",
        "avocado oil",
        "coconut oil",
        "walnut oil",
        "flaxseed oil",
        "peanut butter",
        "almond butter",
        "cashew butter",
        "nut butter",
        "sunflower seed butter",
    ],
    exclusions: &["hydrogenated"],
};

static UMBRELLA_TERMS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::UmbrellaTerms,
    terms: &[
        "spice",
        "seasoning",
        "natural color",
        "natural colour",
        "enzyme",
        "culture",
        "fruit juice concentrate",
        "vegetable juice",
        "gum base",
        "extractive",
        "natural smoke",
    ],
    exclusions: &[],
};

static CONTEXT_DEPENDENT: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::ContextDependent,
    terms: &[
        "lecithin",
        "soy lecithin",
        "sunflower lecithin",
        "inulin",
        "chicory root fiber",
        "chicory fiber",
        "enriched flour",
    ],
    exclusions: &[],
};

static NEUTRAL_BASICS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::NeutralBasics,
    terms: &[
        "water",
        "filtered water",
        "carbonated water",
        "salt",
        "sea salt",
        "kosher salt",
        "citric acid",
        "lactic acid",
        "malic acid",
        "acetic acid",
        "ascorbic acid",
        "vinegar",
        "baking soda",
        "sodium bicarbonate",
        "baking powder",
        "yeast",
        "pepper",
        "black pepper",
        "cinnamon",
        "vanilla",
        "vanilla extract",
        "garlic powder",
        "onion powder",
        "paprika",
        "turmeric",
        "cumin",
        "oregano",
        "basil",
        "thyme",
        "ginger",
        "nutmeg",
        "parsley",
        "rosemary",
    ],
    exclusions: &["flavor", "flavour"],
};

static PEANUT: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::PeanutAllergen,
    terms: &[
        "peanut",
        "groundnut",
        "arachis oil",
        "peanut butter",
        "peanut oil",
        "peanut flour",
    ],
    exclusions: &[],
};

static TREE_NUT: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::TreeNutAllergen,
    terms: &[
        "almond",
        "walnut",
        "cashew",
        "pecan",
        "pistachio",
        "hazelnut",
        "filbert",
        "macadamia",
        "brazil nut",
        "pine nut",
        "praline",
        "marzipan",
        "tree nut",
        "nut butter",
    ],
    exclusions: &[],
};

static DAIRY: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::DairyAllergen,
    terms: &[
        "milk",
        "whole milk",
        "skim milk",
        "nonfat milk",
        "milk powder",
        "milk solids",
        "milkfat",
        "milk fat",
        "milk protein",
        "whey",
        "casein",
        "caseinate",
        "sodium caseinate",
        "lactose",
        "lactalbumin",
        "butter",
        "butterfat",
        "buttermilk",
        "cream",
        "cheese",
        "yogurt",
        "ghee",
        "curd",
    ],
    exclusions: PLANT_MILKS,
};

static GLUTEN: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::GlutenAllergen,
    terms: &[
        "wheat",
        "whole wheat",
        "wheat flour",
        "enriched flour",
        "wheat gluten",
        "gluten",
        "barley",
        "rye",
        "malt",
        "malted",
        "malt extract",
        "malt syrup",
        "spelt",
        "semolina",
        "durum",
        "triticale",
        "farro",
        "bulgur",
        "couscous",
        "seitan",
    ],
    exclusions: &["gluten free"],
};

static EGG: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::EggAllergen,
    terms: &[
        "egg",
        "egg white",
        "egg yolk",
        "albumen",
        "albumin",
        "ovalbumin",
        "lysozyme",
        "mayonnaise",
        "meringue",
    ],
    exclusions: &[],
};

static SHELLFISH: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::ShellfishAllergen,
    terms: &[
        "shellfish",
        "shrimp",
        "prawn",
        "crab",
        "lobster",
        "crayfish",
        "crawfish",
        "clam",
        "oyster",
        "mussel",
        "scallop",
        "krill",
    ],
    exclusions: &["oyster mushroom"],
};

static SESAME: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::SesameAllergen,
    terms: &["sesame", "sesame seed", "sesame oil", "tahini", "benne"],
    exclusions: &[],
};

static SOY: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::SoyAllergen,
    terms: &[
        "soy",
        "soya",
        "soybean",
        "soybean oil",
        "soy oil",
        "soy lecithin",
        "soya lecithin",
        "soy protein",
        "soy flour",
        "soy sauce",
        "tofu",
        "edamame",
        "miso",
        "tamari",
        "tempeh",
    ],
    exclusions: &[],
};

static REFINED_SOY: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::RefinedSoy,
    terms: &["soybean oil", "soy oil", "soy lecithin", "soya lecithin"],
    exclusions: &[],
};

static VEGAN_CONFLICTS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::VeganConflicts,
    terms: &[
        "milk",
        "whole milk",
        "skim milk",
        "nonfat milk",
        "milk powder",
        "milk solids",
        "milkfat",
        "milk fat",
        "milk protein",
        "whey",
        "casein",
        "caseinate",
        "lactose",
        "butter",
        "buttermilk",
        "cream",
        "cheese",
        "yogurt",
        "ghee",
        "egg",
        "egg white",
        "egg yolk",
        "albumen",
        "honey",
        "beeswax",
        "gelatin",
        "gelatine",
        "collagen",
        "carmine",
        "cochineal",
        "shellac",
        "lanolin",
        "isinglass",
        "lard",
        "tallow",
        "beef",
        "pork",
        "chicken",
        "turkey",
        "bacon",
        "ham",
        "meat",
        "fish",
        "fish oil",
        "anchovy",
    ],
    exclusions: PLANT_MILKS,
};

static VEGETARIAN_CONFLICTS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::VegetarianConflicts,
    terms: &[
        "gelatin",
        "gelatine",
        "collagen",
        "carmine",
        "cochineal",
        "isinglass",
        "lard",
        "tallow",
        "suet",
        "beef",
        "pork",
        "chicken",
        "turkey",
        "bacon",
        "ham",
        "meat",
        "fish",
        "fish oil",
        "anchovy",
    ],
    exclusions: &[],
};

static HALAL_CONFLICTS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::HalalConflicts,
    terms: &[
        "pork",
        "pork gelatin",
        "porcine",
        "porcine gelatin",
        "pork fat",
        "lard",
        "bacon",
        "ham",
        "pepperoni",
        "prosciutto",
        "wine",
        "beer",
        "rum",
        "bourbon",
        "whiskey",
    ],
    exclusions: ALCOHOL_NAMED_TERMS,
};

static KOSHER_CONFLICTS: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::KosherConflicts,
    terms: &[
        "pork",
        "pork gelatin",
        "porcine",
        "porcine gelatin",
        "pork fat",
        "lard",
        "bacon",
        "ham",
        "pepperoni",
        "prosciutto",
        "shellfish",
        "shrimp",
        "crab",
        "lobster",
        "clam",
        "oyster",
    ],
    exclusions: &["oyster mushroom"],
};

static UNSPECIFIED_GELATIN: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::UnspecifiedGelatin,
    terms: &["gelatin", "gelatine"],
    exclusions: &["pork", "porcine", "fish", "beef", "bovine", "halal", "kosher"],
};

/// Vinegars, flavorings and extracts that carry a drink's name without being the drink.
const ALCOHOL_NAMED_TERMS: &[&str] = &[
    "wine vinegar",
    "cooking wine",
    "wine extract",
    "wine flavor",
    "root beer",
    "beer flavor",
    "rum flavor",
    "rum extract",
    "bourbon vanilla",
    "bourbon flavor",
    "whiskey flavor",
];

static ALCOHOL_DERIVED: TermVocabulary = TermVocabulary {
    kind: VocabularyKind::AlcoholDerived,
    terms: ALCOHOL_NAMED_TERMS,
    exclusions: &[],
};
