use serde::ser::{Serialize, SerializeMap, Serializer};

use super::lenses::hard_rules::HardRuleOutcome;
use super::profile::{AvoidPreference, HealthConsideration, UserProfile};
use super::signals::SignalReport;
use super::vocabulary::{phrase_in, VocabularyKind};
use super::Lens;

const CHEMICAL_SUFFIXES: &[&str] = &[
    "phosphate",
    "carbonate",
    "chloride",
    "ate",
    "ite",
    "ide",
    "ose",
    "ol",
    "ium",
];

/// Everyday words that happen to end like a chemical name.
const EVERYDAY_FOODS: &[&str] = &[
    "chocolate",
    "date",
    "pomegranate",
    "white",
    "rose",
    "goose",
    "water",
    "salt",
    "sugar",
    "oat",
    "rice",
    "milk",
    "egg",
    "peanut",
    "flour",
    "butter",
    "olive",
    "cheese",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Color,
    Sweetener,
    Preservative,
    Emulsifier,
    Flavor,
    Isolate,
    Chemical,
}

const CATEGORY_KINDS: &[(VocabularyKind, Category)] = &[
    (VocabularyKind::ArtificialColors, Category::Color),
    (VocabularyKind::NonNutritiveSweeteners, Category::Sweetener),
    (VocabularyKind::PlantSweeteners, Category::Sweetener),
    (VocabularyKind::Preservatives, Category::Preservative),
    (VocabularyKind::Emulsifiers, Category::Emulsifier),
    (VocabularyKind::Flavors, Category::Flavor),
    (VocabularyKind::Isolates, Category::Isolate),
];

struct GlossaryEntry {
    term: &'static str,
    plain_english: &'static str,
    why_added: &'static str,
    common_in: &'static [&'static str],
}

static ENTRIES: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "red 40",
        plain_english: "A synthetic red dye made from petroleum-derived ingredients.",
        why_added: "Gives foods and drinks a bright, consistent red color.",
        common_in: &["candy", "sports drinks", "cereals"],
    },
    GlossaryEntry {
        term: "yellow 5",
        plain_english: "A synthetic lemon-yellow dye, also called tartrazine.",
        why_added: "Adds a yellow color that stays stable on the shelf.",
        common_in: &["candy", "soft drinks", "snack chips"],
    },
    GlossaryEntry {
        term: "yellow 6",
        plain_english: "A synthetic orange-yellow dye, also called sunset yellow.",
        why_added: "Adds an orange tone to processed foods.",
        common_in: &["candy", "baked goods", "cheese-flavored snacks"],
    },
    GlossaryEntry {
        term: "blue 1",
        plain_english: "A synthetic blue dye, also called brilliant blue.",
        why_added: "Adds blue or, mixed with yellow, green colors.",
        common_in: &["candy", "frosting", "drinks"],
    },
    GlossaryEntry {
        term: "titanium dioxide",
        plain_english: "A white mineral pigment.",
        why_added: "Makes coatings and icings bright white and opaque.",
        common_in: &["candy coatings", "frosting", "chewing gum"],
    },
    GlossaryEntry {
        term: "aspartame",
        plain_english: "A low-calorie sweetener made from two amino acids.",
        why_added: "Gives sweetness without the calories of sugar.",
        common_in: &["diet sodas", "sugar-free gum", "yogurts"],
    },
    GlossaryEntry {
        term: "sucralose",
        plain_english: "A no-calorie sweetener made by chemically modifying sugar.",
        why_added: "Adds intense sweetness in very small amounts.",
        common_in: &["diet drinks", "protein bars", "sugar-free desserts"],
    },
    GlossaryEntry {
        term: "acesulfame",
        plain_english: "A no-calorie synthetic sweetener, often called Ace-K.",
        why_added: "Boosts sweetness, often blended with other sweeteners.",
        common_in: &["diet drinks", "protein powders", "gum"],
    },
    GlossaryEntry {
        term: "saccharin",
        plain_english: "One of the oldest synthetic no-calorie sweeteners.",
        why_added: "Provides sweetness without sugar.",
        common_in: &["tabletop sweeteners", "diet drinks"],
    },
    GlossaryEntry {
        term: "stevia",
        plain_english: "A sweetener extracted from the leaves of the stevia plant.",
        why_added: "Adds sweetness with little or no sugar.",
        common_in: &["flavored waters", "protein drinks", "low-sugar snacks"],
    },
    GlossaryEntry {
        term: "steviol glycosides",
        plain_english: "The purified sweet compounds extracted from stevia leaves.",
        why_added: "Adds sweetness with little or no sugar.",
        common_in: &["flavored waters", "protein drinks", "low-sugar snacks"],
    },
    GlossaryEntry {
        term: "monk fruit",
        plain_english: "A sweetener extracted from the luo han guo fruit.",
        why_added: "Adds sweetness with little or no sugar.",
        common_in: &["low-sugar snacks", "tabletop sweeteners"],
    },
    GlossaryEntry {
        term: "sodium benzoate",
        plain_english: "The sodium salt of benzoic acid.",
        why_added: "Slows the growth of mold and yeast in acidic foods.",
        common_in: &["soft drinks", "pickles", "salad dressings"],
    },
    GlossaryEntry {
        term: "potassium sorbate",
        plain_english: "The potassium salt of sorbic acid.",
        why_added: "Helps prevent mold and yeast growth.",
        common_in: &["cheese", "baked goods", "dried fruit"],
    },
    GlossaryEntry {
        term: "calcium propionate",
        plain_english: "A salt of propionic acid.",
        why_added: "Keeps bread and baked goods from molding quickly.",
        common_in: &["packaged bread", "tortillas"],
    },
    GlossaryEntry {
        term: "tbhq",
        plain_english: "Tertiary butylhydroquinone, a synthetic antioxidant.",
        why_added: "Slows fats and oils from going rancid.",
        common_in: &["crackers", "frozen foods", "frying oils"],
    },
    GlossaryEntry {
        term: "bht",
        plain_english: "Butylated hydroxytoluene, a synthetic antioxidant.",
        why_added: "Keeps fats from going rancid.",
        common_in: &["cereals", "snack foods"],
    },
    GlossaryEntry {
        term: "sodium nitrite",
        plain_english: "A curing salt.",
        why_added: "Preserves cured meats and keeps them pink.",
        common_in: &["bacon", "hot dogs", "deli meats"],
    },
    GlossaryEntry {
        term: "polysorbate",
        plain_english: "A synthetic emulsifier made from sorbitol and fatty acids.",
        why_added: "Keeps oil and water mixed evenly.",
        common_in: &["ice cream", "sauces", "baked goods"],
    },
    GlossaryEntry {
        term: "mono diglycerides",
        plain_english: "Fats made from glycerol and fatty acids.",
        why_added: "Help oil and water blend and keep textures soft.",
        common_in: &["bread", "peanut butter", "ice cream"],
    },
    GlossaryEntry {
        term: "lecithin",
        plain_english: "A fatty substance usually taken from soybeans or sunflowers.",
        why_added: "Keeps ingredients blended and smooth.",
        common_in: &["chocolate", "baked goods", "spreads"],
    },
    GlossaryEntry {
        term: "carrageenan",
        plain_english: "A thickener extracted from red seaweed.",
        why_added: "Thickens and stabilizes dairy and plant-based drinks.",
        common_in: &["plant milks", "ice cream", "deli meats"],
    },
    GlossaryEntry {
        term: "xanthan gum",
        plain_english: "A thickener made by fermenting sugar with bacteria.",
        why_added: "Thickens sauces and keeps mixtures from separating.",
        common_in: &["salad dressings", "gluten-free baked goods", "sauces"],
    },
    GlossaryEntry {
        term: "guar gum",
        plain_english: "A thickener ground from guar beans.",
        why_added: "Adds thickness and body.",
        common_in: &["ice cream", "sauces", "plant milks"],
    },
    GlossaryEntry {
        term: "cellulose gum",
        plain_english: "A thickener made from plant cellulose.",
        why_added: "Thickens and keeps texture consistent.",
        common_in: &["ice cream", "baked goods", "sauces"],
    },
    GlossaryEntry {
        term: "maltodextrin",
        plain_english: "A refined starch powder, usually from corn.",
        why_added: "Adds bulk and texture or carries flavors.",
        common_in: &["snack seasonings", "sports drinks", "powdered mixes"],
    },
    GlossaryEntry {
        term: "modified starch",
        plain_english: "Starch that has been treated to change how it behaves.",
        why_added: "Thickens and stays stable through heating or freezing.",
        common_in: &["soups", "sauces", "frozen meals"],
    },
    GlossaryEntry {
        term: "modified food starch",
        plain_english: "Starch that has been treated to change how it behaves.",
        why_added: "Thickens and stays stable through heating or freezing.",
        common_in: &["soups", "sauces", "frozen meals"],
    },
    GlossaryEntry {
        term: "inulin",
        plain_english: "A fiber usually extracted from chicory root.",
        why_added: "Adds fiber and a little sweetness or creaminess.",
        common_in: &["protein bars", "yogurts", "high-fiber snacks"],
    },
    GlossaryEntry {
        term: "protein isolate",
        plain_english: "Protein separated from its original food and concentrated.",
        why_added: "Raises the protein content of a product.",
        common_in: &["protein bars", "shakes", "meat alternatives"],
    },
    GlossaryEntry {
        term: "natural flavor",
        plain_english: "Flavor compounds taken from plant or animal sources and blended.",
        why_added: "Creates or strengthens a specific taste.",
        common_in: &["snacks", "drinks", "yogurts"],
    },
    GlossaryEntry {
        term: "artificial flavor",
        plain_english: "Flavor compounds made synthetically.",
        why_added: "Recreates a taste cheaply and consistently.",
        common_in: &["candy", "snacks", "drinks"],
    },
];

fn fallback(category: Category) -> (&'static str, &'static str, &'static [&'static str]) {
    match category {
        Category::Color => (
            "A color additive.",
            "Makes the product look brighter or more uniform.",
            &["candy", "drinks", "snacks"],
        ),
        Category::Sweetener => (
            "A sweetener used instead of or alongside sugar.",
            "Adds sweetness with fewer calories.",
            &["diet drinks", "sugar-free products"],
        ),
        Category::Preservative => (
            "A preservative.",
            "Extends shelf life by slowing spoilage.",
            &["packaged foods", "drinks"],
        ),
        Category::Emulsifier => (
            "An emulsifier, gum or thickener.",
            "Keeps textures smooth and ingredients from separating.",
            &["sauces", "dressings", "ice cream"],
        ),
        Category::Flavor => (
            "A flavoring blend whose components are not listed.",
            "Creates or strengthens a specific taste.",
            &["snacks", "drinks"],
        ),
        Category::Isolate => (
            "A refined ingredient separated from its original food.",
            "Adds bulk, texture, fiber or protein in concentrated form.",
            &["protein bars", "powdered mixes"],
        ),
        Category::Chemical => (
            "An additive or nutrient listed by its chemical name.",
            "Chemical-style names usually mark additives, fortificants or processing aids.",
            &["packaged foods", "fortified foods"],
        ),
    }
}

/// Lens-specific relevance carried by each lab label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRelevance {
    Focus(String),
    RealFood(Vec<String>),
    Personal(String),
}

/// An unfamiliar ingredient paired with a plain-language explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabLabel {
    pub ingredient: String,
    pub plain_english: String,
    pub why_added: String,
    pub relevance: LabelRelevance,
}

impl Serialize for LabLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("ingredient", &self.ingredient)?;
        map.serialize_entry("plain_english", &self.plain_english)?;
        map.serialize_entry("why_added", &self.why_added)?;
        match &self.relevance {
            LabelRelevance::Focus(note) => map.serialize_entry("focus_relevance", note)?,
            LabelRelevance::RealFood(uses) => map.serialize_entry("common_in", uses)?,
            LabelRelevance::Personal(note) => map.serialize_entry("personal_relevance", note)?,
        }
        map.end()
    }
}

pub(crate) fn lab_labels(
    lens: Lens,
    signals: &SignalReport,
    profile: &UserProfile,
    hard: &HardRuleOutcome,
) -> Vec<LabLabel> {
    let mut labels: Vec<LabLabel> = Vec::new();

    for ingredient in signals.ingredients().iter() {
        if labels.iter().any(|label| label.ingredient == ingredient.name) {
            continue;
        }
        let Some(category) = categorize(signals, ingredient.position, &ingredient.name) else {
            continue;
        };

        let words: Vec<&str> = ingredient.name.split(' ').collect();
        let entry = ENTRIES
            .iter()
            .filter(|entry| phrase_in(&words, entry.term))
            .max_by_key(|entry| entry.term.len());
        let (plain_english, why_added, common_in) = match entry {
            Some(entry) => (entry.plain_english, entry.why_added, entry.common_in),
            None => fallback(category),
        };

        let relevance = match lens {
            Lens::Focus => LabelRelevance::Focus(focus_relevance(category).to_string()),
            Lens::RealFood => {
                LabelRelevance::RealFood(common_in.iter().map(|use_| use_.to_string()).collect())
            }
            Lens::Personal => LabelRelevance::Personal(personal_relevance(
                category,
                profile,
                hard,
                ingredient.position,
            )),
        };

        labels.push(LabLabel {
            ingredient: ingredient.name.clone(),
            plain_english: plain_english.to_string(),
            why_added: why_added.to_string(),
            relevance,
        });
    }

    labels
}

fn categorize(signals: &SignalReport, position: usize, name: &str) -> Option<Category> {
    if let Some((_, category)) = CATEGORY_KINDS
        .iter()
        .find(|(kind, _)| signals.is_member(position, *kind))
    {
        return Some(*category);
    }

    if signals.is_member(position, VocabularyKind::WholeFoods) {
        return None;
    }

    let words: Vec<&str> = name.split(' ').collect();
    if EVERYDAY_FOODS.iter().any(|food| phrase_in(&words, food)) {
        return None;
    }

    let last = words.last()?;
    let chemical = last.chars().count() >= 5
        && CHEMICAL_SUFFIXES
            .iter()
            .any(|suffix| last.ends_with(suffix));
    chemical.then_some(Category::Chemical)
}

fn focus_relevance(category: Category) -> &'static str {
    match category {
        Category::Color => "Some people choose to limit artificial colors; evidence on focus effects varies.",
        Category::Sweetener => {
            "Keeps sweetness high without sugar; how it relates to energy and focus varies between people."
        }
        Category::Preservative => "Not a direct focus factor; mainly a sign of a long shelf life.",
        Category::Emulsifier => "Not a direct focus factor; a texture aid common in engineered products.",
        Category::Flavor => {
            "Undisclosed flavor blends may be part of a highly engineered taste profile; effects on focus are not established."
        }
        Category::Isolate => {
            "Refined ingredients like this may digest faster than their whole-food sources; evidence varies."
        }
        Category::Chemical => "Its relevance to steady focus is unclear from the label alone.",
    }
}

fn personal_relevance(
    category: Category,
    profile: &UserProfile,
    hard: &HardRuleOutcome,
    position: usize,
) -> String {
    let note = if hard.conflicts.contains(&position) {
        "May conflict with the allergens or dietary rules in your profile."
    } else if hard.uncertain.contains(&position) {
        "May matter for your profile; the label does not say enough to be sure."
    } else if category == Category::Color && profile.avoids(AvoidPreference::AvoidArtificialColors) {
        "You chose to avoid artificial colors, and this is one of them."
    } else if category == Category::Sweetener
        && profile.avoids(AvoidPreference::AvoidArtificialSweeteners)
    {
        "You chose to avoid artificial sweeteners; this may be one of them."
    } else if matches!(
        category,
        Category::Flavor | Category::Emulsifier | Category::Preservative | Category::Isolate
    ) && profile.avoids(AvoidPreference::AvoidUltraProcessed)
    {
        "You prefer less processed foods; this is a common processing marker."
    } else if matches!(category, Category::Sweetener | Category::Isolate)
        && profile.considers(HealthConsideration::BloodSugarAware)
    {
        "May be worth a look if you keep an eye on blood sugar; nutrition facts would say more."
    } else {
        "No specific link to your profile; some people prefer to limit additives like this."
    };
    note.to_string()
}
