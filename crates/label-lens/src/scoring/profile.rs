use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use super::vocabulary::VocabularyKind;

fn canonical(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    RealFood,
    SteadyFocus,
    WeightLoss,
    WeightGain,
    BuildMuscle,
    #[default]
    General,
}

impl Goal {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical(raw).as_str() {
            "real_food" => Some(Self::RealFood),
            "steady_focus" | "focus" => Some(Self::SteadyFocus),
            "weight_loss" | "loss" => Some(Self::WeightLoss),
            "weight_gain" | "gain" => Some(Self::WeightGain),
            "build_muscle" | "muscle" => Some(Self::BuildMuscle),
            "general" | "" => Some(Self::General),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRule {
    Vegan,
    Vegetarian,
    Halal,
    Kosher,
}

impl DietaryRule {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical(raw).as_str() {
            "vegan" => Some(Self::Vegan),
            "vegetarian" => Some(Self::Vegetarian),
            "halal" => Some(Self::Halal),
            "kosher" => Some(Self::Kosher),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Halal => "halal",
            Self::Kosher => "kosher",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvoidPreference {
    AvoidArtificialColors,
    AvoidArtificialSweeteners,
    CaffeineSensitive,
    AvoidUltraProcessed,
}

impl AvoidPreference {
    const ALL: [AvoidPreference; 4] = [
        Self::AvoidArtificialColors,
        Self::AvoidArtificialSweeteners,
        Self::CaffeineSensitive,
        Self::AvoidUltraProcessed,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match canonical(raw).as_str() {
            "avoid_artificial_colors" | "artificial_colors" => Some(Self::AvoidArtificialColors),
            "avoid_artificial_sweeteners" | "artificial_sweeteners" => {
                Some(Self::AvoidArtificialSweeteners)
            }
            "caffeine_sensitive" | "caffeine" => Some(Self::CaffeineSensitive),
            "avoid_ultra_processed" | "ultra_processed" => Some(Self::AvoidUltraProcessed),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::AvoidArtificialColors => "avoid_artificial_colors",
            Self::AvoidArtificialSweeteners => "avoid_artificial_sweeteners",
            Self::CaffeineSensitive => "caffeine_sensitive",
            Self::AvoidUltraProcessed => "avoid_ultra_processed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Peanut,
    TreeNut,
    Dairy,
    Gluten,
    Egg,
    Shellfish,
    Sesame,
    Soy,
}

impl Allergen {
    const ALL: [Allergen; 8] = [
        Self::Peanut,
        Self::TreeNut,
        Self::Dairy,
        Self::Gluten,
        Self::Egg,
        Self::Shellfish,
        Self::Sesame,
        Self::Soy,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match canonical(raw).as_str() {
            "peanut" | "peanuts" => Some(Self::Peanut),
            "tree_nut" | "tree_nuts" | "nuts" => Some(Self::TreeNut),
            "dairy" | "milk" => Some(Self::Dairy),
            "gluten" | "wheat" => Some(Self::Gluten),
            "egg" | "eggs" => Some(Self::Egg),
            "shellfish" => Some(Self::Shellfish),
            "sesame" => Some(Self::Sesame),
            "soy" => Some(Self::Soy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        self.vocabulary().label()
    }

    pub fn vocabulary(self) -> VocabularyKind {
        match self {
            Self::Peanut => VocabularyKind::PeanutAllergen,
            Self::TreeNut => VocabularyKind::TreeNutAllergen,
            Self::Dairy => VocabularyKind::DairyAllergen,
            Self::Gluten => VocabularyKind::GlutenAllergen,
            Self::Egg => VocabularyKind::EggAllergen,
            Self::Shellfish => VocabularyKind::ShellfishAllergen,
            Self::Sesame => VocabularyKind::SesameAllergen,
            Self::Soy => VocabularyKind::SoyAllergen,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Peanut => "peanut",
            Self::TreeNut => "tree_nut",
            Self::Dairy => "dairy",
            Self::Gluten => "gluten",
            Self::Egg => "egg",
            Self::Shellfish => "shellfish",
            Self::Sesame => "sesame",
            Self::Soy => "soy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthConsideration {
    BloodSugarAware,
}

impl HealthConsideration {
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical(raw).as_str() {
            "blood_sugar_aware" | "blood_sugar" => Some(Self::BloodSugarAware),
            _ => None,
        }
    }
}

/// Dietary profile for the Personal Fit lens. Missing fields default to empty / general.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub goal: Goal,
    pub dietary_rules: BTreeSet<DietaryRule>,
    pub avoid_list: BTreeSet<AvoidPreference>,
    pub allergens: BTreeSet<Allergen>,
    pub health_considerations: BTreeSet<HealthConsideration>,
}

impl UserProfile {
    /// Parse a loosely-shaped JSON profile.
    ///
    /// Accepts the canonical field names as well as the mobile client's flat
    /// shape (`diet`, boolean allergen / avoid flags, free-text `flags`).
    /// Nothing here fails: every value that cannot be used becomes a note.
    pub fn from_json(value: &Value) -> (Self, Vec<String>) {
        let mut profile = Self::default();
        let mut notes = Vec::new();

        let fields = match value {
            Value::Null => return (profile, notes),
            Value::Object(fields) => fields,
            _ => {
                notes.push("User profile must be a JSON object; default profile used.".to_string());
                return (profile, notes);
            }
        };

        let mut keys: Vec<&String> = fields.keys().collect();
        keys.sort();

        for key in keys {
            let field = &fields[key.as_str()];
            match key.as_str() {
                "goal" => match field.as_str().map(|raw| (raw, Goal::parse(raw))) {
                    Some((_, Some(goal))) => profile.goal = goal,
                    Some((raw, None)) => notes.push(format!(
                        "Ignored unrecognized goal '{raw}'; scored with the general goal."
                    )),
                    None if field.is_null() => {}
                    None => notes.push("Ignored non-text goal value.".to_string()),
                },
                "dietary_rules" | "diet" => {
                    collect_values(key, field, DietaryRule::parse, &mut profile.dietary_rules, &mut notes)
                }
                "avoid_list" => {
                    collect_values(key, field, AvoidPreference::parse, &mut profile.avoid_list, &mut notes)
                }
                "allergens" => {
                    collect_values(key, field, Allergen::parse, &mut profile.allergens, &mut notes)
                }
                "health_considerations" => collect_values(
                    key,
                    field,
                    HealthConsideration::parse,
                    &mut profile.health_considerations,
                    &mut notes,
                ),
                "blood_sugar_aware" => {
                    if flag(key, field, &mut notes) {
                        profile
                            .health_considerations
                            .insert(HealthConsideration::BloodSugarAware);
                    }
                }
                "flags" => {
                    let custom: Vec<&str> = field
                        .as_array()
                        .map(|items| items.iter().filter_map(Value::as_str).collect())
                        .unwrap_or_default();
                    if !custom.is_empty() {
                        notes.push(format!(
                            "Custom profile flags are not scored: {}.",
                            custom.join(", ")
                        ));
                    }
                }
                other => {
                    if let Some(allergen) = Allergen::ALL.into_iter().find(|a| a.key() == other) {
                        if flag(key, field, &mut notes) {
                            profile.allergens.insert(allergen);
                        }
                    } else if let Some(avoid) =
                        AvoidPreference::ALL.into_iter().find(|a| a.key() == other)
                    {
                        if flag(key, field, &mut notes) {
                            profile.avoid_list.insert(avoid);
                        }
                    } else {
                        notes.push(format!("Ignored unrecognized profile field '{other}'."));
                    }
                }
            }
        }

        (profile, notes)
    }

    pub fn has_rule(&self, rule: DietaryRule) -> bool {
        self.dietary_rules.contains(&rule)
    }

    pub fn avoids(&self, preference: AvoidPreference) -> bool {
        self.avoid_list.contains(&preference)
    }

    pub fn considers(&self, consideration: HealthConsideration) -> bool {
        self.health_considerations.contains(&consideration)
    }
}

fn collect_values<T: Ord>(
    key: &str,
    field: &Value,
    parse: fn(&str) -> Option<T>,
    into: &mut BTreeSet<T>,
    notes: &mut Vec<String>,
) {
    let items: Vec<&Value> = match field {
        Value::Null => return,
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    for item in items {
        match item.as_str() {
            Some(raw) if raw.trim().is_empty() => {}
            Some(raw) => match parse(raw) {
                Some(value) => {
                    into.insert(value);
                }
                None => notes.push(format!("Ignored unrecognized {key} value '{raw}'.")),
            },
            None => notes.push(format!("Ignored non-text {key} value {item}.")),
        }
    }
}

fn flag(key: &str, field: &Value, notes: &mut Vec<String>) -> bool {
    match field {
        Value::Bool(value) => *value,
        Value::Null => false,
        other => {
            notes.push(format!("Ignored non-boolean {key} flag {other}."));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_canonical_profile() {
        let (profile, notes) = UserProfile::from_json(&json!({
            "goal": "build_muscle",
            "dietary_rules": ["halal"],
            "avoid_list": ["caffeine_sensitive"],
            "allergens": ["dairy", "tree_nut"],
            "health_considerations": ["blood_sugar_aware"]
        }));

        assert!(notes.is_empty(), "{notes:?}");
        assert_eq!(profile.goal, Goal::BuildMuscle);
        assert!(profile.has_rule(DietaryRule::Halal));
        assert!(profile.avoids(AvoidPreference::CaffeineSensitive));
        assert!(profile.allergens.contains(&Allergen::Dairy));
        assert!(profile.allergens.contains(&Allergen::TreeNut));
        assert!(profile.considers(HealthConsideration::BloodSugarAware));
    }

    #[test]
    fn parses_flat_client_profile() {
        let (profile, notes) = UserProfile::from_json(&json!({
            "goal": "loss",
            "diet": "Vegetarian",
            "peanut": true,
            "gluten": false,
            "avoid_artificial_colors": true,
            "flags": ["low sodium"]
        }));

        assert_eq!(profile.goal, Goal::WeightLoss);
        assert!(profile.has_rule(DietaryRule::Vegetarian));
        assert_eq!(profile.allergens, BTreeSet::from([Allergen::Peanut]));
        assert!(profile.avoids(AvoidPreference::AvoidArtificialColors));
        assert_eq!(
            notes,
            vec!["Custom profile flags are not scored: low sodium.".to_string()]
        );
    }

    #[test]
    fn unknown_values_become_notes() {
        let (profile, notes) = UserProfile::from_json(&json!({
            "goal": "bulk up",
            "allergens": ["dairy", "kiwi"],
            "favourite_color": "blue"
        }));

        assert_eq!(profile.goal, Goal::General);
        assert_eq!(profile.allergens, BTreeSet::from([Allergen::Dairy]));
        assert_eq!(notes.len(), 3);
        assert!(notes[0].contains("kiwi"));
        assert!(notes[1].contains("favourite_color"));
        assert!(notes[2].contains("bulk up"));
    }

    #[test]
    fn non_object_profile_falls_back_to_defaults() {
        let (profile, notes) = UserProfile::from_json(&json!(["vegan"]));

        assert_eq!(profile, UserProfile::default());
        assert_eq!(notes.len(), 1);
    }
}
