use serde_json::json;

use super::common::{hit, hit_ids, hit_points, scored_for, strings};
use crate::scoring::{score, Lens, NUTRITION_FACTS};

#[test]
fn vegan_profile_flags_milk_as_a_hard_conflict() {
    let result = scored_for("milk, sugar, vanilla", json!({"dietary_rules": ["vegan"]}));

    assert_eq!(result.score, 20);
    assert_eq!(hit_ids(&result), vec!["H2"]);
    assert_eq!(hit(&result, "H2").evidence, "contains milk (not vegan)");
    assert!(result.reasons.concerns[0].starts_with("⚠️ Vegan conflict"));
    assert_eq!(result.detected_signals.hard_fail_penalty, 50);
    assert_eq!(result.bar.negative_points(), 50);
    assert_eq!(result.bar.negative_ratio(), 1.0);
    assert_eq!(result.ingredients_breakdown.negative_for_lens, strings(&["milk"]));
    assert_eq!(
        result.ingredients_breakdown.neutral_for_lens,
        strings(&["sugar", "vanilla"])
    );
}

#[test]
fn hard_penalty_is_the_largest_rule_not_the_sum() {
    let result = scored_for(
        "milk, oats",
        json!({"allergens": ["dairy"], "dietary_rules": ["vegan"]}),
    );

    assert_eq!(hit_ids(&result), vec!["H1", "H2"]);
    assert_eq!(result.detected_signals.hard_fail_penalty, 70);
    assert_eq!(result.score, 0);
    assert!(result.reasons.concerns[0].starts_with("⚠️ Allergen present"));
    assert!(result.reasons.concerns[1].starts_with("⚠️ Vegan conflict"));
}

#[test]
fn refined_soy_is_flagged_but_marked_uncertain() {
    let result = scored_for("soybean oil, rice, salt", json!({"allergens": ["soy"]}));

    assert_eq!(hit(&result, "H1").points, 70);
    assert_eq!(result.score, 0);
    assert_eq!(result.ingredients_breakdown.mixed_for_lens, strings(&["soybean oil"]));
    assert!(result
        .notes
        .iter()
        .any(|note| note.contains("highly refined soy derivative")));
}

#[test]
fn gelatin_without_a_source_is_uncertain_for_halal() {
    let result = scored_for("sugar, gelatin, citric acid", json!({"dietary_rules": ["halal"]}));

    assert!(hit_ids(&result).is_empty());
    assert_eq!(result.score, 70);
    assert_eq!(result.ingredients_breakdown.mixed_for_lens, strings(&["gelatin"]));
    assert!(result.notes.contains(
        &"gelatin: source not specified; halal compliance cannot be confirmed from the label."
            .to_string()
    ));
}

#[test]
fn pork_gelatin_is_a_religious_conflict() {
    let result = scored_for("sugar, pork gelatin", json!({"dietary_rules": ["halal"]}));

    assert_eq!(hit(&result, "H3").points, 40);
    assert_eq!(result.score, 30);
    assert!(!result.notes.iter().any(|note| note.contains("source not specified")));
}

#[test]
fn muscle_goal_rewards_protein_and_creatine() {
    let result = scored_for(
        "whey protein isolate, creatine monohydrate, sugar",
        json!({"goal": "build_muscle"}),
    );

    assert_eq!(hit_ids(&result), vec!["G5a", "G5b"]);
    assert_eq!(result.score, 84);
    let breakdown = &result.ingredients_breakdown;
    assert_eq!(breakdown.mixed_for_lens, strings(&["whey protein isolate"]));
    assert_eq!(breakdown.positive_for_lens, strings(&["creatine monohydrate"]));
    assert_eq!(breakdown.neutral_for_lens, strings(&["sugar"]));
}

#[test]
fn caffeine_sensitivity_cuts_both_ways() {
    let profile = json!({"avoid_list": ["caffeine_sensitive"]});

    let with_caffeine = scored_for("water, caffeine", profile.clone());
    let without = scored_for("water, salt", profile);

    assert_eq!(hit(&with_caffeine, "A3a").points, 10);
    assert_eq!(with_caffeine.score, 60);
    assert_eq!(hit(&without, "A3b").points, 2);
    assert_eq!(without.score, 72);
}

#[test]
fn flat_client_profile_shape_is_understood() {
    let result = scored_for("gelatin, sugar", json!({"goal": "loss", "diet": "Vegetarian"}));

    assert_eq!(hit_ids(&result), vec!["H2", "G3d"]);
    assert_eq!(result.score, 10);
    assert_eq!(result.bar.negative_points(), 60);
    assert!(result.notes.contains(&NUTRITION_FACTS.to_string()));
}

#[test]
fn boolean_allergen_flags_enable_allergens() {
    let result = scored_for("peanuts, salt", json!({"peanut": true, "dairy": false}));

    assert_eq!(hit(&result, "H1").evidence, "contains peanuts (peanut)");
}

#[test]
fn unusable_profile_values_become_notes() {
    let result = scored_for("oats", json!({"allergens": ["kiwi"], "mood": "hungry"}));

    assert_eq!(result.score, 70);
    assert!(result.notes[0].contains("kiwi"));
    assert!(result.notes[1].contains("mood"));
}

#[test]
fn profile_is_ignored_outside_the_personal_lens() {
    let profile = json!({"dietary_rules": ["vegan"]});

    let result = score("milk", Lens::Focus, Some(&profile)).expect("score");

    assert!(result.notes[0].contains("only the Personal Fit lens uses it"));
    assert!(result.detected_signals.profile.is_none());
    assert!(!hit_ids(&result).contains(&"H2"));
}

#[test]
fn personal_result_echoes_the_parsed_profile() {
    let result = scored_for("oats", json!({"goal": "focus", "blood_sugar_aware": true}));
    let value = serde_json::to_value(&result.detected_signals).expect("json");

    assert_eq!(value["profile"]["goal"], "steady_focus");
    assert_eq!(value["profile"]["health_considerations"], json!(["blood_sugar_aware"]));
    assert!(hit_ids(&result).contains(&"C1c"));
}

#[test]
fn drink_named_vinegars_and_flavors_are_uncertain_for_halal() {
    let halal = json!({"dietary_rules": ["halal"]});

    let vinegar = scored_for("cucumbers, red wine vinegar, salt", halal.clone());
    let soda = scored_for("carbonated water, sugar, root beer flavor", halal.clone());
    let wine = scored_for("beef, red wine, salt", halal);

    assert!(hit_ids(&vinegar).is_empty());
    assert_eq!(vinegar.score, 70);
    assert_eq!(
        vinegar.ingredients_breakdown.mixed_for_lens,
        strings(&["red wine vinegar"])
    );
    assert!(vinegar
        .notes
        .iter()
        .any(|note| note.starts_with("red wine vinegar: may be made with alcohol")));

    assert!(hit_ids(&soda).is_empty());
    assert_eq!(soda.score, 70);
    assert!(soda
        .ingredients_breakdown
        .mixed_for_lens
        .contains(&"root beer flavor".to_string()));

    assert_eq!(hit(&wine, "H3").evidence, "contains red wine (not halal)");
    assert_eq!(wine.score, 30);
}

#[test]
fn drink_named_vinegar_is_neutral_without_a_halal_rule() {
    let result = scored_for(
        "cucumbers, red wine vinegar, salt",
        json!({"dietary_rules": ["kosher"]}),
    );

    assert_eq!(result.score, 70);
    assert!(!result.notes.iter().any(|note| note.contains("made with alcohol")));
}

#[test]
fn real_food_goal_rewards_whole_food_lists() {
    let profile = json!({"goal": "real_food"});

    let simple = scored_for("oats, apples, cinnamon", profile.clone());
    let engineered = scored_for(
        "sugar, oats, natural flavor, red 40, sucralose, xanthan gum, guar gum, sodium benzoate",
        profile,
    );

    assert_eq!(hit_points(&simple), vec![("G1a", 8), ("G1b", 6)]);
    assert_eq!(simple.score, 84);
    assert_eq!(
        hit_points(&engineered),
        vec![
            ("G1b", 6),
            ("G1c", 6),
            ("G1d", 6),
            ("G1e", 8),
            ("G1f", 6),
            ("G1g", 10),
        ]
    );
    assert_eq!(engineered.score, 40);
}

#[test]
fn steady_focus_goal_weighs_fats_grains_and_sugar() {
    let profile = json!({"goal": "steady_focus"});

    let supportive = scored_for(
        "walnuts, flaxseed, brown rice, creatine monohydrate",
        profile.clone(),
    );
    let spiky = scored_for("sugar, cane sugar, caffeine, red 40", profile);

    assert_eq!(
        hit_points(&supportive),
        vec![("G2a", 6), ("G2b", 6), ("G2c", 4), ("G2d", 4)]
    );
    assert_eq!(supportive.score, 90);
    assert_eq!(
        hit_points(&spiky),
        vec![("G2e", 12), ("G2f", 8), ("G2g", 6), ("G2h", 6)]
    );
    assert_eq!(spiky.score, 38);
}

#[test]
fn weight_gain_goal_counts_oils_protein_and_grains() {
    let profile = json!({"goal": "weight_gain"});

    let dense = scored_for(
        "peanut butter, olive oil, whole wheat flour, pea protein",
        profile.clone(),
    );
    let oil_only = scored_for("olive oil, salt", profile.clone());
    let engineered = scored_for(
        "natural flavor, xanthan gum, sodium benzoate, modified corn starch",
        profile,
    );

    assert_eq!(hit_points(&dense), vec![("G4a", 4), ("G4b", 4), ("G4c", 3)]);
    assert_eq!(dense.score, 81);
    assert_eq!(hit_points(&oil_only), vec![("G4a", 4)]);
    assert_eq!(hit(&oil_only, "G4a").evidence, "olive oil (#1)");
    assert_eq!(hit_points(&engineered), vec![("G4d", 3)]);
    assert_eq!(engineered.score, 67);
}

#[test]
fn avoided_colors_cost_points() {
    let result = scored_for(
        "sugar, red 40, yellow 5",
        json!({"avoid_list": ["avoid_artificial_colors"]}),
    );

    assert_eq!(hit_points(&result), vec![("A1", 8)]);
    assert_eq!(result.score, 62);
}

#[test]
fn avoided_sweeteners_weigh_plant_sweeteners_less() {
    let profile = json!({"avoid_list": ["avoid_artificial_sweeteners"]});

    let mixed = scored_for("water, sucralose, stevia", profile.clone());
    let plant_only = scored_for("water, stevia", profile);

    assert_eq!(hit_points(&mixed), vec![("A2", 8)]);
    assert_eq!(mixed.score, 62);
    assert_eq!(hit_points(&plant_only), vec![("A2", 4)]);
    assert_eq!(plant_only.score, 66);
}

#[test]
fn ultra_processed_avoidance_takes_either_marker() {
    let profile = json!({"avoid_list": ["avoid_ultra_processed"]});

    let flavored = scored_for("oats, natural flavor", profile.clone());
    let stacked = scored_for("oats, xanthan gum, guar gum, sodium benzoate", profile.clone());
    let clean = scored_for("oats, apples, xanthan gum", profile);

    assert_eq!(hit_points(&flavored), vec![("A4a", 8)]);
    assert_eq!(flavored.score, 62);
    assert_eq!(hit_points(&stacked), vec![("A4a", 8)]);
    assert_eq!(
        hit(&stacked, "A4a").evidence,
        "xanthan gum (#2), guar gum (#3), sodium benzoate (#4)"
    );
    assert_eq!(hit_points(&clean), vec![("A4b", 4)]);
    assert_eq!(clean.score, 74);
}

#[test]
fn blood_sugar_awareness_penalizes_dominant_and_stacked_sugars() {
    let result = scored_for(
        "sugar, honey, oats",
        json!({"health_considerations": ["blood_sugar_aware"]}),
    );

    assert_eq!(hit_points(&result), vec![("C1a", 12), ("C1b", 8)]);
    assert_eq!(result.score, 50);
    assert!(result.notes.contains(&NUTRITION_FACTS.to_string()));
}
