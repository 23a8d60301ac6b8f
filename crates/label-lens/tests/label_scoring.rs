use label_lens::scoring::{
    detect, normalize, standard_vocabularies, LensEngine, UserProfile, VocabularyKind,
};
use label_lens::{score, Lens};
use serde_json::{json, Value};

fn as_json(text: &str, lens: Lens, profile: Option<Value>) -> Value {
    let result = score(text, lens, profile.as_ref()).expect("label scores");
    serde_json::to_value(result).expect("result serializes")
}

#[test]
fn documented_scenarios_score_as_expected() {
    let focus = as_json("sugar, corn syrup, natural flavors, almonds", Lens::Focus, None);
    let real_food = as_json("oats, water, salt", Lens::RealFood, None);
    let personal = as_json(
        "milk, sugar, vanilla",
        Lens::Personal,
        Some(json!({"dietary_rules": ["vegan"]})),
    );

    assert_eq!(focus["score"], 30);
    assert_eq!(focus["bar"]["negative_points"], 30);
    assert_eq!(real_food["score"], 100);
    assert_eq!(personal["score"], 20);
    assert_eq!(personal["detected_signals"]["hard_fail_penalty"], 50);
    assert!(personal["reasons"]["concerns"][0]
        .as_str()
        .is_some_and(|line| line.starts_with("⚠️ Vegan conflict")));
}

#[test]
fn one_list_can_be_scored_under_every_lens() {
    let list = normalize("whole wheat flour, honey, canola oil, red 40").expect("tokens");
    let profile = UserProfile::default();

    for lens in Lens::ALL {
        let engine = LensEngine::new(lens);
        let direct = engine.evaluate(&list, &profile);
        let via_text = score(&list.to_label_text(), lens, None).expect("score");

        assert_eq!(engine.lens(), lens);
        assert_eq!(direct, via_text);
    }
}

#[test]
fn detector_can_run_with_a_narrow_vocabulary_set() {
    let list = normalize("brown rice syrup, cane sugar, dates").expect("tokens");

    let report = detect(&list, &[VocabularyKind::Sugars.vocabulary()]);

    let terms: Vec<&str> = report
        .hits(VocabularyKind::Sugars)
        .iter()
        .map(|hit| hit.term)
        .collect();
    assert_eq!(terms, vec!["brown rice syrup", "cane sugar"]);
    assert!(!report.any(&[VocabularyKind::WholeFoods]));

    let full = detect(&list, &standard_vocabularies());
    assert!(full.any(&[VocabularyKind::WholeFoods]));
}

#[test]
fn lab_labels_carry_the_lens_specific_relevance_key() {
    let text = "sugar, red 40, magnesium stearate";

    let focus = as_json(text, Lens::Focus, None);
    let real_food = as_json(text, Lens::RealFood, None);
    let personal = as_json(text, Lens::Personal, Some(json!({"avoid_list": ["avoid_artificial_colors"]})));

    assert_eq!(focus["lab_labels"][0]["ingredient"], "red 40");
    assert!(focus["lab_labels"][0].get("focus_relevance").is_some());
    assert!(real_food["lab_labels"][0]["common_in"].is_array());
    assert_eq!(
        personal["lab_labels"][0]["personal_relevance"],
        "You chose to avoid artificial colors, and this is one of them."
    );
    assert_eq!(personal["lab_labels"][1]["ingredient"], "magnesium stearate");
}
