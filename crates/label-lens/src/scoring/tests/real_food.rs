use super::common::{hit, hit_ids, scored, strings};
use crate::scoring::Lens;

#[test]
fn kitchen_staples_keep_a_perfect_score() {
    let result = scored("oats, water, salt", Lens::RealFood);

    assert_eq!(result.score, 100);
    assert_eq!(hit_ids(&result), vec!["B1", "B2", "B3", "B4", "B5"]);
    assert_eq!(result.bar.positive_points(), 40);
    assert_eq!(result.bar.negative_points(), 0);
    assert_eq!(result.bar.positive_ratio(), 1.0);
    assert_eq!(result.bar.negative_ratio(), 0.0);
    assert_eq!(result.ingredients_breakdown.positive_for_lens, strings(&["oats"]));
    assert_eq!(result.ingredients_breakdown.neutral_for_lens, strings(&["water", "salt"]));
}

#[test]
fn ultra_processed_snack_collects_every_processing_marker() {
    let result = scored(
        "sugar, enriched flour, soybean oil, high fructose corn syrup, maltodextrin, \
         natural flavors, artificial flavor, red 40, yellow 5, sodium benzoate, \
         potassium sorbate, soy lecithin, mono- and diglycerides, polysorbate 80, \
         sucralose, salt",
        Lens::RealFood,
    );

    assert_eq!(
        hit_ids(&result),
        vec!["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9"]
    );
    assert_eq!(hit(&result, "P3").points, 18);
    assert_eq!(hit(&result, "P5").points, 8);
    assert_eq!(hit(&result, "P6").points, 10);
    assert_eq!(hit(&result, "P7").points, 5);
    assert_eq!(hit(&result, "P8").points, 10);
    assert_eq!(hit(&result, "P9").points, 10);
    assert_eq!(result.score, 9);
    assert_eq!(result.detected_signals.ingredient_count, 16);
}

#[test]
fn context_dependent_additives_are_mixed_not_negative() {
    let result = scored("enriched flour, sugar, soy lecithin", Lens::RealFood);
    let breakdown = &result.ingredients_breakdown;

    assert!(breakdown.mixed_for_lens.contains(&"soy lecithin".to_string()));
    assert!(breakdown.mixed_for_lens.contains(&"enriched flour".to_string()));
    assert_eq!(breakdown.negative_for_lens, strings(&["sugar"]));
}

#[test]
fn sugar_prominence_scales_the_penalty() {
    let dominant = scored("honey, oats", Lens::RealFood);
    let multiple = scored("oats, almonds, raisins, honey, molasses", Lens::RealFood);
    let single = scored("oats, almonds, raisins, honey", Lens::RealFood);

    assert_eq!(hit(&dominant, "P3").points, 18);
    assert_eq!(hit(&multiple, "P3").points, 12);
    assert_eq!(hit(&single, "P3").points, 6);
}

#[test]
fn plant_sweetener_gets_the_reduced_penalty() {
    let result = scored("water, stevia leaf extract", Lens::RealFood);

    assert_eq!(hit(&result, "P2").points, 6);
}

#[test]
fn isolate_is_a_real_food_penalty() {
    let result = scored("whey protein isolate, cocoa", Lens::RealFood);

    assert_eq!(hit(&result, "P7").points, 5);
    assert_eq!(hit(&result, "P9").points, 10);
    assert!(result
        .ingredients_breakdown
        .negative_for_lens
        .contains(&"whey protein isolate".to_string()));
}

#[test]
fn density_over_neutral_basics_is_reported_as_undetermined() {
    let result = scored("water, salt", Lens::RealFood);

    assert!(!hit_ids(&result).contains(&"B3"));
    assert!(result
        .notes
        .iter()
        .any(|note| note.starts_with("Mostly whole foods (B3) could not be determined")));
    assert_eq!(result.score, 100);
}

#[test]
fn long_lists_are_penalized_by_band() {
    let ten = "oats, almonds, raisins, dates, cashews, walnuts, pecans, apples, bananas, cherries";

    let result = scored(ten, Lens::RealFood);

    assert_eq!(hit(&result, "P8").points, 6);
    assert!(!hit_ids(&result).contains(&"B2"));
}
