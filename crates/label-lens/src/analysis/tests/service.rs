use std::sync::Arc;

use serde_json::json;

use super::common::{photo, service, FakeSpeech, SUGARY_BAR};
use crate::analysis::{fallback_narrative, AnalysisError};
use crate::scoring::{score, Lens, ScoreError};

#[tokio::test]
async fn photo_is_scored_narrated_and_voiced() {
    let speech = Arc::new(FakeSpeech::returning(&[1, 2, 3]));
    let service = service(Some(SUGARY_BAR), Some("Tasty, but sugar leads."), Some(speech.clone()));

    let response = service
        .analyze(photo(), Lens::Focus, None)
        .await
        .expect("analysis succeeds");

    assert_eq!(response.health_analysis.score, 30);
    assert_eq!(response.narrative_text, "Tasty, but sugar leads.");
    assert_eq!(response.audio_base64.as_deref(), Some("AQID"));
    assert_eq!(speech.spoken(), vec!["Tasty, but sugar leads.".to_string()]);
}

#[tokio::test]
async fn narration_failure_falls_back_to_a_local_sentence() {
    let service = service(Some(SUGARY_BAR), None, None);

    let response = service
        .analyze(photo(), Lens::Focus, None)
        .await
        .expect("analysis succeeds");

    assert_eq!(
        response.narrative_text,
        "Focus Score 30/100: this label is a tough fit, and the biggest factor is \"Sugar is a dominant ingredient\"."
    );
    assert!(response.audio_base64.is_none());
}

#[tokio::test]
async fn speech_failure_keeps_the_text_response() {
    let speech = Arc::new(FakeSpeech::failing());
    let service = service(Some("oats, water, salt"), Some("Great pick."), Some(speech.clone()));

    let response = service
        .analyze(photo(), Lens::RealFood, None)
        .await
        .expect("analysis succeeds");

    assert_eq!(response.health_analysis.score, 100);
    assert!(response.audio_base64.is_none());
    assert_eq!(speech.spoken().len(), 1);
}

#[tokio::test]
async fn profile_reaches_the_personal_lens() {
    let service = service(Some("milk, sugar, vanilla"), Some("Not vegan."), None);
    let profile = json!({"dietary_rules": ["vegan"]});

    let response = service
        .analyze(photo(), Lens::Personal, Some(&profile))
        .await
        .expect("analysis succeeds");

    assert_eq!(response.health_analysis.score, 20);
}

#[tokio::test]
async fn unreadable_label_fails_the_request() {
    let service = service(None, Some("unused"), None);

    let error = service
        .analyze(photo(), Lens::Focus, None)
        .await
        .expect_err("reader failure is fatal");

    assert!(matches!(error, AnalysisError::LabelReading(_)));
}

#[tokio::test]
async fn blank_label_text_is_not_scored() {
    let service = service(Some("  \n "), Some("unused"), None);

    let error = service
        .analyze(photo(), Lens::Focus, None)
        .await
        .expect_err("nothing to score");

    assert!(matches!(error, AnalysisError::Scoring(ScoreError::EmptyInput)));
}

#[test]
fn fallback_without_hits_still_reports_the_score() {
    let result = score("oats", Lens::Personal, None).expect("score");

    assert_eq!(
        fallback_narrative(&result),
        "Personal Fit Score 70/100: this label looks like a good fit, with nothing on it moving the score much."
    );
}

#[test]
fn fallback_names_the_heaviest_hard_rule() {
    let profile = json!({"allergens": ["dairy"], "dietary_rules": ["vegan"]});
    let result = score("milk, oats", Lens::Personal, Some(&profile)).expect("score");

    assert!(fallback_narrative(&result).ends_with("the biggest factor is \"Allergen present\"."));
}
