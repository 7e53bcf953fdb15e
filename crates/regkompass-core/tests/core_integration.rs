#![allow(clippy::unwrap_used, clippy::expect_used)]

use regkompass_core::*;

// ---------------------------------------------------------------------------
// 1. Framework config JSON round-trip keeps the wire field names
// ---------------------------------------------------------------------------

#[test]
fn test_framework_config_uses_camel_case_wire_names() {
    let config = FrameworkBuilder::new("dora")
        .features(FeatureFlags {
            has_quick_check: true,
            ..FeatureFlags::default()
        })
        .category("ict-risk")
        .core("ict-1", "ict-risk", Reference::legal("Art. 6 DORA"))
        .quick_check("qc-1", "ict-risk")
        .build();

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["features"]["hasQuickCheck"], true);
    assert_eq!(json["questions"][0]["categoryId"], "ict-risk");
    assert_eq!(json["quickCheckQuestions"][0]["id"], "qc-1");
    assert_eq!(json["scoring"]["assessment"], "flat-answer-mean");
    assert_eq!(json["scoring"]["quickCheck"], "category-mean");

    let parsed: FrameworkConfig = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, config);
    parsed.validate().unwrap();
}

// ---------------------------------------------------------------------------
// 2. Score shapes serialize with stable field names
// ---------------------------------------------------------------------------

#[test]
fn test_overall_score_field_names_are_stable() {
    let score = OverallScore {
        percentage: 75.0,
        traffic_light: TrafficLight::Green,
        category_scores: vec![CategoryScore {
            category_id: "gov".to_string(),
            percentage: 75.0,
            traffic_light: TrafficLight::Green,
            answered_questions: 4,
            total_questions: 5,
        }],
        answered_questions: 4,
        total_questions: 5,
        completion_rate: 80.0,
    };

    let json = serde_json::to_value(&score).unwrap();
    for key in [
        "percentage",
        "trafficLight",
        "categoryScores",
        "answeredQuestions",
        "totalQuestions",
        "completionRate",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["trafficLight"], "green");
    assert_eq!(json["categoryScores"][0]["categoryId"], "gov");
    assert!(score.category("gov").is_some());
    assert!(score.category("ops").is_none());
}

// ---------------------------------------------------------------------------
// 3. Error display
// ---------------------------------------------------------------------------

#[test]
fn test_error_display() {
    let err = RegkompassError::invalid_framework("nis2", "duplicate category id 'gov'");
    assert_eq!(
        err.to_string(),
        "Invalid framework 'nis2': duplicate category id 'gov'"
    );

    let err = RegkompassError::InvalidOverlap("self-loop on 'nis2'".to_string());
    assert_eq!(err.to_string(), "Invalid overlap mapping: self-loop on 'nis2'");

    let json_err = serde_json::from_str::<Answer>("{").unwrap_err();
    let err: RegkompassError = json_err.into();
    assert!(err.to_string().starts_with("JSON error:"));
}
