use super::*;

// ============================================================================
// QueryClassifier::builtin tests
// ============================================================================

#[test]
fn test_temperature_reply() {
    let classifier = QueryClassifier::builtin();
    let result = classifier.classify("Show me temperature profiles in the Arabian Sea");
    assert_eq!(result.rule.as_deref(), Some("temperature"));
    assert_eq!(result.reply, TEMPERATURE_REPLY);
}

#[test]
fn test_temperature_is_case_insensitive() {
    let classifier = QueryClassifier::builtin();
    let result = classifier.classify("TEMPERATURE near Hawaii");
    assert_eq!(result.reply, TEMPERATURE_REPLY);
    assert_eq!(result.matched_keyword.as_deref(), Some("temperature"));
}

#[test]
fn test_temp_shorthand_selects_temperature() {
    let classifier = QueryClassifier::builtin();
    assert_eq!(classifier.classify("sea temp today?").reply, TEMPERATURE_REPLY);
}

#[test]
fn test_temperature_wins_over_salinity() {
    let classifier = QueryClassifier::builtin();
    // Salinity appears first in the text but temperature is earlier in the table
    let result = classifier.classify("salinity and temperature in the Atlantic");
    assert_eq!(result.rule.as_deref(), Some("temperature"));
}

#[test]
fn test_salinity_wins_over_equator() {
    let classifier = QueryClassifier::builtin();
    let result = classifier.classify("What's the salinity trend near the equator?");
    assert_eq!(result.rule.as_deref(), Some("salinity"));
    assert_eq!(result.reply, SALINITY_REPLY);
}

#[test]
fn test_arabian_sea_reply() {
    let classifier = QueryClassifier::builtin();
    let result = classifier.classify("Tell me about the Arabian Sea");
    assert_eq!(result.reply, ARABIAN_SEA_REPLY);
}

#[test]
fn test_equator_reply() {
    let classifier = QueryClassifier::builtin();
    assert_eq!(classifier.classify("conditions at the Equator").reply, EQUATOR_REPLY);
}

#[test]
fn test_float_and_argo_reply() {
    let classifier = QueryClassifier::builtin();
    assert_eq!(classifier.classify("how does a float dive?").reply, FLOATS_REPLY);
    assert_eq!(classifier.classify("What is Argo?").reply, FLOATS_REPLY);
}

#[test]
fn test_unmatched_input_uses_default() {
    let classifier = QueryClassifier::builtin();
    let result = classifier.classify("hello");
    assert!(result.is_default());
    assert!(result.matched_keyword.is_none());
    assert_eq!(result.reply, DEFAULT_REPLY);
}

#[test]
fn test_empty_input_uses_default() {
    let classifier = QueryClassifier::default();
    assert_eq!(classifier.classify("").reply, DEFAULT_REPLY);
}

#[test]
fn test_rule_order() {
    let classifier = QueryClassifier::builtin();
    let names: Vec<&str> = classifier.rule_names().collect();
    assert_eq!(
        names,
        vec!["temperature", "salinity", "arabian_sea", "equator", "floats"]
    );
}

// ============================================================================
// QueryClassifier::new tests
// ============================================================================

#[test]
fn test_custom_rules_keep_order() {
    let rules = vec![
        ReplyRule {
            name: "waves".to_string(),
            keywords: vec!["Wave".to_string()],
            reply: "wave reply".to_string(),
        },
        ReplyRule {
            name: "ocean".to_string(),
            keywords: vec!["ocean".to_string()],
            reply: "ocean reply".to_string(),
        },
    ];
    let classifier = QueryClassifier::new(rules, "fallback".to_string()).unwrap();

    assert_eq!(classifier.classify("ocean WAVES").reply, "wave reply");
    assert_eq!(classifier.classify("open ocean").reply, "ocean reply");
    assert_eq!(classifier.classify("tides").reply, "fallback");
}

#[test]
fn test_rule_without_keywords_rejected() {
    let rules = vec![ReplyRule {
        name: "broken".to_string(),
        keywords: Vec::new(),
        reply: "never".to_string(),
    }];
    let err = QueryClassifier::new(rules, "fallback".to_string()).unwrap_err();
    assert_eq!(
        err,
        ClassifierError::NoKeywords {
            rule: "broken".to_string()
        }
    );
}

#[test]
fn test_blank_keyword_rejected() {
    let rules = vec![ReplyRule {
        name: "blank".to_string(),
        keywords: vec!["  ".to_string()],
        reply: "never".to_string(),
    }];
    let err = QueryClassifier::new(rules, "fallback".to_string()).unwrap_err();
    assert!(matches!(err, ClassifierError::EmptyKeyword { .. }));
}

// ============================================================================
// DataQueryDetector tests
// ============================================================================

#[test]
fn test_data_query_triggers() {
    let detector = DataQueryDetector::builtin();
    assert!(detector.is_data_query("What's the salinity trend near the equator?"));
    assert!(detector.is_data_query("SHOW me something"));
    assert!(detector.is_data_query("plot a chart"));
    assert!(detector.is_data_query("Arabian Sea conditions"));
}

#[test]
fn test_non_data_queries() {
    let detector = DataQueryDetector::default();
    assert!(!detector.is_data_query("hello"));
    // "argo" selects a reply but is not a data trigger
    assert!(!detector.is_data_query("what is argo?"));
    // "temp" shorthand is a reply keyword only
    assert!(!detector.is_data_query("sea temp"));
}

#[test]
fn test_custom_detector() {
    let detector = DataQueryDetector::new(["Tsunami"]).unwrap();
    assert!(detector.is_data_query("any tsunami warning?"));
    assert!(!detector.is_data_query("show temperature"));
}

#[test]
fn test_empty_detector_rejected() {
    let err = DataQueryDetector::new(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, ClassifierError::NoKeywords { .. }));
}

#[test]
fn test_keyword_set_normalizes() {
    let set = KeywordSet::new("t", [" Arabian Sea "]).unwrap();
    assert_eq!(set.keywords(), &["arabian sea".to_string()]);
    assert_eq!(set.first_match("the arabian sea"), Some("arabian sea"));
}
