// Tests for classification semantics: rule priority, the domain override,
// word-boundary matching, and totality.

use harmwatch_engine::classifier::Classifier;
use harmwatch_engine::rules::{Category, CategoryRule, RiskLevel, RuleSet};

fn builtin_classifier() -> Classifier {
    Classifier::new(RuleSet::builtin())
}

fn no_domains() -> Vec<String> {
    Vec::new()
}

// ============================================================================
// Totality Tests
// ============================================================================

#[test]
fn test_empty_string_is_neutral_low() {
    let classifier = builtin_classifier();
    let result = classifier.classify("", &no_domains());

    assert_eq!(result.category, Category::Neutral);
    assert_eq!(result.risk, RiskLevel::Low);
}

#[test]
fn test_unmatched_text_is_neutral_low() {
    let classifier = builtin_classifier();
    let result = classifier.classify("lovely weather in the park today", &no_domains());

    assert_eq!(result.category, Category::Neutral);
    assert_eq!(result.risk, RiskLevel::Low);
}

#[test]
fn test_garbage_input_never_panics() {
    let classifier = builtin_classifier();
    for text in ["\0\0\0", "   ", "\u{1F4A9}\u{1F4A9}", "a", "....", "\t\r\n"] {
        let result = classifier.classify(text, &no_domains());
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.risk, RiskLevel::Low);
    }
}

// ============================================================================
// Category Tests
// ============================================================================

#[test]
fn test_scam_phishing_scenario() {
    let classifier = builtin_classifier();
    let result = classifier.classify(
        "congrats! you win a free prize, verify your account now",
        &no_domains(),
    );

    assert_eq!(result.category, Category::ScamPhishing);
    assert_eq!(result.risk, RiskLevel::High);
}

#[test]
fn test_hacking_is_high_risk() {
    let classifier = builtin_classifier();
    let result = classifier.classify("they hacked the server through an old breach", &no_domains());

    assert_eq!(result.category, Category::HackingExploit);
    assert_eq!(result.risk, RiskLevel::High);
}

#[test]
fn test_hate_speech() {
    let classifier = builtin_classifier();
    let result = classifier.classify("that account is openly racist", &no_domains());

    assert_eq!(result.category, Category::HateSpeech);
    assert_eq!(result.risk, RiskLevel::Medium);
}

#[test]
fn test_cyberbullying() {
    let classifier = builtin_classifier();
    let result = classifier.classify("you are an idiot", &no_domains());

    assert_eq!(result.category, Category::Cyberbullying);
    assert_eq!(result.risk, RiskLevel::Medium);
}

#[test]
fn test_misinformation() {
    let classifier = builtin_classifier();
    let result = classifier.classify("this whole story is a hoax", &no_domains());

    assert_eq!(result.category, Category::Misinformation);
    assert_eq!(result.risk, RiskLevel::Medium);
}

#[test]
fn test_privacy_risk() {
    let classifier = builtin_classifier();
    let result = classifier.classify("someone tried to doxx her last night", &no_domains());

    assert_eq!(result.category, Category::PrivacyRisk);
    assert_eq!(result.risk, RiskLevel::Medium);
}

#[test]
fn test_mental_health_risk() {
    let classifier = builtin_classifier();
    let result = classifier.classify("i feel so lonely these days", &no_domains());

    assert_eq!(result.category, Category::MentalHealthRisk);
    assert_eq!(result.risk, RiskLevel::Medium);
}

// ============================================================================
// Priority Order Tests
// ============================================================================

#[test]
fn test_hacking_beats_cyberbullying() {
    // Matches both the hacking and cyberbullying tables; hacking comes
    // first in the scan order.
    let classifier = builtin_classifier();
    let result = classifier.classify("only an idiot would hack their own account", &no_domains());

    assert_eq!(result.category, Category::HackingExploit);
    assert_eq!(result.risk, RiskLevel::High);
}

#[test]
fn test_misinformation_beats_mental_health() {
    let classifier = builtin_classifier();
    let result = classifier.classify("that hoax about the depress epidemic", &no_domains());

    assert_eq!(result.category, Category::Misinformation);
    assert_eq!(result.risk, RiskLevel::Medium);
}

#[test]
fn test_scam_beats_everything() {
    let classifier = builtin_classifier();
    let result = classifier.classify(
        "free password hack for racist idiot accounts, a hoax to expose the lonely",
        &no_domains(),
    );

    assert_eq!(result.category, Category::ScamPhishing);
    assert_eq!(result.risk, RiskLevel::High);
}

// ============================================================================
// Domain Override Tests
// ============================================================================

#[test]
fn test_suspicious_domain_overrides_empty_text() {
    let classifier = builtin_classifier();
    let result = classifier.classify("", &["bit.ly".to_string()]);

    assert_eq!(result.category, Category::ScamPhishing);
    assert_eq!(result.risk, RiskLevel::High);
}

#[test]
fn test_suspicious_domain_overrides_text_patterns() {
    // Text alone would classify as cyberbullying; the shortener wins.
    let classifier = builtin_classifier();
    let result = classifier.classify("you are an idiot", &["tinyurl.com".to_string()]);

    assert_eq!(result.category, Category::ScamPhishing);
    assert_eq!(result.risk, RiskLevel::High);
}

#[test]
fn test_unknown_domain_does_not_override() {
    let classifier = builtin_classifier();
    let result = classifier.classify("have a look", &["example.com".to_string()]);

    assert_eq!(result.category, Category::Neutral);
    assert_eq!(result.risk, RiskLevel::Low);
}

#[test]
fn test_all_shorteners_are_suspicious() {
    let classifier = builtin_classifier();
    for domain in ["bit.ly", "tinyurl.com", "t.co"] {
        let result = classifier.classify("", &[domain.to_string()]);
        assert_eq!(result.category, Category::ScamPhishing, "domain: {}", domain);
        assert_eq!(result.risk, RiskLevel::High);
    }
}

// ============================================================================
// Word Boundary Tests
// ============================================================================

#[test]
fn test_word_boundary_rejects_substring() {
    let classifier = builtin_classifier();
    let result = classifier.classify("idiotic behavior", &no_domains());

    assert_eq!(result.category, Category::Neutral);
}

#[test]
fn test_word_boundary_accepts_whole_word() {
    let classifier = builtin_classifier();
    let result = classifier.classify("you are an idiot", &no_domains());

    assert_eq!(result.category, Category::Cyberbullying);
}

#[test]
fn test_stem_patterns_do_not_match_inflections() {
    // "depress" carries a closing word boundary, so "depression" is not a
    // match. That is how the production table behaves.
    let classifier = builtin_classifier();
    let result = classifier.classify("a documentary about depression", &no_domains());

    assert_eq!(result.category, Category::Neutral);
}

#[test]
fn test_hacking_inflections_match() {
    let classifier = builtin_classifier();
    for text in ["they hack servers", "we got hacked", "no more hacking"] {
        let result = classifier.classify(text, &no_domains());
        assert_eq!(result.category, Category::HackingExploit, "text: {}", text);
    }
}

// ============================================================================
// Case Insensitivity Tests
// ============================================================================

#[test]
fn test_case_insensitive_matching() {
    let classifier = builtin_classifier();
    for text in ["KILL YOURSELF", "Kill Yourself", "kill yourself"] {
        let result = classifier.classify(text, &no_domains());
        assert_eq!(result.category, Category::Cyberbullying, "text: {}", text);
        assert_eq!(result.risk, RiskLevel::Medium);
    }
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_classify_record_applies_domain_override() {
    let classifier = builtin_classifier();
    let result = classifier.classify_record(0, "check this out bit.ly/xyz");

    assert_eq!(result.domains, vec!["bit.ly".to_string()]);
    assert_eq!(result.category, Category::ScamPhishing);
    assert_eq!(result.risk, RiskLevel::High);
    assert!(result.is_flagged());
}

#[test]
fn test_classify_record_normalizes_text() {
    let classifier = builtin_classifier();
    let result = classifier.classify_record(3, "  You   ARE an\tIDIOT  ");

    assert_eq!(result.index, 3);
    assert_eq!(result.clean_text, "you are an idiot");
    assert_eq!(result.category, Category::Cyberbullying);
}

#[test]
fn test_neutral_record_is_not_flagged() {
    let classifier = builtin_classifier();
    let result = classifier.classify_record(0, "nice sunset at the beach");

    assert_eq!(result.category, Category::Neutral);
    assert!(!result.is_flagged());
}

// ============================================================================
// Custom Rule Set Tests
// ============================================================================

#[test]
fn test_custom_ruleset() {
    let rules = vec![
        CategoryRule::new(Category::Misinformation, RiskLevel::High, &[r"\bflat earth\b"])
            .unwrap(),
    ];
    let ruleset = RuleSet::from_rules(rules, vec!["sus.example".to_string()]);
    let classifier = Classifier::new(ruleset);

    let result = classifier.classify("the flat earth society", &no_domains());
    assert_eq!(result.category, Category::Misinformation);
    assert_eq!(result.risk, RiskLevel::High);

    let result = classifier.classify("", &["sus.example".to_string()]);
    assert_eq!(result.category, Category::ScamPhishing);
    assert_eq!(result.risk, RiskLevel::High);
}

#[test]
fn test_custom_ruleset_empty_matches_nothing() {
    let classifier = Classifier::new(RuleSet::from_rules(Vec::new(), Vec::<String>::new()));
    let result = classifier.classify("free password hack", &no_domains());

    assert_eq!(result.category, Category::Neutral);
    assert_eq!(result.risk, RiskLevel::Low);
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let result = CategoryRule::new(Category::Neutral, RiskLevel::Low, &[r"(unclosed"]);
    assert!(result.is_err());
}

// ============================================================================
// Batch Tests
// ============================================================================

#[tokio::test]
async fn test_batch_preserves_input_order() {
    let classifier = builtin_classifier();
    let texts = vec![
        "you are an idiot".to_string(),
        "nice sunset at the beach".to_string(),
        "free prize inside".to_string(),
        "that story is a hoax".to_string(),
    ];

    let results = classifier.classify_batch(texts, 3).await.unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].index, 0);
    assert_eq!(results[0].category, Category::Cyberbullying);
    assert_eq!(results[1].category, Category::Neutral);
    assert_eq!(results[2].category, Category::ScamPhishing);
    assert_eq!(results[3].category, Category::Misinformation);
}

#[tokio::test]
async fn test_batch_matches_single_record_path() {
    let classifier = builtin_classifier();
    let texts = vec![
        "check this out bit.ly/xyz".to_string(),
        "idiotic behavior".to_string(),
        "".to_string(),
    ];

    let batch = classifier.classify_batch(texts.clone(), 2).await.unwrap();

    for (index, text) in texts.iter().enumerate() {
        let single = classifier.classify_record(index, text);
        assert_eq!(batch[index], single);
    }
}

#[tokio::test]
async fn test_batch_with_more_workers_than_records() {
    let classifier = builtin_classifier();
    let results = classifier
        .classify_batch(vec!["hello".to_string()], 16)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, Category::Neutral);
}

#[tokio::test]
async fn test_empty_batch() {
    let classifier = builtin_classifier();
    let results = classifier.classify_batch(Vec::new(), 4).await.unwrap();

    assert!(results.is_empty());
}
