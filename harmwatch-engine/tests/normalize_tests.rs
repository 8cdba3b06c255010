// Tests for text normalization and domain extraction.

use harmwatch_engine::normalize::{extract_domains, normalize};

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_normalize_lowercases() {
    assert_eq!(normalize("HELLO World"), "hello world");
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(normalize("  too   many\t\tspaces \n here "), "too many spaces here");
}

#[test]
fn test_normalize_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \t\n  "), "");
}

#[test]
fn test_normalize_is_deterministic() {
    let input = "Some  MIXED case\ttext";
    assert_eq!(normalize(input), normalize(input));
}

#[test]
fn test_normalize_keeps_urls_in_place() {
    assert_eq!(
        normalize("look at HTTPS://Example.COM/Path now"),
        "look at https://example.com/path now"
    );
}

// ============================================================================
// Domain Extraction Tests
// ============================================================================

#[test]
fn test_extract_schemed_url() {
    let domains = extract_domains("read this https://example.com/article");
    assert_eq!(domains, vec!["example.com".to_string()]);
}

#[test]
fn test_extract_schemeless_url() {
    let domains = extract_domains("check this out bit.ly/xyz");
    assert_eq!(domains, vec!["bit.ly".to_string()]);
}

#[test]
fn test_extract_www_host() {
    let domains = extract_domains("visit www.foo.com today");
    assert_eq!(domains, vec!["www.foo.com".to_string()]);
}

#[test]
fn test_extract_lowercases_hosts() {
    let domains = extract_domains("go to HTTPS://T.CO/AbC");
    assert_eq!(domains, vec!["t.co".to_string()]);
}

#[test]
fn test_extract_preserves_first_appearance_order() {
    let domains = extract_domains("first tinyurl.com/a then https://example.com/b then bit.ly/c");
    assert_eq!(
        domains,
        vec![
            "tinyurl.com".to_string(),
            "example.com".to_string(),
            "bit.ly".to_string()
        ]
    );
}

#[test]
fn test_extract_dedupes_repeats() {
    let domains = extract_domains("bit.ly/a and bit.ly/b and https://bit.ly/c");
    assert_eq!(domains, vec!["bit.ly".to_string()]);
}

#[test]
fn test_extract_strips_trailing_punctuation() {
    let domains = extract_domains("seen on example.com, apparently (and t.co).");
    assert_eq!(domains, vec!["example.com".to_string(), "t.co".to_string()]);
}

#[test]
fn test_extract_ignores_plain_text() {
    assert!(extract_domains("no links in this post at all").is_empty());
}

#[test]
fn test_extract_ignores_dotted_non_hosts() {
    // Abbreviations and version numbers are not hostnames.
    assert!(extract_domains("e.g. version 3.5 is out").is_empty());
}

#[test]
fn test_extract_empty_input() {
    assert!(extract_domains("").is_empty());
}

#[test]
fn test_extract_host_with_port() {
    let domains = extract_domains("local mirror at example.com:8080/files");
    assert_eq!(domains, vec!["example.com".to_string()]);
}
