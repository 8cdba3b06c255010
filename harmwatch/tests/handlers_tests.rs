use harmwatch::handlers::*;
use harmwatch::{ClassifyOptions, execute_classification};
use harmwatch_core::ingest::load_posts_from_reader;
use harmwatch_core::report::{ReportFormat, build_report_data};
use harmwatch_engine::rules::{Category, RuleSet};
use std::path::PathBuf;

#[test]
fn test_resolve_db_path_default() {
    let path = resolve_db_path(None);
    assert!(path.ends_with("harmwatch.db"));
}

#[test]
fn test_resolve_db_path_explicit() {
    let arg = "/tmp/custom/my.db".to_string();
    let path = resolve_db_path(Some(&arg));
    assert_eq!(path, PathBuf::from("/tmp/custom/my.db"));
}

#[test]
fn test_sample_posts_parse() {
    let posts = load_posts_from_reader(SAMPLE_POSTS.as_bytes()).unwrap();

    assert!(posts.len() >= 10);
    assert!(posts.iter().all(|p| !p.text.is_empty()));
    assert!(posts.iter().all(|p| !p.platform.is_empty()));
    assert!(posts.iter().all(|p| !p.date.is_empty()));
}

#[tokio::test]
async fn test_sample_posts_cover_every_category() {
    let posts = load_posts_from_reader(SAMPLE_POSTS.as_bytes()).unwrap();
    let classified = execute_classification(
        posts,
        RuleSet::builtin(),
        ClassifyOptions::default(),
        None,
    )
    .await
    .unwrap();

    for category in Category::ALL {
        assert!(
            classified.iter().any(|p| p.category == category),
            "sample dataset has no {} post",
            category.as_str()
        );
    }
}

#[tokio::test]
async fn test_render_report_formats() {
    let posts = load_posts_from_reader(SAMPLE_POSTS.as_bytes()).unwrap();
    let classified = execute_classification(
        posts,
        RuleSet::builtin(),
        ClassifyOptions::default(),
        None,
    )
    .await
    .unwrap();

    let data = build_report_data("test-run", &classified, "sample_posts.csv", true);

    let text = render_report(&data, &ReportFormat::Text).unwrap();
    assert!(text.contains("HARMWATCH CLASSIFICATION REPORT"));

    let json = render_report(&data, &ReportFormat::Json).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());

    let csv = render_report(&data, &ReportFormat::Csv).unwrap();
    assert!(csv.starts_with("id,category,risk_level"));

    let html = render_report(&data, &ReportFormat::Html).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));

    let markdown = render_report(&data, &ReportFormat::Markdown).unwrap();
    assert!(markdown.starts_with("# HarmWatch Classification Report"));
}

#[tokio::test]
async fn test_classify_csv_to_report_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("posts.csv");
    std::fs::write(&csv_path, "text\ncheck this out bit.ly/xyz\nnice sunset\n").unwrap();

    let posts = harmwatch_core::ingest::load_posts_from_csv(&csv_path).unwrap();
    let classified = execute_classification(
        posts,
        RuleSet::builtin(),
        ClassifyOptions::default(),
        None,
    )
    .await
    .unwrap();

    let data = build_report_data("test-run", &classified, "posts.csv", false);
    let html = render_report(&data, &ReportFormat::Html).unwrap();

    let report_path = temp_dir.path().join("report.html");
    harmwatch_core::report::save_report(&html, &report_path).unwrap();

    let saved = std::fs::read_to_string(&report_path).unwrap();
    assert!(saved.contains("Scam/Phishing"));
    assert!(saved.contains("Neutral"));
}
