use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

use harmwatch_engine::classifier::Classifier;
use harmwatch_engine::rules::{Category, RuleSet};

use crate::data::{ClassifiedPost, Post};

/// Options for configuring a classification pass
pub struct ClassifyOptions {
    pub workers: usize,
    pub show_progress_bars: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            workers: 4,
            show_progress_bars: false,
        }
    }
}

/// Callback for reporting batch progress
pub type ClassifyProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Classify a batch of posts with the given rule set and options.
/// Returns the posts with their classifications attached, in input order.
pub async fn execute_classification(
    posts: Vec<Post>,
    rules: RuleSet,
    options: ClassifyOptions,
    progress_callback: Option<ClassifyProgressCallback>,
) -> Result<Vec<ClassifiedPost>, String> {
    let total = posts.len();

    if let Some(ref callback) = progress_callback {
        callback(format!("Classifying {} posts", total));
    }

    // Set up single progress bar for overall progress (only if enabled)
    let progress_bar = if options.show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting classification...");
        Some(Arc::new(pb))
    } else {
        None
    };

    // Counter for tracking processed posts
    let processed_count = Arc::new(std::sync::atomic::AtomicUsize::new(0));

    // Progress callback for worker updates (only if progress bars enabled)
    let internal_progress_callback: harmwatch_engine::classifier::ProgressCallback =
        if options.show_progress_bars {
            let pb_clone = progress_bar.clone().unwrap();
            let count_clone = processed_count.clone();
            Arc::new(move |_worker_id: usize, _text: String| {
                let count = count_clone.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
                pb_clone.set_message(format!("Classifying... {}/{} posts", count, total));
                pb_clone.tick();
            })
        } else {
            // No-op callback when progress bars are disabled
            Arc::new(|_worker_id: usize, _text: String| {})
        };

    let classifier = Classifier::new(rules).with_progress_callback(internal_progress_callback);

    let texts: Vec<String> = posts.iter().map(|p| p.text.clone()).collect();
    let results = classifier
        .classify_batch(texts, options.workers)
        .await
        .map_err(|e| format!("Classification failed: {}", e))?;

    // Finish progress bar (only if enabled)
    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("Classification complete! {} posts processed", total));
    }

    // Results come back in input order, so they pair up with the posts.
    let classified = posts
        .into_iter()
        .zip(results)
        .map(|(post, result)| ClassifiedPost::new(post, result))
        .collect();

    Ok(classified)
}

/// Generate a terminal summary of a classified batch
pub fn generate_classification_summary(posts: &[ClassifiedPost]) -> String {
    let flagged: Vec<&ClassifiedPost> = posts.iter().filter(|p| p.is_flagged()).collect();

    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Posts classified: {}\n", posts.len()));
    report.push_str(&format!(
        "  Flagged (high & medium risk): {}\n",
        flagged.len()
    ));

    let with_domains = posts.iter().filter(|p| !p.domains.is_empty()).count();
    report.push_str(&format!("  Posts containing links: {}\n", with_domains));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Category distribution, priority order, Neutral last
    report.push_str("## Category distribution\n\n");
    for category in Category::ALL {
        let count = posts.iter().filter(|p| p.category == category).count();
        if count == 0 {
            continue;
        }

        // Color code by the risk level attached to the category
        let risk = posts
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.risk.as_str())
            .unwrap_or("low");
        let count_str = match risk {
            "high" => format!("\x1b[31m{:>5}\x1b[0m", count),   // Red
            "medium" => format!("\x1b[33m{:>5}\x1b[0m", count), // Orange/Yellow
            _ => format!("\x1b[32m{:>5}\x1b[0m", count),        // Green
        };

        report.push_str(&format!("  {} {}\n", count_str, category.as_str()));
    }

    // Flagged examples, highest risk first
    if !flagged.is_empty() {
        report.push_str("\n## Flagged examples\n\n");

        let mut ordered = flagged.clone();
        ordered.sort_by_key(|p| match p.risk.as_str() {
            "high" => 0,
            "medium" => 1,
            _ => 2,
        });

        for post in ordered.iter().take(10) {
            let marker = if post.risk.as_str() == "high" {
                "\x1b[31m[high]\x1b[0m  "
            } else {
                "\x1b[33m[medium]\x1b[0m"
            };
            report.push_str(&format!(
                "  {} {:<20} {}\n",
                marker,
                post.category.as_str(),
                truncate(&post.post.text, 60)
            ));
        }

        if ordered.len() > 10 {
            report.push_str(&format!("  ... and {} more\n", ordered.len() - 10));
        }
    }

    report
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
