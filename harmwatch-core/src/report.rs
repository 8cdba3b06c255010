// Report generation from the database or from an in-memory batch

use crate::data::{ClassifiedPost, Database};
use chrono::NaiveDate;
use rusqlite::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of flagged examples carried into a report.
const FLAGGED_LIMIT: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Html,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "html" => Some(ReportFormat::Html),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub run_id: String,
    pub total_posts: usize,
    pub category_counts: Vec<CategoryCount>,
    pub risk_counts: RiskCounts,
    pub flagged: Vec<FlaggedPost>,
    pub run_info: RunInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<TrendPoint>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCounts {
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedPost {
    pub id: i64,
    pub text: String,
    pub category: String,
    pub risk_level: String,
    pub platform: String,
    pub date: String,
}

/// One point of the trend-over-time view: posts of one category on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInfo {
    pub started_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<i64>,
    pub status: String,
    pub source: String,
}

/// Assemble report data for a stored run.
pub fn gather_report_data(db: &Database, run_id: &str, include_trend: bool) -> Result<ReportData> {
    // Get run info
    let run_info = {
        let conn = db.get_connection();
        let mut stmt = conn.prepare(
            "SELECT started_at, finished_at, status, source FROM classification_runs WHERE id = ?1",
        )?;

        stmt.query_row([run_id], |row| {
            Ok(RunInfo {
                started_at: row.get(0)?,
                finished_at: row.get(1)?,
                status: row.get(2)?,
                source: row.get(3)?,
            })
        })?
    };

    // Get post count
    let posts = db.get_posts_by_run(run_id)?;
    let total_posts = posts.len();

    // Get category distribution
    let category_counts = db
        .get_category_counts(run_id)?
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    // Get risk counts
    let mut risk_counts = RiskCounts {
        high: 0,
        medium: 0,
        low: 0,
    };
    for (risk, count) in db.get_risk_counts(run_id)? {
        match risk.as_str() {
            "high" => risk_counts.high = count,
            "medium" => risk_counts.medium = count,
            "low" => risk_counts.low = count,
            _ => {}
        }
    }

    // Get flagged examples
    let flagged = db
        .get_flagged_by_run(run_id, FLAGGED_LIMIT)?
        .into_iter()
        .map(
            |(id, text, category, risk_level, platform, date)| FlaggedPost {
                id,
                text,
                category,
                risk_level,
                platform,
                date,
            },
        )
        .collect();

    // Optionally gather the trend series
    let trend = if include_trend {
        let pairs = db.get_dated_posts_by_run(run_id)?;
        Some(trend_from_pairs(pairs.into_iter()))
    } else {
        None
    };

    Ok(ReportData {
        run_id: run_id.to_string(),
        total_posts,
        category_counts,
        risk_counts,
        flagged,
        run_info,
        trend,
    })
}

/// Assemble report data straight from an in-memory batch, without touching
/// a database. Used when a report is requested right after classification.
pub fn build_report_data(
    run_id: &str,
    posts: &[ClassifiedPost],
    source: &str,
    include_trend: bool,
) -> ReportData {
    let now = chrono::Utc::now().timestamp();

    let mut category_counts: Vec<CategoryCount> = Vec::new();
    for category in harmwatch_engine::rules::Category::ALL {
        let count = posts.iter().filter(|p| p.category == category).count() as i64;
        if count > 0 {
            category_counts.push(CategoryCount {
                category: category.as_str().to_string(),
                count,
            });
        }
    }
    // Same presentation order as the database path
    category_counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.category.cmp(&b.category)));

    let mut risk_counts = RiskCounts {
        high: 0,
        medium: 0,
        low: 0,
    };
    for post in posts {
        match post.risk.as_str() {
            "high" => risk_counts.high += 1,
            "medium" => risk_counts.medium += 1,
            _ => risk_counts.low += 1,
        }
    }

    let mut flagged: Vec<FlaggedPost> = posts
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_flagged())
        .map(|(index, p)| FlaggedPost {
            id: index as i64 + 1,
            text: p.post.text.clone(),
            category: p.category.as_str().to_string(),
            risk_level: p.risk.as_str().to_string(),
            platform: p.post.platform.clone(),
            date: p.post.date.clone(),
        })
        .collect();
    flagged.sort_by_key(|p| (if p.risk_level == "high" { 0 } else { 1 }, p.id));
    flagged.truncate(FLAGGED_LIMIT);

    let trend = if include_trend {
        Some(trend_from_pairs(posts.iter().map(|p| {
            (p.post.date.clone(), p.category.as_str().to_string())
        })))
    } else {
        None
    };

    ReportData {
        run_id: run_id.to_string(),
        total_posts: posts.len(),
        category_counts,
        risk_counts,
        flagged,
        run_info: RunInfo {
            started_at: now,
            finished_at: Some(now),
            status: "completed".to_string(),
            source: source.to_string(),
        },
        trend,
    }
}

/// Bucket (raw date, category) pairs into per-day per-category counts.
/// Malformed dates never error; they just drop out of the trend.
fn trend_from_pairs(pairs: impl Iterator<Item = (String, String)>) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<(String, String), i64> = BTreeMap::new();

    for (raw_date, category) in pairs {
        if let Some(day) = parse_post_date(&raw_date) {
            let key = (day.format("%Y-%m-%d").to_string(), category);
            *buckets.entry(key).or_insert(0) += 1;
        }
    }

    buckets
        .into_iter()
        .map(|((day, category), count)| TrendPoint {
            day,
            category,
            count,
        })
        .collect()
}

/// Lenient date parsing for user-supplied date columns.
fn parse_post_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.date());
        }
    }

    for format in ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    None
}

pub fn generate_text_report(data: &ReportData) -> String {
    let mut report = String::new();

    // Header
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                      HARMWATCH CLASSIFICATION REPORT\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Run info
    report.push_str(&format!("Run ID:       {}\n", data.run_id));
    report.push_str(&format!("Status:       {}\n", data.status_to_string()));
    report.push_str(&format!(
        "Run Date:     {}\n",
        data.format_timestamp(data.run_info.started_at)
    ));

    if let Some(finished_at) = data.run_info.finished_at {
        let duration = finished_at - data.run_info.started_at;
        report.push_str(&format!("Duration:     {} seconds\n", duration));
    }

    report.push_str(&format!("Source:       {}\n", data.run_info.source));
    report.push_str(&format!("Posts:        {}\n", data.total_posts));
    report.push_str("\n");

    // Executive Summary
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("EXECUTIVE SUMMARY\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    let flagged_total = data.risk_counts.high + data.risk_counts.medium;
    report.push_str(&format!("Flagged Posts: {}\n\n", flagged_total));

    if data.risk_counts.high > 0 {
        report.push_str(&format!(
            "  [HIGH]   {}  (Strong harm signals)\n",
            data.risk_counts.high
        ));
    }
    if data.risk_counts.medium > 0 {
        report.push_str(&format!(
            "  [MEDIUM] {}  (Needs review)\n",
            data.risk_counts.medium
        ));
    }
    if data.risk_counts.low > 0 {
        report.push_str(&format!(
            "  [LOW]    {}  (No harm signals)\n",
            data.risk_counts.low
        ));
    }
    report.push_str("\n");

    // Category distribution
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("CATEGORY DISTRIBUTION\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for entry in &data.category_counts {
        let share = if data.total_posts > 0 {
            entry.count as f64 * 100.0 / data.total_posts as f64
        } else {
            0.0
        };
        report.push_str(&format!(
            "  {:<22} {:>5}  ({:>5.1}%)\n",
            entry.category, entry.count, share
        ));
    }
    report.push_str("\n");

    // Include trend if present
    if let Some(ref trend) = data.trend {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("TREND OVER TIME\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

        if trend.is_empty() {
            report.push_str("  (no parseable dates in this run)\n");
        } else {
            for point in trend {
                report.push_str(&format!(
                    "  {}  {:<22} {:>5}\n",
                    point.day, point.category, point.count
                ));
            }
        }
        report.push_str("\n");
    }

    // Flagged examples
    if !data.flagged.is_empty() {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("FLAGGED EXAMPLES\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

        for (idx, post) in data.flagged.iter().enumerate() {
            report.push_str(&format!(
                "[{}] {} ({})\n",
                idx + 1,
                post.category,
                post.risk_level.to_uppercase()
            ));

            if !post.platform.is_empty() {
                report.push_str(&format!("Platform:     {}\n", post.platform));
            }
            if !post.date.is_empty() {
                report.push_str(&format!("Date:         {}\n", post.date));
            }

            report.push_str("\n");
            report.push_str(&wrap_text(&post.text, 80, "  "));
            report.push_str("\n");
            report.push_str("────────────────────────────────────────────────────────────────────────────────\n\n");
        }
    }

    // Footer
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                          End of Report\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("\nGenerated by HarmWatch - a rule-based social harm analyzer\n");
    report.push_str("For research and education. Respect platform policies and user privacy.\n\n");

    report
}

pub fn generate_json_report(data: &ReportData) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "HarmWatch",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json",
                "disclaimer": "Rule-based detection for research and education"
            },
            "run": {
                "id": data.run_id,
                "status": data.run_info.status,
                "started_at": format_iso8601_timestamp(data.run_info.started_at),
                "finished_at": data.run_info.finished_at.map(format_iso8601_timestamp),
                "duration_seconds": data.run_info.finished_at.map(|end| end - data.run_info.started_at),
                "source": data.run_info.source
            },
            "summary": {
                "total_posts": data.total_posts,
                "flagged_posts": data.risk_counts.high + data.risk_counts.medium,
                "risk_breakdown": {
                    "high": data.risk_counts.high,
                    "medium": data.risk_counts.medium,
                    "low": data.risk_counts.low
                },
                "category_distribution": data.category_counts
            },
            "flagged": data.flagged,
            "trend": data.trend.as_ref().map(|points| {
                serde_json::json!({
                    "total_points": points.len(),
                    "points": points
                })
            })
        }
    });

    serde_json::to_string_pretty(&json_report)
}

/// CSV review sheet of the flagged examples.
pub fn generate_csv_report(data: &ReportData) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["id", "category", "risk_level", "platform", "date", "text"])
        .map_err(|e| format!("Failed to write CSV report: {}", e))?;

    for post in &data.flagged {
        writer
            .write_record([
                post.id.to_string().as_str(),
                &post.category,
                &post.risk_level,
                &post.platform,
                &post.date,
                &post.text,
            ])
            .map_err(|e| format!("Failed to write CSV report: {}", e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV report: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV report was not valid UTF-8: {}", e))
}

pub fn generate_markdown_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str("# HarmWatch Classification Report\n\n");
    report.push_str(&format!("- **Run ID**: {}\n", data.run_id));
    report.push_str(&format!("- **Status**: {}\n", data.status_to_string()));
    report.push_str(&format!(
        "- **Run Date**: {}\n",
        data.format_timestamp(data.run_info.started_at)
    ));
    report.push_str(&format!("- **Source**: {}\n", data.run_info.source));
    report.push_str(&format!("- **Posts**: {}\n\n", data.total_posts));

    report.push_str("## Summary\n\n");
    report.push_str("| Risk | Posts |\n|------|-------|\n");
    report.push_str(&format!("| high | {} |\n", data.risk_counts.high));
    report.push_str(&format!("| medium | {} |\n", data.risk_counts.medium));
    report.push_str(&format!("| low | {} |\n\n", data.risk_counts.low));

    report.push_str("## Category distribution\n\n");
    report.push_str("| Category | Posts |\n|----------|-------|\n");
    for entry in &data.category_counts {
        report.push_str(&format!("| {} | {} |\n", entry.category, entry.count));
    }
    report.push_str("\n");

    if let Some(ref trend) = data.trend {
        report.push_str("## Trend over time\n\n");
        if trend.is_empty() {
            report.push_str("No parseable dates in this run.\n\n");
        } else {
            report.push_str("| Day | Category | Posts |\n|-----|----------|-------|\n");
            for point in trend {
                report.push_str(&format!(
                    "| {} | {} | {} |\n",
                    point.day, point.category, point.count
                ));
            }
            report.push_str("\n");
        }
    }

    if !data.flagged.is_empty() {
        report.push_str("## Flagged examples\n\n");
        for (idx, post) in data.flagged.iter().enumerate() {
            report.push_str(&format!(
                "{}. **{}** ({}): {}\n",
                idx + 1,
                post.category,
                post.risk_level,
                post.text.replace('\n', " ")
            ));
        }
        report.push_str("\n");
    }

    report.push_str("---\n\nGenerated by HarmWatch. For research and education only.\n");

    report
}

pub fn generate_html_report(data: &ReportData) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>HarmWatch Report - {}</title>\n",
        escape_html(&data.run_id)
    ));
    html.push_str(
        "<style>\nbody { font-family: sans-serif; margin: 2em; color: #222; }\n\
         table { border-collapse: collapse; margin-bottom: 1.5em; }\n\
         th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: left; }\n\
         th { background: #f0f0f0; }\n\
         .high { color: #b00020; font-weight: bold; }\n\
         .medium { color: #b36b00; }\n\
         .low { color: #2e7d32; }\n\
         footer { margin-top: 2em; color: #777; font-size: 0.9em; }\n\
         </style>\n</head>\n<body>\n",
    );

    html.push_str("<h1>HarmWatch Classification Report</h1>\n");
    html.push_str(&format!(
        "<p>Run <code>{}</code> ({}), source <code>{}</code>, generated {}.</p>\n",
        escape_html(&data.run_id),
        escape_html(data.status_to_string()),
        escape_html(&data.run_info.source),
        data.format_timestamp(data.run_info.started_at)
    ));

    html.push_str("<h2>Summary</h2>\n<table>\n<tr><th>Risk</th><th>Posts</th></tr>\n");
    html.push_str(&format!(
        "<tr><td class=\"high\">high</td><td>{}</td></tr>\n",
        data.risk_counts.high
    ));
    html.push_str(&format!(
        "<tr><td class=\"medium\">medium</td><td>{}</td></tr>\n",
        data.risk_counts.medium
    ));
    html.push_str(&format!(
        "<tr><td class=\"low\">low</td><td>{}</td></tr>\n",
        data.risk_counts.low
    ));
    html.push_str(&format!(
        "<tr><th>total</th><th>{}</th></tr>\n</table>\n",
        data.total_posts
    ));

    html.push_str("<h2>Category distribution</h2>\n<table>\n<tr><th>Category</th><th>Posts</th></tr>\n");
    for entry in &data.category_counts {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&entry.category),
            entry.count
        ));
    }
    html.push_str("</table>\n");

    if let Some(ref trend) = data.trend {
        html.push_str("<h2>Trend over time</h2>\n");
        if trend.is_empty() {
            html.push_str("<p>No parseable dates in this run.</p>\n");
        } else {
            html.push_str("<table>\n<tr><th>Day</th><th>Category</th><th>Posts</th></tr>\n");
            for point in trend {
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&point.day),
                    escape_html(&point.category),
                    point.count
                ));
            }
            html.push_str("</table>\n");
        }
    }

    html.push_str("<h2>Flagged examples</h2>\n");
    if data.flagged.is_empty() {
        html.push_str("<p>No flagged posts in this run.</p>\n");
    } else {
        html.push_str(
            "<table>\n<tr><th>#</th><th>Category</th><th>Risk</th><th>Platform</th><th>Date</th><th>Text</th></tr>\n",
        );
        for (idx, post) in data.flagged.iter().enumerate() {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                idx + 1,
                escape_html(&post.category),
                escape_html(&post.risk_level),
                escape_html(&post.risk_level),
                escape_html(&post.platform),
                escape_html(&post.date),
                escape_html(&post.text)
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str(
        "<footer>Generated by HarmWatch. Rule-based detection for research and education; \
         respect platform policies and user privacy.</footer>\n",
    );
    html.push_str("</body>\n</html>\n");

    html
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Export the full classified table as CSV, one row per post.
pub fn write_classified_csv<W: Write>(posts: &[ClassifiedPost], writer: W) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record([
            "text",
            "platform",
            "date",
            "author_id",
            "url",
            "clean_text",
            "domains",
            "category",
            "risk_level",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for post in posts {
        let domains_json =
            serde_json::to_string(&post.domains).unwrap_or_else(|_| "[]".to_string());
        writer
            .write_record([
                post.post.text.as_str(),
                &post.post.platform,
                &post.post.date,
                &post.post.author_id,
                &post.post.url,
                &post.clean_text,
                &domains_json,
                post.category.as_str(),
                post.risk.as_str(),
            ])
            .map_err(|e| format!("Failed to write CSV row: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush CSV: {}", e))
}

// Helper functions
impl ReportData {
    fn status_to_string(&self) -> &str {
        match self.run_info.status.as_str() {
            "completed" => "Completed",
            "failed" => "Failed",
            "running" => "Running",
            _ => "Unknown",
        }
    }

    fn format_timestamp(&self, timestamp: i64) -> String {
        use chrono::{DateTime, Utc};
        let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now);
        datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

fn format_iso8601_timestamp(timestamp: i64) -> String {
    use chrono::{DateTime, Utc};
    let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now);
    datetime.to_rfc3339()
}

fn wrap_text(text: &str, width: usize, indent: &str) -> String {
    let mut result = String::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.len() + word.len() + 1 > width - indent.len() {
            if !current_line.is_empty() {
                result.push_str(indent);
                result.push_str(&current_line);
                result.push('\n');
                current_line.clear();
            }
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() {
        result.push_str(indent);
        result.push_str(&current_line);
        result.push('\n');
    }

    result
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
