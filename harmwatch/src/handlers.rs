use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use harmwatch_core::batch::{
    ClassifyOptions, ClassifyProgressCallback, execute_classification,
    generate_classification_summary,
};
use harmwatch_core::data::Database;
use harmwatch_core::ingest::load_posts_from_csv;
use harmwatch_core::report::{self, ReportData, ReportFormat};
use harmwatch_engine::rules::RuleSet;
use tracing::info;

pub const SAMPLE_POSTS: &str = include_str!("../data/sample_posts.csv");

const DEFAULT_CONFIG_DIR: &str = "~/.config/harmwatch/";
const DB_FILE_NAME: &str = "harmwatch.db";

// Helper functions shared by the handlers

/// Resolve the database file from an optional --db argument.
pub fn resolve_db_path(db_arg: Option<&String>) -> PathBuf {
    match db_arg {
        Some(path) => PathBuf::from(shellexpand::tilde(path).as_ref()),
        None => {
            let expanded = shellexpand::tilde(DEFAULT_CONFIG_DIR);
            Path::new(expanded.as_ref()).join(DB_FILE_NAME)
        }
    }
}

/// Render report data in the requested format.
pub fn render_report(data: &ReportData, format: &ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Text => report::generate_text_report(data),
        ReportFormat::Json => {
            report::generate_json_report(data).context("Failed to render JSON report")?
        }
        ReportFormat::Csv => report::generate_csv_report(data).map_err(|e| anyhow!(e))?,
        ReportFormat::Html => report::generate_html_report(data),
        ReportFormat::Markdown => report::generate_markdown_report(data),
    })
}

fn parse_format(args: &ArgMatches) -> Result<ReportFormat> {
    let raw = args
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("text");
    ReportFormat::from_str(raw).ok_or_else(|| anyhow!("Unknown report format: {}", raw))
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

fn print_prompt(msg: &str) -> String {
    print!("{} ", msg.bright_cyan().bold());
    io::stdout().flush().unwrap();
    let mut response = String::new();
    io::stdin().read_line(&mut response).unwrap();
    response.trim().to_lowercase()
}

pub fn handle_init(args: &ArgMatches) {
    print_divider();
    println!("{}", "  HARMWATCH INITIALIZATION".bright_white().bold());
    print_divider();
    println!();

    let config_path = args.get_one::<String>("PATH").unwrap();
    let force = args.get_flag("force");
    let expanded_config_dir = shellexpand::tilde(config_path);
    let harmwatch_config_dir = Path::new(expanded_config_dir.as_ref());
    let db_loc = harmwatch_config_dir.join(DB_FILE_NAME);
    let db_path = db_loc.as_path();

    println!("{} Parsed arguments", "✓".green().bold());
    println!(
        "{} Target: {}",
        "→".blue(),
        harmwatch_config_dir.display().to_string().bright_white()
    );
    println!();

    let dir_exists = harmwatch_config_dir.exists();
    let data_dir = harmwatch_config_dir.join("data");
    let sample_path = data_dir.join("sample_posts.csv");
    let sample_exists = sample_path.exists();

    // Check for existing installation
    if (dir_exists || sample_exists) && !force {
        println!("{}", "⚠ WARNING".yellow().bold());
        println!("Configuration directory already exists:");
        if dir_exists {
            println!(
                "  {} {}",
                "•".yellow(),
                harmwatch_config_dir.display().to_string().bright_white()
            );
        }
        if sample_exists {
            println!(
                "  {} {}",
                "•".yellow(),
                sample_path.display().to_string().bright_white()
            );
        }
        println!();
        println!(
            "{}",
            "This operation will overwrite existing files.".yellow()
        );

        let response = print_prompt("Do you want to continue? [y/N]:");
        println!();

        if response != "y" && response != "yes" {
            println!("{} Initialization cancelled.", "✗".red().bold());
            return;
        }
        println!("{} Proceeding with overwrite", "→".yellow().bold());
        println!();
    }

    // Sample dataset installation prompt
    let install_sample = if !force {
        println!("{}", "SAMPLE DATA SETUP".bright_blue().bold());
        println!("HarmWatch includes a small sample dataset of posts.");
        println!(
            "{} {}",
            "Target:".blue(),
            sample_path.display().to_string().bright_white()
        );
        println!();

        let response = print_prompt("Would you like to install it? [Y/n]:");
        println!();

        response != "n" && response != "no"
    } else {
        true
    };

    // Create configuration assets
    if install_sample {
        create_configuration_assets(harmwatch_config_dir, &data_dir, &sample_path);
    } else {
        println!("{} Skipping sample dataset installation", "→".blue());
        fs::create_dir_all(harmwatch_config_dir).expect("Failed to create config directory");
        println!(
            "{} Manual dataset location: {}",
            "ℹ".blue(),
            data_dir.display().to_string().bright_white()
        );
        println!();
    }

    // Handle existing database in force mode
    if force && Database::exists(db_path) {
        println!(
            "{} Deleting existing database (force mode)",
            "→".yellow().bold()
        );
        Database::drop(db_path);
        println!("{} Existing database removed", "✓".green().bold());
        println!();
    }

    // Database creation
    if Database::exists(db_path) && !force {
        println!("{}", "⚠ WARNING".yellow().bold());
        println!("Database already exists at:");
        println!(
            "  {} {}",
            "•".yellow(),
            db_path.display().to_string().bright_white()
        );
        println!();

        let response = print_prompt("Would you like to overwrite it? [Y/n]:");
        println!();

        if response == "n" || response == "no" {
            println!("{} Keeping existing database", "→".blue());
            println!();
        } else {
            Database::drop(db_path);
            println!("{} Existing database removed", "✓".green().bold());
            println!();
        }
    }

    if !Database::exists(db_path) {
        println!("{} Creating database...", "→".blue());
        Database::new(db_path).expect("Failed to create database");
        println!(
            "{} Database initialized: {}",
            "✓".green().bold(),
            db_path.display().to_string().bright_white()
        );
    }

    println!();
    print_divider();
    println!("{}", "  INITIALIZATION COMPLETE".green().bold());
    print_divider();
    println!();
    println!(
        "{} Config directory: {}",
        "✓".green().bold(),
        harmwatch_config_dir.display().to_string().bright_white()
    );
    println!(
        "{} Database: {}",
        "✓".green().bold(),
        db_path.display().to_string().bright_white()
    );
    if install_sample {
        println!(
            "{} Sample dataset: {}",
            "✓".green().bold(),
            sample_path.display().to_string().bright_white()
        );
    }
    println!();
}

fn create_configuration_assets(config_dir: &Path, data_dir: &PathBuf, sample_path: &PathBuf) {
    println!("{} Creating directory structure...", "→".blue());

    fs::create_dir_all(config_dir).expect("Failed to create config directory");
    println!(
        "  {} {}",
        "✓".green(),
        config_dir.display().to_string().bright_white()
    );

    fs::create_dir_all(data_dir).expect("Failed to create data directory");
    println!(
        "  {} {}",
        "✓".green(),
        data_dir.display().to_string().bright_white()
    );

    println!("{} Installing sample dataset...", "→".blue());
    fs::write(sample_path, SAMPLE_POSTS).expect("Failed to write sample dataset");

    let sample_size = SAMPLE_POSTS.len();
    let row_count = SAMPLE_POSTS.lines().count().saturating_sub(1);
    println!(
        "  {} {} ({} posts, {} bytes)",
        "✓".green().bold(),
        sample_path.display().to_string().bright_white(),
        row_count.to_string().cyan(),
        sample_size.to_string().cyan()
    );
    println!();
}

pub async fn handle_classify(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    if let Err(e) = run_classify(sub_matches).await {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

async fn run_classify(args: &ArgMatches) -> Result<()> {
    let input = args.get_one::<PathBuf>("input").unwrap();
    let threads = *args.get_one::<usize>("threads").unwrap_or(&4);
    let output = args.get_one::<PathBuf>("output");
    let export = args.get_one::<PathBuf>("export");
    let save = args.get_flag("save");
    let db_arg = args.get_one::<String>("db");
    let include_trend = args.get_flag("include-trend");
    let format = parse_format(args)?;

    // Fail fast on malformed input before anything reaches the classifier
    let posts = load_posts_from_csv(input).map_err(|e| anyhow!(e))?;
    info!("Loaded {} posts from {}", posts.len(), input.display());

    println!(
        "\n📋 Classifying {} post(s) from {}",
        posts.len(),
        input.display()
    );
    println!("Workers: {}\n", threads);

    let options = ClassifyOptions {
        workers: threads,
        show_progress_bars: true,
    };
    let progress_callback: ClassifyProgressCallback = Arc::new(|msg: String| {
        println!("{}", msg);
    });

    let classified =
        execute_classification(posts, RuleSet::builtin(), options, Some(progress_callback))
            .await
            .map_err(|e| anyhow!(e))?;

    println!("\n✓ Classification complete!\n");
    print!("{}", generate_classification_summary(&classified));

    if let Some(export_path) = export {
        let file = fs::File::create(export_path)
            .with_context(|| format!("Failed to create {}", export_path.display()))?;
        report::write_classified_csv(&classified, file).map_err(|e| anyhow!(e))?;
        println!(
            "\n{} Classified table exported to {}",
            "✓".green().bold(),
            export_path.display().to_string().bright_white()
        );
    }

    let source = input.display().to_string();

    let run_id = if save {
        let db_path = resolve_db_path(db_arg);
        if !Database::exists(&db_path) {
            bail!(
                "No database found at {}. Run 'harmwatch init' first.",
                db_path.display()
            );
        }
        let db = Database::new(&db_path)
            .with_context(|| format!("Failed to open database {}", db_path.display()))?;

        let run_id = db.create_run(&source).context("Failed to create run")?;
        match db.insert_posts(&run_id, &classified) {
            Ok(count) => {
                db.complete_run(&run_id).context("Failed to complete run")?;
                println!(
                    "\n{} Saved {} posts to run {}",
                    "✓".green().bold(),
                    count,
                    run_id.bright_white()
                );
            }
            Err(e) => {
                db.fail_run(&run_id).ok();
                return Err(e).context("Failed to save posts");
            }
        }
        Some(run_id)
    } else {
        None
    };

    if let Some(output_path) = output {
        let run_label = run_id.as_deref().unwrap_or("unsaved");
        let data = report::build_report_data(run_label, &classified, &source, include_trend);
        let content = render_report(&data, &format)?;
        report::save_report(&content, output_path)
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
        println!(
            "\n{} Report saved to {}",
            "✓".green().bold(),
            output_path.display().to_string().bright_white()
        );
    }

    Ok(())
}

pub fn handle_report(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    if let Err(e) = run_report(sub_matches) {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run_report(args: &ArgMatches) -> Result<()> {
    let run_arg = args.get_one::<String>("run");
    let db_arg = args.get_one::<String>("db");
    let output = args.get_one::<PathBuf>("output");
    let include_trend = args.get_flag("include-trend");
    let flagged_only = args.get_flag("flagged-only");
    let format = parse_format(args)?;

    let db_path = resolve_db_path(db_arg);
    if !Database::exists(&db_path) {
        bail!(
            "No database found at {}. Run 'harmwatch init' first.",
            db_path.display()
        );
    }
    let db = Database::new(&db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let run_id = match run_arg {
        Some(id) => id.clone(),
        None => db
            .latest_run_id()
            .context("Failed to look up runs")?
            .ok_or_else(|| anyhow!("No classification runs stored yet"))?,
    };

    if flagged_only {
        let flagged = db
            .get_flagged_by_run(&run_id, 50)
            .context("Failed to query flagged posts")?;

        if flagged.is_empty() {
            println!("No flagged posts in run {}", run_id);
            return Ok(());
        }

        println!("Flagged posts in run {} (highest risk first):\n", run_id);
        for (id, text, category, risk, _platform, _date) in flagged {
            let marker = if risk == "high" {
                format!("[{}]  ", risk).red().bold()
            } else {
                format!("[{}]", risk).yellow()
            };
            println!("  {} #{:<4} {:<20} {}", marker, id, category, text);
        }
        return Ok(());
    }

    let data = report::gather_report_data(&db, &run_id, include_trend)
        .with_context(|| format!("Failed to gather report data for run {}", run_id))?;
    let content = render_report(&data, &format)?;

    match output {
        Some(path) => {
            report::save_report(&content, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}
