use crate::CLAP_STYLING;
use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("harmwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("harmwatch")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Initializes the harmwatch database on your filesystem")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Location to store the harmwatch database")
                        .default_value("~/.config/harmwatch/"),
                )
                .arg(
                    arg!(-f --"force")
                        .help(
                            "Forces the overwriting of any existing database at the specified \
                        location.",
                        )
                        .required(false),
                ),
        )
        .subcommand(
            command!("classify")
                .about(
                    "Classify a CSV batch of posts with the built-in rule tables. Optionally \
                persists the run and renders a report.",
                )
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(true)
                        .help("Path to a CSV file with at least a 'text' column")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-t --"threads" <NUM_WORKERS>)
                        .required(false)
                        .help("The number of async worker 'threads' in the worker pool.")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("4"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save a report to file (default: display summary to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, csv, html, markdown")
                        .value_parser(["text", "json", "csv", "html", "markdown"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"export" <PATH>)
                        .required(false)
                        .help("Export the full classified table as CSV")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"save")
                        .required(false)
                        .help("Persist the classified run to the database")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"db" <PATH>)
                        .required(false)
                        .help("Database file (default: ~/.config/harmwatch/harmwatch.db)"),
                )
                .arg(
                    arg!(--"include-trend")
                        .required(false)
                        .help("Include the trend-over-time section in the report")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("report")
                .about("Generate a report from a stored classification run")
                .arg(
                    arg!(-r --"run" <RUN_ID>)
                        .required(false)
                        .help("Run to report on (default: the latest run)"),
                )
                .arg(
                    arg!(--"db" <PATH>)
                        .required(false)
                        .help("Database file (default: ~/.config/harmwatch/harmwatch.db)"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, csv, html, markdown")
                        .value_parser(["text", "json", "csv", "html", "markdown"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"include-trend")
                        .required(false)
                        .help("Include the trend-over-time section in the report")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"flagged-only")
                        .required(false)
                        .help("List only the flagged posts instead of the full report")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
