pub mod batch;
pub mod data;
pub mod ingest;
pub mod report;

pub use data::{ClassifiedPost, Database, Post};

pub fn print_banner() {
    println!(
        r#"
 _  _                   __      __    _      _
| || |__ _ _ _ _ __  ___\ \    / /_ _| |_ __| |_
| __ / _` | '_| '  \|___|\ \/\/ / _` |  _/ _| ' \
|_||_\__,_|_| |_|_|_|     \_/\_/\__,_|\__\__|_||_|
"#
    );
    println!(
        "HarmWatch v{} - rule-based social harm analyzer",
        env!("CARGO_PKG_VERSION")
    );
    println!("For research and education. Respect platform policies and user privacy.\n");
}
