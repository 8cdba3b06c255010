// CSV ingestion. The only hard requirement on an input batch is a `text`
// column; everything else is optional passthrough.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::Post;

const OPTIONAL_COLUMNS: [&str; 4] = ["platform", "date", "author_id", "url"];

/// Load posts from a CSV file. Fails fast with a clear message when the
/// `text` column is missing, before anything reaches the classifier.
pub fn load_posts_from_csv(path: &Path) -> Result<Vec<Post>, String> {
    let file = File::open(path)
        .map_err(|e| format!("Failed to open input file {}: {}", path.display(), e))?;

    load_posts_from_reader(file)
        .map_err(|e| format!("{} (while reading {})", e, path.display()))
}

/// Reader-based variant so tests and other callers can feed in-memory CSV.
pub fn load_posts_from_reader<R: Read>(reader: R) -> Result<Vec<Post>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| format!("Failed to read CSV headers: {}", e))?
        .clone();

    let text_column = headers
        .iter()
        .position(|h| h == "text")
        .ok_or_else(|| "CSV must contain a 'text' column".to_string())?;

    let optional_columns: Vec<Option<usize>> = OPTIONAL_COLUMNS
        .iter()
        .map(|name| headers.iter().position(|h| h == *name))
        .collect();

    let mut posts = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| format!("Failed to parse CSV record: {}", e))?;

        let field = |column: Option<usize>| -> String {
            column
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };

        posts.push(Post {
            text: record.get(text_column).unwrap_or("").to_string(),
            platform: field(optional_columns[0]),
            date: field(optional_columns[1]),
            author_id: field(optional_columns[2]),
            url: field(optional_columns[3]),
        });
    }

    Ok(posts)
}
