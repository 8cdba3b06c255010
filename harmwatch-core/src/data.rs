use rusqlite::{Connection, OptionalExtension, Result, params};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use harmwatch_engine::result::RecordResult;
use harmwatch_engine::rules::{Category, RiskLevel};

pub struct Database {
    conn: Connection,
}

/// One input row. `text` is the only field the engine ever inspects; the
/// rest are passed through untouched for display and export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub url: String,
}

impl Post {
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

/// A post with its classification attached, ready for display, persistence
/// or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPost {
    pub post: Post,
    pub clean_text: String,
    pub domains: Vec<String>,
    pub category: Category,
    pub risk: RiskLevel,
}

impl ClassifiedPost {
    pub fn new(post: Post, result: RecordResult) -> Self {
        Self {
            post,
            clean_text: result.clean_text,
            domains: result.domains,
            category: result.category,
            risk: result.risk,
        }
    }

    /// High and medium risk posts are surfaced for review.
    pub fn is_flagged(&self) -> bool {
        self.risk.is_flagged()
    }
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

impl Database {
    pub fn drop(path: &Path) {
        fs::remove_file(path).unwrap();
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            PRAGMA foreign_keys = ON;
            ",
        )?;

        let db = Database { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            -- Classification runs
            CREATE TABLE IF NOT EXISTS classification_runs (
    id TEXT PRIMARY KEY,
    started_at INTEGER NOT NULL,
    finished_at INTEGER,
    status TEXT NOT NULL CHECK(status IN ('running', 'completed', 'failed')),
    source TEXT NOT NULL
);

-- Classified posts
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id TEXT NOT NULL,

    -- Input row, passthrough fields included
    text TEXT NOT NULL,
    platform TEXT,
    date TEXT,
    author_id TEXT,
    url TEXT,

    -- Derived values
    clean_text TEXT NOT NULL,
    domains TEXT,             -- JSON array of hostnames

    -- Classification
    category TEXT NOT NULL CHECK(category IN (
        'Scam/Phishing',
        'Hacking/Exploit',
        'Hate Speech',
        'Cyberbullying',
        'Misinformation',
        'Privacy Risk',
        'Mental Health Risk',
        'Neutral'
    )),
    risk_level TEXT NOT NULL CHECK(risk_level IN ('high', 'medium', 'low')),

    classified_at INTEGER NOT NULL,

    FOREIGN KEY(run_id) REFERENCES classification_runs(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_posts_run ON posts(run_id);
CREATE INDEX IF NOT EXISTS idx_posts_category ON posts(run_id, category);
CREATE INDEX IF NOT EXISTS idx_posts_risk ON posts(run_id, risk_level);
            ",
        )?;
        Ok(())
    }

    // Run management
    pub fn create_run(&self, source: &str) -> Result<String> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = current_timestamp();

        self.conn.execute(
            "INSERT INTO classification_runs (id, started_at, status, source) VALUES (?1, ?2, ?3, ?4)",
            params![&run_id, timestamp, "running", source],
        )?;

        Ok(run_id)
    }

    pub fn complete_run(&self, run_id: &str) -> Result<()> {
        let timestamp = current_timestamp();
        self.conn.execute(
            "UPDATE classification_runs SET status = ?1, finished_at = ?2 WHERE id = ?3",
            params!["completed", timestamp, run_id],
        )?;
        Ok(())
    }

    pub fn fail_run(&self, run_id: &str) -> Result<()> {
        let timestamp = current_timestamp();
        self.conn.execute(
            "UPDATE classification_runs SET status = ?1, finished_at = ?2 WHERE id = ?3",
            params!["failed", timestamp, run_id],
        )?;
        Ok(())
    }

    pub fn latest_run_id(&self) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM classification_runs ORDER BY started_at DESC, id DESC LIMIT 1")?;

        let result = stmt.query_row([], |row| row.get(0)).optional()?;
        Ok(result)
    }

    // Post operations
    pub fn insert_post(&self, run_id: &str, post: &ClassifiedPost) -> Result<i64> {
        let timestamp = current_timestamp();
        let domains_json =
            serde_json::to_string(&post.domains).unwrap_or_else(|_| "[]".to_string());

        self.conn.execute(
            "INSERT INTO posts (
                run_id, text, platform, date, author_id, url,
                clean_text, domains, category, risk_level, classified_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                run_id,
                &post.post.text,
                &post.post.platform,
                &post.post.date,
                &post.post.author_id,
                &post.post.url,
                &post.clean_text,
                &domains_json,
                post.category.as_str(),
                post.risk.as_str(),
                timestamp,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn insert_posts(&self, run_id: &str, posts: &[ClassifiedPost]) -> Result<usize> {
        for post in posts {
            self.insert_post(run_id, post)?;
        }
        Ok(posts.len())
    }

    pub fn get_posts_by_run(
        &self,
        run_id: &str,
    ) -> Result<Vec<(i64, String, String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text, category, risk_level FROM posts WHERE run_id = ?1 ORDER BY id",
        )?;

        let posts = stmt
            .query_map(params![run_id], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(posts)
    }

    pub fn get_category_counts(&self, run_id: &str) -> Result<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT category, COUNT(*) FROM posts WHERE run_id = ?1 GROUP BY category ORDER BY COUNT(*) DESC, category",
        )?;

        let counts = stmt
            .query_map(params![run_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>>>()?;

        Ok(counts)
    }

    pub fn get_risk_counts(&self, run_id: &str) -> Result<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT risk_level, COUNT(*) FROM posts WHERE run_id = ?1 GROUP BY risk_level",
        )?;

        let counts = stmt
            .query_map(params![run_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>>>()?;

        Ok(counts)
    }

    /// Flagged posts of a run, highest risk first.
    pub fn get_flagged_by_run(
        &self,
        run_id: &str,
        limit: usize,
    ) -> Result<Vec<(i64, String, String, String, String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text, category, risk_level, platform, date FROM posts
             WHERE run_id = ?1 AND risk_level IN ('high', 'medium')
             ORDER BY CASE risk_level
                WHEN 'high' THEN 1
                WHEN 'medium' THEN 2
                WHEN 'low' THEN 3
             END, id
             LIMIT ?2",
        )?;

        let posts = stmt
            .query_map(params![run_id, limit as i64], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(posts)
    }

    /// (date, category) pairs of a run, for the trend-over-time view. Dates
    /// are returned as stored; parsing is the report layer's concern.
    pub fn get_dated_posts_by_run(&self, run_id: &str) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, category FROM posts WHERE run_id = ?1 AND date IS NOT NULL AND date != ''",
        )?;

        let pairs = stmt
            .query_map(params![run_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>>>()?;

        Ok(pairs)
    }

    pub fn get_connection(&self) -> &Connection {
        &self.conn
    }
}
