//! Database helpers: pool setup, schema creation and the insert path.

use crate::models::log::log_entry::LogEntry;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr, time::Duration};

/// Open the store and make sure the `logs` table exists.
///
/// File databases are created (parent folder included) when absent.
/// In-memory URLs get a single pinned connection so every query sees the
/// same database.
pub async fn open_pool(db_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_url)?;

    let pool = if is_memory_url(db_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        ensure_parent_dir(options.get_filename())?;
        let options = options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Create the `logs` table if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT,
            target_letter TEXT,
            predicted_letter TEXT,
            correct INTEGER,
            timestamp TEXT
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Append one entry and return the id the store assigned to it.
pub async fn insert_log(pool: &SqlitePool, entry: &LogEntry) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO logs (user_id, target_letter, predicted_letter, correct, timestamp) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&entry.user_id)
    .bind(&entry.target_letter)
    .bind(&entry.predicted_letter)
    .bind(entry.correct_flag())
    .bind(&entry.timestamp)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
