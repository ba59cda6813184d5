//! Database helpers: migrations, path handling and the tracking-table insert.

use sqlx::SqlitePool;
use std::path::Path;

pub mod tracking;

/// Run SQLite migrations to create the tracking tables if absent.
///
/// The `email_account_id` column is left for an externally managed trigger to fill.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in ["email_info", "email_pub"] {
        sqlx::query(&format!(
            r#"CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                message_id TEXT NOT NULL,
                email TEXT NOT NULL,
                email_account_id INTEGER NULL,
                subject TEXT NULL,
                sender TEXT NULL,
                body TEXT NULL,
                received_date TEXT NULL,
                created_at TEXT NOT NULL
            )"#
        ))
        .execute(pool)
        .await?;
    }

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS email_traite (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            message_id TEXT NOT NULL,
            email TEXT NOT NULL,
            email_account_id INTEGER NULL,
            subject TEXT NULL,
            sender TEXT NULL,
            body TEXT NULL,
            received_date TEXT NULL,
            response_sent INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    for table in ["email_info", "email_pub", "email_traite"] {
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_email_created ON {table} (email, created_at)"
        ))
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// File path named by a sqlx SQLite URL, or `None` for in-memory and non-SQLite URLs.
///
/// Accepts both `sqlite://path` and `sqlite:path`; any query string is dropped.
pub fn sqlite_file_path(db_url: &str) -> Option<&Path> {
    let path_part = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))?;
    let path_only = path_part
        .split_once('?')
        .map_or(path_part, |(p, _)| p);
    if path_only.is_empty() || path_only.starts_with(":memory:") {
        return None;
    }
    Some(Path::new(path_only))
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if let Some(p) = sqlite_file_path(db_url) {
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p);
    }
    db_url.to_string()
}
