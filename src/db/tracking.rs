//! Inserts into and reads from the `email_info`, `email_pub` and `email_traite` tables.

use crate::models::tracking::{
    category::Category,
    record::{InsertedRow, NewTrackedEmail, TrackingRecord},
    tracked_email::TrackedEmail,
};
use chrono::{DateTime, Utc};
use sqlx::{Connection, Sqlite, SqliteConnection, SqlitePool, Transaction};
use tracing::{error, info, warn};

/// Database clock in the same text layout as [`db_timestamp`].
const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// A tracking-table write failed. Displays as the driver error alone; the table
/// only goes to the log line.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct PersistError {
    pub table: &'static str,
    pub source: sqlx::Error,
}

/// Insert one tracking row in its own transaction and return its ids.
///
/// `email_account_id` is read back inside the transaction so that values written by an
/// AFTER INSERT trigger are visible. On failure the transaction is rolled back.
pub async fn insert_tracked(
    conn: &mut SqliteConnection,
    record: &TrackingRecord,
) -> Result<InsertedRow, PersistError> {
    let table = record.category().table();
    let email = &record.fields().email;

    let mut tx = match conn.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            error!("insert into {table} failed to begin: {e}");
            return Err(PersistError { table, source: e });
        }
    };

    let outcome = match write_row(&mut tx, record).await {
        Ok(row) => tx.commit().await.map(|()| row),
        Err(e) => {
            if let Err(rb) = tx.rollback().await {
                warn!("rollback of {table} insert failed: {rb}");
            }
            Err(e)
        }
    };

    match outcome {
        Ok(row) => {
            info!(
                "{table} inserted: id={}, email_account_id={}, email={email}",
                row.id,
                row.email_account_id
                    .map_or_else(|| "null".to_string(), |id| id.to_string()),
            );
            Ok(row)
        }
        Err(e) => {
            error!("insert into {table} failed: {e}");
            Err(PersistError { table, source: e })
        }
    }
}

async fn write_row(
    tx: &mut Transaction<'_, Sqlite>,
    record: &TrackingRecord,
) -> Result<InsertedRow, sqlx::Error> {
    let table = record.category().table();
    let fields = record.fields();
    let sql = if record.response_sent().is_some() {
        format!(
            "INSERT INTO {table} (user_id, message_id, email, subject, sender, body, received_date, response_sent, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, {NOW}) RETURNING id"
        )
    } else {
        format!(
            "INSERT INTO {table} (user_id, message_id, email, subject, sender, body, received_date, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, {NOW}) RETURNING id"
        )
    };

    let mut query = sqlx::query_scalar::<_, i64>(&sql)
        .bind(fields.user_id.as_str())
        .bind(fields.message_id.as_str())
        .bind(fields.email.as_str())
        .bind(fields.subject.as_deref())
        .bind(fields.sender.as_deref())
        .bind(fields.body.as_deref())
        .bind(fields.received_date);
    if let Some(sent) = record.response_sent() {
        query = query.bind(sent);
    }
    let id = query.fetch_one(&mut **tx).await?;

    let email_account_id: Option<i64> =
        sqlx::query_scalar(&format!("SELECT email_account_id FROM {table} WHERE id = ?"))
            .bind(id)
            .fetch_one(&mut **tx)
            .await?;

    Ok(InsertedRow {
        id,
        email_account_id,
    })
}

pub async fn insert_info(
    conn: &mut SqliteConnection,
    email: NewTrackedEmail,
) -> Result<i64, PersistError> {
    insert_tracked(conn, &TrackingRecord::Info(email))
        .await
        .map(|row| row.id)
}

pub async fn insert_pub(
    conn: &mut SqliteConnection,
    email: NewTrackedEmail,
) -> Result<i64, PersistError> {
    insert_tracked(conn, &TrackingRecord::Pub(email))
        .await
        .map(|row| row.id)
}

pub async fn insert_traite(
    conn: &mut SqliteConnection,
    email: NewTrackedEmail,
    response_sent: bool,
) -> Result<i64, PersistError> {
    insert_tracked(
        conn,
        &TrackingRecord::Traite {
            email,
            response_sent,
        },
    )
    .await
    .map(|row| row.id)
}

/// Page of rows of one category, newest first.
pub async fn list_tracked(
    pool: &SqlitePool,
    category: Category,
    email: Option<&str>,
    limit: u32,
    offset: u32,
) -> Result<Vec<TrackedEmail>, sqlx::Error> {
    let table = category.table();
    let response_sent = match category {
        Category::Traite => "response_sent",
        _ => "NULL",
    };
    let filter = if email.is_some() { "WHERE email = ?" } else { "" };
    let sql = format!(
        "SELECT id, user_id, message_id, email, email_account_id, subject, sender, body, received_date, {response_sent} AS response_sent, created_at FROM {table} {filter} ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
    );
    let mut query = sqlx::query_as::<_, TrackedEmail>(&sql);
    if let Some(email) = email {
        query = query.bind(email);
    }
    query
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(pool)
        .await
}

/// Number of rows of one category for `email` with `created_at` in `[start, end)`.
pub async fn count_tracked(
    pool: &SqlitePool,
    category: Category,
    email: &str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<i64, sqlx::Error> {
    let start = start.map(db_timestamp);
    let end = end.map(db_timestamp);
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE email = ? AND (? IS NULL OR created_at >= ?) AND (? IS NULL OR created_at < ?)",
        category.table()
    ))
    .bind(email)
    .bind(start.as_deref())
    .bind(start.as_deref())
    .bind(end.as_deref())
    .bind(end.as_deref())
    .fetch_one(pool)
    .await
}

/// Text layout of `created_at`, so bounds compare correctly as strings.
pub fn db_timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
