use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Creates and returns a SQLite connection pool, creating the database file
/// on first run.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

// All DDL lives here. No other module issues CREATE statements.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS resumes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL DEFAULT '',
        phone TEXT NOT NULL DEFAULT '',
        skills TEXT NOT NULL DEFAULT '',
        experience TEXT NOT NULL DEFAULT '',
        filename TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        job_title TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL DEFAULT 'New',
        score INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS assistant_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS onboarding_logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        position TEXT NOT NULL,
        start_date TEXT NOT NULL,
        salary REAL NOT NULL,
        filepath TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS job_descriptions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS branding_assets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        content TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS feedback_surveys (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        candidate_name TEXT NOT NULL,
        rating INTEGER NOT NULL,
        comments TEXT NOT NULL DEFAULT '',
        timestamp TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS coaching_materials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        notes TEXT NOT NULL DEFAULT '',
        timestamp TEXT NOT NULL
    )
    "#,
];

/// Initializes the full schema. Every statement is `IF NOT EXISTS`, so this
/// is safe to run on every startup against an existing database.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema initialized ({} tables)", SCHEMA.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::models::candidate::ResumeRow;

    // One connection: each in-memory SQLite connection is its own database.
    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool")
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.expect("first init");
        init_schema(&pool).await.expect("second init");
    }

    #[tokio::test]
    async fn test_resume_insert_applies_column_defaults() {
        let pool = memory_pool().await;
        init_schema(&pool).await.expect("init");

        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        sqlx::query(
            "INSERT INTO resumes (name, email, phone, skills, experience, filename, timestamp)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind("Jane Doe")
        .bind("jane@example.com")
        .bind("555-123-4567")
        .bind("Python")
        .bind("5 years")
        .bind("jane.pdf")
        .bind(ts)
        .execute(&pool)
        .await
        .expect("insert");

        let row: ResumeRow = sqlx::query_as("SELECT * FROM resumes WHERE name = ?")
            .bind("Jane Doe")
            .fetch_one(&pool)
            .await
            .expect("select");

        assert_eq!(row.status, "New");
        assert_eq!(row.job_title, "");
        assert_eq!(row.score, 0);
        assert_eq!(row.timestamp, ts);
    }
}
