use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    /// Directory where generated offer letters are written.
    pub docs_dir: String,
    /// Fallback meeting link used when a schedule request omits one.
    pub default_meeting_link: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://mira_resumes.db".to_string()),
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            docs_dir: std::env::var("DOCS_DIR").unwrap_or_else(|_| "onboarding_docs".to_string()),
            default_meeting_link: std::env::var("DEFAULT_MEETING_LINK")
                .unwrap_or_else(|_| "https://teams.microsoft.com/l/meetup-join/abc123".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
