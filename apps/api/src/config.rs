use anyhow::{Context, Result};

/// Object storage settings for archiving uploaded CVs.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, filter vocabulary is kept in process memory only.
    pub redis_url: Option<String>,
    /// When unset, uploaded CVs are not archived.
    pub s3: Option<S3Settings>,
    pub port: u16,
    pub rust_log: String,
    pub recent_window_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            s3: s3_from_env()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recent_window_days: std::env::var("RECENT_WINDOW_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse::<i64>()
                .context("RECENT_WINDOW_DAYS must be an integer")?,
        })
    }
}

/// The four S3 variables are all-or-nothing: a partial set is a startup error.
fn s3_from_env() -> Result<Option<S3Settings>> {
    let Some(bucket) = optional_env("S3_BUCKET") else {
        return Ok(None);
    };

    Ok(Some(S3Settings {
        bucket,
        endpoint: require_env("S3_ENDPOINT")?,
        access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
        secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
    }))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
