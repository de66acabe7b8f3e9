use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    /// Prefix joined with an object key to build the public URL of an uploaded asset.
    pub asset_base_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let s3_bucket = env_or("S3_BUCKET", "careers-assets");
        let s3_endpoint = env_or("S3_ENDPOINT", "http://localhost:9000");
        let asset_base_url = std::env::var("ASSET_BASE_URL").unwrap_or_else(|_| {
            format!("{}/{}", s3_endpoint.trim_end_matches('/'), s3_bucket)
        });

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            jwt_secret: require_env("JWT_SECRET")?,
            jwt_issuer: env_or("JWT_ISSUER", "careers-api"),
            s3_bucket,
            s3_endpoint,
            aws_access_key_id: env_or("AWS_ACCESS_KEY_ID", "minioadmin"),
            aws_secret_access_key: env_or("AWS_SECRET_ACCESS_KEY", "minioadmin"),
            asset_base_url: asset_base_url.trim_end_matches('/').to_string(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
