//! Object storage for uploaded company logos and banners.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

#[cfg(test)]
pub mod memory;
pub mod s3;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("upload of '{key}' failed: {message}")]
    Upload { key: String, message: String },

    #[error("delete of '{key}' failed: {message}")]
    Delete { key: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Logo,
    Banner,
}

impl AssetKind {
    fn prefix(&self) -> &'static str {
        match self {
            AssetKind::Logo => "logos",
            AssetKind::Banner => "banners",
        }
    }
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), AssetError>;

    async fn delete(&self, key: &str) -> Result<(), AssetError>;
}

/// Deletes a superseded asset. Failures are logged and swallowed so cleanup
/// never fails the request that triggered it.
pub async fn delete_best_effort(store: &dyn AssetStore, key: &str) {
    if let Err(e) = store.delete(key).await {
        warn!("Could not delete asset {key}: {e}");
    }
}

/// Fresh object key such as `logos/<uuid>-acme-logo.png`.
pub fn asset_key(kind: AssetKind, filename: &str) -> String {
    let cleaned: String = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == '-' || c == '.');
    let cleaned = if cleaned.is_empty() { "upload" } else { cleaned };

    format!("{}/{}-{}", kind.prefix(), Uuid::new_v4(), cleaned)
}

pub fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}
