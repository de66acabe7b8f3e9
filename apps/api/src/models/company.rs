use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_PRIMARY_COLOR: &str = "#000000";
pub const DEFAULT_SECONDARY_COLOR: &str = "#FFFFFF";

/// A company joined with its owner's username.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub recruiter_id: Uuid,
    pub recruiter_username: String,
    pub primary_color: String,
    pub secondary_color: String,
    /// Object-store key of the current logo, if any.
    pub logo_key: Option<String>,
    pub banner_key: Option<String>,
    pub culture_video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyRow {
    /// Keys of every stored asset this company references.
    pub fn asset_keys(&self) -> impl Iterator<Item = &str> {
        self.logo_key
            .as_deref()
            .into_iter()
            .chain(self.banner_key.as_deref())
    }
}
