use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::assets::public_url;
use crate::models::company::CompanyRow;

/// Recruiter-facing company view.
#[derive(Debug, Serialize)]
pub struct CompanyView {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub recruiter: Uuid,
    pub recruiter_username: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub logo: Option<String>,
    pub logo_url: Option<String>,
    pub banner: Option<String>,
    pub banner_url: Option<String>,
    pub culture_video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What an anonymous visitor of the careers page may see.
#[derive(Debug, Serialize)]
pub struct CompanyPublicView {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub culture_video_url: Option<String>,
}

impl CompanyView {
    pub fn new(row: &CompanyRow, asset_base_url: &str) -> Self {
        Self {
            id: row.id,
            slug: row.slug.clone(),
            name: row.name.clone(),
            recruiter: row.recruiter_id,
            recruiter_username: row.recruiter_username.clone(),
            primary_color: row.primary_color.clone(),
            secondary_color: row.secondary_color.clone(),
            logo: row.logo_key.clone(),
            logo_url: asset_url(&row.logo_key, asset_base_url),
            banner: row.banner_key.clone(),
            banner_url: asset_url(&row.banner_key, asset_base_url),
            culture_video_url: row.culture_video_url.clone(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl CompanyPublicView {
    pub fn new(row: &CompanyRow, asset_base_url: &str) -> Self {
        Self {
            id: row.id,
            slug: row.slug.clone(),
            name: row.name.clone(),
            primary_color: row.primary_color.clone(),
            secondary_color: row.secondary_color.clone(),
            logo_url: asset_url(&row.logo_key, asset_base_url),
            banner_url: asset_url(&row.banner_key, asset_base_url),
            culture_video_url: row.culture_video_url.clone(),
        }
    }
}

fn asset_url(key: &Option<String>, base: &str) -> Option<String> {
    key.as_deref().map(|k| public_url(base, k))
}
