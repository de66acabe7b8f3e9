use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::company::CompanyRow;
use crate::models::content::ContentSectionRow;

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub id: Uuid,
    pub company: Uuid,
    pub company_name: String,
    pub company_slug: String,
    pub section_type: String,
    pub title: String,
    pub content: String,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Active sections as rendered on the public careers page.
#[derive(Debug, Serialize)]
pub struct SectionPublicView {
    pub id: Uuid,
    pub section_type: String,
    pub title: String,
    pub content: String,
    pub order: i32,
}

impl SectionView {
    pub fn new(row: ContentSectionRow, company: &CompanyRow) -> Self {
        Self {
            id: row.id,
            company: company.id,
            company_name: company.name.clone(),
            company_slug: company.slug.clone(),
            section_type: row.section_type,
            title: row.title,
            content: row.content,
            order: row.sort_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    pub fn list(rows: Vec<ContentSectionRow>, company: &CompanyRow) -> Vec<Self> {
        rows.into_iter().map(|row| Self::new(row, company)).collect()
    }
}

impl From<ContentSectionRow> for SectionPublicView {
    fn from(row: ContentSectionRow) -> Self {
        Self {
            id: row.id,
            section_type: row.section_type,
            title: row.title,
            content: row.content,
            order: row.sort_order,
        }
    }
}
