use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    About,
    Life,
    Benefits,
    Values,
    Mission,
    Custom,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::About => "about",
            SectionType::Life => "life",
            SectionType::Benefits => "benefits",
            SectionType::Values => "values",
            SectionType::Mission => "mission",
            SectionType::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentSectionRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub section_type: String,
    pub title: String,
    pub content: String,
    /// Display position; need not be contiguous across a company's sections.
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
