use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::required_text;
use crate::models::content::SectionType;
use crate::store::{NewSection, SectionChanges};

const TITLE_MAX: usize = 200;

/// Body of `POST /api/content`.
#[derive(Debug, Deserialize)]
pub struct SectionInput {
    pub section_type: SectionType,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Body of `PUT|PATCH /api/content/:id`; absent fields stay as they are.
#[derive(Debug, Default, Deserialize)]
pub struct SectionPatch {
    pub section_type: Option<SectionType>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Body of `POST /api/content/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    #[serde(default)]
    pub section_ids: Vec<Uuid>,
}

impl SectionInput {
    pub fn validate(self) -> Result<NewSection, AppError> {
        Ok(NewSection {
            section_type: self.section_type,
            title: required_text(&self.title, "title", TITLE_MAX)?,
            content: required_text(&self.content, "content", usize::MAX)?,
            sort_order: self.order,
            is_active: self.is_active,
        })
    }
}

impl SectionPatch {
    pub fn validate(self) -> Result<SectionChanges, AppError> {
        Ok(SectionChanges {
            section_type: self.section_type,
            title: self
                .title
                .as_deref()
                .map(|t| required_text(t, "title", TITLE_MAX))
                .transpose()?,
            content: self
                .content
                .as_deref()
                .map(|c| required_text(c, "content", usize::MAX))
                .transpose()?,
            sort_order: self.order,
            is_active: self.is_active,
        })
    }
}
