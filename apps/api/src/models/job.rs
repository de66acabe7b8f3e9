use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_POSTED_DATE: &str = "Just now";
pub const DEFAULT_LOCATION: &str = "Not specified";

// Column widths of the `jobs` table, shared by API validation and import clipping.
pub const TITLE_MAX: usize = 200;
pub const LOCATION_MAX: usize = 200;
pub const DEPARTMENT_MAX: usize = 100;
pub const SALARY_MAX: usize = 100;
pub const POSTED_DATE_MAX: usize = 100;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkPolicy {
    Remote,
    Hybrid,
    #[default]
    Onsite,
}

impl WorkPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkPolicy::Remote => "remote",
            WorkPolicy::Hybrid => "hybrid",
            WorkPolicy::Onsite => "onsite",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::MidLevel => "mid-level",
            ExperienceLevel::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub work_policy: String,
    pub department: Option<String>,
    pub employment_type: String,
    pub experience: Option<String>,
    pub salary_range: Option<String>,
    /// Relative-time text such as "2 days ago", frozen when written.
    pub posted_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
