//! Persistence boundary for companies, content sections and jobs.
//!
//! Every section and job operation takes a [`CompanyScope`], and every
//! company mutation takes the owning recruiter's id, so tenant filtering is
//! part of the query itself rather than a check on fetched rows.

use async_trait::async_trait;
use uuid::Uuid;

use crate::jobs::filters::JobFilter;
use crate::models::company::CompanyRow;
use crate::models::content::{ContentSectionRow, SectionType};
use crate::models::job::{EmploymentType, ExperienceLevel, JobRow, WorkPolicy};
use crate::models::recruiter::RecruiterRow;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Tenant predicate for section and job queries.
///
/// Only obtainable from a company row, which handlers only ever load through
/// recruiter-filtered or slug lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyScope {
    company_id: Uuid,
}

impl CompanyScope {
    pub fn of(company: &CompanyRow) -> Self {
        Self {
            company_id: company.id,
        }
    }

    pub fn company_id(&self) -> Uuid {
        self.company_id
    }
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub slug: String,
    pub name: String,
    pub recruiter_id: Uuid,
    pub primary_color: String,
    pub secondary_color: String,
    pub culture_video_url: Option<String>,
}

/// Partial company update. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    /// `Some(None)` clears the link.
    pub culture_video_url: Option<Option<String>>,
    pub logo_key: Option<String>,
    pub banner_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSection {
    pub section_type: SectionType,
    pub title: String,
    pub content: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionChanges {
    pub section_type: Option<SectionType>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub work_policy: WorkPolicy,
    pub department: Option<String>,
    pub employment_type: EmploymentType,
    pub experience: Option<ExperienceLevel>,
    pub salary_range: Option<String>,
    pub posted_date: String,
}

/// Partial job update. Nullable columns use `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub location: Option<String>,
    pub work_policy: Option<WorkPolicy>,
    pub department: Option<Option<String>>,
    pub employment_type: Option<EmploymentType>,
    pub experience: Option<Option<ExperienceLevel>>,
    pub salary_range: Option<Option<String>>,
    pub posted_date: Option<String>,
}

#[async_trait]
pub trait CareersStore: Send + Sync {
    // Recruiters

    /// Returns the recruiter with `username`, creating it if absent.
    /// The flag is true when a new row was created.
    async fn get_or_create_recruiter(
        &self,
        username: &str,
        email: &str,
    ) -> StoreResult<(RecruiterRow, bool)>;

    // Companies

    /// All companies owned by the recruiter, newest first.
    async fn companies_for_recruiter(&self, recruiter_id: Uuid) -> StoreResult<Vec<CompanyRow>>;

    /// The recruiter's company (the newest one should several exist).
    async fn company_for_recruiter(&self, recruiter_id: Uuid) -> StoreResult<Option<CompanyRow>>;

    async fn recruiter_company_by_slug(
        &self,
        recruiter_id: Uuid,
        slug: &str,
    ) -> StoreResult<Option<CompanyRow>>;

    /// Unscoped lookup for public pages and offline commands.
    async fn company_by_slug(&self, slug: &str) -> StoreResult<Option<CompanyRow>>;

    async fn slug_taken(&self, slug: &str) -> StoreResult<bool>;

    async fn insert_company(&self, company: &NewCompany) -> StoreResult<CompanyRow>;

    async fn update_company(
        &self,
        recruiter_id: Uuid,
        company_id: Uuid,
        changes: &CompanyChanges,
    ) -> StoreResult<Option<CompanyRow>>;

    /// Deletes the company together with its sections and jobs.
    async fn delete_company(&self, recruiter_id: Uuid, company_id: Uuid) -> StoreResult<bool>;

    // Content sections

    /// Sections ordered by (order, created_at).
    async fn list_sections(&self, scope: CompanyScope) -> StoreResult<Vec<ContentSectionRow>>;

    async fn list_active_sections(&self, scope: CompanyScope)
        -> StoreResult<Vec<ContentSectionRow>>;

    async fn get_section(
        &self,
        scope: CompanyScope,
        id: Uuid,
    ) -> StoreResult<Option<ContentSectionRow>>;

    async fn insert_section(
        &self,
        scope: CompanyScope,
        section: &NewSection,
    ) -> StoreResult<ContentSectionRow>;

    /// Inserts unless a section of the same type exists; `None` when skipped.
    async fn insert_section_if_absent(
        &self,
        scope: CompanyScope,
        section: &NewSection,
    ) -> StoreResult<Option<ContentSectionRow>>;

    async fn update_section(
        &self,
        scope: CompanyScope,
        id: Uuid,
        changes: &SectionChanges,
    ) -> StoreResult<Option<ContentSectionRow>>;

    async fn delete_section(&self, scope: CompanyScope, id: Uuid) -> StoreResult<bool>;

    /// Sets one section's order. False when the id is not in scope.
    async fn set_section_order(&self, scope: CompanyScope, id: Uuid, order: i32)
        -> StoreResult<bool>;

    // Jobs

    /// Jobs newest first.
    async fn list_jobs(&self, scope: CompanyScope) -> StoreResult<Vec<JobRow>>;

    async fn search_jobs(&self, scope: CompanyScope, filter: &JobFilter)
        -> StoreResult<Vec<JobRow>>;

    async fn get_job(&self, scope: CompanyScope, id: Uuid) -> StoreResult<Option<JobRow>>;

    async fn insert_job(&self, scope: CompanyScope, job: &NewJob) -> StoreResult<JobRow>;

    /// Create-if-absent keyed by (company, title). Never updates an existing
    /// job; returns `None` when one with the same title already exists.
    async fn insert_job_if_absent(
        &self,
        scope: CompanyScope,
        job: &NewJob,
    ) -> StoreResult<Option<JobRow>>;

    async fn update_job(
        &self,
        scope: CompanyScope,
        id: Uuid,
        changes: &JobChanges,
    ) -> StoreResult<Option<JobRow>>;

    async fn delete_job(&self, scope: CompanyScope, id: Uuid) -> StoreResult<bool>;
}
