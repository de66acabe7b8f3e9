//! In-memory store used by router tests. Mirrors the Postgres semantics:
//! scoped lookups, cascade delete, ordering and the public job filters.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use super::{
    CareersStore, CompanyChanges, CompanyScope, JobChanges, NewCompany, NewJob, NewSection,
    SectionChanges, StoreResult,
};
use crate::jobs::filters::JobFilter;
use crate::models::company::CompanyRow;
use crate::models::content::ContentSectionRow;
use crate::models::job::JobRow;
use crate::models::recruiter::RecruiterRow;

#[derive(Default)]
struct Tables {
    recruiters: Vec<RecruiterRow>,
    companies: Vec<CompanyRow>,
    sections: Vec<ContentSectionRow>,
    jobs: Vec<JobRow>,
    ticks: i64,
}

impl Tables {
    /// Strictly increasing timestamps so "newest first" is deterministic.
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.ticks)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_count(&self) -> usize {
        self.tables.read().unwrap().sections.len()
    }

    pub fn job_count(&self) -> usize {
        self.tables.read().unwrap().jobs.len()
    }
}

fn job_matches(filter: &JobFilter, job: &JobRow) -> bool {
    let contains = |haystack: &str, needle: &str| {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    };
    let optional_contains = |haystack: &Option<String>, needle: &str| {
        haystack.as_deref().is_some_and(|h| contains(h, needle))
    };

    filter.location.as_deref().map_or(true, |l| contains(&job.location, l))
        && filter
            .employment_type
            .as_deref()
            .map_or(true, |t| job.employment_type.eq_ignore_ascii_case(t))
        && filter
            .work_policy
            .as_deref()
            .map_or(true, |p| job.work_policy.eq_ignore_ascii_case(p))
        && filter.experience.as_deref().map_or(true, |e| {
            job.experience
                .as_deref()
                .is_some_and(|x| x.eq_ignore_ascii_case(e))
        })
        && filter
            .department
            .as_deref()
            .map_or(true, |d| optional_contains(&job.department, d))
        && filter.search.as_deref().map_or(true, |s| {
            contains(&job.title, s) || optional_contains(&job.description, s)
        })
}

fn newest_first<T>(rows: &mut [T], created_at: impl Fn(&T) -> DateTime<Utc>) {
    rows.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
}

fn by_display_order(rows: &mut [ContentSectionRow]) {
    rows.sort_by_key(|s| (s.sort_order, s.created_at));
}

#[async_trait]
impl CareersStore for MemoryStore {
    async fn get_or_create_recruiter(
        &self,
        username: &str,
        email: &str,
    ) -> StoreResult<(RecruiterRow, bool)> {
        let mut t = self.tables.write().unwrap();
        if let Some(existing) = t.recruiters.iter().find(|r| r.username == username) {
            return Ok((existing.clone(), false));
        }
        let created_at = t.now();
        let row = RecruiterRow {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            created_at,
        };
        t.recruiters.push(row.clone());
        Ok((row, true))
    }

    async fn companies_for_recruiter(&self, recruiter_id: Uuid) -> StoreResult<Vec<CompanyRow>> {
        let t = self.tables.read().unwrap();
        let mut rows: Vec<_> = t
            .companies
            .iter()
            .filter(|c| c.recruiter_id == recruiter_id)
            .cloned()
            .collect();
        newest_first(&mut rows, |c| c.created_at);
        Ok(rows)
    }

    async fn company_for_recruiter(&self, recruiter_id: Uuid) -> StoreResult<Option<CompanyRow>> {
        Ok(self
            .companies_for_recruiter(recruiter_id)
            .await?
            .into_iter()
            .next())
    }

    async fn recruiter_company_by_slug(
        &self,
        recruiter_id: Uuid,
        slug: &str,
    ) -> StoreResult<Option<CompanyRow>> {
        let t = self.tables.read().unwrap();
        Ok(t.companies
            .iter()
            .find(|c| c.recruiter_id == recruiter_id && c.slug == slug)
            .cloned())
    }

    async fn company_by_slug(&self, slug: &str) -> StoreResult<Option<CompanyRow>> {
        let t = self.tables.read().unwrap();
        Ok(t.companies.iter().find(|c| c.slug == slug).cloned())
    }

    async fn slug_taken(&self, slug: &str) -> StoreResult<bool> {
        let t = self.tables.read().unwrap();
        Ok(t.companies.iter().any(|c| c.slug == slug))
    }

    async fn insert_company(&self, company: &NewCompany) -> StoreResult<CompanyRow> {
        let mut t = self.tables.write().unwrap();
        if t.companies.iter().any(|c| c.slug == company.slug) {
            return Err(sqlx::Error::Protocol(format!(
                "duplicate slug {}",
                company.slug
            )));
        }
        let recruiter_username = t
            .recruiters
            .iter()
            .find(|r| r.id == company.recruiter_id)
            .map(|r| r.username.clone())
            .ok_or(sqlx::Error::RowNotFound)?;
        let now = t.now();
        let row = CompanyRow {
            id: Uuid::new_v4(),
            slug: company.slug.clone(),
            name: company.name.clone(),
            recruiter_id: company.recruiter_id,
            recruiter_username,
            primary_color: company.primary_color.clone(),
            secondary_color: company.secondary_color.clone(),
            logo_key: None,
            banner_key: None,
            culture_video_url: company.culture_video_url.clone(),
            created_at: now,
            updated_at: now,
        };
        t.companies.push(row.clone());
        Ok(row)
    }

    async fn update_company(
        &self,
        recruiter_id: Uuid,
        company_id: Uuid,
        changes: &CompanyChanges,
    ) -> StoreResult<Option<CompanyRow>> {
        let mut t = self.tables.write().unwrap();
        let now = t.now();
        let Some(row) = t
            .companies
            .iter_mut()
            .find(|c| c.id == company_id && c.recruiter_id == recruiter_id)
        else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(color) = &changes.primary_color {
            row.primary_color = color.clone();
        }
        if let Some(color) = &changes.secondary_color {
            row.secondary_color = color.clone();
        }
        if let Some(url) = &changes.culture_video_url {
            row.culture_video_url = url.clone();
        }
        if let Some(key) = &changes.logo_key {
            row.logo_key = Some(key.clone());
        }
        if let Some(key) = &changes.banner_key {
            row.banner_key = Some(key.clone());
        }
        row.updated_at = now;
        Ok(Some(row.clone()))
    }

    async fn delete_company(&self, recruiter_id: Uuid, company_id: Uuid) -> StoreResult<bool> {
        let mut t = self.tables.write().unwrap();
        let before = t.companies.len();
        t.companies
            .retain(|c| !(c.id == company_id && c.recruiter_id == recruiter_id));
        if t.companies.len() == before {
            return Ok(false);
        }
        t.sections.retain(|s| s.company_id != company_id);
        t.jobs.retain(|j| j.company_id != company_id);
        Ok(true)
    }

    async fn list_sections(&self, scope: CompanyScope) -> StoreResult<Vec<ContentSectionRow>> {
        let t = self.tables.read().unwrap();
        let mut rows: Vec<_> = t
            .sections
            .iter()
            .filter(|s| s.company_id == scope.company_id())
            .cloned()
            .collect();
        by_display_order(&mut rows);
        Ok(rows)
    }

    async fn list_active_sections(
        &self,
        scope: CompanyScope,
    ) -> StoreResult<Vec<ContentSectionRow>> {
        let mut rows = self.list_sections(scope).await?;
        rows.retain(|s| s.is_active);
        Ok(rows)
    }

    async fn get_section(
        &self,
        scope: CompanyScope,
        id: Uuid,
    ) -> StoreResult<Option<ContentSectionRow>> {
        let t = self.tables.read().unwrap();
        Ok(t.sections
            .iter()
            .find(|s| s.id == id && s.company_id == scope.company_id())
            .cloned())
    }

    async fn insert_section(
        &self,
        scope: CompanyScope,
        section: &NewSection,
    ) -> StoreResult<ContentSectionRow> {
        let mut t = self.tables.write().unwrap();
        let now = t.now();
        let row = ContentSectionRow {
            id: Uuid::new_v4(),
            company_id: scope.company_id(),
            section_type: section.section_type.as_str().to_string(),
            title: section.title.clone(),
            content: section.content.clone(),
            sort_order: section.sort_order,
            is_active: section.is_active,
            created_at: now,
            updated_at: now,
        };
        t.sections.push(row.clone());
        Ok(row)
    }

    async fn insert_section_if_absent(
        &self,
        scope: CompanyScope,
        section: &NewSection,
    ) -> StoreResult<Option<ContentSectionRow>> {
        let exists = {
            let t = self.tables.read().unwrap();
            t.sections.iter().any(|s| {
                s.company_id == scope.company_id()
                    && s.section_type == section.section_type.as_str()
            })
        };
        if exists {
            return Ok(None);
        }
        self.insert_section(scope, section).await.map(Some)
    }

    async fn update_section(
        &self,
        scope: CompanyScope,
        id: Uuid,
        changes: &SectionChanges,
    ) -> StoreResult<Option<ContentSectionRow>> {
        let mut t = self.tables.write().unwrap();
        let now = t.now();
        let Some(row) = t
            .sections
            .iter_mut()
            .find(|s| s.id == id && s.company_id == scope.company_id())
        else {
            return Ok(None);
        };
        if let Some(section_type) = changes.section_type {
            row.section_type = section_type.as_str().to_string();
        }
        if let Some(title) = &changes.title {
            row.title = title.clone();
        }
        if let Some(content) = &changes.content {
            row.content = content.clone();
        }
        if let Some(order) = changes.sort_order {
            row.sort_order = order;
        }
        if let Some(active) = changes.is_active {
            row.is_active = active;
        }
        row.updated_at = now;
        Ok(Some(row.clone()))
    }

    async fn delete_section(&self, scope: CompanyScope, id: Uuid) -> StoreResult<bool> {
        let mut t = self.tables.write().unwrap();
        let before = t.sections.len();
        t.sections
            .retain(|s| !(s.id == id && s.company_id == scope.company_id()));
        Ok(t.sections.len() < before)
    }

    async fn set_section_order(
        &self,
        scope: CompanyScope,
        id: Uuid,
        order: i32,
    ) -> StoreResult<bool> {
        let changes = SectionChanges {
            sort_order: Some(order),
            ..Default::default()
        };
        Ok(self.update_section(scope, id, &changes).await?.is_some())
    }

    async fn list_jobs(&self, scope: CompanyScope) -> StoreResult<Vec<JobRow>> {
        self.search_jobs(scope, &JobFilter::default()).await
    }

    async fn search_jobs(
        &self,
        scope: CompanyScope,
        filter: &JobFilter,
    ) -> StoreResult<Vec<JobRow>> {
        let t = self.tables.read().unwrap();
        let mut rows: Vec<_> = t
            .jobs
            .iter()
            .filter(|j| j.company_id == scope.company_id() && job_matches(filter, j))
            .cloned()
            .collect();
        newest_first(&mut rows, |j| j.created_at);
        Ok(rows)
    }

    async fn get_job(&self, scope: CompanyScope, id: Uuid) -> StoreResult<Option<JobRow>> {
        let t = self.tables.read().unwrap();
        Ok(t.jobs
            .iter()
            .find(|j| j.id == id && j.company_id == scope.company_id())
            .cloned())
    }

    async fn insert_job(&self, scope: CompanyScope, job: &NewJob) -> StoreResult<JobRow> {
        let mut t = self.tables.write().unwrap();
        let now = t.now();
        let row = JobRow {
            id: Uuid::new_v4(),
            company_id: scope.company_id(),
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            work_policy: job.work_policy.as_str().to_string(),
            department: job.department.clone(),
            employment_type: job.employment_type.as_str().to_string(),
            experience: job.experience.map(|e| e.as_str().to_string()),
            salary_range: job.salary_range.clone(),
            posted_date: job.posted_date.clone(),
            created_at: now,
            updated_at: now,
        };
        t.jobs.push(row.clone());
        Ok(row)
    }

    async fn insert_job_if_absent(
        &self,
        scope: CompanyScope,
        job: &NewJob,
    ) -> StoreResult<Option<JobRow>> {
        let exists = {
            let t = self.tables.read().unwrap();
            t.jobs
                .iter()
                .any(|j| j.company_id == scope.company_id() && j.title == job.title)
        };
        if exists {
            return Ok(None);
        }
        self.insert_job(scope, job).await.map(Some)
    }

    async fn update_job(
        &self,
        scope: CompanyScope,
        id: Uuid,
        changes: &JobChanges,
    ) -> StoreResult<Option<JobRow>> {
        let mut t = self.tables.write().unwrap();
        let now = t.now();
        let Some(row) = t
            .jobs
            .iter_mut()
            .find(|j| j.id == id && j.company_id == scope.company_id())
        else {
            return Ok(None);
        };
        if let Some(title) = &changes.title {
            row.title = title.clone();
        }
        if let Some(description) = &changes.description {
            row.description = description.clone();
        }
        if let Some(location) = &changes.location {
            row.location = location.clone();
        }
        if let Some(policy) = changes.work_policy {
            row.work_policy = policy.as_str().to_string();
        }
        if let Some(department) = &changes.department {
            row.department = department.clone();
        }
        if let Some(employment_type) = changes.employment_type {
            row.employment_type = employment_type.as_str().to_string();
        }
        if let Some(experience) = changes.experience {
            row.experience = experience.map(|e| e.as_str().to_string());
        }
        if let Some(salary) = &changes.salary_range {
            row.salary_range = salary.clone();
        }
        if let Some(posted) = &changes.posted_date {
            row.posted_date = posted.clone();
        }
        row.updated_at = now;
        Ok(Some(row.clone()))
    }

    async fn delete_job(&self, scope: CompanyScope, id: Uuid) -> StoreResult<bool> {
        let mut t = self.tables.write().unwrap();
        let before = t.jobs.len();
        t.jobs
            .retain(|j| !(j.id == id && j.company_id == scope.company_id()));
        Ok(t.jobs.len() < before)
    }
}
