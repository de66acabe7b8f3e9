use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
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

/// Company columns joined with the owner's username. Expects `c` to alias a
/// companies-shaped relation and `r` the recruiters table.
const COMPANY_SELECT: &str = r#"
    SELECT c.id, c.slug, c.name, c.recruiter_id, r.username AS recruiter_username,
           c.primary_color, c.secondary_color, c.logo_key, c.banner_key,
           c.culture_video_url, c.created_at, c.updated_at
"#;

const SECTION_COLUMNS: &str =
    "id, company_id, section_type, title, content, sort_order, is_active, created_at, updated_at";

const JOB_COLUMNS: &str = "id, company_id, title, description, location, work_policy, department, \
     employment_type, experience, salary_range, posted_date, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareersStore for PgStore {
    async fn get_or_create_recruiter(
        &self,
        username: &str,
        email: &str,
    ) -> StoreResult<(RecruiterRow, bool)> {
        let inserted = sqlx::query_as::<_, RecruiterRow>(
            r#"
            INSERT INTO recruiters (id, username, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (username) DO NOTHING
            RETURNING id, username, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok((row, true));
        }

        let existing = sqlx::query_as::<_, RecruiterRow>(
            "SELECT id, username, email, created_at FROM recruiters WHERE username = $1",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;
        Ok((existing, false))
    }

    async fn companies_for_recruiter(&self, recruiter_id: Uuid) -> StoreResult<Vec<CompanyRow>> {
        sqlx::query_as::<_, CompanyRow>(&format!(
            "{COMPANY_SELECT}
             FROM companies c JOIN recruiters r ON r.id = c.recruiter_id
             WHERE c.recruiter_id = $1
             ORDER BY c.created_at DESC"
        ))
        .bind(recruiter_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn company_for_recruiter(&self, recruiter_id: Uuid) -> StoreResult<Option<CompanyRow>> {
        sqlx::query_as::<_, CompanyRow>(&format!(
            "{COMPANY_SELECT}
             FROM companies c JOIN recruiters r ON r.id = c.recruiter_id
             WHERE c.recruiter_id = $1
             ORDER BY c.created_at DESC
             LIMIT 1"
        ))
        .bind(recruiter_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn recruiter_company_by_slug(
        &self,
        recruiter_id: Uuid,
        slug: &str,
    ) -> StoreResult<Option<CompanyRow>> {
        sqlx::query_as::<_, CompanyRow>(&format!(
            "{COMPANY_SELECT}
             FROM companies c JOIN recruiters r ON r.id = c.recruiter_id
             WHERE c.recruiter_id = $1 AND c.slug = $2"
        ))
        .bind(recruiter_id)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
    }

    async fn company_by_slug(&self, slug: &str) -> StoreResult<Option<CompanyRow>> {
        sqlx::query_as::<_, CompanyRow>(&format!(
            "{COMPANY_SELECT}
             FROM companies c JOIN recruiters r ON r.id = c.recruiter_id
             WHERE c.slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
    }

    async fn slug_taken(&self, slug: &str) -> StoreResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM companies WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
    }

    async fn insert_company(&self, company: &NewCompany) -> StoreResult<CompanyRow> {
        sqlx::query_as::<_, CompanyRow>(&format!(
            "WITH c AS (
                INSERT INTO companies
                    (id, slug, name, recruiter_id, primary_color, secondary_color, culture_video_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
             )
             {COMPANY_SELECT}
             FROM c JOIN recruiters r ON r.id = c.recruiter_id"
        ))
        .bind(Uuid::new_v4())
        .bind(&company.slug)
        .bind(&company.name)
        .bind(company.recruiter_id)
        .bind(&company.primary_color)
        .bind(&company.secondary_color)
        .bind(&company.culture_video_url)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_company(
        &self,
        recruiter_id: Uuid,
        company_id: Uuid,
        changes: &CompanyChanges,
    ) -> StoreResult<Option<CompanyRow>> {
        let (set_video, video) = match &changes.culture_video_url {
            Some(value) => (true, value.clone()),
            None => (false, None),
        };

        sqlx::query_as::<_, CompanyRow>(&format!(
            "WITH c AS (
                UPDATE companies SET
                    name = COALESCE($3, name),
                    primary_color = COALESCE($4, primary_color),
                    secondary_color = COALESCE($5, secondary_color),
                    culture_video_url = CASE WHEN $6 THEN $7 ELSE culture_video_url END,
                    logo_key = COALESCE($8, logo_key),
                    banner_key = COALESCE($9, banner_key),
                    updated_at = NOW()
                WHERE id = $1 AND recruiter_id = $2
                RETURNING *
             )
             {COMPANY_SELECT}
             FROM c JOIN recruiters r ON r.id = c.recruiter_id"
        ))
        .bind(company_id)
        .bind(recruiter_id)
        .bind(&changes.name)
        .bind(&changes.primary_color)
        .bind(&changes.secondary_color)
        .bind(set_video)
        .bind(video)
        .bind(&changes.logo_key)
        .bind(&changes.banner_key)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_company(&self, recruiter_id: Uuid, company_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1 AND recruiter_id = $2")
            .bind(company_id)
            .bind(recruiter_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_sections(&self, scope: CompanyScope) -> StoreResult<Vec<ContentSectionRow>> {
        sqlx::query_as::<_, ContentSectionRow>(&format!(
            "SELECT {SECTION_COLUMNS} FROM content_sections
             WHERE company_id = $1
             ORDER BY sort_order, created_at"
        ))
        .bind(scope.company_id())
        .fetch_all(&self.pool)
        .await
    }

    async fn list_active_sections(
        &self,
        scope: CompanyScope,
    ) -> StoreResult<Vec<ContentSectionRow>> {
        sqlx::query_as::<_, ContentSectionRow>(&format!(
            "SELECT {SECTION_COLUMNS} FROM content_sections
             WHERE company_id = $1 AND is_active
             ORDER BY sort_order, created_at"
        ))
        .bind(scope.company_id())
        .fetch_all(&self.pool)
        .await
    }

    async fn get_section(
        &self,
        scope: CompanyScope,
        id: Uuid,
    ) -> StoreResult<Option<ContentSectionRow>> {
        sqlx::query_as::<_, ContentSectionRow>(&format!(
            "SELECT {SECTION_COLUMNS} FROM content_sections WHERE id = $1 AND company_id = $2"
        ))
        .bind(id)
        .bind(scope.company_id())
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert_section(
        &self,
        scope: CompanyScope,
        section: &NewSection,
    ) -> StoreResult<ContentSectionRow> {
        sqlx::query_as::<_, ContentSectionRow>(&format!(
            "INSERT INTO content_sections
                (id, company_id, section_type, title, content, sort_order, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {SECTION_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(scope.company_id())
        .bind(section.section_type.as_str())
        .bind(&section.title)
        .bind(&section.content)
        .bind(section.sort_order)
        .bind(section.is_active)
        .fetch_one(&self.pool)
        .await
    }

    async fn insert_section_if_absent(
        &self,
        scope: CompanyScope,
        section: &NewSection,
    ) -> StoreResult<Option<ContentSectionRow>> {
        sqlx::query_as::<_, ContentSectionRow>(&format!(
            "INSERT INTO content_sections
                (id, company_id, section_type, title, content, sort_order, is_active)
             SELECT $1, $2, $3, $4, $5, $6, $7
             WHERE NOT EXISTS (
                SELECT 1 FROM content_sections WHERE company_id = $2 AND section_type = $3
             )
             RETURNING {SECTION_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(scope.company_id())
        .bind(section.section_type.as_str())
        .bind(&section.title)
        .bind(&section.content)
        .bind(section.sort_order)
        .bind(section.is_active)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_section(
        &self,
        scope: CompanyScope,
        id: Uuid,
        changes: &SectionChanges,
    ) -> StoreResult<Option<ContentSectionRow>> {
        sqlx::query_as::<_, ContentSectionRow>(&format!(
            "UPDATE content_sections SET
                section_type = COALESCE($3, section_type),
                title = COALESCE($4, title),
                content = COALESCE($5, content),
                sort_order = COALESCE($6, sort_order),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1 AND company_id = $2
             RETURNING {SECTION_COLUMNS}"
        ))
        .bind(id)
        .bind(scope.company_id())
        .bind(changes.section_type.map(|t| t.as_str()))
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(changes.sort_order)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_section(&self, scope: CompanyScope, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM content_sections WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(scope.company_id())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_section_order(
        &self,
        scope: CompanyScope,
        id: Uuid,
        order: i32,
    ) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE content_sections SET sort_order = $3, updated_at = NOW()
             WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(scope.company_id())
        .bind(order)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_jobs(&self, scope: CompanyScope) -> StoreResult<Vec<JobRow>> {
        sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE company_id = $1 ORDER BY created_at DESC"
        ))
        .bind(scope.company_id())
        .fetch_all(&self.pool)
        .await
    }

    async fn search_jobs(
        &self,
        scope: CompanyScope,
        filter: &JobFilter,
    ) -> StoreResult<Vec<JobRow>> {
        let mut qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {JOB_COLUMNS} FROM jobs WHERE company_id = "));
        qb.push_bind(scope.company_id());
        filter.push_predicates(&mut qb);
        qb.push(" ORDER BY created_at DESC");

        qb.build_query_as::<JobRow>().fetch_all(&self.pool).await
    }

    async fn get_job(&self, scope: CompanyScope, id: Uuid) -> StoreResult<Option<JobRow>> {
        sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND company_id = $2"
        ))
        .bind(id)
        .bind(scope.company_id())
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert_job(&self, scope: CompanyScope, job: &NewJob) -> StoreResult<JobRow> {
        sqlx::query_as::<_, JobRow>(&format!(
            "INSERT INTO jobs
                (id, company_id, title, description, location, work_policy, department,
                 employment_type, experience, salary_range, posted_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(scope.company_id())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.work_policy.as_str())
        .bind(&job.department)
        .bind(job.employment_type.as_str())
        .bind(job.experience.map(|e| e.as_str()))
        .bind(&job.salary_range)
        .bind(&job.posted_date)
        .fetch_one(&self.pool)
        .await
    }

    async fn insert_job_if_absent(
        &self,
        scope: CompanyScope,
        job: &NewJob,
    ) -> StoreResult<Option<JobRow>> {
        sqlx::query_as::<_, JobRow>(&format!(
            "INSERT INTO jobs
                (id, company_id, title, description, location, work_policy, department,
                 employment_type, experience, salary_range, posted_date)
             SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11
             WHERE NOT EXISTS (SELECT 1 FROM jobs WHERE company_id = $2 AND title = $3)
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(scope.company_id())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.work_policy.as_str())
        .bind(&job.department)
        .bind(job.employment_type.as_str())
        .bind(job.experience.map(|e| e.as_str()))
        .bind(&job.salary_range)
        .bind(&job.posted_date)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_job(
        &self,
        scope: CompanyScope,
        id: Uuid,
        changes: &JobChanges,
    ) -> StoreResult<Option<JobRow>> {
        let (set_description, description) = split_nullable(&changes.description);
        let (set_department, department) = split_nullable(&changes.department);
        let (set_salary, salary_range) = split_nullable(&changes.salary_range);
        let (set_experience, experience) = match changes.experience {
            Some(level) => (true, level.map(|l| l.as_str())),
            None => (false, None),
        };

        sqlx::query_as::<_, JobRow>(&format!(
            "UPDATE jobs SET
                title = COALESCE($3, title),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                location = COALESCE($6, location),
                work_policy = COALESCE($7, work_policy),
                department = CASE WHEN $8 THEN $9 ELSE department END,
                employment_type = COALESCE($10, employment_type),
                experience = CASE WHEN $11 THEN $12 ELSE experience END,
                salary_range = CASE WHEN $13 THEN $14 ELSE salary_range END,
                posted_date = COALESCE($15, posted_date),
                updated_at = NOW()
             WHERE id = $1 AND company_id = $2
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(id)
        .bind(scope.company_id())
        .bind(&changes.title)
        .bind(set_description)
        .bind(description)
        .bind(&changes.location)
        .bind(changes.work_policy.map(|p| p.as_str()))
        .bind(set_department)
        .bind(department)
        .bind(changes.employment_type.map(|t| t.as_str()))
        .bind(set_experience)
        .bind(experience)
        .bind(set_salary)
        .bind(salary_range)
        .bind(&changes.posted_date)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_job(&self, scope: CompanyScope, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(scope.company_id())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn split_nullable(change: &Option<Option<String>>) -> (bool, Option<String>) {
    match change {
        Some(value) => (true, value.clone()),
        None => (false, None),
    }
}
