use serde::Serialize;
use uuid::Uuid;

use crate::companies::serializers::CompanyPublicView;
use crate::models::company::CompanyRow;
use crate::models::job::JobRow;

/// Recruiter-facing job view.
#[derive(Debug, Serialize)]
pub struct JobView {
    pub id: Uuid,
    pub company: Uuid,
    pub company_name: String,
    pub company_slug: String,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub work_policy: String,
    pub department: Option<String>,
    pub employment_type: String,
    /// Legacy mirror of `employment_type`.
    pub job_type: String,
    pub experience: Option<String>,
    pub salary_range: Option<String>,
    pub posted_date: String,
}

#[derive(Debug, Serialize)]
pub struct JobPublicView {
    pub id: Uuid,
    pub company: CompanyPublicView,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub work_policy: String,
    pub department: Option<String>,
    pub employment_type: String,
    pub job_type: String,
    pub experience: Option<String>,
    pub salary_range: Option<String>,
    pub posted_date: String,
}

impl JobView {
    pub fn new(row: JobRow, company: &CompanyRow) -> Self {
        Self {
            id: row.id,
            company: company.id,
            company_name: company.name.clone(),
            company_slug: company.slug.clone(),
            title: row.title,
            description: row.description,
            location: row.location,
            work_policy: row.work_policy,
            department: row.department,
            job_type: row.employment_type.clone(),
            employment_type: row.employment_type,
            experience: row.experience,
            salary_range: row.salary_range,
            posted_date: row.posted_date,
        }
    }

    pub fn list(rows: Vec<JobRow>, company: &CompanyRow) -> Vec<Self> {
        rows.into_iter().map(|row| Self::new(row, company)).collect()
    }
}

impl JobPublicView {
    pub fn new(row: JobRow, company: &CompanyRow, asset_base_url: &str) -> Self {
        Self {
            id: row.id,
            company: CompanyPublicView::new(company, asset_base_url),
            title: row.title,
            description: row.description,
            location: row.location,
            work_policy: row.work_policy,
            department: row.department,
            job_type: row.employment_type.clone(),
            employment_type: row.employment_type,
            experience: row.experience,
            salary_range: row.salary_range,
            posted_date: row.posted_date,
        }
    }
}
