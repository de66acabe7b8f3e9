use serde::{de, Deserialize, Deserializer};

use crate::errors::AppError;
use crate::extract::{nullable, optional_text, required_text};
use crate::jobs::compat::requested_employment;
use crate::models::job::{
    EmploymentType, ExperienceLevel, WorkPolicy, DEFAULT_POSTED_DATE, DEPARTMENT_MAX,
    LOCATION_MAX, POSTED_DATE_MAX, SALARY_MAX, TITLE_MAX,
};
use crate::store::{JobChanges, NewJob};

const DESCRIPTION_MAX: usize = usize::MAX;

/// Body of `POST /api/jobs`.
#[derive(Debug, Deserialize)]
pub struct JobInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: String,
    #[serde(default)]
    pub work_policy: Option<WorkPolicy>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    /// Legacy alias of `employment_type`.
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "optional_experience")]
    pub experience: Option<ExperienceLevel>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
}

/// Body of `PUT|PATCH /api/jobs/:id`. Nullable fields accept `null` to clear.
#[derive(Debug, Default, Deserialize)]
pub struct JobPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub location: Option<String>,
    pub work_policy: Option<WorkPolicy>,
    #[serde(default, deserialize_with = "nullable")]
    pub department: Option<Option<String>>,
    pub employment_type: Option<EmploymentType>,
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "nullable_experience")]
    pub experience: Option<Option<ExperienceLevel>>,
    #[serde(default, deserialize_with = "nullable")]
    pub salary_range: Option<Option<String>>,
    pub posted_date: Option<String>,
}

/// Experience arrives from `<select>` inputs, where "" means unset.
fn optional_experience<'de, D>(deserializer: D) -> Result<Option<ExperienceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.trim() {
        "" => Ok(None),
        "junior" => Ok(Some(ExperienceLevel::Junior)),
        "mid-level" => Ok(Some(ExperienceLevel::MidLevel)),
        "senior" => Ok(Some(ExperienceLevel::Senior)),
        other => Err(de::Error::unknown_variant(
            other,
            &["junior", "mid-level", "senior"],
        )),
    }
}

fn nullable_experience<'de, D>(
    deserializer: D,
) -> Result<Option<Option<ExperienceLevel>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_experience(deserializer).map(Some)
}

fn posted_date(value: Option<&str>) -> Result<String, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(text) => required_text(text, "posted_date", POSTED_DATE_MAX),
        None => Ok(DEFAULT_POSTED_DATE.to_string()),
    }
}

impl JobInput {
    pub fn validate(self) -> Result<NewJob, AppError> {
        Ok(NewJob {
            title: required_text(&self.title, "title", TITLE_MAX)?,
            description: optional_text(Some(self.description), "description", DESCRIPTION_MAX)?
                .flatten(),
            location: required_text(&self.location, "location", LOCATION_MAX)?,
            work_policy: self.work_policy.unwrap_or_default(),
            department: optional_text(Some(self.department), "department", DEPARTMENT_MAX)?
                .flatten(),
            employment_type: requested_employment(self.employment_type, self.job_type.as_deref())
                .unwrap_or_default(),
            experience: self.experience,
            salary_range: optional_text(Some(self.salary_range), "salary_range", SALARY_MAX)?
                .flatten(),
            posted_date: posted_date(self.posted_date.as_deref())?,
        })
    }
}

impl JobPatch {
    pub fn validate(self) -> Result<JobChanges, AppError> {
        Ok(JobChanges {
            title: self
                .title
                .as_deref()
                .map(|t| required_text(t, "title", TITLE_MAX))
                .transpose()?,
            description: optional_text(self.description, "description", DESCRIPTION_MAX)?,
            location: self
                .location
                .as_deref()
                .map(|l| required_text(l, "location", LOCATION_MAX))
                .transpose()?,
            work_policy: self.work_policy,
            department: optional_text(self.department, "department", DEPARTMENT_MAX)?,
            employment_type: requested_employment(self.employment_type, self.job_type.as_deref()),
            experience: self.experience,
            salary_range: optional_text(self.salary_range, "salary_range", SALARY_MAX)?,
            posted_date: self
                .posted_date
                .as_deref()
                .map(|p| posted_date(Some(p)))
                .transpose()?,
        })
    }
}
