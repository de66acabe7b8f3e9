//! The legacy `job_type` field.
//!
//! Only `employment_type` is stored. Responses mirror it as `job_type`, and
//! requests may still send `job_type`, which counts only when
//! `employment_type` is absent.

use crate::models::job::EmploymentType;

/// Maps a legacy `job_type` value. Anything unrecognized, including
/// `internship`, becomes full-time.
pub fn employment_from_job_type(job_type: &str) -> EmploymentType {
    match job_type.trim().to_lowercase().as_str() {
        "part-time" => EmploymentType::PartTime,
        "contract" => EmploymentType::Contract,
        _ => EmploymentType::FullTime,
    }
}

/// The employment type a request asks for, if any.
pub fn requested_employment(
    employment_type: Option<EmploymentType>,
    job_type: Option<&str>,
) -> Option<EmploymentType> {
    employment_type.or_else(|| {
        job_type
            .filter(|t| !t.trim().is_empty())
            .map(employment_from_job_type)
    })
}
