//! Free-text spreadsheet values mapped onto the job enums.

use crate::models::job::{EmploymentType, ExperienceLevel, WorkPolicy};

pub fn employment_type(raw: Option<&str>) -> EmploymentType {
    let Some(value) = raw.map(|v| v.trim().to_lowercase()) else {
        return EmploymentType::default();
    };
    if value.contains("full") {
        EmploymentType::FullTime
    } else if value.contains("part") {
        EmploymentType::PartTime
    } else if value.contains("contract") {
        EmploymentType::Contract
    } else {
        EmploymentType::default()
    }
}

pub fn work_policy(raw: Option<&str>) -> WorkPolicy {
    let Some(value) = raw.map(|v| v.trim().to_lowercase()) else {
        return WorkPolicy::default();
    };
    if value.contains("remote") {
        WorkPolicy::Remote
    } else if value.contains("hybrid") {
        WorkPolicy::Hybrid
    } else {
        // onsite, on-site, office and anything unrecognized
        WorkPolicy::Onsite
    }
}

const SENIOR: &[&str] = &["senior", "sr", "lead", "principal"];
const JUNIOR: &[&str] = &["junior", "jr", "entry", "associate"];
const MID_EXACT: &[&str] = &["mid-level", "mid level", "midlevel", "mid", "middle"];
const MID_PARTIAL: &[&str] = &["mid", "middle"];

/// Exact matches first, then substrings; `None` when nothing fits.
pub fn experience(raw: Option<&str>) -> Option<ExperienceLevel> {
    let value = raw?.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }

    let exact = |words: &[&str]| words.contains(&value.as_str());
    let partial = |words: &[&str]| words.iter().any(|w| value.contains(w));

    if exact(SENIOR) {
        Some(ExperienceLevel::Senior)
    } else if exact(JUNIOR) {
        Some(ExperienceLevel::Junior)
    } else if exact(MID_EXACT) {
        Some(ExperienceLevel::MidLevel)
    } else if partial(SENIOR) {
        Some(ExperienceLevel::Senior)
    } else if partial(JUNIOR) {
        Some(ExperienceLevel::Junior)
    } else if partial(MID_PARTIAL) {
        Some(ExperienceLevel::MidLevel)
    } else {
        None
    }
}
