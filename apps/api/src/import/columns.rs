//! Header-to-field classification.
//!
//! A header is lower-cased and trimmed, then tested against each rule in
//! order; the first rule with a keyword contained in the header wins. The
//! order matters: "employment" is tried before the generic "type" fallback,
//! and "title" before everything else.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobField {
    Title,
    Description,
    Location,
    WorkPolicy,
    EmploymentType,
    Department,
    Experience,
    SalaryRange,
    PostedDate,
}

impl JobField {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Description => "description",
            JobField::Location => "location",
            JobField::WorkPolicy => "work_policy",
            JobField::EmploymentType => "employment_type",
            JobField::Department => "department",
            JobField::Experience => "experience",
            JobField::SalaryRange => "salary_range",
            JobField::PostedDate => "posted_date",
        }
    }
}

const COLUMN_RULES: &[(JobField, &[&str])] = &[
    (JobField::Title, &["title", "job title", "position", "role"]),
    (
        JobField::Description,
        &["description", "job description", "details"],
    ),
    (JobField::Location, &["location", "city", "address"]),
    (
        JobField::WorkPolicy,
        &["work policy", "work_policy", "policy", "remote", "hybrid", "onsite"],
    ),
    (
        JobField::EmploymentType,
        &["employment", "employment type", "employement", "employement type"],
    ),
    (JobField::EmploymentType, &["type", "job type"]),
    (
        JobField::Department,
        &["department", "dept", "team", "division"],
    ),
    (
        JobField::Experience,
        &["experience", "level", "senior", "junior", "mid"],
    ),
    (
        JobField::SalaryRange,
        &["salary", "compensation", "pay", "wage", "salary range"],
    ),
    (
        JobField::PostedDate,
        &["posted", "date", "posted date", "posted_date"],
    ),
];

pub fn classify_header(header: &str) -> Option<JobField> {
    let header = header.trim().to_lowercase();
    if header.is_empty() {
        return None;
    }
    COLUMN_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| header.contains(k)))
        .map(|(field, _)| *field)
}

/// Field → 0-based column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: BTreeMap<JobField, usize>,
}

impl ColumnMap {
    /// When several headers land on one field, the right-most column wins.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut columns = BTreeMap::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(field) = classify_header(header) {
                columns.insert(field, index);
            }
        }
        Self { columns }
    }

    pub fn get(&self, field: JobField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobField, usize)> + '_ {
        self.columns.iter().map(|(field, index)| (*field, *index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_headers() {
        assert_eq!(classify_header("Job Title"), Some(JobField::Title));
        assert_eq!(classify_header("Remote/Hybrid/Onsite"), Some(JobField::WorkPolicy));
        assert_eq!(classify_header("Employment Type"), Some(JobField::EmploymentType));
        assert_eq!(classify_header("Job Type"), Some(JobField::EmploymentType));
        assert_eq!(classify_header(" Dept "), Some(JobField::Department));
        assert_eq!(classify_header("Seniority Level"), Some(JobField::Experience));
        assert_eq!(classify_header("Compensation"), Some(JobField::SalaryRange));
        assert_eq!(classify_header("Posted Date"), Some(JobField::PostedDate));
        assert_eq!(classify_header("City"), Some(JobField::Location));
    }

    #[test]
    fn test_unrecognized_and_blank_headers_ignored() {
        assert_eq!(classify_header("Hiring Manager"), None);
        assert_eq!(classify_header("   "), None);
    }

    #[test]
    fn test_priority_order_is_first_match() {
        // "role" (title) is checked before "description"
        assert_eq!(classify_header("Role Description"), Some(JobField::Title));
        // "employment" precedes the generic "type" fallback either way
        assert_eq!(classify_header("Employement"), Some(JobField::EmploymentType));
        // "policy" beats "type"
        assert_eq!(classify_header("Policy Type"), Some(JobField::WorkPolicy));
    }

    #[test]
    fn test_last_column_wins() {
        let headers: Vec<String> = ["Title", "Location", "Position", "Notes"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let map = ColumnMap::from_headers(&headers);
        assert_eq!(map.get(JobField::Title), Some(2));
        assert_eq!(map.get(JobField::Location), Some(1));
        assert_eq!(map.get(JobField::Description), None);
        assert_eq!(map.iter().count(), 2);
    }
}
