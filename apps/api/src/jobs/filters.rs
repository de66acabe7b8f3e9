//! Public job board filters.
//!
//! Filters are independent and AND-combined. Blank values are ignored.
//! Categorical filters are normalized through a synonym table and compared
//! case-insensitively for equality; text filters are case-insensitive
//! substring matches.

use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

/// Raw query string of `GET /api/jobs/public`.
#[derive(Debug, Default, Deserialize)]
pub struct PublicJobQuery {
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub work_policy: Option<String>,
    pub experience: Option<String>,
    pub department: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub work_policy: Option<String>,
    pub experience: Option<String>,
    pub department: Option<String>,
    /// Matched against title or description.
    pub search: Option<String>,
}

const EMPLOYMENT_TYPE_SYNONYMS: &[(&str, &str)] = &[
    ("full-time", "full-time"),
    ("fulltime", "full-time"),
    ("full time", "full-time"),
    ("part-time", "part-time"),
    ("parttime", "part-time"),
    ("part time", "part-time"),
    ("contract", "contract"),
];

const WORK_POLICY_SYNONYMS: &[(&str, &str)] = &[
    ("remote", "remote"),
    ("hybrid", "hybrid"),
    ("onsite", "onsite"),
    ("on-site", "onsite"),
    ("on site", "onsite"),
    ("office", "onsite"),
];

const EXPERIENCE_SYNONYMS: &[(&str, &str)] = &[
    ("senior", "senior"),
    ("junior", "junior"),
    ("mid-level", "mid-level"),
    ("mid level", "mid-level"),
    ("midlevel", "mid-level"),
    ("mid", "mid-level"),
];

impl JobFilter {
    pub fn from_query(query: &PublicJobQuery) -> Self {
        Self {
            location: non_blank(&query.location),
            employment_type: non_blank(&query.employment_type)
                .map(|v| canonical(&v, EMPLOYMENT_TYPE_SYNONYMS)),
            work_policy: non_blank(&query.work_policy)
                .map(|v| canonical(&v, WORK_POLICY_SYNONYMS)),
            experience: non_blank(&query.experience).map(|v| canonical(&v, EXPERIENCE_SYNONYMS)),
            department: non_blank(&query.department),
            search: non_blank(&query.search),
        }
    }

    /// Appends one ` AND ...` predicate per active filter.
    pub fn push_predicates(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        if let Some(location) = &self.location {
            qb.push(" AND location ILIKE ");
            qb.push_bind(contains_pattern(location));
        }
        if let Some(employment_type) = &self.employment_type {
            qb.push(" AND LOWER(employment_type) = ");
            qb.push_bind(employment_type.clone());
        }
        if let Some(work_policy) = &self.work_policy {
            qb.push(" AND LOWER(work_policy) = ");
            qb.push_bind(work_policy.clone());
        }
        // NULL experience never equals anything, so unset rows drop out
        if let Some(experience) = &self.experience {
            qb.push(" AND LOWER(experience) = ");
            qb.push_bind(experience.clone());
        }
        if let Some(department) = &self.department {
            qb.push(" AND department ILIKE ");
            qb.push_bind(contains_pattern(department));
        }
        if let Some(search) = &self.search {
            let pattern = contains_pattern(search);
            qb.push(" AND (title ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR description ILIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Unknown values pass through lowercased and then simply match nothing.
fn canonical(value: &str, synonyms: &[(&str, &str)]) -> String {
    let lowered = value.to_lowercase();
    synonyms
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lowered)
}

/// `%term%` with LIKE metacharacters escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> PublicJobQuery {
        PublicJobQuery {
            company: Some("acme".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let q = PublicJobQuery {
            location: Some("   ".to_string()),
            search: Some(String::new()),
            ..query()
        };
        assert_eq!(JobFilter::from_query(&q), JobFilter::default());
    }

    #[test]
    fn test_employment_type_synonyms() {
        for raw in ["Full Time", "fulltime", " FULL-TIME "] {
            let q = PublicJobQuery {
                employment_type: Some(raw.to_string()),
                ..query()
            };
            assert_eq!(
                JobFilter::from_query(&q).employment_type.as_deref(),
                Some("full-time"),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_work_policy_and_experience_synonyms() {
        let q = PublicJobQuery {
            work_policy: Some("On-Site".to_string()),
            experience: Some("Mid".to_string()),
            ..query()
        };
        let filter = JobFilter::from_query(&q);
        assert_eq!(filter.work_policy.as_deref(), Some("onsite"));
        assert_eq!(filter.experience.as_deref(), Some("mid-level"));
    }

    #[test]
    fn test_unknown_value_passes_through_lowercased() {
        let q = PublicJobQuery {
            employment_type: Some("Internship".to_string()),
            ..query()
        };
        assert_eq!(
            JobFilter::from_query(&q).employment_type.as_deref(),
            Some("internship")
        );
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("berlin"), "%berlin%");
    }

    #[test]
    fn test_predicates_are_and_combined() {
        let filter = JobFilter {
            work_policy: Some("remote".to_string()),
            experience: Some("senior".to_string()),
            search: Some("rust".to_string()),
            ..Default::default()
        };
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM jobs WHERE company_id = ");
        qb.push_bind(uuid::Uuid::nil());
        filter.push_predicates(&mut qb);

        assert_eq!(
            qb.sql(),
            "SELECT * FROM jobs WHERE company_id = $1 \
             AND LOWER(work_policy) = $2 \
             AND LOWER(experience) = $3 \
             AND (title ILIKE $4 OR description ILIKE $5)"
        );
    }

    #[test]
    fn test_no_filters_adds_nothing() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1");
        JobFilter::default().push_predicates(&mut qb);
        assert_eq!(qb.sql(), "SELECT 1");
    }
}
