//! Spreadsheet job import.
//!
//! Headers are classified into job fields, each data row becomes a job
//! draft, and drafts are inserted only when the company has no job with the
//! same title. Re-running an import therefore adds nothing, but it never
//! corrects an existing job either.

pub mod columns;
pub mod normalize;
pub mod sheet;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::jobs::posted_date::label_since;
use crate::models::company::CompanyRow;
use crate::models::job::{
    DEFAULT_LOCATION, DEFAULT_POSTED_DATE, DEPARTMENT_MAX, LOCATION_MAX, POSTED_DATE_MAX,
    SALARY_MAX, TITLE_MAX,
};
use crate::store::{CareersStore, CompanyScope, NewJob};

use self::columns::{ColumnMap, JobField};
use self::sheet::{CellValue, Sheet};

static EMPTY_CELL: CellValue = CellValue::Empty;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Excel file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("Workbook {} has no sheets", .0.display())]
    EmptyWorkbook(PathBuf),

    #[error("Could not find \"title\" or \"job title\" column in Excel file")]
    MissingTitleColumn,

    #[error("Company with slug \"{0}\" not found")]
    UnknownCompany(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// Duplicates plus rows without a title.
    pub skipped: usize,
    pub missing_title: usize,
    pub rows_processed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Imported(String),
    /// A job with this title already exists for the company.
    Duplicate(String),
    MissingTitle,
}

/// Resolves the column mapping, failing when no title column exists.
pub fn column_map(sheet: &Sheet) -> Result<ColumnMap, ImportError> {
    let map = ColumnMap::from_headers(&sheet.headers());
    if map.get(JobField::Title).is_none() {
        return Err(ImportError::MissingTitleColumn);
    }
    Ok(map)
}

/// Builds a job from one data row; `None` when the title cell is blank.
/// Date cells in the posted-date column become labels relative to `now`.
pub fn draft_from_row(map: &ColumnMap, row: &[CellValue], now: DateTime<Utc>) -> Option<NewJob> {
    let cell = |field: JobField| {
        map.get(field)
            .and_then(|index| row.get(index))
            .unwrap_or(&EMPTY_CELL)
    };
    let text = |field: JobField, max: usize| cell(field).as_text().map(|t| clip(&t, max));

    let title = text(JobField::Title, TITLE_MAX)?;
    let posted_date = match cell(JobField::PostedDate) {
        CellValue::DateTime(at) => label_since(at.and_utc(), now),
        other => other
            .as_text()
            .map(|t| clip(&t, POSTED_DATE_MAX))
            .unwrap_or_else(|| DEFAULT_POSTED_DATE.to_string()),
    };

    Some(NewJob {
        title,
        description: cell(JobField::Description).as_text(),
        location: text(JobField::Location, LOCATION_MAX)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        work_policy: normalize::work_policy(cell(JobField::WorkPolicy).as_text().as_deref()),
        department: text(JobField::Department, DEPARTMENT_MAX),
        employment_type: normalize::employment_type(
            cell(JobField::EmploymentType).as_text().as_deref(),
        ),
        experience: normalize::experience(cell(JobField::Experience).as_text().as_deref()),
        salary_range: text(JobField::SalaryRange, SALARY_MAX),
        posted_date,
    })
}

fn clip(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Number of data rows an import will visit. A `limit` of zero means all.
pub fn rows_to_process(sheet: &Sheet, limit: Option<usize>) -> usize {
    let total = sheet.data_rows().len();
    match limit {
        Some(limit) if limit > 0 => limit.min(total),
        _ => total,
    }
}

/// Imports the rows of `sheet` into `company`, calling `on_row` with the
/// 1-based spreadsheet row number and outcome of every visited row.
///
/// Each row is its own insert; a database failure stops the run with the
/// earlier rows already written.
pub async fn import_jobs<F>(
    store: &dyn CareersStore,
    company: &CompanyRow,
    sheet: &Sheet,
    limit: Option<usize>,
    mut on_row: F,
) -> Result<ImportReport, ImportError>
where
    F: FnMut(usize, &RowOutcome),
{
    let map = column_map(sheet)?;
    let scope = CompanyScope::of(company);
    let now = Utc::now();
    let mut report = ImportReport::default();

    let count = rows_to_process(sheet, limit);
    for (index, row) in sheet.data_rows().iter().take(count).enumerate() {
        report.rows_processed += 1;

        let outcome = match draft_from_row(&map, row, now) {
            None => {
                report.missing_title += 1;
                report.skipped += 1;
                RowOutcome::MissingTitle
            }
            Some(draft) => match store.insert_job_if_absent(scope, &draft).await? {
                Some(job) => {
                    report.imported += 1;
                    RowOutcome::Imported(job.title)
                }
                None => {
                    report.skipped += 1;
                    RowOutcome::Duplicate(draft.title)
                }
            },
        };
        // Header is spreadsheet row 1
        on_row(index + 2, &outcome);
    }

    info!(
        "Imported {} jobs into {} ({} skipped, {} without title)",
        report.imported, company.slug, report.skipped, report.missing_title
    );
    Ok(report)
}
