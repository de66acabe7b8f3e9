use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::import::sheet::{CellValue, Sheet};
use crate::import::{column_map, import_jobs, rows_to_process, ImportError, RowOutcome};
use crate::store::CareersStore;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy)]
pub enum SampleRows {
    /// `import-jobs --show-fields`: one row, values cut at 50 chars.
    First,
    /// `show-excel-fields`: three rows, values cut at 100 chars.
    FirstThree,
}

impl SampleRows {
    fn count(self) -> usize {
        match self {
            SampleRows::First => 1,
            SampleRows::FirstThree => 3,
        }
    }

    fn max_chars(self) -> usize {
        match self {
            SampleRows::First => 50,
            SampleRows::FirstThree => 100,
        }
    }
}

pub async fn run(
    store: &dyn CareersStore,
    company_slug: &str,
    excel_file: &Path,
    limit: Option<usize>,
) -> Result<()> {
    let sheet = Sheet::open(excel_file)?;

    let company = store
        .company_by_slug(company_slug)
        .await?
        .ok_or_else(|| ImportError::UnknownCompany(company_slug.to_string()))?;
    println!("{}", format!("Found company: {}", company.name).green());

    let headers = sheet.headers();
    let map = column_map(&sheet);
    println!("\nColumn mapping:");
    match &map {
        Ok(map) => {
            for (field, index) in map.iter() {
                println!("  {}: Column {} ({})", field.as_str(), index + 1, headers[index]);
            }
        }
        Err(_) => println!("  {}", "(no title column)".dimmed()),
    }
    map?;

    println!(
        "\nProcessing {} rows...\n",
        rows_to_process(&sheet, limit)
    );

    let report = import_jobs(store, &company, &sheet, limit, |row, outcome| match outcome {
        RowOutcome::Imported(title) => {
            println!("{}", format!("  ✓ Imported: {title}").green())
        }
        RowOutcome::Duplicate(title) => {
            println!("{}", format!("  - Skipped (already exists): {title}").yellow())
        }
        RowOutcome::MissingTitle => {
            println!("{}", format!("  - Skipped row {row}: no title").yellow())
        }
    })
    .await?;

    println!("{}", "\n✅ Import complete!".bright_green().bold());
    println!("   Imported: {} jobs", report.imported);
    println!("   Skipped: {} jobs", report.skipped);
    Ok(())
}

/// Prints the sheet name, size, numbered headers and a sample of data rows.
/// Needs no database.
pub fn show_structure(excel_file: &Path, sample: SampleRows) -> Result<()> {
    let sheet = Sheet::open(excel_file)?;
    let headers = sheet.headers();
    let rule = "=".repeat(RULE_WIDTH);

    println!("{}", rule.green());
    println!("{}", "Excel File Structure".green().bold());
    println!("{}", rule.green());
    println!("\nSheet: {}", sheet.name);
    println!("Total Rows: {}", sheet.row_count());
    println!("Total Columns: {}", sheet.column_count());

    println!("\nColumn Headers ({} columns):", headers.len());
    for (index, header) in headers.iter().enumerate() {
        println!("  {}. {header}", index + 1);
    }

    let rows = sheet.data_rows();
    if rows.is_empty() {
        println!("\n{}", "No data rows".dimmed());
    }
    for (index, row) in rows.iter().take(sample.count()).enumerate() {
        println!("\nRow {}:", index + 2);
        for (line, value) in sample_lines(&headers, row, sample.max_chars()) {
            println!("  {line}: {value}");
        }
    }

    println!("\n{}", rule.green());
    Ok(())
}

/// (header, value) pairs for the named columns of a row, values cut to
/// `max_chars` with a trailing ellipsis.
fn sample_lines<'a>(
    headers: &'a [String],
    row: &[CellValue],
    max_chars: usize,
) -> Vec<(&'a str, String)> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.is_empty())
        .map(|(index, header)| {
            let value = row
                .get(index)
                .and_then(CellValue::as_text)
                .unwrap_or_default();
            (header.as_str(), truncate(&value, max_chars))
        })
        .collect()
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        format!("{}...", value.chars().take(max_chars).collect::<String>())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate(&"a".repeat(60), 50), format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_sample_lines_skip_unnamed_columns() {
        let headers = vec!["Title".to_string(), String::new(), "City".to_string()];
        let row = vec![
            CellValue::Text("Engineer".into()),
            CellValue::Text("ignored".into()),
        ];
        assert_eq!(
            sample_lines(&headers, &row, 100),
            vec![("Title", "Engineer".to_string()), ("City", String::new())]
        );
    }
}
