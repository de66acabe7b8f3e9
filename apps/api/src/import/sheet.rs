//! First-sheet loading through `calamine`, flattened to a rectangular grid
//! whose row 0 is the spreadsheet's first row.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDateTime;

use super::ImportError;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Trimmed text, `None` for blank cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                CellValue::Text(s.clone())
            }
            Data::Int(i) => CellValue::Text(i.to_string()),
            Data::Float(f) => CellValue::Text(format_float(*f)),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) => CellValue::DateTime(value),
                None => CellValue::Text(format_float(dt.as_f64())),
            },
        }
    }
}

/// Whole numbers print without a trailing `.0`.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Loads the first worksheet of an xlsx/xls/ods workbook.
    pub fn open(path: &Path) -> Result<Self, ImportError> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.to_path_buf()));
        }
        let unreadable = |message: String| ImportError::Unreadable {
            path: path.to_path_buf(),
            message,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| unreadable(e.to_string()))?;
        let name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::EmptyWorkbook(path.to_path_buf()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::EmptyWorkbook(path.to_path_buf()))?
            .map_err(|e| unreadable(e.to_string()))?;

        // calamine trims leading blank rows/columns; put them back so the
        // first spreadsheet row is always the header.
        let (Some((start_row, start_col)), Some((end_row, end_col))) = (range.start(), range.end())
        else {
            return Ok(Self::from_rows(name, Vec::new()));
        };
        let mut rows =
            vec![vec![CellValue::Empty; end_col as usize + 1]; end_row as usize + 1];
        for (row, col, data) in range.cells() {
            rows[start_row as usize + row][start_col as usize + col] = CellValue::from(data);
        }

        Ok(Self::from_rows(name, rows))
    }

    /// Header row, trimmed. Blank headers are empty strings.
    pub fn headers(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_text().unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every row after the header.
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
