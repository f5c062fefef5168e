use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file as trimmed text cells, every row padded to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a column, matching case-insensitively after header normalization.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(&wanted))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a headed CSV file. Blank rows are skipped; short rows are padded.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::from_csv(path, source))?;
    let mut records = reader.records();
    let headers: Vec<String> = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|source| IngestError::from_csv(path, source))?;
                if record.iter().all(|value| value.trim().is_empty()) {
                    continue;
                }
                break record.iter().map(normalize_header).collect();
            }
            None => {
                return Err(IngestError::EmptyCsv {
                    path: path.to_path_buf(),
                });
            }
        }
    };
    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::from_csv(path, source))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
        }
        rows.push(row);
    }
    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}
