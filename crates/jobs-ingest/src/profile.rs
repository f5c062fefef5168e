//! Quick exploratory profile of a loaded table.

use crate::csv_table::CsvTable;

/// Shape, missing-value counts and a short preview of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetProfile {
    pub row_count: usize,
    pub columns: Vec<String>,
    /// Empty cells per column, in column order.
    pub missing: Vec<(String, usize)>,
    pub preview: Vec<Vec<String>>,
}

impl DatasetProfile {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn missing_for(&self, column: &str) -> Option<usize> {
        self.missing
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, count)| *count)
    }
}

pub fn profile_table(table: &CsvTable, preview_rows: usize) -> DatasetProfile {
    let missing = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let count = table
                .rows
                .iter()
                .filter(|row| row.get(idx).is_none_or(|value| value.is_empty()))
                .count();
            (header.clone(), count)
        })
        .collect();
    DatasetProfile {
        row_count: table.rows.len(),
        columns: table.headers.clone(),
        missing,
        preview: table.rows.iter().take(preview_rows).cloned().collect(),
    }
}
