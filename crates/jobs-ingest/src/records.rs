//! Mapping of CSV rows onto [`RawRecord`]s.

use std::path::Path;

use jobs_model::RawRecord;
use jobs_model::columns::{COMPANY, COMPANY_SCORE, DATE, JOB_TITLE, LOCATION, SALARY, SKILLS};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};

/// Positions of the recognized listing columns within a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingColumns {
    pub company: Option<usize>,
    pub company_score: Option<usize>,
    pub job_title: Option<usize>,
    pub location: Option<usize>,
    pub date: Option<usize>,
    pub salary: Option<usize>,
    pub skills: Option<usize>,
}

impl ListingColumns {
    pub fn resolve(table: &CsvTable) -> Self {
        Self {
            company: table.column_index(COMPANY),
            company_score: table.column_index(COMPANY_SCORE),
            job_title: table.column_index(JOB_TITLE),
            location: table.column_index(LOCATION),
            date: table.column_index(DATE),
            salary: table.column_index(SALARY),
            skills: table.column_index(SKILLS),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of recognized columns absent from the table.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (COMPANY, self.company),
            (COMPANY_SCORE, self.company_score),
            (JOB_TITLE, self.job_title),
            (LOCATION, self.location),
            (DATE, self.date),
            (SALARY, self.salary),
            (SKILLS, self.skills),
        ]
        .into_iter()
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn cell(row: &[String], index: Option<usize>) -> Option<String> {
    let value = row.get(index?)?;
    if value.is_empty() {
        None
    } else {
        Some(value.clone())
    }
}

/// Convert table rows to raw records. Missing columns yield absent fields.
pub fn records_from_table(table: &CsvTable, columns: ListingColumns) -> Vec<RawRecord> {
    table
        .rows
        .iter()
        .map(|row| RawRecord {
            company: cell(row, columns.company),
            company_score: cell(row, columns.company_score),
            job_title: cell(row, columns.job_title),
            location: cell(row, columns.location),
            date: cell(row, columns.date),
            salary: cell(row, columns.salary),
            skills: cell(row, columns.skills),
        })
        .collect()
}

/// A loaded listing file: the source table plus its records.
#[derive(Debug, Clone)]
pub struct LoadedListings {
    pub table: CsvTable,
    pub records: Vec<RawRecord>,
}

/// Load the raw listing file.
///
/// Fails when the file is unreadable or shares no column with the expected
/// listing layout; individual missing columns only produce a warning.
pub fn load_listings(path: &Path) -> Result<LoadedListings> {
    let table = read_csv_table(path)?;
    let columns = ListingColumns::resolve(&table);
    if columns.is_empty() {
        return Err(IngestError::NoKnownColumns {
            path: path.to_path_buf(),
            found: table.headers.join(", "),
        });
    }
    let missing = columns.missing();
    if !missing.is_empty() {
        tracing::warn!(
            path = %path.display(),
            missing = %missing.join(", "),
            "listing columns missing, values treated as absent"
        );
    }
    let records = records_from_table(&table, columns);
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        columns = table.headers.len(),
        "dataset loaded"
    );
    Ok(LoadedListings { table, records })
}
