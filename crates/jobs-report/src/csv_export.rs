//! Cleaned dataset export.

use std::fs;
use std::io::Write;
use std::path::Path;

use jobs_model::NormalizedRecord;
use jobs_model::columns::CLEANED_COLUMNS;
use tracing::info;

use crate::error::{ReportError, Result};

/// Render a number the way the exports print it: shortest round-trip form.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Write one row per record to `path`, creating parent directories.
pub fn write_cleaned_dataset(path: &Path, records: &[NormalizedRecord]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::io(parent, source))?;
    }
    let writer = csv::Writer::from_path(path).map_err(|source| ReportError::csv(path, source))?;
    write_records(writer, records).map_err(|source| ReportError::csv(path, source))?;
    info!(path = %path.display(), rows = records.len(), "cleaned dataset written");
    Ok(records.len())
}

/// Serialize `records` in cleaned-export column order.
pub fn write_records<W: Write>(
    mut writer: csv::Writer<W>,
    records: &[NormalizedRecord],
) -> csv::Result<()> {
    writer.write_record(CLEANED_COLUMNS)?;
    for record in records {
        writer.write_record(cleaned_row(record))?;
    }
    writer.flush()?;
    Ok(())
}

fn cleaned_row(record: &NormalizedRecord) -> [String; 10] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let number = |value: Option<f64>| value.map(format_number).unwrap_or_default();
    [
        text(&record.company),
        text(&record.company_score),
        text(&record.job_title),
        text(&record.location),
        record
            .days_since_posted
            .map(|days| days.to_string())
            .unwrap_or_default(),
        number(record.salary_min()),
        number(record.salary_max()),
        number(record.salary_avg()),
        record
            .salary_unit()
            .map(|unit| unit.as_str().to_string())
            .unwrap_or_default(),
        text(&record.skills_raw),
    ]
}
