//! Relational export of normalized postings into SQLite.
//!
//! The store holds two tables: `jobs` with one row per surviving posting and
//! `job_skills` with one row per (posting, skill) pair. Every build drops and
//! recreates both tables inside a single transaction, so the database always
//! reflects exactly one run.

use std::fs;
use std::path::{Path, PathBuf};

use jobs_model::NormalizedRecord;
use jobs_transform::explode_skills;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, params};
use tracing::{info, info_span};

use crate::csv_export::format_number;
use crate::error::{ReportError, Result};

pub const JOBS_TABLE: &str = "jobs";
pub const JOB_SKILLS_TABLE: &str = "job_skills";
pub const JOBS_EXPORT_FILENAME: &str = "jobs_table.csv";
pub const JOB_SKILLS_EXPORT_FILENAME: &str = "job_skills_table.csv";

const SCHEMA_SQL: &str = r#"
DROP TABLE IF EXISTS job_skills;
DROP TABLE IF EXISTS jobs;

CREATE TABLE jobs (
    job_id INTEGER PRIMARY KEY,
    company TEXT,
    company_score TEXT,
    job_title TEXT,
    location TEXT,
    days_since_posted INTEGER,
    salary_min REAL,
    salary_max REAL,
    salary_avg REAL,
    salary_type TEXT,
    is_remote INTEGER NOT NULL
);

CREATE TABLE job_skills (
    job_id INTEGER NOT NULL REFERENCES jobs(job_id),
    job_title TEXT,
    salary_avg REAL,
    skill TEXT NOT NULL
);

CREATE INDEX idx_job_skills_skill ON job_skills(skill);
"#;

/// Row counts written by [`JobStore::rebuild`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreSummary {
    pub jobs: usize,
    pub job_skills: usize,
}

/// Handle on the analysis database.
pub struct JobStore {
    conn: Connection,
}

impl JobStore {
    /// Open or create the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ReportError::io(parent, source))?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", 1)?;
        Ok(Self { conn })
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", 1)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Replace both tables with `records` and their exploded skills.
    ///
    /// `job_id` is the 1-based position of the record in `records`.
    pub fn rebuild(&mut self, records: &[NormalizedRecord]) -> Result<StoreSummary> {
        let span = info_span!("store_rebuild", records = records.len());
        let _guard = span.enter();

        let tx = self.conn.transaction()?;
        tx.execute_batch(SCHEMA_SQL)?;
        let mut summary = StoreSummary::default();
        {
            let mut insert_job = tx.prepare(
                "INSERT INTO jobs (job_id, company, company_score, job_title, location,
                                   days_since_posted, salary_min, salary_max, salary_avg,
                                   salary_type, is_remote)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for (index, record) in records.iter().enumerate() {
                let job_id = usize_to_i64(index + 1, "job_id")?;
                insert_job.execute(params![
                    job_id,
                    record.company,
                    record.company_score,
                    record.job_title,
                    record.location,
                    record.days_since_posted,
                    record.salary_min(),
                    record.salary_max(),
                    record.salary_avg(),
                    record.salary_unit().map(|unit| unit.as_str()),
                    record.is_remote,
                ])?;
                summary.jobs += 1;
            }

            let mut insert_skill = tx.prepare(
                "INSERT INTO job_skills (job_id, job_title, salary_avg, skill)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in explode_skills(records) {
                insert_skill.execute(params![
                    usize_to_i64(row.job_id, "job_id")?,
                    row.job_title,
                    row.salary_avg,
                    row.skill,
                ])?;
                summary.job_skills += 1;
            }
        }
        tx.commit()?;

        info!(
            jobs = summary.jobs,
            job_skills = summary.job_skills,
            "relational store rebuilt"
        );
        Ok(summary)
    }

    /// Number of rows in `table`.
    pub fn row_count(&self, table: &str) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        i64_to_usize(count, "row_count")
    }

    /// Dump `jobs` and `job_skills` as CSV files into `output_dir`.
    pub fn export_tables_to_csv(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|source| ReportError::io(output_dir, source))?;
        let mut written = Vec::new();
        for (table, filename) in [
            (JOBS_TABLE, JOBS_EXPORT_FILENAME),
            (JOB_SKILLS_TABLE, JOB_SKILLS_EXPORT_FILENAME),
        ] {
            let path = output_dir.join(filename);
            let rows = self.export_table(table, &path)?;
            info!(table, path = %path.display(), rows, "table exported");
            written.push(path);
        }
        Ok(written)
    }

    fn export_table(&self, table: &str, path: &Path) -> Result<usize> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {table} ORDER BY rowid"))?;
        let headers: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let column_count = headers.len();

        let mut writer =
            csv::Writer::from_path(path).map_err(|source| ReportError::csv(path, source))?;
        writer
            .write_record(&headers)
            .map_err(|source| ReportError::csv(path, source))?;

        let mut rows = stmt.query([])?;
        let mut count = 0;
        while let Some(row) = rows.next()? {
            let mut fields = Vec::with_capacity(column_count);
            for index in 0..column_count {
                fields.push(value_to_field(row.get_ref(index)?));
            }
            writer
                .write_record(&fields)
                .map_err(|source| ReportError::csv(path, source))?;
            count += 1;
        }
        writer
            .flush()
            .map_err(|source| ReportError::io(path, source))?;
        Ok(count)
    }
}

fn value_to_field(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(number) => number.to_string(),
        ValueRef::Real(number) => format_number(number),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

pub(crate) fn usize_to_i64(value: usize, field: &'static str) -> Result<i64> {
    i64::try_from(value).map_err(|_| ReportError::IntegerOverflow(field))
}

pub(crate) fn i64_to_usize(value: i64, field: &'static str) -> Result<usize> {
    usize::try_from(value).map_err(|_| ReportError::IntegerOverflow(field))
}

#[cfg(test)]
mod tests {
    use jobs_model::{Salary, SalaryUnit};

    use super::*;

    fn record(title: &str, skills: &str) -> NormalizedRecord {
        NormalizedRecord {
            job_title: Some(title.to_string()),
            salary: Some(Salary::from_bounds(40_000.0, 50_000.0, SalaryUnit::Yearly)),
            skills_raw: Some(skills.to_string()),
            skills: jobs_transform::tokenize_skills(skills),
            ..NormalizedRecord::default()
        }
    }

    #[test]
    fn test_rebuild_replaces_rows() {
        let mut store = JobStore::open_in_memory().expect("open");
        let records = vec![record("Analyst", "SQL, Excel"), record("Engineer", "Rust")];
        let summary = store.rebuild(&records).expect("rebuild");
        assert_eq!(summary.jobs, 2);
        assert_eq!(summary.job_skills, 3);

        let summary = store.rebuild(&records[..1]).expect("rebuild again");
        assert_eq!(summary, StoreSummary { jobs: 1, job_skills: 2 });
        assert_eq!(store.row_count(JOBS_TABLE).expect("count"), 1);
        assert_eq!(store.row_count(JOB_SKILLS_TABLE).expect("count"), 2);
    }

    #[test]
    fn test_skill_rows_reference_jobs() {
        let mut store = JobStore::open_in_memory().expect("open");
        store
            .rebuild(&[record("Analyst", "SQL"), record("Engineer", "Rust")])
            .expect("rebuild");
        let job_id: i64 = store
            .connection()
            .query_row(
                "SELECT job_id FROM job_skills WHERE skill = 'rust'",
                [],
                |row| row.get(0),
            )
            .expect("query");
        assert_eq!(job_id, 2);
    }

    #[test]
    fn test_value_to_field() {
        assert_eq!(value_to_field(ValueRef::Null), "");
        assert_eq!(value_to_field(ValueRef::Integer(3)), "3");
        assert_eq!(value_to_field(ValueRef::Real(45_000.0)), "45000");
        assert_eq!(value_to_field(ValueRef::Text(b"sql")), "sql");
    }
}
