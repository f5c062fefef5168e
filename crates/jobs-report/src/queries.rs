//! Canned SQL reports over the relational store.
//!
//! Every query returns [`AggregateStat`] rows with averages rounded to two
//! decimals. Ties are broken by group key so results are stable across runs.

use std::fmt;
use std::str::FromStr;

use jobs_model::AggregateStat;
use jobs_transform::{NON_REMOTE_LABEL, REMOTE_LABEL};
use rusqlite::{Row, params_from_iter};
use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::store::{JobStore, i64_to_usize, usize_to_i64};

/// Identifier of a canned query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    AvgSalaryPerSkill,
    RemoteSalaryComparison,
    TopPayingJobTitles,
    TopInDemandSkills,
    HighestPayingSkill,
}

impl QueryKind {
    pub const ALL: [QueryKind; 5] = [
        QueryKind::AvgSalaryPerSkill,
        QueryKind::RemoteSalaryComparison,
        QueryKind::TopPayingJobTitles,
        QueryKind::TopInDemandSkills,
        QueryKind::HighestPayingSkill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::AvgSalaryPerSkill => "avg_salary_per_skill",
            QueryKind::RemoteSalaryComparison => "remote_salary_comparison",
            QueryKind::TopPayingJobTitles => "top_paying_job_titles",
            QueryKind::TopInDemandSkills => "top_in_demand_skills",
            QueryKind::HighestPayingSkill => "highest_paying_skill",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QueryKind::AvgSalaryPerSkill => "Average salary per skill",
            QueryKind::RemoteSalaryComparison => "Remote vs non-remote salaries",
            QueryKind::TopPayingJobTitles => "Top paying job titles",
            QueryKind::TopInDemandSkills => "Most in-demand skills",
            QueryKind::HighestPayingSkill => "Highest paying skill",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        QueryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ReportError::UnknownQuery(s.to_string()))
    }
}

/// Parameters shared by the canned queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Minimum group size for salary rankings.
    pub min_count: usize,
    /// Row limit for "top" queries.
    pub limit: usize,
}

impl JobStore {
    /// Run `kind` and return its rows.
    pub fn run_query(&self, kind: QueryKind, options: QueryOptions) -> Result<Vec<AggregateStat>> {
        match kind {
            QueryKind::AvgSalaryPerSkill => self.avg_salary_per_skill(options.min_count),
            QueryKind::RemoteSalaryComparison => self.remote_salary_comparison(),
            QueryKind::TopPayingJobTitles => {
                self.top_paying_job_titles(options.min_count, options.limit)
            }
            QueryKind::TopInDemandSkills => self.top_in_demand_skills(options.limit),
            QueryKind::HighestPayingSkill => Ok(self
                .highest_paying_skill(options.min_count)?
                .into_iter()
                .collect()),
        }
    }

    /// Skills with at least `min_count` postings, best paid first.
    pub fn avg_salary_per_skill(&self, min_count: usize) -> Result<Vec<AggregateStat>> {
        self.collect_stats(
            "SELECT skill, COUNT(*), ROUND(AVG(salary_avg), 2), MIN(salary_avg), MAX(salary_avg)
             FROM job_skills
             GROUP BY skill
             HAVING COUNT(*) >= ?1
             ORDER BY 3 DESC, skill ASC",
            &[usize_to_i64(min_count, "min_count")?],
        )
    }

    /// Salary summary for remote and non-remote postings.
    pub fn remote_salary_comparison(&self) -> Result<Vec<AggregateStat>> {
        let sql = format!(
            "SELECT CASE WHEN is_remote THEN '{REMOTE_LABEL}' ELSE '{NON_REMOTE_LABEL}' END,
                    COUNT(*), ROUND(AVG(salary_avg), 2), MIN(salary_avg), MAX(salary_avg)
             FROM jobs
             WHERE salary_avg IS NOT NULL
             GROUP BY is_remote
             ORDER BY 3 DESC, 1 ASC"
        );
        self.collect_stats(&sql, &[])
    }

    /// Job titles with at least `min_count` postings, best paid first.
    pub fn top_paying_job_titles(&self, min_count: usize, limit: usize) -> Result<Vec<AggregateStat>> {
        self.collect_stats(
            "SELECT job_title, COUNT(*), ROUND(AVG(salary_avg), 2), MIN(salary_avg), MAX(salary_avg)
             FROM jobs
             WHERE job_title IS NOT NULL AND salary_avg IS NOT NULL
             GROUP BY job_title
             HAVING COUNT(*) >= ?1
             ORDER BY 3 DESC, job_title ASC
             LIMIT ?2",
            &[
                usize_to_i64(min_count, "min_count")?,
                usize_to_i64(limit, "limit")?,
            ],
        )
    }

    /// Most frequently listed skills.
    pub fn top_in_demand_skills(&self, limit: usize) -> Result<Vec<AggregateStat>> {
        self.collect_stats(
            "SELECT skill, COUNT(*), ROUND(AVG(salary_avg), 2), MIN(salary_avg), MAX(salary_avg)
             FROM job_skills
             GROUP BY skill
             ORDER BY 2 DESC, skill ASC
             LIMIT ?1",
            &[usize_to_i64(limit, "limit")?],
        )
    }

    /// The best paid skill with at least `min_count` postings.
    pub fn highest_paying_skill(&self, min_count: usize) -> Result<Option<AggregateStat>> {
        Ok(self.avg_salary_per_skill(min_count)?.into_iter().next())
    }

    fn collect_stats(&self, sql: &str, args: &[i64]) -> Result<Vec<AggregateStat>> {
        let mut stmt = self.connection().prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(args.iter()), decode_stat_row)?;
        let mut stats = Vec::new();
        for row in rows {
            let (group_key, count, mean_salary, min_salary, max_salary) = row?;
            stats.push(AggregateStat {
                group_key,
                count: i64_to_usize(count, "count")?,
                mean_salary,
                min_salary,
                max_salary,
            });
        }
        Ok(stats)
    }
}

type StatRow = (String, i64, f64, f64, f64);

fn decode_stat_row(row: &Row<'_>) -> rusqlite::Result<StatRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

