use serde::{Deserialize, Serialize};

/// One (posting, skill) pair produced by exploding a record's skill list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    /// Dense 1-based identity of the posting among surviving records.
    pub job_id: usize,
    pub job_title: Option<String>,
    pub skill: String,
    pub salary_avg: f64,
}
