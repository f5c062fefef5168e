//! Skill list tokenization and explosion into one row per skill.

use jobs_model::{NormalizedRecord, SkillRow};

const SKILL_DELIMITER: char = ',';

/// Canonical form of a skill token. Two tokens name the same skill iff
/// their canonical forms are equal.
pub fn canonical_skill(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Split a comma-delimited skill list into canonical tokens.
///
/// Empty tokens are dropped; duplicates are kept in source order.
pub fn tokenize_skills(raw: &str) -> Vec<String> {
    raw.split(SKILL_DELIMITER)
        .map(canonical_skill)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Explode records into one [`SkillRow`] per skill token.
///
/// Records without a skills source or without a salary average contribute
/// no rows. `job_id` is the 1-based position of the record in `records`.
pub fn explode_skills(records: &[NormalizedRecord]) -> impl Iterator<Item = SkillRow> + '_ {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record.skills_raw.as_ref()?;
            let salary_avg = record.salary_avg()?;
            Some((index + 1, record, salary_avg))
        })
        .flat_map(|(job_id, record, salary_avg)| {
            record.skills.iter().map(move |skill| SkillRow {
                job_id,
                job_title: record.job_title.clone(),
                skill: skill.clone(),
                salary_avg,
            })
        })
}
