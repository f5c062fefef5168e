//! Grouped count and salary statistics.
//!
//! [`aggregate`] is the generic grouping primitive; the `by_*` helpers bind
//! it to the categorical fields the reports use. Results are returned in
//! full: truncating to a "top N" is left to the caller.

use std::collections::BTreeMap;

use jobs_model::{AggregateStat, NormalizedRecord, SkillRow, SortBy};

/// Group label for remote postings.
pub const REMOTE_LABEL: &str = "Remote";
/// Group label for postings without a remote marker.
pub const NON_REMOTE_LABEL: &str = "Non-remote";

#[derive(Debug, Clone, Copy)]
struct Accumulator {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn new(value: f64) -> Self {
        Self {
            count: 1,
            sum: value,
            min: value,
            max: value,
        }
    }

    fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

/// Group `items` by `key` and summarize `value` per group.
///
/// Items with an absent key or value are skipped. Groups with fewer than
/// `min_count` values are suppressed. Ordering is descending on the chosen
/// field with ties broken by group key.
pub fn aggregate<T, K, V>(
    items: &[T],
    key: K,
    value: V,
    min_count: usize,
    order: SortBy,
) -> Vec<AggregateStat>
where
    K: for<'a> Fn(&'a T) -> Option<&'a str>,
    V: Fn(&T) -> Option<f64>,
{
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for item in items {
        let (Some(group), Some(value)) = (key(item), value(item)) else {
            continue;
        };
        groups
            .entry(group)
            .and_modify(|acc| acc.push(value))
            .or_insert_with(|| Accumulator::new(value));
    }
    let mut stats: Vec<AggregateStat> = groups
        .into_iter()
        .filter(|(_, acc)| acc.count >= min_count)
        .map(|(group, acc)| AggregateStat {
            group_key: group.to_string(),
            count: acc.count,
            mean_salary: acc.sum / acc.count as f64,
            min_salary: acc.min,
            max_salary: acc.max,
        })
        .collect();
    sort_stats(&mut stats, order);
    stats
}

/// Sort aggregate rows descending on `order`, ties by group key.
pub fn sort_stats(stats: &mut [AggregateStat], order: SortBy) {
    stats.sort_by(|a, b| {
        let primary = match order {
            SortBy::MeanSalary => b.mean_salary.total_cmp(&a.mean_salary),
            SortBy::Count => b.count.cmp(&a.count),
        };
        primary.then_with(|| a.group_key.cmp(&b.group_key))
    });
}

/// Occurrences of each key, most frequent first (ties by key).
pub fn value_counts<T, K>(items: &[T], key: K) -> Vec<(String, usize)>
where
    K: for<'a> Fn(&'a T) -> Option<&'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        if let Some(group) = key(item) {
            *counts.entry(group).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(group, count)| (group.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

pub fn by_location(
    records: &[NormalizedRecord],
    min_count: usize,
    order: SortBy,
) -> Vec<AggregateStat> {
    aggregate(
        records,
        |record| record.location.as_deref(),
        NormalizedRecord::salary_avg,
        min_count,
        order,
    )
}

pub fn by_job_title(
    records: &[NormalizedRecord],
    min_count: usize,
    order: SortBy,
) -> Vec<AggregateStat> {
    aggregate(
        records,
        |record| record.job_title.as_deref(),
        NormalizedRecord::salary_avg,
        min_count,
        order,
    )
}

pub fn by_skill(rows: &[SkillRow], min_count: usize, order: SortBy) -> Vec<AggregateStat> {
    aggregate(
        rows,
        |row| Some(row.skill.as_str()),
        |row| Some(row.salary_avg),
        min_count,
        order,
    )
}

/// Remote against non-remote postings, highest mean first.
pub fn by_remote(records: &[NormalizedRecord]) -> Vec<AggregateStat> {
    aggregate(
        records,
        |record| Some(remote_label(record.is_remote)),
        NormalizedRecord::salary_avg,
        0,
        SortBy::MeanSalary,
    )
}

pub fn remote_label(is_remote: bool) -> &'static str {
    if is_remote {
        REMOTE_LABEL
    } else {
        NON_REMOTE_LABEL
    }
}

#[cfg(test)]
mod tests {
    use jobs_model::{Salary, SalaryUnit};

    use super::*;

    fn record(location: &str, avg: f64) -> NormalizedRecord {
        NormalizedRecord {
            location: Some(location.to_string()),
            salary: Some(Salary::from_bounds(avg, avg, SalaryUnit::Yearly)),
            ..NormalizedRecord::default()
        }
    }

    #[test]
    fn test_mean_and_bounds() {
        let records = vec![
            record("London", 40_000.0),
            record("London", 60_000.0),
            record("Leeds", 30_000.0),
        ];
        let stats = by_location(&records, 0, SortBy::MeanSalary);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].group_key, "London");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].mean_salary, 50_000.0);
        assert_eq!(stats[0].min_salary, 40_000.0);
        assert_eq!(stats[0].max_salary, 60_000.0);
        assert_eq!(stats[1].group_key, "Leeds");
    }

    #[test]
    fn test_threshold_suppresses_small_groups() {
        let records = vec![
            record("London", 40_000.0),
            record("London", 60_000.0),
            record("Leeds", 90_000.0),
        ];
        let stats = by_location(&records, 2, SortBy::MeanSalary);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].group_key, "London");
    }

    #[test]
    fn test_count_order_breaks_ties_by_key() {
        let records = vec![
            record("York", 40_000.0),
            record("Bath", 60_000.0),
            record("Leeds", 30_000.0),
            record("Leeds", 30_000.0),
        ];
        let stats = by_location(&records, 0, SortBy::Count);
        let keys: Vec<&str> = stats.iter().map(|stat| stat.group_key.as_str()).collect();
        assert_eq!(keys, vec!["Leeds", "Bath", "York"]);
    }

    #[test]
    fn test_absent_keys_are_excluded() {
        let mut missing = record("x", 50_000.0);
        missing.location = None;
        let stats = by_location(&[missing, record("Leeds", 30_000.0)], 0, SortBy::Count);
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_value_counts() {
        let records = vec![
            record("Leeds", 1.0),
            record("Bath", 1.0),
            record("Leeds", 1.0),
        ];
        let counts = value_counts(&records, |record| record.location.as_deref());
        assert_eq!(
            counts,
            vec![("Leeds".to_string(), 2), ("Bath".to_string(), 1)]
        );
    }

    #[test]
    fn test_remote_groups() {
        let mut remote = record("Remote", 70_000.0);
        remote.is_remote = true;
        let stats = by_remote(&[remote, record("Leeds", 30_000.0)]);
        assert_eq!(stats[0].group_key, REMOTE_LABEL);
        assert_eq!(stats[1].group_key, NON_REMOTE_LABEL);
    }
}
