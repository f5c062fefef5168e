//! Property tests for the normalizers, the filter and the aggregator.

use std::collections::BTreeSet;

use jobs_model::{NormalizedRecord, RawRecord, Salary, SalaryBand, SalaryUnit, SortBy};
use jobs_transform::{
    RecordFilter, aggregate, by_skill, explode_skills, normalize_posting_age, normalize_record,
    normalize_salary, tokenize_skills,
};
use proptest::prelude::*;

fn skill_list() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z ]{0,8}", 0..6).prop_map(|tokens| tokens.join(","))
}

fn normalized_record() -> impl Strategy<Value = NormalizedRecord> {
    (
        prop::option::of(0.0f64..300_000.0),
        prop::option::of(prop::sample::select(vec!["London", "Leeds", "Remote"])),
    )
        .prop_map(|(avg, location)| NormalizedRecord {
            location: location.map(str::to_string),
            salary: avg.map(|value| Salary::from_bounds(value, value, SalaryUnit::Yearly)),
            ..NormalizedRecord::default()
        })
}

proptest! {
    #[test]
    fn yearly_range_scales_thousands(a in 1u32..1000, b in 1u32..1000) {
        let salary = normalize_salary(&format!("£{a}K-£{b}K(Employer est.)")).expect("parse");
        let (low, high) = (a.min(b) as f64, a.max(b) as f64);
        prop_assert_eq!(salary.unit, SalaryUnit::Yearly);
        prop_assert_eq!(salary.min, low * 1000.0);
        prop_assert_eq!(salary.max, high * 1000.0);
        prop_assert_eq!(salary.avg, (low + high) * 500.0);
    }

    #[test]
    fn per_hour_marker_sets_hourly(whole in 1u32..200, cents in 0u32..100) {
        let salary = normalize_salary(&format!("£{whole}.{cents:02} Per Hour")).expect("parse");
        prop_assert_eq!(salary.unit, SalaryUnit::Hourly);
        prop_assert!(salary.min >= 1.0 && salary.min < 200.0);
    }

    #[test]
    fn single_figure_has_equal_bounds(value in 1u32..1_000_000) {
        let salary = normalize_salary(&format!("£{value}")).expect("parse");
        prop_assert_eq!(salary.min, salary.max);
        prop_assert_eq!(salary.avg, salary.min);
    }

    #[test]
    fn posting_age_suffixes(days in 0i64..10_000) {
        prop_assert_eq!(normalize_posting_age(&format!("{days}d+")), Some(days));
        prop_assert_eq!(normalize_posting_age(&format!("{days}d")), Some(days));
        prop_assert_eq!(normalize_posting_age(&format!("{days}")), Some(days));
    }

    #[test]
    fn posting_age_without_digits_is_absent(text in "[a-ce-z]{1,6}") {
        prop_assert_eq!(normalize_posting_age(&text), None);
    }

    #[test]
    fn explosion_preserves_token_sets(skills in skill_list()) {
        let raw = RawRecord {
            salary: Some("£40K".to_string()),
            skills: Some(skills.clone()),
            ..RawRecord::default()
        };
        let records = vec![normalize_record(&raw)];
        let exploded: BTreeSet<String> =
            explode_skills(&records).map(|row| row.skill).collect();
        let tokenized: BTreeSet<String> = tokenize_skills(&skills).into_iter().collect();
        prop_assert_eq!(exploded, tokenized);
        prop_assert_eq!(explode_skills(&records).count(), records[0].skills.len());
    }

    #[test]
    fn filter_is_idempotent(records in prop::collection::vec(normalized_record(), 0..40)) {
        let filter = RecordFilter::new(SalaryBand::default());
        let once = filter.apply(records).kept;
        let twice = filter.apply(once.clone());
        prop_assert_eq!(twice.rejected(), 0);
        prop_assert_eq!(twice.kept, once);
    }

    #[test]
    fn aggregate_respects_threshold(
        records in prop::collection::vec(normalized_record(), 0..60),
        min_count in 0usize..8,
    ) {
        let stats = aggregate(
            &records,
            |record| record.location.as_deref(),
            NormalizedRecord::salary_avg,
            min_count,
            SortBy::MeanSalary,
        );
        for stat in &stats {
            prop_assert!(stat.count >= min_count);
            prop_assert!(stat.min_salary <= stat.mean_salary + 1e-6);
            prop_assert!(stat.mean_salary <= stat.max_salary + 1e-6);
        }
        for pair in stats.windows(2) {
            prop_assert!(pair[0].mean_salary >= pair[1].mean_salary);
        }
    }
}

#[test]
fn test_glassdoor_range_with_repeated_skill() {
    let raw = RawRecord {
        salary: Some("£40K - £50K(Glassdoor est.)".to_string()),
        skills: Some("Python, SQL, python".to_string()),
        ..RawRecord::default()
    };
    let record = normalize_record(&raw);
    let salary = record.salary.expect("salary parsed");
    assert_eq!(salary.min, 40_000.0);
    assert_eq!(salary.max, 50_000.0);
    assert_eq!(salary.avg, 45_000.0);
    assert_eq!(salary.unit, SalaryUnit::Yearly);

    let kept = RecordFilter::new(SalaryBand::default()).apply(vec![record]).kept;
    assert_eq!(kept.len(), 1);
    let skills: Vec<String> = explode_skills(&kept).map(|row| row.skill).collect();
    assert_eq!(skills, vec!["python", "sql", "python"]);

    let rows: Vec<_> = explode_skills(&kept).collect();
    let stats = by_skill(&rows, 0, SortBy::Count);
    assert_eq!(stats[0].group_key, "python");
    assert_eq!(stats[0].count, 2);
}

#[test]
fn test_hourly_rate_without_skills() {
    let raw = RawRecord {
        salary: Some("£15.00 Per Hour".to_string()),
        skills: None,
        ..RawRecord::default()
    };
    let record = normalize_record(&raw);
    assert_eq!(record.salary_unit(), Some(SalaryUnit::Hourly));
    assert_eq!(record.salary_avg(), Some(15.0));
    assert_eq!(explode_skills(std::slice::from_ref(&record)).count(), 0);

    let outcome = RecordFilter::new(SalaryBand::default()).apply(vec![record]);
    assert!(outcome.kept.is_empty());
    assert_eq!(outcome.out_of_band, 1);
}
