use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use jobs_ingest::DatasetProfile;
use jobs_model::AggregateStat;
use jobs_report::QueryKind;

use crate::types::{AnalysisOutcome, NormalizationCounts, QueryOutcome, SetupOutcome};

pub fn print_analysis(outcome: &AnalysisOutcome) {
    println!("Input: {}", outcome.input_path.display());
    print_profile(&outcome.profile);
    print_counts(&outcome.counts);

    let report = &outcome.report;
    match report.overall_mean_salary {
        Some(mean) => println!("Overall mean salary: {}", format_salary(mean)),
        None => println!("Overall mean salary: -"),
    }
    if report.hourly_count > 0 {
        println!(
            "Note: {} hourly rates kept unconverted alongside yearly salaries",
            report.hourly_count
        );
    }

    print_section("Top job titles", &count_table("Job title", &report.top_job_titles));
    print_section("Top locations", &count_table("Location", &report.top_locations));
    print_section(
        "Highest paying locations",
        &stat_table("Location", &report.paying_locations),
    );
    print_section(
        "Highest paying job titles",
        &stat_table("Job title", &report.paying_job_titles),
    );
    print_section("Most in-demand skills", &stat_table("Skill", &report.demand_skills));
    print_section("Top paying skills", &stat_table("Skill", &report.paying_skills));
    print_section("Remote vs non-remote", &stat_table("Group", &report.remote));

    println!();
    println!("Cleaned dataset: {}", outcome.cleaned_dataset.display());
    print_paths("Charts", &outcome.charts);
}

pub fn print_profile(profile: &DatasetProfile) {
    println!(
        "Shape: {} rows x {} columns",
        profile.row_count,
        profile.column_count()
    );

    let mut missing = Table::new();
    missing.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut missing);
    align_column(&mut missing, 1, CellAlignment::Right);
    for (column, count) in &profile.missing {
        let count_cell = if *count == 0 {
            dim_cell(count)
        } else {
            Cell::new(count).fg(Color::Yellow)
        };
        missing.add_row(vec![Cell::new(column), count_cell]);
    }
    print_section("Columns", &missing);

    if !profile.preview.is_empty() {
        let mut preview = Table::new();
        preview.set_header(
            profile
                .columns
                .iter()
                .map(|column| header_cell(column))
                .collect::<Vec<_>>(),
        );
        apply_table_style(&mut preview);
        for row in &profile.preview {
            preview.add_row(row.iter().map(|value| preview_cell(value)).collect::<Vec<_>>());
        }
        print_section("Preview", &preview);
    }
}

fn print_counts(counts: &NormalizationCounts) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (stage, rows) in [
        ("Input rows", counts.input_rows),
        ("Parsed posting ages", counts.parsed_dates),
        ("Parsed salaries", counts.parsed_salaries),
        ("Hourly salaries", counts.hourly_salaries),
        ("Rejected by salary band", counts.rejected),
    ] {
        table.add_row(vec![Cell::new(stage), Cell::new(rows)]);
    }
    table.add_row(vec![
        Cell::new("Kept")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.kept).add_attribute(Attribute::Bold),
    ]);
    print_section("Normalization", &table);
}

pub fn print_setup(outcome: &SetupOutcome) {
    print_counts(&outcome.counts);
    println!("Database: {}", outcome.database_path.display());
    println!(
        "Tables: jobs ({} rows), job_skills ({} rows)",
        outcome.store.jobs, outcome.store.job_skills
    );
    print_paths("Exports", &outcome.exports);
}

pub fn print_query(outcome: &QueryOutcome) {
    let key_header = match outcome.query {
        QueryKind::RemoteSalaryComparison => "Group",
        QueryKind::TopPayingJobTitles => "Job title",
        _ => "Skill",
    };
    print_section(
        outcome.query.description(),
        &stat_table(key_header, &outcome.rows),
    );
}

pub fn print_query_list() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Query"), header_cell("Description")]);
    apply_table_style(&mut table);
    for kind in QueryKind::ALL {
        table.add_row(vec![Cell::new(kind.as_str()), Cell::new(kind.description())]);
    }
    println!("{table}");
}

/// Table of (key, count) pairs.
pub fn count_table(key_header: &str, counts: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(key_header), header_cell("Postings")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, count) in counts {
        table.add_row(vec![Cell::new(key), Cell::new(count)]);
    }
    table
}

/// Table of aggregate rows with count and salary columns.
pub fn stat_table(key_header: &str, stats: &[AggregateStat]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(key_header),
        header_cell("Postings"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stat in stats {
        table.add_row(vec![
            Cell::new(&stat.group_key),
            Cell::new(stat.count),
            Cell::new(format_salary(stat.mean_salary)),
            dim_cell(format_salary(stat.min_salary)),
            dim_cell(format_salary(stat.max_salary)),
        ]);
    }
    table
}

/// `£` amount with thousands separators and two decimals.
pub fn format_salary(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}£{grouped}.{fraction}")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn print_section(title: &str, table: &Table) {
    println!();
    println!("{title}");
    if table.row_count() == 0 {
        println!("  (no groups meet the reporting threshold)");
    } else {
        println!("{table}");
    }
}

fn print_paths(label: &str, paths: &[PathBuf]) {
    println!("{label}:");
    for path in paths {
        println!("  {}", path.display());
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn preview_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_salary() {
        assert_eq!(format_salary(45_000.0), "£45,000.00");
        assert_eq!(format_salary(1_234_567.891), "£1,234,567.89");
        assert_eq!(format_salary(15.5), "£15.50");
        assert_eq!(format_salary(999.999), "£1,000.00");
    }

    #[test]
    fn test_stat_table_rows() {
        let stats = vec![AggregateStat {
            group_key: "sql".to_string(),
            count: 3,
            mean_salary: 46_666.67,
            min_salary: 35_000.0,
            max_salary: 60_000.0,
        }];
        let table = stat_table("Skill", &stats);
        assert_eq!(table.row_count(), 1);
        let rendered = table.to_string();
        assert!(rendered.contains("£46,666.67"));
    }
}
