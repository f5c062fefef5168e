use std::io;

use anyhow::{Context, Result};
use jobs_cli::menu::run_menu;
use jobs_cli::pipeline::{run_analysis, run_query, run_setup_db};
use jobs_cli::summary::{print_analysis, print_query, print_query_list, print_setup};
use jobs_model::AnalysisConfig;
use jobs_report::QueryKind;
use tracing::debug;

use crate::cli::{PathArgs, QueryArgs};

/// Load the configuration file (if any) and apply path overrides.
pub fn resolve_config(paths: &PathArgs) -> Result<AnalysisConfig> {
    let mut config = match &paths.config {
        Some(path) => AnalysisConfig::from_toml_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(input) = &paths.input {
        config = config.with_input_path(input);
    }
    if let Some(dir) = &paths.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(dir) = &paths.charts_dir {
        config = config.with_charts_dir(dir);
    }
    if let Some(path) = &paths.database {
        config = config.with_database_path(path);
    }
    debug!(?config, "configuration resolved");
    Ok(config)
}

pub fn run_analyze(config: &AnalysisConfig) -> Result<()> {
    let outcome = run_analysis(config)?;
    print_analysis(&outcome);
    Ok(())
}

pub fn run_setup(config: &AnalysisConfig) -> Result<()> {
    let outcome = run_setup_db(config)?;
    print_setup(&outcome);
    Ok(())
}

pub fn run_query_command(config: &AnalysisConfig, args: &QueryArgs) -> Result<()> {
    let name = match (&args.name, args.list) {
        (_, true) | (None, false) => {
            print_query_list();
            return Ok(());
        }
        (Some(name), false) => name,
    };
    let kind: QueryKind = name.parse()?;
    let outcome = run_query(config, kind)?;
    if args.json {
        let json = serde_json::to_string_pretty(&outcome).context("serialize query result")?;
        println!("{json}");
    } else {
        print_query(&outcome);
    }
    Ok(())
}

pub fn run_menu_command(config: &AnalysisConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu(config, &mut input)
}
