//! Interactive menu over the same actions as the subcommands.
//!
//! Each menu is a table of [`MenuEntry`] values mapping the key a user types
//! to a handler. The SQL menu is reached from the main menu and returns to
//! it after one action.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use jobs_model::AnalysisConfig;
use jobs_report::QueryKind;
use tracing::warn;

use crate::pipeline::{plot_sql_top_skills, run_analysis, run_query, run_setup_db};
use crate::summary::{print_analysis, print_query, print_setup};

/// What the menu loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFlow {
    Continue,
    Exit,
}

pub type Handler = fn(&mut MenuSession<'_>) -> Result<MenuFlow>;

pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub handler: Handler,
}

/// State shared by handlers: the run configuration and the input stream.
pub struct MenuSession<'a> {
    pub config: &'a AnalysisConfig,
    input: &'a mut dyn BufRead,
}

impl<'a> MenuSession<'a> {
    pub fn new(config: &'a AnalysisConfig, input: &'a mut dyn BufRead) -> Self {
        Self { config, input }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush().context("flush stdout")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read menu choice")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

pub fn main_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            key: "1",
            label: "Run full analysis",
            handler: |session| {
                print_analysis(&run_analysis(session.config)?);
                Ok(MenuFlow::Continue)
            },
        },
        MenuEntry {
            key: "2",
            label: "Set up SQLite database",
            handler: |session| {
                print_setup(&run_setup_db(session.config)?);
                Ok(MenuFlow::Continue)
            },
        },
        MenuEntry {
            key: "3",
            label: "Run SQL analysis",
            handler: |session| {
                let entries = sql_menu();
                print_menu("SQL analysis", &entries);
                match session.prompt("Select an option: ")? {
                    Some(choice) => dispatch(&entries, &choice, session),
                    None => Ok(MenuFlow::Exit),
                }
            },
        },
        MenuEntry {
            key: "4",
            label: "Exit",
            handler: |_| Ok(MenuFlow::Exit),
        },
    ]
}

pub fn sql_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            key: "1",
            label: "Average salary per skill",
            handler: |session| show_query(session, QueryKind::AvgSalaryPerSkill),
        },
        MenuEntry {
            key: "2",
            label: "Remote vs non-remote salary comparison",
            handler: |session| show_query(session, QueryKind::RemoteSalaryComparison),
        },
        MenuEntry {
            key: "3",
            label: "Top highest paying job titles",
            handler: |session| show_query(session, QueryKind::TopPayingJobTitles),
        },
        MenuEntry {
            key: "4",
            label: "Top most in-demand skills",
            handler: |session| show_query(session, QueryKind::TopInDemandSkills),
        },
        MenuEntry {
            key: "5",
            label: "Highest paying skill",
            handler: |session| show_query(session, QueryKind::HighestPayingSkill),
        },
        MenuEntry {
            key: "6",
            label: "Visualize top skills",
            handler: |session| {
                let path = plot_sql_top_skills(session.config)?;
                println!("Chart: {}", path.display());
                Ok(MenuFlow::Continue)
            },
        },
    ]
}

fn show_query(session: &mut MenuSession<'_>, kind: QueryKind) -> Result<MenuFlow> {
    print_query(&run_query(session.config, kind)?);
    Ok(MenuFlow::Continue)
}

pub fn lookup<'e>(entries: &'e [MenuEntry], choice: &str) -> Option<&'e MenuEntry> {
    entries.iter().find(|entry| entry.key == choice.trim())
}

/// Run the handler bound to `choice`. Unknown keys are reported and ignored.
pub fn dispatch(
    entries: &[MenuEntry],
    choice: &str,
    session: &mut MenuSession<'_>,
) -> Result<MenuFlow> {
    match lookup(entries, choice) {
        Some(entry) => (entry.handler)(session),
        None => {
            let keys: Vec<&str> = entries.iter().map(|entry| entry.key).collect();
            println!("Invalid option. Choose one of: {}", keys.join(", "));
            Ok(MenuFlow::Continue)
        }
    }
}

fn print_menu(title: &str, entries: &[MenuEntry]) {
    println!();
    println!("===== {title} =====");
    for entry in entries {
        println!("{}. {}", entry.key, entry.label);
    }
}

/// Loop over the main menu until the user exits or input ends. Handler
/// failures are printed and the loop continues.
pub fn run_menu(config: &AnalysisConfig, input: &mut dyn BufRead) -> Result<()> {
    let entries = main_menu();
    let mut session = MenuSession::new(config, input);
    loop {
        print_menu("UK Data Job Market Analysis", &entries);
        let Some(choice) = session.prompt("Select an option: ")? else {
            return Ok(());
        };
        match dispatch(&entries, &choice, &mut session) {
            Ok(MenuFlow::Exit) => return Ok(()),
            Ok(MenuFlow::Continue) => {}
            Err(error) => {
                warn!(choice = %choice, "menu action failed");
                eprintln!("error: {error:#}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_menu_keys_are_unique() {
        for entries in [main_menu(), sql_menu()] {
            let keys: BTreeSet<&str> = entries.iter().map(|entry| entry.key).collect();
            assert_eq!(keys.len(), entries.len());
        }
    }

    #[test]
    fn test_lookup_trims_choice() {
        let entries = main_menu();
        assert_eq!(lookup(&entries, " 4\n").map(|entry| entry.label), Some("Exit"));
        assert!(lookup(&entries, "9").is_none());
    }

    #[test]
    fn test_exit_and_end_of_input_stop_the_loop() {
        let config = AnalysisConfig::default();
        let mut input = io::Cursor::new(b"9\n4\n".to_vec());
        run_menu(&config, &mut input).expect("menu");
        let mut empty = io::Cursor::new(Vec::new());
        run_menu(&config, &mut empty).expect("menu");
    }
}
