//! LitPath CLI — ask the research backend from the terminal.
//!
//! Drives the same `ViewState` transitions and `BackendClient` as the web
//! view, so validation and availability errors read the same.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use litpath_core::citations::{overview_fragments, render_plain};
use litpath_core::config::CONFIG_FILE_NAME;
use litpath_core::format::{abstract_preview, subjects_display};
use litpath_core::state::Phase;
use litpath_core::types::{BackendStatus, DateFilter, SearchResults, SUBJECTS};
use litpath_core::{Action, BackendClient, ClientConfig, ViewState};

/// LitPath AI — find theses and dissertations from the terminal.
#[derive(Parser)]
#[command(name = "litpath", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ./.litpath.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the search backend is up
    Health,
    /// Ask a research question
    Search {
        /// Research question
        question: String,

        /// Restrict to one subject (see `litpath subjects`)
        #[arg(long)]
        subject: Option<String>,

        /// Date filter: "All dates", "Last year", "Last 3 years", "Custom date range"
        #[arg(long, default_value = "All dates")]
        date: String,

        /// First year of a custom date range
        #[arg(long)]
        from: Option<String>,

        /// Last year of a custom date range
        #[arg(long)]
        to: Option<String>,

        /// Print full abstracts instead of three-sentence previews
        #[arg(long)]
        full: bool,
    },
    /// List the subject filters
    Subjects,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Could not encode JSON: {e}")),
    }
}

fn load_config(path: Option<PathBuf>) -> ClientConfig {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    ClientConfig::load(&path).unwrap_or_else(|e| fail(format!("{}: {e}", path.display())))
}

/// Match a subject case-insensitively against the fixed list.
fn canonical_subject(input: &str) -> Option<&'static str> {
    SUBJECTS
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(input.trim()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("litpath=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config);
    let client = BackendClient::new(config.clone());

    match cli.command {
        Commands::Health => {
            let status = client.health().await;
            if cli.json {
                print_json(&status);
            } else {
                println!("{}", status.banner());
            }
            if !status.is_healthy() {
                std::process::exit(1);
            }
        }
        Commands::Subjects => {
            if cli.json {
                print_json(&SUBJECTS);
            } else {
                for subject in SUBJECTS {
                    println!("{subject}");
                }
            }
        }
        Commands::Search { question, subject, date, from, to, full } => {
            let (mut state, effect) = ViewState::mount();
            state.apply(client.run(effect).await);

            state.apply(Action::SetQuery(question));
            if let Some(subject) = subject {
                let Some(canonical) = canonical_subject(&subject) else {
                    fail(format!("Unknown subject '{subject}' (see `litpath subjects`)"));
                };
                state.apply(Action::SetSubject(canonical.to_string()));
            }
            let Some(date) = DateFilter::from_label(&date) else {
                fail(format!("Unknown date filter '{date}'"));
            };
            state.apply(Action::SetDateFilter(date));
            state.apply(Action::SetFromYear(from.unwrap_or_default()));
            state.apply(Action::SetToYear(to.unwrap_or_default()));

            if let Some(effect) = state.apply(Action::Submit) {
                state.apply(client.run(effect).await);
            }

            match (state.phase(), state.results()) {
                (Phase::Results, Some(results)) => {
                    if cli.json {
                        print_json(results);
                    } else {
                        print_results(results, full);
                    }
                }
                _ => {
                    let message = state
                        .error()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "Search did not complete".to_string());
                    if let Some(BackendStatus::Error { .. }) = state.backend() {
                        fail(format!(
                            "{message}\nMake sure your backend is running on {}",
                            config.base_url
                        ));
                    }
                    fail(message);
                }
            }
        }
    }
}

fn print_results(results: &SearchResults, full: bool) {
    println!("{}\n", results.query);

    println!("Overview of Sources");
    let overview = render_plain(&overview_fragments(&results.overview), |n| format!("[{n}]"));
    println!("{overview}\n");

    if results.sources.is_empty() {
        eprintln!("No sources found");
    } else {
        println!("Sources");
        for source in &results.sources {
            println!("{:>3}. {}", source.id, source.title);
            println!("     {} \u{2022} {} \u{2022} {}", source.author, source.year, source.school);
            println!("     {} | {}", source.degree, subjects_display(Some(&source.subjects)).join(", "));
            let text = if full {
                source.abstract_text.clone()
            } else {
                abstract_preview(&source.abstract_text)
            };
            println!("     {text}\n");
        }
    }

    if !results.related_questions.is_empty() {
        println!("Related research questions");
        for question in &results.related_questions {
            println!("  - {question}");
        }
    }
}
