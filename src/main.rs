//! support-triage command-line front end.
//!
//! Usage:
//!   support-triage classify "My invoice is wrong"     Classify one message
//!   echo "..." | support-triage classify              Read the message from stdin
//!   support-triage classify --offline "..."           Heuristics only, no network
//!   support-triage history list --limit 5             Show recent results
//!   support-triage history export > triage.csv        Dump history as CSV
//!   support-triage providers                          Show provider key status

use clap::{Parser, Subcommand};
use support_triage::history::HistoryLog;
use support_triage::llm::provider;
use support_triage::{settings, triage_message, MessageClassifier, ProviderKind, TriageReport};
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "support-triage", version, about = "Classify customer-support messages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a message (read from stdin when omitted)
    Classify {
        message: Option<String>,
        /// Skip the hosted model and use keyword heuristics
        #[arg(long)]
        offline: bool,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
        /// Do not append the result to the local history
        #[arg(long)]
        no_history: bool,
    },
    /// Inspect or manage the local history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// List providers and whether each has an API key
    Providers,
    /// Store a provider API key in the OS keychain
    SetKey { provider: ProviderKind, api_key: String },
}

#[derive(Subcommand)]
enum HistoryAction {
    List {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    Clear,
    Export,
}

#[tokio::main]
async fn main() {
    if let Ok(cwd) = std::env::current_dir() {
        settings::load_env_files(&cwd);
    }
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Classify { message, offline, json, no_history } => {
            let message = match message {
                Some(m) => m,
                None => {
                    let mut buf = String::new();
                    tokio::io::stdin().read_to_string(&mut buf).await?;
                    buf
                }
            };

            let classifier = if offline {
                MessageClassifier::offline()
            } else {
                MessageClassifier::new(&settings::config_from_env())
            };
            let report = triage_message(&classifier, message.trim()).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if !no_history {
                HistoryLog::new(settings::history_path()).append(report)?;
            }
        }
        Command::History { action } => {
            let log = HistoryLog::new(settings::history_path());
            match action {
                HistoryAction::List { limit } => {
                    let entries = log.recent(limit);
                    if entries.is_empty() {
                        println!("No history yet ({}).", log.path().display());
                    }
                    for entry in &entries {
                        print_report(entry);
                        println!();
                    }
                }
                HistoryAction::Clear => {
                    log.clear()?;
                    println!("History cleared.");
                }
                HistoryAction::Export => print!("{}", log.export_csv()),
            }
        }
        Command::Providers => {
            let active = settings::resolve_provider();
            for info in provider::all_providers() {
                let marker = if info.id == active.id() { "*" } else { " " };
                let key = if provider::is_provider_configured(&info.id) { "key set" } else { "no key" };
                println!("{} {:<10} {:<40} {} ({})", marker, info.id, info.name, key, info.env_key);
            }
        }
        Command::SetKey { provider, api_key } => {
            settings::save_api_key(provider, &api_key)?;
            println!("Saved {} key to the OS keychain.", provider);
        }
    }
    Ok(())
}

fn print_report(report: &TriageReport) {
    println!("Message:   {}", report.message);
    println!("Category:  {}", report.result.category);
    println!("Sentiment: {}", report.result.sentiment);
    println!("Priority:  {} ({})", report.result.priority_score, report.urgency);
    println!("Reasoning: {}", report.result.reasoning);
    println!(
        "Action:    {}: {}",
        report.recommended_action.label, report.recommended_action.description
    );
    println!("Source:    {}", report.source);
}
