//! # Journal Context CLI (`jctx`)
//!
//! Resolves natural-language date ranges against a folder of dated journal
//! entries and prints the aggregated context a chat model would receive.
//!
//! ## Usage
//!
//! ```bash
//! jctx --config ./config/jctx.toml <command>
//! jctx --journal ~/vault/Journal <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `jctx resolve <text>` | Show the interval a phrase resolves to |
//! | `jctx context <text>` | Aggregate the journal entries in that interval |
//! | `jctx prompt --range <text> <question>` | Assemble the full chat prompt |
//! | `jctx sources` | Show journal folder status |

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use journal_context::config::{self, Config};
use journal_context::date_range::DateRangeResolver;
use journal_context::journal::get_journal_context;
use journal_context::session::ChatSession;
use journal_context::sources;
use journal_context::store::FsDocumentStore;

/// Journal Context CLI: bounded journal context from natural-language
/// date ranges.
#[derive(Parser)]
#[command(
    name = "jctx",
    about = "Journal Context: turn a date range into journal context for a chat model",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/jctx.toml`. Optional when `--journal` is given.
    #[arg(long, global = true, default_value = "./config/jctx.toml")]
    config: PathBuf,

    /// Journal folder. Overrides `[journal].path` from the config file.
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a phrase to a date interval without reading any entries.
    Resolve {
        /// Free text, e.g. `2 months ago to today`.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Aggregate the journal entries dated inside a phrase's interval.
    Context {
        /// Free text, e.g. `1 jan 2023 to 31 jan 2023`.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the combined text after the summary.
        #[arg(long)]
        print: bool,
    },

    /// Build a chat session with journal context and print its prompt.
    Prompt {
        /// Date range whose entries become the context.
        #[arg(long)]
        range: String,

        /// Question appended after the context.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Show the journal folder and how many entries carry a date.
    Sources,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut cfg = match (&cli.journal, cli.config.exists()) {
        (Some(journal), false) => Config::minimal(journal),
        _ => config::load_config(&cli.config)?,
    };
    if let Some(journal) = &cli.journal {
        cfg.journal.path = journal.clone();
    }
    config::validate(&cfg)?;
    Ok(cfg)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Resolution needs no journal folder
    if let Commands::Resolve { text } = &cli.command {
        match DateRangeResolver::default().resolve(&text.join(" ")) {
            Some(interval) => println!(
                "{} - {}",
                interval.start().format("%Y-%m-%d %H:%M:%S%.3f"),
                interval.end().format("%Y-%m-%d %H:%M:%S%.3f")
            ),
            None => println!("No valid date range found."),
        }
        return Ok(());
    }

    let cfg = resolve_config(&cli)?;
    let store = FsDocumentStore::new(&cfg.journal.include_globs)?;

    match cli.command {
        Commands::Resolve { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
        Commands::Context {
            text,
            format,
            print,
        } => {
            let Some(context) = get_journal_context(&store, &cfg, &text.join(" ")).await? else {
                println!("No valid date range found.");
                return Ok(());
            };
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&context)?);
                }
                OutputFormat::Text => {
                    println!(
                        "Added journals from {} to {} with {} characters ({} entries)",
                        context.start_date,
                        context.end_date,
                        context.combined_text.chars().count(),
                        context.included.len()
                    );
                    if print {
                        println!();
                        print!("{}", context.combined_text);
                    }
                }
            }
        }
        Commands::Prompt { range, question } => {
            let mut session = ChatSession::new(cfg.chat.model.clone());

            match get_journal_context(&store, &cfg, &range).await? {
                Some(context) => {
                    let slot = session.set_context(&context);
                    eprintln!(
                        "Added journals from {} to {} with {} characters",
                        slot.start_date,
                        slot.end_date,
                        slot.len_chars()
                    );
                }
                None => eprintln!("No valid date range found."),
            }

            session.push_user(question.join(" "));
            println!("model: {}", session.model());
            println!();
            println!("{}", session.prompt());
        }
        Commands::Sources => {
            sources::list_sources(&store, &cfg).await?;
        }
    }

    Ok(())
}
