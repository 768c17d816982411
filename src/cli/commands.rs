use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_PROBE_TIMEOUT_MS, SearchConfig};
use crate::models::SearchOutcome;
use crate::tui::run_interactive;
use crate::utils::single_line;

#[derive(Parser)]
#[command(name = "web-search-client")]
#[command(version = "0.1.0")]
#[command(about = "Look up web search results from a static results tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Root URL of the results tree
    #[arg(long, global = true, env = "WEB_SEARCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Connect timeout for the reachability check, in milliseconds
    #[arg(
        long,
        global = true,
        env = "WEB_SEARCH_PROBE_TIMEOUT_MS",
        default_value_t = DEFAULT_PROBE_TIMEOUT_MS
    )]
    pub probe_timeout_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive search screen (default)
    Tui {
        /// Text to prefill the query field with
        query: Option<String>,
    },
    /// Run one search and print the results
    Search {
        /// Search terms, joined with spaces
        query: Vec<String>,
    },
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Log lines would tear the alternate screen, so the TUI stays quiet unless RUST_LOG asks
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    init_logging(if interactive { "off" } else { "warn" });

    let config = SearchConfig::new(&cli.base_url, cli.probe_timeout_ms)?;
    log::debug!("[CLI] results base URL: {}", config.base_url);

    match cli.command {
        Some(Commands::Search { query }) => search_once(&config, &query.join(" ")),
        Some(Commands::Tui { query }) => {
            run_interactive(config.build_service()?, query)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            run_interactive(config.build_service()?, None)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn search_once(config: &SearchConfig, query: &str) -> Result<ExitCode> {
    let service = config.build_service()?;

    match service.search(query) {
        SearchOutcome::Results(records) => {
            for (idx, record) in records.iter().enumerate() {
                println!("{}. {}", idx + 1, single_line(&record.title));
                println!("   {}", single_line(&record.description));
                println!("   {}", single_line(&record.url));
            }
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::Failed(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
