//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule for maintainability:
//! - `fetch`: Record acquisition through the provider cascade
//! - `inspect`: Offline tools (classifier, query plans, offline table)
//! - `setup`: Config file management

mod fetch;
mod inspect;
mod setup;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::acquisition::{Category, NoticeType, RandomSource, SeededRandom, ThreadRandom};

pub use fetch::cmd_fetch;
pub use inspect::{cmd_classify, cmd_offline, cmd_plan};
pub use setup::cmd_init_config;

/// Dossier CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: OS config dir/dossier/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record category as given on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Registry,
    Profile,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Registry => Category::Registry,
            CategoryArg::Profile => Category::Profile,
        }
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Acquire records and print them as JSON lines
    Fetch {
        /// Preferred category (default: fair coin flip per record)
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,
        /// Number of records to acquire
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,
        /// Light ladder: one random country then global, short timeouts
        #[arg(long)]
        light: bool,
        /// Fail instead of using the embedded offline table
        #[arg(long)]
        no_offline: bool,
        /// Include every attempt made alongside each record
        #[arg(long)]
        report: bool,
        /// Web search API key (or set DOSSIER_SEARCH_API_KEY env var)
        #[arg(long, env = "DOSSIER_SEARCH_API_KEY", hide_env_values = true)]
        search_api_key: Option<String>,
        /// Web search engine id (or set DOSSIER_SEARCH_ENGINE_ID env var)
        #[arg(long, env = "DOSSIER_SEARCH_ENGINE_ID")]
        search_engine_id: Option<String>,
        #[arg(long, env = "GOOGLE_API_KEY", hide = true, hide_env_values = true)]
        google_api_key: Option<String>,
        #[arg(long, env = "GOOGLE_CX", hide = true)]
        google_cx: Option<String>,
    },
    /// Print the crime label for each charge text
    Classify {
        /// Charge descriptions, any supported language
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Print the registry query plan for a notice type
    Plan {
        /// red, yellow or un
        notice_type: NoticeType,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        light: bool,
    },
    /// Print one record from the embedded offline table
    Offline {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the default config file
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Fetch {
            category,
            count,
            seed,
            light,
            no_offline,
            report,
            search_api_key,
            search_engine_id,
            google_api_key,
            google_cx,
        } => {
            let rt = Runtime::new()?;
            let options = fetch::FetchOptions {
                category: category.map(Category::from),
                count: *count,
                light: *light,
                no_offline: *no_offline,
                report: *report,
                search_api_key: search_api_key.clone().or_else(|| google_api_key.clone()),
                search_engine_id: search_engine_id.clone().or_else(|| google_cx.clone()),
            };
            cmd_fetch(&rt, config_path, random_source(*seed), &options)?;
        }
        Commands::Classify { texts } => cmd_classify(texts)?,
        Commands::Plan {
            notice_type,
            seed,
            light,
        } => cmd_plan(config_path, *notice_type, random_source(*seed).as_ref(), *light)?,
        Commands::Offline { seed } => cmd_offline(random_source(*seed).as_ref())?,
        Commands::InitConfig { force } => cmd_init_config(config_path, *force)?,
    }
    Ok(())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Seeded randomness when a seed is given, thread randomness otherwise.
pub(crate) fn random_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    }
}

/// Write one JSON value as a line on stdout.
pub(crate) fn print_json_line<T: serde::Serialize>(value: &T) -> crate::error::Result<()> {
    use crate::error::ResultExt;
    use std::io::Write;

    let line = serde_json::to_string(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").with_context("writing to stdout")
}
