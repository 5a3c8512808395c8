//! Command implementations for the IWM CLI.
//!
//! Every command builds one single-threaded dashboard session against the
//! prediction backend and prints it as text, JSON or CSV.

use clap::Subcommand;
use iwm_types::client::HttpBackend;
use iwm_view::localization::Language;
use iwm_view::state::Dashboard;
use iwm_view::sync::SyncController;
use log::info;

pub mod export;
pub mod render;
pub mod session;

pub use export::ChartKind;

#[derive(Subcommand)]
pub enum Command {
    /// Load the dashboard once and print it
    Snapshot,

    /// Refresh the dashboard every 30 seconds until Ctrl-C
    Watch,

    /// Show one reservoir with its what-if scenarios
    Inspect {
        /// Reservoir name, e.g. Omerli
        dam: String,

        /// Index of the recommendation to project (defaults to the first)
        #[arg(short, long)]
        scenario: Option<usize>,
    },

    /// Print chart-ready series as JSON, or write them as CSV
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,

        /// Write CSV to this path instead of printing JSON
        #[arg(long)]
        csv: Option<String>,
    },
}

pub async fn run(command: Command, api_url: &str, language: Language) -> anyhow::Result<()> {
    let backend = HttpBackend::new(api_url)?;
    info!("Using backend at {} ({})", backend.base_url(), language);
    let sync = SyncController::new(backend, Dashboard::new(language).shared());
    match command {
        Command::Snapshot => session::run_snapshot(&sync).await,
        Command::Watch => session::run_watch(&sync).await,
        Command::Inspect { dam, scenario } => session::run_inspect(&sync, &dam, scenario).await,
        Command::Chart { kind, csv } => session::run_chart(&sync, kind, csv.as_deref()).await,
    }
}
