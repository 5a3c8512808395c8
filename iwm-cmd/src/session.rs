//! Commands that drive the sync controller against a live backend.

use crate::export::{self, ChartKind};
use crate::render;
use iwm_types::backend::Backend;
use iwm_view::sync::SyncController;
use log::{info, warn};
use tokio_util::sync::CancellationToken;

/// One load cycle, then print the dashboard.
pub async fn run_snapshot<B: Backend>(sync: &SyncController<B>) -> anyhow::Result<()> {
    if !sync.load_snapshot().await {
        warn!("Snapshot is incomplete; showing what was loaded");
    }
    println!("{}", render::dashboard_summary(&sync.state().borrow()));
    Ok(())
}

/// Refresh periodically until Ctrl-C, printing the dashboard after every
/// completed cycle.
pub async fn run_watch<B: Backend>(sync: &SyncController<B>) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let mut cycles = sync.subscribe();

    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Interrupted, stopping refresh"),
            Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
        }
        cancel.cancel();
    };

    let printer = async {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                changed = cycles.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    println!("{}\n", render::dashboard_summary(&sync.state().borrow()));
                }
            }
        }
    };

    tokio::join!(sync.run(cancel.clone()), interrupt, printer);
    Ok(())
}

/// Open `dam`, optionally switch to scenario `scenario`, and print the detail.
pub async fn run_inspect<B: Backend>(
    sync: &SyncController<B>,
    dam: &str,
    scenario: Option<usize>,
) -> anyhow::Result<()> {
    if !sync.inspect(dam).await {
        anyhow::bail!("could not load the detail for reservoir '{}'", dam);
    }
    if let Some(index) = scenario {
        sync.select_recommendation(index);
    }
    println!("{}", render::inspection_summary(&sync.state().borrow()));
    Ok(())
}

/// Load the snapshot and print one chart as JSON, or write it to `csv_path`.
pub async fn run_chart<B: Backend>(
    sync: &SyncController<B>,
    kind: ChartKind,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    if !sync.load_snapshot().await {
        warn!("Snapshot is incomplete; the {:?} chart may be empty", kind);
    }
    let dashboard = sync.state().borrow();
    match csv_path {
        Some(path) => {
            std::fs::write(path, export::chart_csv(kind, &dashboard)?)?;
            info!("Wrote {:?} chart to {}", kind, path);
        }
        None => println!("{}", export::chart_json(kind, &dashboard)?),
    }
    Ok(())
}
