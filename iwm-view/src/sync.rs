//! Keeps the dashboard snapshot fresh and fetches reservoir details on demand.
//!
//! Runs on a single-threaded runtime. The only suspension points are the
//! backend calls; state is borrowed briefly between them and never held
//! across an await.

use crate::scenario::Projection;
use crate::state::{SharedDashboard, Snapshot};
use crate::view_state::Page;
use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use iwm_types::backend::{Backend, BackendError};
use iwm_utils::config::REFRESH_PERIOD;
use log::{debug, info, warn};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

pub struct SyncController<B> {
    backend: B,
    state: SharedDashboard,
    period: Duration,
    cycles: watch::Sender<u64>,
}

impl<B: Backend> SyncController<B> {
    pub fn new(backend: B, state: SharedDashboard) -> Self {
        let (cycles, _) = watch::channel(0);
        Self {
            backend,
            state,
            period: REFRESH_PERIOD,
            cycles,
        }
    }

    /// Override the refresh period.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn state(&self) -> &SharedDashboard {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of completed refresh cycles.
    pub fn cycles(&self) -> u64 {
        *self.cycles.borrow()
    }

    /// Notified each time a refresh cycle completes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cycles.subscribe()
    }

    /// Fetch all five collections concurrently. Each one replaces its part
    /// of the snapshot as soon as it lands; a failed fetch leaves its part
    /// untouched. `loading` is cleared whatever the outcome.
    ///
    /// Returns `true` when every collection refreshed.
    pub async fn load_snapshot(&self) -> bool {
        let (dams, districts, forecast, metrics, consumption) = futures::join!(
            self.refresh("reservoirs", self.backend.fetch_dams(), |snapshot, list| {
                snapshot.dams = list.dams;
                snapshot.general_occupancy_pct = Some(list.general_occupancy_pct);
            }),
            self.refresh("districts", self.backend.fetch_districts(), |snapshot, districts| {
                snapshot.districts = districts;
            }),
            self.refresh("forecast", self.backend.fetch_forecast(), |snapshot, forecast| {
                snapshot.forecast = forecast;
            }),
            self.refresh("model metrics", self.backend.fetch_metrics(), |snapshot, metrics| {
                snapshot.metrics = Some(metrics);
            }),
            self.refresh("consumption", self.backend.fetch_consumption(), |snapshot, rows| {
                snapshot.consumption = rows;
            }),
        );

        let first_error = [dams, districts, forecast, metrics, consumption]
            .into_iter()
            .find_map(Result::err);
        let complete = first_error.is_none();
        {
            let mut state = self.state.borrow_mut();
            match first_error {
                None => state.health.record_success(Utc::now()),
                Some(e) => state.health.record_failure(e.to_string()),
            }
            state.loading = false;
        }
        self.cycles.send_modify(|count| *count += 1);
        complete
    }

    async fn refresh<T>(
        &self,
        what: &str,
        fetch: impl Future<Output = Result<T, BackendError>>,
        apply: impl FnOnce(&mut Snapshot, T),
    ) -> Result<(), BackendError> {
        match fetch.await {
            Ok(value) => {
                apply(&mut self.state.borrow_mut().snapshot, value);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to refresh {}: {}", what, e);
                Err(e)
            }
        }
    }

    /// Load once immediately, then every period until `cancel` fires.
    ///
    /// Ticks follow a fixed schedule and do not wait for earlier loads, so
    /// slow responses overlap; the last one to land wins for each collection.
    /// Loads still in flight at cancellation are dropped, and `loading` is
    /// cleared even if none of them finished.
    pub async fn run(&self, cancel: CancellationToken) {
        info!("Starting snapshot refresh every {:?}", self.period);
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
        let mut in_flight = FuturesUnordered::new();
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => in_flight.push(self.load_snapshot()),
                Some(_) = in_flight.next(), if !in_flight.is_empty() => {}
            }
        }
        self.state.borrow_mut().loading = false;
        info!(
            "Snapshot refresh stopped ({} loads still in flight dropped)",
            in_flight.len()
        );
    }

    /// Fetch the detail for `name` and open it, seeding the first
    /// recommendation as the active scenario.
    ///
    /// Returns `true` when the detail was opened. A failed fetch keeps the
    /// previous detail; a response that is stale by the time it lands is
    /// dropped.
    pub async fn inspect(&self, name: &str) -> bool {
        let ticket = self.state.borrow_mut().view.begin_inspection(name);
        debug!("Inspecting {} (request {})", ticket.name(), ticket.generation());
        match self.backend.fetch_dam_detail(name).await {
            Ok(detail) => self.state.borrow_mut().view.complete_inspection(&ticket, detail),
            Err(e) => {
                warn!("Failed to load detail for {}: {}", name, e);
                self.state.borrow_mut().view.abandon_inspection(&ticket);
                false
            }
        }
    }

    pub fn select_recommendation(&self, index: usize) -> Option<Projection> {
        self.state.borrow_mut().view.select_recommendation(index)
    }

    pub fn close_inspection(&self) {
        self.state.borrow_mut().view.close();
    }

    pub fn navigate(&self, page: Page) {
        self.state.borrow_mut().view.navigate(page);
    }
}
