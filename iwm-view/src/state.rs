//! Application state owned by the rendering layer.
//!
//! `Dashboard` bundles the entity snapshot, the loading flag, sync health,
//! view state and display language into one explicit container. The sync
//! controller and the renderer share it through `Rc<RefCell<_>>`, the same
//! single-threaded sharing the rest of this workspace relies on.

use crate::localization::{Language, Localizer};
use crate::scenario::{Projection, ProjectionLabels};
use crate::view_state::ViewState;
use chrono::{DateTime, Utc};
use iwm_types::dam::Dam;
use iwm_types::district::{ConsumptionData, DistrictSummary};
use iwm_types::forecast::OccupancyForecast;
use iwm_types::metrics::ModelMetrics;
use std::cell::RefCell;
use std::rc::Rc;

/// Latest backend data. Each collection is replaced wholesale when its own
/// fetch succeeds; collections are never merged.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub dams: Vec<Dam>,
    /// Capacity-weighted system occupancy, replaced together with `dams`.
    pub general_occupancy_pct: Option<f64>,
    pub districts: Vec<DistrictSummary>,
    pub forecast: OccupancyForecast,
    pub metrics: Option<ModelMetrics>,
    pub consumption: Vec<ConsumptionData>,
}

impl Snapshot {
    pub fn dam(&self, name: &str) -> Option<&Dam> {
        self.dams.iter().find(|dam| dam.name == name)
    }

    pub fn district(&self, name: &str) -> Option<&DistrictSummary> {
        self.districts.iter().find(|district| district.name == name)
    }
}

/// Outcome of recent refresh cycles, for a "data may be stale" indicator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncHealth {
    pub last_success: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub consecutive_failures: u32,
}

impl SyncHealth {
    pub fn record_success(&mut self, at: DateTime<Utc>) {
        self.last_success = Some(at);
        self.last_error = None;
        self.consecutive_failures = 0;
    }

    pub fn record_failure(&mut self, error: String) {
        self.last_error = Some(error);
        self.consecutive_failures += 1;
    }

    /// True until a cycle fully succeeds, and after any failed cycle.
    pub fn is_stale(&self) -> bool {
        self.last_success.is_none() || self.consecutive_failures > 0
    }
}

/// Everything the rendering layer reads.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub snapshot: Snapshot,
    /// True until the first refresh cycle has finished, whatever its outcome.
    pub loading: bool,
    pub health: SyncHealth,
    pub view: ViewState,
    pub localizer: Localizer,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Language::BASE)
    }
}

impl Dashboard {
    pub fn new(language: Language) -> Self {
        Self {
            snapshot: Snapshot::default(),
            loading: true,
            health: SyncHealth::default(),
            view: ViewState::new(),
            localizer: Localizer::new(language),
        }
    }

    /// Wrap in the shared handle used by the sync controller.
    pub fn shared(self) -> SharedDashboard {
        Rc::new(RefCell::new(self))
    }

    pub fn language(&self) -> Language {
        self.localizer.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.localizer.set_language(language);
    }

    pub fn projection(&self) -> Option<Projection> {
        self.view.projection()
    }

    /// Display strings for the active scenario, placeholders when none.
    pub fn projection_labels(&self) -> ProjectionLabels {
        ProjectionLabels::new(
            self.projection().as_ref(),
            self.localizer.labels().scenario.no_selection,
        )
    }
}

pub type SharedDashboard = Rc<RefCell<Dashboard>>;
