//! View-model for the Istanbul reservoir dashboard.
//!
//! Holds everything between the backend and whatever draws the screen:
//! the periodically refreshed snapshot, the open reservoir detail with its
//! what-if scenario, chart-ready series and the Turkish/English labels.
//! Nothing here renders; the `iwm-cmd` crate prints it as text and exports
//! chart series as JSON or CSV.

pub mod chart;
pub mod localization;
pub mod phrases;
pub mod scenario;
pub mod state;
pub mod sync;
pub mod view_state;
