//! Navigation, the open reservoir detail, and the active scenario.
//!
//! The page and the detail are independent: navigating never closes the
//! detail, and closing the detail never changes the page.
//!
//! Detail fetches are tagged with an [`InspectionTicket`]. Only the response
//! for the most recent ticket is accepted; a newer inspection or a close
//! makes every earlier ticket stale.

use crate::scenario::Projection;
use iwm_types::dam::DamDetail;
use iwm_types::recommendation::Recommendation;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Predictions,
    Districts,
    Docs,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Predictions, Page::Districts, Page::Docs];
}

/// Identity of one in-flight detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionTicket {
    generation: u64,
    name: String,
}

impl InspectionTicket {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    page: Page,
    detail: Option<DamDetail>,
    /// Index into `detail.recommendations`.
    selection: Option<usize>,
    pending: Option<InspectionTicket>,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn detail(&self) -> Option<&DamDetail> {
        self.detail.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Reservoir whose detail fetch is in flight, if any.
    pub fn pending_inspection(&self) -> Option<&str> {
        self.pending.as_ref().map(|ticket| ticket.name.as_str())
    }

    pub fn selection_index(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_recommendation(&self) -> Option<&Recommendation> {
        let detail = self.detail.as_ref()?;
        detail.recommendation(self.selection?)
    }

    /// Projection for the active scenario, or `None` when nothing is selected.
    pub fn projection(&self) -> Option<Projection> {
        let detail = self.detail.as_ref()?;
        let recommendation = detail.recommendation(self.selection?)?;
        Some(Projection::compute(detail, recommendation))
    }

    /// Start inspecting `name`. Any earlier in-flight inspection becomes stale.
    /// The currently open detail stays visible until the new one arrives.
    pub fn begin_inspection(&mut self, name: &str) -> InspectionTicket {
        self.generation += 1;
        let ticket = InspectionTicket {
            generation: self.generation,
            name: name.to_string(),
        };
        self.pending = Some(ticket.clone());
        ticket
    }

    /// Open `detail` if `ticket` is still the current inspection and the
    /// record is for the reservoir that was asked for. The first
    /// recommendation becomes the active scenario.
    ///
    /// Returns `false` when the response was discarded as stale.
    pub fn complete_inspection(&mut self, ticket: &InspectionTicket, detail: DamDetail) -> bool {
        if self.pending.as_ref() != Some(ticket) {
            debug!(
                "Discarding stale detail for {} (request {})",
                ticket.name, ticket.generation
            );
            return false;
        }
        if detail.name != ticket.name {
            warn!(
                "Detail response for {} does not match requested reservoir {}",
                detail.name, ticket.name
            );
            self.pending = None;
            return false;
        }
        self.pending = None;
        self.selection = if detail.recommendations.is_empty() {
            None
        } else {
            Some(0)
        };
        self.detail = Some(detail);
        true
    }

    /// Forget a failed inspection. The previously open detail is kept.
    pub fn abandon_inspection(&mut self, ticket: &InspectionTicket) {
        if self.pending.as_ref() == Some(ticket) {
            self.pending = None;
        }
    }

    /// Make the recommendation at `index` the active scenario and return
    /// its projection.
    ///
    /// Without an open detail this is ignored. An index outside the open
    /// detail's list clears the selection.
    pub fn select_recommendation(&mut self, index: usize) -> Option<Projection> {
        let Some(detail) = self.detail.as_ref() else {
            warn!("Ignoring scenario selection {}: no reservoir detail is open", index);
            return None;
        };
        if index >= detail.recommendations.len() {
            warn!(
                "Scenario {} is not offered for {} ({} recommendations)",
                index,
                detail.name,
                detail.recommendations.len()
            );
            self.selection = None;
            return None;
        }
        self.selection = Some(index);
        self.projection()
    }

    /// Close the detail view. Clears the detail, the selection and any
    /// in-flight inspection, whatever the current state.
    pub fn close(&mut self) {
        self.detail = None;
        self.selection = None;
        self.pending = None;
    }

    /// External dismiss signal (e.g. the Escape key).
    pub fn dismiss(&mut self) {
        self.close();
    }
}
