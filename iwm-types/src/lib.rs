//! Entity types shared by the reservoir dashboard crates.
//!
//! Every struct here mirrors a JSON body served by the prediction backend.
//! Snapshots are immutable once received; consumers derive new values from
//! them instead of editing fields in place.
//!
//! The [`backend::Backend`] trait is the seam to that service. The reqwest
//! implementation lives in [`client`] behind the `api` feature so the view
//! layer can be built and tested without a network stack.

pub mod backend;
#[cfg(feature = "api")]
pub mod client;
pub mod dam;
pub mod district;
pub mod forecast;
pub mod metrics;
pub mod recommendation;
pub mod status;
