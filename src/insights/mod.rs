//! Insights Dashboard
//!
//! Periodic polling of the backend's statistics and log endpoints.
//!
//! ## Behaviour
//!
//! - Both endpoints are fetched as soon as the poller starts, then once per
//!   interval (5 seconds by default)
//! - Every tick runs on its own task, so a slow round trip can overlap the
//!   next tick
//! - A tick publishes a new [`InsightSnapshot`] only when both fetches
//!   succeed; failures are logged and the previous snapshot stays
//! - Dropping the [`PollerHandle`] stops the timer

mod poller;
mod snapshot;

pub use poller::{InsightsPoller, PollerConfig, PollerHandle};
pub use snapshot::InsightSnapshot;
