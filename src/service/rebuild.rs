//! Periodic reconciliation of the search backend with the store.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::{DictionaryService, COMPONENT};
use crate::error::{report_error, ErrorContext};

/// Spawns a task that rebuilds the search backend from the store every
/// `interval`. The first rebuild happens one full interval after the call.
///
/// A failed rebuild is reported and retried on the next tick; the task runs
/// until the returned handle is aborted or the runtime shuts down.
///
/// # Returns
///
/// `None` without spawning anything if `interval` is zero.
pub fn spawn_periodic_rebuild(
    service: Arc<DictionaryService>,
    interval: Duration,
) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        debug!("Periodic search rebuild disabled by zero interval");
        return None;
    }
    info!(interval_secs = interval.as_secs_f64(), "Periodic search rebuild enabled");

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match service.resync().await {
                Ok(report) => debug!(
                    words = report.inserted,
                    rejected = report.rejected.len(),
                    "Periodic search rebuild completed"
                ),
                Err(e) => report_error(
                    ErrorContext::new(e, COMPONENT).with_details("periodic rebuild"),
                ),
            }
        }
    }))
}
