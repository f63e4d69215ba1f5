//! # Alert subscriber for threshold-crossing events.
//!
//! [`AlertWriter`] reacts to the derived events with structured log records:
//! a `LowStockWarning` becomes a warn-level record, a `StockLevelOk` an
//! info-level one. Input events are out of its scope and ignored.
//!
//! Useful as-is for demos and as a reference for metric/alerting subscribers.

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Logs threshold-crossing events via `tracing`.
pub struct AlertWriter;

impl Subscribe for AlertWriter {
    fn on_event(&self, event: &Event) {
        match event.kind {
            EventKind::LowStockWarning => {
                tracing::warn!(machine = %event.machine, "stock at or below threshold");
            }
            EventKind::StockLevelOk => {
                tracing::info!(machine = %event.machine, "stock recovered");
            }
            EventKind::Sale | EventKind::Refill => {}
        }
    }

    fn name(&self) -> &'static str {
        "alerts"
    }
}
