use tracing::{debug, trace};

use crate::config::ExitIntentConfig;

/// A pointer-out event reduced to what the heuristic needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerExit {
    /// Vertical pointer position relative to the viewport top
    pub client_y: f64,
    /// `relatedTarget` was null: the pointer left the window, not a child element
    pub leaves_window: bool,
    /// Wall-clock timestamp of the event in milliseconds
    pub at_ms: f64,
}

/// Timestamp taken when the listener is attached. Never moves afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DwellClock {
    attached_at_ms: f64,
}

impl DwellClock {
    pub fn start(now_ms: f64) -> Self {
        Self {
            attached_at_ms: now_ms,
        }
    }

    /// Milliseconds on page; clock skew backwards reads as zero.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.attached_at_ms).max(0.0)
    }
}

/// Counts pointer exits through the top of the viewport after a minimum dwell.
///
/// The counter only grows; consumers react to changes, never to its value.
#[derive(Debug, Clone)]
pub struct ExitIntentDetector {
    clock: DwellClock,
    top_threshold_px: f64,
    min_dwell_ms: f64,
    count: u64,
}

impl ExitIntentDetector {
    pub fn new(config: &ExitIntentConfig, attached_at_ms: f64) -> Self {
        Self {
            clock: DwellClock::start(attached_at_ms),
            top_threshold_px: config.top_threshold_px,
            min_dwell_ms: config.min_dwell_ms as f64,
            count: 0,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Leaving-top, leaving-window and dwell all hold.
    pub fn qualifies(&self, exit: &PointerExit) -> bool {
        let leaving_top = exit.client_y <= self.top_threshold_px;
        let dwelled = self.clock.elapsed_ms(exit.at_ms) >= self.min_dwell_ms;
        leaving_top && exit.leaves_window && dwelled
    }

    /// Feed one pointer-out event; returns the new count when it qualified.
    pub fn observe(&mut self, exit: &PointerExit) -> Option<u64> {
        if !self.qualifies(exit) {
            trace!(
                client_y = exit.client_y,
                leaves_window = exit.leaves_window,
                elapsed_ms = self.clock.elapsed_ms(exit.at_ms),
                "pointer exit ignored"
            );
            return None;
        }
        self.count += 1;
        debug!(count = self.count, "exit intent detected");
        Some(self.count)
    }
}
