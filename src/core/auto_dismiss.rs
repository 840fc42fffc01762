// Alert auto-dismisser - arms a one-shot timer on page ready and fires the
// dismissal sweep once the delay has elapsed.

use std::time::{Duration, Instant};

use log::{debug, info};

use super::config::Settings;
use super::dismiss::Dismiss;
use super::model::SweepReport;
use super::page::Page;
use super::sweeper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Ready event not seen yet.
    Unarmed,
    /// Timer armed, sweep pending.
    Waiting { deadline: Instant },
    /// Sweep has run; terminal.
    Fired,
}

/// Schedules exactly one dismissal sweep per page load.
///
/// Time is passed in by the caller, so tests drive the timer with synthetic
/// instants instead of waiting out the real delay.
pub struct AutoDismisser {
    delay: Duration,
    marker: String,
    phase: Phase,
}

impl AutoDismisser {
    pub fn new(settings: &Settings) -> Self {
        Self {
            delay: Duration::from_millis(settings.delay_ms),
            marker: settings.marker.clone(),
            phase: Phase::Unarmed,
        }
    }

    /// Arm the one-shot timer. The ready event should fire once per page
    /// load; if the host fires it again anyway, the extra calls are no-ops.
    pub fn on_ready(&mut self, now: Instant) {
        match self.phase {
            Phase::Unarmed => {
                self.phase = Phase::Waiting {
                    deadline: now + self.delay,
                };
                info!("Banner sweep armed, firing in {} ms", self.delay.as_millis());
            }
            Phase::Waiting { .. } | Phase::Fired => {
                debug!("Ready fired again; sweep already armed or done");
            }
        }
    }

    /// True once the sweep has run.
    pub fn fired(&self) -> bool {
        matches!(self.phase, Phase::Fired)
    }

    /// Drive the timer. Runs the sweep on the first tick at or past the
    /// deadline and never again; returns None on every other call. There is
    /// no way to cancel an armed timer.
    pub fn tick(
        &mut self,
        now: Instant,
        page: &mut Page,
        dismisser: &mut dyn Dismiss,
    ) -> Option<SweepReport> {
        let deadline = match self.phase {
            Phase::Waiting { deadline } => deadline,
            Phase::Unarmed | Phase::Fired => return None,
        };
        if now < deadline {
            return None;
        }

        self.phase = Phase::Fired;
        let report = sweeper::sweep(page, &self.marker, dismisser);
        info!(
            "Banner sweep fired: {} matched, {} dismissed, {} failed",
            report.matched, report.dismissed, report.failed
        );
        Some(report)
    }
}
