// The dismissal sweep - the deferred action the timer fires.

use chrono::Utc;
use log::{debug, warn};

use super::dismiss::Dismiss;
use super::model::{DismissalRecord, SweepReport};
use super::page::Page;

/// Run one dismissal sweep over the page.
///
/// Queries the live tree for `marker` and closes every match in document
/// order. The match set is computed once, up front: elements inserted while
/// the sweep runs are not picked up. A failure closing one element is
/// recorded and does not stop the remaining elements from being attempted.
pub fn sweep(page: &mut Page, marker: &str, dismisser: &mut dyn Dismiss) -> SweepReport {
    let matches = page.query_all(marker);
    let matched = matches.len();
    let mut records = Vec::with_capacity(matched);
    let mut dismissed = 0;
    let mut failed = 0;

    for id in matches {
        match dismisser.close(page, id) {
            Ok(()) => {
                dismissed += 1;
                records.push(DismissalRecord {
                    element: id,
                    error: None,
                });
            }
            Err(e) => {
                failed += 1;
                warn!("Failed to dismiss banner {}: {}", id, e);
                records.push(DismissalRecord {
                    element: id,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    debug!(
        "Sweep for '{}': {} matched, {} dismissed, {} failed",
        marker, matched, dismissed, failed
    );

    SweepReport {
        matched,
        dismissed,
        failed,
        completed_at: Utc::now(),
        records,
    }
}
