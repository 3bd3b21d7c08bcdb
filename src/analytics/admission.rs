/// Admission gate for new completion events
///
/// This module decides whether a completion recorded "now" is accepted into
/// the ledger or rejected as a duplicate for the current day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of attempting to record a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionOutcome {
    /// The completion is new for this day and should be appended to the ledger
    Accepted,
    /// The habit was already completed today; the ledger must not be touched
    AlreadyCompletedToday,
}

impl AdmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AdmissionOutcome::Accepted)
    }
}

/// Decide whether a completion at `now` is admitted
///
/// The gate is a fixed one-day minimum separation, independent of the
/// habit's periodicity: a weekly habit still accepts at most one completion
/// per day, while its streak survives gaps of up to seven days. Whole-day
/// arithmetic matches the stats engine, so a completion 23 hours after the
/// previous one is still "today" and gets rejected.
pub fn admit(latest_completion: Option<DateTime<Utc>>, now: DateTime<Utc>) -> AdmissionOutcome {
    match latest_completion {
        None => AdmissionOutcome::Accepted,
        Some(latest) => {
            if (now - latest).num_days() >= 1 {
                AdmissionOutcome::Accepted
            } else {
                AdmissionOutcome::AlreadyCompletedToday
            }
        }
    }
}
