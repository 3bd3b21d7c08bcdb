/// Streak and break statistics derived from a habit's completion ledger
///
/// This module holds the derivation engine: a pure function that replays a
/// habit's completion history and computes the current streak, the longest
/// streak ever achieved, the number of breaks, and the days elapsed since
/// the last completion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CompletionLedger, Periodicity};

/// Derived statistics for a habit
///
/// Never stored independently - always recomputed from the habit's ledger.
/// A cached copy is only valid until the next completion, a deletion, or the
/// wall clock advancing past a period boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStats {
    /// Whole days since the most recent completion, None if no completions exist
    pub days_since_last_completion: Option<i64>,
    /// Consecutive qualifying periods ending at the most recent completion,
    /// reported as 0 once the streak has gone cold
    pub current_streak: u32,
    /// Best streak ever achieved across the whole ledger history
    pub longest_streak: u32,
    /// Number of gaps between consecutive completions that exceeded the
    /// periodicity's limit
    pub break_count: u32,
}

impl HabitStats {
    /// Stats for a habit with no completion history
    pub fn empty() -> Self {
        Self {
            days_since_last_completion: None,
            current_streak: 0,
            longest_streak: 0,
            break_count: 0,
        }
    }
}

/// Compute all derived statistics for one habit
///
/// Pure function of the periodicity, the ledger, and a single `now` captured
/// by the caller. The same inputs always yield the same output, which is
/// what makes the engine testable without a clock.
///
/// Two completions on the same calendar day have a delta of zero days: they
/// never break a streak, and each extends the run by at most one step. The
/// admission gate is what keeps same-day duplicates out of the ledger in
/// the first place.
pub fn compute_stats(
    periodicity: Periodicity,
    ledger: &CompletionLedger,
    now: DateTime<Utc>,
) -> HabitStats {
    let timestamps = ledger.ascending();
    let Some(latest) = ledger.latest() else {
        return HabitStats::empty();
    };

    let limit = periodicity.gap_limit_days();
    let (longest_streak, break_count) = replay_forward(timestamps, limit);

    // Elapsed time truncates toward zero: 23h59m since the last completion
    // still counts as 0 whole days.
    let days_since_last = whole_days_between(latest, now).max(0);

    // A streak that has gone cold is reported as zero, not as its last
    // historical length. longest_streak is unaffected by this rule.
    let current_streak = if days_since_last > limit {
        0
    } else {
        walk_backward(timestamps, limit)
    };

    HabitStats {
        days_since_last_completion: Some(days_since_last),
        current_streak,
        longest_streak,
        break_count,
    }
}

/// Whole days elapsed from `earlier` to `later`, truncating toward zero
fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_days()
}

/// Forward pass over the ascending ledger: longest streak and break count
///
/// A gap within the limit extends the current run; a gap beyond it counts
/// one break and restarts the run at 1, since the completion that ends the
/// gap itself begins a new run.
fn replay_forward(timestamps: &[DateTime<Utc>], limit: i64) -> (u32, u32) {
    let mut run: u32 = 0;
    let mut longest: u32 = 0;
    let mut breaks: u32 = 0;

    for (i, timestamp) in timestamps.iter().enumerate() {
        if i == 0 {
            run = 1;
        } else {
            let delta_days = whole_days_between(timestamps[i - 1], *timestamp);
            if delta_days <= limit {
                run += 1;
            } else {
                breaks += 1;
                run = 1;
            }
        }
        longest = longest.max(run);
    }

    (longest, breaks)
}

/// Backward walk from the most recent completion: length of the run that
/// ends at the latest entry, stopping at the first gap beyond the limit
fn walk_backward(timestamps: &[DateTime<Utc>], limit: i64) -> u32 {
    let mut streak: u32 = 1;

    for pair in timestamps.windows(2).rev() {
        let delta_days = whole_days_between(pair[0], pair[1]);
        if delta_days <= limit {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
