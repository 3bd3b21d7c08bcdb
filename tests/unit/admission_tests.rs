/// Tests for the completion admission gate through the public API
use chrono::{DateTime, NaiveDateTime, Utc};
use habit_tracker::{admit, AdmissionOutcome};

fn ts(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

#[test]
fn test_empty_ledger_admits() {
    assert_eq!(admit(None, ts("2024-01-01 09:00:00")), AdmissionOutcome::Accepted);
}

#[test]
fn test_same_day_second_completion_rejected() {
    // Completed at 09:00; trying again at 18:00 the same day must be
    // rejected without touching the ledger
    let outcome = admit(Some(ts("2024-01-01 09:00:00")), ts("2024-01-01 18:00:00"));
    assert_eq!(outcome, AdmissionOutcome::AlreadyCompletedToday);
    assert!(!outcome.is_accepted());
}

#[test]
fn test_next_day_after_full_day_admits() {
    let outcome = admit(Some(ts("2024-01-01 09:00:00")), ts("2024-01-02 09:00:00"));
    assert_eq!(outcome, AdmissionOutcome::Accepted);
}

#[test]
fn test_next_calendar_day_but_under_24h_rejected() {
    // Whole-day arithmetic: 20 hours elapsed is still zero whole days even
    // though the calendar date changed
    let outcome = admit(Some(ts("2024-01-01 20:00:00")), ts("2024-01-02 16:00:00"));
    assert_eq!(outcome, AdmissionOutcome::AlreadyCompletedToday);
}

#[test]
fn test_gate_ignores_periodicity() {
    // The 1-day separation applies even to weekly habits; only the streak
    // gap depends on periodicity
    let outcome = admit(Some(ts("2024-01-01 09:00:00")), ts("2024-01-01 23:59:59"));
    assert_eq!(outcome, AdmissionOutcome::AlreadyCompletedToday);

    let outcome = admit(Some(ts("2024-01-01 09:00:00")), ts("2024-01-03 09:00:00"));
    assert_eq!(outcome, AdmissionOutcome::Accepted);
}

#[test]
fn test_long_gap_still_admits() {
    let outcome = admit(Some(ts("2024-01-01 09:00:00")), ts("2024-03-01 09:00:00"));
    assert_eq!(outcome, AdmissionOutcome::Accepted);
}
