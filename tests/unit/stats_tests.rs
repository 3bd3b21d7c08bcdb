/// Tests for the streak/break derivation engine through the public API
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use habit_tracker::{compute_stats, CompletionLedger, HabitStats, Periodicity};

fn ts(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

fn daily_ledger(days: &[&str]) -> CompletionLedger {
    CompletionLedger::from_unordered(days.iter().map(|d| ts(d)).collect())
}

#[test]
fn test_zero_completions_terminal_case() {
    let stats = compute_stats(
        Periodicity::Daily,
        &CompletionLedger::empty(),
        ts("2024-06-01 12:00:00"),
    );

    assert_eq!(
        stats,
        HabitStats {
            days_since_last_completion: None,
            current_streak: 0,
            longest_streak: 0,
            break_count: 0,
        }
    );
}

#[test]
fn test_five_consecutive_days() {
    let ledger = daily_ledger(&[
        "2024-01-01 08:00:00",
        "2024-01-02 08:00:00",
        "2024-01-03 08:00:00",
        "2024-01-04 08:00:00",
        "2024-01-05 08:00:00",
    ]);
    let stats = compute_stats(Periodicity::Daily, &ledger, ts("2024-01-05 12:00:00"));

    assert_eq!(stats.current_streak, 5);
    assert_eq!(stats.longest_streak, 5);
    assert_eq!(stats.break_count, 0);
    assert_eq!(stats.days_since_last_completion, Some(0));
}

#[test]
fn test_single_gap_splits_the_run() {
    let ledger = daily_ledger(&[
        "2024-01-01 08:00:00",
        "2024-01-02 08:00:00",
        "2024-01-05 08:00:00",
    ]);
    let stats = compute_stats(Periodicity::Daily, &ledger, ts("2024-01-05 12:00:00"));

    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.break_count, 1);
    assert_eq!(stats.current_streak, 1);
}

#[test]
fn test_weekly_habit_gone_cold() {
    let ledger = daily_ledger(&["2024-01-01 08:00:00", "2024-01-08 08:00:00"]);
    let stats = compute_stats(Periodicity::Weekly, &ledger, ts("2024-01-18 08:00:00"));

    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.days_since_last_completion, Some(10));
    assert_eq!(stats.longest_streak, 2);
}

#[test]
fn test_longest_never_below_current_across_time() {
    let ledger = daily_ledger(&[
        "2024-01-01 08:00:00",
        "2024-01-02 08:00:00",
        "2024-01-03 08:00:00",
        "2024-01-07 08:00:00",
        "2024-01-08 08:00:00",
    ]);

    // Evaluate at a range of instants, including ones where the streak has
    // gone cold; the invariant must hold at every one of them
    let base = ts("2024-01-08 12:00:00");
    for hours in (0..240).step_by(12) {
        let now = base + Duration::hours(hours);
        let stats = compute_stats(Periodicity::Daily, &ledger, now);
        assert!(
            stats.longest_streak >= stats.current_streak,
            "violated at {}",
            now
        );
    }
}

#[test]
fn test_idempotent_for_identical_inputs() {
    let ledger = daily_ledger(&[
        "2024-01-01 08:00:00",
        "2024-01-02 08:00:00",
        "2024-01-04 08:00:00",
    ]);
    let now = ts("2024-01-04 12:00:00");

    let first = compute_stats(Periodicity::Daily, &ledger, now);
    let second = compute_stats(Periodicity::Daily, &ledger, now);

    assert_eq!(first, second);
}

#[test]
fn test_in_limit_append_never_shrinks_streaks() {
    // Appending one more completion within the gap limit of the previous
    // latest can only grow or maintain both streak figures
    let mut timestamps = vec![
        ts("2024-01-01 08:00:00"),
        ts("2024-01-02 08:00:00"),
        ts("2024-01-05 08:00:00"),
    ];
    let now = ts("2024-01-06 12:00:00");

    let before = compute_stats(
        Periodicity::Daily,
        &CompletionLedger::from_unordered(timestamps.clone()),
        now,
    );

    timestamps.push(ts("2024-01-06 08:00:00"));
    let after = compute_stats(
        Periodicity::Daily,
        &CompletionLedger::from_unordered(timestamps),
        now,
    );

    assert!(after.current_streak >= before.current_streak);
    assert!(after.longest_streak >= before.longest_streak);
}

#[test]
fn test_out_of_order_and_duplicate_timestamps() {
    // Adversarial ledger: unsorted, with a same-day duplicate
    let ledger = CompletionLedger::from_unordered(vec![
        ts("2024-01-03 07:00:00"),
        ts("2024-01-01 09:00:00"),
        ts("2024-01-02 22:00:00"),
        ts("2024-01-02 06:00:00"),
    ]);
    let stats = compute_stats(Periodicity::Daily, &ledger, ts("2024-01-03 12:00:00"));

    assert_eq!(stats.break_count, 0);
    assert_eq!(stats.longest_streak, 4);
    assert_eq!(stats.current_streak, 4);
}

#[test]
fn test_gap_exactly_at_limit_is_not_a_break() {
    let ledger = daily_ledger(&["2024-01-01 08:00:00", "2024-01-02 08:00:00"]);
    let stats = compute_stats(Periodicity::Daily, &ledger, ts("2024-01-02 12:00:00"));
    assert_eq!(stats.break_count, 0);
    assert_eq!(stats.current_streak, 2);

    let weekly = daily_ledger(&["2024-01-01 08:00:00", "2024-01-08 08:00:00"]);
    let stats = compute_stats(Periodicity::Weekly, &weekly, ts("2024-01-08 12:00:00"));
    assert_eq!(stats.break_count, 0);
    assert_eq!(stats.current_streak, 2);
}

#[test]
fn test_sub_day_gap_truncates_to_zero() {
    // 23h59m between completions truncates to 0 whole days
    let ledger = daily_ledger(&["2024-01-01 12:01:00", "2024-01-02 12:00:00"]);
    let stats = compute_stats(Periodicity::Daily, &ledger, ts("2024-01-02 12:30:00"));

    assert_eq!(stats.break_count, 0);
    assert_eq!(stats.current_streak, 2);
}

#[test]
fn test_long_history_with_alternating_gaps() {
    // 1,2 | break | 1,2,3 | break | 1 - longest 3, breaks 2, current cold
    let ledger = daily_ledger(&[
        "2024-01-01 08:00:00",
        "2024-01-02 08:00:00",
        "2024-01-06 08:00:00",
        "2024-01-07 08:00:00",
        "2024-01-08 08:00:00",
        "2024-01-15 08:00:00",
    ]);
    let stats = compute_stats(Periodicity::Daily, &ledger, ts("2024-01-20 08:00:00"));

    assert_eq!(stats.longest_streak, 3);
    assert_eq!(stats.break_count, 2);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.days_since_last_completion, Some(5));
}
