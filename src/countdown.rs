//! Countdown engine.
//!
//! A single engine instance is owned by the [`App`](crate::app::App) and
//! every view that shows remaining time reads it - the decomposition
//! arithmetic lives here and nowhere else.
//!
//! The engine is wall-clock based: each tick reads the current instant
//! fresh rather than decrementing a cached delta, so system clock
//! adjustments and process suspension are absorbed on the next tick.
//!
//! ## State Transitions
//!
//! ```text
//! Pending -> Counting -> Elapsed
//! ```
//!
//! `Pending` is the before-first-tick placeholder (rendered as `--`),
//! distinct from the all-zero `Elapsed` state so the UI never flashes
//! "already happened" while waiting for the first tick. The transition
//! into `Elapsed` is one-way: once reached, further ticks are no-ops.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time until the target instant, decomposed for display.
///
/// All fields are non-negative; `hours` is 0-23, `minutes` and `seconds`
/// are 0-59. The decomposition is exact at second granularity:
/// `days*86400 + hours*3600 + minutes*60 + seconds == diff_ms / 1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    /// Computes the remaining time between two instants.
    ///
    /// A pure function of its inputs: the millisecond difference is
    /// clamped at zero from below, then split with floor division and
    /// modulo wraparound (days, then hours mod 24, minutes mod 60,
    /// seconds mod 60). A target already in the past yields all zeros.
    pub fn between(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> Self {
        let diff = target.signed_duration_since(now).num_milliseconds().max(0);
        Self {
            days: (diff / MS_PER_DAY) as u64,
            hours: ((diff / MS_PER_HOUR) % 24) as u64,
            minutes: ((diff / MS_PER_MINUTE) % 60) as u64,
            seconds: ((diff / MS_PER_SECOND) % 60) as u64,
        }
    }

    /// Total whole seconds represented by this breakdown.
    #[allow(dead_code)]
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Countdown state as exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// No tick has happened yet. Displays render placeholders, not zeros.
    Pending,
    /// The target is still in the future.
    Counting(RemainingTime),
    /// The target has passed. Terminal - ticks no longer recompute.
    Elapsed,
}

/// Core countdown engine.
///
/// Holds the immutable target instant and the latest computed state.
/// No internal thread - the caller is responsible for calling `tick()`
/// once per second.
pub struct CountdownEngine {
    target: DateTime<FixedOffset>,
    state: CountdownState,
}

impl CountdownEngine {
    /// Creates an engine counting down to the given RFC 3339 instant.
    ///
    /// The string must carry an explicit UTC offset (e.g.
    /// `2026-02-10T23:00:00+05:30`) so the countdown is identical for
    /// every viewer regardless of local time zone. An offset-less or
    /// otherwise unparseable string is a construction-time error.
    pub fn new(target_rfc3339: &str) -> Result<Self> {
        let target = DateTime::parse_from_rfc3339(target_rfc3339).with_context(|| {
            format!(
                "invalid target instant '{target_rfc3339}' \
                 (expected RFC 3339 with an explicit UTC offset, \
                 e.g. 2026-02-10T23:00:00+05:30)"
            )
        })?;
        Ok(Self {
            target,
            state: CountdownState::Pending,
        })
    }

    /// The instant this engine counts down to.
    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }

    /// The latest computed state.
    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Advances the countdown using a fresh wall-clock read.
    pub fn tick(&mut self) {
        self.tick_at(Utc::now());
    }

    /// Advances the countdown using an explicit current instant.
    ///
    /// Once `Elapsed`, this is a no-op - the transition is one-way even
    /// if the clock is later stepped back before the target.
    pub fn tick_at(&mut self, now: DateTime<Utc>) {
        if self.state == CountdownState::Elapsed {
            return;
        }
        let diff = self.target.signed_duration_since(now).num_milliseconds();
        self.state = if diff <= 0 {
            CountdownState::Elapsed
        } else {
            CountdownState::Counting(RemainingTime::between(self.target, now))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const TARGET: &str = "2026-02-10T23:00:00+05:30";

    fn target() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(TARGET).unwrap()
    }

    /// A current instant exactly `diff_ms` before the target.
    fn now_at_diff(diff_ms: i64) -> DateTime<Utc> {
        (target() - Duration::milliseconds(diff_ms)).with_timezone(&Utc)
    }

    #[test]
    fn decomposition_is_lossless_at_second_granularity() {
        let diffs: [i64; 12] = [
            0,
            1,
            999,
            1_000,
            59_999,
            60_000,
            3_599_999,
            3_600_000,
            86_399_999,
            86_400_000,
            90_061_001,
            123_456_789_012,
        ];
        for diff in diffs {
            let r = RemainingTime::between(target(), now_at_diff(diff));
            assert_eq!(
                r.total_seconds(),
                (diff / 1_000) as u64,
                "lossy decomposition for diff {diff}"
            );
            assert!(r.hours <= 23, "hours out of range for diff {diff}");
            assert!(r.minutes <= 59, "minutes out of range for diff {diff}");
            assert!(r.seconds <= 59, "seconds out of range for diff {diff}");
        }
    }

    #[test]
    fn negative_diff_clamps_to_all_zeros() {
        for diff in [-1, -5_000, -86_400_000] {
            let r = RemainingTime::between(target(), now_at_diff(diff));
            assert_eq!(
                r,
                RemainingTime {
                    days: 0,
                    hours: 0,
                    minutes: 0,
                    seconds: 0
                }
            );
        }
    }

    #[test]
    fn one_of_each_field() {
        // 1 day + 1 hour + 1 minute + 1 second + 1 ms
        let r = RemainingTime::between(target(), now_at_diff(90_061_001));
        assert_eq!(
            r,
            RemainingTime {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn sub_second_remainder_truncates_to_zero() {
        let r = RemainingTime::between(target(), now_at_diff(999));
        assert_eq!(r.total_seconds(), 0);
    }

    #[test]
    fn same_inputs_same_output() {
        let now = now_at_diff(12_345_678);
        assert_eq!(
            RemainingTime::between(target(), now),
            RemainingTime::between(target(), now)
        );
    }

    /// Steps a simulated clock forward one second at a time and checks
    /// that exactly the least-significant field changes, with correct
    /// carries at the minute, hour, and day boundaries.
    #[test]
    fn one_second_steps_carry_correctly() {
        // Minute boundary: 1m2s -> 1m1s -> 1m0s -> 59s
        let steps = ticks_from(62_000, 4);
        assert_eq!(steps[0], (0, 0, 1, 2));
        assert_eq!(steps[1], (0, 0, 1, 1));
        assert_eq!(steps[2], (0, 0, 1, 0));
        assert_eq!(steps[3], (0, 0, 0, 59));

        // Hour boundary: 1h0m1s -> 1h0m0s -> 59m59s
        let steps = ticks_from(3_601_000, 3);
        assert_eq!(steps[0], (0, 1, 0, 1));
        assert_eq!(steps[1], (0, 1, 0, 0));
        assert_eq!(steps[2], (0, 0, 59, 59));

        // Day boundary: 1d0h0m1s -> 1d0h0m0s -> 23h59m59s
        let steps = ticks_from(86_401_000, 3);
        assert_eq!(steps[0], (1, 0, 0, 1));
        assert_eq!(steps[1], (1, 0, 0, 0));
        assert_eq!(steps[2], (0, 23, 59, 59));
    }

    fn ticks_from(start_diff_ms: i64, count: usize) -> Vec<(u64, u64, u64, u64)> {
        (0..count as i64)
            .map(|i| {
                let r = RemainingTime::between(target(), now_at_diff(start_diff_ms - i * 1_000));
                (r.days, r.hours, r.minutes, r.seconds)
            })
            .collect()
    }

    #[test]
    fn engine_starts_pending() {
        let engine = CountdownEngine::new(TARGET).unwrap();
        assert_eq!(engine.state(), CountdownState::Pending);
    }

    #[test]
    fn engine_counts_then_elapses() {
        let mut engine = CountdownEngine::new(TARGET).unwrap();

        engine.tick_at(now_at_diff(5_000));
        match engine.state() {
            CountdownState::Counting(r) => assert_eq!(r.seconds, 5),
            other => panic!("expected Counting, got {other:?}"),
        }

        engine.tick_at(now_at_diff(-1));
        assert_eq!(engine.state(), CountdownState::Elapsed);
    }

    #[test]
    fn elapsed_is_terminal() {
        let mut engine = CountdownEngine::new(TARGET).unwrap();
        engine.tick_at(now_at_diff(-5_000));
        assert_eq!(engine.state(), CountdownState::Elapsed);

        // Clock stepped back before the target: still elapsed.
        engine.tick_at(now_at_diff(60_000));
        assert_eq!(engine.state(), CountdownState::Elapsed);
    }

    #[test]
    fn exactly_at_target_is_elapsed() {
        let mut engine = CountdownEngine::new(TARGET).unwrap();
        engine.tick_at(now_at_diff(0));
        assert_eq!(engine.state(), CountdownState::Elapsed);
    }

    #[test]
    fn rejects_offsetless_target() {
        // Ambiguous local-time interpretation is not accepted.
        assert!(CountdownEngine::new("2026-02-10T23:00:00").is_err());
    }

    #[test]
    fn rejects_garbage_target() {
        assert!(CountdownEngine::new("").is_err());
        assert!(CountdownEngine::new("tenth of february").is_err());
        assert!(CountdownEngine::new("2026-02-30T00:00:00+05:30").is_err());
    }

    #[test]
    fn accepts_utc_and_offset_targets() {
        assert!(CountdownEngine::new("2026-02-10T17:30:00Z").is_ok());
        assert!(CountdownEngine::new(TARGET).is_ok());
    }
}
