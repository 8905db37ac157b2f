//! Countdown state and HH:MM:SS rendering

use serde::{Deserialize, Serialize};

/// Phase of a countdown
///
/// The only transition is Counting -> Expired, and it is irreversible for a
/// given countdown value. Ticking while Expired leaves the counter at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Counting,
    Expired,
}

/// Countdown state - a remaining-seconds counter decremented once per tick
///
/// The counter is a `u64`, so negative or fractional durations are
/// unrepresentable by construction.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_seconds: u64,
}

impl Countdown {
    /// Create a countdown holding `initial_seconds`
    pub fn new(initial_seconds: u64) -> Self {
        Self {
            remaining_seconds: initial_seconds,
        }
    }

    /// Seconds left on the clock
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Current phase of the countdown
    pub fn phase(&self) -> Phase {
        if self.remaining_seconds > 0 {
            Phase::Counting
        } else {
            Phase::Expired
        }
    }

    /// Advance the countdown by one tick
    ///
    /// Decrements the counter by one while it is above zero; at zero the
    /// decrement is suppressed so the counter never underflows. Returns the
    /// phase after the tick.
    pub fn tick(&mut self) -> Phase {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.phase()
    }

    /// Render the remaining time as a zero-padded `HH:MM:SS` string
    ///
    /// Minutes and seconds are always two digits. Hours pad to at least two
    /// digits but are not wrapped: past 99:59:59 the hours field simply grows
    /// wider (360000 seconds renders as `100:00:00`).
    pub fn display(&self) -> String {
        let hrs = self.remaining_seconds / 3600;
        let mins = (self.remaining_seconds % 3600) / 60;
        let secs = self.remaining_seconds % 60;
        format!("{:02}:{:02}:{:02}", hrs, mins, secs)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Serializable point-in-time view of a countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub display: String,
}

impl CountdownSnapshot {
    /// Capture the current state of a countdown
    pub fn of(countdown: &Countdown) -> Self {
        Self {
            phase: countdown.phase(),
            remaining_seconds: countdown.remaining_seconds(),
            display: countdown.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded_fields() {
        assert_eq!(Countdown::new(0).display(), "00:00:00");
        assert_eq!(Countdown::new(5).display(), "00:00:05");
        assert_eq!(Countdown::new(65).display(), "00:01:05");
        assert_eq!(Countdown::new(3600).display(), "01:00:00");
        assert_eq!(Countdown::new(3661).display(), "01:01:01");
    }

    #[test]
    fn hours_grow_past_two_digits() {
        assert_eq!(Countdown::new(359_999).display(), "99:59:59");
        assert_eq!(Countdown::new(360_000).display(), "100:00:00");
        assert_eq!(Countdown::new(3_600_000).display(), "1000:00:00");
    }

    #[test]
    fn tick_decrements_by_one() {
        let mut countdown = Countdown::new(125);
        assert_eq!(countdown.tick(), Phase::Counting);
        assert_eq!(countdown.display(), "00:02:04");
        assert_eq!(countdown.tick(), Phase::Counting);
        assert_eq!(countdown.display(), "00:02:03");
    }

    #[test]
    fn tick_never_goes_below_zero() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), Phase::Expired);
        assert_eq!(countdown.remaining_seconds(), 0);
        assert_eq!(countdown.display(), "00:00:00");
    }

    #[test]
    fn expired_ticks_are_idempotent() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), Phase::Expired);
        for _ in 0..10 {
            assert_eq!(countdown.tick(), Phase::Expired);
            assert_eq!(countdown.display(), "00:00:00");
        }
    }

    #[test]
    fn counts_125_seconds_down_to_zero() {
        let mut countdown = Countdown::new(125);
        countdown.tick();
        assert_eq!(countdown.display(), "00:02:04");
        for _ in 1..125 {
            countdown.tick();
        }
        assert_eq!(countdown.phase(), Phase::Expired);
        assert_eq!(countdown.display(), "00:00:00");
        // one tick past expiry renders the same frame
        countdown.tick();
        assert_eq!(countdown.display(), "00:00:00");
    }

    #[test]
    fn after_k_ticks_display_shows_n_minus_k() {
        let n = 7250;
        let mut countdown = Countdown::new(n);
        for k in 1..=n {
            countdown.tick();
            assert_eq!(countdown.display(), Countdown::new(n - k).display());
        }
    }

    #[test]
    fn snapshot_reflects_countdown() {
        let countdown = Countdown::new(90);
        let snapshot = CountdownSnapshot::of(&countdown);
        assert_eq!(snapshot.phase, Phase::Counting);
        assert_eq!(snapshot.remaining_seconds, 90);
        assert_eq!(snapshot.display, "00:01:30");
    }
}
