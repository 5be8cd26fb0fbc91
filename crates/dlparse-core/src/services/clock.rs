//! Clock implementations: local wall clock and a fixed value for tests.

use chrono::{Local, NaiveDateTime};

use super::Clock;

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn seconds_until_midnight(&self) -> u64 {
        seconds_until_midnight_from(Local::now().naive_local())
    }
}

/// Seconds from `now` to the next 00:00:00, rounded up (a full day at
/// exactly midnight).
pub(crate) fn seconds_until_midnight_from(now: NaiveDateTime) -> u64 {
    let next = now.date().succ_opt().and_then(|d| d.and_hms_opt(0, 0, 0));
    match next {
        Some(midnight) => {
            let millis = (midnight - now).num_milliseconds().max(0) as u64;
            millis.div_ceil(1000)
        }
        None => 0,
    }
}

/// Clock that always reports the same remaining time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn seconds_until_midnight(&self) -> u64 {
        self.0
    }
}
