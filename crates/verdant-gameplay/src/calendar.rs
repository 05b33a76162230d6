//! Server tick calendar.
//!
//! Simulation time is a monotonic tick counter. One in-game day is
//! [`TICKS_IN_DAY`] ticks.

use serde::{Deserialize, Serialize};

/// Ticks in one in-game day.
pub const TICKS_IN_DAY: i64 = 24_000;

/// Source of the current simulation tick.
pub trait Calendar {
    /// Returns the current tick.
    fn ticks(&self) -> i64;
}

/// Tick counter owned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerCalendar {
    /// Total elapsed ticks.
    ticks: i64,
}

impl ServerCalendar {
    /// Create a calendar at tick zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Create a calendar at a specific tick.
    #[must_use]
    pub const fn at(ticks: i64) -> Self {
        Self { ticks }
    }

    /// Advance by a number of ticks. Negative values are ignored.
    pub fn advance(&mut self, ticks: i64) {
        self.ticks = self.ticks.saturating_add(ticks.max(0));
    }

    /// Advance by whole days.
    pub fn advance_days(&mut self, days: i64) {
        self.advance(days.saturating_mul(TICKS_IN_DAY));
    }

    /// Get the number of complete days elapsed.
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.ticks.div_euclid(TICKS_IN_DAY)
    }
}

impl Calendar for ServerCalendar {
    fn ticks(&self) -> i64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_advance() {
        let mut calendar = ServerCalendar::new();
        calendar.advance_days(2);
        calendar.advance(5000);
        assert_eq!(calendar.days(), 2);
        assert_eq!(calendar.ticks(), 2 * TICKS_IN_DAY + 5000);
    }

    #[test]
    fn test_calendar_never_rewinds() {
        let mut calendar = ServerCalendar::at(100);
        calendar.advance(-50);
        assert_eq!(calendar.ticks(), 100);
    }
}
