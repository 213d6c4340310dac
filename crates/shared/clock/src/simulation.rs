use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tradedesk_core::Timestamp;
use tradedesk_ports::Clock;

/// How simulated time passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeScale {
    /// Follows the wall clock from the reference point
    #[default]
    RealTime,
    /// Only moves through `advance` / `set_time`
    Fixed,
}

/// Controllable clock for tests and demos
///
/// Clones share state, so a test can hold one handle and advance the time
/// seen by every component holding another.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    inner: Arc<RwLock<ClockState>>,
}

#[derive(Debug)]
struct ClockState {
    /// Simulated time at the reference point
    simulated_time: Timestamp,
    /// Wall time when the reference point was taken
    wall_clock_reference: Timestamp,
    time_scale: TimeScale,
}

impl ClockState {
    fn current(&self) -> Timestamp {
        match self.time_scale {
            TimeScale::Fixed => self.simulated_time,
            TimeScale::RealTime => self.simulated_time + (Utc::now() - self.wall_clock_reference),
        }
    }
}

impl SimulationClock {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(RwLock::new(ClockState {
                simulated_time: now,
                wall_clock_reference: now,
                time_scale: TimeScale::RealTime,
            })),
        }
    }

    /// Frozen clock starting at a specific time
    pub fn at(time: Timestamp) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ClockState {
                simulated_time: time,
                wall_clock_reference: Utc::now(),
                time_scale: TimeScale::Fixed,
            })),
        }
    }

    /// Frozen clock starting now
    pub fn fixed() -> Self {
        Self::at(Utc::now())
    }

    pub fn time_scale(&self) -> TimeScale {
        self.inner.read().time_scale
    }

    pub fn set_time_scale(&self, scale: TimeScale) {
        let mut state = self.inner.write();
        state.simulated_time = state.current();
        state.wall_clock_reference = Utc::now();
        state.time_scale = scale;
    }

    pub fn advance(&self, duration: Duration) {
        let mut state = self.inner.write();
        state.simulated_time = state.current() + duration;
        state.wall_clock_reference = Utc::now();
    }

    pub fn set_time(&self, time: Timestamp) {
        let mut state = self.inner.write();
        state.simulated_time = time;
        state.wall_clock_reference = Utc::now();
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SimulationClock {
    fn now(&self) -> Timestamp {
        self.inner.read().current()
    }

    fn name(&self) -> &str {
        "SimulationClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_time_does_not_advance() {
        let clock = SimulationClock::fixed();
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(clock.now(), t1);
    }

    #[test]
    fn test_advance_time() {
        let clock = SimulationClock::fixed();
        let t1 = clock.now();
        clock.advance(Duration::milliseconds(2000));
        assert_eq!(clock.now() - t1, Duration::milliseconds(2000));
    }

    #[test]
    fn test_set_time() {
        let clock = SimulationClock::fixed();
        let target = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap();
        clock.set_time(target);
        assert_eq!(clock.now(), target);
        assert_eq!(clock.now_millis(), target.timestamp_millis());
    }

    #[test]
    fn test_clone_shares_state() {
        let clock1 = SimulationClock::fixed();
        let clock2 = clock1.clone();
        clock1.advance(Duration::seconds(100));
        assert_eq!(clock1.now(), clock2.now());
    }

    #[test]
    fn test_switching_to_fixed_freezes_time() {
        let clock = SimulationClock::new();
        assert_eq!(clock.time_scale(), TimeScale::RealTime);
        clock.set_time_scale(TimeScale::Fixed);
        let frozen = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), frozen);
    }
}
