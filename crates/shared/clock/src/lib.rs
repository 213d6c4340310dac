//! Tradedesk Clocks
//!
//! Implementations of the [`Clock`] port:
//!
//! - [`SystemClock`]: wall-clock time for production
//! - [`SimulationClock`]: real-time or frozen time that tests move by hand
//!
//! ## Usage
//!
//! ```ignore
//! use tradedesk_clock::{Clock, SimulationClock};
//! use chrono::Duration;
//!
//! let clock = SimulationClock::fixed();
//! let t0 = clock.now();
//! clock.advance(Duration::seconds(2));
//! assert_eq!(clock.now() - t0, Duration::seconds(2));
//! ```

mod simulation;
mod system;

pub use simulation::{SimulationClock, TimeScale};
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tradedesk_ports::Clock;
