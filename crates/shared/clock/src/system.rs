use chrono::Utc;
use tradedesk_core::Timestamp;
use tradedesk_ports::Clock;

/// Wall clock used by the desk binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "system"
    }
}
