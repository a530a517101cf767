use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock in UTC. Used for `published_at` defaults, store timestamps
/// and slug fallback suffixes.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
