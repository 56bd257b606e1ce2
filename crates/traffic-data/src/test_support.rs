//! Fixtures shared by the unit tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock pinned to a fixed UTC instant.
pub(crate) struct FixtureClock {
    pub(crate) utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}
