use crate::database::Database;
use time::OffsetDateTime;

/// Source of the current time for the tasks maintenance.
pub trait Clock: Send + Sync {
    /// Returns current UTC time.
    fn now(&self) -> anyhow::Result<OffsetDateTime>;
}

/// Wall clock, truncated to the database precision.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> anyhow::Result<OffsetDateTime> {
        Database::utc_now()
    }
}
