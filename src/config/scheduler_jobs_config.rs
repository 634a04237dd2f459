use serde::{Deserialize, Serialize};

/// Configuration for the scheduler jobs.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SchedulerJobsConfig {
    /// Indicates whether the jobs should be scheduled at startup.
    pub enabled: bool,
    /// The cron schedule (with seconds) of the overdue tasks sweep, evaluated in UTC.
    pub overdue_sweep: String,
}

impl Default for SchedulerJobsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // Every day at midnight (UTC).
            overdue_sweep: "0 0 0 * * *".to_string(),
        }
    }
}
