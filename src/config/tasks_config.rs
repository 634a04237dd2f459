use serde::{Deserialize, Serialize};

/// Configuration for the tasks maintenance.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TasksConfig {
    /// The maximum number of tasks the overdue sweep updates concurrently.
    pub overdue_sweep_concurrency: usize,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            overdue_sweep_concurrency: 10,
        }
    }
}
