mod database_config;
mod raw_config;
mod scheduler_jobs_config;
mod tasks_config;

pub use self::{
    database_config::DatabaseConfig, raw_config::RawConfig,
    scheduler_jobs_config::SchedulerJobsConfig, tasks_config::TasksConfig,
};

/// Main server config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Configuration for the scheduler jobs.
    pub scheduler: SchedulerJobsConfig,
    /// Configuration for the tasks maintenance.
    pub tasks: TasksConfig,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            db: raw_config.db,
            scheduler: raw_config.scheduler,
            tasks: raw_config.tasks,
        }
    }
}
