use crate::config::{DatabaseConfig, SchedulerJobsConfig, TasksConfig};
use figment::{providers, providers::Format, Figment};
use serde::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Configuration for the scheduler jobs.
    pub scheduler: SchedulerJobsConfig,
    /// Configuration for the tasks maintenance.
    pub tasks: TasksConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(
            Figment::from(providers::Serialized::defaults(Self::default()))
                .merge(providers::Toml::file(path))
                .merge(providers::Env::prefixed("AMC_MONITOR_").split("__"))
                .extract()?,
        )
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            db: Default::default(),
            scheduler: Default::default(),
            tasks: Default::default(),
        }
    }
}
