mod scheduler_status;
mod status;

pub use self::{scheduler_status::SchedulerStatus, status::Status};
use crate::scheduler::OverdueSweepJob;
use std::sync::Arc;

pub struct ServerState {
    pub overdue_sweep: Arc<OverdueSweepJob>,
    /// Version of the API server.
    version: String,
}

impl ServerState {
    pub fn new(overdue_sweep: Arc<OverdueSweepJob>) -> Self {
        Self {
            overdue_sweep,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Gets the status of the server.
    pub async fn status(&self) -> anyhow::Result<Status> {
        Ok(Status {
            version: self.version.clone(),
            scheduler: SchedulerStatus {
                overdue_sweep: self.overdue_sweep.state().await,
                time_till_next_sweep: self.overdue_sweep.time_till_next_tick().await?,
            },
        })
    }
}
