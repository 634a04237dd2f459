use crate::server::SchedulerStatus;
use serde::Serialize;
use utoipa::ToSchema;

/// Server status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Status {
    /// Version of the server.
    pub version: String,
    /// Status of the scheduler jobs.
    pub scheduler: SchedulerStatus,
}
