use serde::Serialize;
use utoipa::ToSchema;

/// State of the overdue sweep job.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum OverdueSweepState {
    /// The job isn't scheduled, only manual sweeps can be run.
    Stopped,
    /// The job is scheduled and waits for the next tick.
    Idle,
    /// The job is scheduled and a sweep cycle is in progress.
    Running,
}
