pub mod scheduler_overdue_sweep;
pub mod status_get;

use crate::{
    scheduler::{OverdueSweepState, SweepFailure, SweepReport},
    server::{SchedulerStatus, Status},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "AMC Monitor"),
    paths(
        status_get::status_get,
        scheduler_overdue_sweep::scheduler_overdue_sweep
    ),
    components(schemas(
        OverdueSweepState,
        SchedulerStatus,
        Status,
        SweepFailure,
        SweepReport
    ))
)]
pub(super) struct AmcMonitorOpenApi;
