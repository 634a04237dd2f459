use crate::{error::Error as AmcMonitorError, server::ServerState};
use actix_web::{post, web, HttpResponse};
use tracing::error;

/// Runs overdue tasks sweep right away, regardless of the schedule.
#[utoipa::path(
    tags = ["scheduler"],
    responses(
        (status = 200, description = "Sweep cycle completed.", body = crate::scheduler::SweepReport)
    )
)]
#[post("/api/scheduler/overdue_sweep")]
pub async fn scheduler_overdue_sweep(
    state: web::Data<ServerState>,
) -> Result<HttpResponse, AmcMonitorError> {
    match state.overdue_sweep.run_once().await {
        Ok(report) => Ok(HttpResponse::Ok().json(report)),
        Err(err) => {
            error!("Failed to sweep overdue tasks: {err:?}");
            Err(err.into())
        }
    }
}
