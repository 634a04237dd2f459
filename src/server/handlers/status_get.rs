use crate::{error::Error as AmcMonitorError, server::ServerState};
use actix_web::{get, web, HttpResponse};
use tracing::error;

/// Gets server status.
#[utoipa::path(
    tags = ["platform"],
    responses(
        (status = 200, body = crate::server::Status)
    )
)]
#[get("/api/status")]
pub async fn status_get(state: web::Data<ServerState>) -> Result<HttpResponse, AmcMonitorError> {
    match state.status().await {
        Ok(status) => Ok(HttpResponse::Ok().json(status)),
        Err(err) => {
            error!("Failed to retrieve server status: {err:?}");
            Err(err.into())
        }
    }
}
