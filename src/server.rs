mod handlers;
mod server_state;

use crate::{
    config::{Config, RawConfig},
    database::Database,
    scheduler::OverdueSweepJob,
    server::handlers::AmcMonitorOpenApi,
};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer, Result};
use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub use server_state::{SchedulerStatus, ServerState, Status};

pub async fn run(raw_config: RawConfig) -> Result<(), anyhow::Error> {
    let http_port = raw_config.port;
    let config = Config::from(raw_config);

    let database = Database::connect(&config.db).await?;
    let overdue_sweep = Arc::new(OverdueSweepJob::create(&config, database)?);
    if config.scheduler.enabled {
        overdue_sweep.start().await?;
    } else {
        warn!("Scheduler is disabled, overdue tasks will only be swept on demand.");
    }

    let state = web::Data::new(ServerState::new(overdue_sweep.clone()));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compat::new(TracingLogger::default()))
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .service(RapiDoc::with_openapi(
                "/api-docs/openapi.json",
                AmcMonitorOpenApi::openapi(),
            ))
            .service(handlers::status_get::status_get)
            .service(handlers::scheduler_overdue_sweep::scheduler_overdue_sweep)
            .wrap(Cors::permissive())
    });

    let http_server_url = format!("0.0.0.0:{}", http_port);
    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {http_server_url}."))?;

    info!("AMC Monitor API server is available at http://{http_server_url}");

    let result = http_server
        .run()
        .await
        .context("Failed to run AMC Monitor API server.");

    // The server exits on SIGINT/SIGTERM, the in-flight cycle (if any) is allowed to finish.
    if let Err(err) = overdue_sweep.stop().await {
        error!("Failed to stop overdue sweep job: {err:?}");
    }
    overdue_sweep.wait_for_in_flight_cycle().await;

    result
}
