#![deny(warnings)]

mod config;
mod database;
mod error;
mod scheduler;
mod server;
mod tasks;

use crate::{config::RawConfig, database::Database, scheduler::OverdueSweepJob};
use anyhow::anyhow;
use clap::{crate_authors, crate_description, crate_version, value_parser, Arg, Command};
use std::env;
use tracing::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().flatten_event(true).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let matches = Command::new("AMC Monitor maintenance server.")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG")
                .env("AMC_MONITOR_CONFIG")
                .short('c')
                .long("config")
                .global(true)
                .default_value("amc-monitor.toml")
                .help("Path to the AMC Monitor configuration file."),
        )
        .arg(
            Arg::new("PORT")
                .env("AMC_MONITOR_PORT")
                .short('p')
                .long("port")
                .value_parser(value_parser!(u16))
                .help("Defines a TCP port to listen on."),
        )
        .subcommand(
            Command::new("sweep").about("Marks overdue tasks once and exits, ignoring the schedule."),
        )
        .subcommand(Command::new("seed").about("Inserts a set of demo tasks."))
        .get_matches();

    let mut raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    // CLI argument takes precedence.
    if let Some(port) = matches.get_one::<u16>("PORT") {
        raw_config.port = *port;
    }

    info!(config = ?raw_config, "AMC Monitor raw configuration.");

    match matches.subcommand_name() {
        Some("sweep") => {
            let config = config::Config::from(raw_config);
            let database = Database::connect(&config.db).await?;
            let report = OverdueSweepJob::create(&config, database)?.run_once().await?;
            info!(
                candidates = report.candidates,
                transitioned = report.transitioned.len(),
                unchanged = report.unchanged.len(),
                failed = report.failed.len(),
                "Overdue tasks sweep completed."
            );
            Ok(())
        }
        Some("seed") => {
            let database = Database::connect(&raw_config.db).await?;
            let tasks = tasks::demo_tasks(Database::utc_now()?, Uuid::now_v7());
            for task in &tasks {
                database.insert_task(task).await?;
            }
            info!("Inserted {} demo tasks.", tasks.len());
            Ok(())
        }
        _ => server::run(raw_config).await,
    }
}
