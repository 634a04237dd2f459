use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool, Pool, Postgres};
use time::OffsetDateTime;
use tracing::info;

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: Pool<Postgres>,
}

/// Common methods for the primary database, extensions are implemented separately in every module.
impl Database {
    /// Connects to the database described by the config and applies pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&Self::connection_url(config))
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to database `{}` at {}:{}.",
                    config.name, config.host, config.port
                )
            })?;

        info!(
            db.name = config.name,
            db.host = config.host,
            "Connected to the database."
        );

        Self::create(pool).await
    }

    /// Opens database "connection".
    pub async fn create(pool: PgPool) -> anyhow::Result<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| "Failed to migrate database")?;

        Ok(Database { pool })
    }

    /// Builds Postgres connection URL from the database config.
    pub fn connection_url(config: &DatabaseConfig) -> String {
        format!(
            "postgres://{}{}@{}:{}/{}",
            urlencoding::encode(&config.username),
            config
                .password
                .as_ref()
                .map(|password| format!(":{}", urlencoding::encode(password)))
                .unwrap_or_default(),
            config.host,
            config.port,
            urlencoding::encode(&config.name)
        )
    }

    /// Returns current UTC time, truncated to microseconds to match the database precision.
    pub fn utc_now() -> anyhow::Result<OffsetDateTime> {
        let now = OffsetDateTime::now_utc();
        Ok(now.replace_nanosecond(now.microsecond() * 1000)?)
    }
}
