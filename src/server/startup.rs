use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Upper bound on the connectivity check performed right after connecting.
const STARTUP_PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured `APP_LOG_LEVEL` applies.
///
/// # Arguments
/// - `config` - Application configuration containing the log level
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Connects the shared database pool and verifies it is reachable.
///
/// Pool size and connection lifetime come from configuration. The pool is created once
/// here and cloned into every repository; it is never recreated. Migrations are not
/// applied; run the `db-migrate` binary for that.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected and answering pings
/// - `Err(AppError::DbErr)` - Failed to connect or the ping failed
/// - `Err(AppError::InternalError)` - The ping did not answer within 5 seconds
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database.url);
    opt.max_connections(config.database.max_open_conns)
        .min_connections(config.database.max_idle_conns.min(config.database.max_open_conns))
        .max_lifetime(config.database.conn_max_lifetime)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    tokio::time::timeout(STARTUP_PING_TIMEOUT, db.ping())
        .await
        .map_err(|_| AppError::InternalError("database ping timed out".to_string()))??;

    tracing::info!("Connected to database");

    Ok(db)
}
