use std::sync::Arc;

use mendel::server::{
    config::Config,
    error::AppError,
    lifecycle::{self, Server, Shutdown},
    router, startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    startup::init_tracing(&config);
    tracing::info!(
        "Starting {} ({})",
        config.app.name,
        config.app.environment
    );

    let db = startup::connect_to_database(&config).await?;

    let server = Server::bind(&config.server.addr(), config.server.shutdown_timeout).await?;
    let router = router::router(db.clone(), config.clone());

    let shutdown = Shutdown::new();
    tokio::spawn(lifecycle::watch_signals(shutdown.clone()));

    let outcome = server.run(router, shutdown).await?;
    tracing::info!("Shutdown {}", outcome);

    if let Err(e) = db.close().await {
        tracing::error!("Failed to close database pool: {}", e);
    }

    Ok(())
}
