//! Applies pending schema migrations and exits.

use migration::{Migrator, MigratorTrait};
use mendel::server::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    let pending = Migrator::get_pending_migrations(&db).await?;
    tracing::info!("Applying {} pending migration(s)", pending.len());

    Migrator::up(&db, None).await?;

    tracing::info!("Database schema is up to date");

    Ok(())
}
