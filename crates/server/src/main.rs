mod app;
mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

#[cfg(test)]
mod test_support;

use crate::{app::app, config::Config, error::StartupError, state::AppState};
use database::{db::create_connection, services::seed::seed_if_empty};
use log::info;
use migration::{Migrator, MigratorTrait};
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let db = create_connection(
        &config.database_url,
        &config.database_schema,
        config.max_connections,
    )
    .await?;

    Migrator::up(&db, None).await?;
    info!("Database migrations applied");

    if config.seed_sample_data && !seed_if_empty(&db).await? {
        info!("Catalog already has rooms, skipping sample data");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app(AppState::new(db)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
