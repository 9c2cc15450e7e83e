/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * opening the database pool, running the schema migration, and assembling
 * the router with its state.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool against the configured URL
 * 2. Run the embedded migrations (idempotent "create if absent")
 * 3. Build the shared outbound HTTP client with a bounded timeout
 * 4. Create the application state and router
 *
 * # Error Handling
 *
 * A store that cannot be reached or migrated at startup is fatal: the
 * error is returned to `main` and the process exits. Request-time store
 * failures are handled separately by the error module (503).
 */

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use crate::routes::router::create_router;
use crate::server::config::{Config, MIGRATOR, WEATHER_TIMEOUT};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Configuration loaded from the environment
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the migration
/// fails, or the outbound HTTP client cannot be built.
pub async fn create_app(config: &Config) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database at {}", config.database_url);
    let db_pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations");
    MIGRATOR.run(&db_pool).await?;

    let http_client = reqwest::Client::builder()
        .timeout(WEATHER_TIMEOUT)
        .build()?;

    if config.weather.api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY not set; the /weather endpoint will reject requests");
    }

    let app_state = AppState {
        db_pool,
        http_client,
        weather: config.weather.clone(),
    };

    tracing::info!("Router configured");

    Ok(create_router(app_state))
}
