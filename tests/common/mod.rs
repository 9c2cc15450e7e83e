//! Shared test fixtures
//!
//! Provides helpers for spinning up the full application against a
//! throwaway SQLite database, optionally with a weather configuration
//! pointing at a mock provider.

pub mod database;

use axum_test::TestServer;
use taskboard::routes::create_router;
use taskboard::server::config::{WeatherConfig, WEATHER_TIMEOUT};
use taskboard::server::state::AppState;

use database::TestDatabase;

/// A running application instance backed by a throwaway database
pub struct TestApp {
    /// Test server wrapping the real router
    pub server: TestServer,
    /// Keeps the database (and its temp directory) alive for the test
    _db: TestDatabase,
}

/// Spawn the application with the weather endpoint unconfigured
#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_app_with_weather(WeatherConfig {
        api_key: None,
        base_url: "http://127.0.0.1:0".to_string(),
    })
    .await
}

/// Spawn the application with an explicit weather configuration
#[allow(dead_code)]
pub async fn spawn_app_with_weather(weather: WeatherConfig) -> TestApp {
    let db = TestDatabase::new().await;

    let http_client = reqwest::Client::builder()
        .timeout(WEATHER_TIMEOUT)
        .build()
        .expect("failed to build http client");

    let state = AppState {
        db_pool: db.pool().clone(),
        http_client,
        weather,
    };

    let server = TestServer::new(create_router(state)).expect("failed to start test server");

    TestApp { server, _db: db }
}
