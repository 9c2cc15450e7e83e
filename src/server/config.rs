/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables, with sensible defaults for local development.
 *
 * # Configuration Sources
 *
 * - `SERVER_PORT` - listening port (default 5000)
 * - `DATABASE_URL` - SQLite database location, relative to the working
 *   directory by default
 * - `WEATHER_API_KEY` - API key for the weather provider; the weather
 *   endpoint rejects requests when this is unset
 * - `WEATHER_API_URL` - weather provider endpoint, overridable so tests
 *   can point it at a local mock server
 *
 * Configuration is read exactly once at startup; handlers receive it
 * through the application state rather than reading the environment.
 */

use std::env;
use std::time::Duration;

use sqlx::migrate::Migrator;

/// Schema migrations, embedded from the `migrations/` directory.
///
/// Running the migrator is idempotent: already-applied migrations are
/// skipped, so startup against an existing database is a no-op.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Default database location, relative to the process working directory.
/// `mode=rwc` creates the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3?mode=rwc";

/// Default weather provider endpoint (OpenWeatherMap current weather)
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Upper bound on a single outbound weather call
pub const WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port for the HTTP server
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Weather proxy settings
    pub weather: WeatherConfig,
}

/// Weather proxy configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Provider API key; `None` when `WEATHER_API_KEY` is unset or blank
    pub api_key: Option<String>,
    /// Provider endpoint the proxy forwards to
    pub base_url: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Missing or unparsable values fall back to the defaults above; a
    /// blank `WEATHER_API_KEY` is treated as unset.
    pub fn from_env() -> Self {
        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let api_key = env::var("WEATHER_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string());

        Self {
            port,
            database_url,
            weather: WeatherConfig { api_key, base_url },
        }
    }
}
