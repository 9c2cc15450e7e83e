//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server. It provides the foundation for the application's
//! backend infrastructure.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`config`** - Configuration loading from the environment
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading (port, database, weather)
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Pool construction, migration, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env` reads the environment once
//! 2. **Pool Construction**: a `SqlitePool` is opened against the configured URL
//! 3. **Migration**: the idempotent schema migration runs before the first request
//! 4. **State Creation**: `AppState` bundles the pool, HTTP client, and weather config
//! 5. **Router Creation**: all routes are configured against the state

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::Config;
pub use init::create_app;
pub use state::AppState;
