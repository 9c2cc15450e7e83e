/**
 * Taskboard Server Entry Point
 *
 * This is the main entry point for the Taskboard backend server.
 * It loads configuration from the environment, initializes the Axum
 * HTTP server, and binds the listening socket.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = taskboard::server::config::Config::from_env();

    // Create the Axum app. A store that is unreachable at startup is fatal.
    let app = taskboard::server::init::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
