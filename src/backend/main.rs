/**
 * To-do Server Entry Point
 *
 * This is the main entry point for the to-do backend server.
 * It loads the configuration, opens the database and serves the JSON API
 * and the HTML pages from one Axum router.
 */


#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing, INFO by default
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = todoapp::shared::AppConfig::from_env()?;

    // Create the Axum app
    let app = todoapp::backend::server::init::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://127.0.0.1:{}", config.server_port);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin todo-server --features ssr");
    std::process::exit(1);
}
