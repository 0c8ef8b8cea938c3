//! Workshop backend HTTP server.

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workshop_server::config::DEFAULT_SESSION_SECRET;
use workshop_server::stores::RedisRepository;
use workshop_server::{AppState, Config, build_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading configuration; absence is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workshop_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting workshop backend server");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        namespace = %config.store.namespace,
        redis_url = %config.store.url,
        frontend_url = %config.cors.frontend_url,
        "Configuration loaded"
    );

    if config.auth.session_secret == DEFAULT_SESSION_SECRET {
        warn!("SESSION_SECRET not set; using the default development secret");
    }
    if config.auth.admin_password.is_none() {
        warn!("ADMIN_PASSWORD not set; admin login will fail until it is configured");
    }

    // Connect the document store
    info!("Connecting to document store...");
    let repo = RedisRepository::connect(&config.store.url, config.store.namespace.clone()).await?;
    info!("Document store connected");

    // Assemble the application
    let state = AppState::new(
        repo,
        config.auth.admin_password.clone(),
        &config.auth.session_secret,
    );
    let app = build_router(state, &config);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
