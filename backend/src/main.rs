use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inspection_backend::{config::Config, db::connection::create_pool, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inspection_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database = %config.database.display_target(),
        time_zone = %config.time_zone,
        site = %config.scope.site,
        cors_allow_origins = ?config.cors_allow_origins,
        "Loaded configuration from environment/.env"
    );

    let pool = create_pool(&config).await?;
    let addr = config.bind_addr()?;
    let app = routes::app(AppState::new(pool, config));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
