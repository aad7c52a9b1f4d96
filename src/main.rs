mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Database connected, migrations applied");

    let state = AppState::new(db, &config);
    let app = router::router()
        .with_state(state)
        .layer(startup::cors_layer())
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {e}")))?;

    Ok(())
}
