mod backend;
mod config;
mod inflight;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let backend = backend::SupabaseClient::new(&config.backend).expect("backend client init failed");
    tracing::info!(url = %config.backend.url, "backend client initialized");

    let state = state::AppState::new(Arc::new(backend), config.page);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "asistencia listening");
    axum::serve(listener, app).await.expect("server failed");
}
