// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::graphql_client::GraphQlClient;
use crate::infrastructure::graphql_repository::GraphQlRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // One GraphQL client for the whole process
    let client = Arc::new(GraphQlClient::new(
        config.graphql.endpoint.clone(),
        Duration::from_secs(config.graphql.timeout_secs),
    )?);
    tracing::info!("Using GraphQL endpoint {}", client.endpoint());

    // Create repository (infrastructure layer)
    let repository = Arc::new(GraphQlRepository::new(client));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository, config.palette.clone());

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting medical-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
