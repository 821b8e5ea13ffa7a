use dotenvy::dotenv;
use interntrack::interntrack_config::ServerConfig;
use interntrack::logging::init_tracing;
use interntrack::router::init_router;
use interntrack::state::init_app_state;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state()?;
    if state.jwt_config.uses_default_secret() {
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }
    info!(mode = ?state.cors_config.mode, "CORS configured");

    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
