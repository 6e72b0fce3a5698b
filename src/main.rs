use dotenvy::dotenv;
use tracing::info;

use tally::logging::{init_tracing, shutdown_tracer};
use tally::metrics::init_metrics;
use tally::router::init_router;
use tally::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;

    let metrics = init_metrics();
    let state = init_app_state(metrics).await?;
    let address = state.server_config.bind_address();
    let public_url = state.server_config.public_url.clone();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server listening");
    println!("🚀 Server running on {public_url}");
    println!("📚 Swagger UI available at {public_url}/api/docs/swagger-ui");
    println!("📖 Scalar UI available at {public_url}/api/docs/scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}
