use agora_tenant::{TenantConfig, tenant};
use anyhow::{Context, Result};
use dotenv::dotenv;
use std::{env, net::SocketAddr};
use tenant_server::{routes::router, state::AppState};
use tokio::net::TcpListener;
use tracing::info;
use utils::{
    errors::{SERVER_ADDR_INVALID, SERVER_BIND_FAILED, SERVER_FAILED, TENANT_LOAD_FAILED},
    tracing::run_with_tracing,
};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    run_with_tracing(serve).await
}

async fn serve() -> Result<()> {
    info!("Tenant server starting up");

    let config = TenantConfig::from_env().context(TENANT_LOAD_FAILED)?;
    let tenant = tenant::load_from(&config);

    let state = AppState::new(tenant, config.dev_preview)?;

    let addr: SocketAddr = env::var("TENANT_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context(SERVER_ADDR_INVALID)?;
    let listener = TcpListener::bind(addr).await.context(SERVER_BIND_FAILED)?;
    info!(address = %addr, "Starting tenant server");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(SERVER_FAILED)?;

    info!("Application shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl+C, shutting down gracefully");
    }
}
