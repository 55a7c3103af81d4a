//! # tvbridged — tvbridge daemon
//!
//! Composition root that wires the device registry, services, and HTTP
//! adapter together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`tvbridge.toml` + environment overrides)
//! - Initialise `tracing` with the configured filter
//! - Build one device-control client per configured TV and the registry
//! - Construct the TV service, injecting the registry
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve until SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tvbridge_adapter_http_axum::state::AppState;
use tvbridge_adapter_virtual_tv::VirtualTv;
use tvbridge_app::registry::TvRegistry;
use tvbridge_app::services::tv_service::TvService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Registry — one client per configured TV, built once.
    //
    // The virtual client stands in for a vendor protocol client; swap the
    // constructor here to drive real devices through the same `TvControl`
    // port.
    let registry = TvRegistry::new(
        config
            .tvs
            .iter()
            .map(|tv| (tv.clone(), VirtualTv::new(tv))),
    );
    let tv_service = TvService::new(registry);

    // HTTP
    let state = AppState::new(tv_service);
    let app = tvbridge_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, tvs = config.tvs.len(), "tvbridged listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when SIGTERM or SIGINT arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("ctrl-c handler should install");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("signal handler should install")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
