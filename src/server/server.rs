use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tracing::info;

use crate::config::settings::SettingsConfig;
use crate::observability::metrics::{get_metrics, Metrics};
use crate::observability::routes::MetricsState;
use crate::rsvp::relay::RsvpRelay;
use crate::server::rsvp_route;

#[derive(Clone)]
pub struct AppState {
    pub metrics_state: MetricsState,
    pub relay: Arc<RsvpRelay>,
}

impl AppState {
    pub fn new(metrics: &Metrics, relay: RsvpRelay) -> Self {
        Self {
            metrics_state: MetricsState::new(metrics.registry.clone()),
            relay: Arc::new(relay),
        }
    }
}

/// Submission route plus the metrics route when enabled.
pub fn router(settings_config: &SettingsConfig, state: AppState) -> Router {
    Router::new()
        .route(&settings_config.server.rsvp_path, rsvp_route::method_router())
        .merge(state.metrics_state.router(&settings_config.metrics))
        .with_state(state)
}

pub async fn start(settings_config: &SettingsConfig, relay: RsvpRelay) -> Result<()> {
    let metrics = get_metrics().await;
    let state = AppState::new(metrics, relay);
    let app = router(settings_config, state);

    let bind_addr = format!(
        "{}:{}",
        settings_config.server.host, settings_config.server.port
    );
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!(
        "listening on {}, rsvp path {}",
        bind_addr, settings_config.server.rsvp_path
    );
    metrics.up.set(1);
    axum::serve(listener, app).await.context("http server failed")?;
    metrics.up.set(0);

    Ok(())
}
