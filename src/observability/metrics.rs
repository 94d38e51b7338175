use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry};
use tracing::info;
use std::sync::Arc;
use tokio::sync::OnceCell;


// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE.get_or_init(|| async {
        info!("Initializing Metrics ...");
        Metrics::new()}
    ).await
}


#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token minting
    pub token_mint_requests: IntCounter,
    pub token_mint_failures: IntCounterVec,
    pub token_mint_duration: Histogram,

    // Relay
    pub rsvp_submissions: IntCounterVec,
    pub sheets_append_failures: IntCounter,

    // Config/runtime
    pub config_validation_errors: IntCounter,
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("rsvprelay".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // Token minting
            token_mint_requests: IntCounter::new("token_mint_requests_total", "Total access token mint attempts").unwrap(),
            token_mint_failures: IntCounterVec::new(Opts::new("token_mint_failures_total", "Mint failures by reason"),&["reason"],).unwrap(),
            token_mint_duration: Histogram::with_opts(HistogramOpts::new("token_mint_duration_seconds", "Sign + exchange duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0])).unwrap(),

            // Relay
            rsvp_submissions: IntCounterVec::new(Opts::new("rsvp_submissions_total", "Submissions by outcome"),&["outcome"],).unwrap(),
            sheets_append_failures: IntCounter::new("sheets_append_failures_total", "Failed spreadsheet appends").unwrap(),

            // Config/runtime
            config_validation_errors: IntCounter::new("config_validation_errors_total","Validation errors during startup",).unwrap(),
            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_mint_requests.clone())).unwrap();
        reg.register(Box::new(metrics.token_mint_failures.clone())).unwrap();
        reg.register(Box::new(metrics.token_mint_duration.clone())).unwrap();
        reg.register(Box::new(metrics.rsvp_submissions.clone())).unwrap();
        reg.register(Box::new(metrics.sheets_append_failures.clone())).unwrap();
        reg.register(Box::new(metrics.config_validation_errors.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
