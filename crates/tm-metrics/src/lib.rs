use std::env;
use std::sync::OnceLock;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};

static INSTALLED: OnceLock<u16> = OnceLock::new();

/// Install a Prometheus exporter on `0.0.0.0:<port>` if the named env var is
/// set (e.g. `TM_METRICS_PORT=9100`). No-op when unset; idempotent across
/// calls. Must run inside a Tokio runtime; the exporter serves scrapes from
/// a background task.
pub fn init_metrics(port_env: &str) -> Option<u16> {
    let port = env::var(port_env).ok().and_then(|raw| raw.parse::<u16>().ok())?;

    if let Some(existing) = INSTALLED.get() {
        return Some(*existing);
    }

    match PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
    {
        Ok(()) => {
            let _ = INSTALLED.set(port);
            info!(metrics_port = port, "started prometheus exporter");
            Some(port)
        }
        Err(err) => {
            warn!(error = %err, metrics_port = port, "failed to start prometheus exporter");
            None
        }
    }
}
