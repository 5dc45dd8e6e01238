//! Telemetry module
//!
//! Structured logging and metrics for the analysis pipeline. Per-run context
//! travels in `tracing` spans rather than any process-wide state.

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{count_style_strategy, record_latency, FetchLatency};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;

    if let Some(ref endpoint) = config.otlp_endpoint {
        tracing::info!(endpoint = %endpoint, "OTLP endpoint configured; trace export not wired");
    }

    // TODO: Serve a metrics exporter on config.metrics_port

    Ok(TelemetryGuard { _priv: () })
}
