//! Pipeline metrics
//!
//! Recorded through the `metrics` facade; an embedding service installs
//! whatever recorder/exporter it wants.

use std::time::Duration;

/// External fetch latency metrics
#[derive(Debug, Clone, Copy)]
pub enum FetchLatency {
    /// Listing price fetch
    ListingPrice,
    /// Listing spec sheet fetch
    ListingSpecs,
    /// Listing description fetch
    ListingDescription,
    /// VIN decode call
    VinDecode,
    /// Style catalog fetch
    StyleCatalog,
    /// Price band fetch
    PriceRange,
}

impl FetchLatency {
    fn name(&self) -> &'static str {
        match self {
            FetchLatency::ListingPrice => "flipscout_listing_price_latency_ms",
            FetchLatency::ListingSpecs => "flipscout_listing_specs_latency_ms",
            FetchLatency::ListingDescription => "flipscout_listing_description_latency_ms",
            FetchLatency::VinDecode => "flipscout_vin_decode_latency_ms",
            FetchLatency::StyleCatalog => "flipscout_style_catalog_latency_ms",
            FetchLatency::PriceRange => "flipscout_price_range_latency_ms",
        }
    }
}

/// Record a fetch latency measurement
pub fn record_latency(metric: FetchLatency, duration: Duration) {
    metrics::histogram!(metric.name()).record(duration.as_millis() as f64);

    tracing::debug!(
        metric = metric.name(),
        value_ms = duration.as_millis(),
        "Recording latency"
    );
}

/// Count which style-resolution strategy produced the answer
pub fn count_style_strategy(strategy: &'static str) {
    metrics::counter!("flipscout_style_strategy_total", "strategy" => strategy).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_are_prefixed() {
        let all = [
            FetchLatency::ListingPrice,
            FetchLatency::ListingSpecs,
            FetchLatency::ListingDescription,
            FetchLatency::VinDecode,
            FetchLatency::StyleCatalog,
            FetchLatency::PriceRange,
        ];
        for metric in all {
            assert!(metric.name().starts_with("flipscout_"));
            assert!(metric.name().ends_with("_latency_ms"));
        }
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        // No recorder installed in tests; calls must not panic
        record_latency(FetchLatency::VinDecode, Duration::from_millis(5));
        count_style_strategy("median_fallback");
    }
}
