//! Analysis orchestrator
//!
//! Runs one listing through the full pipeline: overlap the three listing
//! fetches, decode the VIN as soon as the spec sheet lands, resolve the
//! identity, then price both sides of the flip. Each `analyze` call owns its
//! tasks and shares nothing with concurrent runs; callers may analyze many
//! listings in parallel with no extra locking. A hung fetch hangs the run;
//! timeouts belong to the caller.

use crate::catalog::ModelCatalog;
use crate::compare::{compare, ValuationResult};
use crate::config::AnalysisConfig;
use crate::decoder::IdentityDecoder;
use crate::listing::{ListingProvider, ListingSpecs};
use crate::resolve::{resolve_model, resolve_style, ResolvedVehicle, StyleInput, StyleStrategy};
use crate::telemetry::{count_style_strategy, record_latency, FetchLatency};
use crate::text::{slug, title_case};
use crate::valuation::{RangeRequest, SaleChannel, ValuationSource};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Terminal artifact of one analysis run
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Run identifier, also tagged on every log line of the run
    pub run_id: Uuid,
    /// Canonical vehicle identity
    pub vehicle: ResolvedVehicle,
    /// Which strategy picked the style
    pub style_strategy: StyleStrategy,
    /// Seller's free-text description
    pub description: String,
    /// Price bands and profit deltas
    pub valuation: ValuationResult,
    /// When the run finished
    pub generated_at: DateTime<Utc>,
}

/// Orchestrates one analysis run across the three providers
pub struct Analyzer<L, D, V> {
    listing: Arc<L>,
    decoder: Arc<D>,
    valuation: Arc<V>,
    catalog: Arc<ModelCatalog>,
    settings: AnalysisConfig,
}

impl<L, D, V> Analyzer<L, D, V>
where
    L: ListingProvider + 'static,
    D: IdentityDecoder + 'static,
    V: ValuationSource + 'static,
{
    /// Create a new analyzer
    pub fn new(
        listing: L,
        decoder: D,
        valuation: V,
        catalog: ModelCatalog,
        settings: AnalysisConfig,
    ) -> Self {
        Self {
            listing: Arc::new(listing),
            decoder: Arc::new(decoder),
            valuation: Arc::new(valuation),
            catalog: Arc::new(catalog),
            settings,
        }
    }

    /// Analyze a listing URL end to end.
    ///
    /// Fetch failures propagate to the caller; partial results are
    /// discarded, never returned.
    pub async fn analyze(&self, url: &str) -> anyhow::Result<Analysis> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("analyze", run = %run_id);
        self.analyze_inner(url, run_id).instrument(span).await
    }

    async fn analyze_inner(&self, url: &str, run_id: Uuid) -> anyhow::Result<Analysis> {
        tracing::info!(url = %url, "Fetching listing data");

        // The three listing fetches are independent; start them together.
        let price_task = {
            let listing = Arc::clone(&self.listing);
            let url = url.to_string();
            tokio::spawn(async move {
                let started = Instant::now();
                let price = listing.fetch_price(&url).await;
                record_latency(FetchLatency::ListingPrice, started.elapsed());
                price
            })
        };
        let specs_task = {
            let listing = Arc::clone(&self.listing);
            let url = url.to_string();
            tokio::spawn(async move {
                let started = Instant::now();
                let specs = listing.fetch_specs(&url).await;
                record_latency(FetchLatency::ListingSpecs, started.elapsed());
                specs
            })
        };
        let description_task = {
            let listing = Arc::clone(&self.listing);
            let url = url.to_string();
            tokio::spawn(async move {
                let started = Instant::now();
                let description = listing.fetch_description(&url).await;
                record_latency(FetchLatency::ListingDescription, started.elapsed());
                description
            })
        };

        // The decode needs the spec sheet's VIN and year; start it the
        // moment specs resolve, while price and description still run.
        let specs = specs_task.await??;
        tracing::debug!(vin = %specs.vin, year = %specs.year, "Listing spec sheet");

        let decode_task = {
            let decoder = Arc::clone(&self.decoder);
            let vin = slug(&specs.vin);
            let year = slug(&specs.year);
            tokio::spawn(async move {
                let started = Instant::now();
                let decoded = decoder.decode(&vin, &year).await;
                record_latency(FetchLatency::VinDecode, started.elapsed());
                decoded
            })
        };

        let decoded = decode_task.await??;
        let make = title_case(&decoded.make);
        tracing::info!(make = %make, model = %decoded.model, body = %decoded.body_class, "Decoded VIN");

        let known_models = self.catalog.models_for_make(&decoded.make);
        let model = resolve_model(&make, &decoded.model, specs.trim.as_deref(), known_models)?;

        let body_type = Some(slug(&decoded.body_class)).filter(|b| !b.is_empty());
        let styles = {
            let started = Instant::now();
            let styles = self
                .valuation
                .styles_for(
                    &slug(&make),
                    &slug(&model),
                    &slug(&specs.year),
                    body_type.as_deref(),
                )
                .await;
            record_latency(FetchLatency::StyleCatalog, started.elapsed());
            styles?
        };

        // The description is only needed from here on; joining it late keeps
        // it overlapped with the decode and catalog work above.
        let description = description_task.await??;

        let choice = resolve_style(&StyleInput {
            catalog: &styles,
            trim: specs.trim.as_deref(),
            description: &description,
        })
        .ok_or_else(|| anyhow::anyhow!("valuation provider returned an empty style catalog"))?;

        count_style_strategy(choice.strategy.label());
        tracing::info!(style = %choice.style, strategy = choice.strategy.label(), "Resolved style");

        let mileage = self.effective_mileage(&specs);
        let listing_price = price_task.await??;

        let trade_in = self
            .price_band(&make, &model, &choice.style, &specs.year, mileage, SaleChannel::TradeIn)
            .await?;
        let private_party = self
            .price_band(&make, &model, &choice.style, &specs.year, mileage, SaleChannel::PrivateParty)
            .await?;

        let deltas = compare(&trade_in, &private_party, listing_price);

        let vehicle = ResolvedVehicle {
            make,
            model,
            style: choice.style,
            year: specs.year,
            mileage,
            condition: self.settings.trade_in_condition,
        };

        tracing::info!(
            vehicle = %vehicle.summary(),
            listing_price = %listing_price,
            average_profit = %deltas.average,
            "Analysis complete"
        );

        Ok(Analysis {
            run_id,
            vehicle,
            style_strategy: choice.strategy,
            description,
            valuation: ValuationResult {
                trade_in,
                private_party,
                listing_price,
                deltas,
            },
            generated_at: Utc::now(),
        })
    }

    async fn price_band(
        &self,
        make: &str,
        model: &str,
        style: &str,
        year: &str,
        mileage: i64,
        channel: SaleChannel,
    ) -> anyhow::Result<crate::valuation::PriceBand> {
        let condition = match channel {
            SaleChannel::TradeIn => self.settings.trade_in_condition,
            SaleChannel::PrivateParty => self.settings.private_party_condition,
        };

        let request = RangeRequest {
            make: slug(make),
            model: slug(model),
            style: slug(style),
            year: slug(year),
            condition,
            mileage,
            channel,
        };

        let started = Instant::now();
        let band = self.valuation.price_range(&request).await;
        record_latency(FetchLatency::PriceRange, started.elapsed());
        let band = band?;

        if !band.is_ordered() {
            tracing::warn!(
                channel = channel.price_type(),
                low = %band.low,
                value = %band.value,
                high = %band.high,
                "Price band violates low <= value <= high"
            );
        }

        Ok(band)
    }

    fn effective_mileage(&self, specs: &ListingSpecs) -> i64 {
        match specs.mileage {
            Some(miles) => miles,
            None => {
                tracing::warn!(
                    assumed = self.settings.assumed_mileage,
                    "Listing has no mileage; using assumed value"
                );
                self.settings.assumed_mileage
            }
        }
    }
}
