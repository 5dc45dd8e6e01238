//! Analyze command implementation

use crate::analyzer::Analyzer;
use crate::catalog::ModelCatalog;
use crate::config::Config;
use crate::decoder::{VpicClient, VpicConfig};
use crate::listing::{EbayClient, EbayConfig};
use crate::report::render_briefing;
use crate::valuation::{KbbClient, KbbConfig};
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Listing URL to analyze
    pub url: String,
}

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let listing = {
            let defaults = EbayConfig::default();
            EbayClient::with_config(EbayConfig {
                timeout: Duration::from_secs(config.listing.timeout_secs),
                user_agent: config
                    .listing
                    .user_agent
                    .clone()
                    .unwrap_or(defaults.user_agent),
            })
        };

        let decoder = VpicClient::with_config(VpicConfig {
            base_url: config.decoder.base_url.clone(),
            timeout: Duration::from_secs(config.decoder.timeout_secs),
        });

        let valuation = {
            let defaults = KbbConfig::default();
            KbbClient::with_config(KbbConfig {
                base_url: config.valuation.base_url.clone(),
                timeout: Duration::from_secs(config.valuation.timeout_secs),
                user_agent: config
                    .valuation
                    .user_agent
                    .clone()
                    .unwrap_or(defaults.user_agent),
            })
        };

        let catalog = ModelCatalog::load(&config.catalog.path)?;

        let analyzer = Analyzer::new(listing, decoder, valuation, catalog, config.analysis.clone());
        let analysis = analyzer.analyze(&self.url).await?;

        println!("{}", render_briefing(&analysis));
        Ok(())
    }
}
