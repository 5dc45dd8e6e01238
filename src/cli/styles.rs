//! Styles command implementation
//!
//! Manual lookup flow: list the style catalog for a vehicle and, given a
//! style index, print both price bands and the profit spread.

use crate::compare::compare;
use crate::config::Config;
use crate::text::{slug, thousands};
use crate::valuation::{
    Condition, KbbClient, KbbConfig, RangeRequest, SaleChannel, ValuationSource,
};
use clap::Args;
use rust_decimal::Decimal;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Vehicle make, e.g. "Honda"
    #[arg(long)]
    pub make: String,

    /// Vehicle model, e.g. "Civic"
    #[arg(long)]
    pub model: String,

    /// Model year
    #[arg(long)]
    pub year: String,

    /// 1-based index of a listed style to price
    #[arg(long)]
    pub style: Option<usize>,

    /// Condition for the trade-in band
    #[arg(long, default_value = "fair")]
    pub condition: Condition,

    /// Odometer miles for the price lookup
    #[arg(long, default_value_t = 100_000)]
    pub mileage: i64,
}

impl StylesArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = {
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

        let styles = client
            .styles_for(
                &slug(&self.make),
                &slug(&self.model),
                &slug(&self.year),
                None,
            )
            .await?;

        println!("Available styles for a {} {}:", self.year, self.model);
        for (i, style) in styles.iter().enumerate() {
            println!("{}. {}", i + 1, style);
        }

        let Some(index) = self.style else {
            return Ok(());
        };
        let style = index
            .checked_sub(1)
            .and_then(|i| styles.get(i))
            .ok_or_else(|| anyhow::anyhow!("style index {} out of range 1..={}", index, styles.len()))?;

        let request = |condition: Condition, channel: SaleChannel| RangeRequest {
            make: slug(&self.make),
            model: slug(&self.model),
            style: slug(style),
            year: slug(&self.year),
            condition,
            mileage: self.mileage,
            channel,
        };

        let trade_in = client
            .price_range(&request(self.condition, SaleChannel::TradeIn))
            .await?;
        let private_party = client
            .price_range(&request(
                config.analysis.private_party_condition,
                SaleChannel::PrivateParty,
            ))
            .await?;

        println!();
        println!("Price ranges for a {} {} {}:", self.year, style, self.model);
        println!(
            "Trade-in prices range from ${} to ${}",
            thousands(trade_in.low),
            thousands(trade_in.high)
        );
        println!(
            "Private party prices range from ${} to ${}",
            thousands(private_party.low),
            thousands(private_party.high)
        );

        let deltas = compare(&trade_in, &private_party, Decimal::ZERO);
        println!(
            "The potential profit ranges from ${} to ${} and averages around ${}",
            thousands(deltas.worst_case),
            thousands(deltas.best_case),
            thousands(deltas.average)
        );

        Ok(())
    }
}
