//! Flip economics
//!
//! Pure arithmetic over the two price bands and the asking price. Negative
//! deltas are meaningful (a bad flip) and are never clamped.

use crate::valuation::PriceBand;
use rust_decimal::Decimal;
use serde::Serialize;

/// Profit deltas between wholesale and retail bands, and against the
/// listing's asking price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitDeltas {
    /// Sell at retail high after buying at wholesale low
    pub best_case: Decimal,
    /// Sell at retail low after buying at wholesale high
    pub worst_case: Decimal,
    /// Suggested retail value minus suggested wholesale value
    pub average: Decimal,
    /// Sell at retail high after buying at the asking price
    pub listing_best_case: Decimal,
    /// Sell at retail low after buying at the asking price
    pub listing_worst_case: Decimal,
    /// Suggested retail value minus the asking price
    pub listing_average: Decimal,
}

/// Terminal valuation artifact of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationResult {
    pub trade_in: PriceBand,
    pub private_party: PriceBand,
    pub listing_price: Decimal,
    pub deltas: ProfitDeltas,
}

/// Compare a wholesale band against a retail band and a listing price.
pub fn compare(
    trade_in: &PriceBand,
    private_party: &PriceBand,
    listing_price: Decimal,
) -> ProfitDeltas {
    ProfitDeltas {
        best_case: private_party.high - trade_in.low,
        worst_case: private_party.low - trade_in.high,
        average: private_party.value - trade_in.value,
        listing_best_case: private_party.high - listing_price,
        listing_worst_case: private_party.low - listing_price,
        listing_average: private_party.value - listing_price,
    }
}

/// Mileage classification for report annotation. Not used in any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MileageBand {
    VeryLow,
    Low,
    Mid,
    High,
    VeryHigh,
    UnbelievablyHigh,
}

impl MileageBand {
    /// Classify whole miles into the six fixed buckets. Thresholds are
    /// lower-inclusive: 25,000 miles is already "low", not "very low".
    pub fn from_miles(miles: i64) -> Self {
        if miles < 25_000 {
            MileageBand::VeryLow
        } else if miles < 50_000 {
            MileageBand::Low
        } else if miles < 100_000 {
            MileageBand::Mid
        } else if miles < 150_000 {
            MileageBand::High
        } else if miles < 200_000 {
            MileageBand::VeryHigh
        } else {
            MileageBand::UnbelievablyHigh
        }
    }
}

impl std::fmt::Display for MileageBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MileageBand::VeryLow => "very low mileage",
            MileageBand::Low => "low mileage",
            MileageBand::Mid => "mid mileage",
            MileageBand::High => "high mileage",
            MileageBand::VeryHigh => "very high mileage",
            MileageBand::UnbelievablyHigh => "unbelievably high mileage",
        };
        f.write_str(label)
    }
}
