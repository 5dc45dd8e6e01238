//! Valuation types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::text::slug_with;

/// A wholesale or retail price range with the provider's suggested value.
///
/// `low <= value <= high` holds for any band a provider returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub low: Decimal,
    pub high: Decimal,
    pub value: Decimal,
}

impl PriceBand {
    /// Whether the band satisfies its ordering invariant.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.value && self.value <= self.high
    }
}

/// Vehicle condition as the valuation provider grades it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl Condition {
    /// URL form the provider expects: lowercased with spaces removed
    /// ("Very Good" becomes "verygood").
    pub fn as_slug(&self) -> String {
        slug_with(self.label(), "")
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Poor => "Poor",
            Condition::Fair => "Fair",
            Condition::Good => "Good",
            Condition::VeryGood => "Very Good",
            Condition::Excellent => "Excellent",
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match slug_with(s, "").as_str() {
            "poor" => Ok(Condition::Poor),
            "fair" => Ok(Condition::Fair),
            "good" => Ok(Condition::Good),
            "verygood" => Ok(Condition::VeryGood),
            "excellent" => Ok(Condition::Excellent),
            other => Err(format!(
                "unknown condition {other:?} (expected poor/fair/good/very-good/excellent)"
            )),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which price band a range lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaleChannel {
    /// Dealer-offered wholesale price
    TradeIn,
    /// Individual-to-individual retail price
    PrivateParty,
}

impl SaleChannel {
    /// Query-parameter value for the provider's price advisor page.
    pub fn price_type(&self) -> &'static str {
        match self {
            SaleChannel::TradeIn => "trade-in",
            SaleChannel::PrivateParty => "private-party",
        }
    }
}

/// A fully-specified price range lookup.
///
/// All string fields are expected in URL-safe canonical form (see
/// [`crate::text::slug`]); the caller normalizes before crossing this
/// boundary.
#[derive(Debug, Clone)]
pub struct RangeRequest {
    pub make: String,
    pub model: String,
    pub style: String,
    pub year: String,
    pub condition: Condition,
    pub mileage: i64,
    pub channel: SaleChannel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_band_invariant() {
        let band = PriceBand {
            low: dec!(8000),
            high: dec!(9500),
            value: dec!(8700),
        };
        assert!(band.is_ordered());

        let inverted = PriceBand {
            low: dec!(9500),
            high: dec!(8000),
            value: dec!(8700),
        };
        assert!(!inverted.is_ordered());

        let degenerate = PriceBand {
            low: dec!(5000),
            high: dec!(5000),
            value: dec!(5000),
        };
        assert!(degenerate.is_ordered());
    }

    #[test]
    fn test_condition_slug() {
        assert_eq!(Condition::Fair.as_slug(), "fair");
        assert_eq!(Condition::VeryGood.as_slug(), "verygood");
    }

    #[test]
    fn test_condition_from_str() {
        assert_eq!("fair".parse::<Condition>().unwrap(), Condition::Fair);
        assert_eq!("Very Good".parse::<Condition>().unwrap(), Condition::VeryGood);
        assert_eq!("very-good".parse::<Condition>().unwrap(), Condition::VeryGood);
        assert!("mint".parse::<Condition>().is_err());
    }

    #[test]
    fn test_price_type() {
        assert_eq!(SaleChannel::TradeIn.price_type(), "trade-in");
        assert_eq!(SaleChannel::PrivateParty.price_type(), "private-party");
    }
}
