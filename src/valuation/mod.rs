//! Valuation provider module
//!
//! Style catalogs and price bands from KBB's public vehicle pages.

mod kbb;
mod types;

pub use kbb::{KbbClient, KbbConfig, KBB_BASE_URL};
pub use types::{Condition, PriceBand, RangeRequest, SaleChannel};

use async_trait::async_trait;
use thiserror::Error;

/// Headings the provider renders when a make/model/year has no styles page.
/// Scraping one of these means the vehicle parameters are invalid, not that
/// a style with that name exists.
pub const NO_RESULT_SENTINELS: [&str; 3] = ["Price New/Used", "Search by Price", "Cars For Sale"];

/// The provider has no styles for this make/model/year; the combination is
/// invalid vehicle parameters.
#[derive(Debug, Error)]
#[error("no styles for {make} {model} {year}; make/model/year are not a valid vehicle")]
pub struct StyleResolutionError {
    pub make: String,
    pub model: String,
    pub year: String,
}

/// Valuation provider errors
#[derive(Debug, Error)]
pub enum ValuationError {
    /// Transport-level failure
    #[error("valuation request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Sentinel or empty styles page
    #[error(transparent)]
    InvalidVehicle(#[from] StyleResolutionError),
    /// The price advisor widget was absent from the page
    #[error("price advisor not found at {url}")]
    MissingAdvisor { url: String },
    /// The advisor label did not parse into a band
    #[error("unreadable price range {label:?}")]
    BadRange {
        label: String,
        #[source]
        source: crate::text::FormatError,
    },
}

/// Trait for valuation lookups.
///
/// String arguments are expected in URL-safe canonical form (see
/// [`crate::text::slug`]); callers normalize before crossing this boundary.
#[async_trait]
pub trait ValuationSource: Send + Sync {
    /// List the style catalog for a make/model/year. `body_type` is used to
    /// disambiguate when the provider offers only body-class categories.
    async fn styles_for(
        &self,
        make: &str,
        model: &str,
        year: &str,
        body_type: Option<&str>,
    ) -> Result<Vec<String>, ValuationError>;

    /// Fetch one price band.
    async fn price_range(&self, request: &RangeRequest) -> Result<PriceBand, ValuationError>;
}

/// Check a scraped style list against the known no-result sentinels.
pub(crate) fn contains_sentinel(styles: &[String]) -> bool {
    styles
        .iter()
        .any(|style| NO_RESULT_SENTINELS.iter().any(|s| style.contains(s)))
}
