//! Listing provider module
//!
//! Price, spec sheet, and free-text description from a marketplace listing
//! page.

mod ebay;
mod types;

pub use ebay::{EbayClient, EbayConfig};
pub use types::ListingSpecs;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

/// Listing fetch errors. All are fatal to the run; retry policy, if any,
/// belongs to callers.
#[derive(Debug, Error)]
pub enum SourceFetchError {
    /// Transport-level failure
    #[error("listing request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// An expected page element was absent
    #[error("listing page missing {what}")]
    MissingElement { what: &'static str },
    /// The spec sheet lacks a required field
    #[error("spec sheet missing required field {field:?}")]
    MissingField { field: &'static str },
    /// A scraped value did not parse
    #[error("unparsable {what}")]
    BadFormat {
        what: &'static str,
        #[source]
        source: crate::text::FormatError,
    },
}

/// Trait for listing page providers
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Asking price in whole currency units
    async fn fetch_price(&self, url: &str) -> Result<Decimal, SourceFetchError>;

    /// Structured spec sheet; fails if VIN or year is absent
    async fn fetch_specs(&self, url: &str) -> Result<ListingSpecs, SourceFetchError>;

    /// Free-text seller description; may be empty
    async fn fetch_description(&self, url: &str) -> Result<String, SourceFetchError>;
}
