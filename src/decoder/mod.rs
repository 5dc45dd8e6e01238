//! VIN decode module
//!
//! Authoritative make/model/body-class guesses from the NHTSA vPIC service.

mod vpic;

pub use vpic::{VpicClient, VpicConfig, VPIC_BASE_URL};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Identity decoded from a VIN. Fields may hold placeholder values (vPIC
/// uses "Not Applicable" and empty strings freely); the resolver tolerates
/// them.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedIdentity {
    pub make: String,
    pub model: String,
    pub body_class: String,
}

/// VIN decode errors
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Transport-level failure
    #[error("decode request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The decoder returned an empty result set
    #[error("decoder returned no results for VIN {vin:?}")]
    EmptyResults { vin: String },
    /// The decoder could not produce a make and model
    #[error("VIN {vin:?} did not decode to a make and model")]
    InvalidVin { vin: String },
}

/// Trait for VIN decoding implementations
#[async_trait]
pub trait IdentityDecoder: Send + Sync {
    /// Decode a VIN with its model year hint.
    async fn decode(&self, vin: &str, year: &str) -> Result<DecodedIdentity, DecodeError>;
}
