//! NHTSA vPIC decode client
//!
//! Single endpoint: `decodevinvaluesextended`, which returns one flat
//! record per VIN with every decoded variable as a string field.

use super::{DecodeError, DecodedIdentity, IdentityDecoder};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// vPIC API base URL
pub const VPIC_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api";

/// Configuration for the vPIC client
#[derive(Debug, Clone)]
pub struct VpicConfig {
    /// Base URL for the vPIC API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for VpicConfig {
    fn default() -> Self {
        Self {
            base_url: VPIC_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the NHTSA vPIC API
pub struct VpicClient {
    config: VpicConfig,
    client: reqwest::Client,
}

impl VpicClient {
    /// Create a new vPIC client with default configuration
    pub fn new() -> Self {
        Self::with_config(VpicConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: VpicConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

impl Default for VpicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityDecoder for VpicClient {
    async fn decode(&self, vin: &str, year: &str) -> Result<DecodedIdentity, DecodeError> {
        let url = format!(
            "{}/vehicles/decodevinvaluesextended/{}",
            self.config.base_url, vin
        );

        tracing::debug!(vin = %vin, year = %year, "Decoding VIN");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("modelyear", year)])
            .send()
            .await?
            .error_for_status()?;

        let payload: VpicResponse = response.json().await?;

        let record = payload
            .results
            .into_iter()
            .next()
            .ok_or_else(|| DecodeError::EmptyResults {
                vin: vin.to_string(),
            })?;

        identity_from_record(record, vin)
    }
}

/// Response envelope from vPIC
#[derive(Debug, Deserialize)]
struct VpicResponse {
    #[serde(rename = "Results", default)]
    results: Vec<VpicRecord>,
}

/// One decoded VIN record. vPIC returns dozens of variables; only the
/// identity fields matter here.
#[derive(Debug, Deserialize)]
struct VpicRecord {
    #[serde(rename = "Make", default)]
    make: String,
    #[serde(rename = "Model", default)]
    model: String,
    #[serde(rename = "BodyClass", default)]
    body_class: String,
}

fn identity_from_record(record: VpicRecord, vin: &str) -> Result<DecodedIdentity, DecodeError> {
    if record.make.trim().is_empty() || record.model.trim().is_empty() {
        return Err(DecodeError::InvalidVin {
            vin: vin.to_string(),
        });
    }

    Ok(DecodedIdentity {
        make: record.make,
        model: record.model,
        body_class: record.body_class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vpic_client_creation() {
        let client = VpicClient::new();
        assert_eq!(client.config.base_url, VPIC_BASE_URL);
    }

    #[test]
    fn test_vpic_config_default() {
        let config = VpicConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "Count": 1,
            "Message": "Results returned successfully",
            "Results": [{
                "Make": "HONDA",
                "Model": "Civic",
                "BodyClass": "Sedan/Saloon",
                "ModelYear": "2015",
                "EngineCylinders": "4"
            }]
        }"#;

        let payload: VpicResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.results.len(), 1);
        assert_eq!(payload.results[0].make, "HONDA");
        assert_eq!(payload.results[0].body_class, "Sedan/Saloon");
    }

    #[test]
    fn test_identity_from_record() {
        let record = VpicRecord {
            make: "HONDA".to_string(),
            model: "Civic".to_string(),
            body_class: "Sedan/Saloon".to_string(),
        };
        let identity = identity_from_record(record, "1HGCM82633A004352").unwrap();
        assert_eq!(identity.make, "HONDA");
        assert_eq!(identity.model, "Civic");
    }

    #[test]
    fn test_identity_blank_make_is_invalid() {
        let record = VpicRecord {
            make: "".to_string(),
            model: "Civic".to_string(),
            body_class: "".to_string(),
        };
        let err = identity_from_record(record, "BADVIN").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidVin { .. }));
    }

    #[test]
    fn test_empty_results_envelope() {
        let json = r#"{"Count": 0, "Results": []}"#;
        let payload: VpicResponse = serde_json::from_str(json).unwrap();
        assert!(payload.results.is_empty());
    }
}
