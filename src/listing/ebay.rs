//! eBay listing client
//!
//! The listing page carries the price and an about-this-item spec sheet
//! inline; the seller description lives in a separate iframe document.

use super::{ListingProvider, ListingSpecs, SourceFetchError};
use crate::text::{clean_field, parse_currency};
use async_trait::async_trait;
use rust_decimal::Decimal;
use scraper::{Html, Selector};
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36";

/// Configuration for the eBay client
#[derive(Debug, Clone)]
pub struct EbayConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Browser-like User-Agent
    pub user_agent: String,
}

impl Default for EbayConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Client for eBay vehicle listing pages
pub struct EbayClient {
    client: reqwest::Client,
}

impl EbayClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(EbayConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: EbayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    async fn fetch_html(&self, url: &str) -> Result<String, SourceFetchError> {
        tracing::debug!(url = %url, "Fetching listing page");
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Default for EbayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingProvider for EbayClient {
    async fn fetch_price(&self, url: &str) -> Result<Decimal, SourceFetchError> {
        let html = self.fetch_html(url).await?;

        let raw = parse_price_text(&html).ok_or(SourceFetchError::MissingElement {
            what: "price element",
        })?;

        parse_currency(&raw).map_err(|source| SourceFetchError::BadFormat {
            what: "listing price",
            source,
        })
    }

    async fn fetch_specs(&self, url: &str) -> Result<ListingSpecs, SourceFetchError> {
        let html = self.fetch_html(url).await?;
        let pairs = parse_spec_pairs(&html);
        specs_from_pairs(&pairs)
    }

    async fn fetch_description(&self, url: &str) -> Result<String, SourceFetchError> {
        let html = self.fetch_html(url).await?;

        // The description is usually an iframe document of its own
        if let Some(src) = description_iframe_src(&html) {
            let inner = self.fetch_html(&src).await?;
            if let Some(description) = parse_description(&inner) {
                return Ok(description);
            }
        }

        parse_description(&html).ok_or(SourceFetchError::MissingElement {
            what: "vehicle description",
        })
    }
}

/// Price text: the itemprop=price span, last whitespace-separated token
/// (the tag text reads like "US $9,800.00").
fn parse_price_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let price = Selector::parse(r#"span[itemprop="price"]"#).expect("static selector");

    let text: String = document.select(&price).next()?.text().collect();
    text.split_whitespace().last().map(str::to_string)
}

/// About-this-item spans alternate label/value; labels carry a trailing
/// colon. Returns cleaned (label, value) pairs.
fn parse_spec_pairs(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let section = Selector::parse(".x-about-this-item").expect("static selector");
    let span = Selector::parse("span.ux-textspans").expect("static selector");

    let Some(about) = document.select(&section).next() else {
        return Vec::new();
    };

    let texts: Vec<String> = about
        .select(&span)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let mut pairs = Vec::new();
    let mut i = 1;
    while i < texts.len() {
        let key = texts[i - 1].trim_end_matches(':').trim().to_string();
        let value = clean_field(&texts[i]);
        if !key.is_empty() && !value.is_empty() {
            pairs.push((key, value));
        }
        i += 2;
    }
    pairs
}

/// Map labeled pairs into the spec sheet. VIN and year are hard
/// requirements; everything else defaults to absent.
fn specs_from_pairs(pairs: &[(String, String)]) -> Result<ListingSpecs, SourceFetchError> {
    let lookup = |field: &str| {
        pairs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(field))
            .map(|(_, value)| value.clone())
    };

    let vin = lookup("VIN")
        .map(|v| v.to_ascii_uppercase())
        .ok_or(SourceFetchError::MissingField { field: "VIN" })?;
    let year = lookup("Year").ok_or(SourceFetchError::MissingField { field: "Year" })?;

    let mileage = lookup("Mileage").and_then(|m| {
        let digits: String = m.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse::<i64>().ok()
    });

    Ok(ListingSpecs {
        vin,
        year,
        trim: lookup("Trim"),
        mileage,
        body_type: lookup("Body Type"),
    })
}

/// src of the seller-description iframe, when present.
fn description_iframe_src(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let iframe = Selector::parse("iframe#desc_ifr").expect("static selector");

    document
        .select(&iframe)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(str::to_string)
}

/// Description container text with whitespace collapsed.
fn parse_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector_str in ["#vehicleDescription", "#ds_div"] {
        let selector = Selector::parse(selector_str).expect("static selector");
        if let Some(el) = document.select(&selector).next() {
            let text: String = el.text().collect();
            let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !collapsed.is_empty() {
                return Some(collapsed);
            }
        }
    }

    None
}
