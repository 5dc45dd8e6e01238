//! KBB client for style catalogs and price ranges
//!
//! Scrapes two public page families: the styles index for a make/model/year
//! (which either lists style toggles directly or only body-class category
//! links) and the price advisor page, whose widget carries the band in an
//! aria-label.

use super::{
    contains_sentinel, PriceBand, RangeRequest, SaleChannel, StyleResolutionError, ValuationError,
    ValuationSource,
};
use crate::text::{parse_currency, similarity};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;

/// KBB base URL
pub const KBB_BASE_URL: &str = "https://www.kbb.com";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36";

/// Configuration for the KBB client
#[derive(Debug, Clone)]
pub struct KbbConfig {
    /// Base URL for vehicle pages
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Browser-like User-Agent; the site serves bots a different page
    pub user_agent: String,
}

impl Default for KbbConfig {
    fn default() -> Self {
        Self {
            base_url: KBB_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Client for KBB vehicle pages
pub struct KbbClient {
    config: KbbConfig,
    client: reqwest::Client,
}

impl KbbClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(KbbConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: KbbConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch a page, returning the body and the post-redirect URL.
    async fn fetch_page(&self, url: &str) -> Result<(String, reqwest::Url), ValuationError> {
        tracing::debug!(url = %url, "Fetching KBB page");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let final_url = response.url().clone();
        let body = response.text().await?;
        Ok((body, final_url))
    }

    /// Category-page fallback: no styles listed directly, only body-class
    /// category tiles. Pick the category closest to the decoded body class,
    /// follow it, and read the style from the final URL path.
    async fn style_from_categories(
        &self,
        body: &str,
        body_type: Option<&str>,
    ) -> Result<Vec<String>, ValuationError> {
        let links = parse_category_links(body);
        let Some((label, href)) = pick_closest_category(&links, body_type.unwrap_or("")) else {
            return Ok(Vec::new());
        };

        tracing::debug!(category = %label, "Following body-class category");

        let target = if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.config.base_url, href)
        };

        let (_, final_url) = self.fetch_page(&target).await?;

        // Path shape is /make/model/year/style/
        let style = final_url
            .path_segments()
            .and_then(|mut segments| segments.nth(3))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(style.into_iter().collect())
    }
}

impl Default for KbbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ValuationSource for KbbClient {
    async fn styles_for(
        &self,
        make: &str,
        model: &str,
        year: &str,
        body_type: Option<&str>,
    ) -> Result<Vec<String>, ValuationError> {
        let url = format!(
            "{}/{}/{}/{}/styles/?intent=buy-used",
            self.config.base_url, make, model, year
        );

        let (body, _) = self.fetch_page(&url).await?;
        let mut styles = parse_style_headings(&body);

        if styles.is_empty() {
            styles = self.style_from_categories(&body, body_type).await?;
        }

        if styles.is_empty() || contains_sentinel(&styles) {
            return Err(StyleResolutionError {
                make: make.to_string(),
                model: model.to_string(),
                year: year.to_string(),
            }
            .into());
        }

        tracing::debug!(count = styles.len(), "Found styles");
        Ok(styles)
    }

    async fn price_range(&self, request: &RangeRequest) -> Result<PriceBand, ValuationError> {
        let url = format!(
            "{}/{}/{}/{}/{}/?condition={}&intent=trade-in-sell&mileage={}&pricetype={}",
            self.config.base_url,
            request.make,
            request.model,
            request.year,
            request.style,
            request.condition.as_slug(),
            request.mileage,
            request.channel.price_type(),
        );

        let (body, _) = self.fetch_page(&url).await?;

        let label = parse_advisor_label(&body).ok_or(ValuationError::MissingAdvisor { url })?;
        parse_band(&label, request.channel)
    }
}

/// Style toggle headings: first line of each toggle element's text.
fn parse_style_headings(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let toggle = Selector::parse(".toggle").expect("static selector");

    document
        .select(&toggle)
        .filter_map(|el| {
            let text = el.text().collect::<String>();
            text.lines()
                .next()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
        })
        .collect()
}

/// Body-class category tiles: (label, href) pairs.
fn parse_category_links(html: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(html);
    let tile = Selector::parse(".css-v9y0wd").expect("static selector");
    let anchor = Selector::parse("a").expect("static selector");

    document
        .select(&tile)
        .filter_map(|el| {
            let label = el.text().collect::<String>().trim().to_string();
            if label.is_empty() {
                return None;
            }
            let href = el
                .value()
                .attr("href")
                .map(str::to_string)
                .or_else(|| {
                    el.select(&anchor)
                        .next()
                        .and_then(|a| a.value().attr("href"))
                        .map(str::to_string)
                })?;
            Some((label, href))
        })
        .collect()
}

/// The category whose label best matches the decoded body class.
fn pick_closest_category<'a>(
    links: &'a [(String, String)],
    body_type: &str,
) -> Option<(&'a str, &'a str)> {
    let mut best: Option<(&str, &str, f64)> = None;

    for (label, href) in links {
        let score = similarity(body_type, label);
        if best.is_none_or(|(_, _, s)| score > s) {
            best = Some((label, href, score));
        }
    }

    best.map(|(label, href, _)| (label, href))
}

/// The price advisor widget's aria-label, which carries the band text.
fn parse_advisor_label(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let advisor = Selector::parse(".css-je8g23").expect("static selector");

    document
        .select(&advisor)
        .next()
        .and_then(|el| el.value().attr("aria-label"))
        .map(str::to_string)
}

/// Parse the advisor label into a band. The label is positional text; the
/// low/high offsets differ per channel and the suggested value is the last
/// word.
fn parse_band(label: &str, channel: SaleChannel) -> Result<PriceBand, ValuationError> {
    let words: Vec<&str> = label.split_whitespace().collect();

    let (low_idx, high_idx) = match channel {
        SaleChannel::TradeIn => (2, 4),
        SaleChannel::PrivateParty => (3, 5),
    };

    let word = |idx: usize| words.get(idx).copied().unwrap_or("");
    let parse = |text: &str| {
        parse_currency(text).map_err(|source| ValuationError::BadRange {
            label: label.to_string(),
            source,
        })
    };

    Ok(PriceBand {
        low: parse(word(low_idx))?,
        high: parse(word(high_idx))?,
        value: parse(words.last().copied().unwrap_or(""))?,
    })
}
