//! Style resolution strategy chain
//!
//! Selecting one style from the valuation provider's catalog is the
//! ambiguous half of identity resolution: the listing's trim field may be
//! absent or junk, and the description is a noisy bag of words. The chain
//! below tries each signal in a fixed order and falls through to a
//! deterministic pick, so a style is always produced for a non-empty
//! catalog.

use crate::text::{closest, similarity};

/// Inputs available to every style strategy.
#[derive(Debug, Clone, Copy)]
pub struct StyleInput<'a> {
    /// Candidate style names from the valuation provider (never meaningful
    /// order; one entry means unambiguous)
    pub catalog: &'a [String],
    /// Structured trim field from the listing, if present
    pub trim: Option<&'a str>,
    /// Free-text listing description (may be empty)
    pub description: &'a str,
}

/// One stage of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleStrategy {
    /// A one-entry catalog needs no scoring
    SingleCandidate,
    /// Match the listing trim against every style, accepting any score
    TrimMatch,
    /// Scan the description with sliding windows of the expected style length
    DescriptionScan,
    /// No signal: take the middle catalog entry (median-priced option)
    MedianFallback,
}

/// Resolution order. Structured trim text is trusted over free text whenever
/// it is present at all; the final stage always succeeds for a non-empty
/// catalog.
pub const STYLE_STRATEGIES: [StyleStrategy; 4] = [
    StyleStrategy::SingleCandidate,
    StyleStrategy::TrimMatch,
    StyleStrategy::DescriptionScan,
    StyleStrategy::MedianFallback,
];

/// A resolved style and the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleChoice {
    pub style: String,
    pub strategy: StyleStrategy,
}

impl StyleStrategy {
    /// Metric/log label for this stage.
    pub fn label(&self) -> &'static str {
        match self {
            StyleStrategy::SingleCandidate => "single_candidate",
            StyleStrategy::TrimMatch => "trim_match",
            StyleStrategy::DescriptionScan => "description_scan",
            StyleStrategy::MedianFallback => "median_fallback",
        }
    }

    /// Apply this stage; `None` means the stage is structurally inapplicable
    /// and the chain moves on.
    pub fn apply(&self, input: &StyleInput) -> Option<String> {
        match self {
            StyleStrategy::SingleCandidate => single_candidate(input),
            StyleStrategy::TrimMatch => trim_match(input),
            StyleStrategy::DescriptionScan => description_scan(input),
            StyleStrategy::MedianFallback => median_fallback(input),
        }
    }
}

/// Run the chain. Returns `None` only for an empty catalog.
pub fn resolve_style(input: &StyleInput) -> Option<StyleChoice> {
    STYLE_STRATEGIES.iter().find_map(|strategy| {
        strategy.apply(input).map(|style| {
            tracing::debug!(strategy = strategy.label(), style = %style, "resolved style");
            StyleChoice {
                style,
                strategy: *strategy,
            }
        })
    })
}

fn single_candidate(input: &StyleInput) -> Option<String> {
    match input.catalog {
        [only] => Some(only.clone()),
        _ => None,
    }
}

/// Accepts the top-ranked style no matter how poor the score: some signal
/// beats none. Fails only when the trim is absent/blank or the catalog is
/// empty.
fn trim_match(input: &StyleInput) -> Option<String> {
    let trim = input.trim.map(str::trim).filter(|t| !t.is_empty())?;
    closest(trim, input.catalog).map(|(style, _)| style.to_string())
}

/// Treat the description as candidate phrases of the catalog's expected
/// style length: strip non-alphanumeric characters, slide a k-word window
/// (k = floor of the mean style-name word count), and keep each style's best
/// window score.
fn description_scan(input: &StyleInput) -> Option<String> {
    if input.catalog.is_empty() {
        return None;
    }

    let cleaned: String = input
        .description
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    let total_words: usize = input
        .catalog
        .iter()
        .map(|s| s.split_whitespace().count().max(1))
        .sum();
    let k = total_words / input.catalog.len();

    if k == 0 || words.len() < k {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (idx, style) in input.catalog.iter().enumerate() {
        let mut style_best = 0.0f64;
        for window in words.windows(k) {
            let phrase = window.join(" ");
            let score = similarity(style, &phrase);
            if score > style_best {
                style_best = score;
            }
        }
        if best.is_none_or(|(_, s)| style_best > s) {
            best = Some((idx, style_best));
        }
    }

    best.map(|(idx, _)| input.catalog[idx].clone())
}

fn median_fallback(input: &StyleInput) -> Option<String> {
    input.catalog.get(input.catalog.len() / 2).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn input<'a>(
        catalog: &'a [String],
        trim: Option<&'a str>,
        description: &'a str,
    ) -> StyleInput<'a> {
        StyleInput {
            catalog,
            trim,
            description,
        }
    }

    #[test]
    fn test_single_entry_short_circuits() {
        let cat = catalog(&["Touring"]);
        // Even with contradicting trim and description
        let choice = resolve_style(&input(&cat, Some("LX"), "base model no options")).unwrap();
        assert_eq!(choice.style, "Touring");
        assert_eq!(choice.strategy, StyleStrategy::SingleCandidate);
    }

    #[test]
    fn test_trim_match_selects_closest() {
        let cat = catalog(&["LX", "EX", "EX-L"]);
        let choice = resolve_style(&input(&cat, Some("EX-L"), "")).unwrap();
        assert_eq!(choice.style, "EX-L");
        assert_eq!(choice.strategy, StyleStrategy::TrimMatch);
    }

    #[test]
    fn test_trim_match_accepts_poor_scores() {
        // Zero threshold: a garbage trim still selects whatever ranks first
        let cat = catalog(&["LX", "EX", "EX-L"]);
        let choice = resolve_style(&input(&cat, Some("zzzz"), "")).unwrap();
        assert_eq!(choice.strategy, StyleStrategy::TrimMatch);
    }

    #[test]
    fn test_description_fallback_verbatim_style() {
        let cat = catalog(&["LX", "EX", "EX-L"]);
        let desc = "one owner EX-L with heated leather seats";
        let choice = resolve_style(&input(&cat, None, desc)).unwrap();
        assert_eq!(choice.style, "EX-L");
        assert_eq!(choice.strategy, StyleStrategy::DescriptionScan);
    }

    #[test]
    fn test_description_fallback_multi_word_styles() {
        let cat = catalog(&["Sport Touring", "Gran Turismo"]);
        let desc = "low miles gran turismo package fully loaded";
        let choice = resolve_style(&input(&cat, None, desc)).unwrap();
        assert_eq!(choice.style, "Gran Turismo");
    }

    #[test]
    fn test_median_fallback_index() {
        let cat = catalog(&["Base", "Sport", "Limited", "Premium", "Touring"]);
        let choice = resolve_style(&input(&cat, None, "")).unwrap();
        assert_eq!(choice.style, "Limited");
        assert_eq!(choice.strategy, StyleStrategy::MedianFallback);
    }

    #[test]
    fn test_median_fallback_even_length() {
        let cat = catalog(&["LX", "EX", "EX-L", "Touring"]);
        let choice = resolve_style(&input(&cat, None, "")).unwrap();
        assert_eq!(choice.style, "EX-L");
    }

    #[test]
    fn test_short_description_forces_median() {
        // Description shorter than the expected style length yields no windows
        let cat = catalog(&["Sport Touring Elite", "Gran Turismo Sport"]);
        let choice = resolve_style(&input(&cat, None, "clean")).unwrap();
        assert_eq!(choice.strategy, StyleStrategy::MedianFallback);
    }

    #[test]
    fn test_empty_catalog_is_none() {
        assert!(resolve_style(&input(&[], Some("EX"), "desc")).is_none());
    }

    #[test]
    fn test_blank_trim_falls_through() {
        let cat = catalog(&["LX", "EX", "EX-L"]);
        let desc = "this EX has everything";
        let choice = resolve_style(&input(&cat, Some("   "), desc)).unwrap();
        assert_eq!(choice.strategy, StyleStrategy::DescriptionScan);
        assert_eq!(choice.style, "EX");
    }

    #[test]
    fn test_strategy_order() {
        assert_eq!(
            STYLE_STRATEGIES,
            [
                StyleStrategy::SingleCandidate,
                StyleStrategy::TrimMatch,
                StyleStrategy::DescriptionScan,
                StyleStrategy::MedianFallback,
            ]
        );
    }
}
