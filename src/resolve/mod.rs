//! Vehicle identity resolution
//!
//! Reconciles noisy, multi-source evidence (VIN decode output, listing trim
//! text, free-text description) into a single canonical model and style.
//! Style resolution never fails on ambiguity; every stage degrades to a
//! documented heuristic so the pipeline always has a usable identity to
//! price.

mod style;

pub use style::{resolve_style, StyleChoice, StyleInput, StyleStrategy, STYLE_STRATEGIES};

use crate::text::best_match;
use thiserror::Error;

/// Identity resolution errors
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Decoded make has no entries in the model catalog
    #[error("no known models for make {0:?}")]
    UnknownMake(String),
}

/// Canonical vehicle identity, immutable once produced.
#[derive(Debug, Clone)]
pub struct ResolvedVehicle {
    pub make: String,
    pub model: String,
    pub style: String,
    pub year: String,
    pub mileage: i64,
    pub condition: crate::valuation::Condition,
}

impl ResolvedVehicle {
    /// One-line summary for logs and the briefing header.
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.year, self.make, self.style, self.model
        )
    }
}

/// Pick the canonical model name for a make.
///
/// The VIN decoder's model guess and the listing's trim field are each
/// independently noisy; scoring both against the known-model set and keeping
/// the best hedges against either one being garbage.
pub fn resolve_model(
    make: &str,
    decoded_model: &str,
    trim: Option<&str>,
    known_models: &[String],
) -> Result<String, ResolveError> {
    if known_models.is_empty() {
        return Err(ResolveError::UnknownMake(make.to_string()));
    }

    let mut candidates: Vec<(&str, &str)> = vec![("decoded", decoded_model)];
    if let Some(trim) = trim.map(str::trim).filter(|t| !t.is_empty()) {
        candidates.push(("trim", trim));
    }

    // known_models is non-empty, so a best pair always exists
    let winner = best_match(&candidates, known_models)
        .ok_or_else(|| ResolveError::UnknownMake(make.to_string()))?;

    tracing::debug!(
        source = %winner.source,
        model = %winner.value,
        score = winner.score,
        "resolved model"
    );

    Ok(winner.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec!["Civic".to_string(), "Accord".to_string(), "CR-V".to_string()]
    }

    #[test]
    fn test_resolve_model_from_decoded() {
        let model = resolve_model("Honda", "civic", Some("EX-L"), &known()).unwrap();
        assert_eq!(model, "Civic");
    }

    #[test]
    fn test_resolve_model_from_trim_when_decode_garbage() {
        // Decoder produced a placeholder; the trim carries the real signal.
        let model = resolve_model("Honda", "Not Applicable", Some("accord lx"), &known()).unwrap();
        assert_eq!(model, "Accord");
    }

    #[test]
    fn test_resolve_model_no_trim() {
        let model = resolve_model("Honda", "CR-V", None, &known()).unwrap();
        assert_eq!(model, "CR-V");
    }

    #[test]
    fn test_resolve_model_blank_trim_skipped() {
        let model = resolve_model("Honda", "civic", Some("  "), &known()).unwrap();
        assert_eq!(model, "Civic");
    }

    #[test]
    fn test_resolve_model_unknown_make() {
        let err = resolve_model("Yugo", "GV", None, &[]).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownMake(m) if m == "Yugo"));
    }
}
