//! Fuzzy string scoring
//!
//! Bounded [0,1] similarity plus best-candidate selection over a
//! cross-product of noisy inputs and known-good targets. Ties always break
//! toward the first-encountered pair, so selection is deterministic.

use strsim::normalized_levenshtein;

/// Similarity between two strings in [0, 1].
///
/// Symmetric; 1.0 only for identical strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Result of a cross-product match: which candidate won, which target it
/// matched, and the score.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Tag of the winning candidate (e.g. "decoded", "trim")
    pub source: String,
    /// The matched target value
    pub value: String,
    /// Similarity score of the winning pair
    pub score: f64,
}

/// Score every (candidate, target) pair and return the single best match.
///
/// Returns `None` when either side is empty.
pub fn best_match(candidates: &[(&str, &str)], targets: &[String]) -> Option<Match> {
    let mut best: Option<Match> = None;

    for (tag, candidate) in candidates {
        for target in targets {
            let score = similarity(candidate, target);
            if best.as_ref().is_none_or(|m| score > m.score) {
                best = Some(Match {
                    source: (*tag).to_string(),
                    value: target.clone(),
                    score,
                });
            }
        }
    }

    best
}

/// The single target closest to `needle`, with its score.
pub fn closest<'a>(needle: &str, haystack: &'a [String]) -> Option<(&'a str, f64)> {
    let mut best: Option<(&str, f64)> = None;

    for target in haystack {
        let score = similarity(needle, target);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((target, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_one() {
        for s in ["EX-L", "Civic", "a", "2015 Honda Civic EX-L Sedan"] {
            assert_eq!(similarity(s, s), 1.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("civic", "Civic"), ("EX", "EX-L"), ("sedan", "coupe")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_bounded() {
        let score = similarity("completely", "different");
        assert!((0.0..=1.0).contains(&score));
        assert!(similarity("abc", "xyz") < similarity("abc", "abd"));
    }

    #[test]
    fn test_best_match_picks_highest() {
        let targets = vec!["Civic".to_string(), "Accord".to_string(), "CR-V".to_string()];
        let m = best_match(&[("decoded", "civic"), ("trim", "EX-L")], &targets).unwrap();
        assert_eq!(m.source, "decoded");
        assert_eq!(m.value, "Civic");
    }

    #[test]
    fn test_best_match_empty() {
        assert!(best_match(&[], &["a".to_string()]).is_none());
        assert!(best_match(&[("t", "a")], &[]).is_none());
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        // Both targets are equally distant from the candidate; the first wins.
        let targets = vec!["ab".to_string(), "ba".to_string()];
        let m = best_match(&[("t", "aa")], &targets).unwrap();
        assert_eq!(m.value, "ab");
    }

    #[test]
    fn test_closest() {
        let haystack = vec!["LX".to_string(), "EX".to_string(), "EX-L".to_string()];
        let (value, score) = closest("EX-L", &haystack).unwrap();
        assert_eq!(value, "EX-L");
        assert_eq!(score, 1.0);

        assert!(closest("EX", &[]).is_none());
    }
}
