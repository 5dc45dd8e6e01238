//! Make/model reference catalog
//!
//! Static CSV table of known (make, model) pairs, loaded once per process
//! and read-only afterward. Used solely to validate and complete the
//! decoded model guess against real model names for a make.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One row of the reference table. Extra CSV columns are ignored.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Make")]
    make: String,
    #[serde(rename = "Model")]
    model: String,
}

/// In-memory make/model reference table, keyed by lowercased make.
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    models_by_make: HashMap<String, Vec<String>>,
}

impl ModelCatalog {
    /// Load the catalog from a CSV file with `Make` and `Model` columns.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut models_by_make: HashMap<String, Vec<String>> = HashMap::new();

        for row in reader.deserialize() {
            let row: CatalogRow = row?;
            let make = row.make.trim().to_lowercase();
            let model = row.model.trim().to_string();
            if make.is_empty() || model.is_empty() {
                continue;
            }
            let models = models_by_make.entry(make).or_default();
            if !models.iter().any(|m| m == &model) {
                models.push(model);
            }
        }

        tracing::debug!(
            makes = models_by_make.len(),
            "Loaded model catalog"
        );

        Ok(Self { models_by_make })
    }

    /// Known model names for a make, matched case-insensitively. Empty for
    /// an unknown make.
    pub fn models_for_make(&self, make: &str) -> &[String] {
        self.models_by_make
            .get(&make.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of makes in the catalog.
    pub fn make_count(&self) -> usize {
        self.models_by_make.len()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut models_by_make: HashMap<String, Vec<String>> = HashMap::new();
        for (make, model) in pairs {
            models_by_make
                .entry(make.to_lowercase())
                .or_default()
                .push(model.to_string());
        }
        Self { models_by_make }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ",Make,Model,Years").unwrap();
        writeln!(file, "0,Honda,Civic,2001-2024").unwrap();
        writeln!(file, "1,Honda,Accord,2001-2024").unwrap();
        writeln!(file, "2,Toyota,Corolla,2001-2024").unwrap();
        file.flush().unwrap();

        let catalog = ModelCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.make_count(), 2);
        assert_eq!(catalog.models_for_make("Honda"), ["Civic", "Accord"]);
        assert_eq!(catalog.models_for_make("HONDA"), ["Civic", "Accord"]);
        assert_eq!(catalog.models_for_make("Toyota"), ["Corolla"]);
    }

    #[test]
    fn test_unknown_make_is_empty() {
        let catalog = ModelCatalog::from_pairs(&[("Honda", "Civic")]);
        assert!(catalog.models_for_make("Yugo").is_empty());
    }

    #[test]
    fn test_duplicate_rows_collapse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Make,Model").unwrap();
        writeln!(file, "Honda,Civic").unwrap();
        writeln!(file, "Honda,Civic").unwrap();
        file.flush().unwrap();

        let catalog = ModelCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.models_for_make("honda"), ["Civic"]);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ModelCatalog::load("/nonexistent/models.csv").is_err());
    }
}
