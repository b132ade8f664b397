use crate::error::Result;
use crate::models::Product;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// The JSON artifact the static front end reads. Fully replaced on every
/// successful sync; readers must tolerate it being stale or absent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub last_updated: String,
}

impl Snapshot {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
            last_updated: Utc::now().to_rfc3339(),
        }
    }

    /// Overwrite the snapshot file. serde_json writes UTF-8 and leaves
    /// non-ASCII characters unescaped, which the front end expects.
    pub fn write(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        info!(
            products = self.products.len(),
            categories = self.categories.len(),
            path = ?path,
            "Updated snapshot"
        );

        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::test_helpers::mock_product;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");

        let snapshot = Snapshot::new(
            vec![mock_product("pottery-001", "Pottery")],
            vec!["Pottery".to_string()],
        );
        snapshot.write(&path).unwrap();

        let read_back = Snapshot::read(&path).unwrap();
        assert_eq!(read_back, snapshot);
    }

    #[test]
    fn test_write_is_full_replace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");

        let first = Snapshot::new(
            vec![
                mock_product("pottery-001", "Pottery"),
                mock_product("wood-001", "Woodwork"),
            ],
            vec!["Pottery".to_string(), "Woodwork".to_string()],
        );
        first.write(&path).unwrap();

        let second = Snapshot::new(Vec::new(), Vec::new());
        second.write(&path).unwrap();

        let read_back = Snapshot::read(&path).unwrap();
        assert!(read_back.products.is_empty());
        assert!(read_back.categories.is_empty());
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");

        let mut product = mock_product("brass-001", "पीतल");
        product.name = "पीतल की मूर्ति".to_string();

        Snapshot::new(vec![product], vec!["पीतल".to_string()])
            .write(&path)
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("पीतल की मूर्ति"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn test_last_updated_is_rfc3339() {
        let snapshot = Snapshot::new(Vec::new(), Vec::new());
        assert!(chrono::DateTime::parse_from_rfc3339(&snapshot.last_updated).is_ok());
    }
}
