//! Static brand content: products, vision items, company facts.
//!
//! Supplied whole at load time; the engine only consumes the item count
//! and the TUI reads the rest. A TOML file can override the built-in
//! catalog.

mod builtin;
pub mod models;

pub use models::{CompanyInfo, Product, VisionItem};

use std::path::Path;

use crate::{Error, Result};

/// The full content catalog driving every view.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub vision: Vec<VisionItem>,
    pub company: CompanyInfo,
}

impl Catalog {
    /// Built-in brand catalog.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Load from a TOML file, or fall back to the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| Error::Catalog(e.to_string()))?
            }
            None => Self::builtin(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject catalogs the engine cannot run on.
    pub fn validate(&self) -> Result<()> {
        if self.vision.is_empty() {
            return Err(Error::Catalog("vision item list must not be empty".into()));
        }
        if self.products.is_empty() {
            return Err(Error::Catalog("product list must not be empty".into()));
        }
        Ok(())
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.vision.len(), 7);
        assert_eq!(catalog.products.len(), 3);
    }

    #[test]
    fn vision_items_carry_structured_icons() {
        // Icons and short labels are data, not derived from titles
        for item in Catalog::builtin().vision {
            assert!(!item.icon.is_empty(), "{} missing icon", item.title);
            assert!(!item.short_label.is_empty());
        }
    }

    #[test]
    fn product_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.product("nbgatv3-4").is_some());
        assert!(catalog.product("missing").is_none());
    }
}
