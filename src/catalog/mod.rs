//! Catalog of materials, finishes, variants, suppliers and prices.

mod reconcile;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, SacadaError};
use crate::model::{Finish, Material, MaterialVariant, PriceEntry, Supplier};

pub use reconcile::{missing_variants, NewVariant};

/// Read-only lookup tables used by BOM generation and pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub materials: Vec<Material>,
    pub finishes: Vec<Finish>,
    pub variants: Vec<MaterialVariant>,
    pub suppliers: Vec<Supplier>,
    pub price_entries: Vec<PriceEntry>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SacadaError::Storage {
                path: path.to_path_buf(),
                message: "catalog file not found".to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        info!(
            "Loaded catalog: {} materials, {} variants, {} price entries",
            catalog.materials.len(),
            catalog.variants.len(),
            catalog.price_entries.len()
        );
        Ok(catalog)
    }

    /// Create the variants missing for the current materials and finishes.
    ///
    /// Returns how many were added. Running it twice adds nothing the second
    /// time.
    pub fn reconcile_variants(&mut self) -> usize {
        let missing = missing_variants(&self.materials, &self.finishes, &self.variants);
        let added = missing.len();
        self.variants.extend(
            missing
                .into_iter()
                .map(|v| v.into_variant(Uuid::new_v4().to_string())),
        );
        self.variants
            .sort_by(|a, b| a.display_name.cmp(&b.display_name));
        if added > 0 {
            info!("Created {} missing material variant(s)", added);
        }
        added
    }

    /// Look up a supplier by id.
    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// Look up a variant by id.
    pub fn variant(&self, id: &str) -> Option<&MaterialVariant> {
        self.variants.iter().find(|v| v.id == id)
    }
}
