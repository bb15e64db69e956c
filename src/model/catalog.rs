//! Catalog records: materials, finishes, variants, suppliers and prices.
//!
//! The calculator only reads these. They are owned by whatever stores the
//! supplier and price data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Category;

/// A purchasable material, independent of finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Unit the material is measured in ("m", "m²", "piece", ...).
    pub base_unit: String,
    /// Default waste allowance, percent.
    #[serde(default)]
    pub default_waste_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Material {
    /// Profiles are sold per finish; everything else has a single variant.
    pub fn requires_finish(&self) -> bool {
        self.category == Category::Profile
    }
}

/// Profile finish / color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    pub id: String,
    /// Short code used in variant display names ("NF", "BR", ...).
    pub code: String,
    pub name: String,
}

/// A material specialised by an optional finish. This is what gets priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialVariant {
    pub id: String,
    pub material_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    /// "<material name> - <finish code>" for profiles, material name otherwise.
    pub display_name: String,
}

/// Supplier contact details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// A material supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    /// States (UF) served.
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_freight_per_km: Option<f64>,
    /// Default lead time in days.
    #[serde(default)]
    pub default_lead_time: u32,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub preferred: bool,
}

/// Unit cost of a variant at a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub id: String,
    pub supplier_id: String,
    pub material_variant_id: String,
    pub unit_cost: f64,
    /// Sale unit ("m", "barra_6m", "piece", "kit").
    #[serde(default)]
    pub sale_unit: String,
    /// Minimum order quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moq: Option<f64>,
    #[serde(default)]
    pub lead_time: u32,
    pub valid_from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub preferred: bool,
}

impl PriceEntry {
    /// Active and within its validity window on `date`.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.active && self.valid_from <= date && self.valid_to.map_or(true, |to| date <= to)
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(valid_from: &str, valid_to: Option<&str>, active: bool) -> PriceEntry {
        PriceEntry {
            id: "p1".into(),
            supplier_id: "s1".into(),
            material_variant_id: "v1".into(),
            unit_cost: 10.0,
            sale_unit: "m".into(),
            moq: None,
            lead_time: 0,
            valid_from: valid_from.parse().unwrap(),
            valid_to: valid_to.map(|d| d.parse().unwrap()),
            active,
            preferred: false,
        }
    }

    #[test]
    fn test_price_entry_validity() {
        let day: NaiveDate = "2025-06-15".parse().unwrap();
        assert!(entry("2025-01-01", None, true).is_valid_on(day));
        assert!(entry("2025-01-01", Some("2025-06-15"), true).is_valid_on(day));
        assert!(!entry("2025-01-01", Some("2025-06-14"), true).is_valid_on(day));
        assert!(!entry("2025-07-01", None, true).is_valid_on(day));
        assert!(!entry("2025-01-01", None, false).is_valid_on(day));
    }

    #[test]
    fn test_requires_finish() {
        let material = Material {
            id: "m1".into(),
            name: "Trilho superior (D)".into(),
            category: Category::Profile,
            base_unit: "m".into(),
            default_waste_percent: 0.0,
            notes: None,
        };
        assert!(material.requires_finish());
    }
}
