//! Bill-of-materials line items.

use serde::{Deserialize, Serialize};

/// Category of a material or BOM line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Profile,
    Glass,
    #[default]
    Accessory,
    Brush,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::Profile,
        Category::Glass,
        Category::Accessory,
        Category::Brush,
    ];

    /// Whether markup applies to this category. Accessories are sold at cost.
    pub fn allows_markup(&self) -> bool {
        !matches!(self, Category::Accessory)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Category::Profile => "profile",
            Category::Glass => "glass",
            Category::Accessory => "accessory",
            Category::Brush => "brush",
        })
    }
}

/// One line of the bill of materials.
///
/// `key` is stable across recalculations and is what user edits are merged on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BomItem {
    /// Stable line key, e.g. "trilho-superior".
    pub key: String,
    /// Display name.
    pub name: String,
    pub category: Category,
    /// Quantity in `unit` (> 0 once generated).
    pub quantity: f64,
    /// "m", "m²", "kit", "piece", "conjunto".
    pub unit: String,
    /// Resolved catalog variant.
    pub material_variant_id: String,

    // User-editable fields, preserved across recalculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<f64>,
    #[serde(default)]
    pub fixed: bool,

    // Pricing, derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl BomItem {
    /// Create a computed line with no user or pricing data.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        quantity: f64,
        unit: impl Into<String>,
        material_variant_id: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            category,
            quantity,
            unit: unit.into(),
            material_variant_id: material_variant_id.into(),
            ..Default::default()
        }
    }

    /// Markup actually applied when pricing this line.
    pub fn effective_markup(&self) -> f64 {
        if self.category.allows_markup() {
            self.markup.unwrap_or(0.0)
        } else {
            0.0
        }
    }

    /// A supplier is chosen but no price was found for it.
    pub fn is_missing_price(&self) -> bool {
        self.supplier_id.is_some() && self.unit_cost.is_none()
    }
}
