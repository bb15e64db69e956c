//! Supplier pricing of BOM lines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::float_cmp::approx_zero;
use crate::model::{BomItem, Category, PriceEntry};

/// Price lookup over a set of price entries at a given date.
#[derive(Debug, Clone, Copy)]
pub struct PriceBook<'a> {
    entries: &'a [PriceEntry],
    date: NaiveDate,
}

impl<'a> PriceBook<'a> {
    pub fn new(entries: &'a [PriceEntry], date: NaiveDate) -> Self {
        Self { entries, date }
    }

    /// Unit cost of `variant_id` at `supplier_id`.
    ///
    /// Only active entries valid on the book's date count. A preferred entry
    /// wins over others; otherwise the first match is used.
    pub fn unit_cost(&self, supplier_id: &str, variant_id: &str) -> Option<f64> {
        let mut matches = self.entries.iter().filter(|p| {
            p.supplier_id == supplier_id
                && p.material_variant_id == variant_id
                && p.is_valid_on(self.date)
        });
        let first = matches.next()?;
        if first.preferred {
            return Some(first.unit_cost);
        }
        Some(
            matches
                .find(|p| p.preferred)
                .map_or(first.unit_cost, |p| p.unit_cost),
        )
    }

    /// Refresh the unit cost from the book and recompute totals.
    pub fn price_item(&self, item: &mut BomItem) {
        item.unit_cost = item
            .supplier_id
            .as_deref()
            .and_then(|supplier| self.unit_cost(supplier, &item.material_variant_id));
        compute_totals(item);
    }

    /// Price every line.
    pub fn price_all(&self, items: &mut [BomItem]) {
        for item in items {
            self.price_item(item);
        }
    }
}

/// Recompute `total_cost` and `price` from quantity, unit cost and markup.
pub fn compute_totals(item: &mut BomItem) {
    item.total_cost = item.unit_cost.map(|cost| item.quantity * cost);
    let markup = item.effective_markup();
    item.price = item.total_cost.map(|total| total * (1.0 + markup / 100.0));
}

/// A user edit to one BOM line. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomItemEdit {
    pub supplier_id: Option<Option<String>>,
    pub markup: Option<Option<f64>>,
    pub fixed: Option<bool>,
}

/// Apply a user edit. Changing the supplier looks the price up again.
pub fn apply_edit(item: &BomItem, edit: BomItemEdit, book: &PriceBook<'_>) -> BomItem {
    let mut updated = item.clone();
    if let Some(markup) = edit.markup {
        updated.markup = markup;
    }
    if let Some(fixed) = edit.fixed {
        updated.fixed = fixed;
    }
    match edit.supplier_id {
        Some(supplier_id) => {
            updated.supplier_id = supplier_id;
            book.price_item(&mut updated);
        }
        None => compute_totals(&mut updated),
    }
    updated
}

/// Cost and price totals of a priced BOM.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BomSummary {
    pub total_cost: f64,
    pub total_price: f64,
    /// `total_price - total_cost`.
    pub margin: f64,
    /// Margin over cost, percent. 0 when there is no cost.
    pub margin_percent: f64,
    pub cost_by_category: BTreeMap<Category, f64>,
    /// Keys of lines with a supplier but no price.
    pub missing_prices: Vec<String>,
}

impl BomSummary {
    pub fn from_items(items: &[BomItem]) -> Self {
        let total_cost: f64 = items.iter().filter_map(|i| i.total_cost).sum();
        let total_price: f64 = items.iter().filter_map(|i| i.price).sum();
        let margin = total_price - total_cost;
        let margin_percent = if approx_zero(total_cost) {
            0.0
        } else {
            margin / total_cost * 100.0
        };

        let mut cost_by_category = BTreeMap::new();
        for item in items {
            *cost_by_category.entry(item.category).or_insert(0.0) +=
                item.total_cost.unwrap_or(0.0);
        }

        Self {
            total_cost,
            total_price,
            margin,
            margin_percent,
            cost_by_category,
            missing_prices: items
                .iter()
                .filter(|i| i.is_missing_price())
                .map(|i| i.key.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(id: &str, supplier: &str, variant: &str, cost: f64) -> PriceEntry {
        PriceEntry {
            id: id.into(),
            supplier_id: supplier.into(),
            material_variant_id: variant.into(),
            unit_cost: cost,
            sale_unit: "m".into(),
            moq: None,
            lead_time: 5,
            valid_from: date("2025-01-01"),
            valid_to: None,
            active: true,
            preferred: false,
        }
    }

    fn item(key: &str, category: Category, quantity: f64) -> BomItem {
        BomItem::new(key, key, category, quantity, "m", "v1")
    }

    // ==================== PriceBook tests ====================

    #[test]
    fn test_unit_cost_lookup() {
        let entries = vec![entry("p1", "S1", "v1", 10.0), entry("p2", "S2", "v1", 12.0)];
        let book = PriceBook::new(&entries, date("2025-06-01"));
        assert_eq!(book.unit_cost("S1", "v1"), Some(10.0));
        assert_eq!(book.unit_cost("S2", "v1"), Some(12.0));
        assert_eq!(book.unit_cost("S3", "v1"), None);
        assert_eq!(book.unit_cost("S1", "v2"), None);
    }

    #[test]
    fn test_inactive_and_expired_ignored() {
        let mut inactive = entry("p1", "S1", "v1", 10.0);
        inactive.active = false;
        let mut expired = entry("p2", "S1", "v1", 11.0);
        expired.valid_to = Some(date("2025-03-01"));
        let entries = vec![inactive, expired];

        let book = PriceBook::new(&entries, date("2025-06-01"));
        assert_eq!(book.unit_cost("S1", "v1"), None);

        let book = PriceBook::new(&entries, date("2025-02-01"));
        assert_eq!(book.unit_cost("S1", "v1"), Some(11.0));
    }

    #[test]
    fn test_preferred_entry_wins() {
        let mut preferred = entry("p2", "S1", "v1", 9.0);
        preferred.preferred = true;
        let entries = vec![entry("p1", "S1", "v1", 10.0), preferred];
        let book = PriceBook::new(&entries, date("2025-06-01"));
        assert_eq!(book.unit_cost("S1", "v1"), Some(9.0));
    }

    // ==================== Totals tests ====================

    #[test]
    fn test_price_with_markup() {
        let entries = vec![entry("p1", "S1", "v1", 10.0)];
        let book = PriceBook::new(&entries, date("2025-06-01"));

        let mut line = item("trilho-superior", Category::Profile, 3.0);
        line.supplier_id = Some("S1".into());
        line.markup = Some(20.0);
        book.price_item(&mut line);

        assert_eq!(line.unit_cost, Some(10.0));
        assert_eq!(line.total_cost, Some(30.0));
        assert!(approx_eq(line.price.unwrap(), 36.0));
    }

    #[test]
    fn test_accessory_markup_ignored() {
        let entries = vec![entry("p1", "S1", "v1", 5.0)];
        let book = PriceBook::new(&entries, date("2025-06-01"));

        let mut line = item("kit-pivo", Category::Accessory, 2.0);
        line.supplier_id = Some("S1".into());
        line.markup = Some(50.0);
        book.price_item(&mut line);

        assert_eq!(line.total_cost, Some(10.0));
        assert_eq!(line.price, Some(10.0));
    }

    #[test]
    fn test_no_supplier_no_price() {
        let entries = vec![entry("p1", "S1", "v1", 5.0)];
        let book = PriceBook::new(&entries, date("2025-06-01"));

        let mut line = item("escova-5x7", Category::Brush, 2.0);
        line.unit_cost = Some(3.0);
        book.price_item(&mut line);

        assert_eq!(line.unit_cost, None);
        assert_eq!(line.total_cost, None);
        assert_eq!(line.price, None);
        assert!(!line.is_missing_price());
    }

    // ==================== Edit tests ====================

    #[test]
    fn test_edit_supplier_reprices() {
        let entries = vec![entry("p1", "S1", "v1", 10.0), entry("p2", "S2", "v1", 8.0)];
        let book = PriceBook::new(&entries, date("2025-06-01"));

        let mut line = item("trilho-inferior", Category::Profile, 2.0);
        line.supplier_id = Some("S1".into());
        book.price_item(&mut line);

        let edited = apply_edit(
            &line,
            BomItemEdit {
                supplier_id: Some(Some("S2".into())),
                ..Default::default()
            },
            &book,
        );
        assert_eq!(edited.unit_cost, Some(8.0));
        assert_eq!(edited.total_cost, Some(16.0));
    }

    #[test]
    fn test_edit_markup_keeps_cost() {
        let entries = vec![entry("p1", "S1", "v1", 10.0)];
        let book = PriceBook::new(&entries, date("2025-06-01"));

        let mut line = item("trilho-inferior", Category::Profile, 2.0);
        line.supplier_id = Some("S1".into());
        book.price_item(&mut line);

        let edited = apply_edit(
            &line,
            BomItemEdit {
                markup: Some(Some(50.0)),
                fixed: Some(true),
                ..Default::default()
            },
            &book,
        );
        assert_eq!(edited.unit_cost, Some(10.0));
        assert_eq!(edited.price, Some(30.0));
        assert!(edited.fixed);
    }

    // ==================== Summary tests ====================

    #[test]
    fn test_summary() {
        let mut profile = item("trilho-superior", Category::Profile, 3.0);
        profile.unit_cost = Some(10.0);
        profile.markup = Some(100.0);
        compute_totals(&mut profile);

        let mut accessory = item("kit-pivo", Category::Accessory, 2.0);
        accessory.unit_cost = Some(5.0);
        compute_totals(&mut accessory);

        let mut unpriced = item("escova-5x5", Category::Brush, 1.0);
        unpriced.supplier_id = Some("S9".into());

        let summary = BomSummary::from_items(&[profile, accessory, unpriced]);
        assert_eq!(summary.total_cost, 40.0);
        assert_eq!(summary.total_price, 70.0);
        assert_eq!(summary.margin, 30.0);
        assert_eq!(summary.margin_percent, 75.0);
        assert_eq!(summary.cost_by_category[&Category::Profile], 30.0);
        assert_eq!(summary.cost_by_category[&Category::Brush], 0.0);
        assert_eq!(summary.missing_prices, vec!["escova-5x5".to_string()]);
    }

    #[test]
    fn test_summary_empty() {
        let summary = BomSummary::from_items(&[]);
        assert_eq!(summary, BomSummary::default());
    }
}
