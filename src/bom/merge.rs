//! Merging a freshly generated BOM with the previously saved one.

use std::collections::HashMap;

use crate::model::BomItem;

/// Carry user choices from `previous` onto `fresh`, matching lines by key.
///
/// Quantities and every computed field come from `fresh`. Supplier, markup,
/// the fixed flag and the last known unit cost come from the previous line
/// with the same key. Lines whose key is gone are dropped.
pub fn merge_bom(fresh: Vec<BomItem>, previous: &[BomItem]) -> Vec<BomItem> {
    let by_key: HashMap<&str, &BomItem> = previous
        .iter()
        .map(|item| (item.key.as_str(), item))
        .collect();

    fresh
        .into_iter()
        .map(|mut item| {
            if let Some(old) = by_key.get(item.key.as_str()) {
                item.supplier_id = old.supplier_id.clone();
                item.markup = old.markup;
                item.fixed = old.fixed;
                item.unit_cost = old.unit_cost;
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use pretty_assertions::assert_eq;

    fn line(key: &str, quantity: f64) -> BomItem {
        BomItem::new(key, key, Category::Profile, quantity, "m", format!("v-{}", key))
    }

    #[test]
    fn test_user_fields_survive() {
        let mut old = line("trilho-superior", 3.0);
        old.supplier_id = Some("S1".into());
        old.markup = Some(20.0);
        old.fixed = true;
        old.unit_cost = Some(42.0);
        old.total_cost = Some(126.0);

        let merged = merge_bom(vec![line("trilho-superior", 4.5)], &[old]);

        assert_eq!(merged.len(), 1);
        let item = &merged[0];
        assert_eq!(item.quantity, 4.5);
        assert_eq!(item.supplier_id.as_deref(), Some("S1"));
        assert_eq!(item.markup, Some(20.0));
        assert!(item.fixed);
        assert_eq!(item.unit_cost, Some(42.0));
        // Totals are recomputed by pricing, not carried.
        assert_eq!(item.total_cost, None);
    }

    #[test]
    fn test_new_and_removed_keys() {
        let mut old = line("leito-vidro-front-b", 2.0);
        old.supplier_id = Some("S1".into());

        let merged = merge_bom(
            vec![line("leito-vidro-front-a", 2.96), line("kit-pivo", 2.0)],
            &[old],
        );

        let keys: Vec<_> = merged.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["leito-vidro-front-a", "kit-pivo"]);
        assert!(merged.iter().all(|i| i.supplier_id.is_none()));
    }

    #[test]
    fn test_empty_previous() {
        let fresh = vec![line("a", 1.0), line("b", 2.0)];
        assert_eq!(merge_bom(fresh.clone(), &[]), fresh);
    }
}
