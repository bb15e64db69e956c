//! Plain-text report of a calculation.

use std::fmt::Write;

use crate::bom::BomSummary;
use crate::catalog::Catalog;
use crate::machining::ChecklistItem;
use crate::model::{BomItem, CalculationResult, Category, LayoutSummary};

/// Per-front results followed by the layout totals.
pub fn format_results(results: &[CalculationResult]) -> String {
    let mut output = String::new();

    for r in results {
        writeln!(
            output,
            "{} ({} mm): {} panel(s), LRP {:.2} mm, HRP {:.2} mm, {:.2} m², {} output box(es)",
            r.front_name, r.front_length, r.panel_count, r.lrp, r.hrp, r.area_m2, r.output_box_count
        )
        .unwrap();
        for warning in &r.warnings {
            writeln!(output, "  ! {}", warning).unwrap();
        }
    }

    let summary = LayoutSummary::from_results(results);
    writeln!(
        output,
        "Total: {} panel(s), {:.2} m², {} output box(es)",
        summary.total_panels, summary.total_area_m2, summary.total_output_boxes
    )
    .unwrap();

    output
}

/// BOM lines with supplier and pricing, then cost totals.
pub fn format_bom(items: &[BomItem], catalog: &Catalog) -> String {
    let mut output = String::new();

    writeln!(output, "Bill of materials ({} lines)", items.len()).unwrap();
    for item in items {
        let supplier = item
            .supplier_id
            .as_deref()
            .map(|id| catalog.supplier(id).map_or(id, |s| s.name.as_str()))
            .unwrap_or("-");
        writeln!(
            output,
            "  {:<40} {:>10.2} {:<9} {:<20} {:>10} {:>10}",
            item.name,
            item.quantity,
            item.unit,
            supplier,
            money(item.total_cost),
            money(item.price)
        )
        .unwrap();
    }

    let summary = BomSummary::from_items(items);
    writeln!(
        output,
        "Cost {:.2}, price {:.2}, margin {:.2} ({:.1}%)",
        summary.total_cost, summary.total_price, summary.margin, summary.margin_percent
    )
    .unwrap();
    for category in Category::ALL {
        if let Some(cost) = summary.cost_by_category.get(&category) {
            writeln!(output, "  {:<10} {:>10.2}", category, cost).unwrap();
        }
    }
    if !summary.missing_prices.is_empty() {
        writeln!(output, "No price for: {}", summary.missing_prices.join(", ")).unwrap();
    }

    output
}

/// Machining checklist with tick marks.
pub fn format_checklist(items: &[ChecklistItem]) -> String {
    let mut output = String::new();
    for item in items {
        let mark = if item.done { 'x' } else { ' ' };
        writeln!(output, "[{}] {}", mark, item.label).unwrap();
    }
    output
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::machining::checklist;
    use crate::model::{ClearanceParams, Contact, Dimensions, Geometry, Supplier};
    use std::collections::BTreeMap;

    #[test]
    fn test_format_results_l_shape() {
        let results = compute_layout(
            Geometry::LShape,
            &Dimensions::l_shape(3000.0, 2000.0, 2400.0),
            500.0,
            &ClearanceParams::default(),
        )
        .unwrap();

        insta::assert_snapshot!(format_results(&results), @r###"
        Front A (3000 mm): 6 panel(s), LRP 491.67 mm, HRP 2235.00 mm, 6.59 m², 1 output box(es)
          ! pass-through clearance (FEg) of 5 mm applied
        Front B (2000 mm): 4 panel(s), LRP 490.25 mm, HRP 2235.00 mm, 4.38 m², 1 output box(es)
        Total: 10 panel(s), 10.97 m², 2 output box(es)
        "###);
    }

    #[test]
    fn test_format_bom_prices_and_missing() {
        let catalog = Catalog {
            suppliers: vec![Supplier {
                id: "s1".into(),
                name: "Alumax".into(),
                cnpj: None,
                states: vec![],
                contact: Contact::default(),
                default_freight_per_km: None,
                default_lead_time: 0,
                active: true,
                preferred: false,
            }],
            ..Default::default()
        };

        let mut priced = BomItem::new(
            "trilho-superior",
            "Trilho superior (D)",
            Category::Profile,
            3.0,
            "m",
            "v1",
        );
        priced.supplier_id = Some("s1".into());
        priced.unit_cost = Some(10.0);
        priced.total_cost = Some(30.0);
        priced.price = Some(36.0);

        let mut unpriced = BomItem::new("kit-pivo", "Kit pivô", Category::Accessory, 2.0, "kit", "v2");
        unpriced.supplier_id = Some("s9".into());

        let text = format_bom(&[priced, unpriced], &catalog);
        assert!(text.starts_with("Bill of materials (2 lines)\n"));
        assert!(text.contains("Alumax"));
        assert!(text.contains("s9"));
        assert!(text.contains("Cost 30.00, price 36.00, margin 6.00 (20.0%)"));
        assert!(text.contains("  profile         30.00\n"));
        assert!(text.contains("  accessory        0.00\n"));
        assert!(text.ends_with("No price for: kit-pivo\n"));
    }

    #[test]
    fn test_format_checklist() {
        let mut state = BTreeMap::new();
        state.insert("cutSup".to_string(), true);
        let text = format_checklist(&checklist(&ClearanceParams::default(), &state));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[x] Top cuts: 40×33mm");
        assert_eq!(lines[1], "[ ] U-regulation cuts: 100×40mm");
    }
}
