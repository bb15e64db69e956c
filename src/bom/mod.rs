//! Bill-of-materials generation, merging and pricing.

mod generator;
mod merge;
mod pricing;

pub use generator::{
    generate_bom, generate_bom_with_diagnostics, parts, units, BomGeneration,
};
pub use merge::merge_bom;
pub use pricing::{apply_edit, compute_totals, BomItemEdit, BomSummary, PriceBook};
