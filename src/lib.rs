//! sacada-calc - Sizing and bill-of-materials calculator for frameless
//! sliding-folding glass balcony enclosures.
//!
//! Given an opening (straight, L or U), its dimensions and the clearance
//! parameters, this library computes the panel layout of every front and
//! derives the bill of materials, priced from a supplier catalog.
//!
//! # Example
//!
//! ```no_run
//! use sacada_calc::{recalculate, Catalog, Project};
//! use std::path::Path;
//!
//! let catalog = Catalog::from_json_file(Path::new("catalog.json")).unwrap();
//! let project = Project::new("Obra Jardins");
//! let today = chrono::Utc::now().date_naive();
//! let recalculation = recalculate(&project, &catalog, today).unwrap();
//! for result in &recalculation.results {
//!     println!("{}: {} panels", result.front_name, result.panel_count);
//! }
//! ```

pub mod bom;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod machining;
pub mod model;
pub mod report;
pub mod state;
pub mod store;
pub mod validation;

use chrono::NaiveDate;
use serde::Serialize;

// Re-exports for convenience
pub use bom::{generate_bom, merge_bom, BomSummary, PriceBook};
pub use catalog::Catalog;
pub use error::{Result, SacadaError};
pub use layout::{compute_layout, compute_project_layout};
pub use model::{
    BomItem, CalculationResult, ClearanceParams, Dimensions, Geometry, LayoutSummary, Project,
    ProjectInputs,
};
pub use state::{reduce, Action, AppState, SaveStatus};
pub use store::{Autosave, JsonFileStore, ProjectStore};
pub use validation::{validate_inputs, ValidationResult};

/// Output of a full project recalculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recalculation {
    pub results: Vec<CalculationResult>,
    pub summary: LayoutSummary,
    /// Fresh BOM with the project's user edits merged in and prices applied.
    pub bom: Vec<BomItem>,
    pub bom_summary: BomSummary,
    /// Parts the catalog has no variant for.
    pub unmatched_parts: Vec<String>,
}

/// Recalculate a project against a catalog.
///
/// Runs the full pipeline:
/// 1. Compute the layout of every front
/// 2. Generate the BOM from the layout
/// 3. Merge the user edits of the project's current BOM
/// 4. Price every line with the entries valid on `date`
pub fn recalculate(project: &Project, catalog: &Catalog, date: NaiveDate) -> Result<Recalculation> {
    let inputs = &project.inputs;
    let results = compute_project_layout(inputs)?;
    for result in results.iter().filter(|r| r.has_warnings()) {
        for warning in &result.warnings {
            tracing::warn!("{}: {}", result.front_name, warning);
        }
    }

    let generation = bom::generate_bom_with_diagnostics(
        inputs,
        &results,
        &catalog.materials,
        &catalog.variants,
    );

    let mut bom = merge_bom(generation.items, &project.bom);
    PriceBook::new(&catalog.price_entries, date).price_all(&mut bom);

    Ok(Recalculation {
        summary: LayoutSummary::from_results(&results),
        bom_summary: BomSummary::from_items(&bom),
        results,
        bom,
        unmatched_parts: generation.unmatched_parts,
    })
}
