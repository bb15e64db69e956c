//! Data model for openings, layout results, BOM lines and the catalog.

mod bom;
mod catalog;
mod geometry;
mod layout;
mod params;
mod project;

pub use bom::{BomItem, Category};
pub use catalog::{Contact, Finish, Material, MaterialVariant, PriceEntry, Supplier};
pub use geometry::{front_name, Dimensions, Geometry};
pub use layout::{CalculationResult, LayoutSummary};
pub use params::{AparadorSize, ClearanceParams, CutSize, LockType};
pub use project::{Project, ProjectInputs};
