//! Panel layout module.

mod calculator;

pub use calculator::{compute_layout, compute_project_layout};
