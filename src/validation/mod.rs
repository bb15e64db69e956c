//! Input validation module.

mod validate;

pub use validate::{quick_validate, validate_inputs, ValidationResult};
