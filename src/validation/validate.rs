//! Validation of project inputs before calculation.

use crate::error::{Result, SacadaError};
use crate::model::{front_name, Geometry, ProjectInputs};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate project inputs.
///
/// Errors are contract violations the calculator refuses to run on.
/// Warnings flag inputs that will calculate but probably aren't intended.
pub fn validate_inputs(inputs: &ProjectInputs) -> ValidationResult {
    let mut result = validate_numbers(inputs);
    if !result.passed {
        return result;
    }

    result.merge(validate_geometry(inputs));

    if inputs.openings == 0 {
        result.add_warning("No openings: the lock line will be omitted");
    }

    if inputs.finish.trim().is_empty() {
        result.add_warning("No finish selected: profile lines cannot be resolved");
    }

    result
}

/// Numeric contract: finite values, positive target and capacity.
fn validate_numbers(inputs: &ProjectInputs) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let dims = &inputs.dimensions;
    let params = &inputs.params;

    let values = [
        ("A", Some(dims.a)),
        ("B", dims.b),
        ("C", dims.c),
        ("H", Some(dims.h)),
        ("FL", Some(params.fl)),
        ("FV", Some(params.fv)),
        ("FH", Some(params.fh)),
        ("FEg", Some(params.feg)),
        ("glass thickness", Some(params.glass_thickness)),
        ("target leaf width", Some(inputs.target_leaf_width)),
    ];
    for (name, value) in values {
        if let Some(value) = value {
            if !value.is_finite() {
                result.add_error(format!("{} is not a number ({})", name, value));
            }
        }
    }
    if !result.passed {
        return result;
    }

    if inputs.target_leaf_width <= 0.0 {
        result.add_error(format!(
            "Target leaf width must be greater than 0 (got {})",
            inputs.target_leaf_width
        ));
    }

    if params.box_capacity == 0 {
        result.add_error("Box capacity must be at least 1");
    }

    if dims.a <= 0.0 {
        result.add_error(format!("Front A length must be greater than 0 (got {})", dims.a));
    }


    for (name, value) in [
        ("FL", params.fl),
        ("FV", params.fv),
        ("FH", params.fh),
        ("FEg", params.feg),
    ] {
        if value < 0.0 {
            result.add_warning(format!("Clearance {} is negative ({})", name, value));
        }
    }

    result
}

/// Per-front checks for the selected geometry.
fn validate_geometry(inputs: &ProjectInputs) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let dims = &inputs.dimensions;
    let params = &inputs.params;

    let required = [(1, dims.b), (2, dims.c)];
    for (index, value) in required
        .into_iter()
        .take(inputs.geometry.front_count() - 1)
    {
        if value.map_or(true, |v| v <= 0.0) {
            result.add_warning(format!(
                "{} has no length and will be skipped",
                front_name(index)
            ));
        }
    }

    if inputs.geometry == Geometry::Straight && (dims.b.is_some() || dims.c.is_some()) {
        result.add_warning("Straight opening: lengths B and C are ignored");
    }

    for (index, width) in dims.fronts(inputs.geometry).into_iter().enumerate() {
        if width <= 0.0 {
            continue;
        }
        let extra = if inputs.geometry.is_pass_through(index) {
            params.feg
        } else {
            0.0
        };
        if 2.0 * params.fl + extra >= width {
            result.add_warning(format!(
                "{}: clearances ({} mm) leave no room for glass in {} mm",
                front_name(index),
                2.0 * params.fl + extra,
                width
            ));
        }
    }

    if dims.h <= 0.0 {
        result.add_warning(format!(
            "Height H is not positive ({} mm): panels will have no height",
            dims.h
        ));
    } else if params.fh >= dims.h {
        result.add_warning(format!(
            "Vertical clearance FH ({} mm) is not smaller than height H ({} mm)",
            params.fh, dims.h
        ));
    }

    result
}

/// Fail with `SacadaError::Validation` if the inputs have errors.
pub fn quick_validate(inputs: &ProjectInputs) -> Result<()> {
    let result = validate_inputs(inputs);

    if !result.passed {
        return Err(SacadaError::Validation {
            message: result.errors.join("; "),
        });
    }

    Ok(())
}
