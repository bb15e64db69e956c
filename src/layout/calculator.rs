//! Panel layout calculation per front.

use tracing::debug;

use crate::config::rounding::{round2, round_half_up};
use crate::config::{MAX_PANEL_WIDTH_MM, MIN_PANEL_WIDTH_MM, MM2_PER_M2};
use crate::error::{Result, SacadaError};
use crate::model::{front_name, CalculationResult, ClearanceParams, Dimensions, Geometry, ProjectInputs};

/// Compute the panel layout of every active front.
///
/// Fronts with a length ≤ 0 are skipped. Out-of-range panel widths and
/// heights are reported as warnings on the result, never as errors.
///
/// # Errors
///
/// * `InvalidParameter` if `target_leaf_width` is not a finite value > 0,
///   `box_capacity` is 0 or a clearance is not finite.
/// * `InvalidDimension` if any dimension is not finite.
pub fn compute_layout(
    geometry: Geometry,
    dimensions: &Dimensions,
    target_leaf_width: f64,
    params: &ClearanceParams,
) -> Result<Vec<CalculationResult>> {
    check_contract(geometry, dimensions, target_leaf_width, params)?;

    let hrp = dimensions.h - params.fh;

    let results = dimensions
        .fronts(geometry)
        .into_iter()
        .enumerate()
        .filter(|(_, width)| *width > 0.0)
        .map(|(index, width)| {
            layout_front(
                front_name(index),
                width,
                hrp,
                geometry.is_pass_through(index),
                target_leaf_width,
                params,
            )
        })
        .collect();

    Ok(results)
}

/// Compute the layout for a project's inputs.
pub fn compute_project_layout(inputs: &ProjectInputs) -> Result<Vec<CalculationResult>> {
    compute_layout(
        inputs.geometry,
        &inputs.dimensions,
        inputs.target_leaf_width,
        &inputs.params,
    )
}

/// Layout of a single front of length `width`.
fn layout_front(
    name: String,
    width: f64,
    hrp: f64,
    pass_through: bool,
    target_leaf_width: f64,
    params: &ClearanceParams,
) -> CalculationResult {
    let panels = panels_for(width, target_leaf_width);
    let panel_count = panels as u32;

    let extra_gap = if pass_through { params.feg } else { 0.0 };
    let lrp = (width - 2.0 * params.fl - (panels - 1.0) * params.fv - extra_gap) / panels;
    let area = (lrp * hrp * panels) / MM2_PER_M2;
    let output_box_count = panel_count.div_ceil(params.box_capacity);

    let mut warnings = Vec::new();
    if lrp < MIN_PANEL_WIDTH_MM {
        warnings.push(format!(
            "panel width below minimum ({}mm)",
            MIN_PANEL_WIDTH_MM
        ));
    }
    if lrp > MAX_PANEL_WIDTH_MM {
        warnings.push(format!(
            "panel width above maximum ({}mm)",
            MAX_PANEL_WIDTH_MM
        ));
    }
    if hrp <= 0.0 {
        warnings.push("invalid height after clearances".to_string());
    }
    if output_box_count > 1 {
        warnings.push(format!("{} output boxes required", output_box_count));
    }
    if pass_through {
        warnings.push(format!(
            "pass-through clearance (FEg) of {} mm applied",
            params.feg
        ));
    }

    debug!(
        "{}: W={} panels={} LRP={:.2} HRP={:.2} boxes={}",
        name, width, panel_count, lrp, hrp, output_box_count
    );

    CalculationResult {
        front_name: name,
        front_length: width,
        pass_through,
        panel_count,
        lrp: round2(lrp),
        hrp: round2(hrp),
        area_m2: round2(area),
        output_box_count,
        warnings,
    }
}

/// Panels on a front of length `width`, rounded half-up, at least 1.
fn panels_for(width: f64, target_leaf_width: f64) -> f64 {
    round_half_up(width / target_leaf_width, 0).max(1.0)
}

/// Reject inputs that would make the math divide by zero, go non-finite or
/// produce more panels than a `u32` can count.
fn check_contract(
    geometry: Geometry,
    dimensions: &Dimensions,
    target_leaf_width: f64,
    params: &ClearanceParams,
) -> Result<()> {
    if !target_leaf_width.is_finite() || target_leaf_width <= 0.0 {
        return Err(SacadaError::invalid_parameter(
            "target_leaf_width",
            target_leaf_width,
            "must be a finite width greater than 0",
        ));
    }

    if params.box_capacity == 0 {
        return Err(SacadaError::invalid_parameter(
            "box_capacity",
            0.0,
            "must be at least 1",
        ));
    }

    for (name, value) in [
        ("FL", params.fl),
        ("FV", params.fv),
        ("FH", params.fh),
        ("FEg", params.feg),
    ] {
        if !value.is_finite() {
            return Err(SacadaError::invalid_parameter(name, value, "must be finite"));
        }
    }

    let named = [
        ("A", Some(dimensions.a)),
        ("B", dimensions.b),
        ("C", dimensions.c),
        ("H", Some(dimensions.h)),
    ];
    for (name, value) in named {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(SacadaError::InvalidDimension {
                    name: name.to_string(),
                    value,
                });
            }
        }
    }

    // Checked on the total so per-front counts can be summed without overflow.
    let total_panels: f64 = dimensions
        .fronts(geometry)
        .into_iter()
        .filter(|width| *width > 0.0)
        .map(|width| panels_for(width, target_leaf_width))
        .sum();
    if total_panels > f64::from(u32::MAX) {
        return Err(SacadaError::invalid_parameter(
            "target_leaf_width",
            target_leaf_width,
            "too small for the opening, panel count out of range",
        ));
    }

    Ok(())
}
