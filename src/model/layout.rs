//! Per-front layout results.

use serde::{Deserialize, Serialize};

/// Layout of one front of the opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// "Front A", "Front B", ...
    pub front_name: String,
    /// Raw front length in mm.
    pub front_length: f64,
    /// Whether FEg was applied to this front.
    pub pass_through: bool,
    /// Number of panels (≥ 1).
    pub panel_count: u32,
    /// Real panel width (LRP), mm, 2 decimals.
    pub lrp: f64,
    /// Real panel height (HRP), mm, 2 decimals.
    pub hrp: f64,
    /// Glass area of the front, m², 2 decimals.
    pub area_m2: f64,
    /// Output boxes needed for this front.
    pub output_box_count: u32,
    /// Human-readable warnings, in evaluation order.
    pub warnings: Vec<String>,
}

impl CalculationResult {
    /// Check if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Front name as a key slug ("front-a").
    pub fn front_slug(&self) -> String {
        self.front_name.to_lowercase().replace(' ', "-")
    }
}

/// Totals across all fronts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub total_panels: u32,
    pub total_area_m2: f64,
    pub total_output_boxes: u32,
}

impl LayoutSummary {
    /// Sum results. Area is the sum of the already-rounded front areas.
    /// Counts saturate at `u32::MAX`.
    pub fn from_results(results: &[CalculationResult]) -> Self {
        results.iter().fold(Self::default(), |acc, r| Self {
            total_panels: acc.total_panels.saturating_add(r.panel_count),
            total_area_m2: acc.total_area_m2 + r.area_m2,
            total_output_boxes: acc.total_output_boxes.saturating_add(r.output_box_count),
        })
    }
}
