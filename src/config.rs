//! Configuration constants and defaults for the calculator.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Minimum structural panel width in mm.
pub const MIN_PANEL_WIDTH_MM: f64 = 350.0;

/// Maximum structural panel width in mm.
pub const MAX_PANEL_WIDTH_MM: f64 = 800.0;

/// Conversion factor: mm to m.
pub const MM_PER_M: f64 = 1000.0;

/// Conversion factor: mm² to m².
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Pivot kits per enclosure. Pivot panels don't get a roller kit.
pub const PIVOT_KIT_QTY: u32 = 2;

/// Panel exits per enclosure (one exit assembly and one trim each).
pub const EXIT_QTY: u32 = 2;

/// Share of the brush run taken by the 5x7 brush.
pub const BRUSH_5X7_SHARE: f64 = 0.6;

/// Share of the brush run taken by the 5x5 brush.
pub const BRUSH_5X5_SHARE: f64 = 0.4;

/// Panels served by one pair of parking stops.
pub const PANELS_PER_PARKING: u32 = 3;

/// Rivet spacing along profiles in mm.
pub const RIVET_STEP_MM: f64 = 300.0;

/// Distance of the first rivet from the wall in mm.
pub const RIVET_FIRST_OFFSET_MM: f64 = 10.0;

/// Lateral clearance wall to glass (FL).
pub const DEFAULT_FL: f64 = 15.0;

/// Clearance between adjacent panels (FV).
pub const DEFAULT_FV: f64 = 3.0;

/// Total vertical clearance (FH).
pub const DEFAULT_FH: f64 = 165.0;

/// Pass-through front clearance (FEg).
pub const DEFAULT_FEG: f64 = 5.0;

/// Glass thickness in mm.
pub const DEFAULT_GLASS_THICKNESS: f64 = 8.0;

/// Panels per output box.
pub const DEFAULT_BOX_CAPACITY: u32 = 7;

/// Mouth center offset from LRP.
pub const DEFAULT_BOCA_OFFSET: f64 = 15.0;

/// Drain hole spacing.
pub const DEFAULT_DRAIN_STEP: f64 = 500.0;

/// New project: front A length.
pub const DEFAULT_FRONT_A: f64 = 3000.0;

/// New project: opening height.
pub const DEFAULT_HEIGHT: f64 = 2400.0;

/// New project: target leaf width.
pub const DEFAULT_TARGET_LEAF_WIDTH: f64 = 500.0;

/// New project: number of openings.
pub const DEFAULT_OPENINGS: u32 = 1;

/// New project: finish code ("NF" = natural finish).
pub const DEFAULT_FINISH: &str = "NF";

/// New project: state code.
pub const DEFAULT_STATE: &str = "SP";

/// New project: name.
pub const DEFAULT_PROJECT_NAME: &str = "Nova Obra";

/// Autosave debounce in milliseconds.
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 1500;

/// Rounding helpers.
///
/// Values are rounded half-up (towards +∞ on ties), which is how the
/// results have always been presented to operators.
pub mod rounding {
    /// Round to `decimals` places, ties towards +∞.
    #[inline]
    pub fn round_half_up(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor + 0.5).floor() / factor
    }

    /// Round to 2 decimal places.
    #[inline]
    pub fn round2(value: f64) -> f64 {
        round_half_up(value, 2)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
