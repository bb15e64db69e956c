//! Manufacturing clearance parameters.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_BOCA_OFFSET, DEFAULT_BOX_CAPACITY, DEFAULT_DRAIN_STEP, DEFAULT_FEG, DEFAULT_FH,
    DEFAULT_FL, DEFAULT_FV, DEFAULT_GLASS_THICKNESS,
};

/// Lock accessory fitted on each opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LockType {
    /// Lock with a counter-plate on the wall.
    #[default]
    WithCounter,
    /// Lock between two glass panels.
    GlassToGlass,
}

impl LockType {
    /// Catalog material name of the lock.
    pub fn material_name(&self) -> &'static str {
        match self {
            LockType::WithCounter => "Fechadura com Contra",
            LockType::GlassToGlass => "Fechadura Vidro-Vidro",
        }
    }

    /// Slug used in the BOM line key.
    pub fn key_slug(&self) -> &'static str {
        match self {
            LockType::WithCounter => "contra",
            LockType::GlassToGlass => "vidro-vidro",
        }
    }
}

/// Trim (aparador) size in mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AparadorSize {
    #[default]
    Mm250,
    Mm350,
    Mm450,
    Mm550,
}

impl AparadorSize {
    /// Size in millimeters.
    pub fn mm(&self) -> u32 {
        match self {
            AparadorSize::Mm250 => 250,
            AparadorSize::Mm350 => 350,
            AparadorSize::Mm450 => 450,
            AparadorSize::Mm550 => 550,
        }
    }
}

impl TryFrom<u32> for AparadorSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            250 => Ok(AparadorSize::Mm250),
            350 => Ok(AparadorSize::Mm350),
            450 => Ok(AparadorSize::Mm450),
            550 => Ok(AparadorSize::Mm550),
            other => Err(format!(
                "invalid aparador size {}mm, expected 250, 350, 450 or 550",
                other
            )),
        }
    }
}

impl From<AparadorSize> for u32 {
    fn from(size: AparadorSize) -> Self {
        size.mm()
    }
}

/// Rectangular machining cut (width × height, mm).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CutSize {
    pub width: f64,
    pub height: f64,
}

impl CutSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Clearances and manufacturing parameters for a project.
///
/// Only `fl`, `fv`, `fh`, `feg` and `box_capacity` drive the layout math.
/// The cut and offset fields feed the machining checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearanceParams {
    /// Lateral clearance wall to glass, applied at both ends of a front.
    pub fl: f64,
    /// Clearance between adjacent panels.
    pub fv: f64,
    /// Total vertical clearance (top + bottom).
    pub fh: f64,
    /// Extra clearance on the pass-through front.
    pub feg: f64,
    /// Glass thickness in mm. Naming only.
    pub glass_thickness: f64,
    /// Maximum panels per output box.
    pub box_capacity: u32,
    /// Top cuts.
    pub cut_sup: CutSize,
    /// U-regulation profile cuts.
    pub cut_u: CutSize,
    /// Bottom cuts.
    pub cut_inf: CutSize,
    /// Mouth center offset subtracted from LRP.
    pub boca_offset: f64,
    /// Drain hole spacing.
    pub drain_step: f64,
    /// Trim size.
    pub aparador_size: AparadorSize,
    /// Lock accessory.
    pub lock_type: LockType,
}

impl Default for ClearanceParams {
    fn default() -> Self {
        Self {
            fl: DEFAULT_FL,
            fv: DEFAULT_FV,
            fh: DEFAULT_FH,
            feg: DEFAULT_FEG,
            glass_thickness: DEFAULT_GLASS_THICKNESS,
            box_capacity: DEFAULT_BOX_CAPACITY,
            cut_sup: CutSize::new(40.0, 33.0),
            cut_u: CutSize::new(100.0, 40.0),
            cut_inf: CutSize::new(18.0, 20.0),
            boca_offset: DEFAULT_BOCA_OFFSET,
            drain_step: DEFAULT_DRAIN_STEP,
            aparador_size: AparadorSize::default(),
            lock_type: LockType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ClearanceParams::default();
        assert_eq!(params.fl, 15.0);
        assert_eq!(params.fv, 3.0);
        assert_eq!(params.fh, 165.0);
        assert_eq!(params.feg, 5.0);
        assert_eq!(params.box_capacity, 7);
        assert_eq!(params.lock_type, LockType::WithCounter);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: ClearanceParams =
            serde_json::from_str(r#"{"fl": 20, "lock_type": "GlassToGlass"}"#).unwrap();
        assert_eq!(params.fl, 20.0);
        assert_eq!(params.fv, 3.0);
        assert_eq!(params.lock_type, LockType::GlassToGlass);
    }

    #[test]
    fn test_aparador_size_serde() {
        let size: AparadorSize = serde_json::from_str("450").unwrap();
        assert_eq!(size, AparadorSize::Mm450);
        assert_eq!(serde_json::to_string(&size).unwrap(), "450");
        assert!(serde_json::from_str::<AparadorSize>("300").is_err());
    }
}
