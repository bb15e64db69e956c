//! Opening geometry and dimensions.

use serde::{Deserialize, Serialize};

/// Shape of the balcony opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Geometry {
    /// Single straight run.
    #[default]
    Straight,
    /// Two fronts meeting at a corner.
    LShape,
    /// Three fronts.
    UShape,
}

impl Geometry {
    /// Number of fronts this geometry enumerates.
    pub fn front_count(&self) -> usize {
        match self {
            Geometry::Straight => 1,
            Geometry::LShape => 2,
            Geometry::UShape => 3,
        }
    }

    /// Whether the front at `index` is the pass-through front.
    ///
    /// Only the first front of an L or U opening is a pass-through front;
    /// a straight opening has none.
    pub fn is_pass_through(&self, index: usize) -> bool {
        matches!(self, Geometry::LShape | Geometry::UShape) && index == 0
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Geometry::Straight => write!(f, "Straight"),
            Geometry::LShape => write!(f, "L"),
            Geometry::UShape => write!(f, "U"),
        }
    }
}

/// Opening dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Front A length.
    pub a: f64,
    /// Front B length (L and U openings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    /// Front C length (U openings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    /// Opening height.
    pub h: f64,
}

impl Dimensions {
    /// Straight opening dimensions.
    pub fn straight(a: f64, h: f64) -> Self {
        Self {
            a,
            b: None,
            c: None,
            h,
        }
    }

    /// L-shaped opening dimensions.
    pub fn l_shape(a: f64, b: f64, h: f64) -> Self {
        Self {
            a,
            b: Some(b),
            c: None,
            h,
        }
    }

    /// U-shaped opening dimensions.
    pub fn u_shape(a: f64, b: f64, c: f64, h: f64) -> Self {
        Self {
            a,
            b: Some(b),
            c: Some(c),
            h,
        }
    }

    /// Front lengths enumerated for `geometry`, absent lengths as 0.
    ///
    /// Zero or negative fronts are kept here; callers skip them.
    pub fn fronts(&self, geometry: Geometry) -> Vec<f64> {
        let b = self.b.unwrap_or(0.0);
        let c = self.c.unwrap_or(0.0);
        match geometry {
            Geometry::Straight => vec![self.a],
            Geometry::LShape => vec![self.a, b],
            Geometry::UShape => vec![self.a, b, c],
        }
    }

    /// Sum of the raw front lengths for `geometry`.
    pub fn total_front_length(&self, geometry: Geometry) -> f64 {
        self.fronts(geometry).iter().sum()
    }
}

/// Display name of the front at `index`: "Front A", "Front B", ...
pub fn front_name(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    format!("Front {}", letter)
}
