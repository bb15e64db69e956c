//! Project inputs and the project container.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BomItem, ClearanceParams, Dimensions, Geometry};
use crate::config::{
    DEFAULT_FINISH, DEFAULT_FRONT_A, DEFAULT_HEIGHT, DEFAULT_OPENINGS, DEFAULT_STATE,
    DEFAULT_TARGET_LEAF_WIDTH,
};

/// Everything the operator enters for one enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    pub geometry: Geometry,
    pub dimensions: Dimensions,
    /// Desired nominal panel width in mm. Rounding target only.
    pub target_leaf_width: f64,
    /// Number of openings (one lock each).
    #[serde(default = "default_openings")]
    pub openings: u32,
    #[serde(default)]
    pub params: ClearanceParams,
    /// Profile finish code.
    #[serde(default = "default_finish")]
    pub finish: String,
    /// Machining checklist state, keyed by checklist item id.
    #[serde(default)]
    pub machining_checklist: BTreeMap<String, bool>,
}

impl Default for ProjectInputs {
    fn default() -> Self {
        Self {
            geometry: Geometry::Straight,
            dimensions: Dimensions::straight(DEFAULT_FRONT_A, DEFAULT_HEIGHT),
            target_leaf_width: DEFAULT_TARGET_LEAF_WIDTH,
            openings: default_openings(),
            params: ClearanceParams::default(),
            finish: default_finish(),
            machining_checklist: BTreeMap::new(),
        }
    }
}

fn default_openings() -> u32 {
    DEFAULT_OPENINGS
}

fn default_finish() -> String {
    DEFAULT_FINISH.to_string()
}

/// A saved enclosure project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// State (UF) the job is in.
    pub state: String,
    pub inputs: ProjectInputs,
    /// Last merged and priced BOM.
    #[serde(default)]
    pub bom: Vec<BomItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// New project with default inputs.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_inputs(name, ProjectInputs::default())
    }

    /// New project with the given inputs.
    pub fn with_inputs(name: impl Into<String>, inputs: ProjectInputs) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            state: DEFAULT_STATE.to_string(),
            inputs,
            bom: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark as modified at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_defaults() {
        let project = Project::new("Nova Obra");
        assert_eq!(project.state, "SP");
        assert_eq!(project.inputs.geometry, Geometry::Straight);
        assert_eq!(project.inputs.dimensions.a, 3000.0);
        assert_eq!(project.inputs.dimensions.h, 2400.0);
        assert_eq!(project.inputs.target_leaf_width, 500.0);
        assert_eq!(project.inputs.openings, 1);
        assert_eq!(project.inputs.finish, "NF");
        assert!(project.bom.is_empty());
        assert!(Uuid::parse_str(&project.id).is_ok());
    }

    #[test]
    fn test_inputs_minimal_json() {
        let json = r#"{
            "geometry": "LShape",
            "dimensions": {"a": 3000, "b": 2000, "h": 2400},
            "target_leaf_width": 600
        }"#;
        let inputs: ProjectInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.geometry, Geometry::LShape);
        assert_eq!(inputs.dimensions.b, Some(2000.0));
        assert_eq!(inputs.dimensions.c, None);
        assert_eq!(inputs.finish, "NF");
        assert_eq!(inputs.params, ClearanceParams::default());
        assert_eq!(inputs.openings, 1);
    }

    #[test]
    fn test_explicit_zero_openings_kept() {
        let json = r#"{
            "geometry": "Straight",
            "dimensions": {"a": 3000, "h": 2400},
            "target_leaf_width": 500,
            "openings": 0
        }"#;
        let inputs: ProjectInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.openings, 0);
    }
}
