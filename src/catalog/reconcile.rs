//! Material variant reconciliation.
//!
//! Every profile needs one variant per finish and every other material needs
//! one finish-less variant. Missing ones are derived here, before BOM
//! generation runs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Finish, Material, MaterialVariant};

/// A variant that should exist but doesn't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVariant {
    pub material_id: String,
    pub finish_id: Option<String>,
    pub display_name: String,
}

impl NewVariant {
    /// Materialise with the given id.
    pub fn into_variant(self, id: String) -> MaterialVariant {
        MaterialVariant {
            id,
            material_id: self.material_id,
            finish_id: self.finish_id,
            specifications: None,
            display_name: self.display_name,
        }
    }
}

/// Compute the variants missing from `variants`.
///
/// Profiles are crossed with every finish (display name
/// "<material> - <finish code>"); other materials get a single variant named
/// after the material. Existing variants are matched on (material, finish).
pub fn missing_variants(
    materials: &[Material],
    finishes: &[Finish],
    variants: &[MaterialVariant],
) -> Vec<NewVariant> {
    let existing: HashSet<(&str, Option<&str>)> = variants
        .iter()
        .map(|v| (v.material_id.as_str(), v.finish_id.as_deref()))
        .collect();

    let mut missing = Vec::new();
    for material in materials {
        if material.requires_finish() {
            for finish in finishes {
                if !existing.contains(&(material.id.as_str(), Some(finish.id.as_str()))) {
                    missing.push(NewVariant {
                        material_id: material.id.clone(),
                        finish_id: Some(finish.id.clone()),
                        display_name: format!("{} - {}", material.name, finish.code),
                    });
                }
            }
        } else if !existing.contains(&(material.id.as_str(), None)) {
            missing.push(NewVariant {
                material_id: material.id.clone(),
                finish_id: None,
                display_name: material.name.clone(),
            });
        }
    }
    missing
}
