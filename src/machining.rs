//! Machining checklist for profile cuts and drilling.
//!
//! None of this feeds the layout math. It gives the shop floor the cut sizes
//! and offsets to tick off per project.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::rounding::round2;
use crate::config::{RIVET_FIRST_OFFSET_MM, RIVET_STEP_MM};
use crate::model::{CalculationResult, ClearanceParams};

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    /// Stable id, also the key in the project's checklist state.
    pub id: &'static str,
    pub label: String,
    pub done: bool,
}

/// Build the checklist from the params and the saved ticked state.
pub fn checklist(params: &ClearanceParams, state: &BTreeMap<String, bool>) -> Vec<ChecklistItem> {
    let entries = [
        (
            "cutSup",
            format!(
                "Top cuts: {}×{}mm",
                params.cut_sup.width, params.cut_sup.height
            ),
        ),
        (
            "cutU",
            format!(
                "U-regulation cuts: {}×{}mm",
                params.cut_u.width, params.cut_u.height
            ),
        ),
        (
            "cutInf",
            format!(
                "Bottom cuts: {}×{}mm",
                params.cut_inf.width, params.cut_inf.height
            ),
        ),
        (
            "bocaOffset",
            format!("Mouth center = LRP - {}mm", params.boca_offset),
        ),
        (
            "drenos",
            format!("Drains every {}mm", params.drain_step),
        ),
        (
            "rebites",
            format!(
                "Rivets every {}mm (first at {}mm from the wall)",
                RIVET_STEP_MM, RIVET_FIRST_OFFSET_MM
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(id, label)| ChecklistItem {
            id,
            label,
            done: state.get(id).copied().unwrap_or(false),
        })
        .collect()
}

/// Mouth center position on a panel of the given front, mm.
pub fn mouth_center(result: &CalculationResult, params: &ClearanceParams) -> f64 {
    round2(result.lrp - params.boca_offset)
}

/// Whether every checklist item is ticked.
pub fn is_complete(items: &[ChecklistItem]) -> bool {
    items.iter().all(|item| item.done)
}
