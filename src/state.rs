//! Application state and its pure reducer.
//!
//! All changes go through [`reduce`], which never does I/O. Saving the
//! current project is the caller's job (see [`crate::store::Autosave`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{
    BomItem, Finish, Material, MaterialVariant, PriceEntry, Project, ProjectInputs, Supplier,
};

/// Status of the last save of the current project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

/// Everything the application holds in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Id of the project being edited.
    pub current_project_id: Option<String>,
    pub projects: Vec<Project>,
    pub catalog: Catalog,
    pub save_status: SaveStatus,
}

impl AppState {
    /// The project being edited.
    pub fn current_project(&self) -> Option<&Project> {
        let id = self.current_project_id.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    fn current_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.current_project_id.clone()?;
        self.projects.iter_mut().find(|p| p.id == id)
    }
}

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace projects and catalog after loading.
    Initialize {
        projects: Vec<Project>,
        catalog: Catalog,
    },
    SetSaveStatus(SaveStatus),
    /// Add a project and make it current.
    AddProject(Project),
    SelectProject(String),
    UpdateProjectDetails {
        name: Option<String>,
        state: Option<String>,
    },
    UpdateProjectInputs(ProjectInputs),
    /// Tick or untick a machining checklist item.
    SetChecklistItem { id: String, done: bool },
    UpdateBom(Vec<BomItem>),
    UpdateBomItem(BomItem),
    AddSupplier(Supplier),
    UpdateSupplier(Supplier),
    DeleteSupplier(String),
    AddMaterial(Material),
    AddFinish(Finish),
    AddMaterialVariant(MaterialVariant),
    AddPriceEntry(PriceEntry),
    UpdatePriceEntry(PriceEntry),
    DeletePriceEntry(String),
    DeletePricesBySupplier(String),
}

impl Action {
    /// Whether this action changes the current project (and so needs saving).
    pub fn touches_project(&self) -> bool {
        matches!(
            self,
            Action::UpdateProjectDetails { .. }
                | Action::UpdateProjectInputs(_)
                | Action::SetChecklistItem { .. }
                | Action::UpdateBom(_)
                | Action::UpdateBomItem(_)
        )
    }
}

/// Apply `action` to `state`. `now` stamps project modifications.
///
/// Project actions without a current project leave the state unchanged.
pub fn reduce(mut state: AppState, action: Action, now: DateTime<Utc>) -> AppState {
    match action {
        Action::Initialize { projects, catalog } => {
            state.current_project_id = projects.first().map(|p| p.id.clone());
            state.projects = projects;
            state.catalog = catalog;
        }
        Action::SetSaveStatus(status) => state.save_status = status,
        Action::AddProject(project) => {
            state.current_project_id = Some(project.id.clone());
            state.projects.push(project);
        }
        Action::SelectProject(id) => {
            if state.projects.iter().any(|p| p.id == id) {
                state.current_project_id = Some(id);
            }
        }
        Action::UpdateProjectDetails { name, state: uf } => {
            if let Some(project) = state.current_project_mut() {
                if let Some(name) = name {
                    project.name = name;
                }
                if let Some(uf) = uf {
                    project.state = uf;
                }
                project.touch(now);
            }
        }
        Action::UpdateProjectInputs(inputs) => {
            if let Some(project) = state.current_project_mut() {
                project.inputs = inputs;
                project.touch(now);
            }
        }
        Action::SetChecklistItem { id, done } => {
            if let Some(project) = state.current_project_mut() {
                project.inputs.machining_checklist.insert(id, done);
                project.touch(now);
            }
        }
        Action::UpdateBom(bom) => {
            if let Some(project) = state.current_project_mut() {
                project.bom = bom;
                project.touch(now);
            }
        }
        Action::UpdateBomItem(item) => {
            if let Some(project) = state.current_project_mut() {
                if let Some(slot) = project.bom.iter_mut().find(|i| i.key == item.key) {
                    *slot = item;
                    project.touch(now);
                }
            }
        }
        Action::AddSupplier(supplier) => state.catalog.suppliers.push(supplier),
        Action::UpdateSupplier(supplier) => {
            replace_by_id(&mut state.catalog.suppliers, supplier, |s| &s.id)
        }
        Action::DeleteSupplier(id) => state.catalog.suppliers.retain(|s| s.id != id),
        Action::AddMaterial(material) => state.catalog.materials.push(material),
        Action::AddFinish(finish) => state.catalog.finishes.push(finish),
        Action::AddMaterialVariant(variant) => state.catalog.variants.push(variant),
        Action::AddPriceEntry(entry) => state.catalog.price_entries.push(entry),
        Action::UpdatePriceEntry(entry) => {
            replace_by_id(&mut state.catalog.price_entries, entry, |p| &p.id)
        }
        Action::DeletePriceEntry(id) => state.catalog.price_entries.retain(|p| p.id != id),
        Action::DeletePricesBySupplier(supplier_id) => state
            .catalog
            .price_entries
            .retain(|p| p.supplier_id != supplier_id),
    }
    state
}

fn replace_by_id<T>(items: &mut [T], new: T, id: impl Fn(&T) -> &String) {
    if let Some(slot) = items.iter_mut().find(|item| id(item) == id(&new)) {
        *slot = new;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn state_with_project() -> (AppState, String) {
        let project = Project::new("Obra 1");
        let id = project.id.clone();
        let state = reduce(AppState::default(), Action::AddProject(project), at(0));
        (state, id)
    }

    fn supplier(id: &str, name: &str) -> Supplier {
        Supplier {
            id: id.into(),
            name: name.into(),
            cnpj: None,
            states: vec!["SP".into()],
            contact: Default::default(),
            default_freight_per_km: None,
            default_lead_time: 7,
            active: true,
            preferred: false,
        }
    }

    // ==================== Project actions ====================

    #[test]
    fn test_add_project_becomes_current() {
        let (state, id) = state_with_project();
        assert_eq!(state.current_project().map(|p| p.id.as_str()), Some(id.as_str()));
    }

    #[test]
    fn test_initialize_selects_first_project() {
        let a = Project::new("A");
        let b = Project::new("B");
        let first = a.id.clone();
        let state = reduce(
            AppState::default(),
            Action::Initialize {
                projects: vec![a, b],
                catalog: Catalog::default(),
            },
            at(0),
        );
        assert_eq!(state.current_project_id, Some(first));
        assert_eq!(state.projects.len(), 2);
    }

    #[test]
    fn test_select_unknown_project_ignored() {
        let (state, id) = state_with_project();
        let state = reduce(state, Action::SelectProject("nope".into()), at(1));
        assert_eq!(state.current_project_id, Some(id));
    }

    #[test]
    fn test_update_inputs_stamps_time() {
        let (state, _) = state_with_project();
        let mut inputs = state.current_project().unwrap().inputs.clone();
        inputs.dimensions.h = 2500.0;

        let state = reduce(state, Action::UpdateProjectInputs(inputs), at(42));
        let project = state.current_project().unwrap();
        assert_eq!(project.inputs.dimensions.h, 2500.0);
        assert_eq!(project.updated_at, at(42));
    }

    #[test]
    fn test_update_details_partial() {
        let (state, _) = state_with_project();
        let state = reduce(
            state,
            Action::UpdateProjectDetails {
                name: None,
                state: Some("RJ".into()),
            },
            at(5),
        );
        let project = state.current_project().unwrap();
        assert_eq!(project.name, "Obra 1");
        assert_eq!(project.state, "RJ");
    }

    #[test]
    fn test_checklist_item() {
        let (state, _) = state_with_project();
        let state = reduce(
            state,
            Action::SetChecklistItem {
                id: "cutSup".into(),
                done: true,
            },
            at(5),
        );
        let checklist = &state.current_project().unwrap().inputs.machining_checklist;
        assert_eq!(checklist.get("cutSup"), Some(&true));
    }

    #[test]
    fn test_update_bom_item_by_key() {
        let (state, _) = state_with_project();
        let line = BomItem::new("kit-pivo", "Kit pivô", Category::Accessory, 2.0, "kit", "v1");
        let state = reduce(state, Action::UpdateBom(vec![line.clone()]), at(1));

        let mut edited = line;
        edited.supplier_id = Some("S1".into());
        let state = reduce(state, Action::UpdateBomItem(edited), at(2));

        let bom = &state.current_project().unwrap().bom;
        assert_eq!(bom.len(), 1);
        assert_eq!(bom[0].supplier_id.as_deref(), Some("S1"));
    }

    #[test]
    fn test_project_action_without_current_is_noop() {
        let state = reduce(
            AppState::default(),
            Action::UpdateBom(vec![]),
            at(1),
        );
        assert_eq!(state, AppState::default());
    }

    // ==================== Catalog actions ====================

    #[test]
    fn test_supplier_lifecycle() {
        let state = reduce(AppState::default(), Action::AddSupplier(supplier("s1", "Alumax")), at(0));
        let state = reduce(state, Action::UpdateSupplier(supplier("s1", "Alumax Ltda")), at(0));
        assert_eq!(state.catalog.suppliers[0].name, "Alumax Ltda");

        let state = reduce(state, Action::DeleteSupplier("s1".into()), at(0));
        assert!(state.catalog.suppliers.is_empty());
    }

    #[test]
    fn test_delete_prices_by_supplier() {
        let entry = |id: &str, supplier: &str| PriceEntry {
            id: id.into(),
            supplier_id: supplier.into(),
            material_variant_id: "v1".into(),
            unit_cost: 1.0,
            sale_unit: "m".into(),
            moq: None,
            lead_time: 0,
            valid_from: "2025-01-01".parse().unwrap(),
            valid_to: None,
            active: true,
            preferred: false,
        };
        let mut state = AppState::default();
        for (id, s) in [("p1", "s1"), ("p2", "s2"), ("p3", "s1")] {
            state = reduce(state, Action::AddPriceEntry(entry(id, s)), at(0));
        }

        let state = reduce(state, Action::DeletePricesBySupplier("s1".into()), at(0));
        let ids: Vec<_> = state.catalog.price_entries.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);

        let state = reduce(state, Action::DeletePriceEntry("p2".into()), at(0));
        assert!(state.catalog.price_entries.is_empty());
    }

    #[test]
    fn test_touches_project() {
        assert!(Action::UpdateBom(vec![]).touches_project());
        assert!(!Action::DeleteSupplier("s1".into()).touches_project());
        assert!(!Action::SetSaveStatus(SaveStatus::Saving).touches_project());
    }
}
