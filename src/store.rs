//! Project persistence.
//!
//! Projects are stored one JSON file per project. Writes go to a `.tmp`
//! sibling first and are renamed into place.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::AUTOSAVE_DEBOUNCE_MS;
use crate::error::{Result, SacadaError};
use crate::model::{BomItem, Project, ProjectInputs};
use crate::state::SaveStatus;

/// Somewhere projects can be loaded from and saved to.
pub trait ProjectStore {
    /// All projects, most recently updated first.
    fn load_all(&self) -> Result<Vec<Project>>;

    /// One project by id.
    fn load(&self, id: &str) -> Result<Project>;

    /// Insert or replace a project.
    fn upsert(&self, project: &Project) -> Result<()>;
}

/// On-disk shape of a project. Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub state: String,
    pub inputs: ProjectInputs,
    #[serde(default)]
    pub bom: Vec<BomItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            state: project.state.clone(),
            inputs: project.inputs.clone(),
            bom: project.bom.clone(),
            created_at: project.created_at.to_rfc3339(),
            updated_at: project.updated_at.to_rfc3339(),
        }
    }
}

impl ProjectRecord {
    /// Convert back to a project. `path` is only used in error messages.
    pub fn into_project(self, path: &Path) -> Result<Project> {
        let created_at = parse_timestamp(&self.created_at, path)?;
        let updated_at = parse_timestamp(&self.updated_at, path)?;
        Ok(Project {
            id: self.id,
            name: self.name,
            state: self.state,
            inputs: self.inputs,
            bom: self.bom,
            created_at,
            updated_at,
        })
    }
}

fn parse_timestamp(value: &str, path: &Path) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| SacadaError::Storage {
            path: path.to_path_buf(),
            message: format!("invalid timestamp '{}': {}", value, e),
        })
}

/// Directory of `<id>.json` project files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| SacadaError::Storage {
            path: dir.clone(),
            message: format!("cannot create store directory: {}", e),
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    fn read(&self, path: &Path) -> Result<Project> {
        let content = fs::read_to_string(path)?;
        let record: ProjectRecord = serde_json::from_str(&content)?;
        record.into_project(path)
    }
}

impl ProjectStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.read(&path) {
                Ok(project) => projects.push(project),
                Err(e) => warn!("Skipping unreadable project {}: {}", path.display(), e),
            }
        }
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        info!("Loaded {} project(s) from {}", projects.len(), self.dir.display());
        Ok(projects)
    }

    fn load(&self, id: &str) -> Result<Project> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(SacadaError::ProjectNotFound { id: id.to_string() });
        }
        self.read(&path)
    }

    fn upsert(&self, project: &Project) -> Result<()> {
        let path = self.path_for(&project.id);
        let json = serde_json::to_string_pretty(&ProjectRecord::from(project))?;
        let tmp_path = path.with_extension("json.tmp");

        let storage_err = |path: &Path, what: &str, e: std::io::Error| SacadaError::Storage {
            path: path.to_path_buf(),
            message: format!("{}: {}", what, e),
        };

        let mut tmp_file =
            File::create(&tmp_path).map_err(|e| storage_err(&tmp_path, "create temp file", e))?;
        tmp_file
            .write_all(json.as_bytes())
            .map_err(|e| storage_err(&tmp_path, "write temp file", e))?;
        tmp_file
            .sync_all()
            .map_err(|e| storage_err(&tmp_path, "sync temp file", e))?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            storage_err(&path, "rename to final", e)
        })?;

        debug!("Saved project {} to {}", project.id, path.display());
        Ok(())
    }
}

/// Debounced save of the current project.
///
/// The caller reports edits with [`Autosave::mark_dirty`] and polls
/// [`Autosave::save_if_due`]; a save happens once no edit has arrived for the
/// debounce window. Time is passed in so the logic stays testable.
#[derive(Debug, Clone)]
pub struct Autosave {
    debounce: Duration,
    last_change: Option<Instant>,
    status: SaveStatus,
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(Duration::from_millis(AUTOSAVE_DEBOUNCE_MS))
    }
}

impl Autosave {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            last_change: None,
            status: SaveStatus::Idle,
        }
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    /// Record an edit at `now`, restarting the debounce window.
    pub fn mark_dirty(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// Whether the debounce window has elapsed since the last edit.
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_change
            .map_or(false, |t| now.saturating_duration_since(t) >= self.debounce)
    }

    /// Save `project` if due. Returns whether a save was attempted.
    ///
    /// A failed save sets the status to `Error` and returns the error; the
    /// next edit arms the timer again.
    pub fn save_if_due<S: ProjectStore + ?Sized>(
        &mut self,
        now: Instant,
        store: &S,
        project: &Project,
    ) -> Result<bool> {
        if !self.is_due(now) {
            return Ok(false);
        }
        self.last_change = None;
        self.status = SaveStatus::Saving;
        match store.upsert(project) {
            Ok(()) => {
                self.status = SaveStatus::Saved;
                Ok(true)
            }
            Err(e) => {
                warn!("Autosave of project {} failed: {}", project.id, e);
                self.status = SaveStatus::Error;
                Err(e)
            }
        }
    }
}
