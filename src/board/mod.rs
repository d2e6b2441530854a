//! Core data model for the lane board.
//!
//! This module contains:
//! - `Lane` / `Task` - the records read from lane files
//! - `Board` - the loaded, numbered board and its mutation helpers
//! - `BoardConfig` - explicit configuration replacing global constants
//! - Diagonal numbering and persistence back to flat files

pub(crate) mod lane;
pub(crate) mod numbering;
pub(crate) mod settings;
mod store;

use std::path::{Path, PathBuf};

pub use lane::{format_line, parse_line, Lane, Task};
pub use numbering::number_diagonally;
pub use settings::{config_path, BoardConfig, SettingsError};
pub use store::StoreError;

/// Name of the reserved entry holding the explicit lane order.
pub const ORDERING_FILE: &str = "lanes";

/// Errors that stop the board from loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("lanes file found, but contains unknown lane name: {name}")]
    UnknownLane { name: String, ordering_file: PathBuf },

    #[error("task directory exists but isn't a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Informational, non-fatal messages produced while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The task directory did not exist and was created empty.
    CreatedDir(PathBuf),
    /// No ordering file was found; lanes are sorted alphabetically.
    DefaultOrdering,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::CreatedDir(path) => write!(f, "Created task directory in {}", path.display()),
            Notice::DefaultOrdering => write!(f, "No lanes file found, sorting lanes alphabetically"),
        }
    }
}

/// Location of a task on the board: lane index and row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRef {
    pub lane: usize,
    pub row: usize,
}

/// The loaded board.
///
/// Lanes are in display order and every task carries its diagonal number.
/// Mutations change the in-memory lanes; `save_lane` and friends write the
/// affected files back, and `renumber` brings the numbers up to date.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    lanes: Vec<Lane>,
    /// Names listed in the ordering file, or `None` when it doesn't exist.
    ordering: Option<Vec<String>>,
    notices: Vec<Notice>,
}

impl Board {
    /// Load the board described by `config`.
    ///
    /// Creates the task directory when it is missing. Fails if the ordering
    /// file names a lane that has no entry in the task directory.
    pub fn load(config: BoardConfig) -> Result<Self, LoadError> {
        let mut notices = Vec::new();
        if ensure_dir(&config.tasks_dir)? {
            notices.push(Notice::CreatedDir(config.tasks_dir.clone()));
        }

        let entries = discover_entries(&config.tasks_dir)?;
        let ordering = read_ordering(&config.ordering_path(), &entries)?;

        let names = match &ordering {
            Some(names) => names.clone(),
            None => {
                notices.push(Notice::DefaultOrdering);
                let mut sorted = entries;
                sorted.sort();
                sorted
            }
        };

        let mut lanes = Vec::new();
        for name in names {
            let path = config.lane_path(&name);
            if path.is_dir() {
                tracing::debug!(lane = %name, "skipping sub-directory");
                continue;
            }
            let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            lanes.push(Lane::parse(name, &content, config.separator));
        }

        let total = number_diagonally(&mut lanes);
        tracing::debug!(lanes = lanes.len(), tasks = total, "board loaded");

        Ok(Self {
            config,
            lanes,
            ordering,
            notices,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn tasks_dir(&self) -> &Path {
        &self.config.tasks_dir
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Total number of tasks across all lanes.
    pub fn task_count(&self) -> usize {
        self.lanes.iter().map(|l| l.tasks.len()).sum()
    }

    /// Reassign diagonal numbers after the lanes changed.
    pub fn renumber(&mut self) -> usize {
        for task in self.lanes.iter_mut().flat_map(|l| l.tasks.iter_mut()) {
            task.number = None;
        }
        number_diagonally(&mut self.lanes)
    }

    /// Whether lane order comes from the ordering file.
    pub fn has_ordering_file(&self) -> bool {
        self.ordering.is_some()
    }

    pub fn lane_index(&self, name: &str) -> Option<usize> {
        self.lanes.iter().position(|l| l.name == name)
    }

    pub fn lane(&self, name: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.name == name)
    }

    /// Find the task carrying a display number.
    pub fn locate(&self, number: usize) -> Option<TaskRef> {
        self.lanes.iter().enumerate().find_map(|(lane, l)| {
            l.position_of(number).map(|row| TaskRef { lane, row })
        })
    }

    /// Look up a task and its lane by display number.
    pub fn task(&self, number: usize) -> Option<(&Lane, &Task)> {
        let loc = self.locate(number)?;
        let lane = &self.lanes[loc.lane];
        Some((lane, &lane.tasks[loc.row]))
    }

    /// Whether any entry (lane file, sub-directory or reserved file) uses `name`.
    pub fn entry_exists(&self, name: &str) -> bool {
        self.config.lane_path(name).exists()
    }

    /// Append a task to the end of a lane.
    pub fn push_task(&mut self, lane: usize, task: Task) {
        self.lanes[lane].tasks.push(task);
    }

    pub fn task_mut(&mut self, loc: TaskRef) -> &mut Task {
        &mut self.lanes[loc.lane].tasks[loc.row]
    }

    pub fn remove_task(&mut self, loc: TaskRef) -> Task {
        self.lanes[loc.lane].tasks.remove(loc.row)
    }

    /// Write one lane back to its file.
    pub fn save_lane(&self, lane: usize) -> Result<(), StoreError> {
        store::write_lane(&self.config, &self.lanes[lane])
    }

    /// Create an empty lane, appending it to the ordering file if there is one.
    pub fn create_lane(&mut self, name: &str) -> Result<(), StoreError> {
        let lane = Lane::new(name);
        store::write_lane(&self.config, &lane)?;

        match &mut self.ordering {
            Some(ordering) => {
                ordering.push(name.to_string());
                store::write_ordering(&self.config, ordering)?;
                self.lanes.push(lane);
            }
            None => {
                let at = self.lanes.partition_point(|l| l.name.as_str() < name);
                self.lanes.insert(at, lane);
            }
        }
        Ok(())
    }

    /// Delete a lane file and drop it from the ordering file.
    pub fn delete_lane(&mut self, lane: usize) -> Result<Lane, StoreError> {
        let removed = self.lanes.remove(lane);
        store::remove_lane(&self.config, &removed.name)?;

        if let Some(ordering) = &mut self.ordering {
            ordering.retain(|n| n != &removed.name);
            store::write_ordering(&self.config, ordering)?;
        }
        Ok(removed)
    }
}

/// Create the task directory if needed. Returns true if it was created.
fn ensure_dir(dir: &Path) -> Result<bool, LoadError> {
    if dir.is_dir() {
        return Ok(false);
    }
    if dir.exists() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    std::fs::create_dir_all(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "created task directory");
    Ok(true)
}

/// Names of all entries in the task directory except the ordering file.
fn discover_entries(dir: &Path) -> Result<Vec<String>, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        match entry.file_name().into_string() {
            Ok(name) if name == ORDERING_FILE => {}
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!(entry = ?raw, "skipping non-UTF-8 entry"),
        }
    }
    Ok(names)
}

/// Read the ordering file, checking every listed name against `entries`.
///
/// Returns `None` when there is no ordering file.
fn read_ordering(path: &Path, entries: &[String]) -> Result<Option<Vec<String>>, LoadError> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for line in content.lines() {
        let name = line.trim();
        // Blank lines are separators, not a lane named "", so a stray empty
        // line in a hand-edited ordering file doesn't abort the load.
        if name.is_empty() {
            continue;
        }
        if !entries.iter().any(|e| e == name) {
            return Err(LoadError::UnknownLane {
                name: name.to_string(),
                ordering_file: path.to_path_buf(),
            });
        }
        names.push(name.to_string());
    }
    Ok(Some(names))
}
