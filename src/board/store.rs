//! Writing lanes and the ordering file back to the task directory.

use std::path::{Path, PathBuf};

use super::lane::Lane;
use super::settings::BoardConfig;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub(super) fn write_lane(config: &BoardConfig, lane: &Lane) -> Result<(), StoreError> {
    let path = config.lane_path(&lane.name);
    std::fs::write(&path, lane.to_file_content(config.separator))
        .map_err(|e| StoreError::io(&path, e))?;
    tracing::debug!(lane = %lane.name, tasks = lane.tasks.len(), "wrote lane");
    Ok(())
}

pub(super) fn write_ordering(config: &BoardConfig, names: &[String]) -> Result<(), StoreError> {
    let path = config.ordering_path();
    let mut content = names.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    std::fs::write(&path, content).map_err(|e| StoreError::io(&path, e))?;
    tracing::debug!(lanes = names.len(), "wrote ordering file");
    Ok(())
}

pub(super) fn remove_lane(config: &BoardConfig, name: &str) -> Result<(), StoreError> {
    let path = config.lane_path(name);
    std::fs::remove_file(&path).map_err(|e| StoreError::io(&path, e))?;
    tracing::debug!(lane = %name, "removed lane");
    Ok(())
}
