pub mod board;
pub mod commands;
pub mod error_fmt;
pub mod render;

// Re-export commonly used types from board module for convenience
pub use board::{
    config_path, Board, BoardConfig, Lane, LoadError, Notice, SettingsError, StoreError, Task,
    TaskRef,
};

use std::env;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Raised when `lanes open` can't work out which editor to launch.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no editor found: {0}")]
    NotFound(String),
}

/// Build the command that opens a lane file for hand editing.
///
/// `--editor` wins over `$EDITOR`, which wins over the platform fallback.
/// The lane file is passed as the only argument.
pub fn resolve_editor(editor: Option<&str>, lane_file: &Path) -> Result<Command, EditorError> {
    let program = editor
        .map(str::to_string)
        .or_else(|| env::var("EDITOR").ok())
        .unwrap_or_else(|| fallback_editor().to_string());

    if program.trim().is_empty() {
        return Err(EditorError::NotFound(
            "editor name is empty; set $EDITOR or use `lanes open <lane> --editor <cmd>`"
                .to_string(),
        ));
    }

    let mut cmd = Command::new(program.trim());
    cmd.arg(lane_file);
    Ok(cmd)
}

/// Editor used when neither `--editor` nor `$EDITOR` is set.
fn fallback_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "nano"
    }
}
