//! Open command - edits a lane file directly in the user's editor.

use super::shared::find_lane;
use crate::error_fmt::{AppError, IoResultExt};
use crate::{resolve_editor, Board};

/// Open the file backing `lane` in an editor and wait for it to exit.
pub fn open(board: &Board, lane: &str, editor: Option<&str>) -> Result<(), AppError> {
    let idx = find_lane(board, lane)?;
    let path = board.config().lane_path(&board.lanes()[idx].name);

    let mut cmd = resolve_editor(editor, &path)?;
    let program = cmd.get_program().to_string_lossy().to_string();
    tracing::debug!(editor = %program, file = %path.display(), "opening lane file");

    let status = cmd
        .status()
        .with_context(&format!("failed to launch editor '{}'", program))?;
    if !status.success() {
        return Err(AppError::EditorFailed(program));
    }
    Ok(())
}
