//! Delete command - removes a task from its lane.

use owo_colors::OwoColorize;

use super::shared::{locate_task, task_summary};
use crate::error_fmt::AppError;
use crate::Board;

/// Remove the task with the given display number.
pub fn delete(board: &mut Board, number: usize) -> Result<(), AppError> {
    let loc = locate_task(board, number)?;

    let task = board.remove_task(loc);
    board.save_lane(loc.lane)?;
    board.renumber();

    println!(
        "{} {} from {}",
        "deleted:".red(),
        task_summary(&task),
        board.lanes()[loc.lane].name.cyan()
    );
    Ok(())
}
