//! Move command - moves a task to the end of another lane.

use owo_colors::OwoColorize;

use super::shared::{find_lane, locate_task, task_summary};
use crate::error_fmt::AppError;
use crate::Board;

/// Move the task with the given display number to the end of `lane`.
///
/// Moving a task into its own lane sends it to the bottom.
pub fn move_task(board: &mut Board, number: usize, lane: &str) -> Result<(), AppError> {
    let loc = locate_task(board, number)?;
    let target = find_lane(board, lane)?;

    let task = board.remove_task(loc);
    board.push_task(target, task);

    board.save_lane(loc.lane)?;
    if target != loc.lane {
        board.save_lane(target)?;
    }
    board.renumber();

    let from = &board.lanes()[loc.lane].name;
    let to = &board.lanes()[target];
    if let Some(task) = to.tasks.last() {
        println!(
            "{} {} {} {} {}",
            "moved:".yellow(),
            task_summary(task),
            from.cyan(),
            "→".dimmed(),
            to.name.cyan()
        );
    }
    Ok(())
}
