//! Add command - appends a task to a lane.

use owo_colors::OwoColorize;

use super::shared::{find_lane, task_summary};
use crate::error_fmt::AppError;
use crate::{Board, Task};

/// Append a new task to the end of `lane`.
pub fn add(
    board: &mut Board,
    lane: &str,
    description: &str,
    details: Option<String>,
) -> Result<(), AppError> {
    let lane_idx = find_lane(board, lane)?;

    board.push_task(lane_idx, Task::new(description, details));
    board.save_lane(lane_idx)?;
    board.renumber();

    let lane = &board.lanes()[lane_idx];
    if let Some(task) = lane.tasks.last() {
        println!("{} {} to {}", "added:".green(), task_summary(task), lane.name.cyan());
    }
    Ok(())
}
