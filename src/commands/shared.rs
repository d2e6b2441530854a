//! Shared helpers for commands: lookups that turn misses into `AppError`s.

use owo_colors::OwoColorize;

use crate::error_fmt::AppError;
use crate::render::truncate_to;
use crate::{Board, Notice, Task, TaskRef};

/// Max description length in confirmation messages.
const CONFIRM_MAX_LEN: usize = 60;

/// Find a task by its display number.
pub fn locate_task(board: &Board, number: usize) -> Result<TaskRef, AppError> {
    board.locate(number).ok_or_else(|| AppError::TaskNotFound {
        number,
        task_count: board.task_count(),
    })
}

/// Find a lane by name.
pub fn find_lane(board: &Board, name: &str) -> Result<usize, AppError> {
    board.lane_index(name).ok_or_else(|| AppError::LaneNotFound {
        name: name.to_string(),
        tasks_dir: board.tasks_dir().display().to_string(),
    })
}

/// One-line summary of a task for confirmation output.
pub fn task_summary(task: &Task) -> String {
    let description = truncate_to(&task.description, CONFIRM_MAX_LEN);
    match task.number {
        Some(n) => format!("{} {}", n.to_string().bright_green().bold(), description),
        None => description,
    }
}

/// Print informational notices gathered while loading.
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        println!("{}", notice.to_string().dimmed());
    }
}
