//! Edit command - changes a task's description or details in place.

use owo_colors::OwoColorize;

use super::shared::{locate_task, task_summary};
use crate::error_fmt::AppError;
use crate::{Board, Task};

/// Requested changes to a single task.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub description: Option<String>,
    pub details: Option<String>,
    pub clear_details: bool,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.details.is_none() && !self.clear_details
    }

    /// Apply the changes; the display number is left untouched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(description) = &self.description {
            task.description = description.trim().to_string();
        }
        if self.clear_details {
            task.details = None;
        }
        if let Some(details) = &self.details {
            task.details = Some(details.trim().to_string());
        }
    }
}

/// Edit the task with the given display number.
pub fn edit(board: &mut Board, number: usize, changes: &TaskEdit) -> Result<(), AppError> {
    if changes.is_empty() {
        return Err(AppError::NoChangesProvided);
    }
    let loc = locate_task(board, number)?;

    changes.apply(board.task_mut(loc));
    board.save_lane(loc.lane)?;

    let lane = &board.lanes()[loc.lane];
    println!(
        "{} {} in {}",
        "updated:".green(),
        task_summary(&lane.tasks[loc.row]),
        lane.name.cyan()
    );
    Ok(())
}
