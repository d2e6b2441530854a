//! Show command - displays a single task with its full details.

use owo_colors::OwoColorize;

use super::shared::locate_task;
use crate::error_fmt::AppError;
use crate::Board;

/// Show the lane, number, description and details of one task.
pub fn show(board: &Board, number: usize) -> Result<(), AppError> {
    let loc = locate_task(board, number)?;
    let lane = &board.lanes()[loc.lane];
    let task = &lane.tasks[loc.row];

    const LABEL_WIDTH: usize = 12;

    println!(
        "{:LABEL_WIDTH$} {}",
        "Number".bold(),
        number.to_string().bright_green().bold()
    );
    println!("{:LABEL_WIDTH$} {}", "Lane".bold(), lane.name.cyan());
    println!("{:LABEL_WIDTH$} {}", "Description".bold(), task.description);

    if let Some(details) = task.details.as_deref().filter(|d| !d.is_empty()) {
        println!();
        let mut skin = termimad::MadSkin::default();
        skin.headers[0].align = termimad::Alignment::Left;
        skin.headers[1].align = termimad::Alignment::Left;
        skin.print_text(details);
    }

    Ok(())
}
