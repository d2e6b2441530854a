//! Lane commands - create, remove and list lanes.

use owo_colors::OwoColorize;

use super::shared::find_lane;
use crate::board::ORDERING_FILE;
use crate::error_fmt::AppError;
use crate::Board;

/// Check that `name` can be used as a lane file name.
pub fn validate_lane_name(name: &str) -> Result<(), AppError> {
    let invalid = |reason: &'static str| -> Result<(), AppError> {
        Err(AppError::InvalidLaneName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("Lane names cannot be empty.");
    }
    if name.trim() != name {
        return invalid("Lane names cannot start or end with whitespace.");
    }
    if name == ORDERING_FILE {
        return invalid("'lanes' is reserved for the lane ordering file.");
    }
    if name == "." || name == ".." {
        return invalid("Lane names cannot be '.' or '..'.");
    }
    if name.contains(['/', '\\']) {
        return invalid("Lane names cannot contain path separators.");
    }
    if name.contains(['\n', '\r']) {
        return invalid("Lane names must fit on a single line.");
    }
    Ok(())
}

/// Create a new, empty lane.
pub fn add_lane(board: &mut Board, name: &str) -> Result<(), AppError> {
    validate_lane_name(name)?;
    if board.entry_exists(name) {
        return Err(AppError::LaneExists(name.to_string()));
    }

    board.create_lane(name)?;

    println!("{} {}", "created lane:".green(), name.cyan());
    Ok(())
}

/// Remove a lane. Refuses lanes that still hold tasks unless `force` is set.
pub fn remove_lane(board: &mut Board, name: &str, force: bool) -> Result<(), AppError> {
    let idx = find_lane(board, name)?;
    let count = board.lanes()[idx].tasks.len();
    if count > 0 && !force {
        return Err(AppError::LaneNotEmpty {
            name: name.to_string(),
            count,
        });
    }

    board.delete_lane(idx)?;
    board.renumber();

    println!("{} {}", "removed lane:".red(), name.cyan());
    Ok(())
}

/// Print lane names in display order with their task counts.
pub fn list_lanes(board: &Board) {
    if board.lanes().is_empty() {
        println!("No lanes found");
        return;
    }

    let max_name_len = board
        .lanes()
        .iter()
        .map(|l| l.name.chars().count())
        .max()
        .unwrap_or(0);

    for lane in board.lanes() {
        let count = lane.tasks.len();
        let noun = if count == 1 { "task" } else { "tasks" };
        println!(
            "{}  {}",
            format!("{:max_name_len$}", lane.name).cyan(),
            format!("{} {}", count, noun).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardConfig;
    use tempfile::TempDir;

    fn board_in(temp: &TempDir) -> Board {
        Board::load(BoardConfig::default().with_tasks_dir(temp.path())).unwrap()
    }

    #[test]
    fn test_validate_lane_name() {
        assert!(validate_lane_name("Todo").is_ok());
        assert!(validate_lane_name("In progress").is_ok());

        for bad in ["", " Todo", "lanes", ".", "..", "a/b", "a\\b", "two\nlines"] {
            let err = validate_lane_name(bad).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidLaneName { .. }),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_add_lane_rejects_existing_entry() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("Todo"), "").unwrap();
        std::fs::create_dir(temp.path().join("archive")).unwrap();
        let mut board = board_in(&temp);

        assert!(matches!(
            add_lane(&mut board, "Todo").unwrap_err(),
            AppError::LaneExists(_)
        ));
        assert!(matches!(
            add_lane(&mut board, "archive").unwrap_err(),
            AppError::LaneExists(_)
        ));
    }

    #[test]
    fn test_remove_non_empty_lane_needs_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("Todo"), "a\nb\n").unwrap();
        let mut board = board_in(&temp);

        let err = remove_lane(&mut board, "Todo", false).unwrap_err();
        assert!(matches!(err, AppError::LaneNotEmpty { count: 2, .. }));
        assert!(temp.path().join("Todo").exists());

        remove_lane(&mut board, "Todo", true).unwrap();
        assert!(!temp.path().join("Todo").exists());
    }

    #[test]
    fn test_remove_unknown_lane() {
        let temp = TempDir::new().unwrap();
        let mut board = board_in(&temp);

        let err = remove_lane(&mut board, "Nope", true).unwrap_err();
        assert!(matches!(err, AppError::LaneNotFound { ref name, .. } if name == "Nope"));
    }
}
