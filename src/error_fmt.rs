use std::fmt;
use std::io;
use std::path::Path;

use owo_colors::OwoColorize;

use crate::board::{LoadError, SettingsError, StoreError};
use crate::EditorError;

/// Application error with context for actionable error messages.
#[derive(Debug)]
pub enum AppError {
    /// Loading the board failed
    Load(LoadError),
    /// Settings file could not be read or is invalid
    Settings { path: String, source: SettingsError },
    /// Writing a lane or the ordering file failed
    Store(StoreError),
    /// IO error with context
    Io { context: String, source: io::Error },
    /// No task carries the given number
    TaskNotFound { number: usize, task_count: usize },
    /// No lane with the given name
    LaneNotFound { name: String, tasks_dir: String },
    /// An entry with this name already exists in the task directory
    LaneExists(String),
    /// Lane name can't be used as a file name
    InvalidLaneName { name: String, reason: &'static str },
    /// Lane still holds tasks and --force wasn't given
    LaneNotEmpty { name: String, count: usize },
    /// No changes provided to edit command
    NoChangesProvided,
    /// Editor resolution error
    Editor(EditorError),
    /// Editor exited unsuccessfully
    EditorFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Load(source) => write!(f, "{}", format_load_error(source)),
            AppError::Settings { path, source } => {
                write!(f, "{}", format_settings_error(path, source))
            }
            AppError::Store(source) => write!(f, "{}", format_cli_error(&source.to_string())),
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
            AppError::TaskNotFound { number, task_count } => {
                write!(f, "{}", format_task_not_found(*number, *task_count))
            }
            AppError::LaneNotFound { name, tasks_dir } => {
                write!(f, "{}", format_lane_not_found(name, tasks_dir))
            }
            AppError::LaneExists(name) => write!(f, "{}", format_lane_exists(name)),
            AppError::InvalidLaneName { name, reason } => {
                write!(f, "{}", format_invalid_lane_name(name, reason))
            }
            AppError::LaneNotEmpty { name, count } => {
                write!(f, "{}", format_lane_not_empty(name, *count))
            }
            AppError::NoChangesProvided => write!(f, "{}", format_no_changes_provided()),
            AppError::Editor(source) => write!(f, "{}", format_editor_error(source)),
            AppError::EditorFailed(editor) => write!(
                f,
                "{}",
                format_cli_error(&format!("editor '{}' exited with an error", editor))
            ),
        }
    }
}

impl std::error::Error for AppError {}

/// Extension trait for adding context to IO errors
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Io {
            context: context.to_string(),
            source,
        })
    }
}

/// Extension trait for attaching the settings path to settings errors
pub trait SettingsResultExt<T> {
    fn with_path(self, path: &Path) -> Result<T, AppError>;
}

impl<T> SettingsResultExt<T> for Result<T, SettingsError> {
    fn with_path(self, path: &Path) -> Result<T, AppError> {
        self.map_err(|source| AppError::Settings {
            path: path.display().to_string(),
            source,
        })
    }
}

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}

fn format_load_error(error: &LoadError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        LoadError::UnknownLane {
            name,
            ordering_file,
        } => {
            let lane_file = ordering_file.with_file_name(name).display().to_string();
            let ordering_file = ordering_file.display().to_string();
            out.push_str(&format!(
                "lanes file found, but contains unknown lane name: '{}'\n",
                name.yellow()
            ));
            out.push('\n');
            out.push_str(&format!(
                "  {}\n",
                format!("Every line of {} must name a file next to it.", ordering_file).dimmed()
            ));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    1. Check the spelling of '{}' in {}\n",
                name,
                ordering_file.cyan()
            ));
            out.push_str(&format!(
                "    2. Create the lane file: {}\n",
                format!("touch {}", lane_file).cyan()
            ));
            out.push_str("    3. Remove the line from the lanes file\n");
        }
        LoadError::NotADirectory { path } => {
            out.push_str(&format!(
                "task directory exists but isn't a directory: {}\n",
                path.display().to_string().yellow()
            ));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str("    1. Move the file out of the way\n");
            out.push_str(&format!(
                "    2. Use a different directory: {}\n",
                "lanes --dir /path/to/tasks".cyan()
            ));
        }
        LoadError::Io { path, source } => {
            out.push_str("failed to load board\n");
            out.push_str(&format!(
                "  {} {}: {}\n",
                "•".red(),
                path.display().to_string().cyan(),
                source
            ));
        }
    }

    out
}

fn format_settings_error(path: &str, error: &SettingsError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("failed to load {}\n", path.yellow()));
    out.push_str(&format!("  {} {}\n", "•".red(), error));

    out
}

fn format_task_not_found(number: usize, task_count: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("task {} not found\n", number.to_string().yellow()));
    out.push('\n');
    let range = if task_count == 0 {
        "The board has no tasks.".to_string()
    } else {
        format!("Task numbers on this board run from 1 to {}.", task_count)
    };
    out.push_str(&format!("  {}\n", range.dimmed()));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str(&format!(
        "    1. Check the current numbers: {}\n",
        "lanes".cyan()
    ));
    out.push_str("    2. Numbers shift after every change, so look them up again\n");

    out
}

fn format_lane_not_found(name: &str, tasks_dir: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("lane '{}' not found\n", name.yellow()));
    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        format!("No lane file named '{}' exists in {}/", name, tasks_dir).dimmed()
    ));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str("    1. Check the spelling of the lane name (names are case-sensitive)\n");
    out.push_str(&format!("    2. List lanes: {}\n", "lanes lane list".cyan()));
    out.push_str(&format!(
        "    3. Create the lane: {}\n",
        format!("lanes lane add {}", name).cyan()
    ));

    out
}

fn format_lane_exists(name: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("lane '{}' already exists\n", name.yellow()));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str("    Choose a different lane name\n");

    out
}

fn format_invalid_lane_name(name: &str, reason: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("invalid lane name '{}'\n", name.yellow()));
    out.push('\n');
    out.push_str(&format!("  {}\n", reason.dimmed()));

    out
}

fn format_lane_not_empty(name: &str, count: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!(
        "lane '{}' still has {} task(s)\n",
        name.yellow(),
        count
    ));
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str("    1. Move or remove the tasks first\n");
    out.push_str(&format!(
        "    2. Delete the lane anyway: {}\n",
        format!("lanes lane rm {} --force", name).cyan()
    ));

    out
}

fn format_no_changes_provided() -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str("no changes provided\n");
    out.push('\n');
    out.push_str(&format!("  {}:\n", "To fix this".bold()));
    out.push_str(&format!(
        "    1. Change the description: {}\n",
        "lanes edit 3 --description \"New text\"".cyan()
    ));
    out.push_str(&format!(
        "    2. Change the details: {}\n",
        "lanes edit 3 --details \"More context\"".cyan()
    ));
    out.push_str(&format!(
        "    3. Drop the details: {}\n",
        "lanes edit 3 --clear-details".cyan()
    ));

    out
}

fn format_editor_error(error: &EditorError) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        EditorError::NotFound(msg) => {
            out.push_str(&format!("{}\n", msg));
            out.push('\n');
            out.push_str(&format!("  {}\n", "No text editor could be resolved.".dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    1. Set the {} environment variable: {}\n",
                "$EDITOR".cyan(),
                "export EDITOR=vim".cyan()
            ));
            out.push_str(&format!(
                "    2. Pass an editor explicitly: {}\n",
                "lanes open Todo --editor vim".cyan()
            ));
        }
    }

    out
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Load(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl From<EditorError> for AppError {
    fn from(e: EditorError) -> Self {
        AppError::Editor(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn strip_ansi(s: &str) -> String {
        let re = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn test_format_unknown_lane() {
        let err = AppError::Load(LoadError::UnknownLane {
            name: "Backlog".to_string(),
            ordering_file: PathBuf::from("tasks/lanes"),
        });
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.starts_with("error:"));
        assert!(stripped.contains("unknown lane name: 'Backlog'"));
        assert!(stripped.contains("tasks/lanes"));
        assert!(stripped.contains("touch tasks/Backlog"));
        assert!(stripped.contains("To fix this"));
    }

    #[test]
    fn test_format_not_a_directory() {
        let err = AppError::Load(LoadError::NotADirectory {
            path: PathBuf::from("tasks"),
        });
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("isn't a directory: tasks"));
        assert!(stripped.contains("--dir"));
    }

    #[test]
    fn test_format_task_not_found() {
        let err = AppError::TaskNotFound {
            number: 42,
            task_count: 7,
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("error:"));
        assert!(stripped.contains("task 42 not found"));
        assert!(stripped.contains("from 1 to 7"));
        assert!(stripped.contains("To fix this"));
    }

    #[test]
    fn test_format_task_not_found_on_empty_board() {
        let err = AppError::TaskNotFound {
            number: 1,
            task_count: 0,
        };
        assert!(strip_ansi(&err.to_string()).contains("no tasks"));
    }

    #[test]
    fn test_format_lane_not_found() {
        let err = AppError::LaneNotFound {
            name: "Review".to_string(),
            tasks_dir: "tasks".to_string(),
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("lane 'Review' not found"));
        assert!(stripped.contains("tasks/"));
        assert!(stripped.contains("lanes lane add Review"));
    }

    #[test]
    fn test_format_lane_not_empty() {
        let err = AppError::LaneNotEmpty {
            name: "Todo".to_string(),
            count: 3,
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("still has 3 task(s)"));
        assert!(stripped.contains("lanes lane rm Todo --force"));
    }

    #[test]
    fn test_format_settings_error() {
        let err = AppError::Settings {
            path: "config.yml".to_string(),
            source: SettingsError::WidthTooSmall(1),
        };
        let stripped = strip_ansi(&err.to_string());

        assert!(stripped.contains("failed to load config.yml"));
        assert!(stripped.contains("at least 3"));
    }

    #[test]
    fn test_extension_trait_io() {
        let result: Result<(), io::Error> = Err(io::Error::other("boom"));
        let err = result.with_context("failed to open editor").unwrap_err();

        assert!(matches!(err, AppError::Io { ref context, .. } if context == "failed to open editor"));
        assert!(strip_ansi(&err.to_string()).contains("failed to open editor: boom"));
    }

    #[test]
    fn test_extension_trait_settings() {
        let result: Result<(), SettingsError> = Err(SettingsError::InvalidSeparator(' '));
        let err = result.with_path(Path::new("/etc/lanes.yml")).unwrap_err();

        assert!(matches!(err, AppError::Settings { ref path, .. } if path == "/etc/lanes.yml"));
    }
}
