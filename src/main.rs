use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lanes::commands::{self, shared::print_notices, TaskEdit};
use lanes::error_fmt::{AppError, SettingsResultExt};
use lanes::{config_path, Board, BoardConfig};

#[derive(Parser)]
#[command(name = "lanes", version)]
#[command(about = "A tiny kanban board backed by plain text files")]
struct Cli {
    /// Task directory holding one file per lane (overrides the settings file)
    #[arg(long, global = true, env = "LANES_DIR")]
    dir: Option<PathBuf>,
    /// Settings file [default: ~/.config/lanes/config.yml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all lanes and the tasks in them
    Overview,
    /// Add a task to the end of a lane
    Add {
        /// Lane to add the task to
        lane: String,
        /// Short description shown on the board
        description: String,
        /// Longer details (may span multiple lines)
        #[arg(long, short)]
        details: Option<String>,
    },
    /// Change a task's description or details
    Edit {
        /// Task number as shown on the board
        number: usize,
        /// New description
        #[arg(long, short)]
        description: Option<String>,
        /// New details
        #[arg(long, conflicts_with = "clear_details")]
        details: Option<String>,
        /// Remove the details
        #[arg(long)]
        clear_details: bool,
    },
    /// Move a task to the end of another lane
    #[command(visible_alias = "move")]
    Mv {
        /// Task number as shown on the board
        number: usize,
        /// Destination lane
        lane: String,
    },
    /// Delete a task
    #[command(visible_alias = "remove")]
    Rm {
        /// Task number as shown on the board
        number: usize,
    },
    /// Show a single task with its details
    Show {
        /// Task number as shown on the board
        number: usize,
    },
    /// Manage lanes
    Lane {
        #[command(subcommand)]
        command: LaneCommands,
    },
    /// Open a lane file in your editor
    Open {
        /// Lane to open
        lane: String,
        /// Editor command (defaults to $EDITOR)
        #[arg(long, short)]
        editor: Option<String>,
    },
}

#[derive(Subcommand)]
enum LaneCommands {
    /// Create an empty lane
    Add {
        /// Lane name (also the file name)
        name: String,
    },
    /// Delete a lane
    Rm {
        /// Lane name
        name: String,
        /// Delete even if the lane still has tasks
        #[arg(long, short)]
        force: bool,
    },
    /// List lanes in display order
    List,
}

fn main() {
    if std::env::var("LANES_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("lanes=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(&cli)?;
    let mut board = Board::load(config)?;
    print_notices(board.notices());

    match cli.command.unwrap_or(Commands::Overview) {
        Commands::Overview => commands::overview(&board),
        Commands::Add {
            lane,
            description,
            details,
        } => commands::add(&mut board, &lane, &description, details)?,
        Commands::Edit {
            number,
            description,
            details,
            clear_details,
        } => {
            let changes = TaskEdit {
                description,
                details,
                clear_details,
            };
            commands::edit(&mut board, number, &changes)?
        }
        Commands::Mv { number, lane } => commands::move_task(&mut board, number, &lane)?,
        Commands::Rm { number } => commands::delete(&mut board, number)?,
        Commands::Show { number } => commands::show(&board, number)?,
        Commands::Lane { command } => match command {
            LaneCommands::Add { name } => commands::add_lane(&mut board, &name)?,
            LaneCommands::Rm { name, force } => commands::remove_lane(&mut board, &name, force)?,
            LaneCommands::List => commands::list_lanes(&board),
        },
        Commands::Open { lane, editor } => commands::open(&board, &lane, editor.as_deref())?,
    }

    Ok(())
}

/// Settings file first, then `--dir` / `LANES_DIR` on top.
fn load_config(cli: &Cli) -> Result<BoardConfig, AppError> {
    let path = config_path(cli.config.as_deref());
    let config = BoardConfig::load(&path).with_path(&path)?;

    Ok(match &cli.dir {
        Some(dir) => config.with_tasks_dir(dir),
        None => config,
    })
}
