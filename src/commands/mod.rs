//! CLI command implementations.
//!
//! Each command is implemented in its own submodule and works on a loaded
//! `Board`. Commands print their own output and return `AppError` on failure.

mod add;
mod delete;
mod edit;
mod lane;
mod move_task;
mod open;
mod overview;
pub mod shared;
mod show;

pub use add::add;
pub use delete::delete;
pub use edit::{edit, TaskEdit};
pub use lane::{add_lane, list_lanes, remove_lane, validate_lane_name};
pub use move_task::move_task;
pub use open::open;
pub use overview::overview;
pub use show::show;
