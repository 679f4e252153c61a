//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the storage and report layers.

pub mod add;
pub mod categories;
pub mod view;

pub use add::{handle_add_command, run_add_session, AddArgs, Prompter};
pub use categories::handle_categories_command;
pub use view::{handle_view_command, ViewArgs};
