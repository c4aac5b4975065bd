//! Command-line interface for the `envbind` binary

pub mod args;
pub mod help;
pub mod resolve;
pub mod router;
pub mod spec;

pub use args::{Cli, Commands};
pub use help::get_log_level;
pub use router::execute_command;
