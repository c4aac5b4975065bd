//! Configuration for the `envbind` binary

pub mod settings;

pub use settings::{OutputFormat, Settings, SETTINGS_PREFIX};
