//! Command routing

use super::args::Commands;
use super::resolve::{run_resolve, ResolveParams};
use crate::config::Settings;
use crate::source::ProcessEnv;
use anyhow::{Context, Result};

/// Execute a CLI command and return what it wants printed
pub fn execute_command(command: Commands) -> Result<String> {
    let settings =
        Settings::from_env(&ProcessEnv).context("Invalid ENVBIND_* environment settings")?;

    match command {
        Commands::Resolve {
            prefix,
            source,
            strings,
            ints,
            format,
        } => run_resolve(
            ResolveParams {
                prefix,
                source,
                strings,
                ints,
                format,
            },
            &settings,
        ),
    }
}
