//! Settings for the `envbind` binary
//!
//! The binary reads its own defaults through a [`Registry`], so
//! `ENVBIND_PREFIX` and `ENVBIND_FORMAT` behave like any other binding:
//! unset or empty means "use the default". Command-line flags win over both.

use crate::binding::Registry;
use crate::error::{Error, Result};
use crate::source::{EnvSource, PrefixEnv};
use std::fmt;
use std::str::FromStr;

/// Prefix for the binary's own environment variables
pub const SETTINGS_PREFIX: &str = "ENVBIND_";

/// How `resolve` prints its results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prefix used when `--prefix` is not given
    pub prefix: String,
    /// Format used when `--format` is not given
    pub format: OutputFormat,
}

impl Settings {
    /// Read `ENVBIND_PREFIX` and `ENVBIND_FORMAT` from `env`
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Result<Self> {
        let mut registry = Registry::new();
        let prefix = registry.string("PREFIX", "");
        let format = registry.string("FORMAT", OutputFormat::default().to_string());

        registry.parse_from_env(&PrefixEnv::new(SETTINGS_PREFIX, env));

        Ok(Self {
            prefix: prefix.get(),
            format: format.get().parse()?,
        })
    }
}
