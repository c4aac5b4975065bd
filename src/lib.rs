//! # envbind
//!
//! Deferred, typed environment-variable bindings with flag-like ergonomics.
//!
//! ## Usage
//!
//! ```
//! use envbind::binding::{Registry, Var};
//! use envbind::source::{MemoryEnv, PrefixEnv};
//!
//! let mut registry = Registry::new();
//! let host = Var::new();
//! registry.string_var(&host, "HOST", "localhost");
//! let port = registry.int("PORT", 8080);
//!
//! let env = MemoryEnv::new().with_int("APP_PORT", 9000);
//! registry.parse_from_env(&PrefixEnv::new("APP_", &env));
//!
//! assert_eq!(host.get(), "localhost");
//! assert_eq!(port.get(), 9000);
//! ```
//!
//! ## Modules
//!
//! - `binding` - Destination cells, the binding registry and the parse step
//! - `source` - Environment sources: process, prefixing decorator, in-memory
//! - `config` - Settings for the `envbind` binary
//! - `cli` - Command-line interface for the `envbind` binary
pub mod binding;
pub mod cli;
pub mod config;
pub mod error;
pub mod source;

pub use binding::{ParseReport, Registry, Var};
pub use error::{Error, Result};
pub use source::{new_prefix_env, EnvSource, EnvValue, MemoryEnv, PrefixEnv, ProcessEnv};
