//! Typed bindings and the parse step
//!
//! Callers register a destination per environment variable with
//! [`Registry::string_var`] or [`Registry::int_var`], then resolve them all at
//! once with [`Registry::parse_from_env`].
//!
//! The registry is single-threaded (`Var` is `Rc`-backed). Register and parse
//! during startup before handing values to other threads.

mod registry;
mod var;

pub use registry::{ParseReport, Registry};
pub use var::Var;
