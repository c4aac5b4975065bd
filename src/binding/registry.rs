//! Deferred binding registry
//!
//! Bindings are recorded without touching the environment. A later call to
//! [`Registry::parse_from_env`] resolves each one and writes the result (or
//! the binding's default) into its destination.
//!
//! # Zero values
//!
//! A lookup that returns `""` or `0` is treated as "not set". A variable
//! explicitly set to `0` therefore resolves to the binding's default, exactly
//! like a missing one.

use super::var::Var;
use crate::source::{EnvSource, PrefixEnv, ProcessEnv};
use serde::Serialize;
use tracing::{debug, trace};

/// Scalar types a binding can resolve to
trait Scalar: Clone {
    const KIND: &'static str;

    fn lookup<E: EnvSource + ?Sized>(source: &E, key: &str) -> Self;

    fn is_zero(&self) -> bool;
}

impl Scalar for String {
    const KIND: &'static str = "string";

    fn lookup<E: EnvSource + ?Sized>(source: &E, key: &str) -> Self {
        source.get_string(key)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Scalar for i64 {
    const KIND: &'static str = "int";

    fn lookup<E: EnvSource + ?Sized>(source: &E, key: &str) -> Self {
        source.get_int(key)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

#[derive(Debug)]
struct Binding<T> {
    key: String,
    default: T,
    dest: Var<T>,
}

impl<T: Scalar> Binding<T> {
    /// Write the resolved value; returns true when the default was used
    fn resolve<E: EnvSource + ?Sized>(&self, source: &E) -> bool {
        let value = T::lookup(source, &self.key);
        let defaulted = value.is_zero();
        trace!(
            "Resolved {} binding {:?} (default used: {})",
            T::KIND,
            self.key,
            defaulted
        );
        self.dest.set(if defaulted {
            self.default.clone()
        } else {
            value
        });
        defaulted
    }
}

/// Summary of a parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Number of bindings written
    pub resolved: usize,
    /// Keys that fell back to their default
    pub defaulted: Vec<String>,
}

impl ParseReport {
    fn record(&mut self, key: &str, defaulted: bool) {
        self.resolved += 1;
        if defaulted {
            self.defaulted.push(key.to_string());
        }
    }
}

/// Pending string and int bindings
///
/// # Examples
///
/// ```
/// use envbind::binding::{Registry, Var};
/// use envbind::source::MemoryEnv;
///
/// let mut registry = Registry::new();
/// let host = Var::new();
/// registry.string_var(&host, "HOST", "default value");
/// let port = registry.int("PORT", 13337);
///
/// // Nothing is written until parse
/// assert_eq!(host.get(), "");
/// assert_eq!(port.get(), 0);
///
/// let env = MemoryEnv::new().with_string("HOST", "UPPERCASE HOST");
/// registry.parse_from_env(&env);
///
/// assert_eq!(host.get(), "UPPERCASE HOST");
/// assert_eq!(port.get(), 13337);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    strings: Vec<Binding<String>>,
    ints: Vec<Binding<i64>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a string binding
    ///
    /// `dest` is left untouched until the next parse.
    pub fn string_var(
        &mut self,
        dest: &Var<String>,
        key: impl Into<String>,
        default: impl Into<String>,
    ) {
        self.strings.push(Binding {
            key: key.into(),
            default: default.into(),
            dest: dest.clone(),
        });
    }

    /// Register an int binding
    ///
    /// `dest` is left untouched until the next parse.
    pub fn int_var(&mut self, dest: &Var<i64>, key: impl Into<String>, default: i64) {
        self.ints.push(Binding {
            key: key.into(),
            default,
            dest: dest.clone(),
        });
    }

    /// Register a string binding into a fresh destination
    pub fn string(&mut self, key: impl Into<String>, default: impl Into<String>) -> Var<String> {
        let dest = Var::new();
        self.string_var(&dest, key, default);
        dest
    }

    /// Register an int binding into a fresh destination
    pub fn int(&mut self, key: impl Into<String>, default: i64) -> Var<i64> {
        let dest = Var::new();
        self.int_var(&dest, key, default);
        dest
    }

    /// Resolve every binding against `source` and write the destinations
    ///
    /// Each call re-resolves and rewrites all destinations.
    pub fn parse_from_env<E: EnvSource + ?Sized>(&self, source: &E) -> ParseReport {
        let mut report = ParseReport::default();

        for binding in &self.strings {
            report.record(&binding.key, binding.resolve(source));
        }
        for binding in &self.ints {
            report.record(&binding.key, binding.resolve(source));
        }

        debug!(
            "Parsed {} bindings ({} defaulted)",
            report.resolved,
            report.defaulted.len()
        );
        report
    }

    /// Resolve against the process environment
    pub fn parse(&self) -> ParseReport {
        self.parse_from_env(&ProcessEnv)
    }

    /// Resolve against the process environment with every key under `prefix`
    pub fn parse_with_prefix(&self, prefix: &str) -> ParseReport {
        self.parse_from_env(&PrefixEnv::new(prefix, ProcessEnv))
    }

    /// Registered keys, string bindings first
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings
            .iter()
            .map(|b| b.key.as_str())
            .chain(self.ints.iter().map(|b| b.key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.strings.len() + self.ints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every pending binding so the registry can be reused
    ///
    /// Destinations keep whatever value they last received.
    pub fn clear(&mut self) {
        self.strings.clear();
        self.ints.clear();
    }
}
