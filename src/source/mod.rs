//! Environment sources
//!
//! An [`EnvSource`] answers "what is the string/int value for this key?".
//! Every lookup failure collapses to the type's zero value (`""` or `0`);
//! callers cannot tell an absent key from one that is present but empty.
//!
//! # Examples
//!
//! ```
//! use envbind::source::{EnvSource, MemoryEnv, PrefixEnv};
//!
//! let env = MemoryEnv::new()
//!     .with_string("appname_host", "db.internal")
//!     .with_int("appname_port", 5432);
//!
//! let prefixed = PrefixEnv::new("appname_", &env);
//! assert_eq!(prefixed.get_string("host"), "db.internal");
//! assert_eq!(prefixed.get_int("port"), 5432);
//!
//! // Wrong type requested: zero value, not a conversion
//! assert_eq!(prefixed.get_string("port"), "");
//! ```

pub mod memory;
pub mod prefix;
pub mod process;

pub use memory::{EnvValue, MemoryEnv};
pub use prefix::{new_prefix_env, PrefixEnv};
pub use process::ProcessEnv;

use std::rc::Rc;
use std::sync::Arc;

/// Trait for looking up typed values by environment-variable name
///
/// Lookups are case-sensitive and never fail: a missing key, a value of the
/// wrong kind, or an unparseable integer all yield the zero value.
pub trait EnvSource {
    /// Get a string value, or `""` if absent.
    fn get_string(&self, key: &str) -> String;

    /// Get an integer value, or `0` if absent or not an integer.
    fn get_int(&self, key: &str) -> i64;
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get_string(&self, key: &str) -> String {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> i64 {
        (**self).get_int(key)
    }
}

impl<E: EnvSource + ?Sized> EnvSource for Box<E> {
    fn get_string(&self, key: &str) -> String {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> i64 {
        (**self).get_int(key)
    }
}

impl<E: EnvSource + ?Sized> EnvSource for Rc<E> {
    fn get_string(&self, key: &str) -> String {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> i64 {
        (**self).get_int(key)
    }
}

impl<E: EnvSource + ?Sized> EnvSource for Arc<E> {
    fn get_string(&self, key: &str) -> String {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> i64 {
        (**self).get_int(key)
    }
}
