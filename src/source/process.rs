//! Process environment source
//!
//! Reads from the real process environment via `std::env`. This is the
//! source [`Registry::parse`](crate::binding::Registry::parse) uses when the
//! caller does not supply one.

use super::EnvSource;

/// Source that reads from `std::env`
///
/// Zero-sized; every lookup goes straight to the process environment.
/// Values that are missing or not valid UTF-8 read as `""`.
#[derive(Clone, Copy, Default, Debug)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get_string(&self, key: &str) -> String {
        std::env::var(key).unwrap_or_default()
    }

    fn get_int(&self, key: &str) -> i64 {
        std::env::var(key)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }
}
