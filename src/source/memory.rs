//! In-memory environment source
//!
//! Holds a mixed-type map of string and integer values. Lookups only return
//! a value whose stored kind matches the accessor; anything else reads as the
//! zero value, so an integer stored under `PORT` is `""` through
//! [`EnvSource::get_string`] rather than `"8080"`.

use super::EnvSource;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored value in a [`MemoryEnv`]
///
/// Untagged, so a JSON map of strings and integers deserializes straight
/// into `HashMap<String, EnvValue>` and collects into a `MemoryEnv`.
/// [`MemoryEnv::from_json`] is the lenient path that skips other kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Int(i64),
    Str(String),
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        EnvValue::Str(value)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::Str(value.to_string())
    }
}

impl From<i64> for EnvValue {
    fn from(value: i64) -> Self {
        EnvValue::Int(value)
    }
}

/// Environment source backed by a map
///
/// Won't touch the process environment. Useful in tests and for resolving
/// bindings against a snapshot loaded from a file.
///
/// # Examples
///
/// ```
/// use envbind::source::{EnvSource, MemoryEnv};
///
/// let env = MemoryEnv::new()
///     .with_string("HOST", "UPPERCASE HOST")
///     .with_int("PORT", 10000);
///
/// assert_eq!(env.get_string("HOST"), "UPPERCASE HOST");
/// assert_eq!(env.get_int("PORT"), 10000);
/// assert_eq!(env.get_int("HOST"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, EnvValue>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object
    ///
    /// String members become string values and integral numbers become
    /// integer values. Members of any other type are skipped.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| Error::NotAnObject {
            found: json_kind(value).to_string(),
        })?;

        let vars = object
            .iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => EnvValue::Str(s.clone()),
                    serde_json::Value::Number(n) => EnvValue::Int(n.as_i64()?),
                    _ => return None,
                };
                Some((key.clone(), value))
            })
            .collect();

        Ok(Self { vars })
    }

    /// Parse a JSON document into a source
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_string(key, value);
        self
    }

    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.set_int(key, value);
        self
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), EnvValue::Str(value.into()));
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.vars.insert(key.into(), EnvValue::Int(value));
    }

    pub fn remove(&mut self, key: &str) -> Option<EnvValue> {
        self.vars.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&EnvValue> {
        self.vars.get(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<EnvValue>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MemoryEnv {
    fn get_string(&self, key: &str) -> String {
        match self.vars.get(key) {
            Some(EnvValue::Str(value)) => value.clone(),
            _ => String::new(),
        }
    }

    fn get_int(&self, key: &str) -> i64 {
        match self.vars.get(key) {
            Some(EnvValue::Int(value)) => *value,
            _ => 0,
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_env_set_and_get() {
        let mut env = MemoryEnv::new();
        env.set_string("TEST_VAR", "test_value");
        env.set_int("TEST_PORT", 9000);

        assert_eq!(env.get_string("TEST_VAR"), "test_value");
        assert_eq!(env.get_int("TEST_PORT"), 9000);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_memory_env_not_present() {
        let env = MemoryEnv::new();

        assert_eq!(env.get_string("NONEXISTENT"), "");
        assert_eq!(env.get_int("NONEXISTENT"), 0);
        assert!(env.is_empty());
    }

    #[test]
    fn test_type_mismatch_returns_zero_value() {
        let env = MemoryEnv::new()
            .with_int("PORT", 8080)
            .with_string("COUNT", "42");

        // No stringification of ints, no parsing of strings
        assert_eq!(env.get_string("PORT"), "");
        assert_eq!(env.get_int("COUNT"), 0);
    }

    #[test]
    fn test_memory_env_overwrite_changes_kind() {
        let mut env = MemoryEnv::new().with_string("KEY", "v1");
        assert_eq!(env.get_string("KEY"), "v1");

        env.set_int("KEY", 2);
        assert_eq!(env.get_string("KEY"), "");
        assert_eq!(env.get_int("KEY"), 2);
        assert_eq!(env.get("KEY"), Some(&EnvValue::Int(2)));
    }

    #[test]
    fn test_memory_env_remove() {
        let mut env = MemoryEnv::new().with_string("TEST_VAR", "test_value");

        assert_eq!(
            env.remove("TEST_VAR"),
            Some(EnvValue::Str("test_value".to_string()))
        );
        assert!(!env.contains("TEST_VAR"));
        assert_eq!(env.get_string("TEST_VAR"), "");
    }

    #[test]
    fn test_from_iter_mixed_values() {
        let env: MemoryEnv = vec![
            ("host", EnvValue::from("lowercase host")),
            ("port", EnvValue::from(9000)),
        ]
        .into_iter()
        .collect();

        assert_eq!(env.get_string("host"), "lowercase host");
        assert_eq!(env.get_int("port"), 9000);
    }

    #[test]
    fn test_from_json_object() {
        let env = MemoryEnv::from_json(&json!({
            "HOST": "UPPERCASE HOST",
            "PORT": 10000,
            "RATIO": 0.5,
            "ENABLED": true,
            "TAGS": ["a"],
        }))
        .unwrap();

        assert_eq!(env.get_string("HOST"), "UPPERCASE HOST");
        assert_eq!(env.get_int("PORT"), 10000);
        assert!(!env.contains("RATIO"));
        assert!(!env.contains("ENABLED"));
        assert!(!env.contains("TAGS"));
    }

    #[test]
    fn test_env_value_deserializes_untagged() {
        let vars: HashMap<String, EnvValue> =
            serde_json::from_str(r#"{"HOST": "UPPERCASE HOST", "PORT": 10000}"#).unwrap();
        let env: MemoryEnv = vars.into_iter().collect();

        assert_eq!(env.get("PORT"), Some(&EnvValue::Int(10000)));
        assert_eq!(env.get_string("HOST"), "UPPERCASE HOST");
        assert_eq!(
            serde_json::to_string(&EnvValue::Str("x".to_string())).unwrap(),
            r#""x""#
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = MemoryEnv::from_json(&json!(["HOST"])).unwrap_err();

        assert!(matches!(err, Error::NotAnObject { ref found } if found == "array"));
    }

    #[test]
    fn test_from_json_str_reports_syntax_errors() {
        assert!(matches!(
            MemoryEnv::from_json_str("{not json"),
            Err(Error::Serialization(_))
        ));
        assert_eq!(
            MemoryEnv::from_json_str(r#"{"A": "b"}"#)
                .unwrap()
                .get_string("A"),
            "b"
        );
    }
}
