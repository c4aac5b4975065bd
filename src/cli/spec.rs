//! Binding specs given on the command line
//!
//! A spec is `KEY` or `KEY=DEFAULT`. Only the first `=` splits, so defaults
//! may themselves contain `=`.

use crate::error::{Error, Result};
use std::str::FromStr;

/// `-s KEY[=DEFAULT]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSpec {
    pub key: String,
    pub default: String,
}

/// `-i KEY[=DEFAULT]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSpec {
    pub key: String,
    pub default: i64,
}

fn split_spec(spec: &str) -> Result<(&str, &str)> {
    let (key, default) = spec.split_once('=').unwrap_or((spec, ""));
    if key.is_empty() {
        return Err(Error::EmptyKey {
            spec: spec.to_string(),
        });
    }
    Ok((key, default))
}

impl FromStr for StringSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, default) = split_spec(s)?;
        Ok(Self {
            key: key.to_string(),
            default: default.to_string(),
        })
    }
}

impl FromStr for IntSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, default) = split_spec(s)?;
        let default = if default.is_empty() {
            0
        } else {
            default.parse().map_err(|source| Error::InvalidIntDefault {
                key: key.to_string(),
                source,
            })?
        };
        Ok(Self {
            key: key.to_string(),
            default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_spec_with_default() {
        let spec: StringSpec = "HOST=localhost".parse().unwrap();
        assert_eq!(spec.key, "HOST");
        assert_eq!(spec.default, "localhost");
    }

    #[test]
    fn test_string_spec_default_keeps_later_equals() {
        let spec: StringSpec = "DSN=user=admin".parse().unwrap();
        assert_eq!(spec.key, "DSN");
        assert_eq!(spec.default, "user=admin");
    }

    #[test]
    fn test_bare_key_defaults_to_zero_value() {
        let s: StringSpec = "HOST".parse().unwrap();
        let i: IntSpec = "PORT".parse().unwrap();
        assert_eq!(s.default, "");
        assert_eq!(i.default, 0);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            "=value".parse::<StringSpec>(),
            Err(Error::EmptyKey { .. })
        ));
        assert!(matches!("".parse::<IntSpec>(), Err(Error::EmptyKey { .. })));
    }

    #[test]
    fn test_int_spec_rejects_non_integer_default() {
        let err = "PORT=eighty".parse::<IntSpec>().unwrap_err();
        assert!(matches!(err, Error::InvalidIntDefault { ref key, .. } if key == "PORT"));
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_int_spec_negative_default() {
        let spec: IntSpec = "OFFSET=-5".parse().unwrap();
        assert_eq!(spec.default, -5);
    }
}
