//! Prefixing decorator
//!
//! Wraps another [`EnvSource`] and prepends a fixed string to every key.
//! The join is plain concatenation: no separator is inserted and no case
//! folding happens, so `"APP_"` + `"host"` looks up `APP_host`.

use super::EnvSource;

/// Source that looks up `prefix + key` in an inner source
#[derive(Clone, Debug, Default)]
pub struct PrefixEnv<E> {
    prefix: String,
    inner: E,
}

impl<E> PrefixEnv<E> {
    pub fn new(prefix: impl Into<String>, inner: E) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl<E: EnvSource> EnvSource for PrefixEnv<E> {
    fn get_string(&self, key: &str) -> String {
        self.inner.get_string(&self.prefixed(key))
    }

    fn get_int(&self, key: &str) -> i64 {
        self.inner.get_int(&self.prefixed(key))
    }
}

/// Wrap `inner` so every lookup is made under `prefix`
///
/// An empty prefix is a pure pass-through.
pub fn new_prefix_env<E: EnvSource>(prefix: impl Into<String>, inner: E) -> PrefixEnv<E> {
    PrefixEnv::new(prefix, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryEnv;

    fn testing_env() -> MemoryEnv {
        MemoryEnv::new()
            .with_string("host", "lowercase host")
            .with_string("appname_host", "prefix host")
            .with_string("APPNAME_HOST", "PREFIX HOST")
            .with_int("appname_port", 1234)
    }

    #[test]
    fn test_prefix_is_prepended() {
        let env = new_prefix_env("appname_", testing_env());

        assert_eq!(env.get_string("host"), "prefix host");
        assert_eq!(env.get_int("port"), 1234);
    }

    #[test]
    fn test_empty_prefix_passes_through() {
        let inner = testing_env();
        let env = PrefixEnv::new("", &inner);

        assert_eq!(env.get_string("host"), inner.get_string("host"));
        assert_eq!(env.get_string("appname_host"), "prefix host");
    }

    #[test]
    fn test_no_separator_or_case_folding() {
        let env = PrefixEnv::new("APPNAME", testing_env());

        // "APPNAME" + "HOST" is "APPNAMEHOST", not "APPNAME_HOST"
        assert_eq!(env.get_string("HOST"), "");
        assert_eq!(env.get_string("_HOST"), "PREFIX HOST");
    }

    #[test]
    fn test_prefixes_nest() {
        let env = PrefixEnv::new("app", PrefixEnv::new("name_", testing_env()));

        assert_eq!(env.get_string("host"), "");
        assert_eq!(env.inner().get_string("host"), "");

        let env = PrefixEnv::new("name_", PrefixEnv::new("app", testing_env()));
        assert_eq!(env.get_string("host"), "prefix host");
        assert_eq!(env.prefix(), "name_");
    }
}
