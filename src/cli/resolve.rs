//! `envbind resolve`

use super::spec::{IntSpec, StringSpec};
use crate::binding::{Registry, Var};
use crate::config::{OutputFormat, Settings};
use crate::source::{EnvSource, MemoryEnv, PrefixEnv, ProcessEnv};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parameters for the resolve command
#[derive(Debug, Clone, Default)]
pub struct ResolveParams {
    pub prefix: Option<String>,
    pub source: Option<PathBuf>,
    pub strings: Vec<StringSpec>,
    pub ints: Vec<IntSpec>,
    pub format: Option<OutputFormat>,
}

/// Resolve the requested bindings and render them
///
/// Flags take precedence over `settings`. Returns the text to print.
pub fn run_resolve(params: ResolveParams, settings: &Settings) -> Result<String> {
    let prefix = params.prefix.unwrap_or_else(|| settings.prefix.clone());
    let format = params.format.unwrap_or(settings.format);

    let source: Box<dyn EnvSource> = match &params.source {
        Some(path) => Box::new(load_source(path)?),
        None => Box::new(ProcessEnv),
    };

    let mut registry = Registry::new();
    let strings: Vec<(String, Var<String>)> = params
        .strings
        .into_iter()
        .map(|spec| {
            let dest = registry.string(spec.key.clone(), spec.default);
            (spec.key, dest)
        })
        .collect();
    let ints: Vec<(String, Var<i64>)> = params
        .ints
        .into_iter()
        .map(|spec| {
            let dest = registry.int(spec.key.clone(), spec.default);
            (spec.key, dest)
        })
        .collect();

    debug!(
        "Resolving {} bindings with prefix {:?}",
        registry.len(),
        prefix
    );
    let report = registry.parse_from_env(&PrefixEnv::new(prefix, source));
    debug!("Keys using defaults: {:?}", report.defaulted);

    match format {
        OutputFormat::Text => Ok(render_text(&strings, &ints)),
        OutputFormat::Json => render_json(&strings, &ints),
    }
}

fn load_source(path: &Path) -> Result<MemoryEnv> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    MemoryEnv::from_json_str(&content)
        .with_context(|| format!("Failed to load source file: {}", path.display()))
}

fn render_text(strings: &[(String, Var<String>)], ints: &[(String, Var<i64>)]) -> String {
    let mut output = String::new();
    for (key, value) in strings {
        output.push_str(&format!("{}={}\n", key, value));
    }
    for (key, value) in ints {
        output.push_str(&format!("{}={}\n", key, value));
    }
    output
}

fn render_json(strings: &[(String, Var<String>)], ints: &[(String, Var<i64>)]) -> Result<String> {
    let mut map = serde_json::Map::new();
    for (key, value) in strings {
        map.insert(key.clone(), serde_json::Value::String(value.get()));
    }
    for (key, value) in ints {
        map.insert(key.clone(), serde_json::Value::from(value.get()));
    }
    let mut output = serde_json::to_string_pretty(&map)?;
    output.push('\n');
    Ok(output)
}
