use thiserror::Error;

/// Errors from the fallible edges of the crate
///
/// Binding and parsing never fail; these cover loading sources from disk
/// and reading binding specs from the command line.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source must be a JSON object, found {found}")]
    NotAnObject { found: String },

    #[error("Invalid binding `{spec}`: key must not be empty")]
    EmptyKey { spec: String },

    #[error("Invalid integer default for `{key}`: {source}")]
    InvalidIntDefault {
        key: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Unknown output format `{0}` (expected `text` or `json`)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
