//! CLI argument structures

use super::spec::{IntSpec, StringSpec};
use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve typed environment bindings with defaults
#[derive(Parser)]
#[command(name = "envbind")]
#[command(about = "envbind - Resolve typed environment bindings with defaults", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve bindings and print their values
    #[command(name = "resolve")]
    Resolve {
        /// Prefix prepended to every key, joined verbatim (e.g. "APP_")
        #[arg(short = 'p', long)]
        prefix: Option<String>,

        /// Resolve against a JSON object file instead of the process environment
        #[arg(long, value_name = "FILE")]
        source: Option<PathBuf>,

        /// String binding
        #[arg(short = 's', long = "string", value_name = "KEY[=DEFAULT]")]
        strings: Vec<StringSpec>,

        /// Integer binding
        #[arg(short = 'i', long = "int", value_name = "KEY[=DEFAULT]")]
        ints: Vec<IntSpec>,

        /// Output format: text or json
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,
    },
}
