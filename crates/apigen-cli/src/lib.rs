//! apigen CLI - Markdown API documentation for Java service interfaces.
//!
//! This crate wraps `apigen-docs` in a command-line tool with layered
//! configuration, structured logging and readable diagnostics.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - `apigen.config.json` loading and validation (figment)
//! - [`commands`] - `generate`, `list` and `init`
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Colored status messages

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
