//! Command-line interface definition for apigen.
//!
//! # Command Structure
//!
//! - `apigen generate` - Render API documentation for a method or a whole type
//! - `apigen list` - Show indexed types, or the methods of one type
//! - `apigen init` - Write an example `apigen.config.json`

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{Command, GenerateArgs, InitArgs, ListArgs, SchemaArgs};
pub use enums::*;
pub use validation::parse_java_identifier;

/// apigen - API documentation for Java service interfaces
#[derive(Parser, Debug)]
#[command(
    name = "apigen",
    version,
    about = "Generate Markdown API documentation for Java service interfaces",
    long_about = "apigen indexes Java sources and renders one documentation page per method,\n\
                  with the interface declaration, request/response JSON examples and\n\
                  parameter tables derived from the declared types."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows type expansion details, including recursion guard hits and
    /// unresolved types.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
