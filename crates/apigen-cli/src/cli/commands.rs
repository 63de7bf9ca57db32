use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::DocsFormat;
use crate::cli::validation::parse_java_identifier;

/// Available apigen subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate documentation for a method or a whole type
    ///
    /// Indexes the given sources, expands the parameter and return types of
    /// the selected methods and writes one document per method.
    Generate(GenerateArgs),

    /// List indexed types, or the methods of one type
    List(ListArgs),

    /// Write an example apigen.config.json
    Init(InitArgs),

    /// Print the JSON schema of apigen.config.json
    ///
    /// Point an editor's JSON schema setting at the output to get completion
    /// and validation while editing the config file.
    Schema(SchemaArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Java source files or directories to index
    ///
    /// Directories are searched recursively for `*.java` files. When omitted,
    /// the `sources` list from the config file is used.
    ///
    /// Examples:
    ///   apigen generate src/main/java --class UserService
    ///   apigen generate api/ model/ --class UserService --method getUser
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,

    /// Type whose methods are documented
    #[arg(short, long, value_name = "NAME", value_parser = parse_java_identifier)]
    pub class: String,

    /// Document only this method (all overloads); every method when omitted
    #[arg(short, long, value_name = "NAME", value_parser = parse_java_identifier)]
    pub method: Option<String>,

    /// Output directory for generated documents
    ///
    /// Created if it doesn't exist. Defaults to `api_docs`.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Format for generated documentation (md, json, both)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<DocsFormat>,

    /// Maximum nesting depth of expanded types
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Maven groupId shown in the dependency snippet
    #[arg(long, value_name = "ID")]
    pub group_id: Option<String>,

    /// Maven artifactId shown in the dependency snippet
    #[arg(long, value_name = "ID")]
    pub artifact_id: Option<String>,

    /// Maven version shown in the dependency snippet
    #[arg(long, value_name = "VERSION")]
    pub artifact_version: Option<String>,

    /// Path to a config file (defaults to ./apigen.config.json when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Java source files or directories to index
    #[arg(required = true, value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,

    /// List the methods of this type instead of all types
    #[arg(short, long, value_name = "NAME", value_parser = parse_java_identifier)]
    pub class: Option<String>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing apigen.config.json
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
