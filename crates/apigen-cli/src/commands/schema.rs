//! Schema command implementation.

use std::fs;
use std::path::Path;

use crate::cli::SchemaArgs;
use crate::config::ApigenConfig;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the schema command.
///
/// Prints the JSON schema of the config file, or writes it to `--output`.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let schema = render_schema()?;
    match args.output {
        Some(path) => {
            write_schema(&path, &schema)?;
            ui::success(&format!("Wrote schema to {}", path.display()));
        }
        None => print!("{schema}"),
    }
    Ok(())
}

fn render_schema() -> Result<String> {
    let mut schema = serde_json::to_string_pretty(&ApigenConfig::json_schema())?;
    schema.push('\n');
    Ok(schema)
}

fn write_schema(path: &Path, schema: &str) -> Result<()> {
    fs::write(path, schema).with_path(path)
}
