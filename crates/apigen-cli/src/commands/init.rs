//! Init command implementation.

use std::fs;
use std::path::Path;

use crate::cli::InitArgs;
use crate::config::{ApigenConfig, CONFIG_FILE_NAME};
use crate::error::{ConfigError, Result, ResultExt};
use crate::ui;

/// Execute the init command.
///
/// Writes an example `apigen.config.json` into the current directory.
///
/// # Errors
///
/// Returns an error when the file already exists and `--force` was not
/// given, or when it cannot be written.
pub fn execute(args: InitArgs) -> Result<()> {
    write_config(Path::new(CONFIG_FILE_NAME), args.force)?;
    ui::success(&format!("Created {}", CONFIG_FILE_NAME));
    ui::info("Edit 'sources' and 'artifact', then run: apigen generate --class <NAME>");
    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()).into());
    }

    let mut contents = ApigenConfig::example_config()?;
    contents.push('\n');
    fs::write(path, contents).with_path(path)
}
