//! List command implementation.

use apigen_docs::{DocsError, TypeModel};
use apigen_docs::builder::param_list;

use crate::cli::ListArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the list command.
///
/// Prints one line per indexed type (with its Javadoc summary), or one line
/// per method of `--class`, to stdout so the output can be piped.
pub fn execute(args: ListArgs) -> Result<()> {
    let index = utils::load_index(&args.sources)?;

    match &args.class {
        Some(class) => {
            let methods = index.list_methods(class).ok_or_else(|| {
                CliError::from(DocsError::ClassNotFound {
                    name: class.clone(),
                })
            })?;
            for method in &methods {
                println!(
                    "{} {}{}",
                    method.return_type,
                    method.name,
                    param_list(&method.parameters)
                );
            }
            ui::info(&format!(
                "{} on {}",
                utils::count_noun(methods.len(), "method"),
                class
            ));
        }
        None => {
            for decl in index.types() {
                let qualified = if decl.package.is_empty() {
                    decl.name.clone()
                } else {
                    format!("{}.{}", decl.package, decl.name)
                };
                match &decl.description {
                    Some(description) => {
                        println!("{:<9} {}  {}", decl.kind.as_str(), qualified, description)
                    }
                    None => println!("{:<9} {}", decl.kind.as_str(), qualified),
                }
            }
            ui::info(&utils::count_noun(index.len(), "type"));
        }
    }

    Ok(())
}
