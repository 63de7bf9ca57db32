//! apigen - Markdown API documentation for Java service interfaces.
//!
//! Entry point: parses arguments, initializes logging and dispatches to the
//! command implementations.

use apigen_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::List(list_args) => commands::list_execute(list_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    // Convert CLI errors to miette diagnostics
    result.map_err(error::cli_error_to_miette)
}
