//! Command implementations for the apigen CLI.
//!
//! - [`generate`] - Render documentation for a method or a whole type
//! - [`list`] - Show indexed types and methods
//! - [`init`] - Write an example config file
//! - [`schema`] - Print the config file's JSON schema
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod generate;
pub mod init;
pub mod list;
pub mod schema;
pub(crate) mod utils;

pub use generate::execute as generate_execute;
pub use init::execute as init_execute;
pub use list::execute as list_execute;
pub use schema::execute as schema_execute;
