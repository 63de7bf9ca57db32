//! Output generators for documentation models.

pub mod example;

#[cfg(feature = "markdown")]
pub mod markdown;

#[cfg(feature = "json")]
pub mod json;
