#![deny(clippy::all)]

//! API documentation generation for Java service interfaces.
//!
//! This crate provides:
//! - A [`TypeModel`] capability trait and a tree-sitter backed Java source index.
//! - A documentation model builder that expands parameters and return types
//!   into field trees, guarded against recursive types.
//! - Generators for Markdown pages and JSON model output.
//! - An atomic writer that emits one document per method.

pub mod builder;
pub mod error;
pub mod model;
pub mod normal;
pub mod source;
pub mod types;
pub mod writer;

pub mod generators;

pub use builder::{BuildOptions, DocModelBuilder};
pub use error::{DocsError, Result};
pub use model::{ArtifactCoordinates, FieldInfo, MethodDoc, ParamKind};
pub use source::{JavaSourceIndex, MemberSignature, MethodSignature, TypeModel};
pub use types::TypeRef;
pub use writer::{DocsWriter, RenderedDoc, WriteFailure, WriteReport, unique_stems};

pub use generators::example::build_example;

#[cfg(feature = "markdown")]
pub use generators::markdown::render_markdown;

#[cfg(feature = "json")]
pub use generators::json::render_json;
