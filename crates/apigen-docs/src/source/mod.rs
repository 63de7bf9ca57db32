//! Type model adapters.
//!
//! The builder never looks at source code directly. It asks a [`TypeModel`]
//! for method signatures, member lists and element types, so any front end
//! able to answer those questions can drive documentation generation.

mod annotations;
pub mod java;
mod javadoc;

use serde_json::Value;

use crate::normal;
use crate::types::TypeRef;

pub use java::{DeclKind, JavaSourceIndex, TypeDecl};
pub use javadoc::{parse_javadoc, ParsedJavadoc};

/// A field of a compound type, or a method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSignature {
    pub name: String,
    pub ty: TypeRef,
    pub required: bool,
    pub range: Option<String>,
    pub description: Option<String>,
}

impl MemberSignature {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            range: None,
            description: None,
        }
    }
}

/// Normalised view of a method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    pub package: String,
    pub declaring_type: String,
    pub return_type: TypeRef,
    pub parameters: Vec<MemberSignature>,
    pub description: Option<String>,
    /// Text of the `@return` tag.
    pub return_description: Option<String>,
}

/// Capability interface over a source-analysis front end.
pub trait TypeModel {
    /// Methods declared by `type_name`, in declaration order.
    ///
    /// Returns `None` when the type is unknown.
    fn list_methods(&self, type_name: &str) -> Option<Vec<MethodSignature>>;

    /// Members of a compound type, inherited members first.
    ///
    /// Returns `None` when the type cannot be resolved; callers treat such
    /// types as opaque objects.
    fn list_fields(&self, ty: &TypeRef) -> Option<Vec<MemberSignature>>;

    /// First method named `method` on `type_name`.
    fn resolve_method(&self, type_name: &str, method: &str) -> Option<MethodSignature> {
        self.list_methods(type_name)?
            .into_iter()
            .find(|signature| signature.name == method)
    }

    /// Element type of arrays and collections; `None` for anything else.
    fn element_type(&self, ty: &TypeRef) -> Option<TypeRef> {
        match ty {
            TypeRef::Array { element } => Some(element.as_ref().clone()),
            TypeRef::Named { name, args } if normal::is_container_type(name) => {
                Some(args.first().cloned().unwrap_or(TypeRef::Unknown))
            }
            _ => None,
        }
    }

    /// Whether `ty` is terminal and must not be expanded.
    fn is_normal(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Named { name, .. } => normal::is_normal_type(name),
            TypeRef::Array { .. } | TypeRef::Unknown => false,
        }
    }

    /// Example value for a normal type.
    fn example_value(&self, ty: &TypeRef) -> Value {
        ty.simple_name()
            .map(normal::example_value)
            .unwrap_or(Value::Null)
    }
}
