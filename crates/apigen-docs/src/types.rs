//! Language-neutral type handles produced by a [`TypeModel`](crate::source::TypeModel).

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A declared type as seen by the documentation model.
///
/// Names are simple (unqualified) names; qualification is resolved by the
/// adapter that produced the handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A named type with optional generic arguments (`String`, `List<User>`).
    Named {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeRef>,
    },
    /// An array of the element type (`int[]`).
    Array { element: Box<TypeRef> },
    /// A type the adapter could not resolve. Presented as `Object`.
    Unknown,
}

impl TypeRef {
    /// Creates a non-generic named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a generic named type.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    /// Creates an array of `element`.
    pub fn array(element: TypeRef) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// The `void` pseudo-type used for methods without a result.
    pub fn void() -> Self {
        Self::named("void")
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Named { name, args } if name == "void" && args.is_empty())
    }

    /// Simple name used for normal-type lookups. Arrays have no simple name.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name),
            Self::Array { .. } => None,
            Self::Unknown => Some("Object"),
        }
    }

    /// Replaces type variables bound in `bindings`.
    ///
    /// Only argument-less names are treated as variables, so `T` is replaced
    /// while `List<T>` is rebuilt around the substituted argument.
    pub fn substitute(&self, bindings: &FxHashMap<String, TypeRef>) -> TypeRef {
        if bindings.is_empty() {
            return self.clone();
        }
        match self {
            Self::Named { name, args } if args.is_empty() => bindings
                .get(name)
                .cloned()
                .unwrap_or_else(|| self.clone()),
            Self::Named { name, args } => Self::Named {
                name: name.clone(),
                args: args.iter().map(|arg| arg.substitute(bindings)).collect(),
            },
            Self::Array { element } => Self::array(element.substitute(bindings)),
            Self::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (index, arg) in args.iter().enumerate() {
                        if index > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Array { element } => write!(f, "{element}[]"),
            Self::Unknown => f.write_str("Object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_generic_and_array_types() {
        let ty = TypeRef::generic(
            "Map",
            vec![
                TypeRef::named("String"),
                TypeRef::generic("List", vec![TypeRef::named("User")]),
            ],
        );
        assert_eq!(ty.to_string(), "Map<String, List<User>>");
        assert_eq!(TypeRef::array(TypeRef::named("int")).to_string(), "int[]");
        assert_eq!(TypeRef::Unknown.to_string(), "Object");
    }

    #[test]
    fn substitutes_type_variables() {
        let mut bindings = FxHashMap::default();
        bindings.insert("T".to_string(), TypeRef::named("User"));

        let ty = TypeRef::generic("List", vec![TypeRef::named("T")]);
        assert_eq!(ty.substitute(&bindings).to_string(), "List<User>");
        assert_eq!(
            TypeRef::array(TypeRef::named("T"))
                .substitute(&bindings)
                .to_string(),
            "User[]"
        );
        assert_eq!(TypeRef::named("String").substitute(&bindings).to_string(), "String");
    }

    #[test]
    fn recognises_void() {
        assert!(TypeRef::void().is_void());
        assert!(!TypeRef::named("Void").is_void());
    }
}
