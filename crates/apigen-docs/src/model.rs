use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::TypeRef;

/// How a field is represented in request/response payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Terminal value (number, string, boolean, date...).
    Literal,
    /// Nested object with named members.
    Object,
    /// Array or collection.
    Array,
}

/// One node of a request or response field tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Field or parameter name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Payload representation.
    pub kind: ParamKind,
    /// Element type for [`ParamKind::Array`] nodes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub element: Option<TypeRef>,
    /// Whether the source marks the field as mandatory.
    #[serde(default)]
    pub required: bool,
    /// Human-readable value range.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub range: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Example value for literals and arrays of normal elements.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub example: Option<Value>,
    /// The (element) type could not be resolved and is shown as `Object`.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub opaque: bool,
    /// Nested fields, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<FieldInfo>,
}

impl FieldInfo {
    /// Creates a childless field without metadata.
    pub fn new(name: impl Into<String>, ty: TypeRef, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            ty,
            kind,
            element: None,
            required: false,
            range: None,
            description: None,
            example: None,
            opaque: false,
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Array whose element type is normal; rendered as a single row.
    pub fn is_normal_array(&self) -> bool {
        self.kind == ParamKind::Array && self.example.is_some()
    }

    /// Objects and arrays of compound elements. These are emphasised in tables.
    pub fn is_compound(&self) -> bool {
        match self.kind {
            ParamKind::Literal => false,
            ParamKind::Object => true,
            ParamKind::Array => !self.is_normal_array(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(FieldInfo::node_count).sum::<usize>()
    }
}

/// Documentation model for a single method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDoc {
    /// Method name.
    pub name: String,
    /// Package of the declaring type. Empty for the default package.
    pub package: String,
    /// Simple name of the declaring interface or class.
    pub declaring_type: String,
    /// Declared return type.
    pub return_type: TypeRef,
    /// Parameter list as written in the declaration, e.g. `(long id)`.
    pub params: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// One node per parameter.
    pub request: Vec<FieldInfo>,
    /// Nodes derived from the return type.
    pub response: Vec<FieldInfo>,
}

/// Maven coordinates printed in the dependency snippet.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,
}

impl ArtifactCoordinates {
    /// Returns `true` when no coordinate is set.
    pub fn is_empty(&self) -> bool {
        self.group_id.is_none() && self.artifact_id.is_none() && self.version.is_none()
    }
}
