//! Builds [`MethodDoc`] models by expanding parameter and return types into
//! field trees.

use tracing::debug;

use crate::error::{DocsError, Result};
use crate::model::{FieldInfo, MethodDoc, ParamKind};
use crate::source::{MemberSignature, MethodSignature, TypeModel};
use crate::types::TypeRef;

/// Name given to the single response node of non-object return types.
pub const RESULT_FIELD: &str = "result";

/// Options controlling field-tree expansion.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum number of nested compound types expanded on one path.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { max_depth: 16 }
    }
}

/// Converts method signatures into documentation models.
#[derive(Debug)]
pub struct DocModelBuilder<'m, M: ?Sized> {
    model: &'m M,
    options: BuildOptions,
}

impl<'m, M: TypeModel + ?Sized> DocModelBuilder<'m, M> {
    pub fn new(model: &'m M, options: BuildOptions) -> Self {
        Self { model, options }
    }

    /// Document every overload of `method` declared on `type_name`.
    pub fn build(&self, type_name: &str, method: &str) -> Result<Vec<MethodDoc>> {
        let methods = self.methods_of(type_name)?;
        let docs: Vec<MethodDoc> = methods
            .iter()
            .filter(|signature| signature.name == method)
            .map(|signature| self.build_method(signature))
            .collect();
        if docs.is_empty() {
            return Err(DocsError::MethodNotFound {
                class: type_name.to_string(),
                method: method.to_string(),
            });
        }
        Ok(docs)
    }

    /// Document every method declared on `type_name`.
    pub fn build_all(&self, type_name: &str) -> Result<Vec<MethodDoc>> {
        Ok(self
            .methods_of(type_name)?
            .iter()
            .map(|signature| self.build_method(signature))
            .collect())
    }

    /// Build the model of a single method.
    pub fn build_method(&self, signature: &MethodSignature) -> MethodDoc {
        debug!(
            class = %signature.declaring_type,
            method = %signature.name,
            "building documentation model"
        );
        let request = signature
            .parameters
            .iter()
            .map(|parameter| self.field(parameter, &mut Vec::new()))
            .collect();

        MethodDoc {
            name: signature.name.clone(),
            package: signature.package.clone(),
            declaring_type: signature.declaring_type.clone(),
            return_type: signature.return_type.clone(),
            params: param_list(&signature.parameters),
            description: signature.description.clone(),
            request,
            response: self.response_fields(signature),
        }
    }

    fn methods_of(&self, type_name: &str) -> Result<Vec<MethodSignature>> {
        self.model
            .list_methods(type_name)
            .ok_or_else(|| DocsError::ClassNotFound {
                name: type_name.to_string(),
            })
    }

    /// Objects are flattened to their fields; everything else becomes a
    /// single `result` node described by the `@return` text.
    fn response_fields(&self, signature: &MethodSignature) -> Vec<FieldInfo> {
        let return_type = &signature.return_type;
        if return_type.is_void() {
            return Vec::new();
        }
        let is_object = self.model.element_type(return_type).is_none()
            && !self.model.is_normal(return_type);
        if is_object {
            if let Some(fields) = self.expand(return_type, &mut Vec::new()) {
                return fields;
            }
        }
        let mut result = MemberSignature::new(RESULT_FIELD, return_type.clone());
        result.description = signature.return_description.clone();
        vec![self.field(&result, &mut Vec::new())]
    }

    fn field(&self, member: &MemberSignature, path: &mut Vec<TypeRef>) -> FieldInfo {
        let ty = &member.ty;
        let mut field = if let Some(element) = self.model.element_type(ty) {
            let mut field = FieldInfo::new(&member.name, ty.clone(), ParamKind::Array);
            if self.model.is_normal(&element) {
                field.example = Some(self.model.example_value(&element));
            } else {
                match self.expand(&element, path) {
                    Some(children) => field.children = children,
                    None => field.opaque = true,
                }
            }
            field.element = Some(element);
            field
        } else if self.model.is_normal(ty) {
            let mut field = FieldInfo::new(&member.name, ty.clone(), ParamKind::Literal);
            field.example = Some(self.model.example_value(ty));
            field
        } else {
            let mut field = FieldInfo::new(&member.name, ty.clone(), ParamKind::Object);
            match self.expand(ty, path) {
                Some(children) => field.children = children,
                None => field.opaque = true,
            }
            field
        };

        field.required = member.required;
        field.range = member.range.clone();
        field.description = member.description.clone();
        field
    }

    /// Fields of a compound type, or `None` when the type is unresolvable.
    ///
    /// A type already on the current path, or a path at the depth limit,
    /// yields no children so recursive structures terminate.
    fn expand(&self, ty: &TypeRef, path: &mut Vec<TypeRef>) -> Option<Vec<FieldInfo>> {
        if path.contains(ty) {
            debug!(%ty, "recursive type; not expanding again");
            return Some(Vec::new());
        }
        if path.len() >= self.options.max_depth {
            debug!(%ty, depth = path.len(), "depth limit reached");
            return Some(Vec::new());
        }
        let Some(members) = self.model.list_fields(ty) else {
            debug!(%ty, "unresolved type; rendering as opaque object");
            return None;
        };

        path.push(ty.clone());
        let children = members
            .iter()
            .map(|member| self.field(member, path))
            .collect();
        path.pop();
        Some(children)
    }
}

/// `(long id, String name)` as written in a declaration.
pub fn param_list(parameters: &[MemberSignature]) -> String {
    let params = parameters
        .iter()
        .map(|parameter| format!("{} {}", parameter.ty, parameter.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({params})")
}
