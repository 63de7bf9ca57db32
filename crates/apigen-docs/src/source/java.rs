//! [`TypeModel`] backed by tree-sitter's Java grammar.
//!
//! Every `.java` file handed to the index is parsed once; class, interface,
//! enum and record declarations (including nested ones) are recorded by
//! simple name together with their members and Javadoc. Resolution is purely
//! name based: a type that is not declared in an indexed file is unknown.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, warn};
use tree_sitter::{Node, Parser};
use walkdir::WalkDir;

use crate::error::{DocsError, Result};
use crate::normal;
use crate::source::annotations::{self, Annotation};
use crate::source::javadoc::{ParsedJavadoc, parse_javadoc};
use crate::source::{MemberSignature, MethodSignature, TypeModel};
use crate::types::TypeRef;

/// Kind of an indexed declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    Record,
}

impl DeclKind {
    fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::Class),
            "interface_declaration" => Some(Self::Interface),
            "enum_declaration" => Some(Self::Enum),
            "record_declaration" => Some(Self::Record),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
        }
    }
}

/// A declared type and the members the documentation model cares about.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,
    pub package: String,
    pub kind: DeclKind,
    /// Generic parameter names, in declaration order.
    pub type_params: Vec<String>,
    pub superclass: Option<TypeRef>,
    /// Instance fields (record components for records).
    pub fields: Vec<MemberSignature>,
    /// Non-static methods.
    pub methods: Vec<MethodSignature>,
    /// Enum constants.
    pub constants: Vec<String>,
    pub description: Option<String>,
    /// File the declaration was read from.
    pub path: PathBuf,
}

impl TypeDecl {
    fn bindings(&self, args: &[TypeRef]) -> FxHashMap<String, TypeRef> {
        self.type_params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let bound = args.get(index).cloned().unwrap_or(TypeRef::Unknown);
                (param.clone(), bound)
            })
            .collect()
    }
}

/// Name-indexed view over a set of Java source files.
#[derive(Debug, Default)]
pub struct JavaSourceIndex {
    types: FxHashMap<String, TypeDecl>,
    order: Vec<String>,
}

impl JavaSourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every file and directory in `paths`.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut index = Self::new();
        for path in paths {
            index.add_path(path)?;
        }
        Ok(index)
    }

    /// Index a single file, or every `*.java` file below a directory.
    ///
    /// Unreadable files inside a directory are logged and skipped; a missing
    /// root path is an error. Returns the number of declarations added.
    pub fn add_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|error| DocsError::io(path, error))?;
        if metadata.is_file() {
            return self.add_file(path);
        }

        let mut count = 0;
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, "skipping unreadable directory entry");
                    continue;
                }
            };
            let is_java = entry
                .path()
                .extension()
                .is_some_and(|extension| extension == "java");
            if !entry.file_type().is_file() || !is_java {
                continue;
            }
            match self.add_file(entry.path()) {
                Ok(added) => count += added,
                Err(error) => {
                    warn!(path = %entry.path().display(), %error, "skipping source file");
                }
            }
        }
        debug!(root = %path.display(), declarations = count, "indexed source directory");
        Ok(count)
    }

    /// Index one file on disk.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| DocsError::io(path, error))?;
        self.add_source(path, &source)
    }

    /// Index an in-memory compilation unit.
    pub fn add_source(&mut self, path: impl AsRef<Path>, source: &str) -> Result<usize> {
        let path = path.as_ref();
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|error| DocsError::parse_error(path.to_path_buf(), &[error.to_string()]))?;
        let tree = parser.parse(source, None).ok_or_else(|| {
            DocsError::parse_error(path.to_path_buf(), &["parser produced no tree".to_string()])
        })?;

        let root = tree.root_node();
        if root.has_error() {
            warn!(path = %path.display(), "source has syntax errors; indexing recoverable declarations");
        }

        let bytes = source.as_bytes();
        let mut collector = DeclCollector {
            source: bytes,
            package: package_name(root, bytes),
            path,
            decls: Vec::new(),
        };
        collector.visit_members(root);

        let count = collector.decls.len();
        for decl in collector.decls {
            self.insert(decl);
        }
        Ok(count)
    }

    fn insert(&mut self, decl: TypeDecl) {
        if let Some(existing) = self.types.get(&decl.name) {
            warn!(
                name = %decl.name,
                kept = %existing.path.display(),
                ignored = %decl.path.display(),
                "duplicate type name; keeping first declaration"
            );
            return;
        }
        self.order.push(decl.name.clone());
        self.types.insert(decl.name.clone(), decl);
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Indexed declarations in the order they were added.
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.order.iter().filter_map(|name| self.types.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn collect_fields(
        &self,
        ty: &TypeRef,
        visited: &mut Vec<String>,
    ) -> Option<Vec<MemberSignature>> {
        let TypeRef::Named { name, args } = ty else {
            return None;
        };
        let decl = self.types.get(name)?;
        if decl.kind == DeclKind::Enum || visited.contains(name) {
            return Some(Vec::new());
        }
        visited.push(name.clone());

        let bindings = decl.bindings(args);
        let mut fields = Vec::new();
        if let Some(superclass) = &decl.superclass {
            match self.collect_fields(&superclass.substitute(&bindings), visited) {
                Some(inherited) => fields.extend(inherited),
                None => debug!(%name, superclass = %superclass, "superclass not indexed; inherited fields omitted"),
            }
        }
        fields.extend(decl.fields.iter().map(|field| MemberSignature {
            ty: field.ty.substitute(&bindings),
            ..field.clone()
        }));
        Some(fields)
    }

    fn enum_decl(&self, ty: &TypeRef) -> Option<&TypeDecl> {
        match ty {
            TypeRef::Named { name, .. } => self
                .types
                .get(name)
                .filter(|decl| decl.kind == DeclKind::Enum),
            _ => None,
        }
    }
}

impl TypeModel for JavaSourceIndex {
    fn list_methods(&self, type_name: &str) -> Option<Vec<MethodSignature>> {
        self.types.get(type_name).map(|decl| decl.methods.clone())
    }

    fn list_fields(&self, ty: &TypeRef) -> Option<Vec<MemberSignature>> {
        self.collect_fields(ty, &mut Vec::new())
    }

    fn is_normal(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Named { name, .. } => {
                normal::is_normal_type(name) || self.enum_decl(ty).is_some()
            }
            TypeRef::Array { .. } | TypeRef::Unknown => false,
        }
    }

    fn example_value(&self, ty: &TypeRef) -> Value {
        if let Some(decl) = self.enum_decl(ty) {
            return decl
                .constants
                .first()
                .map(|constant| Value::from(constant.as_str()))
                .unwrap_or_else(|| Value::String(String::new()));
        }
        ty.simple_name()
            .map(normal::example_value)
            .unwrap_or(Value::Null)
    }
}

struct DeclCollector<'a> {
    source: &'a [u8],
    package: String,
    path: &'a Path,
    decls: Vec<TypeDecl>,
}

impl<'a> DeclCollector<'a> {
    fn text(&self, node: Node<'_>) -> &'a str {
        node.utf8_text(self.source).unwrap_or_default()
    }

    /// Record type declarations among the direct children of `container`.
    fn visit_members(&mut self, container: Node<'_>) {
        let mut cursor = container.walk();
        for child in container.named_children(&mut cursor) {
            if let Some(kind) = DeclKind::from_node_kind(child.kind()) {
                self.visit_type(child, kind);
            }
        }
    }

    fn visit_type(&mut self, node: Node<'_>, kind: DeclKind) {
        let Some(name) = node.child_by_field_name("name").map(|name| self.text(name)) else {
            return;
        };
        let mut decl = TypeDecl {
            name: name.to_string(),
            package: self.package.clone(),
            kind,
            type_params: self.type_params(node),
            superclass: None,
            fields: Vec::new(),
            methods: Vec::new(),
            constants: Vec::new(),
            description: self.javadoc(node).and_then(|doc| doc.summary),
            path: self.path.to_path_buf(),
        };

        if kind == DeclKind::Class {
            decl.superclass = node
                .child_by_field_name("superclass")
                .and_then(|superclass| superclass.named_child(0))
                .map(|ty| self.parse_type(ty));
        }
        if kind == DeclKind::Record {
            if let Some(parameters) = node.child_by_field_name("parameters") {
                let mut cursor = parameters.walk();
                for component in parameters.named_children(&mut cursor) {
                    if component.kind() == "formal_parameter" {
                        if let Some(member) = self.parameter(component, None) {
                            decl.fields.push(member);
                        }
                    }
                }
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.visit_body(body, &mut decl);
        }
        debug!(name = %decl.name, kind = kind.as_str(), fields = decl.fields.len(), methods = decl.methods.len(), "indexed declaration");
        self.decls.push(decl);
    }

    fn visit_body(&mut self, body: Node<'_>, decl: &mut TypeDecl) {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "field_declaration" => {
                    if !is_static(member) {
                        self.fields(member, &mut decl.fields);
                    }
                }
                "method_declaration" => {
                    if !is_static(member) {
                        if let Some(method) = self.method(member, decl) {
                            decl.methods.push(method);
                        }
                    }
                }
                "enum_constant" => {
                    if let Some(name) = member.child_by_field_name("name") {
                        decl.constants.push(self.text(name).to_string());
                    }
                }
                "enum_body_declarations" => self.visit_body(member, decl),
                kind => {
                    if let Some(kind) = DeclKind::from_node_kind(kind) {
                        self.visit_type(member, kind);
                    }
                }
            }
        }
    }

    fn fields(&self, node: Node<'_>, out: &mut Vec<MemberSignature>) {
        let Some(base) = node.child_by_field_name("type").map(|ty| self.parse_type(ty)) else {
            return;
        };
        let annotations = self.annotations(node);
        let required = annotations::is_required(&annotations);
        let range = annotations::value_range(&annotations);
        let description = self.javadoc(node).and_then(|doc| doc.summary);

        let mut cursor = node.walk();
        for declarator in node.children_by_field_name("declarator", &mut cursor) {
            let Some(name) = declarator.child_by_field_name("name") else {
                continue;
            };
            let ty = self.with_dimensions(base.clone(), declarator.child_by_field_name("dimensions"));
            out.push(MemberSignature {
                name: self.text(name).to_string(),
                ty,
                required,
                range: range.clone(),
                description: description.clone(),
            });
        }
    }

    fn method(&self, node: Node<'_>, decl: &TypeDecl) -> Option<MethodSignature> {
        let name = self.text(node.child_by_field_name("name")?);
        let return_type = self.parse_type(node.child_by_field_name("type")?);
        let doc = self.javadoc(node).unwrap_or_default();

        let mut parameters = Vec::new();
        if let Some(list) = node.child_by_field_name("parameters") {
            let mut cursor = list.walk();
            for parameter in list.named_children(&mut cursor) {
                let member = match parameter.kind() {
                    "formal_parameter" => self.parameter(parameter, Some(&doc)),
                    "spread_parameter" => self.spread_parameter(parameter, &doc),
                    _ => None,
                };
                parameters.extend(member);
            }
        }

        Some(MethodSignature {
            name: name.to_string(),
            package: decl.package.clone(),
            declaring_type: decl.name.clone(),
            return_type,
            parameters,
            description: doc.summary,
            return_description: doc.returns,
        })
    }

    fn parameter(&self, node: Node<'_>, doc: Option<&ParsedJavadoc>) -> Option<MemberSignature> {
        let name = self.text(node.child_by_field_name("name")?);
        let ty = self.parse_type(node.child_by_field_name("type")?);
        let ty = self.with_dimensions(ty, node.child_by_field_name("dimensions"));
        let annotations = self.annotations(node);
        Some(MemberSignature {
            name: name.to_string(),
            ty,
            required: annotations::is_required(&annotations),
            range: annotations::value_range(&annotations),
            description: doc.and_then(|doc| doc.param(name)).map(str::to_string),
        })
    }

    /// `String... names` is documented as `String[] names`.
    fn spread_parameter(&self, node: Node<'_>, doc: &ParsedJavadoc) -> Option<MemberSignature> {
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        let ty = children
            .iter()
            .find(|child| !matches!(child.kind(), "modifiers" | "variable_declarator"))
            .map(|ty| self.parse_type(*ty))?;
        let declarator = children
            .iter()
            .find(|child| child.kind() == "variable_declarator")?;
        let name = self.text(declarator.child_by_field_name("name")?);
        let annotations = self.annotations(node);
        Some(MemberSignature {
            name: name.to_string(),
            ty: TypeRef::array(ty),
            required: annotations::is_required(&annotations),
            range: annotations::value_range(&annotations),
            description: doc.param(name).map(str::to_string),
        })
    }

    fn parse_type(&self, node: Node<'_>) -> TypeRef {
        match node.kind() {
            "integral_type" | "floating_point_type" | "boolean_type" | "void_type"
            | "type_identifier" => TypeRef::named(self.text(node)),
            "scoped_type_identifier" => {
                let text = self.text(node);
                TypeRef::named(text.rsplit('.').next().unwrap_or(text).trim())
            }
            "generic_type" => {
                let mut cursor = node.walk();
                let mut name = None;
                let mut args = Vec::new();
                for child in node.named_children(&mut cursor) {
                    match child.kind() {
                        "type_identifier" | "scoped_type_identifier" => {
                            name = self.parse_type(child).simple_name().map(str::to_string);
                        }
                        "type_arguments" => {
                            let mut inner = child.walk();
                            args = child
                                .named_children(&mut inner)
                                .map(|arg| self.parse_type(arg))
                                .collect();
                        }
                        _ => {}
                    }
                }
                name.map_or(TypeRef::Unknown, |name| TypeRef::generic(name, args))
            }
            "array_type" => {
                let element = node
                    .child_by_field_name("element")
                    .map_or(TypeRef::Unknown, |element| self.parse_type(element));
                self.with_dimensions(element, node.child_by_field_name("dimensions"))
            }
            "wildcard" | "annotated_type" => {
                let mut cursor = node.walk();
                let bound = node
                    .named_children(&mut cursor)
                    .filter(|child| {
                        !matches!(child.kind(), "annotation" | "marker_annotation" | "super")
                    })
                    .last();
                bound.map_or_else(|| TypeRef::named("Object"), |bound| self.parse_type(bound))
            }
            _ => TypeRef::Unknown,
        }
    }

    fn with_dimensions(&self, mut ty: TypeRef, dimensions: Option<Node<'_>>) -> TypeRef {
        let depth = dimensions.map_or(0, |dims| self.text(dims).matches('[').count());
        for _ in 0..depth {
            ty = TypeRef::array(ty);
        }
        ty
    }

    fn type_params(&self, node: Node<'_>) -> Vec<String> {
        let Some(params) = node.child_by_field_name("type_parameters") else {
            return Vec::new();
        };
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter(|param| param.kind() == "type_parameter")
            .filter_map(|param| {
                let mut inner = param.walk();
                let name = param
                    .named_children(&mut inner)
                    .find(|child| matches!(child.kind(), "type_identifier" | "identifier"))
                    .map(|child| self.text(child).to_string());
                name
            })
            .collect()
    }

    fn annotations(&self, node: Node<'_>) -> Vec<Annotation> {
        modifiers(node)
            .map(|modifiers| annotations::collect(modifiers, self.source))
            .unwrap_or_default()
    }

    /// Javadoc block directly preceding `node`, skipping other comments.
    fn javadoc(&self, node: Node<'_>) -> Option<ParsedJavadoc> {
        let mut previous = node.prev_sibling();
        while let Some(sibling) = previous {
            match sibling.kind() {
                "block_comment" | "comment" => {
                    let text = self.text(sibling);
                    if text.starts_with("/**") {
                        return Some(parse_javadoc(text));
                    }
                }
                "line_comment" => {}
                _ => return None,
            }
            previous = sibling.prev_sibling();
        }
        None
    }
}

fn modifiers(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "modifiers");
    found
}

fn is_static(node: Node<'_>) -> bool {
    modifiers(node).is_some_and(|modifiers| {
        let mut cursor = modifiers.walk();
        let found = modifiers
            .children(&mut cursor)
            .any(|token| token.kind() == "static");
        found
    })
}

fn package_name(root: Node<'_>, source: &[u8]) -> String {
    let mut cursor = root.walk();
    let declaration = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_declaration");
    declaration
        .and_then(|declaration| {
            let mut inner = declaration.walk();
            let name = declaration
                .named_children(&mut inner)
                .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"));
            name
        })
        .and_then(|name| name.utf8_text(source).ok())
        .unwrap_or_default()
        .to_string()
}
