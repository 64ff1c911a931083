use crate::error::{Error, Result as ParseResult};
use crate::syntax::{
    Comment, ConstructorDecl, FieldDecl, MemberDecl, MethodDecl, ParamDecl, SourceUnit, TypeDecl,
    TypeKind,
};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::Node;

/// Java source parser.
///
/// The `AstParser` uses tree-sitter's Java grammar to build a concrete syntax
/// tree and lowers it into a [`SourceUnit`], the language-neutral view the
/// documentation model is built from.
///
/// # Example
///
/// ```no_run
/// use markdown_from_java::parser::AstParser;
/// use std::path::Path;
///
/// let parsed = AstParser::parse_file(Path::new("src/main/java/Foo.java")).unwrap();
/// println!("Parsed {} types", parsed.unit.types.len());
/// ```
pub struct AstParser;

/// A successfully parsed Java file.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// Declarations found in the file
    pub unit: SourceUnit,
}

impl AstParser {
    /// Parses Java source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if the source contains a syntax error; the
    /// message names the line and column of the first one. The error's file is
    /// `<source>`, see [`Error::in_file`].
    pub fn parse_source(source: &str) -> ParseResult<SourceUnit> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&tree_sitter_java::language())?;

        let tree = parser.parse(source, None).ok_or_else(|| Error::ParseError {
            file: PathBuf::from("<source>"),
            message: "parser produced no syntax tree".to_string(),
        })?;

        let root = tree.root_node();
        if let Some(bad) = first_error(root) {
            let pos = bad.start_position();
            return Err(Error::ParseError {
                file: PathBuf::from("<source>"),
                message: format!(
                    "syntax error at line {}, column {}",
                    pos.row + 1,
                    pos.column + 1
                ),
            });
        }

        Ok(Lowering { source }.unit(root))
    }

    /// Parses a single Java source file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid Java syntax
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let unit = Self::parse_source(&content)
            .map_err(|e| e.in_file(path))
            .with_context(|| format!("Failed to parse Java syntax in file: {}", path.display()))?;

        debug!(
            "Parsed {}: package {:?}, {} types",
            path.display(),
            unit.namespace,
            unit.types.len()
        );

        Ok(ParsedFile {
            path: path.to_path_buf(),
            unit,
        })
    }

    /// Parses multiple Java source files, returning one result per path in order.
    ///
    /// Failures are logged as warnings; deciding whether they are fatal is
    /// left to the caller.
    pub fn parse_files(paths: &[PathBuf]) -> Vec<Result<ParsedFile>> {
        debug!("Parsing {} files", paths.len());

        let results: Vec<Result<ParsedFile>> = paths
            .iter()
            .map(|path| {
                let result = Self::parse_file(path);
                if let Err(e) = &result {
                    warn!("Failed to parse {}: {:#}", path.display(), e);
                }
                result
            })
            .collect();

        let success_count = results.iter().filter(|r| r.is_ok()).count();
        debug!(
            "Parsing complete: {} succeeded, {} failed",
            success_count,
            results.len() - success_count
        );

        results
    }
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

#[derive(Debug, Default)]
struct Modifiers {
    is_public: bool,
    overrides: bool,
}

/// Converts a tree-sitter Java tree into a [`SourceUnit`].
struct Lowering<'a> {
    source: &'a str,
}

impl<'a> Lowering<'a> {
    fn text(&self, node: Node) -> &'a str {
        &self.source[node.byte_range()]
    }

    /// Literal type text with whitespace runs collapsed.
    fn type_text(&self, node: Node) -> String {
        self.text(node).split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn field_text(&self, node: Node, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|n| self.text(n).to_string())
            .unwrap_or_default()
    }

    fn unit(&self, root: Node) -> SourceUnit {
        let mut unit = SourceUnit::default();

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() == "package_declaration" {
                unit.namespace = self.package_name(child);
            } else if let Some(kind) = type_kind(child.kind()) {
                unit.types.push(self.type_decl(child, kind));
            }
        }

        unit
    }

    fn package_name(&self, node: Node) -> Option<String> {
        let mut cursor = node.walk();
        let name = node
            .named_children(&mut cursor)
            .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
            .map(|c| self.text(c).split_whitespace().collect::<String>());
        name
    }

    fn type_decl(&self, node: Node, kind: TypeKind) -> TypeDecl {
        let modifiers = self.modifiers(node);
        let mut extended = Vec::new();
        let mut implemented = Vec::new();

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "superclass" | "extends_interfaces" => self.type_names(child, &mut extended),
                "super_interfaces" => self.type_names(child, &mut implemented),
                _ => {}
            }
        }

        let members = node
            .child_by_field_name("body")
            .map(|body| self.members(body))
            .unwrap_or_default();

        TypeDecl {
            name: self.field_text(node, "name"),
            is_public: modifiers.is_public,
            comment: self.comment_before(node),
            kind,
            extended,
            implemented,
            members,
        }
    }

    /// Collects simple names from a `superclass`, `extends_interfaces` or
    /// `super_interfaces` clause, descending through its `type_list`.
    fn type_names(&self, node: Node, names: &mut Vec<String>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "type_list" {
                self.type_names(child, names);
            } else {
                names.push(self.simple_type_name(child));
            }
        }
    }

    /// `java.util.List<String>` becomes `List`.
    fn simple_type_name(&self, node: Node) -> String {
        let inner = match node.kind() {
            "generic_type" => node.named_child(0),
            "scoped_type_identifier" | "annotated_type" => node
                .named_child_count()
                .checked_sub(1)
                .and_then(|last| node.named_child(last)),
            _ => None,
        };
        match inner {
            Some(inner) => self.simple_type_name(inner),
            None => self.text(node).to_string(),
        }
    }

    fn members(&self, body: Node) -> Vec<MemberDecl> {
        let mut members = Vec::new();

        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            match child.kind() {
                "field_declaration" | "constant_declaration" => {
                    if let Some(field) = self.field(child) {
                        members.push(MemberDecl::Field(field));
                    }
                }
                "method_declaration" => members.push(MemberDecl::Method(self.method(child))),
                "constructor_declaration" => {
                    members.push(MemberDecl::Constructor(self.constructor(child)))
                }
                // Enum members follow the constant list
                "enum_body_declarations" => members.extend(self.members(child)),
                _ => {}
            }
        }

        members
    }

    fn field(&self, node: Node) -> Option<FieldDecl> {
        let declarator = node.child_by_field_name("declarator")?;
        let ty = node.child_by_field_name("type")?;

        let mut type_text = self.type_text(ty);
        if let Some(dims) = declarator.child_by_field_name("dimensions") {
            type_text.push_str(&self.type_text(dims));
        }

        Some(FieldDecl {
            name: self.field_text(declarator, "name"),
            type_text,
            is_public: self.modifiers(node).is_public,
            comment: self.comment_before(node),
        })
    }

    fn method(&self, node: Node) -> MethodDecl {
        let modifiers = self.modifiers(node);

        let mut return_type = node
            .child_by_field_name("type")
            .map(|t| self.type_text(t))
            .unwrap_or_default();
        if let Some(dims) = node.child_by_field_name("dimensions") {
            return_type.push_str(&self.type_text(dims));
        }

        MethodDecl {
            name: self.field_text(node, "name"),
            return_type,
            parameters: self.parameters(node),
            is_public: modifiers.is_public,
            overrides: modifiers.overrides,
            comment: self.comment_before(node),
        }
    }

    fn constructor(&self, node: Node) -> ConstructorDecl {
        ConstructorDecl {
            name: self.field_text(node, "name"),
            parameters: self.parameters(node),
            is_public: self.modifiers(node).is_public,
            comment: self.comment_before(node),
        }
    }

    fn parameters(&self, node: Node) -> Vec<ParamDecl> {
        let Some(list) = node.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut params = Vec::new();
        let mut cursor = list.walk();
        for child in list.named_children(&mut cursor) {
            match child.kind() {
                "formal_parameter" => {
                    let mut type_text = child
                        .child_by_field_name("type")
                        .map(|t| self.type_text(t))
                        .unwrap_or_default();
                    if let Some(dims) = child.child_by_field_name("dimensions") {
                        type_text.push_str(&self.type_text(dims));
                    }
                    params.push(ParamDecl::new(self.field_text(child, "name"), type_text));
                }
                "spread_parameter" => {
                    if let Some(param) = self.spread_parameter(child) {
                        params.push(param);
                    }
                }
                // Receiver parameters (`Foo this`) are not real parameters
                _ => {}
            }
        }
        params
    }

    /// `String... args` has no field names, only a type followed by a declarator.
    fn spread_parameter(&self, node: Node) -> Option<ParamDecl> {
        let mut cursor = node.walk();
        let children: Vec<Node> = node
            .named_children(&mut cursor)
            .filter(|c| c.kind() != "modifiers")
            .collect();

        let ty = children.first()?;
        let name = match children.last()? {
            d if d.kind() == "variable_declarator" => self.field_text(*d, "name"),
            d => self.text(*d).to_string(),
        };

        Some(ParamDecl::new(name, format!("{}...", self.type_text(*ty))))
    }

    fn modifiers(&self, node: Node) -> Modifiers {
        let mut modifiers = Modifiers::default();

        let mut cursor = node.walk();
        let Some(list) = node.children(&mut cursor).find(|c| c.kind() == "modifiers") else {
            return modifiers;
        };

        let mut cursor = list.walk();
        for child in list.children(&mut cursor) {
            match child.kind() {
                "public" => modifiers.is_public = true,
                "marker_annotation" | "annotation" => {
                    let name = self.field_text(child, "name");
                    if name.rsplit('.').next() == Some("Override") {
                        modifiers.overrides = true;
                    }
                }
                _ => {}
            }
        }

        modifiers
    }

    /// The comment directly preceding a declaration, if any.
    fn comment_before(&self, node: Node) -> Option<Comment> {
        let prev = node.prev_sibling()?;
        match prev.kind() {
            "block_comment" | "line_comment" | "comment" => {
                Some(Comment::from_source(self.text(prev)))
            }
            _ => None,
        }
    }
}

fn type_kind(node_kind: &str) -> Option<TypeKind> {
    match node_kind {
        "class_declaration" => Some(TypeKind::Class),
        "interface_declaration" => Some(TypeKind::Interface),
        "enum_declaration" => Some(TypeKind::Enum),
        "record_declaration" => Some(TypeKind::Record),
        "annotation_type_declaration" => Some(TypeKind::Annotation),
        _ => None,
    }
}
