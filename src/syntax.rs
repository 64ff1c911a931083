//! Language-neutral view of a parsed source file.
//!
//! These types are what the [`parser`](crate::parser) produces and what the
//! [`model`](crate::model) consumes. They carry exactly the facts the
//! documentation model needs: namespace, top-level type declarations, and for
//! each type its visibility, attached comment, supertypes and direct members.

/// One parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUnit {
    /// Declared namespace (Java package), if any
    pub namespace: Option<String>,
    /// Top-level type declarations in source order
    pub types: Vec<TypeDecl>,
}

/// A comment found immediately before a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Raw comment text including its delimiters
    pub text: String,
    /// Whether this is a structured documentation comment (`/** ... */`)
    pub is_doc: bool,
}

impl Comment {
    /// Builds a comment from its raw source text, classifying it as a doc-comment or not.
    pub fn from_source(text: &str) -> Self {
        let is_doc = text.starts_with("/**") && text != "/**/";
        Self {
            text: text.to_string(),
            is_doc,
        }
    }
}

/// The kind of a top-level type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl TypeKind {
    /// Interface members are implicitly public.
    pub fn is_interface(self) -> bool {
        self == TypeKind::Interface
    }

    /// Only classes and interfaces contribute a supertype line.
    pub fn is_class_or_interface(self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Interface)
    }
}

/// A top-level type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub is_public: bool,
    pub comment: Option<Comment>,
    pub kind: TypeKind,
    /// Simple names of extended types, in declaration order
    pub extended: Vec<String>,
    /// Simple names of implemented types, in declaration order
    pub implemented: Vec<String>,
    /// Direct members in source order
    pub members: Vec<MemberDecl>,
}

/// A member declared directly in a type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDecl {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Name of the first declared variable
    pub name: String,
    /// Type text of the first declared variable
    pub type_text: String,
    pub is_public: bool,
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<ParamDecl>,
    pub is_public: bool,
    /// Carries an `@Override` marker
    pub overrides: bool,
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub name: String,
    pub parameters: Vec<ParamDecl>,
    pub is_public: bool,
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    pub type_text: String,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }
}
