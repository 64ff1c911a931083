use super::comment::format_comment;
use super::member::{Constructor, Field, Member, Method};
use super::{by_name, serialize_by_name, Named};
use crate::syntax::TypeDecl;
use serde::Serialize;
use std::fmt;

/// A documented public type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Type {
    /// `<namespace>.<name>`, reserved for anchors
    pub id: String,
    pub name: String,
    pub doc: String,
    /// Comma-joined extended then implemented type names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_types: Option<String>,
    #[serde(serialize_with = "serialize_by_name")]
    pub constructors: Vec<Constructor>,
    #[serde(serialize_with = "serialize_by_name")]
    pub fields: Vec<Field>,
    #[serde(serialize_with = "serialize_by_name")]
    pub methods: Vec<Method>,
}

impl Type {
    /// Builds a type from its declaration, keeping only the members that pass
    /// the visibility rules. Nested types are not visited.
    pub fn from_decl(id: String, decl: &TypeDecl) -> Self {
        let mut fields = Vec::new();
        let mut methods = Vec::new();
        let mut constructors = Vec::new();

        let in_interface = decl.kind.is_interface();
        for member in &decl.members {
            match Member::from_decl(member, in_interface) {
                Some(Member::Field(f)) => fields.push(f),
                Some(Member::Method(m)) => methods.push(m),
                Some(Member::Constructor(c)) => constructors.push(c),
                None => {}
            }
        }

        let super_types = if decl.kind.is_class_or_interface() {
            let names: Vec<&str> = decl
                .extended
                .iter()
                .chain(&decl.implemented)
                .map(String::as_str)
                .collect();
            (!names.is_empty()).then(|| names.join(", "))
        } else {
            None
        };

        Self {
            id,
            name: decl.name.clone(),
            doc: format_comment(decl.comment.as_ref()),
            super_types,
            constructors,
            fields,
            methods,
        }
    }
}

impl Named for Type {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {}", self.name)?;
        if let Some(super_types) = &self.super_types {
            write!(f, " > {}", super_types)?;
        }
        write!(f, "\n\n{}\n\n", self.doc)?;

        for c in by_name(&self.constructors) {
            write!(f, "{}", c)?;
        }
        for field in by_name(&self.fields) {
            write!(f, "{}", field)?;
        }
        for m in by_name(&self.methods) {
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}
