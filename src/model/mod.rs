//! Documentation model built from parsed source units.
//!
//! The model is populated once, one [`SourceUnit`] at a time, and then rendered
//! once. Insertion order never leaks into the output: namespaces, types and
//! members are always emitted sorted by name.
//!
//! # Example
//!
//! ```no_run
//! use markdown_from_java::model::Model;
//! use markdown_from_java::parser::AstParser;
//!
//! let unit = AstParser::parse_source("package pkg; public class Foo { public int x; }").unwrap();
//! let mut model = Model::new();
//! model.add_unit(&unit);
//! print!("{}", model.render());
//! ```

pub mod comment;
pub mod member;
pub mod types;

pub use comment::{format_comment, OVERRIDE_PLACEHOLDER, UNDOCUMENTED};
pub use member::{Constructor, Field, Member, Method, Parameter};
pub use types::Type;

use crate::syntax::{SourceUnit, TypeDecl};
use log::debug;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Namespace used for units without a package declaration.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Anything that is ordered by its name when rendered.
pub trait Named {
    fn name(&self) -> &str;
}

/// Stable sort by name; entries with equal names keep their discovery order.
pub(crate) fn by_name<'a, T: Named + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.into_iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}

pub(crate) fn serialize_by_name<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Named + Serialize,
{
    serializer.collect_seq(by_name(items))
}

fn serialize_namespaces<S>(
    namespaces: &HashMap<String, Namespace>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(by_name(namespaces.values()))
}

/// A named group of types (a Java package).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Namespace {
    pub name: String,
    #[serde(serialize_with = "serialize_by_name")]
    pub types: Vec<Type>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Appends a type, identified as `<namespace>.<name>`.
    pub fn add_type(&mut self, decl: &TypeDecl) {
        let id = format!("{}.{}", self.name, decl.name);
        debug!("Adding type {}", id);
        self.types.push(Type::from_decl(id, decl));
    }
}

impl Named for Namespace {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# Package: {}\n\n", self.name)?;
        for t in by_name(&self.types) {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

/// Root of the documentation model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Model {
    #[serde(serialize_with = "serialize_namespaces")]
    namespaces: HashMap<String, Namespace>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the namespace with the given name, creating it on first use.
    pub fn namespace_mut(&mut self, name: &str) -> &mut Namespace {
        self.namespaces
            .entry(name.to_string())
            .or_insert_with(|| Namespace::new(name))
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Namespaces in rendering order.
    pub fn namespaces(&self) -> Vec<&Namespace> {
        by_name(self.namespaces.values())
    }

    /// Folds one parsed unit into the model.
    ///
    /// The unit's package (or [`DEFAULT_NAMESPACE`]) is created even when it
    /// contributes no public type; non-public top-level types are skipped.
    pub fn add_unit(&mut self, unit: &SourceUnit) {
        let name = unit.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE);
        let namespace = self.namespace_mut(name);
        for decl in unit.types.iter().filter(|t| t.is_public) {
            namespace.add_type(decl);
        }
    }

    /// Renders the whole model as markdown.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for namespace in self.namespaces() {
            write!(f, "{}", namespace)?;
        }
        Ok(())
    }
}
