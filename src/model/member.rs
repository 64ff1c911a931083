//! Documented members of a type: fields, methods and constructors.

use super::comment::{format_comment, OVERRIDE_PLACEHOLDER};
use super::Named;
use crate::syntax::{ConstructorDecl, FieldDecl, MemberDecl, MethodDecl, ParamDecl};
use serde::Serialize;
use std::fmt;

/// A member that survived the visibility rules, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(Field),
    Method(Method),
    Constructor(Constructor),
}

impl Member {
    /// Applies the inclusion rules to a declared member.
    ///
    /// Fields and constructors must be `public`. Methods must be `public`
    /// unless they are declared in an interface, where every method is included.
    pub fn from_decl(decl: &MemberDecl, in_interface: bool) -> Option<Self> {
        match decl {
            MemberDecl::Field(f) if f.is_public => Some(Member::Field(Field::from_decl(f))),
            MemberDecl::Method(m) if m.is_public || in_interface => {
                Some(Member::Method(Method::from_decl(m)))
            }
            MemberDecl::Constructor(c) if c.is_public => {
                Some(Member::Constructor(Constructor::from_decl(c)))
            }
            _ => None,
        }
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
}

impl From<&ParamDecl> for Parameter {
    fn from(decl: &ParamDecl) -> Self {
        Self {
            name: decl.name.clone(),
            type_text: decl.type_text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
    pub doc: String,
}

impl Field {
    pub fn from_decl(decl: &FieldDecl) -> Self {
        Self {
            name: decl.name.clone(),
            type_text: decl.type_text.clone(),
            doc: format_comment(decl.comment.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub return_type: String,
    pub doc: String,
    pub parameters: Vec<Parameter>,
}

impl Method {
    /// An `@Override` method without a doc-comment of its own gets a placeholder
    /// instead of the undocumented marker.
    pub fn from_decl(decl: &MethodDecl) -> Self {
        let has_doc_comment = decl.comment.as_ref().is_some_and(|c| c.is_doc);
        let doc = if decl.overrides && !has_doc_comment {
            OVERRIDE_PLACEHOLDER.to_string()
        } else {
            format_comment(decl.comment.as_ref())
        };

        Self {
            name: decl.name.clone(),
            return_type: decl.return_type.clone(),
            doc,
            parameters: decl.parameters.iter().map(Parameter::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constructor {
    pub name: String,
    pub doc: String,
    pub parameters: Vec<Parameter>,
}

impl Constructor {
    pub fn from_decl(decl: &ConstructorDecl) -> Self {
        Self {
            name: decl.name.clone(),
            doc: format_comment(decl.comment.as_ref()),
            parameters: decl.parameters.iter().map(Parameter::from).collect(),
        }
    }
}

impl Named for Field {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Method {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Constructor {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Writes the `Parameters:` block; nothing when the list is empty.
fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[Parameter]) -> fmt::Result {
    if parameters.is_empty() {
        return Ok(());
    }
    f.write_str("Parameters:\n\n")?;
    for p in parameters {
        writeln!(f, "* {} : {}", p.name, p.type_text)?;
    }
    f.write_str("\n")
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### {} : {}\n\n{}\n\n", self.name, self.type_text, self.doc)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### {}() : {}\n\n", self.name, self.return_type)?;
        write_parameters(f, &self.parameters)?;
        write!(f, "{}\n\n", self.doc)
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### {}()\n\n", self.name)?;
        write_parameters(f, &self.parameters)?;
        write!(f, "{}\n\n", self.doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::comment::UNDOCUMENTED;
    use crate::syntax::Comment;

    fn method(is_public: bool, overrides: bool, comment: Option<&str>) -> MethodDecl {
        MethodDecl {
            name: "run".to_string(),
            return_type: "void".to_string(),
            parameters: vec![],
            is_public,
            overrides,
            comment: comment.map(Comment::from_source),
        }
    }

    #[test]
    fn test_private_field_is_excluded() {
        let decl = MemberDecl::Field(FieldDecl {
            name: "secret".to_string(),
            type_text: "String".to_string(),
            is_public: false,
            comment: None,
        });
        assert_eq!(Member::from_decl(&decl, false), None);
        // Interfaces do not relax the rule for fields
        assert_eq!(Member::from_decl(&decl, true), None);
    }

    #[test]
    fn test_public_field_is_included() {
        let decl = MemberDecl::Field(FieldDecl {
            name: "x".to_string(),
            type_text: "int".to_string(),
            is_public: true,
            comment: None,
        });
        match Member::from_decl(&decl, false) {
            Some(Member::Field(field)) => {
                assert_eq!(field.name, "x");
                assert_eq!(field.type_text, "int");
                assert_eq!(field.doc, UNDOCUMENTED);
            }
            other => panic!("expected field, got {:?}", other),
        }
    }

    #[test]
    fn test_non_public_method_only_included_in_interface() {
        let decl = MemberDecl::Method(method(false, false, None));
        assert_eq!(Member::from_decl(&decl, false), None);
        assert!(matches!(
            Member::from_decl(&decl, true),
            Some(Member::Method(_))
        ));
    }

    #[test]
    fn test_non_public_constructor_is_excluded() {
        let decl = MemberDecl::Constructor(ConstructorDecl {
            name: "Foo".to_string(),
            parameters: vec![],
            is_public: false,
            comment: None,
        });
        assert_eq!(Member::from_decl(&decl, false), None);
        assert_eq!(Member::from_decl(&decl, true), None);
    }

    #[test]
    fn test_override_without_doc_gets_placeholder() {
        let m = Method::from_decl(&method(true, true, None));
        assert_eq!(m.doc, OVERRIDE_PLACEHOLDER);
    }

    #[test]
    fn test_override_with_plain_comment_gets_placeholder() {
        let m = Method::from_decl(&method(true, true, Some("// delegates")));
        assert_eq!(m.doc, OVERRIDE_PLACEHOLDER);
    }

    #[test]
    fn test_override_with_doc_comment_keeps_doc() {
        let m = Method::from_decl(&method(true, true, Some("/** Runs it. */")));
        assert_eq!(m.doc, "Runs it.\n");
    }

    #[test]
    fn test_method_without_override_or_doc_is_undocumented() {
        let m = Method::from_decl(&method(true, false, None));
        assert_eq!(m.doc, UNDOCUMENTED);
    }

    #[test]
    fn test_field_markdown() {
        let field = Field {
            name: "x".to_string(),
            type_text: "int".to_string(),
            doc: UNDOCUMENTED.to_string(),
        };
        assert_eq!(field.to_string(), "### x : int\n\n_undocumented_\n\n\n");
    }

    #[test]
    fn test_method_markdown_with_parameters() {
        let m = Method {
            name: "put".to_string(),
            return_type: "V".to_string(),
            doc: "Stores a value.\n".to_string(),
            parameters: vec![
                Parameter::from(&ParamDecl::new("key", "K")),
                Parameter::from(&ParamDecl::new("value", "V")),
            ],
        };
        assert_eq!(
            m.to_string(),
            "### put() : V\n\nParameters:\n\n* key : K\n* value : V\n\nStores a value.\n\n\n"
        );
    }

    #[test]
    fn test_constructor_markdown_without_parameters() {
        let c = Constructor {
            name: "Foo".to_string(),
            doc: UNDOCUMENTED.to_string(),
            parameters: vec![],
        };
        assert_eq!(c.to_string(), "### Foo()\n\n_undocumented_\n\n\n");
    }
}
