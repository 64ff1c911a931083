//! Doc-comment normalization.

use crate::syntax::Comment;

/// Documentation text used when a declaration carries no doc-comment.
pub const UNDOCUMENTED: &str = "_undocumented_\n";

/// Documentation text used for an `@Override` method without its own doc-comment.
pub const OVERRIDE_PLACEHOLDER: &str = "_Overridden method of supertype._";

/// Turns an attached comment into documentation text.
///
/// Missing comments and plain (non-doc) comments yield [`UNDOCUMENTED`].
/// Doc-comments are processed line by line: delimiters and the `* `
/// continuation marker are stripped, empty lines are dropped and a lone `*`
/// becomes an explicit blank line. Every emitted line ends with a newline.
pub fn format_comment(comment: Option<&Comment>) -> String {
    let comment = match comment {
        Some(c) if c.is_doc => c,
        _ => return UNDOCUMENTED.to_string(),
    };

    let mut doc = String::new();
    for line in comment.text.lines() {
        let mut l = line.trim();
        if let Some(rest) = l.strip_prefix("/**") {
            l = rest;
        }
        if let Some(rest) = l.strip_suffix("*/") {
            l = rest;
        }
        if let Some(rest) = l.strip_prefix("* ") {
            l = rest;
        }
        let l = l.trim();
        if l.is_empty() {
            continue;
        }
        if l != "*" {
            doc.push_str(l);
        }
        doc.push('\n');
    }
    doc
}
