//! Markdown from Java - API documentation from the public surface of Java sources.
//!
//! This library walks a source tree, parses each `.java` file, keeps the
//! publicly visible types and members, normalizes their doc-comments, and
//! renders one deterministically ordered Markdown document grouped by package.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Recursively scans a directory for Java files
//! 2. [`parser`] - Parses Java sources with tree-sitter into [`syntax`] units
//! 3. [`model`] - Builds the documentation model and renders it as Markdown
//! 4. [`serializer`] - Emits Markdown, JSON or YAML and writes files
//!
//! # Example Usage
//!
//! ```no_run
//! use markdown_from_java::{model::Model, parser::AstParser, scanner::FileScanner};
//! use std::path::PathBuf;
//!
//! let scan_result = FileScanner::new(PathBuf::from("./src/main/java")).scan().unwrap();
//!
//! let mut model = Model::new();
//! for result in AstParser::parse_files(&scan_result.java_files) {
//!     model.add_unit(&result.unwrap().unit);
//! }
//!
//! println!("{}", model.render());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod syntax;
