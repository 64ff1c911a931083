//! Output serialization for the documentation model.
//!
//! Markdown is the primary format. JSON and YAML dump the same model with
//! every list in the order the markdown uses.

use crate::error::Result as SerializeResult;
use crate::model::Model;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Renders the model as markdown.
pub fn serialize_markdown(model: &Model) -> String {
    debug!("Rendering documentation model to Markdown");
    model.render()
}

/// Serializes the model to YAML.
///
/// # Errors
///
/// Returns [`Error::SerializationError`](crate::error::Error::SerializationError)
/// if serialization fails.
pub fn serialize_yaml(model: &Model) -> SerializeResult<String> {
    debug!("Serializing documentation model to YAML");
    Ok(serde_yaml::to_string(model)?)
}

/// Serializes the model to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::SerializationError`](crate::error::Error::SerializationError)
/// if serialization fails.
pub fn serialize_json(model: &Model) -> SerializeResult<String> {
    debug!("Serializing documentation model to JSON");
    Ok(serde_json::to_string_pretty(model)?)
}

/// Writes string content to a file, creating parent directories as needed.
/// An existing file is overwritten.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::AstParser;
    use tempfile::TempDir;

    /// Helper function to build a small model from Java sources
    fn create_test_model(sources: &[&str]) -> Model {
        let mut model = Model::new();
        for source in sources {
            let unit = AstParser::parse_source(source).unwrap();
            model.add_unit(&unit);
        }
        model
    }

    fn sample_model() -> Model {
        create_test_model(&[
            r#"
            package zoo;
            /** An animal. */
            public class Animal implements Comparable<Animal> {
                public Animal(String name) {}
                public String name;
                public void speak() {}
                public int compareTo(Animal other) { return 0; }
            }
            "#,
            "package farm; public class Barn {}",
        ])
    }

    #[test]
    fn test_serialize_markdown() {
        let md = serialize_markdown(&sample_model());

        assert!(md.starts_with("# Package: farm\n\n## Barn\n\n"));
        assert!(md.contains("## Animal > Comparable\n\nAn animal.\n"));
        assert!(md.contains("### Animal()\n\nParameters:\n\n* name : String\n"));
    }

    #[test]
    fn test_serialize_json() {
        let json = serialize_json(&sample_model()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let namespaces = parsed["namespaces"].as_array().unwrap();
        assert_eq!(namespaces.len(), 2);
        assert_eq!(namespaces[0]["name"], "farm");
        assert_eq!(namespaces[1]["name"], "zoo");

        let animal = &namespaces[1]["types"][0];
        assert_eq!(animal["id"], "zoo.Animal");
        assert_eq!(animal["super_types"], "Comparable");
        assert_eq!(animal["fields"][0]["type"], "String");
        assert_eq!(animal["methods"][0]["name"], "compareTo");
        assert_eq!(animal["methods"][1]["name"], "speak");
        assert_eq!(animal["constructors"][0]["parameters"][0]["name"], "name");
    }

    #[test]
    fn test_serialize_json_omits_absent_super_types() {
        let json = serialize_json(&create_test_model(&["public class Plain {}"])).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let plain = &parsed["namespaces"][0]["types"][0];
        assert_eq!(parsed["namespaces"][0]["name"], "default");
        assert!(plain.get("super_types").is_none());
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&sample_model()).unwrap();

        assert!(yaml.contains("namespaces:"));
        assert!(yaml.contains("name: farm"));
        assert!(yaml.contains("id: zoo.Animal"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["namespaces"][1]["types"][0]["name"], "Animal");
    }

    #[test]
    fn test_serialize_empty_model() {
        let model = Model::new();
        assert_eq!(serialize_markdown(&model), "");

        let json = serialize_json(&model).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["namespaces"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("API.md");

        write_to_file("# Package: p\n\n", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "# Package: p\n\n");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("docs").join("api").join("API.md");

        write_to_file("content", &file_path).unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "content");
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("API.md");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }
}
