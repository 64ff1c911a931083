use std::path::PathBuf;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    ParseError { file: PathBuf, message: String },
    LanguageError(String),
    InvalidDirectory(PathBuf),
    SerializationError(String),
}

impl Error {
    /// Attach the offending file to a parse error produced before the path was known.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::ParseError { message, .. } => Error::ParseError {
                file: path.into(),
                message,
            },
            other => other,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::ParseError { file, message } => {
                write!(f, "Parse error in {}: {}", file.display(), message)
            }
            Error::LanguageError(msg) => write!(f, "Failed to load Java grammar: {}", msg),
            Error::InvalidDirectory(path) => {
                write!(f, "Not a readable directory: {}", path.display())
            }
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML: {}", err))
    }
}

impl From<tree_sitter::LanguageError> for Error {
    fn from(err: tree_sitter::LanguageError) -> Self {
        Error::LanguageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_file_sets_path_on_parse_error() {
        let err = Error::ParseError {
            file: PathBuf::from("<source>"),
            message: "syntax error at line 1, column 5".to_string(),
        }
        .in_file("src/Foo.java");

        assert_eq!(
            err.to_string(),
            "Parse error in src/Foo.java: syntax error at line 1, column 5"
        );
    }

    #[test]
    fn test_in_file_leaves_other_errors_alone() {
        let err = Error::InvalidDirectory(PathBuf::from("/nope")).in_file("Foo.java");
        assert_eq!(err.to_string(), "Not a readable directory: /nope");
    }
}
