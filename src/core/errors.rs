/// Domain-specific error types for pydepmap using thiserror
///
/// Two tiers: `MapError` aborts a run before any graph is produced, while
/// `ParseError` is scoped to a single file and is recovered by the graph
/// builder (the file keeps its node, the failure becomes a diagnostic).
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for mapping operations
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Project root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Project root is not a directory: {path}")]
    RootNotDirectory { path: PathBuf },

    #[error("Entry file not found: {path}")]
    EntryNotFound { path: PathBuf },

    #[error("Entry file is not a Python source: {path}")]
    EntryNotPython { path: PathBuf },

    #[error("Entry file {entry} lies outside the project root {root}")]
    EntryOutsideRoot { entry: PathBuf, root: PathBuf },

    #[error("Failed to load the Python grammar")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("I/O error on {path}: {reason}")]
    Io {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },
}

/// Per-file parsing errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {path}: {reason}")]
    Read {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    Encoding { path: PathBuf },

    #[error("Syntax error in {path} at line {line}")]
    Syntax { path: PathBuf, line: usize },

    #[error("Parser produced no syntax tree for {path}")]
    TreeUnavailable { path: PathBuf },
}

/// Helper functions for common error patterns
impl MapError {
    pub fn io_error(path: PathBuf, source: io::Error) -> Self {
        MapError::Io {
            path,
            reason: source.to_string(),
            source,
        }
    }
}

impl ParseError {
    pub fn read_error(path: PathBuf, source: io::Error) -> Self {
        ParseError::Read {
            path,
            reason: source.to_string(),
            source,
        }
    }

    /// Path of the file this error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            ParseError::Read { path, .. }
            | ParseError::Encoding { path }
            | ParseError::Syntax { path, .. }
            | ParseError::TreeUnavailable { path } => path,
        }
    }
}
