use serde::{Deserialize, Serialize};
use std::fmt;

/// One import statement lifted out of a Python source file.
///
/// The extractor reports what the source says, not whether it resolves;
/// a descriptor for `import os` looks the same whether or not `os.py`
/// exists anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportDescriptor {
    /// Dotted module path with leading dots stripped. Empty for bare
    /// relative imports such as `from . import x`.
    pub module: String,
    /// Names pulled in by `from ... import a, b`; empty for plain imports.
    pub symbols: Vec<String>,
    /// True for `from module import *`.
    pub is_wildcard: bool,
    /// Number of leading dots on a relative import; 0 for absolute.
    pub level: u32,
    /// Line of the statement, 1-based.
    pub line: usize,
}

impl ImportDescriptor {
    pub fn is_relative(&self) -> bool {
        self.level > 0
    }

    /// Source-level spelling of the target, leading dots included.
    /// `from ..pkg import x` renders as `..pkg`, `from . import x` as `.`.
    pub fn display_name(&self) -> String {
        let mut name = ".".repeat(self.level as usize);
        name.push_str(&self.module);
        name
    }
}

/// What the resolver decided about one import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportResolution {
    /// The import lands on project files; identities in candidate order.
    InProject(Vec<String>),
    /// Found on a search root outside the project; real but not ours.
    External,
    /// Found nowhere. Surfaces as a diagnostic.
    Unresolved,
}

/// A non-fatal problem observed while mapping, reported out of band.
///
/// `file` is always the node identity as it appears in the dependency map,
/// so diagnostics can be joined back to graph keys directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    UnresolvedImport {
        file: String,
        import: String,
        line: usize,
    },
    UnreadableFile {
        file: String,
        reason: String,
    },
    UnparsableFile {
        file: String,
        reason: String,
    },
}

impl Diagnostic {
    /// Identity of the file the diagnostic is attached to.
    pub fn file(&self) -> &str {
        match self {
            Diagnostic::UnresolvedImport { file, .. }
            | Diagnostic::UnreadableFile { file, .. }
            | Diagnostic::UnparsableFile { file, .. } => file,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedImport { file, import, line } => {
                write!(f, "{}:{}: unresolved import '{}'", file, line, import)
            }
            Diagnostic::UnreadableFile { file, reason } => {
                write!(f, "{}: unreadable: {}", file, reason)
            }
            Diagnostic::UnparsableFile { file, reason } => {
                write!(f, "{}: parse failed: {}", file, reason)
            }
        }
    }
}
