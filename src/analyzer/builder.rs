use crate::analyzer::extractor::ImportExtractor;
use crate::analyzer::resolver::ModuleResolver;
use crate::core::constants::python;
use crate::core::errors::{MapError, ParseError};
use crate::core::types::{Diagnostic, ImportResolution};
use crate::graph::DependencyGraph;
use crate::project::ProjectScanner;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Everything one mapping run produces: the graph plus the problems
/// observed while building it. The two never mix; a caller that ignores
/// `diagnostics` still gets a complete, valid graph.
#[derive(Debug)]
pub struct MapResult {
    pub graph: DependencyGraph,
    pub diagnostics: Vec<Diagnostic>,
}

/// Drives extraction and resolution over an explicit work queue.
///
/// All state lives in the builder instance, so concurrent or repeated runs
/// cannot observe each other. A file that fails to read or parse keeps its
/// node and becomes a diagnostic; only a broken root or entry aborts a run,
/// and both are checked before traversal starts.
pub struct GraphBuilder {
    root: PathBuf,
    extractor: ImportExtractor,
    resolver: ModuleResolver,
}

impl GraphBuilder {
    pub fn new(root: &Path) -> Result<Self, MapError> {
        Self::with_search_roots(root, Vec::new())
    }

    pub fn with_search_roots(root: &Path, search_roots: Vec<PathBuf>) -> Result<Self, MapError> {
        if !root.exists() {
            return Err(MapError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(MapError::RootNotDirectory {
                path: root.to_path_buf(),
            });
        }
        let root = root
            .canonicalize()
            .map_err(|e| MapError::io_error(root.to_path_buf(), e))?;

        let mut canonical = Vec::new();
        for search_root in search_roots {
            match search_root.canonicalize() {
                Ok(path) => canonical.push(path),
                Err(e) => warn!("Ignoring unusable search root {:?}: {}", search_root, e),
            }
        }

        let extractor = ImportExtractor::new()?;
        let resolver = ModuleResolver::with_search_roots(root.clone(), canonical);
        Ok(Self {
            root,
            extractor,
            resolver,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map the part of the project reachable from `entry`. A relative
    /// `entry` is taken as root-relative.
    pub fn build_from(&mut self, entry: &Path) -> Result<MapResult, MapError> {
        let entry = self.validate_entry(entry)?;
        self.run(vec![entry])
    }

    /// Map every source the scanner finds, reachable from an entry or not.
    pub fn build_project(&mut self, scanner: &ProjectScanner) -> Result<MapResult, MapError> {
        let files = scanner.scan(&self.root);
        self.run(files)
    }

    fn validate_entry(&self, entry: &Path) -> Result<PathBuf, MapError> {
        let candidate = if entry.is_absolute() {
            entry.to_path_buf()
        } else {
            self.root.join(entry)
        };
        if !candidate.is_file() {
            return Err(MapError::EntryNotFound { path: candidate });
        }
        if candidate.extension().and_then(|e| e.to_str()) != Some(python::EXTENSION) {
            return Err(MapError::EntryNotPython { path: candidate });
        }
        let canonical = candidate
            .canonicalize()
            .map_err(|e| MapError::io_error(candidate.clone(), e))?;
        if !canonical.starts_with(&self.root) {
            return Err(MapError::EntryOutsideRoot {
                entry: canonical,
                root: self.root.clone(),
            });
        }
        Ok(canonical)
    }

    fn run(&mut self, seeds: Vec<PathBuf>) -> Result<MapResult, MapError> {
        let mut graph = DependencyGraph::new();
        let mut diagnostics = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<PathBuf> = seeds.into();

        while let Some(file) = queue.pop_front() {
            // queued paths are always under the canonical root
            let identity = match self.resolver.identity_of(&file) {
                Some(identity) => identity,
                None => continue,
            };
            if !visited.insert(identity.clone()) {
                continue;
            }
            graph.ensure_node(&identity);

            let imports = match self.extractor.extract_from_file(&file) {
                Ok(imports) => imports,
                Err(error) => {
                    warn!("Keeping {} without edges: {}", identity, error);
                    diagnostics.push(parse_diagnostic(&identity, &error));
                    continue;
                }
            };
            debug!("{}: {} imports", identity, imports.len());

            for import in &imports {
                match self.resolver.resolve(import, &file) {
                    ImportResolution::InProject(targets) => {
                        for target in targets {
                            graph.add_dependency(&identity, &target);
                            if !visited.contains(&target) {
                                queue.push_back(self.root.join(format!("{}.py", target)));
                            }
                        }
                    }
                    ImportResolution::External => {}
                    ImportResolution::Unresolved => {
                        diagnostics.push(Diagnostic::UnresolvedImport {
                            file: identity.clone(),
                            import: import.display_name(),
                            line: import.line,
                        });
                    }
                }
            }
        }

        debug!(
            "Mapped {} files, {} edges, {} diagnostics",
            graph.file_count(),
            graph.edge_count(),
            diagnostics.len()
        );
        Ok(MapResult { graph, diagnostics })
    }
}

/// Demotes a per-file failure to its diagnostic form. Reasons stay free of
/// absolute paths so serialized diagnostics compare equal across machines.
fn parse_diagnostic(identity: &str, error: &ParseError) -> Diagnostic {
    match error {
        ParseError::Read { reason, .. } => Diagnostic::UnreadableFile {
            file: identity.to_string(),
            reason: reason.clone(),
        },
        ParseError::Encoding { .. } => Diagnostic::UnreadableFile {
            file: identity.to_string(),
            reason: "not valid UTF-8".to_string(),
        },
        ParseError::Syntax { line, .. } => Diagnostic::UnparsableFile {
            file: identity.to_string(),
            reason: format!("syntax error at line {}", line),
        },
        ParseError::TreeUnavailable { .. } => Diagnostic::UnparsableFile {
            file: identity.to_string(),
            reason: "parser produced no syntax tree".to_string(),
        },
    }
}

/// Build the dependency graph reachable from `entry` inside `root`.
pub fn build_graph(root: &Path, entry: &Path) -> Result<MapResult, MapError> {
    GraphBuilder::new(root)?.build_from(entry)
}

/// Build the dependency graph of every Python file under `root`.
pub fn build_project_graph(root: &Path) -> Result<MapResult, MapError> {
    GraphBuilder::new(root)?.build_project(&ProjectScanner::new())
}
