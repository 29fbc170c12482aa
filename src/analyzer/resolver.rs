use crate::core::constants::python;
use crate::core::types::{ImportDescriptor, ImportResolution};
use std::path::{Path, PathBuf};

/// Maps import descriptors onto files on disk.
///
/// Resolution happens against an ordered list of search bases: the importing
/// file's directory, the project root, then any configured extra roots. The
/// first base with a match wins. Whether a match counts as in-project is
/// decided purely by root containment; there is no stdlib denylist, so a
/// hit under an out-of-root search root is external and silent.
pub struct ModuleResolver {
    root: PathBuf,
    search_roots: Vec<PathBuf>,
}

impl ModuleResolver {
    /// `root` must already be canonicalized; every identity is computed
    /// relative to it.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            search_roots: Vec::new(),
        }
    }

    pub fn with_search_roots(root: PathBuf, search_roots: Vec<PathBuf>) -> Self {
        Self { root, search_roots }
    }

    pub fn resolve(&self, import: &ImportDescriptor, importing_file: &Path) -> ImportResolution {
        if import.is_relative() {
            self.resolve_relative(import, importing_file)
        } else {
            self.resolve_absolute(import, importing_file)
        }
    }

    /// Graph identity of an in-root file: root-relative, forward slashes,
    /// `.py` stripped. `pkg/__init__.py` keeps its `__init__` stem so it can
    /// never collide with a sibling `pkg.py`.
    pub fn identity_of(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let mut identity = parts.join("/");
        if identity.ends_with(python::SOURCE_SUFFIX) {
            let stem_len = identity.len() - python::SOURCE_SUFFIX.len();
            identity.truncate(stem_len);
        }
        Some(identity)
    }

    fn resolve_absolute(
        &self,
        import: &ImportDescriptor,
        importing_file: &Path,
    ) -> ImportResolution {
        let mut bases: Vec<&Path> = Vec::new();
        if let Some(dir) = importing_file.parent() {
            bases.push(dir);
        }
        bases.push(&self.root);
        bases.extend(self.search_roots.iter().map(PathBuf::as_path));

        for base in bases {
            if let Some(found) = probe_module(base, &import.module) {
                return self.classify(found, import);
            }
        }
        ImportResolution::Unresolved
    }

    /// Walks up `level - 1` directories from the importing file, then
    /// resolves the dotted part under the reached base. Stepping above the
    /// project root makes the import unresolvable; extra search roots are
    /// never consulted for relative imports.
    fn resolve_relative(
        &self,
        import: &ImportDescriptor,
        importing_file: &Path,
    ) -> ImportResolution {
        let mut base = match importing_file.parent() {
            Some(dir) => dir.to_path_buf(),
            None => return ImportResolution::Unresolved,
        };
        for _ in 1..import.level {
            if base == self.root {
                return ImportResolution::Unresolved;
            }
            base = match base.parent() {
                Some(parent) => parent.to_path_buf(),
                None => return ImportResolution::Unresolved,
            };
        }

        if import.module.is_empty() {
            return self.resolve_package_members(&base, import);
        }
        match probe_module(&base, &import.module) {
            Some(found) => self.classify(found, import),
            None => ImportResolution::Unresolved,
        }
    }

    /// `from . import a, b`: the reached directory itself plays the module
    /// role. Its `__init__.py` is the first candidate, then every named
    /// symbol that is a module or package of its own.
    fn resolve_package_members(&self, base: &Path, import: &ImportDescriptor) -> ImportResolution {
        let mut files = Vec::new();
        let init = base.join(python::PACKAGE_INIT);
        if init.is_file() {
            files.push(init);
        }
        if !import.is_wildcard {
            for symbol in &import.symbols {
                if let Some(sub) = probe_module(base, symbol) {
                    files.push(sub);
                }
            }
        }
        if files.is_empty() {
            return ImportResolution::Unresolved;
        }
        let identities = files.iter().filter_map(|f| self.identity_of(f)).collect();
        ImportResolution::InProject(identities)
    }

    /// Turns a matched file into a resolution. For `from package import x`
    /// the package's `__init__.py` stays the first candidate and each symbol
    /// that names a real submodule contributes another; symbols that are
    /// plain functions or classes add nothing.
    fn classify(&self, target: PathBuf, import: &ImportDescriptor) -> ImportResolution {
        if !target.starts_with(&self.root) {
            return ImportResolution::External;
        }

        let mut files = vec![target.clone()];
        let is_package = target
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n == python::PACKAGE_INIT)
            .unwrap_or(false);
        if is_package && !import.is_wildcard {
            if let Some(package_dir) = target.parent() {
                for symbol in &import.symbols {
                    if let Some(sub) = probe_module(package_dir, symbol) {
                        if sub.starts_with(&self.root) {
                            files.push(sub);
                        }
                    }
                }
            }
        }

        let identities = files.iter().filter_map(|f| self.identity_of(f)).collect();
        ImportResolution::InProject(identities)
    }
}

/// Maps `a.b.c` under `base` to `a/b/c.py`, falling back to
/// `a/b/c/__init__.py`. A module file always wins over a same-named package.
fn probe_module(base: &Path, dotted: &str) -> Option<PathBuf> {
    let relative = dotted.replace('.', "/");
    let module_file = base.join(format!("{}.py", relative));
    if module_file.is_file() {
        return Some(module_file);
    }
    let package_init = base.join(&relative).join(python::PACKAGE_INIT);
    if package_init.is_file() {
        return Some(package_init);
    }
    None
}
