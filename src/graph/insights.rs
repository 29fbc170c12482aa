use crate::core::constants::entry_points;
use crate::graph::DependencyGraph;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

static MAIN_GUARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"if\s+__name__\s*==\s*['"]__main__['"]"#).unwrap());

/// A cluster of files connected by imports, directly or transitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct System {
    pub id: usize,
    pub name: String,
    pub files: Vec<String>,
}

/// Everything the `insights` command reports about one map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphInsights {
    pub systems: Vec<System>,
    pub unused_files: Vec<String>,
}

pub fn analyze(graph: &DependencyGraph, root: &Path) -> GraphInsights {
    GraphInsights {
        systems: identify_systems(graph),
        unused_files: identify_unused_files(graph, root),
    }
}

/// Connected components of the undirected view, two files or larger,
/// ordered largest first with ids counting from 1.
pub fn identify_systems(graph: &DependencyGraph) -> Vec<System> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for (file, deps) in graph.iter() {
        for dep in deps {
            adjacency.entry(file.as_str()).or_default().push(dep.as_str());
            adjacency.entry(dep.as_str()).or_default().push(file.as_str());
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut components: Vec<Vec<String>> = Vec::new();
    for start in graph.files() {
        if visited.contains(start) {
            continue;
        }
        visited.insert(start);

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            component.push(current.to_string());
            if let Some(neighbors) = adjacency.get(current) {
                for &next in neighbors {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        if component.len() >= 2 {
            component.sort();
            components.push(component);
        }
    }

    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    components
        .into_iter()
        .enumerate()
        .map(|(index, files)| System {
            id: index + 1,
            name: system_name(&files),
            files,
        })
        .collect()
}

/// Names a component after its dominant directory when at least half its
/// files share one, otherwise after the first few file names. Root-level
/// files do not count toward any directory.
fn system_name(files: &[String]) -> String {
    let mut dir_counts: BTreeMap<String, usize> = BTreeMap::new();
    for file in files {
        if let Some(parent) = Path::new(file).parent() {
            if !parent.as_os_str().is_empty() {
                *dir_counts
                    .entry(parent.to_string_lossy().into_owned())
                    .or_insert(0) += 1;
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (dir, count) in &dir_counts {
        if best.map_or(true, |(_, c)| *count > c) {
            best = Some((dir.as_str(), *count));
        }
    }
    if let Some((dir, count)) = best {
        if count * 2 >= files.len() {
            return format!("System: {}", dir);
        }
    }

    let names: Vec<&str> = files
        .iter()
        .take(3)
        .map(|f| {
            Path::new(f)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(f.as_str())
        })
        .collect();
    if files.len() > 3 {
        format!("System: {}...", names.join(", "))
    } else {
        format!("System: {}", names.join(", "))
    }
}

/// Files nothing imports, excluding conventional entry points.
///
/// A file carrying an `if __name__ == "__main__"` guard is assumed to be
/// run directly and is not reported. A file that cannot be read stays
/// listed: it had no chance to prove it is an entry point.
pub fn identify_unused_files(graph: &DependencyGraph, root: &Path) -> Vec<String> {
    let mut imported: HashSet<&str> = HashSet::new();
    for (_, deps) in graph.iter() {
        for dep in deps {
            imported.insert(dep.as_str());
        }
    }

    let mut unused = Vec::new();
    for file in graph.files() {
        if imported.contains(file) {
            continue;
        }
        let stem = Path::new(file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file);
        if entry_points::ALL.contains(&stem) {
            continue;
        }
        let source = root.join(format!("{}.py", file));
        if let Ok(content) = fs::read_to_string(&source) {
            if MAIN_GUARD.is_match(&content) {
                continue;
            }
        }
        unused.push(file.to_string());
    }
    unused
}
