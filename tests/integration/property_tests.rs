//! Property tests over generated project trees.
//!
//! Projects are flat modules m0..mN importing random subsets of each other,
//! which is enough to exercise closure, determinism, and cycle handling
//! without steering the shape of the graph by hand.

use std::path::Path;

use proptest::prelude::*;
use pydepmap::{build_graph, build_project_graph};

use super::fixtures::ProjectFixture;

/// Module i imports the modules named by `shape[i]`, taken modulo the
/// module count so every import resolves in-project.
fn arbitrary_project() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0usize..8, 0..5), 1..8)
}

fn materialize(shape: &[Vec<usize>]) -> ProjectFixture {
    let project = ProjectFixture::new();
    let count = shape.len();
    for (index, imports) in shape.iter().enumerate() {
        let mut source = String::new();
        for &target in imports {
            source.push_str(&format!("import m{}\n", target % count));
        }
        project.file(&format!("m{}.py", index), &source);
    }
    project
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn scans_are_closed_and_deterministic(shape in arbitrary_project()) {
        let project = materialize(&shape);

        let first = build_project_graph(project.root()).unwrap();
        let second = build_project_graph(project.root()).unwrap();

        prop_assert_eq!(&first.graph, &second.graph);
        prop_assert!(first.diagnostics.is_empty());

        for (file, dependencies) in first.graph.iter() {
            prop_assert!(!dependencies.contains(file), "{} imports itself", file);
            for dependency in dependencies {
                prop_assert!(
                    first.graph.contains(dependency),
                    "{} depends on {} which has no node",
                    file,
                    dependency
                );
            }
        }
    }

    #[test]
    fn dependents_agree_with_the_forward_map(shape in arbitrary_project()) {
        let project = materialize(&shape);
        let result = build_project_graph(project.root()).unwrap();
        let graph = &result.graph;

        for file in graph.files() {
            let dependents = graph.dependents_of(file);
            for dependent in &dependents {
                let forward = graph.dependencies_of(dependent).unwrap_or_default();
                prop_assert!(
                    forward.contains(&file.to_string()),
                    "{} is listed as a dependent of {} but has no such edge",
                    dependent,
                    file
                );
            }
            for (other, dependencies) in graph.iter() {
                if dependencies.iter().any(|d| d == file) {
                    prop_assert!(
                        dependents.contains(other),
                        "{} imports {} but is missing from its dependents",
                        other,
                        file
                    );
                }
            }
        }
    }

    #[test]
    fn entry_maps_agree_with_scans_on_shared_files(shape in arbitrary_project()) {
        let project = materialize(&shape);

        let from_entry = build_graph(project.root(), Path::new("m0.py")).unwrap();
        let scanned = build_project_graph(project.root()).unwrap();

        for file in from_entry.graph.files() {
            prop_assert!(scanned.graph.contains(file));
            prop_assert_eq!(
                from_entry.graph.dependencies_of(file),
                scanned.graph.dependencies_of(file)
            );
        }
    }
}
