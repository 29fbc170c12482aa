//! End-to-end tests for building dependency maps from real project trees.
//!
//! Each test lays out a small Python project in a temp directory, runs the
//! mapper against it, and checks the resulting map and diagnostics.

use std::path::Path;

use pretty_assertions::assert_eq;
use pydepmap::analyzer::GraphBuilder;
use pydepmap::core::{Diagnostic, MapError};
use pydepmap::{build_graph, build_project_graph};

use super::fixtures::ProjectFixture;

#[test]
fn maps_a_small_application_from_its_entry_point() {
    let project = ProjectFixture::new();
    project.file("main.py", "import app.api\nimport util\n");
    project.file("util.py", "");
    project.file("app/__init__.py", "");
    project.file("app/api.py", "from app import models\n");
    project.file("app/models.py", "import util\n");

    let result = build_graph(project.root(), Path::new("main.py")).unwrap();
    let graph = &result.graph;

    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(graph.file_count(), 5);
    assert_eq!(
        graph.dependencies_of("main"),
        Some(&["app/api".to_string(), "util".to_string()][..])
    );
    assert_eq!(
        graph.dependencies_of("app/api"),
        Some(&["app/__init__".to_string(), "app/models".to_string()][..])
    );
    assert_eq!(
        graph.dependencies_of("app/models"),
        Some(&["util".to_string()][..])
    );
    assert_eq!(graph.dependencies_of("util"), Some(&[][..]));
}

#[test]
fn an_entry_with_no_resolvable_imports_still_gets_its_key() {
    let project = ProjectFixture::new();
    project.file("main.py", "print('no imports here')\n");

    let result = build_graph(project.root(), Path::new("main.py")).unwrap();

    assert_eq!(result.graph.file_count(), 1);
    assert_eq!(result.graph.dependencies_of("main"), Some(&[][..]));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn every_dependency_in_the_map_is_also_a_key() {
    let project = ProjectFixture::new();
    project.file("main.py", "import a\n");
    project.file("a.py", "import b\nimport c\n");
    project.file("b.py", "import c\n");
    project.file("c.py", "");

    let result = build_graph(project.root(), Path::new("main.py")).unwrap();

    for (file, dependencies) in result.graph.iter() {
        for dependency in dependencies {
            assert!(
                result.graph.contains(dependency),
                "{} depends on {} which has no node",
                file,
                dependency
            );
        }
    }
}

#[test]
fn import_cycles_terminate_and_keep_both_edges() {
    let project = ProjectFixture::new();
    project.file("alpha.py", "import beta\n");
    project.file("beta.py", "import alpha\n");

    let result = build_graph(project.root(), Path::new("alpha.py")).unwrap();

    assert_eq!(
        result.graph.dependencies_of("alpha"),
        Some(&["beta".to_string()][..])
    );
    assert_eq!(
        result.graph.dependencies_of("beta"),
        Some(&["alpha".to_string()][..])
    );
}

#[test]
fn unresolved_imports_become_diagnostics_not_nodes() {
    let project = ProjectFixture::new();
    project.file("main.py", "import ghost\nimport util\n");
    project.file("util.py", "");

    let result = build_graph(project.root(), Path::new("main.py")).unwrap();

    assert!(!result.graph.contains("ghost"));
    assert_eq!(
        result.graph.dependencies_of("main"),
        Some(&["util".to_string()][..])
    );
    assert_eq!(
        result.diagnostics,
        vec![Diagnostic::UnresolvedImport {
            file: "main".to_string(),
            import: "ghost".to_string(),
            line: 1,
        }]
    );
}

#[test]
fn syntax_errors_keep_the_node_and_record_a_diagnostic() {
    let project = ProjectFixture::new();
    project.file("main.py", "import broken\nimport util\n");
    project.file("util.py", "");
    project.file("broken.py", "import util\ndef f(:\n");

    let result = build_graph(project.root(), Path::new("main.py")).unwrap();

    // The broken file stays in the map with no outgoing edges.
    assert_eq!(result.graph.dependencies_of("broken"), Some(&[][..]));
    assert_eq!(
        result.graph.dependencies_of("main"),
        Some(&["broken".to_string(), "util".to_string()][..])
    );
    assert_eq!(result.diagnostics.len(), 1);
    match &result.diagnostics[0] {
        Diagnostic::UnparsableFile { file, reason } => {
            assert_eq!(file, "broken");
            assert!(reason.contains("line 2"), "{reason}");
        }
        other => panic!("expected an unparsable-file diagnostic, got {:?}", other),
    }
}

#[test]
fn missing_entry_file_is_a_fatal_error() {
    let project = ProjectFixture::new();
    project.file("util.py", "");

    let err = build_graph(project.root(), Path::new("main.py")).unwrap_err();
    assert!(matches!(err, MapError::EntryNotFound { .. }), "{err}");
}

#[test]
fn missing_root_is_a_fatal_error() {
    let err = build_graph(Path::new("/nonexistent/project"), Path::new("main.py")).unwrap_err();
    assert!(matches!(err, MapError::RootNotFound { .. }), "{err}");
}

#[test]
fn entry_outside_the_root_is_rejected() {
    let project = ProjectFixture::new();
    project.file("main.py", "");
    let outside = ProjectFixture::new();
    let stray = outside.file("stray.py", "");

    let err = build_graph(project.root(), &stray).unwrap_err();
    assert!(matches!(err, MapError::EntryOutsideRoot { .. }), "{err}");
}

#[test]
fn scan_covers_files_no_entry_reaches() {
    let project = ProjectFixture::new();
    project.file("main.py", "import helpers\n");
    project.file("helpers.py", "");
    project.file("tools/cleanup.py", "import common\n");
    project.file("tools/common.py", "");

    let from_entry = build_graph(project.root(), Path::new("main.py")).unwrap();
    assert_eq!(from_entry.graph.file_count(), 2);
    assert!(!from_entry.graph.contains("tools/cleanup"));

    let scanned = build_project_graph(project.root()).unwrap();
    assert_eq!(scanned.graph.file_count(), 4);
    assert_eq!(
        scanned.graph.dependencies_of("tools/cleanup"),
        Some(&["tools/common".to_string()][..])
    );
}

#[test]
fn scan_skips_virtualenv_and_hidden_directories() {
    let project = ProjectFixture::new();
    project.file("main.py", "");
    project.file("venv/lib/site.py", "");
    project.file(".hidden/secret.py", "");
    project.file("__pycache__/main.py", "");

    let scanned = build_project_graph(project.root()).unwrap();
    assert_eq!(scanned.graph.file_count(), 1);
    assert!(scanned.graph.contains("main"));
}

#[test]
fn imports_found_under_a_search_root_count_as_external() {
    let project = ProjectFixture::new();
    project.file("main.py", "import vendorlib\n");
    let vendor = ProjectFixture::new();
    vendor.file("vendorlib.py", "");

    let mut builder =
        GraphBuilder::with_search_roots(project.root(), vec![vendor.root().to_path_buf()])
            .unwrap();
    let result = builder.build_from(Path::new("main.py")).unwrap();

    // Resolved outside the root: no edge, and not an unresolved import either.
    assert_eq!(result.graph.dependencies_of("main"), Some(&[][..]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert!(!result.graph.contains("vendorlib"));
}

#[test]
fn entry_path_may_be_given_relative_or_absolute() {
    let project = ProjectFixture::new();
    let absolute = project.file("main.py", "import util\n");
    project.file("util.py", "");

    let relative = build_graph(project.root(), Path::new("main.py")).unwrap();
    let by_absolute = build_graph(project.root(), &absolute).unwrap();

    assert_eq!(relative.graph, by_absolute.graph);
}
