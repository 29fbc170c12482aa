//! Tests for system detection and unused-file reporting on scanned projects.

use pretty_assertions::assert_eq;
use pydepmap::build_project_graph;
use pydepmap::graph::insights;

use super::fixtures::ProjectFixture;

#[test]
fn systems_emerge_from_connected_imports() {
    let project = ProjectFixture::new();
    project.file("app/a.py", "from app import b\n");
    project.file("app/__init__.py", "");
    project.file("app/b.py", "from app import c\n");
    project.file("app/c.py", "");
    project.file("x.py", "import y\n");
    project.file("y.py", "");
    project.file("loner.py", "");

    let result = build_project_graph(project.root()).unwrap();
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);

    let report = insights::analyze(&result.graph, project.root());

    assert_eq!(report.systems.len(), 2);
    assert_eq!(report.systems[0].id, 1);
    assert_eq!(report.systems[0].name, "System: app");
    assert_eq!(
        report.systems[0].files,
        vec!["app/__init__", "app/a", "app/b", "app/c"]
    );
    assert_eq!(report.systems[1].files, vec!["x", "y"]);
    assert!(report
        .systems
        .iter()
        .all(|system| !system.files.contains(&"loner".to_string())));
}

#[test]
fn main_guarded_scripts_are_not_unused() {
    let project = ProjectFixture::new();
    project.file("main.py", "import util\n");
    project.file("util.py", "");
    project.file(
        "tool.py",
        "def run():\n    pass\n\nif __name__ == '__main__':\n    run()\n",
    );
    project.file("orphan.py", "x = 1\n");

    let result = build_project_graph(project.root()).unwrap();
    let report = insights::analyze(&result.graph, project.root());

    assert_eq!(report.unused_files, vec!["orphan"]);
}

#[test]
fn insights_serialize_with_systems_and_unused_files() {
    let project = ProjectFixture::new();
    project.file("a.py", "import b\n");
    project.file("b.py", "");
    project.file("orphan.py", "");

    let result = build_project_graph(project.root()).unwrap();
    let report = insights::analyze(&result.graph, project.root());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["systems"][0]["id"], 1);
    assert_eq!(json["systems"][0]["files"][0], "a");
    assert!(json["unused_files"]
        .as_array()
        .unwrap()
        .contains(&serde_json::Value::String("orphan".to_string())));
}
