//! Tests for the JSON map format and the HTML report.

use std::path::Path;

use pretty_assertions::assert_eq;
use pydepmap::analyzer::GraphBuilder;
use pydepmap::export::{parse_map, render_diagnostics, render_map, render_report};
use pydepmap::graph::insights;
use pydepmap::{build_graph, build_project_graph};

use super::fixtures::ProjectFixture;

fn sample_project() -> ProjectFixture {
    let project = ProjectFixture::new();
    project.file("main.py", "import app.api\nimport util\n");
    project.file("util.py", "");
    project.file("app/__init__.py", "");
    project.file("app/api.py", "from app import models\n");
    project.file("app/models.py", "import util\n");
    project
}

#[test]
fn two_runs_over_the_same_tree_serialize_identically() {
    let project = sample_project();

    let first = build_graph(project.root(), Path::new("main.py")).unwrap();
    let second = build_graph(project.root(), Path::new("main.py")).unwrap();

    let first_json = render_map(&first.graph).unwrap();
    let second_json = render_map(&second.graph).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn a_saved_map_parses_back_to_the_same_graph() {
    let project = sample_project();
    let result = build_graph(project.root(), Path::new("main.py")).unwrap();

    let rendered = render_map(&result.graph).unwrap();
    let parsed = parse_map(&rendered).unwrap();
    assert_eq!(parsed, result.graph);
}

#[test]
fn saved_maps_use_root_relative_forward_slash_keys() {
    let project = sample_project();
    let result = build_graph(project.root(), Path::new("main.py")).unwrap();

    let rendered = render_map(&result.graph).unwrap();
    assert!(rendered.contains("\"app/api\""));
    assert!(rendered.contains("\"app/__init__\""));
    assert!(!rendered.contains(".py\""));
    assert!(!rendered.contains('\\'));
}

#[test]
fn diagnostics_serialize_with_kind_tags() {
    let project = ProjectFixture::new();
    project.file("main.py", "import ghost\n");

    let result = build_graph(project.root(), Path::new("main.py")).unwrap();
    let rendered = render_diagnostics(&result.diagnostics).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed[0]["kind"], "unresolved_import");
    assert_eq!(parsed[0]["file"], "main");
    assert_eq!(parsed[0]["import"], "ghost");
    assert_eq!(parsed[0]["line"], 1);
}

#[test]
fn the_report_lists_every_mapped_file() {
    let project = sample_project();
    let result = build_graph(project.root(), Path::new("main.py")).unwrap();

    let unused = insights::identify_unused_files(&result.graph, project.root());
    let page = render_report(&result.graph, &unused);

    for file in result.graph.files() {
        assert!(
            page.contains(&format!("<span class=\"file-name\">{}", file)),
            "report is missing {}",
            file
        );
    }
    assert!(page.contains("Files this file imports:"));
    assert!(page.contains("Files that import this file:"));
}

#[test]
fn the_report_marks_unused_files() {
    let project = ProjectFixture::new();
    project.file("main.py", "import util\n");
    project.file("util.py", "");
    project.file("orphan.py", "");

    let result = build_project_graph(project.root()).unwrap();
    let unused = insights::identify_unused_files(&result.graph, project.root());
    let page = render_report(&result.graph, &unused);

    assert!(page.contains("orphan [UNUSED]"));
    assert!(!page.contains("util [UNUSED]"));
    assert!(!page.contains("main [UNUSED]"));
}

#[test]
fn search_roots_do_not_change_the_serialized_shape() {
    let project = sample_project();
    let vendor = ProjectFixture::new();
    vendor.file("vendorlib.py", "");

    let plain = build_graph(project.root(), Path::new("main.py")).unwrap();
    let mut builder =
        GraphBuilder::with_search_roots(project.root(), vec![vendor.root().to_path_buf()])
            .unwrap();
    let with_roots = builder.build_from(Path::new("main.py")).unwrap();

    assert_eq!(
        render_map(&plain.graph).unwrap(),
        render_map(&with_roots.graph).unwrap()
    );
}
