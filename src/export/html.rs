use crate::graph::DependencyGraph;
use chrono::Local;
use std::collections::HashSet;

const STYLE: &str = r#"body { font-family: Arial, sans-serif; margin: 20px; }
h1 { margin-top: 0; }
.search { margin-bottom: 15px; }
#searchInput { padding: 8px; width: 300px; }
button { padding: 8px 12px; margin-left: 5px; }
.legend { margin-bottom: 15px; }
.legend-swatch { display: inline-block; width: 12px; height: 12px; background-color: #ffdddd; border: 1px solid #ff9999; margin-right: 5px; }
.tab { display: inline-block; padding: 8px 16px; margin-right: 5px; cursor: pointer; border: 1px solid #ddd; border-bottom: none; border-radius: 5px 5px 0 0; background-color: #f5f5f5; }
.tab.active { background-color: #fff; font-weight: bold; }
.tab-content { display: none; border-top: 1px solid #ddd; padding-top: 15px; }
.tab-content.active { display: block; }
.file { margin-bottom: 10px; border: 1px solid #ddd; border-radius: 5px; padding: 10px; }
.file-name { font-weight: bold; }
.unused-file { background-color: #ffdddd; border-color: #ff9999; }
.highlight { background-color: #ffffcc; }
.toggle { cursor: pointer; color: #0066cc; margin-right: 5px; }
.dependencies { display: none; margin-left: 20px; margin-top: 8px; }
.section-title { font-weight: bold; margin-top: 8px; }
.dependency-item { margin-left: 15px; }
.imports { color: #0066cc; }
.imported-by { color: #cc6600; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f5f5f5; }
.footer { margin-top: 20px; color: #888; font-size: 0.9em; }
"#;

const SCRIPT: &str = r#"function toggle(element) {
    var dependencies = element.parentElement.querySelector('.dependencies');
    if (dependencies.style.display === 'block') {
        dependencies.style.display = 'none';
        element.textContent = '[+]';
    } else {
        dependencies.style.display = 'block';
        element.textContent = '[-]';
    }
}

function expandAll() {
    document.querySelectorAll('.dependencies').forEach(function (dependencies) {
        dependencies.style.display = 'block';
    });
    document.querySelectorAll('.toggle').forEach(function (toggle) {
        toggle.textContent = '[-]';
    });
}

function collapseAll() {
    document.querySelectorAll('.dependencies').forEach(function (dependencies) {
        dependencies.style.display = 'none';
    });
    document.querySelectorAll('.toggle').forEach(function (toggle) {
        toggle.textContent = '[+]';
    });
}

function search() {
    var term = document.getElementById('searchInput').value.toLowerCase();
    document.querySelectorAll('.file').forEach(function (file) {
        file.classList.remove('highlight');
        if (term && file.textContent.toLowerCase().indexOf(term) !== -1) {
            file.classList.add('highlight');
            file.querySelector('.dependencies').style.display = 'block';
            file.querySelector('.toggle').textContent = '[-]';
        }
    });
}

function switchTab(tabId) {
    document.querySelectorAll('.tab-content').forEach(function (content) {
        content.classList.remove('active');
    });
    document.querySelectorAll('.tab').forEach(function (tab) {
        tab.classList.remove('active');
    });
    document.getElementById(tabId).classList.add('active');
    document.querySelector('.tab[data-tab="' + tabId + '"]').classList.add('active');
}
"#;

/// Render a saved map as a single self-contained HTML page: an expandable
/// per-file view plus a relationship count table, with client-side search
/// and no external assets. Files in `unused_files` are tinted and labelled.
pub fn render_report(graph: &DependencyGraph, unused_files: &[String]) -> String {
    let unused: HashSet<&str> = unused_files.iter().map(String::as_str).collect();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<title>Dependency Map</title>\n");
    out.push_str("<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<h1>Dependency Map</h1>\n");

    out.push_str("<div class=\"search\">\n");
    out.push_str("<input type=\"text\" id=\"searchInput\" placeholder=\"Search files...\" onkeyup=\"search()\">\n");
    out.push_str("<button onclick=\"search()\">Search</button>\n");
    out.push_str("<button onclick=\"expandAll()\">Expand All</button>\n");
    out.push_str("<button onclick=\"collapseAll()\">Collapse All</button>\n");
    out.push_str("</div>\n");

    if !unused.is_empty() {
        out.push_str("<div class=\"legend\"><span class=\"legend-swatch\"></span>");
        out.push_str("Unused file: nothing imports it and it is not an entry point</div>\n");
    }

    out.push_str("<div class=\"tabs\">\n");
    out.push_str("<span class=\"tab active\" data-tab=\"file-view\" onclick=\"switchTab('file-view')\">File View</span>\n");
    out.push_str("<span class=\"tab\" data-tab=\"matrix-view\" onclick=\"switchTab('matrix-view')\">Dependency Matrix</span>\n");
    out.push_str("</div>\n");

    out.push_str("<div id=\"file-view\" class=\"tab-content active\">\n");
    for (file, dependencies) in graph.iter() {
        push_file_entry(&mut out, graph, file, dependencies, unused.contains(file.as_str()));
    }
    out.push_str("</div>\n");

    out.push_str("<div id=\"matrix-view\" class=\"tab-content\">\n");
    out.push_str("<table id=\"dependencyTable\">\n");
    out.push_str("<tr><th>File</th><th>Imports</th><th>Imported By</th><th>Total Relationships</th></tr>\n");
    for (file, dependencies) in graph.iter() {
        let imported_by = graph.dependents_of(file).len();
        let row_class = if unused.contains(file.as_str()) {
            " class=\"unused-file\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<tr{}><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row_class,
            escape(file),
            dependencies.len(),
            imported_by,
            dependencies.len() + imported_by
        ));
    }
    out.push_str("</table>\n</div>\n");

    out.push_str(&format!(
        "<div class=\"footer\">Generated by pydepmap on {}</div>\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("<script>\n");
    out.push_str(SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

fn push_file_entry(
    out: &mut String,
    graph: &DependencyGraph,
    file: &str,
    dependencies: &[String],
    unused: bool,
) {
    let imported_by = graph.dependents_of(file);
    let entry_class = if unused { "file unused-file" } else { "file" };
    let label = if unused { " [UNUSED]" } else { "" };

    out.push_str(&format!(
        "<div class=\"{}\" id=\"{}\">\n",
        entry_class,
        entry_id(file)
    ));
    out.push_str("<span class=\"toggle\" onclick=\"toggle(this)\">[+]</span>");
    out.push_str(&format!(
        "<span class=\"file-name\">{}{}</span> ({} relationships: {} imports, {} imported by)\n",
        escape(file),
        label,
        dependencies.len() + imported_by.len(),
        dependencies.len(),
        imported_by.len()
    ));
    out.push_str("<div class=\"dependencies\">\n");

    out.push_str("<div class=\"section-title imports\">Files this file imports:</div>\n");
    if dependencies.is_empty() {
        out.push_str("<div class=\"dependency-item\">No imports</div>\n");
    } else {
        let mut sorted = dependencies.to_vec();
        sorted.sort();
        for dependency in &sorted {
            out.push_str(&format!(
                "<div class=\"dependency-item imports\">{}</div>\n",
                escape(dependency)
            ));
        }
    }

    out.push_str("<div class=\"section-title imported-by\">Files that import this file:</div>\n");
    if imported_by.is_empty() {
        out.push_str("<div class=\"dependency-item\">Not imported by any file</div>\n");
    } else {
        for dependent in &imported_by {
            out.push_str(&format!(
                "<div class=\"dependency-item imported-by\">{}</div>\n",
                escape(dependent)
            ));
        }
    }

    out.push_str("</div>\n</div>\n");
}

fn entry_id(file: &str) -> String {
    file.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
