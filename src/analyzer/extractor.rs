use crate::core::constants::python;
use crate::core::errors::ParseError;
use crate::core::types::ImportDescriptor;
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser, TreeCursor};

/// Lifts import statements out of Python source files.
///
/// One extractor owns one tree-sitter parser; construct it once per run and
/// feed it every file. Extraction is purely syntactic: descriptors report
/// what the source says and nothing about whether the target exists. The
/// whole tree is walked, so imports nested in functions, classes, or
/// `try` blocks are found along with top-level ones.
pub struct ImportExtractor {
    parser: Parser,
}

impl ImportExtractor {
    pub fn new() -> Result<Self, tree_sitter::LanguageError> {
        let mut parser = Parser::new();
        parser.set_language(tree_sitter_python::language())?;
        Ok(Self { parser })
    }

    /// Read and parse one file, returning every import in source order.
    pub fn extract_from_file(&mut self, path: &Path) -> Result<Vec<ImportDescriptor>, ParseError> {
        let bytes = fs::read(path).map_err(|e| ParseError::read_error(path.to_path_buf(), e))?;
        let source = String::from_utf8(bytes).map_err(|_| ParseError::Encoding {
            path: path.to_path_buf(),
        })?;
        self.extract_from_source(path, &source)
    }

    /// Parse already-loaded source text. `path` is only used in errors.
    pub fn extract_from_source(
        &mut self,
        path: &Path,
        source: &str,
    ) -> Result<Vec<ImportDescriptor>, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeUnavailable {
                path: path.to_path_buf(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: first_error_line(root),
            });
        }

        let mut imports = Vec::new();
        let mut cursor = root.walk();
        visit_nodes(&mut cursor, |node| match node.kind() {
            "import_statement" => collect_plain_import(node, source, &mut imports),
            "import_from_statement" => collect_from_import(node, source, &mut imports),
            "future_import_statement" => collect_future_import(node, source, &mut imports),
            _ => {}
        });

        Ok(imports)
    }
}

/// `import a.b, c as d` yields one descriptor per comma-separated target.
fn collect_plain_import(node: Node, source: &str, out: &mut Vec<ImportDescriptor>) {
    let line = node.start_position().row + 1;
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        if let Some(module) = dotted_target(name, source) {
            out.push(ImportDescriptor {
                module,
                symbols: Vec::new(),
                is_wildcard: false,
                level: 0,
                line,
            });
        }
    }
}

/// `from X import a, b as c` and the relative forms. Aliases are dropped:
/// they rename the binding, not the file being imported.
fn collect_from_import(node: Node, source: &str, out: &mut Vec<ImportDescriptor>) {
    let line = node.start_position().row + 1;
    let module_node = match node.child_by_field_name("module_name") {
        Some(n) => n,
        None => return,
    };

    let (module, level) = if module_node.kind() == "relative_import" {
        relative_target(module_node, source)
    } else {
        match module_node.utf8_text(source.as_bytes()) {
            Ok(text) => (text.to_string(), 0),
            Err(_) => return,
        }
    };

    let mut is_wildcard = false;
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "wildcard_import" {
            is_wildcard = true;
        }
    }

    let mut symbols = Vec::new();
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        if let Some(symbol) = dotted_target(name, source) {
            symbols.push(symbol);
        }
    }

    out.push(ImportDescriptor {
        module,
        symbols,
        is_wildcard,
        level,
        line,
    });
}

/// `from __future__ import ...` has its own node kind in the grammar; the
/// module name is an anonymous token there, so it is filled in here.
fn collect_future_import(node: Node, source: &str, out: &mut Vec<ImportDescriptor>) {
    let line = node.start_position().row + 1;
    let mut symbols = Vec::new();
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        if let Some(symbol) = dotted_target(name, source) {
            symbols.push(symbol);
        }
    }
    out.push(ImportDescriptor {
        module: python::FUTURE_MODULE.to_string(),
        symbols,
        is_wildcard: false,
        level: 0,
        line,
    });
}

/// Text of a `dotted_name`, or of the name side of an `aliased_import`.
fn dotted_target(node: Node, source: &str) -> Option<String> {
    let target = if node.kind() == "aliased_import" {
        node.child_by_field_name("name")?
    } else {
        node
    };
    target.utf8_text(source.as_bytes()).ok().map(str::to_string)
}

/// Splits a `relative_import` node into (module, dot count).
/// `..pkg.mod` gives ("pkg.mod", 2); a bare `.` gives ("", 1).
fn relative_target(node: Node, source: &str) -> (String, u32) {
    let mut module = String::new();
    let mut level = 0;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "import_prefix" => {
                if let Ok(dots) = child.utf8_text(source.as_bytes()) {
                    level = dots.chars().filter(|&c| c == '.').count() as u32;
                }
            }
            "dotted_name" => {
                if let Ok(text) = child.utf8_text(source.as_bytes()) {
                    module = text.to_string();
                }
            }
            _ => {}
        }
    }
    (module, level)
}

fn first_error_line(root: Node) -> usize {
    let mut line = root.start_position().row + 1;
    let mut found = false;
    let mut cursor = root.walk();
    visit_nodes(&mut cursor, |node| {
        if !found && (node.is_error() || node.is_missing()) {
            line = node.start_position().row + 1;
            found = true;
        }
    });
    line
}

fn visit_nodes<F>(cursor: &mut TreeCursor, mut callback: F)
where
    F: FnMut(Node),
{
    loop {
        callback(cursor.node());

        if cursor.goto_first_child() {
            continue;
        }

        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
