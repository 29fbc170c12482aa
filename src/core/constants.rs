/// String constants shared across the mapper.
///
/// Filenames, defaults, and skip lists live here so the resolver, scanner,
/// and CLI never drift apart on spelling.
/// Python source naming
pub mod python {
    pub const EXTENSION: &str = "py";
    pub const SOURCE_SUFFIX: &str = ".py";
    pub const PACKAGE_INIT: &str = "__init__.py";
    pub const FUTURE_MODULE: &str = "__future__";
}

/// Default file names for CLI entry points and outputs
pub mod defaults {
    pub const ENTRY_FILE: &str = "main.py";
    pub const MAP_OUTPUT: &str = "dependency_map.json";
    pub const REPORT_OUTPUT: &str = "dependency_report.html";
    pub const CONFIG_FILE: &str = ".pydepmap.toml";
}

/// Directories skipped during project scans
pub mod ignored_dirs {
    pub const VENV: &str = "venv";
    pub const DOT_VENV: &str = ".venv";
    pub const PYCACHE: &str = "__pycache__";
    pub const DOT_GIT: &str = ".git";
    pub const NODE_MODULES: &str = "node_modules";
    pub const SITE_PACKAGES: &str = "site-packages";

    pub const ALL: &[&str] = &[VENV, DOT_VENV, PYCACHE, DOT_GIT, NODE_MODULES, SITE_PACKAGES];
}

/// File stems that conventionally mark executable entry points.
/// Files named this way are never reported as unused even when nothing
/// imports them.
pub mod entry_points {
    pub const MAIN: &str = "main";
    pub const DUNDER_MAIN: &str = "__main__";
    pub const APP: &str = "app";
    pub const RUN: &str = "run";
    pub const SERVER: &str = "server";

    pub const ALL: &[&str] = &[MAIN, DUNDER_MAIN, APP, RUN, SERVER];
}
