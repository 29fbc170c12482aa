//! # pydepmap
//!
//! An import dependency mapper for Python projects.
//!
//! pydepmap parses Python sources with tree-sitter, resolves each import
//! against the project tree, and builds a file-level dependency map that can
//! be saved as JSON, queried in both directions, rendered as an HTML report,
//! and mined for structural insights.
//!
//! ## Core Features
//!
//! - **Entry-point Mapping**: Walk the import closure from a single entry file
//! - **Whole-project Scans**: Map every Python file under a root, islands included
//! - **Both Directions**: Query what a file imports and what imports it
//! - **Diagnostics Side-channel**: Unresolved imports and broken files never
//!   poison the map, they are reported separately
//! - **HTML Reports**: Self-contained interactive report of the whole map
//! - **Insights**: Detect clusters of interdependent files and unused files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pydepmap::build_graph;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = build_graph(Path::new("."), Path::new("main.py"))?;
//!     for (file, imports) in result.graph.iter() {
//!         println!("{} -> {:?}", file, imports);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`analyzer`] - Import extraction, module resolution, and graph building
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading and defaults
//! - [`core`] - Core types, constants, and error definitions
//! - [`export`] - JSON, run summary, and HTML report rendering
//! - [`graph`] - The dependency map itself and derived insights
//! - [`project`] - Project tree scanning

/// Import extraction, module resolution, and graph building
pub mod analyzer;
/// Command-line interface and argument parsing
pub mod cli;
/// Configuration file loading and defaults
pub mod config;
/// Core types, constants, and error definitions
pub mod core;
/// JSON, run summary, and HTML report rendering
pub mod export;
/// The dependency map and derived insights
pub mod graph;
/// Project tree scanning
pub mod project;

// Re-export the main entry points for easy access
pub use analyzer::{build_graph, build_project_graph, GraphBuilder, MapResult};
pub use crate::core::{Diagnostic, MapError, ParseError};
pub use graph::DependencyGraph;
