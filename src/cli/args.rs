use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigAction;
use crate::core::constants::defaults;

/// Main CLI structure for pydepmap - an import dependency mapper for Python projects.
///
/// pydepmap parses Python sources with tree-sitter, resolves their imports
/// against the project tree, and emits the resulting dependency map as JSON
/// for querying, reporting, and structural insights.
///
/// # Examples
///
/// ```bash
/// # Map everything reachable from main.py
/// pydepmap map --root . --entry main.py
///
/// # Map the whole tree, no entry point needed
/// pydepmap scan --root . --output dependency_map.json
///
/// # Who imports app/models?
/// pydepmap query app/models --dependents
/// ```
#[derive(Parser)]
#[command(name = "pydepmap")]
#[command(about = "Map import dependencies across a Python project")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Available CLI commands for pydepmap.
///
/// Each command covers one stage of working with a dependency map:
/// - [`Map`] - Build a map by walking imports from an entry file
/// - [`Scan`] - Build a map covering every Python file under the root
/// - [`Query`] - Look up one file's dependencies or dependents
/// - [`Report`] - Render a saved map as an interactive HTML page
/// - [`Insights`] - Derive systems and unused files from a saved map
/// - [`Config`] - Configuration management
#[derive(Subcommand)]
pub enum Commands {
    /// Build a dependency map starting from an entry file
    Map {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Entry file, relative to the root (default: main.py)
        #[arg(short, long)]
        entry: Option<PathBuf>,

        /// Extra directory to resolve absolute imports against (repeatable)
        #[arg(long = "search-root")]
        search_roots: Vec<PathBuf>,

        /// Output file (default: dependency_map.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write diagnostics as JSON to this file
        #[arg(long)]
        diagnostics_output: Option<PathBuf>,

        /// Print the map to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Exit non-zero if any diagnostic is recorded
        #[arg(long)]
        strict: bool,

        /// Suppress the run summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Build a dependency map covering every Python file under the root
    Scan {
        /// Project root directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Extra directory to resolve absolute imports against (repeatable)
        #[arg(long = "search-root")]
        search_roots: Vec<PathBuf>,

        /// Directory names to skip (repeatable, default: venv and friends)
        #[arg(long)]
        ignore: Vec<String>,

        /// Output file (default: dependency_map.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write diagnostics as JSON to this file
        #[arg(long)]
        diagnostics_output: Option<PathBuf>,

        /// Print the map to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Exit non-zero if any diagnostic is recorded
        #[arg(long)]
        strict: bool,

        /// Suppress the run summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Look up one file in a saved dependency map
    Query {
        /// File to look up, as a path or map key
        file: String,

        /// Saved map to read (default: ./dependency_map.json or stdin)
        #[arg(short, long)]
        map: Option<PathBuf>,

        /// List files that import this one instead of its imports
        #[arg(short, long)]
        dependents: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Render a saved map as an interactive HTML report
    Report {
        /// Saved map to read (default: ./dependency_map.json or stdin)
        #[arg(short, long)]
        map: Option<PathBuf>,

        /// Report file to write
        #[arg(short, long, default_value = defaults::REPORT_OUTPUT)]
        output: PathBuf,

        /// Project root, used to spot entry points among unused files
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },

    /// Derive systems and unused files from a saved map
    Insights {
        /// Saved map to read (default: ./dependency_map.json or stdin)
        #[arg(short, long)]
        map: Option<PathBuf>,

        /// Project root, used to spot entry points among unused files
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output formats for query and insights commands
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One item per line
    Plain,
    /// JSON
    Json,
}

// Argument structures for command handlers
pub struct MapArgs {
    pub root: PathBuf,
    pub entry: Option<PathBuf>,
    pub search_roots: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub diagnostics_output: Option<PathBuf>,
    pub stdout: bool,
    pub strict: bool,
    pub quiet: bool,
}

pub struct ScanArgs {
    pub root: PathBuf,
    pub search_roots: Vec<PathBuf>,
    pub ignore: Vec<String>,
    pub output: Option<PathBuf>,
    pub diagnostics_output: Option<PathBuf>,
    pub stdout: bool,
    pub strict: bool,
    pub quiet: bool,
}

pub struct QueryArgs {
    pub file: String,
    pub map: Option<PathBuf>,
    pub dependents: bool,
    pub format: OutputFormat,
}

pub struct ReportArgs {
    pub map: Option<PathBuf>,
    pub output: PathBuf,
    pub root: PathBuf,
}

pub struct InsightsArgs {
    pub map: Option<PathBuf>,
    pub root: PathBuf,
    pub format: OutputFormat,
}
