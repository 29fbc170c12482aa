use crate::core::types::Diagnostic;
use crate::graph::DependencyGraph;
use anyhow::{Context, Result};

/// Serialize a map the way the saved-map file expects it: pretty-printed
/// with two-space indent, keys sorted, trailing newline. Byte-identical
/// across runs over an unchanged tree.
pub fn render_map(graph: &DependencyGraph) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(graph).context("Failed to serialize dependency map")?;
    out.push('\n');
    Ok(out)
}

/// Diagnostics serialize as a flat JSON list, never mixed into the map file.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(diagnostics).context("Failed to serialize diagnostics")?;
    out.push('\n');
    Ok(out)
}

/// Parse a saved map back into a graph.
pub fn parse_map(content: &str) -> Result<DependencyGraph> {
    serde_json::from_str(content)
        .context("Input is not a dependency map (expected a JSON object of string lists)")
}
