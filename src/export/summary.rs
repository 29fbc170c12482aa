use crate::analyzer::MapResult;
use colored::Colorize;
use std::time::Duration;

const RULE: &str = "========================================";

/// Statistics printed to stderr after a map or scan run. The map file itself
/// stays pure data, so everything a human wants at a glance lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_files: usize,
    pub total_dependencies: usize,
    pub files_without_dependencies: usize,
    pub busiest_file: Option<(String, usize)>,
    pub diagnostics: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn from_result(result: &MapResult, elapsed: Duration) -> Self {
        let mut files_without_dependencies = 0;
        let mut busiest_file: Option<(String, usize)> = None;
        for (file, dependencies) in result.graph.iter() {
            if dependencies.is_empty() {
                files_without_dependencies += 1;
            }
            // Strict comparison keeps the first key on ties, so the line is
            // stable across runs.
            let beats = busiest_file
                .as_ref()
                .map_or(true, |(_, count)| dependencies.len() > *count);
            if beats && !dependencies.is_empty() {
                busiest_file = Some((file.to_string(), dependencies.len()));
            }
        }

        Self {
            total_files: result.graph.file_count(),
            total_dependencies: result.graph.edge_count(),
            files_without_dependencies,
            busiest_file,
            diagnostics: result.diagnostics.len(),
            elapsed,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}\n",
            "Dependency map generation complete".green().bold()
        ));
        out.push_str(&format!("{}\n", RULE));
        out.push_str(&format!("Total files analyzed: {}\n", self.total_files));
        out.push_str(&format!(
            "Total dependencies found: {}\n",
            self.total_dependencies
        ));
        out.push_str(&format!(
            "Files with no dependencies: {}\n",
            self.files_without_dependencies
        ));
        match &self.busiest_file {
            Some((file, count)) => out.push_str(&format!(
                "File with most dependencies: {} ({} dependencies)\n",
                file, count
            )),
            None => out.push_str("File with most dependencies: none\n"),
        }
        if self.diagnostics > 0 {
            out.push_str(&format!(
                "{}\n",
                format!("Diagnostics recorded: {}", self.diagnostics)
                    .yellow()
                    .bold()
            ));
        }
        out.push_str(&format!(
            "Time taken: {:.2} seconds\n",
            self.elapsed.as_secs_f64()
        ));
        out.push_str(&format!("{}\n", RULE));
        out
    }
}
