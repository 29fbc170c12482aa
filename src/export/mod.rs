pub mod html;
pub mod json;
pub mod summary;

pub use html::render_report;
pub use json::{parse_map, render_diagnostics, render_map};
pub use summary::RunSummary;
