pub mod builder;
pub mod extractor;
pub mod resolver;

pub use builder::{build_graph, build_project_graph, GraphBuilder, MapResult};
pub use extractor::ImportExtractor;
pub use resolver::ModuleResolver;
