pub mod constants;
pub mod errors;
pub mod types;

pub use errors::{MapError, ParseError};
pub use types::{Diagnostic, ImportDescriptor, ImportResolution};
