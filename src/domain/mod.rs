pub mod document;
pub mod error;

pub use document::{ClassEntry, DEFAULT_VERSION, Document, Schedule, Subject};
pub use error::CsesError;
