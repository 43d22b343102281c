//! cses: read and write CSES (Course Schedule Exchange Schema) documents.
//!
//! A CSES document is a YAML file describing school subjects and weekly
//! class schedules. [`CsesReader`] loads and queries a document,
//! [`CsesWriter`] builds one in memory and saves it, and [`is_cses_file`]
//! sniffs whether a file looks like the schema at all. The two sides share
//! only the [`Document`] model; neither depends on the other.

pub mod domain;
pub mod reader;
pub mod writer;

pub use domain::{ClassEntry, CsesError, DEFAULT_VERSION, Document, Schedule, Subject};
pub use reader::{CsesReader, is_cses_file};
pub use writer::CsesWriter;
