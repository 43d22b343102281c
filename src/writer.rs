//! Build CSES documents in memory and serialize them to disk.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::{ClassEntry, CsesError, DEFAULT_VERSION, Document, Schedule, Subject};

/// Accumulates subjects and schedules and serializes them on demand.
///
/// The writer starts empty and grows only through the `add_*` operations.
/// Serializing does not consume or mutate it, so a single writer may be
/// saved any number of times.
#[derive(Debug, Clone)]
pub struct CsesWriter {
    version: u32,
    subjects: Vec<Subject>,
    schedules: Vec<Schedule>,
}

impl Default for CsesWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsesWriter {
    /// Create an empty writer with the default schema version.
    pub fn new() -> Self {
        Self::with_version(DEFAULT_VERSION)
    }

    /// Create an empty writer with an explicit schema version.
    pub fn with_version(version: u32) -> Self {
        Self { version, subjects: Vec::new(), schedules: Vec::new() }
    }

    /// Append a subject.
    ///
    /// `name` is opaque: the library enforces no uniqueness and accepts the
    /// empty string. Omitted optional fields stay absent, not empty.
    pub fn add_subject<S: Into<String>>(
        &mut self,
        name: S,
        simplified_name: Option<String>,
        teacher: Option<String>,
        room: Option<String>,
    ) {
        self.subjects.push(Subject {
            name: name.into(),
            simplified_name,
            teacher,
            room,
        });
    }

    /// Append a schedule with a defensive copy of `classes`.
    ///
    /// Only the subject/start/end fields of each entry are carried; the
    /// typed model has nowhere for foreign keys to hide, so the emitted
    /// document always has the normalized class shape.
    pub fn add_schedule<S1, S2, S3>(
        &mut self,
        name: S1,
        enable_day: S2,
        weeks: S3,
        classes: &[ClassEntry],
    ) where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        self.schedules.push(Schedule {
            name: name.into(),
            enable_day: enable_day.into(),
            weeks: weeks.into(),
            classes: classes.to_vec(),
        });
    }

    /// Snapshot the current model as a [`Document`].
    ///
    /// Repeated calls return equal documents until another `add_*` call
    /// intervenes.
    pub fn generate(&self) -> Document {
        Document {
            version: self.version,
            subjects: self.subjects.clone(),
            schedules: self.schedules.clone(),
        }
    }

    /// Serialize the current model to YAML and write it to `path`,
    /// overwriting any existing file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CsesError> {
        let path = path.as_ref();
        let text = self.generate().to_yaml()?;
        fs::write(path, text)
            .map_err(|source| CsesError::Write { path: path.to_path_buf(), source })?;
        debug!(
            "Wrote {} subject(s) and {} schedule(s) to {}",
            self.subjects.len(),
            self.schedules.len(),
            path.display()
        );
        Ok(())
    }
}
