//! Load CSES documents from disk and query them.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde_yaml::Value;

use crate::domain::{ClassEntry, CsesError, Document, Schedule, Subject};

/// Read-only view over a CSES document loaded from a file.
///
/// The model is fully constructed at load time and immutable afterwards.
#[derive(Debug, Clone)]
pub struct CsesReader {
    document: Document,
}

impl CsesReader {
    /// Load a CSES document from `path`.
    ///
    /// A nonexistent path is `NotFound`, undecodable content is `Format`,
    /// and an empty file is a valid empty document. Other I/O failures pass
    /// through unchanged.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CsesError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                CsesError::NotFound { path: path.to_path_buf() }
            } else {
                CsesError::Io(err)
            }
        })?;
        let document = Document::from_yaml_str(&content)?;
        debug!(
            "Loaded {} subject(s) and {} schedule(s) from {}",
            document.subjects.len(),
            document.schedules.len(),
            path.display()
        );
        Ok(Self { document })
    }

    /// The loaded document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document's schema version (1 when the file carried none).
    pub fn version(&self) -> u32 {
        self.document.version
    }

    /// All subjects, in document order.
    pub fn subjects(&self) -> &[Subject] {
        &self.document.subjects
    }

    /// All schedules, in document order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.document.schedules
    }

    /// The classes of the first schedule whose `enable_day` equals `day`.
    ///
    /// The match is exact and case-sensitive. No matching schedule is a
    /// normal outcome and yields an empty slice. Callers that want every
    /// schedule for a day (e.g. odd/even week variants) should walk
    /// [`schedules`](Self::schedules) instead.
    pub fn schedule_by_day(&self, day: &str) -> &[ClassEntry] {
        self.document
            .schedules
            .iter()
            .find(|schedule| schedule.enable_day == day)
            .map(|schedule| schedule.classes.as_slice())
            .unwrap_or(&[])
    }
}

/// Best-effort sniff for whether `path` holds a CSES document.
///
/// True only if the file reads, decodes as YAML, and the top-level mapping
/// has all of `version`, `subjects`, and `schedules` (presence only, values
/// are not type-checked). Every failure mode reports `false`; this never
/// returns an error.
pub fn is_cses_file<P: AsRef<Path>>(path: P) -> bool {
    let Ok(content) = fs::read_to_string(path.as_ref()) else {
        return false;
    };
    let Ok(tree) = serde_yaml::from_str::<Value>(&content) else {
        return false;
    };
    let Value::Mapping(mapping) = tree else {
        return false;
    };
    ["version", "subjects", "schedules"]
        .iter()
        .all(|key| mapping.contains_key(&Value::String((*key).to_string())))
}
