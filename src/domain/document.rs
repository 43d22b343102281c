//! Typed CSES document model and its YAML mapping.
//!
//! A CSES document is a flat YAML mapping with three top-level keys:
//! `version`, `subjects`, and `schedules`. Decoding goes through an untyped
//! `serde_yaml::Value` first so empty documents and non-mapping top levels
//! can be told apart before the typed mapping runs.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::domain::error::CsesError;

/// Schema version written when the caller does not supply one.
pub const DEFAULT_VERSION: u32 = 1;

fn default_version() -> u32 {
    DEFAULT_VERSION
}

/// A full CSES document: version plus the subject and schedule sequences.
///
/// Sequence order is insertion order and survives a store/load round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

impl Default for Document {
    fn default() -> Self {
        Self { version: DEFAULT_VERSION, subjects: Vec::new(), schedules: Vec::new() }
    }
}

/// A named course offering with optional teacher/room/abbreviation metadata.
///
/// `name` carries no uniqueness constraint; duplicates are legal and kept.
/// An absent optional field stays `None` and is distinguishable from an
/// explicit empty string in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Subject {
    /// Create a subject with no optional metadata.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), simplified_name: None, teacher: None, room: None }
    }
}

/// A named weekly recurrence rule holding an ordered list of class slots.
///
/// `enable_day` is expected to be a day code (`mon`..`sun`) and `weeks` one
/// of `all`/`odd`/`even`, but neither is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub name: String,
    pub enable_day: String,
    pub weeks: String,
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

/// One time slot within a schedule, referencing a subject by name.
///
/// Times are opaque strings; the subject reference is resolved by the
/// caller, never enforced by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
}

impl ClassEntry {
    pub fn new<S1, S2, S3>(subject: S1, start_time: S2, end_time: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            subject: subject.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

impl Document {
    /// Decode a YAML document into the typed model.
    ///
    /// An empty document yields the default (empty) model. A top-level value
    /// that is not a mapping, or an entry missing a required field, is a
    /// `Format` error carrying the decoder diagnostic.
    pub fn from_yaml_str(content: &str) -> Result<Self, CsesError> {
        let tree: Value = serde_yaml::from_str(content).map_err(CsesError::format)?;
        match tree {
            Value::Null => Ok(Document::default()),
            Value::Mapping(_) => serde_yaml::from_value(tree).map_err(CsesError::format),
            other => Err(CsesError::Format(format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            ))),
        }
    }

    /// Encode the document as YAML text.
    ///
    /// Absent optional fields are omitted rather than written as null, and
    /// the emitter never produces anchors/aliases or wrapped lines.
    pub fn to_yaml(&self) -> Result<String, CsesError> {
        serde_yaml::to_string(self).map_err(CsesError::format)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_default_model() {
        let doc = Document::from_yaml_str("").unwrap();
        assert_eq!(doc.version, 1);
        assert!(doc.subjects.is_empty());
        assert!(doc.schedules.is_empty());
    }

    #[test]
    fn version_defaults_to_one() {
        let doc = Document::from_yaml_str("subjects: []\nschedules: []\n").unwrap();
        assert_eq!(doc.version, 1);
    }

    #[test]
    fn top_level_sequence_is_a_format_error() {
        let err = Document::from_yaml_str("- 1\n- 2\n").unwrap_err();
        assert!(matches!(err, CsesError::Format(_)));
    }

    #[test]
    fn invalid_syntax_is_a_format_error() {
        let err = Document::from_yaml_str("subjects: [unclosed\n").unwrap_err();
        assert!(matches!(err, CsesError::Format(_)));
    }

    #[test]
    fn absent_field_is_distinct_from_empty_string() {
        let content = "\
version: 1
subjects:
  - name: Math
  - name: Art
    teacher: \"\"
schedules: []
";
        let doc = Document::from_yaml_str(content).unwrap();
        assert_eq!(doc.subjects[0].teacher, None);
        assert_eq!(doc.subjects[1].teacher, Some(String::new()));
    }

    #[test]
    fn subject_without_name_is_a_format_error() {
        let content = "\
version: 1
subjects:
  - teacher: John Doe
schedules: []
";
        let err = Document::from_yaml_str(content).unwrap_err();
        assert!(matches!(err, CsesError::Format(_)));
    }

    #[test]
    fn schedule_classes_default_to_empty() {
        let content = "\
version: 1
subjects: []
schedules:
  - name: Monday
    enable_day: mon
    weeks: all
";
        let doc = Document::from_yaml_str(content).unwrap();
        assert!(doc.schedules[0].classes.is_empty());
    }

    #[test]
    fn duplicate_subject_names_are_preserved_in_order() {
        let content = "\
subjects:
  - name: Math
    room: Room 101
  - name: Math
    room: Room 102
";
        let doc = Document::from_yaml_str(content).unwrap();
        let rooms: Vec<_> = doc.subjects.iter().map(|s| s.room.as_deref()).collect();
        assert_eq!(rooms, vec![Some("Room 101"), Some("Room 102")]);
    }

    #[test]
    fn absent_fields_are_omitted_from_yaml() {
        let doc = Document {
            subjects: vec![Subject::new("Math")],
            ..Document::default()
        };
        let text = doc.to_yaml().unwrap();
        assert!(text.contains("name: Math"));
        assert!(!text.contains("teacher"));
        assert!(!text.contains("null"));
    }
}
