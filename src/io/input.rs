use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{PipelineError, Result};

/// The three annotation fields the pipeline reads, already cleaned up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationFields {
    /// Trimmed `Utterance`
    pub text: String,
    /// Trimmed, lower-cased `Emotion`
    pub emotion: String,
    /// Trimmed `Speaker`
    pub speaker: String,
}

/// Parse a per-utterance annotation file
pub fn parse_annotation_file(path: &Path) -> Result<AnnotationFields> {
    let content = std::fs::read_to_string(path).map_err(|source| PipelineError::ReadAnnotation {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&content).map_err(|source| PipelineError::ParseAnnotation {
            path: path.to_path_buf(),
            source,
        })?;
    annotation_fields(&value).ok_or_else(|| PipelineError::NotAnObject {
        path: path.to_path_buf(),
    })
}

/// Extract fields from a parsed annotation; `None` if it is not a JSON object
pub fn annotation_fields(value: &Value) -> Option<AnnotationFields> {
    let object = value.as_object()?;
    Some(AnnotationFields {
        text: field_string(object, "Utterance").trim().to_string(),
        emotion: field_string(object, "Emotion").trim().to_lowercase(),
        speaker: field_string(object, "Speaker").trim().to_string(),
    })
}

/// Missing and null fields read as empty; non-string values use their JSON text
fn field_string(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_fields() {
        let value: Value = serde_json::from_str(
            r#"{
                "Utterance": "  Hello there. ",
                "Emotion": " Frustration ",
                "Speaker": "Female ",
                "SessionID": "Ses05"
            }"#,
        )
        .unwrap();

        let fields = annotation_fields(&value).unwrap();

        assert_eq!(fields.text, "Hello there.");
        assert_eq!(fields.emotion, "frustration");
        assert_eq!(fields.speaker, "Female");
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let value: Value = serde_json::from_str(r#"{"Emotion": null}"#).unwrap();

        let fields = annotation_fields(&value).unwrap();

        assert_eq!(fields.text, "");
        assert_eq!(fields.emotion, "");
        assert_eq!(fields.speaker, "");
    }

    #[test]
    fn test_non_string_values_use_json_text() {
        let value: Value = serde_json::from_str(r#"{"Utterance": 42, "Speaker": true}"#).unwrap();

        let fields = annotation_fields(&value).unwrap();

        assert_eq!(fields.text, "42");
        assert_eq!(fields.speaker, "true");
    }

    #[test]
    fn test_non_object_rejected() {
        let value: Value = serde_json::from_str(r#"["Utterance", "hi"]"#).unwrap();
        assert!(annotation_fields(&value).is_none());
    }

    #[test]
    fn test_parse_annotation_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing_1.json");
        assert!(matches!(
            parse_annotation_file(&missing),
            Err(PipelineError::ReadAnnotation { .. })
        ));

        let malformed = dir.path().join("bad_1.json");
        std::fs::write(&malformed, "{not json").unwrap();
        assert!(matches!(
            parse_annotation_file(&malformed),
            Err(PipelineError::ParseAnnotation { .. })
        ));

        let scalar = dir.path().join("scalar_1.json");
        std::fs::write(&scalar, "\"hi\"").unwrap();
        assert!(matches!(
            parse_annotation_file(&scalar),
            Err(PipelineError::NotAnObject { .. })
        ));
    }
}
