use serde::{Deserialize, Serialize};

use super::{Split, TargetEmotion};

/// Output column names, in file order
pub const COLUMNS: [&str; 7] = [
    "Split",
    "Dialogue_ID",
    "Utterance_ID",
    "Speaker",
    "Utterance",
    "Emotion",
    "Original_Emotion",
];

/// A single utterance annotation as read from its source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    /// File name without extension
    pub utterance_id: String,
    /// All underscore components of `utterance_id` except the last
    pub dialogue_id: String,
    /// Trimmed speaker field
    pub speaker_raw: String,
    /// Trimmed utterance text
    pub text: String,
    /// Lower-cased, trimmed emotion label
    pub source_emotion: String,
}

/// A retained utterance with its 7-class label. Field order is column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "Split")]
    pub split: Split,
    #[serde(rename = "Dialogue_ID")]
    pub dialogue_id: String,
    #[serde(rename = "Utterance_ID")]
    pub utterance_id: String,
    #[serde(rename = "Speaker")]
    pub speaker: String,
    #[serde(rename = "Utterance")]
    pub text: String,
    #[serde(rename = "Emotion")]
    pub target_emotion: TargetEmotion,
    #[serde(rename = "Original_Emotion")]
    pub source_emotion: String,
}

impl NormalizedRecord {
    pub fn from_annotation(
        record: AnnotationRecord,
        split: Split,
        target_emotion: TargetEmotion,
    ) -> Self {
        Self {
            split,
            speaker: normalize_speaker(&record.speaker_raw),
            dialogue_id: record.dialogue_id,
            utterance_id: record.utterance_id,
            text: record.text,
            target_emotion,
            source_emotion: record.source_emotion,
        }
    }
}

/// Derive `dialogue_id` from an utterance id.
///
/// `Ses05M_script01_1_F000` -> `Ses05M_script01_1`. Returns `None` when the
/// id has no underscore.
pub fn dialogue_id_of(utterance_id: &str) -> Option<&str> {
    utterance_id.rsplit_once('_').map(|(dialogue, _)| dialogue)
}

/// Collapse "Female"/"Male" style speaker fields to `F`/`M`
pub fn normalize_speaker(raw: &str) -> String {
    match raw.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('f') => "F".to_string(),
        Some('m') => "M".to_string(),
        _ => raw.to_string(),
    }
}
