use std::fmt;

use serde::{Deserialize, Serialize};

/// Seven-class Ekman-style emotion label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEmotion {
    Anger,
    Joy,
    Sadness,
    Neutral,
    Surprise,
    Fear,
    Disgust,
}

impl TargetEmotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetEmotion::Anger => "anger",
            TargetEmotion::Joy => "joy",
            TargetEmotion::Sadness => "sadness",
            TargetEmotion::Neutral => "neutral",
            TargetEmotion::Surprise => "surprise",
            TargetEmotion::Fear => "fear",
            TargetEmotion::Disgust => "disgust",
        }
    }
}

impl fmt::Display for TargetEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Source (11-class) labels that have a target class.
///
/// `undecided` and `other` have no entry and are dropped.
pub const EMOTION_MAP: &[(&str, TargetEmotion)] = &[
    ("anger", TargetEmotion::Anger),
    ("frustration", TargetEmotion::Anger),
    ("sadness", TargetEmotion::Sadness),
    ("neutral", TargetEmotion::Neutral),
    ("happiness", TargetEmotion::Joy),
    ("excited", TargetEmotion::Joy),
    ("surprise", TargetEmotion::Surprise),
    ("fear", TargetEmotion::Fear),
    ("disgust", TargetEmotion::Disgust),
];

/// Map a lower-cased, trimmed source label to its target class
///
/// Returns `None` for labels outside the table; the caller drops the record.
pub fn map_emotion(source: &str) -> Option<TargetEmotion> {
    EMOTION_MAP
        .iter()
        .find(|(key, _)| *key == source)
        .map(|&(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_emotion_table() {
        assert_eq!(map_emotion("anger"), Some(TargetEmotion::Anger));
        assert_eq!(map_emotion("frustration"), Some(TargetEmotion::Anger));
        assert_eq!(map_emotion("sadness"), Some(TargetEmotion::Sadness));
        assert_eq!(map_emotion("neutral"), Some(TargetEmotion::Neutral));
        assert_eq!(map_emotion("happiness"), Some(TargetEmotion::Joy));
        assert_eq!(map_emotion("excited"), Some(TargetEmotion::Joy));
        assert_eq!(map_emotion("surprise"), Some(TargetEmotion::Surprise));
        assert_eq!(map_emotion("fear"), Some(TargetEmotion::Fear));
        assert_eq!(map_emotion("disgust"), Some(TargetEmotion::Disgust));
    }

    #[test]
    fn test_unmapped_labels() {
        assert_eq!(map_emotion("undecided"), None);
        assert_eq!(map_emotion("other"), None);
        assert_eq!(map_emotion("contempt"), None);
        assert_eq!(map_emotion(""), None);
    }

    #[test]
    fn test_mapper_does_not_normalize() {
        // Callers lower-case and trim before lookup
        assert_eq!(map_emotion("Anger"), None);
        assert_eq!(map_emotion(" anger"), None);
    }

    #[test]
    fn test_table_covers_all_targets() {
        assert_eq!(EMOTION_MAP.len(), 9);
        for target in [
            TargetEmotion::Anger,
            TargetEmotion::Joy,
            TargetEmotion::Sadness,
            TargetEmotion::Neutral,
            TargetEmotion::Surprise,
            TargetEmotion::Fear,
            TargetEmotion::Disgust,
        ] {
            assert!(EMOTION_MAP.iter().any(|(_, t)| *t == target));
        }
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&TargetEmotion::Joy).unwrap();
        assert_eq!(json, "\"joy\"");
        assert_eq!(TargetEmotion::Disgust.to_string(), "disgust");
    }
}
