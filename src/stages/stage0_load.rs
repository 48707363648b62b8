use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{PipelineError, Result};
use crate::io::parse_annotation_file;
use crate::models::{AnnotationRecord, NormalizedRecord, Split, dialogue_id_of, map_emotion};

/// Configuration for Stage 0 loading
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Annotation file extension, without the dot
    pub extension: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
        }
    }
}

/// Result of loading one split directory
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub split: Split,
    /// Retained records, in file name order
    pub records: Vec<NormalizedRecord>,
    /// Annotation files found in the directory
    pub files_seen: usize,
    /// Files whose name has no underscore
    pub skipped_invalid_id: usize,
    /// Records whose emotion has no target class
    pub skipped_unmapped: usize,
}

impl LoadResult {
    pub fn empty(split: Split) -> Self {
        Self {
            split,
            records: Vec::new(),
            files_seen: 0,
            skipped_invalid_id: 0,
            skipped_unmapped: 0,
        }
    }
}

/// Execute Stage 0: load one split directory
///
/// A missing directory is not an error; it yields an empty result. Unreadable
/// or malformed annotation files abort the run.
pub fn load_split(split_dir: &Path, split: Split, config: &LoadConfig) -> Result<LoadResult> {
    let mut result = LoadResult::empty(split);

    if !split_dir.is_dir() {
        warn!("Split directory not found: {:?}", split_dir);
        return Ok(result);
    }

    info!("Processing split '{}' in {:?}", split, split_dir);

    for (path, utterance_id) in annotation_files(split_dir, &config.extension)? {
        result.files_seen += 1;

        let Some(dialogue_id) = dialogue_id_of(&utterance_id) else {
            warn!("Unexpected utterance id format: {}", utterance_id);
            result.skipped_invalid_id += 1;
            continue;
        };
        let dialogue_id = dialogue_id.to_string();

        let fields = parse_annotation_file(&path)?;

        let Some(target_emotion) = map_emotion(&fields.emotion) else {
            debug!("Dropping {} with unmapped emotion '{}'", utterance_id, fields.emotion);
            result.skipped_unmapped += 1;
            continue;
        };

        let annotation = AnnotationRecord {
            utterance_id,
            dialogue_id,
            speaker_raw: fields.speaker,
            text: fields.text,
            source_emotion: fields.emotion,
        };
        result
            .records
            .push(NormalizedRecord::from_annotation(annotation, split, target_emotion));
    }

    debug!(
        "Split '{}': {} files, {} kept, {} invalid ids, {} unmapped",
        split,
        result.files_seen,
        result.records.len(),
        result.skipped_invalid_id,
        result.skipped_unmapped
    );

    Ok(result)
}

/// List annotation files in `dir` as (path, stem) pairs, sorted by file name
fn annotation_files(dir: &Path, extension: &str) -> Result<Vec<(PathBuf, String)>> {
    let io_err = |source: std::io::Error| PipelineError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{}", extension);

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping non UTF-8 file name: {:?}", path);
            continue;
        };
        if let Some(stem) = name.strip_suffix(&suffix) {
            files.push((path.clone(), stem.to_string()));
        }
    }

    files.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(files)
}
