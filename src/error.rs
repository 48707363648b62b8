use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No utterances were loaded. Check raw text root: {}", root.display())]
    NoRecords { root: PathBuf },

    #[error("Failed to read annotation file: {}", path.display())]
    ReadAnnotation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse annotation JSON: {}", path.display())]
    ParseAnnotation {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Annotation is not a JSON object: {}", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed to write CSV: {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
