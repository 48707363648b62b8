pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use error::PipelineError;
pub use io::{AnnotationFields, parse_annotation_file, write_csv};
pub use models::{NormalizedRecord, Split, TargetEmotion, map_emotion};
pub use pipeline::{build_corpus, load_corpus};
pub use stages::{
    Corpus, CorpusSummary, LoadConfig, RenderConfig, aggregate, load_split, render,
};
