use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::io::write_csv;
use crate::models::Split;
use crate::stages::Corpus;

pub const DEFAULT_PREFIX: &str = "iemocap_ekman7_emoberta";

/// Configuration for Stage 2 rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory the CSV files are written to (created if missing)
    pub out_dir: PathBuf,
    /// File name prefix, e.g. `<prefix>_all.csv`
    pub prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn all_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}_all.csv", self.prefix))
    }

    pub fn split_path(&self, split: Split) -> PathBuf {
        self.out_dir.join(format!("{}_{}.csv", self.prefix, split))
    }
}

/// A written output file
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Result of Stage 2 rendering
#[derive(Debug)]
pub struct RenderResult {
    /// Combined table
    pub all: RenderedFile,
    /// One table per split, in split order
    pub splits: Vec<(Split, RenderedFile)>,
}

/// Execute Stage 2: write the combined table and one table per split
pub fn render(corpus: &Corpus, config: &RenderConfig) -> Result<RenderResult> {
    ensure_dir(&config.out_dir)?;

    let all_path = config.all_path();
    let rows = write_csv(&all_path, &corpus.records)?;
    info!("Saved full dataset -> {:?}", all_path);
    let all = RenderedFile {
        path: all_path,
        rows,
    };

    let mut splits = Vec::with_capacity(Split::ALL.len());
    for split in Split::ALL {
        let path = config.split_path(split);
        let rows = write_csv(&path, corpus.split_records(split))?;
        info!("Saved {} split -> {:?} ({} rows)", split, path, rows);
        splits.push((split, RenderedFile { path, rows }));
    }

    Ok(RenderResult { all, splits })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| PipelineError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
