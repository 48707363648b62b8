use std::path::Path;

use crate::error::Result;
use crate::models::Split;
use crate::stages::{Corpus, LoadConfig, RenderConfig, RenderResult, aggregate, load_split, render};

/// Run Stages 0 and 1: load `train`, `val` and `test` under `root` and merge them
pub fn load_corpus(root: &Path, config: &LoadConfig) -> Result<Corpus> {
    let mut results = Vec::with_capacity(Split::ALL.len());
    for split in Split::ALL {
        results.push(load_split(&root.join(split.as_str()), split, config)?);
    }
    aggregate(root, results)
}

/// Run the whole pipeline. Nothing is written unless loading succeeds.
pub fn build_corpus(
    root: &Path,
    load_config: &LoadConfig,
    render_config: &RenderConfig,
) -> Result<(Corpus, RenderResult)> {
    let corpus = load_corpus(root, load_config)?;
    let rendered = render(&corpus, render_config)?;
    Ok((corpus, rendered))
}
