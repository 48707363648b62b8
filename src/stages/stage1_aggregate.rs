use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::models::{NormalizedRecord, Split, TargetEmotion};
use crate::stages::LoadResult;

/// Counts reported after aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSummary {
    pub total: usize,
    pub by_emotion: BTreeMap<TargetEmotion, usize>,
    pub by_split: BTreeMap<Split, usize>,
    pub by_split_emotion: BTreeMap<(Split, TargetEmotion), usize>,
}

impl CorpusSummary {
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            *summary.by_emotion.entry(record.target_emotion).or_default() += 1;
            *summary.by_split.entry(record.split).or_default() += 1;
            *summary
                .by_split_emotion
                .entry((record.split, record.target_emotion))
                .or_default() += 1;
        }
        summary
    }

    /// Render the summary as plain text, one count per line
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Total utterances after 7-class mapping: {}\n", self.total));

        output.push_str("\nLabel distribution (7-class):\n");
        for (emotion, count) in &self.by_emotion {
            output.push_str(&format!("  {:<10} {}\n", emotion, count));
        }

        output.push_str("\nSplit sizes (rows per split):\n");
        for (split, count) in &self.by_split {
            output.push_str(&format!("  {:<10} {}\n", split, count));
        }

        output.push_str("\nSplit x Emotion:\n");
        for ((split, emotion), count) in &self.by_split_emotion {
            output.push_str(&format!("  {:<6} {:<10} {}\n", split, emotion, count));
        }

        output
    }
}

/// Per-split loading counts, kept for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitStats {
    pub split: Split,
    pub files_seen: usize,
    pub kept: usize,
    pub skipped_invalid_id: usize,
    pub skipped_unmapped: usize,
}

impl From<&LoadResult> for SplitStats {
    fn from(result: &LoadResult) -> Self {
        Self {
            split: result.split,
            files_seen: result.files_seen,
            kept: result.records.len(),
            skipped_invalid_id: result.skipped_invalid_id,
            skipped_unmapped: result.skipped_unmapped,
        }
    }
}

/// All retained records across splits
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Records in split order, then file order within each split
    pub records: Vec<NormalizedRecord>,
    pub summary: CorpusSummary,
    pub split_stats: Vec<SplitStats>,
}

impl Corpus {
    /// Rows belonging to one split, in combined-table order
    pub fn split_records(&self, split: Split) -> impl Iterator<Item = &NormalizedRecord> {
        self.records.iter().filter(move |r| r.split == split)
    }
}

/// Execute Stage 1: merge per-split results into one corpus
///
/// Fails with [`PipelineError::NoRecords`] if no split produced a record.
pub fn aggregate(root: &Path, results: Vec<LoadResult>) -> Result<Corpus> {
    let split_stats: Vec<SplitStats> = results.iter().map(SplitStats::from).collect();
    let records: Vec<NormalizedRecord> = results.into_iter().flat_map(|r| r.records).collect();

    if records.is_empty() {
        return Err(PipelineError::NoRecords {
            root: root.to_path_buf(),
        });
    }

    let summary = CorpusSummary::from_records(&records);

    info!("Total utterances after 7-class mapping: {}", summary.total);
    for (emotion, count) in &summary.by_emotion {
        info!("Emotion {}: {}", emotion, count);
    }
    for (split, count) in &summary.by_split {
        info!("Split {}: {} rows", split, count);
    }
    for ((split, emotion), count) in &summary.by_split_emotion {
        info!("Split {} / {}: {}", split, emotion, count);
    }

    Ok(Corpus {
        records,
        summary,
        split_stats,
    })
}
