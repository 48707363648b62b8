use std::io::Write;
use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::models::{COLUMNS, NormalizedRecord};

/// Write records as CSV to `path`, returning the number of rows written.
///
/// The header row is written even when there are no records.
pub fn write_csv<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let file = std::fs::File::create(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(file, records).map_err(|source| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Write records as CSV to any writer
pub fn write_csv_to<'a, W, I>(writer: W, records: I) -> csv::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    out.write_record(COLUMNS)?;

    let mut rows = 0;
    for record in records {
        out.serialize(record)?;
        rows += 1;
    }

    out.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Split, TargetEmotion};

    fn record(text: &str) -> NormalizedRecord {
        NormalizedRecord {
            split: Split::Train,
            dialogue_id: "Ses01F_impro01".to_string(),
            utterance_id: "Ses01F_impro01_F000".to_string(),
            speaker: "F".to_string(),
            text: text.to_string(),
            target_emotion: TargetEmotion::Joy,
            source_emotion: "excited".to_string(),
        }
    }

    #[test]
    fn test_write_csv_rows() {
        let records = vec![record("hi"), record("well, \"fine\"")];
        let mut buf = Vec::new();

        let rows = write_csv_to(&mut buf, &records).unwrap();

        assert_eq!(rows, 2);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Split,Dialogue_ID,Utterance_ID,Speaker,Utterance,Emotion,Original_Emotion\n\
             train,Ses01F_impro01,Ses01F_impro01_F000,F,hi,joy,excited\n\
             train,Ses01F_impro01,Ses01F_impro01_F000,F,\"well, \"\"fine\"\"\",joy,excited\n"
        );
    }

    #[test]
    fn test_empty_table_has_header() {
        let mut buf = Vec::new();

        let rows = write_csv_to(&mut buf, &Vec::<NormalizedRecord>::new()).unwrap();

        assert_eq!(rows, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Split,Dialogue_ID,Utterance_ID,Speaker,Utterance,Emotion,Original_Emotion\n"
        );
    }

    #[test]
    fn test_header_matches_serialized_field_names() {
        let mut out = csv::WriterBuilder::new().from_writer(Vec::new());
        out.serialize(record("hi")).unwrap();
        let text = String::from_utf8(out.into_inner().unwrap()).unwrap();

        let header = text.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn test_write_csv_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = write_csv(&path, &[record("hi")]).unwrap();

        assert_eq!(rows, 1);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
