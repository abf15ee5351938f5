use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use crate::Error;

/// Reads a whole headerless delimited file into typed records.
///
/// The column delimiter is sniffed from the first line: a comma if one
/// is present, otherwise a single space. Rows with missing or
/// unparseable fields fail the whole load; a half-read graph is worse
/// than no graph.
///
/// # Errors
///
/// [`Error::IoError`] if the file cannot be read, [`Error::InvalidData`]
/// on any malformed row.
pub fn deserialize_records<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let mut reader = BufReader::new(file);

    let mut first_line = String::new();
    reader.read_line(&mut first_line)?;
    reader.rewind()?;

    let mut records = Vec::new();
    for row in csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(sniff_delimiter(&first_line))
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
    {
        let record = row.map_err(|e| {
            Error::InvalidData(format!(
                "malformed node/edge data in '{}': {e}",
                path.display()
            ))
        })?;
        records.push(record);
    }

    Ok(records)
}

fn sniff_delimiter(first_line: &str) -> u8 {
    if first_line.contains(',') { b',' } else { b' ' }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;
    use crate::loading::NodeRecord;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("reparto-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn space_and_comma_delimited_parse_identically() {
        let spaced = write_temp("nodes-space.csv", "0 1.5 2.5\n150 3.0 4.0\n");
        let commad = write_temp("nodes-comma.csv", "0,1.5,2.5\n150,3.0,4.0\n");

        let a: Vec<NodeRecord> = deserialize_records(&spaced).unwrap();
        let b: Vec<NodeRecord> = deserialize_records(&commad).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a[1].id, 150);
        assert_eq!(a[1].x, 3.0);
    }

    #[test]
    fn malformed_row_fails_the_load() {
        let path = write_temp("nodes-bad.csv", "0 1.0 2.0\n1 not-a-number 3.0\n");
        let err = deserialize_records::<NodeRecord>(&path).unwrap_err();
        assert!(err.to_string().contains("malformed node/edge data"));
    }

    #[test]
    fn missing_field_fails_the_load() {
        let path = write_temp("nodes-short.csv", "0 1.0\n");
        assert!(deserialize_records::<NodeRecord>(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let missing = std::env::temp_dir().join("reparto-definitely-not-here.csv");
        assert!(matches!(
            deserialize_records::<NodeRecord>(&missing),
            Err(Error::IoError(_))
        ));
    }
}
