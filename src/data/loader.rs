use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use super::error::BrowserError;
use super::model::Table;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load `file_name` from `dir` as a fully materialised [`Table`].
///
/// The first row is the header and every record must have as many fields.
/// A file that vanished after listing surfaces as [`BrowserError::Open`].
pub fn load_table(dir: &Path, file_name: &str) -> Result<Table, BrowserError> {
    let path = dir.join(file_name);

    let file = File::open(&path).map_err(|source| BrowserError::Open {
        path: path.clone(),
        source,
    })?;
    let parse_err = |source| csv_error(&path, source);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers = reader.headers().map_err(parse_err)?.clone();
    if headers.is_empty() {
        return Err(BrowserError::NoColumns { path: path.clone() });
    }
    let names = normalise_headers(headers.iter());

    let mut raw_rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_err)?;
        raw_rows.push(record.iter().map(str::to_string).collect());
    }

    let table = Table::from_raw(names, raw_rows);
    log::info!(
        "Loaded {} with {} rows and columns {:?}",
        path.display(),
        table.len(),
        table.column_names()
    );
    Ok(table)
}

/// I/O failures while reading stay filesystem errors; the rest are parse errors.
fn csv_error(path: &Path, source: csv::Error) -> BrowserError {
    let path = path.to_path_buf();
    if !source.is_io_error() {
        return BrowserError::Parse { path, source };
    }
    match source.into_kind() {
        csv::ErrorKind::Io(source) => BrowserError::Read { path, source },
        _ => unreachable!("is_io_error implies ErrorKind::Io"),
    }
}

// ---------------------------------------------------------------------------
// Header helpers
// ---------------------------------------------------------------------------

/// Name blank headers `Unnamed: {i}` and suffix repeats as `name.1`, `name.2`.
fn normalise_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for (i, header) in raw.enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        if seen.contains(&name) {
            let count = repeats.entry(base.clone()).or_insert(0);
            loop {
                *count += 1;
                name = format!("{base}.{count}");
                if !seen.contains(&name) {
                    break;
                }
            }
        }
        seen.insert(name.clone());
        names.push(name);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::ErrorKind;
    use crate::data::model::{CellValue, ColumnType};
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn well_formed_file_has_expected_shape() {
        let dir = TempDir::new().unwrap();
        write(&dir, "abc.csv", "a,b,c\n1,2,3\n4,5,6\n");

        let table = load_table(dir.path(), "abc.csv").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.column_names(), vec!["a", "b", "c"]);
        assert_eq!(table.rows[1][2], CellValue::Integer(6));
    }

    #[test]
    fn columns_get_inferred_types() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "typed.csv",
            "id,score,name,active\n1,0.5,alice,true\n2,1,\"bob, jr\",false\n",
        );

        let table = load_table(dir.path(), "typed.csv").unwrap();
        let dtypes: Vec<ColumnType> = table.columns.iter().map(|c| c.dtype).collect();
        assert_eq!(
            dtypes,
            vec![
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::String,
                ColumnType::Bool
            ]
        );
        assert_eq!(table.rows[1][2], CellValue::String("bob, jr".into()));
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "bad.csv", "a,b,c\n1,2,3\n4,5\n");

        let err = load_table(dir.path(), "bad.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(matches!(err, BrowserError::Parse { .. }));
    }

    #[test]
    fn extra_field_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "wide.csv", "a,b\n1,2,3\n");

        let err = load_table(dir.path(), "wide.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn empty_file_has_no_columns() {
        let dir = TempDir::new().unwrap();
        write(&dir, "empty.csv", "");

        let err = load_table(dir.path(), "empty.csv").unwrap_err();
        assert!(matches!(err, BrowserError::NoColumns { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn header_only_file_has_zero_rows() {
        let dir = TempDir::new().unwrap();
        write(&dir, "header.csv", "x,y\n");

        let table = load_table(dir.path(), "header.csv").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_names(), vec!["x", "y"]);
        assert_eq!(table.columns[0].dtype, ColumnType::Empty);
    }

    #[test]
    fn removed_file_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "gone.csv", "a\n1\n");
        fs::remove_file(dir.path().join("gone.csv")).unwrap();

        let err = load_table(dir.path(), "gone.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Filesystem);
        assert!(matches!(err, BrowserError::Open { .. }));
    }

    #[test]
    fn read_failure_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub.csv")).unwrap();

        let err = load_table(dir.path(), "sub.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Filesystem);
        assert!(
            matches!(err, BrowserError::Read { .. } | BrowserError::Open { .. }),
            "{err:?}"
        );
    }

    #[test]
    fn headers_are_normalised() {
        let names = normalise_headers(["a", "", "a", "b", "a"].into_iter());
        assert_eq!(names, vec!["a", "Unnamed: 1", "a.1", "b", "a.2"]);
    }

    #[test]
    fn duplicate_suffix_does_not_collide_with_existing_name() {
        let names = normalise_headers(["a", "a.1", "a"].into_iter());
        assert_eq!(names, vec!["a", "a.1", "a.2"]);
    }
}
