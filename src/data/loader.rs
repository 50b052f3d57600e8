//! CSV result loading
//!
//! Reads the two benchmark result files into their source-specific row types.
//! Column names follow each file's own header; extra columns are ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io;
use std::path::Path;

/// Default location of the backtracking/strategies results
pub const METHOD_RESULTS_FILE: &str = "baronDeterBackResult.csv";

/// Default location of the SMT results
pub const SMT_RESULTS_FILE: &str = "z3_baronresults.csv";

/// One row of the backtracking/strategies result file
///
/// Header: `height,width,boardnum,time_s`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodRow {
    pub height: u32,
    pub width: u32,
    pub boardnum: u32,
    pub time_s: f64,
}

/// One row of the SMT result file
///
/// Header: `Height,Width,Boardnum,TimeSeconds`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmtRow {
    pub height: u32,
    pub width: u32,
    pub boardnum: u32,
    pub time_seconds: f64,
}

/// Load the backtracking/strategies results
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a required column is missing,
/// or a value does not parse.
pub fn load_method_results<P: AsRef<Path>>(path: P) -> Result<Vec<MethodRow>> {
    load_rows(path.as_ref())
}

/// Load the SMT results
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a required column is missing,
/// or a value does not parse.
pub fn load_smt_results<P: AsRef<Path>>(path: P) -> Result<Vec<SmtRow>> {
    load_rows(path.as_ref())
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let rows = read_rows(file).with_context(|| format!("Failed to read {}", path.display()))?;

    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Deserialize every row of a headed, comma-delimited CSV stream
///
/// # Errors
///
/// Returns an error naming the 1-based data row that failed.
pub fn read_rows<T: DeserializeOwned, R: io::Read>(reader: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(idx, row)| row.with_context(|| format!("Invalid data row {}", idx + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn reads_method_rows() {
        let data = "height,width,boardnum,time_s\n9,9,1,0.5\n9,9,2,0.7\n";
        let rows: Vec<MethodRow> = read_rows(data.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![
                MethodRow {
                    height: 9,
                    width: 9,
                    boardnum: 1,
                    time_s: 0.5
                },
                MethodRow {
                    height: 9,
                    width: 9,
                    boardnum: 2,
                    time_s: 0.7
                },
            ]
        );
    }

    #[test]
    fn reads_smt_rows_with_extra_columns() {
        let data = "Height,Width,Boardnum,Result,TimeSeconds\n10,2,4,sat,1.25\n";
        let rows: Vec<SmtRow> = read_rows(data.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![SmtRow {
                height: 10,
                width: 2,
                boardnum: 4,
                time_seconds: 1.25
            }]
        );
    }

    #[test]
    fn trims_padded_headers() {
        let data = "height, width, boardnum, time_s\n3, 4, 1, 0.01\n";
        let rows: Vec<MethodRow> = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].width, 4);
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "height,width,boardnum\n9,9,1\n";
        let err = read_rows::<MethodRow, _>(data.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("time_s"), "got: {err:#}");
    }

    #[test]
    fn bad_value_names_the_row() {
        let data = "height,width,boardnum,time_s\n9,9,1,0.5\n9,9,two,0.7\n";
        let err = read_rows::<MethodRow, _>(data.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("row 2"), "got: {err:#}");
    }

    #[test]
    fn header_only_file_is_empty() {
        let rows: Vec<SmtRow> =
            read_rows("Height,Width,Boardnum,TimeSeconds\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_smt_results("definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height,width,boardnum,time_s,nodes").unwrap();
        writeln!(file, "5,5,1,0.125,310").unwrap();
        file.flush().unwrap();

        let rows = load_method_results(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].time_s, 0.125);
    }
}
