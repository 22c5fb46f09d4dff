use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::scoring::result::CutoffPoint;
use crate::utils::numeric::{format_decimal, round_to, REPORT_DECIMALS};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write cutoff report {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write the cutoff table as CSV with a `cutoff,score` header, values rounded to
/// five decimal places
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_cutoff_csv<W: Write>(writer: &mut W, table: &[CutoffPoint]) -> std::io::Result<()> {
    writeln!(writer, "cutoff,score")?;
    for point in table {
        writeln!(
            writer,
            "{},{}",
            format_decimal(round_to(point.cutoff, REPORT_DECIMALS)),
            format_decimal(round_to(point.score, REPORT_DECIMALS)),
        )?;
    }
    Ok(())
}

/// Write the cutoff table to a file, replacing any existing content
///
/// # Errors
///
/// Returns `ReportError::Io` if the file cannot be created or written.
pub fn write_cutoff_report(path: &Path, table: &[CutoffPoint]) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut writer = File::create(path).map(BufWriter::new).map_err(io_error)?;
    write_cutoff_csv(&mut writer, table).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_cutoff_csv() {
        let table = [
            CutoffPoint {
                cutoff: 0.5,
                score: 0.665_513_253_012,
            },
            CutoffPoint {
                cutoff: 0.9,
                score: 0.304,
            },
            CutoffPoint {
                cutoff: 0.95,
                score: 0.0,
            },
        ];

        let mut out = Vec::new();
        write_cutoff_csv(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "cutoff,score\n0.5,0.66551\n0.9,0.304\n0.95,0.0\n");
    }

    #[test]
    fn test_write_cutoff_csv_halves_and_small_values() {
        let table = [
            CutoffPoint {
                cutoff: 0.015_625,
                score: 0.000_01,
            },
            CutoffPoint {
                cutoff: 0.046_875,
                score: 0.000_004,
            },
        ];

        let mut out = Vec::new();
        write_cutoff_csv(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "cutoff,score\n0.01562,1e-05\n0.04688,0.0\n");
    }

    #[test]
    fn test_write_cutoff_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cutoffs.csv");

        write_cutoff_report(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cutoff,score\n");
    }

    #[test]
    fn test_write_cutoff_report_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cutoffs.csv");

        let err = write_cutoff_report(&path, &[]).unwrap_err();
        assert!(err.to_string().contains("cutoffs.csv"));
    }
}
