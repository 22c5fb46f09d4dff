use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::core::contig::{ContigAttributes, ContigTable};
use crate::utils::numeric::format_decimal;
use crate::utils::validation::{check_abundance, check_fraction};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contig table: {0}")]
    InvalidFormat(String),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid value for {column} on line {line}: '{value}'")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Duplicate contig '{name}' on line {line}")]
    DuplicateContig { name: String, line: usize },
}

/// Column names, in the order the table is written
pub const COLUMNS: [&str; 8] = [
    "name",
    "good",
    "pSeqTrue",
    "pBasesCovered",
    "pGood",
    "pNotSegmented",
    "tpm",
    "fragments",
];

/// Delimiter implied by a file extension: comma for `.csv`, tab otherwise
#[must_use]
pub fn delimiter_for(path: &Path) -> char {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("csv") => ',',
        _ => '\t',
    }
}

/// Parse a contig table file, choosing the delimiter from its extension
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be read, or other table errors
/// if the content is invalid.
pub fn parse_table_file(path: &Path) -> Result<ContigTable, TableError> {
    let content = std::fs::read_to_string(path)?;
    parse_table_text(&content, delimiter_for(path))
}

/// Column positions resolved from the header line
struct Layout {
    name: usize,
    good: Option<usize>,
    p_seq_true: Option<usize>,
    p_bases_covered: Option<usize>,
    p_good: Option<usize>,
    p_not_segmented: Option<usize>,
    tpm: Option<usize>,
    fragments: Option<usize>,
}

impl Layout {
    fn from_header(fields: &[&str]) -> Result<Self, TableError> {
        let find = |column: &str| {
            fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case(column))
        };

        Ok(Self {
            name: find("name").ok_or_else(|| TableError::MissingColumn("name".to_string()))?,
            good: find("good"),
            p_seq_true: find("pSeqTrue"),
            p_bases_covered: find("pBasesCovered"),
            p_good: find("pGood"),
            p_not_segmented: find("pNotSegmented"),
            tpm: find("tpm"),
            fragments: find("fragments"),
        })
    }
}

/// A cell is missing when absent, empty, or a conventional NA marker
fn cell<'a>(fields: &[&'a str], index: Option<usize>) -> Option<&'a str> {
    let value = fields.get(index?)?.trim();
    match value {
        "" | "NA" | "NaN" | "nan" | "None" => None,
        _ => Some(value),
    }
}

fn parse_float(
    fields: &[&str],
    index: Option<usize>,
    column: &str,
    line: usize,
) -> Result<f64, TableError> {
    let Some(raw) = cell(fields, index) else {
        return Ok(0.0);
    };
    raw.parse().map_err(|_| TableError::InvalidValue {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Counts may be written as floats (`12.0`) by dataframe tools
fn parse_count(
    fields: &[&str],
    index: Option<usize>,
    column: &str,
    line: usize,
) -> Result<Option<u64>, TableError> {
    let Some(raw) = cell(fields, index) else {
        return Ok(None);
    };
    if let Ok(count) = raw.parse::<u64>() {
        return Ok(Some(count));
    }

    let invalid = || TableError::InvalidValue {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if value >= 0.0 && value.fract() == 0.0 && value <= 2f64.powi(53) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = value as u64;
        Ok(Some(count))
    } else {
        Err(invalid())
    }
}

/// Parse delimited contig table text. The first non-empty, non-comment line is the
/// header; only `name` is required.
///
/// # Errors
///
/// Returns `TableError::InvalidFormat` if there is no header, `MissingColumn` if the
/// header lacks `name`, `InvalidValue` for unparsable numbers, or `DuplicateContig`
/// when a name repeats.
pub fn parse_table_text(text: &str, delimiter: char) -> Result<ContigTable, TableError> {
    let mut layout: Option<Layout> = None;
    let mut seen: HashSet<String> = HashSet::new();
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();

        let Some(columns) = &layout else {
            layout = Some(Layout::from_header(&fields)?);
            continue;
        };

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let name = cell(&fields, Some(columns.name))
            .ok_or_else(|| TableError::InvalidFormat(format!("Line {line_num} has no contig name")))?
            .to_string();

        if !seen.insert(name.clone()) {
            return Err(TableError::DuplicateContig {
                name,
                line: line_num,
            });
        }

        let mut row = ContigAttributes::new(name);
        row.good = parse_count(&fields, columns.good, "good", line_num)?.unwrap_or(0);
        row.p_seq_true = parse_float(&fields, columns.p_seq_true, "pSeqTrue", line_num)?;
        row.p_bases_covered =
            parse_float(&fields, columns.p_bases_covered, "pBasesCovered", line_num)?;
        row.p_good = parse_float(&fields, columns.p_good, "pGood", line_num)?;
        row.p_not_segmented =
            parse_float(&fields, columns.p_not_segmented, "pNotSegmented", line_num)?;
        row.tpm = parse_float(&fields, columns.tpm, "tpm", line_num)?;
        row.fragments = parse_count(&fields, columns.fragments, "fragments", line_num)?;

        for (column, value) in [
            ("pSeqTrue", row.p_seq_true),
            ("pBasesCovered", row.p_bases_covered),
            ("pGood", row.p_good),
            ("pNotSegmented", row.p_not_segmented),
        ] {
            if let Some(msg) = check_fraction(column, value) {
                warn!(contig = %row.name, "{msg}");
            }
        }
        if let Some(msg) = check_abundance(row.tpm) {
            warn!(contig = %row.name, "{msg}");
        }

        rows.push(row);
    }

    if layout.is_none() {
        return Err(TableError::InvalidFormat(
            "No header line found".to_string(),
        ));
    }

    Ok(ContigTable::new(rows))
}

/// Write a contig table with every column, absent fragment counts left empty
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_table<W: Write>(
    writer: &mut W,
    table: &ContigTable,
    delimiter: char,
) -> std::io::Result<()> {
    let sep = delimiter.to_string();
    writeln!(writer, "{}", COLUMNS.join(&sep))?;

    for row in table.iter() {
        let fields = [
            row.name.clone(),
            row.good.to_string(),
            format_decimal(row.p_seq_true),
            format_decimal(row.p_bases_covered),
            format_decimal(row.p_good),
            format_decimal(row.p_not_segmented),
            format_decimal(row.tpm),
            row.fragments.map(|f| f.to_string()).unwrap_or_default(),
        ];
        writeln!(writer, "{}", fields.join(&sep))?;
    }

    Ok(())
}

/// Write a contig table to a file, choosing the delimiter from its extension
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be created or written.
pub fn write_table_file(path: &Path, table: &ContigTable) -> Result<(), TableError> {
    let mut writer = std::fs::File::create(path).map(std::io::BufWriter::new)?;
    write_table(&mut writer, table, delimiter_for(path))?;
    writer.flush()?;
    Ok(())
}
