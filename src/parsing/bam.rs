//! Indexed BAM access through noodles.
//!
//! Reads are fetched one reference sequence at a time using the `.bai` index, so a
//! pass over an assembly never holds more than one contig's alignments in memory.

use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use noodles::core::Region;
use noodles::sam::alignment::Record as _;
use noodles::{bam, bgzf, sam};
use tracing::debug;

use crate::core::alignment::{AlignmentError, AlignmentReader, AlignmentRecord};

/// Candidate index locations for a BAM file: `<file>.bam.bai`, then `<file>.bai`
fn index_candidates(path: &Path) -> [PathBuf; 2] {
    let mut appended = OsString::from(path);
    appended.push(".bai");
    [PathBuf::from(appended), path.with_extension("bai")]
}

fn find_index(path: &Path) -> Result<PathBuf, AlignmentError> {
    index_candidates(path)
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            AlignmentError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No .bai index found for {}", path.display()),
            ))
        })
}

/// Convert a 1-based noodles position to a 0-based coordinate
fn zero_based(position: noodles::core::Position) -> io::Result<i64> {
    i64::try_from(position.get() - 1)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Convert a noodles position used as an exclusive end
fn exclusive_end(position: noodles::core::Position) -> io::Result<i64> {
    i64::try_from(position.get()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Extract the fields fragment evidence needs from a BAM record. Records without
/// a query name cannot be paired and yield `None`.
///
/// # Errors
///
/// Returns an I/O error if a reference id or coordinate cannot be decoded.
pub fn convert_record(record: &bam::Record) -> io::Result<Option<AlignmentRecord>> {
    let Some(name) = record.name() else {
        return Ok(None);
    };
    let flags = record.flags();

    let start = record
        .alignment_start()
        .transpose()?
        .map(zero_based)
        .transpose()?;
    let end = record
        .alignment_end()
        .transpose()?
        .map(exclusive_end)
        .transpose()?;

    Ok(Some(AlignmentRecord {
        name: name.to_string(),
        reference_id: record.reference_sequence_id().transpose()?,
        mate_reference_id: record.mate_reference_sequence_id().transpose()?,
        start,
        end,
        is_unmapped: flags.is_unmapped(),
        is_mate_unmapped: flags.is_mate_unmapped(),
        is_reverse: flags.is_reverse_complemented(),
        is_first_mate: flags.is_first_segment(),
    }))
}

/// An `AlignmentReader` over a coordinate-sorted, indexed BAM file
pub struct BamReader {
    path: PathBuf,
    inner: bam::io::Reader<bgzf::Reader<File>>,
    header: sam::Header,
    index: bam::bai::Index,
    references: Vec<String>,
}

impl BamReader {
    /// Open a BAM file and its `.bai` index
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::Io` if the file or its index cannot be opened, or
    /// `AlignmentError::Noodles` if the header cannot be decoded.
    pub fn open(path: &Path) -> Result<Self, AlignmentError> {
        let index_path = find_index(path)?;
        let index = bam::bai::read(&index_path)?;

        let mut inner = File::open(path).map(bam::io::Reader::new)?;
        let header = inner
            .read_header()
            .map_err(|e| AlignmentError::Noodles(e.to_string()))?;

        let references: Vec<String> = header
            .reference_sequences()
            .keys()
            .map(ToString::to_string)
            .collect();

        debug!(
            path = %path.display(),
            index = %index_path.display(),
            references = references.len(),
            "Opened BAM"
        );

        Ok(Self {
            path: path.to_path_buf(),
            inner,
            header,
            index,
            references,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlignmentReader for BamReader {
    fn references(&self) -> &[String] {
        &self.references
    }

    fn fetch(&mut self, contig: &str) -> Result<Vec<AlignmentRecord>, AlignmentError> {
        if !self.references.iter().any(|r| r == contig) {
            return Err(AlignmentError::UnknownContig(contig.to_string()));
        }

        let region = Region::new(contig, ..);
        let query = self
            .inner
            .query(&self.header, &self.index, &region)
            .map_err(|e| AlignmentError::Noodles(e.to_string()))?;

        let mut records = Vec::new();
        let mut nameless = 0usize;
        for result in query {
            match convert_record(&result?)? {
                Some(record) => records.push(record),
                None => nameless += 1,
            }
        }

        debug!(contig, records = records.len(), nameless, "Fetched alignments");
        Ok(records)
    }
}
