use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Unknown contig: {0}")]
    UnknownContig(String),
}

/// The fields of one read alignment that fragment evidence is built from.
///
/// Coordinates are 0-based with an exclusive end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    /// Query (read) name shared by both mates
    pub name: String,

    /// Reference sequence the read is aligned to
    pub reference_id: Option<usize>,

    /// Reference sequence the mate is aligned to
    pub mate_reference_id: Option<usize>,

    pub start: Option<i64>,
    pub end: Option<i64>,

    pub is_unmapped: bool,
    pub is_mate_unmapped: bool,

    /// Aligned to the reverse strand
    pub is_reverse: bool,

    /// First segment of the template
    pub is_first_mate: bool,
}

impl AlignmentRecord {
    /// A mapped, forward-strand first mate whose mate maps to the same reference
    pub fn new(name: impl Into<String>, reference_id: usize, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            reference_id: Some(reference_id),
            mate_reference_id: Some(reference_id),
            start: Some(start),
            end: Some(end),
            is_unmapped: false,
            is_mate_unmapped: false,
            is_reverse: false,
            is_first_mate: true,
        }
    }

    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.is_reverse = true;
        self
    }

    #[must_use]
    pub fn second_mate(mut self) -> Self {
        self.is_first_mate = false;
        self
    }

    #[must_use]
    pub fn with_mate_reference(mut self, mate_reference_id: Option<usize>) -> Self {
        self.mate_reference_id = mate_reference_id;
        self
    }

    #[must_use]
    pub fn unmapped(mut self) -> Self {
        self.is_unmapped = true;
        self
    }

    #[must_use]
    pub fn mate_unmapped(mut self) -> Self {
        self.is_mate_unmapped = true;
        self
    }

    /// `(start, end)` when both coordinates are known
    #[must_use]
    pub fn interval(&self) -> Option<(i64, i64)> {
        Some((self.start?, self.end?))
    }

    /// True when the mate is mapped to a different reference sequence
    #[must_use]
    pub fn is_inter_contig(&self) -> bool {
        !self.is_mate_unmapped && self.mate_reference_id != self.reference_id
    }
}

/// Read-only access to alignments grouped by reference sequence
pub trait AlignmentReader {
    /// Reference sequence names, in header order
    fn references(&self) -> &[String];

    /// All alignment records placed on `contig`
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::UnknownContig` if `contig` is not a reference of this
    /// reader, or an I/O / decoding error from the underlying container.
    fn fetch(&mut self, contig: &str) -> Result<Vec<AlignmentRecord>, AlignmentError>;
}

/// An `AlignmentReader` over records held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryReader {
    references: Vec<String>,
    records: HashMap<String, Vec<AlignmentRecord>>,
}

impl InMemoryReader {
    #[must_use]
    pub fn new(references: Vec<String>) -> Self {
        let records = references.iter().map(|r| (r.clone(), Vec::new())).collect();
        Self {
            references,
            records,
        }
    }

    /// Place a record on the reference named by its `reference_id`
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::UnknownContig` if the record's reference id is out of range.
    pub fn push(&mut self, record: AlignmentRecord) -> Result<(), AlignmentError> {
        let name = record
            .reference_id
            .and_then(|id| self.references.get(id))
            .cloned()
            .ok_or_else(|| AlignmentError::UnknownContig(format!("{:?}", record.reference_id)))?;
        self.records.entry(name).or_default().push(record);
        Ok(())
    }
}

impl AlignmentReader for InMemoryReader {
    fn references(&self) -> &[String] {
        &self.references
    }

    fn fetch(&mut self, contig: &str) -> Result<Vec<AlignmentRecord>, AlignmentError> {
        self.records
            .get(contig)
            .cloned()
            .ok_or_else(|| AlignmentError::UnknownContig(contig.to_string()))
    }
}
