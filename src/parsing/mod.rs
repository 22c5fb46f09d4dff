//! Readers and writers for the files a scoring run consumes.
//!
//! - **Contig tables**: delimited per-contig statistics (`.csv` is comma separated,
//!   anything else tab separated)
//! - **BAM files**: coordinate-sorted, indexed paired-end alignments
//!
//! ## Example
//!
//! ```rust
//! use contig_score::parsing::table::parse_table_text;
//!
//! let text = "name,good,pSeqTrue,pBasesCovered,pGood,pNotSegmented,tpm\n\
//!             ctg1,10,0.99,0.95,0.9,1.0,12.5\n";
//! let table = parse_table_text(text, ',').unwrap();
//! assert_eq!(table.get("ctg1").unwrap().good, 10);
//! ```
//!
//! ## Table columns
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | name | Contig name | Yes |
//! | good | Fragments with consistent mate placement | No |
//! | pSeqTrue | Estimated nucleotide identity | No |
//! | pBasesCovered | Fraction of bases covered by reads | No |
//! | pGood | Fraction of fragments counted as good | No |
//! | pNotSegmented | Probability the contig is not segmented | No |
//! | tpm | Transcripts per million | No |
//! | fragments | Fragments assigned to the contig | No |

pub mod bam;
pub mod table;

pub use bam::BamReader;
pub use table::{parse_table_file, parse_table_text, write_table, TableError};
