//! Core data types for contig and assembly scoring.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`AlignmentRecord`] and [`AlignmentReader`]: decoded read alignments, fetched per contig
//! - [`ContigAttributes`] and [`ContigTable`]: one row of quality attributes per contig
//! - [`RunConfig`], [`ScoringMode`], [`Shard`]: run settings and worker assignment
//!
//! ## Contig table columns
//!
//! | Column | Meaning | Required |
//! |--------|---------|----------|
//! | name | Contig identifier | Yes |
//! | good | Good read-pair count | No |
//! | pSeqTrue | Nucleotide identity fraction | No |
//! | pBasesCovered | Coverage breadth fraction | No |
//! | pGood | Fragment order consistency fraction | No |
//! | pNotSegmented | Non-segmentation fraction | No |
//! | tpm | Abundance estimate | No |
//! | fragments | Total fragment count | No |

pub mod alignment;
pub mod contig;
pub mod types;

pub use alignment::{AlignmentError, AlignmentReader, AlignmentRecord, InMemoryReader};
pub use contig::{ContigAttributes, ContigTable};
pub use types::{RunConfig, ScoringMode, Shard};
