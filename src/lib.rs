//! # contig-score
//!
//! A library for scoring de novo assemblies from paired-end reads mapped back onto
//! their contigs.
//!
//! An assembly is judged contig by contig: how closely each contig matches the reads,
//! how much of it the reads cover, whether read pairs land with a plausible fragment
//! length, and whether it looks like one piece. Contig scores are then combined into
//! a single assembly score scaled by the share of reads that support the assembly.
//!
//! ## Features
//!
//! - **Fragment evidence**: Counts read pairs whose span is within `median + 2 * MAD`
//!   of the spans observed on the same shard of contigs
//! - **Parallel shards**: Strided contig shards evaluated on a rayon thread pool
//! - **Contig scores**: Four floored sub-scores combined by product
//! - **Assembly scores**: Harmonic mean scaled by read support, plus an
//!   abundance-weighted variant
//! - **Optimal cutoff**: The exclusion threshold that maximizes the assembly score
//!
//! ## Example
//!
//! ```rust
//! use contig_score::{
//!     AlignmentRecord, ContigAttributes, ContigScoreEngine, ContigTable,
//!     FragmentEvidenceEngine, InMemoryReader, RunConfig, ScoringMode, Shard,
//! };
//!
//! // Alignments: one read pair on ctg1
//! let mut reader = InMemoryReader::new(vec!["ctg1".to_string()]);
//! reader.push(AlignmentRecord::new("r1", 0, 100, 150)).unwrap();
//! reader.push(AlignmentRecord::new("r1", 0, 300, 350).reverse().second_mate()).unwrap();
//!
//! // Collect evidence and fold it into the contig table
//! let mut table = ContigTable::new(vec![ContigAttributes::new("ctg1")
//!     .with_fractions(0.99, 0.95, 0.0, 1.0)
//!     .with_fragments(1)]);
//! let engine = FragmentEvidenceEngine::new(ScoringMode::Full);
//! let evidence = engine
//!     .evaluate(&mut reader, Shard::whole(), &table.fragment_counts())
//!     .unwrap();
//! table.apply_evidence(&evidence);
//!
//! // Score the assembly
//! let scoring = ContigScoreEngine::new(RunConfig::default().with_read_count(2));
//! let result = scoring.score(&table);
//! assert!(result.assembly.score > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment records, contig tables and run configuration
//! - [`evidence`]: Fragment evidence engine and the parallel shard pool
//! - [`scoring`]: Contig and assembly scoring, cutoff search and report
//! - [`parsing`]: Indexed BAM reader and contig table reader/writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod evidence;
pub mod parsing;
pub mod scoring;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::alignment::{AlignmentError, AlignmentReader, AlignmentRecord, InMemoryReader};
pub use core::contig::{ContigAttributes, ContigTable};
pub use core::types::*;
pub use evidence::{evaluate_parallel, ContigEvidence, EvidenceError, FragmentEvidenceEngine};
pub use parsing::BamReader;
pub use scoring::{AssemblyScore, ContigScore, ContigScoreEngine, CutoffPoint, ScoreResult};
