//! Contig and assembly scoring.
//!
//! This module provides the scoring pipeline that runs over a merged contig table:
//!
//! - [`ContigScoreEngine`]: main entry point, one call per run
//! - [`ScoreResult`]: assembly-level scores plus per-contig sub-scores
//! - [`cutoff::search`]: optimal exclusion cutoff over observed contig scores
//!
//! ## Contig score
//!
//! Four sub-scores, each floored at `0.01`, are multiplied and floored again:
//!
//! - **sCnuc**: nucleotide identity (`pSeqTrue`)
//! - **sCcov**: coverage breadth (`pBasesCovered`)
//! - **sCord**: fragment order consistency (`pGood`)
//! - **sCseg**: non-segmentation (`pNotSegmented`)
//!
//! ## Assembly score
//!
//! The harmonic mean of contig scores, scaled by the fraction of reads counted as
//! good evidence. The weighted score is the mean of `score * tpm`, scaled the same way.
//!
//! ## Example
//!
//! ```rust
//! use contig_score::{ContigAttributes, ContigScoreEngine, ContigTable, RunConfig};
//!
//! let table = ContigTable::new(vec![
//!     ContigAttributes::new("ctg1").with_fractions(0.99, 0.95, 0.9, 1.0).with_good(80),
//!     ContigAttributes::new("ctg2").with_fractions(0.90, 0.60, 0.5, 0.8).with_good(10),
//! ]);
//!
//! let engine = ContigScoreEngine::new(RunConfig::default().with_read_count(100));
//! let result = engine.score(&table);
//!
//! assert!(result.assembly.score > 0.0);
//! assert_eq!(result.cutoffs.len(), 2);
//! ```

pub mod aggregate;
pub mod contig;
pub mod cutoff;
pub mod engine;
pub mod report;
pub mod result;

pub use engine::ContigScoreEngine;
pub use report::ReportError;
pub use result::{AssemblyScore, ContigScore, CutoffPoint, ScoreResult};
