//! Paired-alignment evidence for contig correctness.
//!
//! For each contig this module derives a "good" read-pair count and the ratio of
//! good pairs to all fragments aligned to the contig:
//!
//! 1. **Fragment assembly**: records of one query with a forward and a reverse
//!    alignment on the same contig form a [`Fragment`](fragment::Fragment)
//! 2. **Pooled threshold**: spans of valid fragments across a whole shard give
//!    `median + 2 * MAD`, truncated to an integer
//! 3. **Classification**: a fragment is good when its span is within the threshold
//! 4. **Counting**: full mode counts both mates of a good first-mate pair, lightweight
//!    mode counts each good pair once
//!
//! Shards are strided slices of the reference list. [`pool::evaluate_parallel`] runs
//! them on a rayon pool and merges the results.

pub mod engine;
pub mod fragment;
pub mod pool;
pub mod threshold;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::core::alignment::AlignmentError;

pub use engine::FragmentEvidenceEngine;
pub use pool::evaluate_parallel;

#[derive(Error, Debug)]
pub enum EvidenceError {
    #[error("Alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    #[error("Failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("Shard count must be at least 1")]
    NoShards,
}

/// Good-pair evidence for one contig
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContigEvidence {
    pub good: u64,

    #[serde(rename = "pGood")]
    pub p_good: f64,
}

/// Union of per-shard evidence maps. Contig names are expected to be unique across
/// shards; a repeated name keeps the last value seen.
#[must_use]
pub fn merge_evidence<I>(partials: I) -> HashMap<String, ContigEvidence>
where
    I: IntoIterator<Item = HashMap<String, ContigEvidence>>,
{
    let mut merged = HashMap::new();
    for partial in partials {
        merged.extend(partial);
    }
    merged
}
