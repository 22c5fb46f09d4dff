use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::alignment::{AlignmentError, AlignmentReader};
use crate::core::types::Shard;
use crate::evidence::engine::FragmentEvidenceEngine;
use crate::evidence::{merge_evidence, ContigEvidence, EvidenceError};

/// Evaluate every shard of a `shards`-way split on a dedicated rayon pool and merge
/// the results.
///
/// `open` is called once per shard so each worker owns its own reader; workers share
/// nothing else. The output holds one entry per reference of the container.
///
/// # Errors
///
/// Returns `EvidenceError::NoShards` if `shards` is zero, `EvidenceError::Pool` if the
/// thread pool cannot be built, or the first alignment error raised by any worker.
pub fn evaluate_parallel<R, F>(
    engine: FragmentEvidenceEngine,
    open: F,
    shards: usize,
    fragment_counts: &HashMap<String, u64>,
) -> Result<HashMap<String, ContigEvidence>, EvidenceError>
where
    R: AlignmentReader,
    F: Fn() -> Result<R, AlignmentError> + Sync,
{
    if shards == 0 {
        return Err(EvidenceError::NoShards);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(shards)
        .thread_name(|i| format!("evidence-{i}"))
        .build()?;

    info!(shards, mode = %engine.mode(), "Collecting fragment evidence");

    let partials: Vec<HashMap<String, ContigEvidence>> = pool.install(|| {
        Shard::all(shards)
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|shard| {
                let mut reader = open()?;
                let evidence = engine.evaluate(&mut reader, shard, fragment_counts)?;
                debug!(shard = %shard, contigs = evidence.len(), "Shard finished");
                Ok::<_, AlignmentError>(evidence)
            })
            .collect::<Result<Vec<_>, AlignmentError>>()
    })?;

    let merged = merge_evidence(partials);
    info!(contigs = merged.len(), "Fragment evidence collected");
    Ok(merged)
}
