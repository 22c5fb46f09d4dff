use std::collections::HashMap;

use tracing::{debug, warn};

use crate::core::alignment::{AlignmentError, AlignmentReader, AlignmentRecord};
use crate::core::types::{ScoringMode, Shard};
use crate::evidence::fragment::FragmentSet;
use crate::evidence::threshold::span_threshold;
use crate::evidence::ContigEvidence;
use crate::utils::numeric::ratio;

/// Good-fragment contribution of one read pair in full mode (each mate counts)
pub const FULL_MODE_PAIR_WEIGHT: u64 = 2;

/// Good-fragment contribution of one read pair in lightweight mode
pub const LIGHT_MODE_PAIR_WEIGHT: u64 = 1;

/// Classifies the read pairs of a shard of contigs as good or not.
///
/// The concordance threshold is pooled over the shard being evaluated, so two
/// shards of the same assembly may use different thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentEvidenceEngine {
    mode: ScoringMode,
}

impl FragmentEvidenceEngine {
    #[must_use]
    pub fn new(mode: ScoringMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Evaluate the contigs `shard` selects from the reader's reference list
    ///
    /// # Errors
    ///
    /// Returns an `AlignmentError` if the reader fails to fetch a contig.
    pub fn evaluate<R: AlignmentReader>(
        &self,
        reader: &mut R,
        shard: Shard,
        fragment_counts: &HashMap<String, u64>,
    ) -> Result<HashMap<String, ContigEvidence>, AlignmentError> {
        let contigs: Vec<String> = shard
            .select(reader.references())
            .into_iter()
            .cloned()
            .collect();

        debug!(shard = %shard, contigs = contigs.len(), "Evaluating shard");
        self.evaluate_contigs(reader, &contigs, fragment_counts)
    }

    /// Evaluate an explicit set of contigs as one shard.
    ///
    /// Every listed contig appears in the output; contigs without usable fragments
    /// keep zero values. If no contig in the set yields a span sample, every contig
    /// is left at zero.
    ///
    /// # Errors
    ///
    /// Returns an `AlignmentError` if the reader fails to fetch a contig.
    pub fn evaluate_contigs<R: AlignmentReader>(
        &self,
        reader: &mut R,
        contigs: &[String],
        fragment_counts: &HashMap<String, u64>,
    ) -> Result<HashMap<String, ContigEvidence>, AlignmentError> {
        let mut evidence: HashMap<String, ContigEvidence> = contigs
            .iter()
            .map(|c| (c.clone(), ContigEvidence::default()))
            .collect();

        if contigs.is_empty() {
            return Ok(evidence);
        }

        let Some(threshold) = self.pooled_threshold(reader, contigs)? else {
            warn!(
                contigs = contigs.len(),
                "No valid fragment distances in shard, leaving good counts at zero"
            );
            return Ok(evidence);
        };
        debug!(threshold, "Pooled fragment span threshold");

        for contig in contigs {
            let records = reader.fetch(contig)?;
            let fragments = FragmentSet::from_records(&records);

            if fragments.sample_spans().is_empty() {
                continue;
            }

            let good = self.count_good(&records, &fragments, threshold);
            let p_good = match fragment_counts.get(contig) {
                Some(&total) => ratio(good, total),
                None => {
                    warn!(contig = %contig, "No fragment count for contig, pGood set to 0");
                    0.0
                }
            };

            debug!(contig = %contig, fragments = fragments.len(), good, p_good, "Contig evidence");
            evidence.insert(contig.clone(), ContigEvidence { good, p_good });
        }

        Ok(evidence)
    }

    /// Threshold over the span samples of every contig in the set
    ///
    /// # Errors
    ///
    /// Returns an `AlignmentError` if the reader fails to fetch a contig.
    pub fn pooled_threshold<R: AlignmentReader>(
        &self,
        reader: &mut R,
        contigs: &[String],
    ) -> Result<Option<i64>, AlignmentError> {
        let mut spans = Vec::new();
        for contig in contigs {
            let records = reader.fetch(contig)?;
            spans.extend(FragmentSet::from_records(&records).sample_spans());
        }
        Ok(span_threshold(&spans))
    }

    /// Good count of one contig under a threshold
    #[must_use]
    pub fn count_good(
        &self,
        records: &[AlignmentRecord],
        fragments: &FragmentSet,
        threshold: i64,
    ) -> u64 {
        match self.mode {
            ScoringMode::Full => {
                let pairs = records
                    .iter()
                    .filter(|r| r.is_first_mate && !r.is_unmapped && !r.is_mate_unmapped)
                    .filter_map(|r| fragments.get(&r.name))
                    .filter(|f| f.span() <= threshold)
                    .count() as u64;
                pairs * FULL_MODE_PAIR_WEIGHT
            }
            ScoringMode::Light => {
                let pairs = fragments
                    .iter()
                    .filter(|(_, f)| f.span() <= threshold)
                    .count() as u64;
                pairs * LIGHT_MODE_PAIR_WEIGHT
            }
        }
    }
}
