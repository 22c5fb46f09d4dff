use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Assembly-level scores
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AssemblyScore {
    /// Harmonic mean of contig scores scaled by read support
    pub score: f64,

    /// Contig score at which excluding lower-scoring contigs maximizes the assembly score
    #[serde(rename = "optimalScore")]
    pub optimal_score: f64,

    /// Assembly score reached when excluding contigs at or below `optimal_score`
    pub cutoff: f64,

    /// Abundance-weighted mean contig score scaled by read support
    pub weighted: f64,
}

/// Combined score and sub-scores of one contig
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContigScore {
    pub score: f64,

    /// Nucleotide identity sub-score
    #[serde(rename = "sCnuc")]
    pub s_nuc: f64,

    /// Coverage breadth sub-score
    #[serde(rename = "sCcov")]
    pub s_cov: f64,

    /// Fragment order consistency sub-score
    #[serde(rename = "sCord")]
    pub s_ord: f64,

    /// Non-segmentation sub-score
    #[serde(rename = "sCseg")]
    pub s_seg: f64,
}

/// One row of the cutoff search: the assembly score left after excluding every
/// contig scoring at or below `cutoff`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutoffPoint {
    pub cutoff: f64,
    pub score: f64,
}

/// Output of one scoring run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    pub assembly: AssemblyScore,

    /// Per-contig scores keyed by contig name
    pub contigs: BTreeMap<String, ContigScore>,

    /// Full cutoff search table in ascending cutoff order (full mode only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cutoffs: Vec<CutoffPoint>,
}

impl ScoreResult {
    /// A zeroed result with one entry per contig name
    pub fn for_contigs<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            assembly: AssemblyScore::default(),
            contigs: names
                .into_iter()
                .map(|n| (n.to_string(), ContigScore::default()))
                .collect(),
            cutoffs: Vec::new(),
        }
    }

    #[must_use]
    pub fn contig(&self, name: &str) -> Option<&ContigScore> {
        self.contigs.get(name)
    }
}
