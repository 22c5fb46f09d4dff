use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How much of the scoring pipeline a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// All four sub-scores, assembly aggregation, cutoff search and weighted score.
    /// Read pairs count twice toward the good total.
    #[default]
    Full,
    /// Only the nucleotide and coverage sub-scores; no assembly-level aggregation.
    /// Read pairs count once toward the good total.
    Light,
}

impl ScoringMode {
    #[must_use]
    pub fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Default number of evidence shards evaluated in parallel
pub const DEFAULT_THREADS: usize = 1;

/// Settings shared by the evidence and scoring engines for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Full or lightweight scoring
    #[serde(default)]
    pub mode: ScoringMode,

    /// Total reads used as the denominator of the read-support fraction
    #[serde(default)]
    pub read_count: u64,

    /// Number of strided shards the evidence engine splits contigs into
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Destination of the cutoff/score table produced by the cutoff search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_report: Option<PathBuf>,
}

fn default_threads() -> usize {
    DEFAULT_THREADS
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            read_count: 0,
            threads: DEFAULT_THREADS,
            cutoff_report: None,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn with_mode(mut self, mode: ScoringMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_read_count(mut self, read_count: u64) -> Self {
        self.read_count = read_count;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub fn with_cutoff_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.cutoff_report = Some(path.into());
        self
    }
}

/// One worker's strided slice of the contig universe.
///
/// Worker `index` of `count` owns every `count`-th contig starting at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shard {
    pub index: usize,
    pub count: usize,
}

impl Shard {
    /// A shard covering every contig
    #[must_use]
    pub fn whole() -> Self {
        Self { index: 0, count: 1 }
    }

    #[must_use]
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    /// Select the items owned by this shard, preserving their order. A shard whose
    /// index is not below its count owns nothing.
    #[must_use]
    pub fn select<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.index >= self.count {
            return Vec::new();
        }
        items.iter().skip(self.index).step_by(self.count).collect()
    }

    /// All shards of a `count`-way split
    pub fn all(count: usize) -> impl Iterator<Item = Self> {
        (0..count).map(move |index| Self { index, count })
    }
}

impl std::fmt::Display for Shard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.index, self.count)
    }
}
