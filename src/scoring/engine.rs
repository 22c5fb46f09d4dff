use tracing::{debug, info};

use crate::core::contig::ContigTable;
use crate::core::types::{RunConfig, ScoringMode};
use crate::scoring::aggregate::{assembly_score, weighted_score};
use crate::scoring::contig::{full_contig_score, light_contig_score};
use crate::scoring::cutoff;
use crate::scoring::report::{write_cutoff_report, ReportError};
use crate::scoring::result::ScoreResult;

/// Combines per-contig quality signals into contig and assembly scores
#[derive(Debug, Clone, Default)]
pub struct ContigScoreEngine {
    config: RunConfig,
}

impl ContigScoreEngine {
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Score a contig table and, in full mode, write the cutoff report when the
    /// configuration names a destination
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the cutoff report cannot be written.
    pub fn run(&self, table: &ContigTable) -> Result<ScoreResult, ReportError> {
        let result = self.score(table);

        if self.config.mode.is_full() {
            if let Some(path) = &self.config.cutoff_report {
                write_cutoff_report(path, &result.cutoffs)?;
                info!(path = %path.display(), rows = result.cutoffs.len(), "Wrote cutoff report");
            }
        }

        Ok(result)
    }

    /// Score a contig table without touching the filesystem
    #[must_use]
    pub fn score(&self, table: &ContigTable) -> ScoreResult {
        let mut result = ScoreResult::for_contigs(table.iter().map(|row| row.name.as_str()));

        match self.config.mode {
            ScoringMode::Light => {
                for row in table.iter() {
                    result
                        .contigs
                        .insert(row.name.clone(), light_contig_score(row));
                }
                debug!(contigs = table.len(), "Scored contigs (light)");
            }
            ScoringMode::Full => self.score_full(table, &mut result),
        }

        result
    }

    fn score_full(&self, table: &ContigTable, result: &mut ScoreResult) {
        let read_count = self.config.read_count;
        let good_total = table.good_total();

        let mut scores = Vec::with_capacity(table.len());
        let mut by_good = Vec::with_capacity(table.len());
        let mut by_tpm = Vec::with_capacity(table.len());

        for row in table.iter() {
            let contig = full_contig_score(row);
            scores.push(contig.score);
            by_good.push((contig.score, row.good));
            by_tpm.push((contig.score, row.tpm));
            result.contigs.insert(row.name.clone(), contig);
        }

        result.assembly.score = assembly_score(&scores, good_total, read_count);

        let search = cutoff::search(&by_good, read_count);
        if let Some(optimal) = search.optimal {
            result.assembly.optimal_score = optimal.cutoff;
            result.assembly.cutoff = optimal.score;
        }
        result.cutoffs = search.table;

        result.assembly.weighted = weighted_score(&by_tpm, good_total, read_count);

        info!(
            contigs = table.len(),
            good_total,
            read_count,
            score = result.assembly.score,
            optimal_score = result.assembly.optimal_score,
            weighted = result.assembly.weighted,
            "Scored assembly"
        );
    }
}
