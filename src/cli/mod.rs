//! Command-line interface for contig-score.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **evidence**: Count good fragments per contig from an indexed BAM file
//! - **score**: Score contigs and the assembly from a contig table
//! - **assess**: Collect evidence and run full scoring in one pass
//!
//! ## Usage
//!
//! ```text
//! # Fill the good/pGood columns of a contig table
//! contig-score evidence reads.bam contigs.csv --threads 8 -o contigs.evidence.csv
//!
//! # Score the assembly and write the cutoff table
//! contig-score score contigs.evidence.csv --read-count 1000000 --cutoff-report cutoffs.csv
//!
//! # Both steps at once, JSON output for scripting
//! contig-score assess reads.bam contigs.csv --read-count 1000000 --format json
//! ```

use clap::{Parser, Subcommand};

use crate::core::types::ScoringMode;

pub mod assess;
pub mod evidence;
pub mod score;

#[derive(Parser)]
#[command(name = "contig-score")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Score assembled contigs from paired-end alignment evidence")]
#[command(
    long_about = "contig-score rates a de novo assembly using reads mapped back onto its contigs.\n\nFor each contig it combines:\n- Nucleotide identity and coverage breadth\n- The fraction of read pairs placed with a plausible fragment length\n- The probability that the contig is not segmented\n\nContig scores are aggregated into an assembly score scaled by read support, and an optimal exclusion cutoff is reported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count good fragments per contig from an indexed BAM file
    Evidence(evidence::EvidenceArgs),

    /// Score contigs and the assembly from a contig table
    Score(score::ScoreArgs),

    /// Collect fragment evidence and score the assembly
    Assess(assess::AssessArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Scoring mode as accepted on the command line
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ModeArg {
    #[default]
    Full,
    Light,
}

impl From<ModeArg> for ScoringMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Full => ScoringMode::Full,
            ModeArg::Light => ScoringMode::Light,
        }
    }
}
