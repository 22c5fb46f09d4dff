//! Assess command - collect fragment evidence and score the assembly in one run.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::evidence::collect;
use crate::cli::score::print_result;
use crate::cli::OutputFormat;
use crate::core::types::{RunConfig, ScoringMode, DEFAULT_THREADS};
use crate::parsing::table::{parse_table_file, write_table_file};
use crate::scoring::ContigScoreEngine;

/// Arguments for the assess command
#[derive(Args)]
pub struct AssessArgs {
    /// Coordinate-sorted BAM file with a .bai index
    #[arg(required = true)]
    pub bam: PathBuf,

    /// Contig table (CSV or TSV)
    #[arg(required = true)]
    pub contigs: PathBuf,

    /// Total number of reads, the denominator of read support
    #[arg(short, long, default_value_t = 0)]
    pub read_count: u64,

    /// Number of strided shards evaluated in parallel
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Write the cutoff search table (CSV) here
    #[arg(long)]
    pub cutoff_report: Option<PathBuf>,

    /// Also write the contig table with evidence columns filled
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the assess command
///
/// # Errors
///
/// Returns an error if the inputs cannot be read, evidence collection fails, or an
/// output file cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: AssessArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut config = RunConfig::default()
        .with_mode(ScoringMode::Full)
        .with_read_count(args.read_count)
        .with_threads(args.threads);
    if let Some(path) = &args.cutoff_report {
        config = config.with_cutoff_report(path);
    }

    let mut table = parse_table_file(&args.contigs)
        .with_context(|| format!("Failed to read contig table {}", args.contigs.display()))?;

    let evidence = collect(&args.bam, &table, &config)?;
    let updated = table.apply_evidence(&evidence);
    if verbose {
        eprintln!(
            "Evidence: {updated} of {} contigs updated, {} good fragments",
            table.len(),
            table.good_total()
        );
    }

    if let Some(output) = &args.output {
        write_table_file(output, &table)
            .with_context(|| format!("Failed to write contig table {}", output.display()))?;
    }

    let result = ContigScoreEngine::new(config.clone()).run(&table)?;
    print_result(&result, &config, format)
}
