//! Score command - score contigs and the assembly from a contig table.
//!
//! The table must already carry the evidence columns (`good`, `pGood`), either from
//! the `evidence` command or an external tool.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{ModeArg, OutputFormat};
use crate::core::types::RunConfig;
use crate::parsing::table::parse_table_file;
use crate::scoring::{ContigScoreEngine, ScoreResult};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Contig table (CSV or TSV)
    #[arg(required = true)]
    pub contigs: PathBuf,

    /// Total number of reads, the denominator of read support.
    /// With 0 the assembly score is left unscaled and the weighted score is 0.
    #[arg(short, long, default_value_t = 0)]
    pub read_count: u64,

    /// Scoring mode; light mode only fills the nucleotide and coverage sub-scores
    #[arg(short, long, value_enum, default_value_t = ModeArg::Full)]
    pub mode: ModeArg,

    /// Write the cutoff search table (CSV) here (full mode only)
    #[arg(long)]
    pub cutoff_report: Option<PathBuf>,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if the table cannot be read or the cutoff report cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut config = RunConfig::default()
        .with_mode(args.mode.into())
        .with_read_count(args.read_count);
    if let Some(path) = &args.cutoff_report {
        config = config.with_cutoff_report(path);
    }

    let table = parse_table_file(&args.contigs)
        .with_context(|| format!("Failed to read contig table {}", args.contigs.display()))?;
    if verbose {
        eprintln!(
            "Contig table: {} contigs, {} good fragments, {} reads",
            table.len(),
            table.good_total(),
            args.read_count
        );
    }

    let result = ContigScoreEngine::new(config.clone()).run(&table)?;
    print_result(&result, &config, format)
}

/// Render a scoring result in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_result(
    result: &ScoreResult,
    config: &RunConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text(result, config),
        OutputFormat::Json => print_json(result, config)?,
        OutputFormat::Tsv => print_tsv(result),
    }
    Ok(())
}

fn print_text(result: &ScoreResult, config: &RunConfig) {
    println!("\nScoring ({} mode): {} contigs", config.mode, result.contigs.len());

    if config.mode.is_full() {
        let assembly = &result.assembly;
        println!("\n   Assembly score: {:.4}", assembly.score);
        println!(
            "   Optimal cutoff: {:.4} (assembly score {:.4} after exclusion)",
            assembly.optimal_score, assembly.cutoff
        );
        println!("   Weighted score: {:.4}", assembly.weighted);
        if let Some(path) = &config.cutoff_report {
            println!("   Cutoff report: {}", path.display());
        }
    }

    let width = result.contigs.keys().map(String::len).max().unwrap_or(4).max(4);
    println!(
        "\n   {:<width$}  {:>7}  {:>7}  {:>7}  {:>7}  {:>7}",
        "name", "score", "sCnuc", "sCcov", "sCord", "sCseg"
    );
    for (name, contig) in &result.contigs {
        println!(
            "   {name:<width$}  {:>7.4}  {:>7.4}  {:>7.4}  {:>7.4}  {:>7.4}",
            contig.score, contig.s_nuc, contig.s_cov, contig.s_ord, contig.s_seg
        );
    }
}

fn print_json(result: &ScoreResult, config: &RunConfig) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "mode": config.mode,
        "read_count": config.read_count,
        "assembly": result.assembly,
        "contigs": result.contigs,
        "cutoffs": result.cutoffs,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(result: &ScoreResult) {
    println!("name\tscore\tsCnuc\tsCcov\tsCord\tsCseg");
    for (name, contig) in &result.contigs {
        println!(
            "{name}\t{}\t{}\t{}\t{}\t{}",
            contig.score, contig.s_nuc, contig.s_cov, contig.s_ord, contig.s_seg
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_table(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "{text}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_run_writes_cutoff_report() {
        let file = create_temp_table(
            "name,good,pSeqTrue,pBasesCovered,pGood,pNotSegmented,tpm\n\
             a,10,0.9,1.0,1.0,1.0,1.0\n\
             b,2,0.5,1.0,1.0,1.0,1.0\n\
             c,8,0.95,1.0,1.0,1.0,1.0\n",
        );
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("cutoffs.csv");

        let args = ScoreArgs {
            contigs: file.path().to_path_buf(),
            read_count: 25,
            mode: ModeArg::Full,
            cutoff_report: Some(report.clone()),
        };
        run(args, OutputFormat::Tsv, false).unwrap();

        let text = std::fs::read_to_string(&report).unwrap();
        assert!(text.starts_with("cutoff,score\n0.5,"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_run_missing_table() {
        let args = ScoreArgs {
            contigs: PathBuf::from("/nonexistent/contigs.csv"),
            read_count: 10,
            mode: ModeArg::Full,
            cutoff_report: None,
        };
        let err = run(args, OutputFormat::Text, false).unwrap_err();
        assert!(err.to_string().contains("contigs.csv"));
    }
}
