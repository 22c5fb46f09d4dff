//! Evidence command - count good fragments per contig from an indexed BAM file.
//!
//! The contig table supplies the fragment count of each contig, used as the
//! denominator of `pGood`. The table is written back with `good` and `pGood` filled.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::{ModeArg, OutputFormat};
use crate::core::contig::ContigTable;
use crate::core::types::{RunConfig, DEFAULT_THREADS};
use crate::evidence::{evaluate_parallel, ContigEvidence, FragmentEvidenceEngine};
use crate::parsing::bam::BamReader;
use crate::parsing::table::{parse_table_file, write_table_file};

/// Arguments for the evidence command
#[derive(Args)]
pub struct EvidenceArgs {
    /// Coordinate-sorted BAM file with a .bai index
    #[arg(required = true)]
    pub bam: PathBuf,

    /// Contig table (CSV or TSV) with a `name` column and optional `fragments`
    #[arg(required = true)]
    pub contigs: PathBuf,

    /// Number of strided shards evaluated in parallel
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Scoring mode; full mode counts each good pair twice
    #[arg(short, long, value_enum, default_value_t = ModeArg::Full)]
    pub mode: ModeArg,

    /// Write the updated contig table here instead of printing evidence
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the evidence command
///
/// # Errors
///
/// Returns an error if the inputs cannot be read, evidence collection fails, or the
/// updated table cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: EvidenceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = RunConfig::default()
        .with_mode(args.mode.into())
        .with_threads(args.threads);

    let mut table = parse_table_file(&args.contigs)
        .with_context(|| format!("Failed to read contig table {}", args.contigs.display()))?;
    if verbose {
        eprintln!(
            "Contig table: {} contigs ({} with fragment counts)",
            table.len(),
            table.fragment_counts().len()
        );
    }

    let evidence = collect(&args.bam, &table, &config)?;
    let updated = table.apply_evidence(&evidence);
    if verbose {
        eprintln!(
            "Evidence: {} contigs in BAM, {updated} table rows updated",
            evidence.len()
        );
    }

    if let Some(output) = &args.output {
        write_table_file(output, &table)
            .with_context(|| format!("Failed to write contig table {}", output.display()))?;
        if verbose {
            eprintln!("Wrote {}", output.display());
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text(&evidence),
        OutputFormat::Json => print_json(&evidence)?,
        OutputFormat::Tsv => print_tsv(&evidence),
    }

    Ok(())
}

/// Run the evidence engine over `bam` using the fragment counts of `table`
pub(crate) fn collect(
    bam: &Path,
    table: &ContigTable,
    config: &RunConfig,
) -> anyhow::Result<HashMap<String, ContigEvidence>> {
    let engine = FragmentEvidenceEngine::new(config.mode);
    let counts = table.fragment_counts();

    evaluate_parallel(engine, || BamReader::open(bam), config.threads, &counts)
        .with_context(|| format!("Failed to collect fragment evidence from {}", bam.display()))
}

fn sorted(evidence: &HashMap<String, ContigEvidence>) -> Vec<(&String, &ContigEvidence)> {
    let mut rows: Vec<_> = evidence.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));
    rows
}

fn print_text(evidence: &HashMap<String, ContigEvidence>) {
    let total: u64 = evidence.values().map(|e| e.good).sum();
    println!("\nFragment evidence: {} contigs, {total} good", evidence.len());

    let width = evidence.keys().map(String::len).max().unwrap_or(4).max(4);
    println!("\n   {:<width$}  {:>10}  {:>8}", "name", "good", "pGood");
    for (name, e) in sorted(evidence) {
        println!("   {name:<width$}  {:>10}  {:>8.4}", e.good, e.p_good);
    }
}

fn print_json(evidence: &HashMap<String, ContigEvidence>) -> anyhow::Result<()> {
    let contigs: serde_json::Map<String, serde_json::Value> = sorted(evidence)
        .into_iter()
        .map(|(name, e)| serde_json::to_value(e).map(|value| (name.clone(), value)))
        .collect::<Result<_, serde_json::Error>>()?;

    let output = serde_json::json!({
        "contigs": contigs,
        "good_total": evidence.values().map(|e| e.good).sum::<u64>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(evidence: &HashMap<String, ContigEvidence>) {
    println!("name\tgood\tpGood");
    for (name, e) in sorted(evidence) {
        println!("{name}\t{}\t{}", e.good, e.p_good);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_name() {
        let evidence: HashMap<String, ContigEvidence> = [
            ("ctg2".to_string(), ContigEvidence::default()),
            ("ctg10".to_string(), ContigEvidence::default()),
            ("ctg1".to_string(), ContigEvidence::default()),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = sorted(&evidence).iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ctg1", "ctg10", "ctg2"]);
    }

    #[test]
    fn test_collect_requires_index() {
        let dir = tempfile::tempdir().unwrap();
        let bam = dir.path().join("reads.bam");
        std::fs::write(&bam, b"").unwrap();

        let err = collect(&bam, &ContigTable::default(), &RunConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("No .bai index"));
    }
}
