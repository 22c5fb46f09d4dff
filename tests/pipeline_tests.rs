//! Evidence collection through to assembly scoring, using in-memory alignments

use std::collections::HashMap;

use contig_score::scoring::report::write_cutoff_report;
use contig_score::{
    evaluate_parallel, AlignmentRecord, ContigAttributes, ContigScoreEngine, ContigTable,
    FragmentEvidenceEngine, InMemoryReader, RunConfig, ScoringMode,
};

fn add_pair(reader: &mut InMemoryReader, contig: usize, name: &str, start: i64, span: i64) {
    reader
        .push(AlignmentRecord::new(name, contig, start, start + 50))
        .unwrap();
    reader
        .push(
            AlignmentRecord::new(name, contig, start + span - 50, start + span)
                .reverse()
                .second_mate(),
        )
        .unwrap();
}

/// ctg1: four concordant pairs and one 5 kb outlier; ctg2: two concordant pairs;
/// ctg3: no reads
fn assembly_reads() -> InMemoryReader {
    let mut reader = InMemoryReader::new(vec![
        "ctg1".to_string(),
        "ctg2".to_string(),
        "ctg3".to_string(),
    ]);
    for (i, span) in [200, 210, 190, 205, 5000].into_iter().enumerate() {
        add_pair(&mut reader, 0, &format!("ctg1_r{i}"), 1000 * i64::try_from(i).unwrap(), span);
    }
    for i in 0..2 {
        add_pair(&mut reader, 1, &format!("ctg2_r{i}"), 500 * i, 200);
    }
    reader
}

fn assembly_table() -> ContigTable {
    ContigTable::new(vec![
        ContigAttributes::new("ctg1")
            .with_fractions(0.99, 0.9, 0.0, 1.0)
            .with_tpm(20.0)
            .with_fragments(10),
        ContigAttributes::new("ctg2")
            .with_fractions(0.95, 0.8, 0.0, 0.9)
            .with_tpm(5.0)
            .with_fragments(4),
        ContigAttributes::new("ctg3")
            .with_fractions(0.5, 0.1, 0.0, 0.5)
            .with_tpm(1.0),
    ])
}

fn collect(shards: usize, mode: ScoringMode) -> HashMap<String, contig_score::ContigEvidence> {
    let reader = assembly_reads();
    let counts = assembly_table().fragment_counts();
    evaluate_parallel(
        FragmentEvidenceEngine::new(mode),
        || Ok(reader.clone()),
        shards,
        &counts,
    )
    .unwrap()
}

#[test]
fn test_full_mode_evidence() {
    let evidence = collect(1, ScoringMode::Full);

    assert_eq!(evidence.len(), 3);
    assert_eq!(evidence["ctg1"].good, 8);
    assert!((evidence["ctg1"].p_good - 0.8).abs() < 1e-12);
    assert_eq!(evidence["ctg2"].good, 4);
    assert!((evidence["ctg2"].p_good - 1.0).abs() < 1e-12);
    assert_eq!(evidence["ctg3"].good, 0);
    assert!(evidence["ctg3"].p_good.abs() < f64::EPSILON);
}

#[test]
fn test_light_mode_evidence() {
    let evidence = collect(1, ScoringMode::Light);

    assert_eq!(evidence["ctg1"].good, 4);
    assert!((evidence["ctg1"].p_good - 0.4).abs() < 1e-12);
    assert_eq!(evidence["ctg2"].good, 2);
}

#[test]
fn test_sharded_evidence_matches_single_shard() {
    // Shard 0 holds ctg1 and ctg3, shard 1 holds ctg2; both thresholds still
    // separate the outlier from the concordant pairs
    assert_eq!(collect(2, ScoringMode::Full), collect(1, ScoringMode::Full));
    assert_eq!(collect(3, ScoringMode::Full).len(), 3);
}

#[test]
fn test_evidence_then_scoring() {
    let mut table = assembly_table();
    let updated = table.apply_evidence(&collect(2, ScoringMode::Full));
    assert_eq!(updated, 3);
    assert_eq!(table.good_total(), 12);

    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("cutoffs.csv");
    let config = RunConfig::default()
        .with_read_count(24)
        .with_cutoff_report(&report);
    let result = ContigScoreEngine::new(config).run(&table).unwrap();

    // ctg3 has no evidence, its order sub-score sits at the floor
    let ctg3 = result.contig("ctg3").unwrap();
    assert!((ctg3.s_ord - 0.01).abs() < 1e-12);

    let ctg1 = result.contig("ctg1").unwrap();
    assert!((ctg1.score - 0.99 * 0.9 * 0.8).abs() < 1e-12);

    // Dropping ctg3 loses no good reads, so the optimal cutoff is its score
    assert!((result.assembly.optimal_score - ctg3.score).abs() < 1e-12);
    assert!(result.assembly.cutoff > result.assembly.score);

    let text = std::fs::read_to_string(&report).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("cutoff,score\n"));
}

#[test]
fn test_report_sink_matches_run_output() {
    let mut table = assembly_table();
    table.apply_evidence(&collect(1, ScoringMode::Full));

    let result = ContigScoreEngine::new(RunConfig::default().with_read_count(24)).score(&table);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cutoffs.csv");
    write_cutoff_report(&path, &result.cutoffs).unwrap();

    let rows = std::fs::read_to_string(&path).unwrap().lines().count() - 1;
    assert_eq!(rows, result.cutoffs.len());
}
