use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::evidence::ContigEvidence;

/// Per-contig quality attributes, one row of the contig table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContigAttributes {
    /// Contig identifier (reference sequence name in the alignment file)
    pub name: String,

    /// Good read-pair evidence count
    #[serde(default)]
    pub good: u64,

    /// Fraction of nucleotides believed correct
    #[serde(default, rename = "pSeqTrue")]
    pub p_seq_true: f64,

    /// Fraction of bases covered by at least one read
    #[serde(default, rename = "pBasesCovered")]
    pub p_bases_covered: f64,

    /// Fraction of fragments with consistent order and insert size
    #[serde(default, rename = "pGood")]
    pub p_good: f64,

    /// Fraction of the contig not flagged as segmented
    #[serde(default, rename = "pNotSegmented")]
    pub p_not_segmented: f64,

    /// Abundance estimate used to weight the contig
    #[serde(default)]
    pub tpm: f64,

    /// Total fragments aligned to the contig
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragments: Option<u64>,
}

impl ContigAttributes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            good: 0,
            p_seq_true: 0.0,
            p_bases_covered: 0.0,
            p_good: 0.0,
            p_not_segmented: 0.0,
            tpm: 0.0,
            fragments: None,
        }
    }

    #[must_use]
    pub fn with_fractions(
        mut self,
        p_seq_true: f64,
        p_bases_covered: f64,
        p_good: f64,
        p_not_segmented: f64,
    ) -> Self {
        self.p_seq_true = p_seq_true;
        self.p_bases_covered = p_bases_covered;
        self.p_good = p_good;
        self.p_not_segmented = p_not_segmented;
        self
    }

    #[must_use]
    pub fn with_good(mut self, good: u64) -> Self {
        self.good = good;
        self
    }

    #[must_use]
    pub fn with_tpm(mut self, tpm: f64) -> Self {
        self.tpm = tpm;
        self
    }

    #[must_use]
    pub fn with_fragments(mut self, fragments: u64) -> Self {
        self.fragments = Some(fragments);
        self
    }
}

/// The contig attribute table, rows kept in input order with a name index
#[derive(Debug, Clone, Default)]
pub struct ContigTable {
    rows: Vec<ContigAttributes>,
    index: HashMap<String, usize>,
}

impl ContigTable {
    /// Build a table from rows. A later row with a repeated name replaces the earlier one.
    #[must_use]
    pub fn new(rows: Vec<ContigAttributes>) -> Self {
        let mut table = Self::default();
        for row in rows {
            table.upsert(row);
        }
        table
    }

    /// Insert a row, replacing any row with the same name in place
    pub fn upsert(&mut self, row: ContigAttributes) {
        if let Some(&i) = self.index.get(&row.name) {
            self.rows[i] = row;
        } else {
            self.index.insert(row.name.clone(), self.rows.len());
            self.rows.push(row);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ContigAttributes> {
        self.index.get(name).map(|&i| &self.rows[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContigAttributes> {
        self.rows.iter()
    }

    #[must_use]
    pub fn rows(&self) -> &[ContigAttributes] {
        &self.rows
    }

    /// Fragment count denominator for a contig, if the table carries one
    #[must_use]
    pub fn fragments(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(|row| row.fragments)
    }

    /// Fragment counts for every contig that has one
    #[must_use]
    pub fn fragment_counts(&self) -> HashMap<String, u64> {
        self.rows
            .iter()
            .filter_map(|row| row.fragments.map(|f| (row.name.clone(), f)))
            .collect()
    }

    /// Sum of `good` over all rows
    #[must_use]
    pub fn good_total(&self) -> u64 {
        self.rows.iter().map(|row| row.good).sum()
    }

    /// Copy merged evidence into matching rows. Evidence for contigs the table
    /// does not list is ignored; returns the number of rows updated.
    pub fn apply_evidence(&mut self, evidence: &HashMap<String, ContigEvidence>) -> usize {
        let mut updated = 0;
        for row in &mut self.rows {
            if let Some(found) = evidence.get(&row.name) {
                row.good = found.good;
                row.p_good = found.p_good;
                updated += 1;
            }
        }
        updated
    }
}

impl FromIterator<ContigAttributes> for ContigTable {
    fn from_iter<I: IntoIterator<Item = ContigAttributes>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup_and_totals() {
        let table = ContigTable::new(vec![
            ContigAttributes::new("ctg1").with_good(10).with_fragments(12),
            ContigAttributes::new("ctg2").with_good(4),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.good_total(), 14);
        assert_eq!(table.fragments("ctg1"), Some(12));
        assert_eq!(table.fragments("ctg2"), None);
        assert_eq!(table.fragments("missing"), None);
        assert_eq!(table.fragment_counts().len(), 1);
    }

    #[test]
    fn test_repeated_name_replaces_row() {
        let table = ContigTable::new(vec![
            ContigAttributes::new("ctg1").with_good(1),
            ContigAttributes::new("ctg2").with_good(2),
            ContigAttributes::new("ctg1").with_good(3),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].name, "ctg1");
        assert_eq!(table.get("ctg1").unwrap().good, 3);
    }

    #[test]
    fn test_apply_evidence() {
        let mut table = ContigTable::new(vec![
            ContigAttributes::new("ctg1").with_fragments(10),
            ContigAttributes::new("ctg2").with_fragments(5),
        ]);

        let mut evidence = HashMap::new();
        evidence.insert("ctg1".to_string(), ContigEvidence { good: 8, p_good: 0.8 });
        evidence.insert("other".to_string(), ContigEvidence { good: 3, p_good: 1.0 });

        assert_eq!(table.apply_evidence(&evidence), 1);
        assert_eq!(table.get("ctg1").unwrap().good, 8);
        assert!((table.get("ctg1").unwrap().p_good - 0.8).abs() < 1e-12);
        assert_eq!(table.get("ctg2").unwrap().good, 0);
    }
}
