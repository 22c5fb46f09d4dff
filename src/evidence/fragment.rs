use std::collections::HashMap;

use crate::core::alignment::AlignmentRecord;

/// A mated pair on one contig: the forward-strand and reverse-strand alignments
/// of a single query, as `(start, end)` intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub forward: (i64, i64),
    pub reverse: (i64, i64),
}

impl Fragment {
    /// Distance from the leftmost start to the rightmost end of the pair
    #[must_use]
    pub fn span(&self) -> i64 {
        let (pos1, end1) = self.forward;
        let (pos2, end2) = self.reverse;
        end1.max(end2) - pos1.min(pos2)
    }

    /// Both starts are non-negative and both ends lie past their starts
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let (pos1, end1) = self.forward;
        let (pos2, end2) = self.reverse;
        pos1 >= 0 && pos2 >= 0 && end1 > pos1 && end2 > pos2
    }

    /// Span of a valid fragment with positive extent, usable as a distance sample
    #[must_use]
    pub fn sample_span(&self) -> Option<i64> {
        if !self.is_valid() {
            return None;
        }
        let span = self.span();
        (span > 0).then_some(span)
    }
}

#[derive(Debug, Default)]
struct MateSlots {
    forward: Option<(i64, i64)>,
    reverse: Option<(i64, i64)>,
}

/// Fragments of one contig, keyed by query name
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    fragments: HashMap<String, Fragment>,
}

impl FragmentSet {
    /// Pair up the records fetched for one contig.
    ///
    /// Unmapped records, records without coordinates and records whose mapped mate
    /// lies on another contig are dropped. A query forms a fragment only when both a
    /// forward and a reverse record remain; a later record on the same strand
    /// replaces an earlier one.
    #[must_use]
    pub fn from_records(records: &[AlignmentRecord]) -> Self {
        let mut slots: HashMap<&str, MateSlots> = HashMap::new();

        for record in records {
            if record.is_unmapped || record.is_inter_contig() {
                continue;
            }
            let Some(interval) = record.interval() else {
                continue;
            };

            let slot = slots.entry(record.name.as_str()).or_default();
            if record.is_reverse {
                slot.reverse = Some(interval);
            } else {
                slot.forward = Some(interval);
            }
        }

        let fragments = slots
            .into_iter()
            .filter_map(|(name, slot)| match (slot.forward, slot.reverse) {
                (Some(forward), Some(reverse)) => {
                    Some((name.to_string(), Fragment { forward, reverse }))
                }
                _ => None,
            })
            .collect();

        Self { fragments }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fragment)> {
        self.fragments.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Spans of all fragments eligible for the distance sample
    #[must_use]
    pub fn sample_spans(&self) -> Vec<i64> {
        self.fragments
            .values()
            .filter_map(Fragment::sample_span)
            .collect()
    }
}
