use crate::core::model::{BaseCounts, SequenceStats};

/// Genome-wide totals and length distributions, in insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Agg {
    pub genome_size: u64,
    pub scaffold_lengths: Vec<u64>,
    pub contig_lengths: Vec<u64>,
    pub bases: BaseCounts,
}

impl Agg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, stats: &SequenceStats) {
        self.genome_size += stats.length;
        self.scaffold_lengths.push(stats.length);
        self.contig_lengths.extend_from_slice(&stats.contig_lengths);
        self.bases.add_assign(&stats.bases);
    }

    pub fn scaffold_count(&self) -> usize {
        self.scaffold_lengths.len()
    }
}

impl<'a> FromIterator<&'a SequenceStats> for Agg {
    fn from_iter<I: IntoIterator<Item = &'a SequenceStats>>(iter: I) -> Self {
        let mut agg = Agg::new();
        for stats in iter {
            agg.update(stats);
        }
        agg
    }
}

/// Copy of `lengths` in non-increasing order.
pub fn sorted_desc(lengths: &[u64]) -> Vec<u64> {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}
