use crate::core::metrics::{Agg, sorted_desc};
use crate::core::model::SIZE_BUCKETS;
use crate::core::nx::nx;
use std::fmt;

/// One value of the report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    Count(u64),
    Rate(f64),
    /// Nx length; `None` when no length reaches the target.
    Length(Option<u64>),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Count(v) => write!(f, "{}", v),
            Metric::Rate(v) if *v != 0.0 && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Metric::Rate(v) => write!(f, "{}", v),
            Metric::Length(Some(v)) => write!(f, "{}", v),
            Metric::Length(None) => f.write_str("NA"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SizeBucket {
    pub sequences: u64,
    pub total_length: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub genome_size: u64,
    pub scaffold_count: u64,
    pub longest_scaffold: u64,
    pub shortest_scaffold: u64,
    pub rate_of_n: f64,
    pub rate_of_gc: f64,
    pub scaffold_n50: Option<u64>,
    pub scaffold_n90: Option<u64>,
    pub contig_n50: Option<u64>,
    pub contig_n90: Option<u64>,
    pub buckets: [SizeBucket; 3],
}

impl Summary {
    pub fn build(agg: &Agg) -> Self {
        let scaffolds = sorted_desc(&agg.scaffold_lengths);
        let contigs = sorted_desc(&agg.contig_lengths);
        let genome_size = agg.genome_size;

        let rate_of_n = ratio(agg.bases.n, genome_size);
        let rate_of_gc = ratio(agg.bases.gc(), agg.bases.acgt());

        let buckets = SIZE_BUCKETS.map(|min_len| {
            let mut bucket = SizeBucket::default();
            for &len in scaffolds.iter().take_while(|&&len| len >= min_len) {
                bucket.sequences += 1;
                bucket.total_length += len;
            }
            bucket
        });

        Self {
            genome_size,
            scaffold_count: scaffolds.len() as u64,
            longest_scaffold: scaffolds.first().copied().unwrap_or(0),
            shortest_scaffold: scaffolds.last().copied().unwrap_or(0),
            rate_of_n,
            rate_of_gc,
            scaffold_n50: nx(&scaffolds, 50, genome_size).ok(),
            scaffold_n90: nx(&scaffolds, 90, genome_size).ok(),
            contig_n50: nx(&contigs, 50, genome_size).ok(),
            contig_n90: nx(&contigs, 90, genome_size).ok(),
            buckets,
        }
    }

    /// Metrics in report order.
    pub fn entries(&self) -> Vec<(&'static str, Metric)> {
        let [kb1, kb2, kb3] = self.buckets;
        vec![
            ("genome_size", Metric::Count(self.genome_size)),
            ("scaffold_count", Metric::Count(self.scaffold_count)),
            ("longest_scaffold", Metric::Count(self.longest_scaffold)),
            ("shortest_scaffold", Metric::Count(self.shortest_scaffold)),
            ("rate_of_N", Metric::Rate(self.rate_of_n)),
            ("rate_of_GC", Metric::Rate(self.rate_of_gc)),
            ("scaffold_N50", Metric::Length(self.scaffold_n50)),
            ("scaffold_N90", Metric::Length(self.scaffold_n90)),
            ("contig_N50", Metric::Length(self.contig_n50)),
            ("contig_N90", Metric::Length(self.contig_n90)),
            ("sequences_1kb", Metric::Count(kb1.sequences)),
            ("total_length_1kb", Metric::Count(kb1.total_length)),
            ("sequences_2kb", Metric::Count(kb2.sequences)),
            ("total_length_2kb", Metric::Count(kb2.total_length)),
            ("sequences_3kb", Metric::Count(kb3.sequences)),
            ("total_length_3kb", Metric::Count(kb3.total_length)),
        ]
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
