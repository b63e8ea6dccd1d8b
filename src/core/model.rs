#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BaseCounts {
    pub a: u64,
    pub c: u64,
    pub g: u64,
    pub t: u64,
    pub n: u64,
}

impl BaseCounts {
    pub fn add_assign(&mut self, other: &BaseCounts) {
        self.a += other.a;
        self.c += other.c;
        self.g += other.g;
        self.t += other.t;
        self.n += other.n;
    }

    pub fn gc(&self) -> u64 {
        self.g + self.c
    }

    /// A+C+G+T, the denominator of the GC rate.
    pub fn acgt(&self) -> u64 {
        self.a + self.c + self.g + self.t
    }
}

/// Result of analyzing one scaffold.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequenceStats {
    pub length: u64,
    pub bases: BaseCounts,
    pub contig_lengths: Vec<u64>,
}

/// Number of consecutive `N`s that marks a scaffolding gap.
pub const GAP_RUN: usize = 10;

/// Scaffold length cutoffs for the size-bucket metrics.
pub const SIZE_BUCKETS: [u64; 3] = [1_000, 2_000, 3_000];
