use crate::core::model::{BaseCounts, GAP_RUN, SequenceStats};
use memchr::memmem;

const GAP: [u8; GAP_RUN] = [b'N'; GAP_RUN];

/// Length, base composition and contig lengths of one scaffold.
pub fn analyze(seq: &[u8]) -> SequenceStats {
    SequenceStats {
        length: seq.len() as u64,
        bases: count_bases(seq),
        contig_lengths: contig_lengths(seq),
    }
}

/// Case-insensitive counts of A, C, G, T and N. Other symbols are skipped.
pub fn count_bases(seq: &[u8]) -> BaseCounts {
    let mut counts = BaseCounts::default();
    for &b in seq {
        match b & 0xDF {
            b'A' => counts.a += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            b'T' => counts.t += 1,
            b'N' => counts.n += 1,
            _ => {}
        }
    }
    counts
}

/// Lengths of the fragments left after removing every maximal run of at
/// least ten `N`s. Empty fragments are dropped.
pub fn contig_lengths(seq: &[u8]) -> Vec<u64> {
    let finder = memmem::Finder::new(&GAP);
    let mut lengths = Vec::new();
    let mut start = 0usize;
    while let Some(offset) = finder.find(&seq[start..]) {
        let gap_start = start + offset;
        if gap_start > start {
            lengths.push((gap_start - start) as u64);
        }
        // the whole run is one gap, not just the ten matched bytes
        let mut gap_end = gap_start + GAP_RUN;
        while gap_end < seq.len() && seq[gap_end] == b'N' {
            gap_end += 1;
        }
        start = gap_end;
    }
    if seq.len() > start {
        lengths.push((seq.len() - start) as u64);
    }
    lengths
}
