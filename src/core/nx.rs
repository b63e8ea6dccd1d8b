use crate::core::error::{Result, StatsError};

/// Length at which the running sum of `lengths_desc` first reaches `x`% of
/// `genome_size`.
///
/// `lengths_desc` must be in non-increasing order. `genome_size` is the whole
/// assembly size even for contig distributions, so contig Nx can be
/// undefined when gaps make up a large share of the assembly.
pub fn nx(lengths_desc: &[u64], x: u8, genome_size: u64) -> Result<u64> {
    if x == 0 || x > 100 {
        return Err(StatsError::InvalidPercentage(x));
    }
    debug_assert!(lengths_desc.windows(2).all(|w| w[0] >= w[1]));

    // cumulative >= genome_size * x / 100, kept exact in integers
    let target = genome_size as u128 * x as u128;
    let mut cumulative: u128 = 0;
    for &len in lengths_desc {
        cumulative += len as u128;
        if cumulative * 100 >= target {
            return Ok(len);
        }
    }
    Err(StatsError::UndefinedStatistic {
        x,
        len: lengths_desc.len(),
    })
}
