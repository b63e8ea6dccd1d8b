use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("malformed FASTA input at line {line}: {msg}")]
    MalformedInput { line: usize, msg: String },

    #[error("cannot read input {}: {source}", .path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No length in the distribution reaches `x`% of the genome size.
    #[error("N{x} is undefined for a distribution of {len} lengths")]
    UndefinedStatistic { x: u8, len: usize },

    #[error("Nx percentage must be within 1..=100, got {0}")]
    InvalidPercentage(u8),

    #[error("failed to start analysis worker: {0}")]
    WorkerPool(#[source] io::Error),

    #[error("analysis worker panicked")]
    WorkerPanicked,
}

impl StatsError {
    /// Input-side failures: the run cannot start and no report is written.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            StatsError::MalformedInput { .. } | StatsError::UnreadableInput { .. }
        )
    }
}
