use thiserror::Error;

/// Errors from adding to or drawing out of a weighted collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbabilityError {
    #[error("probability share must be greater than 0, got {probability}")]
    InvalidProbability { probability: u32 },
    #[error("cannot get an element out of an empty collection")]
    EmptyCollection,
    /// The block walk found no block for the draw. Either the random source
    /// returned a value outside `0..total` or the weight accounting drifted.
    #[error("draw {draw} does not fall in any block of total probability {total}")]
    InconsistentDraw { draw: u64, total: u64 },
}
