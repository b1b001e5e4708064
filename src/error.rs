//! Configuration and index errors for state-space setup.
//!
//! Only the configuration surface is fallible: replacing bounds and naming
//! dimensions. Geometric operations on the hot path (distance, interpolation,
//! bounds enforcement) are infallible with documented preconditions instead —
//! planners call them millions of times per query and must not pay for
//! per-call validation.

/// Error raised by fallible configuration operations on a state space.
///
/// Failed operations leave the space unchanged: a rejected
/// [`set_bounds`](crate::space::RealVectorStateSpace::set_bounds) keeps the
/// prior bounds, a rejected
/// [`set_dimension_name`](crate::space::RealVectorStateSpace::set_dimension_name)
/// keeps the prior name table.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpaceError {
    /// A bounds object of the wrong length was supplied to a space.
    #[error("bounds cover {got} dimensions but the space has {expected}")]
    BoundsDimensionMismatch {
        /// The space's current dimension.
        expected: usize,
        /// The length of the rejected bounds.
        got: usize,
    },

    /// A bounds object has `low > high` in some dimension.
    #[error("bounds inverted at dimension {index}: low {low} > high {high}")]
    InvertedBounds {
        /// First offending dimension.
        index: usize,
        /// Lower bound at that dimension.
        low: f64,
        /// Upper bound at that dimension.
        high: f64,
    },

    /// A dimension index outside `[0, dimension)` was supplied.
    #[error("dimension index {index} out of range for space of dimension {dimension}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The space's current dimension.
        dimension: usize,
    },
}
