//! Projection seam for visualization tooling.
//!
//! Projections map a state to a lower-dimensional view for plotting and
//! debugging. The registry itself lives outside this crate; this module only
//! defines the coordinate-subset projection a real-vector space registers by
//! default and the one registry capability it needs to do so.

extern crate alloc;

use alloc::vec::Vec;

use crate::state::RealVectorState;

/// A projection selecting a subset of a state's coordinates, in order.
///
/// The identity projection (all coordinates) is what a real-vector space
/// registers as its default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinateProjection {
    indices: Vec<usize>,
}

impl CoordinateProjection {
    /// Projection onto the listed coordinates, in the listed order.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// The identity projection over a `dim`-dimensional space.
    pub fn identity(dim: usize) -> Self {
        Self { indices: (0..dim).collect() }
    }

    /// Output dimension of the projection.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// `true` when the projection selects no coordinates.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The selected coordinate indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Project `state` onto the selected coordinates.
    ///
    /// Precondition: every selected index is within `state`'s length.
    pub fn project(&self, state: &RealVectorState) -> Vec<f64> {
        self.indices.iter().map(|&i| state[i]).collect()
    }
}

/// The registration capability a space needs from an external projection
/// registry. The registry's full contract (lookup, naming, cell sizes) is
/// defined by the visualization layer, not here.
pub trait ProjectionRegistry {
    /// Install `projection` as the default projection for the registering
    /// space.
    fn register_default(&mut self, projection: CoordinateProjection);
}
