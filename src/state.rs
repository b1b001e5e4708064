//! A point in an R^n space: a fixed-length vector of real coordinates.
//!
//! States are allocated through a space acting as a factory
//! ([`alloc_state`](crate::space::StateSpace::alloc_state)) so that their
//! length always matches the space's dimension at allocation time, and are
//! returned through [`free_state`](crate::space::StateSpace::free_state).
//! A state never resizes after allocation.
//!
//! # Coordinate access
//!
//! Two accessors are provided, per-use-site:
//!
//! - `state[i]` via [`Index`]/[`IndexMut`] — the fast path for planner inner
//!   loops. No range signalling; `i < state.len()` is a caller precondition.
//! - [`coord`](RealVectorState::coord) / [`coord_mut`](RealVectorState::coord_mut)
//!   — checked variants returning `None` out of range, for configuration and
//!   diagnostic code where the index is not structurally guaranteed.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// One configuration in an R^n state space.
///
/// The coordinate count is fixed at allocation and must equal the owning
/// space's dimension for every geometric operation applied to it. Ownership
/// is single-owner: one search-tree node (or equivalent) holds a state at a
/// time, and geometric operations on two distinct states are independent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealVectorState {
    values: Vec<f64>,
}

impl RealVectorState {
    /// Zero-filled state of `dim` coordinates. Crate-private: states come
    /// from a space's `alloc_state`, never from ad-hoc construction.
    pub(crate) fn zeroed(dim: usize) -> Self {
        Self { values: vec![0.0; dim] }
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` for a zero-dimensional state.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checked coordinate read: `None` if `i` is out of range.
    pub fn coord(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// Checked coordinate write access: `None` if `i` is out of range.
    pub fn coord_mut(&mut self, i: usize) -> Option<&mut f64> {
        self.values.get_mut(i)
    }

    /// All coordinates as a slice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// All coordinates as a mutable slice.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

impl Index<usize> for RealVectorState {
    type Output = f64;

    /// Unchecked-in-spirit fast access: panics in range violation rather
    /// than returning a signal. `i < self.len()` is a caller precondition.
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl IndexMut<usize> for RealVectorState {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.values[i]
    }
}
