//! Stochastic state generation under a space's bounds.
//!
//! A sampler binds to exactly one space (by reference, non-owning) for its
//! lifetime and carries the only mutable piece of the sampling path: its RNG.
//! Samplers must not be shared unsynchronized across threads — the pattern is
//! one sampler per thread (or task), each bound to the same shared space.
//!
//! # Sampling policies
//!
//! - **Uniform**: per-dimension uniform over `[low, high]`; the result always
//!   satisfies bounds.
//! - **Uniform-near**: per-dimension uniform over `[near-d, near+d]`, then
//!   clamped into bounds. This is an axis-aligned hyper-rectangle
//!   neighborhood, not an exact L2 ball — a deliberate cost/accuracy
//!   tradeoff that avoids rejection sampling; planners relying on it must
//!   tolerate the anisotropic perturbation.
//! - **Gaussian**: per-dimension normal draw around a mean state, then
//!   clamped into bounds. Clamping after the draw biases mass onto the
//!   boundary; that is an accepted, documented approximation of the
//!   truncated normal, not a defect.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::space::{RealVectorStateSpace, StateSpace};
use crate::state::RealVectorState;

/// Capability-set interface of a state sampler, mirroring the sampling
/// surface sibling space kinds expose.
pub trait StateSampler {
    /// The point type produced.
    type State;

    /// Fill `out` with a state drawn uniformly from the space's bounds.
    fn sample_uniform(&mut self, out: &mut Self::State);

    /// Fill `out` with a state drawn uniformly from the axis-aligned box of
    /// half-width `distance` around `near`, clamped into bounds.
    fn sample_uniform_near(&mut self, out: &mut Self::State, near: &Self::State, distance: f64);

    /// Fill `out` with a per-dimension Gaussian draw centered at `mean` with
    /// standard deviation `std_dev`, clamped into bounds.
    fn sample_gaussian(&mut self, out: &mut Self::State, mean: &Self::State, std_dev: f64);
}

/// State sampler for [`RealVectorStateSpace`], generic over the RNG so
/// callers can choose between entropy-seeded and reproducible streams.
///
/// Obtain one via
/// [`seeded_sampler`](RealVectorStateSpace::seeded_sampler) or (with the
/// `std` feature) [`default_sampler`](RealVectorStateSpace::default_sampler).
#[derive(Debug)]
pub struct RealVectorStateSampler<'a, R: Rng> {
    space: &'a RealVectorStateSpace,
    rng: R,
}

impl<'a, R: Rng> RealVectorStateSampler<'a, R> {
    /// Bind a sampler to `space` with the supplied RNG.
    pub fn new(space: &'a RealVectorStateSpace, rng: R) -> Self {
        Self { space, rng }
    }

    /// The space this sampler draws from.
    pub fn space(&self) -> &RealVectorStateSpace {
        self.space
    }
}

impl<R: Rng> StateSampler for RealVectorStateSampler<'_, R> {
    type State = RealVectorState;

    fn sample_uniform(&mut self, out: &mut RealVectorState) {
        debug_assert_eq!(out.len(), self.space.dimension());
        let bounds = self.space.bounds();
        for i in 0..self.space.dimension() {
            out[i] = self.rng.random_range(bounds.low[i]..=bounds.high[i]);
        }
    }

    fn sample_uniform_near(
        &mut self,
        out: &mut RealVectorState,
        near: &RealVectorState,
        distance: f64,
    ) {
        debug_assert_eq!(out.len(), self.space.dimension());
        debug_assert_eq!(near.len(), self.space.dimension());
        let bounds = self.space.bounds();
        for i in 0..self.space.dimension() {
            let drawn = self.rng.random_range(near[i] - distance..=near[i] + distance);
            out[i] = bounds.clamp(i, drawn);
        }
    }

    fn sample_gaussian(
        &mut self,
        out: &mut RealVectorState,
        mean: &RealVectorState,
        std_dev: f64,
    ) {
        debug_assert_eq!(out.len(), self.space.dimension());
        debug_assert_eq!(mean.len(), self.space.dimension());
        let bounds = self.space.bounds();
        for i in 0..self.space.dimension() {
            let z: f64 = self.rng.sample(StandardNormal);
            out[i] = bounds.clamp(i, mean[i] + z * std_dev);
        }
    }
}
