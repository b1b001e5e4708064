//! # rvspace
//!
//! Real-vector (R^n) state spaces for sampling-based motion planners.
//!
//! A sampling-based planner (RRT, PRM, EST, ...) does not care what a robot
//! configuration *is* — it only needs a small geometric contract: allocate a
//! state, measure distance, interpolate along a segment, keep coordinates
//! inside bounds, and draw random states. This crate provides that contract
//! for the simplest and most common configuration space, R^n with the L2
//! norm: a fixed-length vector of reals, each optionally bounded and named.
//!
//! The operations here sit in planner inner loops that sample millions of
//! states per query, so everything is synchronous, bounded-time, and
//! allocation-free apart from the explicit state factory.
//!
//! ## The pipeline
//!
//! ```text
//! configure → setup() → plan
//!    add_dimension / set_bounds      extent cached      alloc / distance /
//!                                                       interpolate / sample
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`bounds`] | [`RealVectorBounds`] | Per-dimension `[low, high]` box; validation, volume, diagonal |
//! | [`state`] | [`RealVectorState`] | Fixed-length coordinate vector with checked + fast accessors |
//! | [`space`] | [`StateSpace`], [`RealVectorStateSpace`] | Dimensionality, names, metric, interpolation, bounds enforcement |
//! | [`sampler`] | [`StateSampler`], [`RealVectorStateSampler`] | Uniform, uniform-near, and Gaussian sampling under bounds |
//! | [`projection`] | [`CoordinateProjection`], [`ProjectionRegistry`] | Default identity/subset projections for visualization |
//! | [`error`] | [`SpaceError`] | Configuration and index errors |
//!
//! ## Example
//!
//! ```
//! use rvspace::{RealVectorStateSpace, StateSampler, StateSpace};
//!
//! // Configure a 2-DOF space over the unit square.
//! let mut space = RealVectorStateSpace::new(0);
//! space.add_named_dimension("x", 0.0, 1.0);
//! space.add_named_dimension("y", 0.0, 1.0);
//! space.setup();
//!
//! // Plan-phase usage: sample, measure, interpolate.
//! let mut sampler = space.seeded_sampler(42);
//! let mut a = space.alloc_state();
//! let mut b = space.alloc_state();
//! sampler.sample_uniform(&mut a);
//! sampler.sample_uniform(&mut b);
//!
//! let step = 0.1 / space.maximum_extent();
//! let mut next = space.alloc_state();
//! space.interpolate(&a, &b, step.min(1.0), &mut next);
//! assert!(space.satisfies_bounds(&next));
//! ```
//!
//! ## Lifecycle and concurrency
//!
//! A space is configured by one thread (`add_dimension`, `set_bounds`), then
//! finalized with [`StateSpace::setup`]. From that point it is a shared
//! read-only descriptor: any number of threads may call its geometric
//! operations concurrently, each with its own sampler instance (samplers
//! carry RNG state and are not shareable unsynchronized). Mutating a space
//! after `setup()` while states or samplers exist is a documented
//! precondition violation, not a guarded error — see [`space`].
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default (with `alloc` for state buffers).
//! Enable the `std` feature for entropy-seeded samplers
//! ([`RealVectorStateSpace::default_sampler`]) and the hardware `sqrt` path.
//! Enable the `serde` feature for derives on [`RealVectorBounds`] and
//! [`RealVectorState`].

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub mod bounds;
pub mod error;
pub mod projection;
pub mod sampler;
pub mod space;
pub mod state;

pub use bounds::RealVectorBounds;
pub use error::SpaceError;
pub use projection::{CoordinateProjection, ProjectionRegistry};
pub use sampler::{RealVectorStateSampler, StateSampler};
pub use space::{RealVectorStateSpace, StateSpace, STATE_EQUALITY_EPSILON};
pub use state::RealVectorState;
