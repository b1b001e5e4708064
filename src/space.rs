//! The R^n state space: dimensionality, bounds, names, and the geometric
//! operations planners treat as the contract of "a state space".
//!
//! # Lifecycle
//!
//! A space moves through four informal phases:
//!
//! ```text
//! Unconfigured (dim 0)
//!   → Configuring   add_dimension / add_named_dimension / set_bounds
//!   → Ready         setup() — maximum extent recomputed and cached
//!   → Active        states allocated, geometry queried, samplers bound
//! ```
//!
//! There is no transition back: once any state has been allocated, the
//! dimension must not change, and mutating bounds or dimension after
//! [`setup`](StateSpace::setup) while other components hold references is a
//! precondition violation (mismatched state lengths), not a detected error.
//!
//! # Concurrency
//!
//! After `setup()` a space is a shared read-only descriptor: any number of
//! planner threads and samplers may read bounds, dimension, and extent
//! concurrently, provided no thread mutates it. This is a documented
//! precondition, not something enforced by locking — the whole surface is
//! synchronous, allocation-free apart from the state factory, and safe in
//! tight loops.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

use hashbrown::HashMap;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::bounds::{sqrt, RealVectorBounds};
use crate::error::SpaceError;
use crate::projection::{CoordinateProjection, ProjectionRegistry};
use crate::sampler::RealVectorStateSampler;
use crate::state::RealVectorState;

/// Absolute per-coordinate tolerance for [`StateSpace::equal_states`].
///
/// Exact float equality is unsafe for derived states (interpolation results,
/// enforced-bounds copies), so equality means every coordinate pair differs
/// by at most this much. The value is a fixed absolute epsilon, a few orders
/// of magnitude above accumulated rounding for coordinates of magnitude
/// around one.
pub const STATE_EQUALITY_EPSILON: f64 = 1e-12;

/// Capability-set interface of a state space.
///
/// Planners hold a reference to this trait, never to a concrete space kind;
/// sibling kinds (rotation groups, compound spaces) implement the same
/// surface. All geometric operations are pure functions of their inputs plus
/// the read-only space, so calls on distinct states are independent.
pub trait StateSpace {
    /// The point type of this space.
    type State;

    /// Current dimension count.
    fn dimension(&self) -> usize;

    /// Diagonal length of the bounding box, `sqrt(Σ (high-low)^2)` —
    /// the normalization constant for planner step sizes and goal
    /// thresholds.
    fn maximum_extent(&self) -> f64;

    /// Allocate a fresh state with this space's current dimension.
    fn alloc_state(&self) -> Self::State;

    /// Return a state to the space that allocated it.
    fn free_state(&self, state: Self::State);

    /// Element-wise copy. Both states must have this space's dimension.
    fn copy_state(&self, dst: &mut Self::State, src: &Self::State);

    /// Metric distance between two states.
    fn distance(&self, a: &Self::State, b: &Self::State) -> f64;

    /// Tolerance-based equality; see [`STATE_EQUALITY_EPSILON`].
    fn equal_states(&self, a: &Self::State, b: &Self::State) -> bool;

    /// Write `from + t·(to-from)` into `out`. Defined for `t` in `[0, 1]`;
    /// values outside are deliberate extrapolation and are not rejected.
    fn interpolate(&self, from: &Self::State, to: &Self::State, t: f64, out: &mut Self::State);

    /// Clamp every coordinate into its bound, in place. Idempotent.
    fn enforce_bounds(&self, state: &mut Self::State);

    /// `true` iff every coordinate lies within its bound, inclusive.
    fn satisfies_bounds(&self, state: &Self::State) -> bool;

    /// Finalize configuration: recompute and cache derived quantities.
    fn setup(&mut self);

    /// Human-readable dump of one state. Diagnostic only, never a stable
    /// machine-parseable format.
    fn print_state(&self, state: &Self::State, out: &mut dyn Write) -> core::fmt::Result;

    /// Human-readable dump of the space's settings. Diagnostic only.
    fn print_settings(&self, out: &mut dyn Write) -> core::fmt::Result;
}

/// A state space representing R^n with the L2 norm as its metric.
///
/// Owns the per-dimension bounds and the optional dimension-name table
/// (sequence plus reverse map — instance-owned, since multiple spaces may
/// coexist with independent naming).
#[derive(Clone, Debug)]
pub struct RealVectorStateSpace {
    /// The dimension of the space. Grows only via `add_dimension` during
    /// configuration.
    dimension: usize,
    /// The bounds of the space (used for sampling and enforcement).
    bounds: RealVectorBounds,
    /// Optional names for individual dimensions; empty string = unnamed.
    dimension_names: Vec<String>,
    /// Reverse map from name to dimension index.
    dimension_index: HashMap<String, usize>,
    /// Cached bounding-box diagonal; valid only when `extent_dirty` is false.
    max_extent: f64,
    /// Set by every bounds/dimension mutation, cleared by `setup()`.
    extent_dirty: bool,
}

impl RealVectorStateSpace {
    /// A space representing R^`dim`, with zero-width bounds and unnamed
    /// dimensions. `new(0)` starts an unconfigured space to be grown with
    /// [`add_dimension`](Self::add_dimension).
    pub fn new(dim: usize) -> Self {
        Self {
            dimension: dim,
            bounds: RealVectorBounds::new(dim),
            dimension_names: alloc::vec![String::new(); dim],
            dimension_index: HashMap::new(),
            max_extent: 0.0,
            extent_dirty: true,
        }
    }

    /// Append one unnamed dimension with bounds `[min_bound, max_bound]`.
    /// Always succeeds; invalidates the cached extent.
    pub fn add_dimension(&mut self, min_bound: f64, max_bound: f64) {
        self.dimension += 1;
        self.bounds.low.push(min_bound);
        self.bounds.high.push(max_bound);
        self.dimension_names.push(String::new());
        self.extent_dirty = true;
    }

    /// Append one named dimension with bounds `[min_bound, max_bound]`.
    pub fn add_named_dimension(&mut self, name: &str, min_bound: f64, max_bound: f64) {
        self.add_dimension(min_bound, max_bound);
        let index = self.dimension - 1;
        self.dimension_names[index] = name.to_string();
        self.dimension_index.insert(name.to_string(), index);
    }

    /// Replace the bounds wholesale. This defines the region in which
    /// sampling is performed.
    ///
    /// Rejected (leaving the prior bounds untouched) when the length does
    /// not match the space's dimension or any pair is inverted.
    pub fn set_bounds(&mut self, bounds: RealVectorBounds) -> Result<(), SpaceError> {
        if bounds.len() != self.dimension {
            return Err(SpaceError::BoundsDimensionMismatch {
                expected: self.dimension,
                got: bounds.len(),
            });
        }
        bounds.check()?;
        self.bounds = bounds;
        self.extent_dirty = true;
        Ok(())
    }

    /// The bounds currently in force.
    pub fn bounds(&self) -> &RealVectorBounds {
        &self.bounds
    }

    /// Name of dimension `index`, or the empty string when the dimension is
    /// unnamed or `index` is out of range. Read access never fails on
    /// absence.
    pub fn dimension_name(&self, index: usize) -> &str {
        self.dimension_names
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Name dimension `index`. Overwrites any prior reverse-map entry for
    /// `name` — names need not be unique, but each name resolves to the most
    /// recently named index.
    pub fn set_dimension_name(&mut self, index: usize, name: &str) -> Result<(), SpaceError> {
        if index >= self.dimension {
            return Err(SpaceError::IndexOutOfRange {
                index,
                dimension: self.dimension,
            });
        }
        self.dimension_names[index] = name.to_string();
        self.dimension_index.insert(name.to_string(), index);
        Ok(())
    }

    /// Index of the dimension named `name`, or `None` if no dimension
    /// carries that name. Never fails.
    pub fn dimension_index(&self, name: &str) -> Option<usize> {
        self.dimension_index.get(name).copied()
    }

    /// Register this space's default projections with an external registry:
    /// the identity projection over all coordinates. Visualization-only
    /// surface; the registry's contract is defined elsewhere.
    pub fn register_projections(&self, registry: &mut dyn ProjectionRegistry) {
        registry.register_default(CoordinateProjection::identity(self.dimension));
    }

    /// A sampler bound to this space with a deterministic seed. Works in
    /// no_std builds; prefer one sampler per thread.
    pub fn seeded_sampler(&self, seed: u64) -> RealVectorStateSampler<'_, SmallRng> {
        RealVectorStateSampler::new(self, SmallRng::seed_from_u64(seed))
    }

    /// A sampler bound to this space, seeded from OS entropy.
    #[cfg(feature = "std")]
    pub fn default_sampler(&self) -> RealVectorStateSampler<'_, SmallRng> {
        RealVectorStateSampler::new(self, SmallRng::from_os_rng())
    }

    fn compute_extent(&self) -> f64 {
        self.bounds.diagonal()
    }
}

impl StateSpace for RealVectorStateSpace {
    type State = RealVectorState;

    fn dimension(&self) -> usize {
        self.dimension
    }

    /// Cached after [`setup`](StateSpace::setup); a read while the cache is
    /// dirty (bounds or dimension changed since) recomputes on the fly
    /// without touching the cache, so reads stay `&self` and remain safe to
    /// share across threads.
    fn maximum_extent(&self) -> f64 {
        if self.extent_dirty {
            self.compute_extent()
        } else {
            self.max_extent
        }
    }

    fn alloc_state(&self) -> RealVectorState {
        RealVectorState::zeroed(self.dimension)
    }

    /// Consumes the state. Pairing every `alloc_state` with a `free_state`
    /// on the same space keeps the factory discipline explicit even though
    /// the buffer is reclaimed by drop.
    fn free_state(&self, state: RealVectorState) {
        drop(state);
    }

    fn copy_state(&self, dst: &mut RealVectorState, src: &RealVectorState) {
        debug_assert_eq!(src.len(), self.dimension);
        debug_assert_eq!(dst.len(), self.dimension);
        dst.values_mut().copy_from_slice(src.values());
    }

    /// L2 norm of the difference. Satisfies the metric laws: non-negative,
    /// zero iff equal, symmetric, triangle inequality.
    fn distance(&self, a: &RealVectorState, b: &RealVectorState) -> f64 {
        debug_assert_eq!(a.len(), self.dimension);
        debug_assert_eq!(b.len(), self.dimension);
        let sq: f64 = a
            .values()
            .iter()
            .zip(b.values().iter())
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum();
        sqrt(sq)
    }

    fn equal_states(&self, a: &RealVectorState, b: &RealVectorState) -> bool {
        a.values()
            .iter()
            .zip(b.values().iter())
            .all(|(x, y)| (x - y).abs() <= STATE_EQUALITY_EPSILON)
    }

    fn interpolate(
        &self,
        from: &RealVectorState,
        to: &RealVectorState,
        t: f64,
        out: &mut RealVectorState,
    ) {
        debug_assert_eq!(from.len(), self.dimension);
        debug_assert_eq!(to.len(), self.dimension);
        for i in 0..self.dimension {
            out[i] = from[i] + t * (to[i] - from[i]);
        }
    }

    fn enforce_bounds(&self, state: &mut RealVectorState) {
        debug_assert_eq!(state.len(), self.dimension);
        for i in 0..self.dimension {
            state[i] = self.bounds.clamp(i, state[i]);
        }
    }

    fn satisfies_bounds(&self, state: &RealVectorState) -> bool {
        debug_assert_eq!(state.len(), self.dimension);
        state
            .values()
            .iter()
            .enumerate()
            .all(|(i, &v)| v >= self.bounds.low[i] && v <= self.bounds.high[i])
    }

    /// Recomputes and caches the maximum extent. Marks the transition from
    /// configuration to active use; call once, after the last
    /// `add_dimension`/`set_bounds`.
    fn setup(&mut self) {
        self.max_extent = self.compute_extent();
        self.extent_dirty = false;
    }

    fn print_state(&self, state: &RealVectorState, out: &mut dyn Write) -> core::fmt::Result {
        write!(out, "RealVectorState [")?;
        for (i, v) in state.values().iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{v}")?;
        }
        writeln!(out, "]")
    }

    fn print_settings(&self, out: &mut dyn Write) -> core::fmt::Result {
        writeln!(out, "RealVectorStateSpace (dimension: {})", self.dimension)?;
        writeln!(out, "Bounds:")?;
        for i in 0..self.dimension {
            let name = self.dimension_name(i);
            if name.is_empty() {
                writeln!(out, "  [{} .. {}]", self.bounds.low[i], self.bounds.high[i])?;
            } else {
                writeln!(
                    out,
                    "  {name}: [{} .. {}]",
                    self.bounds.low[i], self.bounds.high[i]
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    // ── Helpers ──────────────────────────────────────────────────────────

    /// Unit-square space: dimension 2, bounds [0,1] x [0,1], set up.
    fn unit_square() -> RealVectorStateSpace {
        let mut space = RealVectorStateSpace::new(2);
        let mut bounds = RealVectorBounds::new(2);
        bounds.set_high(1.0);
        space.set_bounds(bounds).unwrap();
        space.setup();
        space
    }

    fn state_at(space: &RealVectorStateSpace, coords: &[f64]) -> RealVectorState {
        let mut s = space.alloc_state();
        s.values_mut().copy_from_slice(coords);
        s
    }

    // ── Configuration ────────────────────────────────────────────────────

    #[test]
    fn test_add_dimension_grows_space() {
        let mut space = RealVectorStateSpace::new(0);
        assert_eq!(space.dimension(), 0);
        space.add_dimension(-1.0, 1.0);
        space.add_named_dimension("z", 0.0, 3.0);
        assert_eq!(space.dimension(), 2);
        assert_eq!(space.bounds().low, alloc::vec![-1.0, 0.0]);
        assert_eq!(space.bounds().high, alloc::vec![1.0, 3.0]);
        assert_eq!(space.dimension_index("z"), Some(1));
    }

    #[test]
    fn test_set_bounds_rejects_length_mismatch_without_partial_update() {
        let mut space = unit_square();
        let before = space.bounds().clone();
        let err = space.set_bounds(RealVectorBounds::new(3)).unwrap_err();
        assert_eq!(
            err,
            SpaceError::BoundsDimensionMismatch { expected: 2, got: 3 }
        );
        assert_eq!(space.bounds(), &before);
    }

    #[test]
    fn test_set_bounds_rejects_inverted_bounds_without_partial_update() {
        let mut space = unit_square();
        let before = space.bounds().clone();
        let mut bad = RealVectorBounds::new(2);
        bad.low[0] = 2.0; // low > high
        assert!(matches!(
            space.set_bounds(bad),
            Err(SpaceError::InvertedBounds { index: 0, .. })
        ));
        assert_eq!(space.bounds(), &before);
    }

    // ── Dimension names ──────────────────────────────────────────────────

    #[test]
    fn test_dimension_name_round_trip() {
        let mut space = unit_square();
        space.set_dimension_name(0, "x").unwrap();
        space.set_dimension_name(1, "y").unwrap();
        assert_eq!(space.dimension_name(0), "x");
        assert_eq!(space.dimension_index("x"), Some(0));
        assert_eq!(space.dimension_index("y"), Some(1));
        assert_eq!(space.dimension_index("theta"), None);
    }

    #[test]
    fn test_unset_name_reads_as_empty_sentinel() {
        let space = unit_square();
        assert_eq!(space.dimension_name(0), "");
        assert_eq!(space.dimension_name(99), ""); // out of range, still no error
    }

    #[test]
    fn test_set_dimension_name_out_of_range_fails() {
        let mut space = unit_square();
        assert_eq!(
            space.set_dimension_name(2, "x"),
            Err(SpaceError::IndexOutOfRange { index: 2, dimension: 2 })
        );
    }

    #[test]
    fn test_renaming_overwrites_reverse_map() {
        let mut space = unit_square();
        space.set_dimension_name(0, "q").unwrap();
        space.set_dimension_name(1, "q").unwrap();
        // Most recent setter wins in the reverse map.
        assert_eq!(space.dimension_index("q"), Some(1));
        assert_eq!(space.dimension_name(0), "q");
    }

    #[test]
    fn test_name_tables_are_instance_owned() {
        let mut a = unit_square();
        let b = unit_square();
        a.set_dimension_name(0, "x").unwrap();
        assert_eq!(a.dimension_index("x"), Some(0));
        assert_eq!(b.dimension_index("x"), None);
    }

    // ── Extent ───────────────────────────────────────────────────────────

    #[test]
    fn test_maximum_extent_of_unit_square_is_sqrt_2() {
        let space = unit_square();
        assert!((space.maximum_extent() - core::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_dirty_extent_recomputed_on_read_and_recached_by_setup() {
        let mut space = unit_square();
        let mut wider = RealVectorBounds::new(2);
        wider.set_high(2.0);
        space.set_bounds(wider).unwrap();
        // Dirty read recomputes on the fly.
        let expected = 2.0 * core::f64::consts::SQRT_2;
        assert!((space.maximum_extent() - expected).abs() < 1e-9);
        // And setup re-caches the same value.
        space.setup();
        assert!((space.maximum_extent() - expected).abs() < 1e-9);
    }

    // ── Geometry ─────────────────────────────────────────────────────────

    #[test]
    fn test_distance_metric_laws() {
        let space = unit_square();
        let a = state_at(&space, &[0.1, 0.2]);
        let b = state_at(&space, &[0.9, 0.4]);
        let c = state_at(&space, &[0.5, 0.8]);

        assert_eq!(space.distance(&a, &a), 0.0);
        assert!((space.distance(&a, &b) - space.distance(&b, &a)).abs() < 1e-15);
        assert!(
            space.distance(&a, &c) <= space.distance(&a, &b) + space.distance(&b, &c) + 1e-12
        );
    }

    #[test]
    fn test_distance_is_l2_norm() {
        let space = unit_square();
        let a = state_at(&space, &[0.0, 0.0]);
        let b = state_at(&space, &[3.0, 4.0]);
        assert!((space.distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_states_tolerates_rounding() {
        let space = unit_square();
        let a = state_at(&space, &[0.3, 0.6]);
        let b = state_at(&space, &[0.3 + 1e-13, 0.6 - 1e-13]);
        let c = state_at(&space, &[0.3 + 1e-6, 0.6]);
        assert!(space.equal_states(&a, &b));
        assert!(!space.equal_states(&a, &c));
    }

    #[test]
    fn test_interpolate_endpoints_and_midpoints() {
        let space = unit_square();
        let from = state_at(&space, &[0.0, 0.0]);
        let to = state_at(&space, &[2.0, 4.0]);
        let mut out = space.alloc_state();

        space.interpolate(&from, &to, 0.0, &mut out);
        assert!(space.equal_states(&out, &from));

        space.interpolate(&from, &to, 1.0, &mut out);
        assert!(space.equal_states(&out, &to));

        space.interpolate(&from, &to, 0.25, &mut out);
        assert_eq!(out.values(), &[0.5, 1.0]);
    }

    #[test]
    fn test_interpolate_permits_extrapolation() {
        let space = unit_square();
        let from = state_at(&space, &[0.0, 0.0]);
        let to = state_at(&space, &[1.0, 1.0]);
        let mut out = space.alloc_state();
        space.interpolate(&from, &to, 1.5, &mut out);
        assert_eq!(out.values(), &[1.5, 1.5]);
    }

    #[test]
    fn test_enforce_bounds_scenario_and_idempotence() {
        let space = unit_square();
        let mut s = state_at(&space, &[1.5, -0.5]);
        assert!(!space.satisfies_bounds(&s));

        space.enforce_bounds(&mut s);
        assert_eq!(s.values(), &[1.0, 0.0]);
        assert!(space.satisfies_bounds(&s));

        let once = s.clone();
        space.enforce_bounds(&mut s);
        assert_eq!(s, once);
    }

    #[test]
    fn test_satisfies_bounds_is_inclusive() {
        let space = unit_square();
        let on_edge = state_at(&space, &[0.0, 1.0]);
        assert!(space.satisfies_bounds(&on_edge));
    }

    #[test]
    fn test_copy_state() {
        let space = unit_square();
        let src = state_at(&space, &[0.7, 0.3]);
        let mut dst = space.alloc_state();
        space.copy_state(&mut dst, &src);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_alloc_free_factory_pair() {
        let space = unit_square();
        let s = space.alloc_state();
        assert_eq!(s.len(), space.dimension());
        space.free_state(s);
    }

    // ── Diagnostics ──────────────────────────────────────────────────────

    #[test]
    fn test_print_state_and_settings_are_human_readable() {
        let mut space = unit_square();
        space.set_dimension_name(0, "x").unwrap();
        let s = state_at(&space, &[0.25, 0.75]);

        let mut text = String::new();
        space.print_state(&s, &mut text).unwrap();
        assert!(text.contains("0.25"));
        assert!(text.contains("0.75"));

        let mut settings = String::new();
        space.print_settings(&mut settings).unwrap();
        assert!(settings.contains("dimension: 2"));
        assert!(settings.contains("x:"));
    }
}
