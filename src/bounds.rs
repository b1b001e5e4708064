//! Per-dimension interval box constraining valid and sampled coordinates.
//!
//! [`RealVectorBounds`] is a plain value type: an ordered pair of low/high
//! vectors, one entry per dimension. A space takes ownership of a whole
//! bounds object via `set_bounds` and never mutates it partially in place.
//!
//! # Invariants
//!
//! - `low.len() == high.len()` — one interval per dimension.
//! - `low[i] <= high[i]` for every `i` once [`check`](RealVectorBounds::check)
//!   has passed; a space only accepts bounds that pass.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::error::SpaceError;

/// Inclusive `[low, high]` interval box, one interval per dimension.
///
/// The `low` and `high` vectors are public so configuration code can fill
/// them directly, matching how planner setups are usually written:
///
/// ```
/// use rvspace::RealVectorBounds;
///
/// let mut bounds = RealVectorBounds::new(3);
/// bounds.set_low(-1.0);
/// bounds.set_high(1.0);
/// bounds.high[2] = 0.5; // per-dimension override
/// assert!(bounds.check().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealVectorBounds {
    /// Lower bound per dimension.
    pub low: Vec<f64>,
    /// Upper bound per dimension.
    pub high: Vec<f64>,
}

impl RealVectorBounds {
    /// Zero-width bounds (`[0, 0]` in every dimension) for `dim` dimensions.
    pub fn new(dim: usize) -> Self {
        Self {
            low: vec![0.0; dim],
            high: vec![0.0; dim],
        }
    }

    /// Set the lower bound of every dimension to `value`.
    pub fn set_low(&mut self, value: f64) {
        self.low.fill(value);
    }

    /// Set the upper bound of every dimension to `value`.
    pub fn set_high(&mut self, value: f64) {
        self.high.fill(value);
    }

    /// Number of dimensions covered.
    pub fn len(&self) -> usize {
        self.low.len()
    }

    /// `true` when the bounds cover zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// Validate the structural invariants: equal-length vectors and
    /// `low[i] <= high[i]` everywhere.
    pub fn check(&self) -> Result<(), SpaceError> {
        if self.low.len() != self.high.len() {
            return Err(SpaceError::BoundsDimensionMismatch {
                expected: self.low.len(),
                got: self.high.len(),
            });
        }
        for (i, (&lo, &hi)) in self.low.iter().zip(self.high.iter()).enumerate() {
            if lo > hi {
                return Err(SpaceError::InvertedBounds { index: i, low: lo, high: hi });
            }
        }
        Ok(())
    }

    /// Volume of the box: the product of per-dimension widths.
    pub fn volume(&self) -> f64 {
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(lo, hi)| hi - lo)
            .product()
    }

    /// Euclidean length of the box diagonal, `sqrt(Σ (high-low)^2)`.
    ///
    /// This is the quantity a space caches as its maximum extent.
    pub fn diagonal(&self) -> f64 {
        let sq: f64 = self
            .low
            .iter()
            .zip(self.high.iter())
            .map(|(lo, hi)| {
                let w = hi - lo;
                w * w
            })
            .sum();
        sqrt(sq)
    }

    /// Clamp `value` into the interval of dimension `i`.
    ///
    /// Precondition: `i < self.len()`.
    #[inline]
    pub fn clamp(&self, i: usize, value: f64) -> f64 {
        value.max(self.low[i]).min(self.high[i])
    }
}

/// `f64::sqrt` lives in `std`; in a no_std build fall back to
/// Newton-Raphson seeded from the exponent bits, accurate to the last few
/// ulps after the fixed iteration count.
#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if !x.is_finite() {
        return x;
    }
    // Exponent-halving initial guess, then Newton-Raphson.
    let bits = x.to_bits();
    let guess_bits = 0x1ff7_a3be_a91d_9b1bu64.wrapping_add(bits >> 1);
    let mut s = f64::from_bits(guess_bits);
    for _ in 0..6 {
        s = 0.5 * (s + x / s);
    }
    s
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}
