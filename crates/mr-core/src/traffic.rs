//! Deterministic, seedable traffic multipliers.
//!
//! # Determinism strategy
//!
//! Each lookup builds its own `SmallRng` seeded by:
//!
//!   seed = (session_seed XOR i * MIXING_CONSTANT).rotate_left(29)
//!          XOR (j + 1) * PAIR_CONSTANT
//!
//! and draws exactly one uniform sample from the profile's range.  This means:
//!
//! - No generator state is shared between lookups, so interleaved queries
//!   (routing while computing statistics, for example) cannot disturb each
//!   other.
//! - The same `(seed, i, j)` always yields the same factor, so path answers
//!   are stable for the lifetime of a graph.
//! - The mix is order-sensitive: `(i, j)` and `(j, i)` are independent draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CoreError, CoreResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Second odd constant for the column index (splitmix64 multiplier).
const PAIR_CONSTANT: u64 = 0xbf58_476d_1ce4_e5b9;

// ── TrafficProfile ────────────────────────────────────────────────────────────

/// Closed range `[min, max]` that traffic multipliers are drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficProfile {
    pub min: f64,
    pub max: f64,
}

impl TrafficProfile {
    /// Profile used for route costing: light traffic 0.9x to gridlock 2.5x.
    pub const ROUTING: TrafficProfile = TrafficProfile { min: 0.9, max: 2.5 };

    /// Profile used for display-only "current conditions" views.
    pub const DISPLAY: TrafficProfile = TrafficProfile { min: 0.8, max: 2.2 };

    /// Build a custom profile.  Requires finite `0 < min <= max`.
    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        let profile = Self { min, max };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(CoreError::InvalidProfile { min: self.min, max: self.max })
        }
    }

    #[inline]
    pub fn contains(&self, factor: f64) -> bool {
        (self.min..=self.max).contains(&factor)
    }
}

impl Default for TrafficProfile {
    fn default() -> Self {
        Self::ROUTING
    }
}

// ── TrafficModel ──────────────────────────────────────────────────────────────

/// Per-session traffic model: a fixed seed plus a multiplier range.
///
/// Cheap to copy; holds no generator state between calls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrafficModel {
    seed:    u64,
    profile: TrafficProfile,
}

impl TrafficModel {
    pub fn new(seed: u64, profile: TrafficProfile) -> Self {
        Self { seed, profile }
    }

    /// Draw a fresh session seed from OS entropy, so traffic differs between
    /// runs while staying fixed within one.
    pub fn session_seed() -> u64 {
        rand::random()
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn profile(&self) -> TrafficProfile {
        self.profile
    }

    /// Traffic factor for the ordered index pair `(i, j)`.
    pub fn multiplier(&self, i: usize, j: usize) -> f64 {
        let mut rng = pair_rng(self.seed, i, j);
        rng.gen_range(self.profile.min..=self.profile.max)
    }

    /// `base * multiplier(i, j)`, or `+∞` when there is no edge.
    ///
    /// The multiplier is not sampled for missing edges.
    #[inline]
    pub fn current_cost(&self, base: f64, i: usize, j: usize) -> f64 {
        if base == f64::INFINITY {
            return f64::INFINITY;
        }
        base * self.multiplier(i, j)
    }
}

fn pair_rng(seed: u64, i: usize, j: usize) -> SmallRng {
    let row = (seed ^ (i as u64).wrapping_mul(MIXING_CONSTANT)).rotate_left(29);
    let mixed = row ^ (j as u64).wrapping_add(1).wrapping_mul(PAIR_CONSTANT);
    SmallRng::seed_from_u64(mixed)
}
