//! Planar coordinates and the geometry-based travel-time estimate.
//!
//! Facility positions live on an abstract city grid rather than WGS-84:
//! one coordinate unit corresponds to `km_per_unit` kilometres, so plain
//! Euclidean distance is the right metric.

use std::fmt;

use crate::{CoreError, CoreResult};

/// A point on the city grid.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in grid units.
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.x, self.y)
    }
}

// ── GeometryModel ─────────────────────────────────────────────────────────────

/// Converts grid distance into an urban driving time in minutes.
///
///   minutes = max(min_minutes, distance * km_per_unit / speed_kmh * 60)
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryModel {
    /// Kilometres represented by one grid unit.  Default: 2.
    pub km_per_unit: f64,
    /// Average urban speed.  Default: 30 km/h.
    pub speed_kmh: f64,
    /// Lower bound on any estimate.  Default: 3 minutes.
    pub min_minutes: f64,
}

impl GeometryModel {
    pub const DEFAULT_KM_PER_UNIT: f64 = 2.0;
    pub const DEFAULT_SPEED_KMH: f64 = 30.0;
    pub const DEFAULT_MIN_MINUTES: f64 = 3.0;

    /// Estimated travel time between `a` and `b`, in minutes.
    ///
    /// Symmetric in its arguments and never below `min_minutes`.
    pub fn estimated_time(&self, a: Coord, b: Coord) -> f64 {
        let km = a.distance(b) * self.km_per_unit;
        let minutes = km / self.speed_kmh * 60.0;
        minutes.max(self.min_minutes)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.km_per_unit) {
            return Err(CoreError::Config(format!(
                "km_per_unit must be positive, got {}",
                self.km_per_unit
            )));
        }
        if !positive(self.speed_kmh) {
            return Err(CoreError::Config(format!(
                "speed_kmh must be positive, got {}",
                self.speed_kmh
            )));
        }
        if !(self.min_minutes.is_finite() && self.min_minutes >= 0.0) {
            return Err(CoreError::Config(format!(
                "min_minutes must be finite and non-negative, got {}",
                self.min_minutes
            )));
        }
        Ok(())
    }
}

impl Default for GeometryModel {
    fn default() -> Self {
        Self {
            km_per_unit: Self::DEFAULT_KM_PER_UNIT,
            speed_kmh:   Self::DEFAULT_SPEED_KMH,
            min_minutes: Self::DEFAULT_MIN_MINUTES,
        }
    }
}
