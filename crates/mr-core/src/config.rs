//! Network-level configuration.
//!
//! Typically built in code by the application (or deserialized from a
//! TOML/JSON file with the `serde` feature) and passed to
//! `CityGraph::with_config`.

use crate::{CoreError, CoreResult, GeometryModel, TrafficProfile};

/// Top-level configuration for one city graph session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Session seed for traffic multipliers.  `None` draws one from entropy,
    /// giving different traffic on every run.
    pub seed: Option<u64>,

    /// Multiplier range used for route costing and statistics.
    pub routing_profile: TrafficProfile,

    /// Multiplier range used for display-only cost views.
    pub display_profile: TrafficProfile,

    /// Distance → minutes conversion for suggested edge costs.
    pub geometry: GeometryModel,

    /// Explicit edge costs are raised to at least
    /// `cost_floor_ratio * suggested`.  Default: 0.8.
    pub cost_floor_ratio: f64,
}

impl NetworkConfig {
    pub const DEFAULT_COST_FLOOR_RATIO: f64 = 0.8;

    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.routing_profile.validate()?;
        self.display_profile.validate()?;
        self.geometry.validate()?;
        if !(self.cost_floor_ratio.is_finite() && self.cost_floor_ratio >= 0.0) {
            return Err(CoreError::Config(format!(
                "cost_floor_ratio must be finite and non-negative, got {}",
                self.cost_floor_ratio
            )));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            seed:             None,
            routing_profile:  TrafficProfile::ROUTING,
            display_profile:  TrafficProfile::DISPLAY,
            geometry:         GeometryModel::default(),
            cost_floor_ratio: Self::DEFAULT_COST_FLOOR_RATIO,
        }
    }
}
