//! Planner configuration.

use serde::{Deserialize, Serialize};

/// Default number of physical rows assumed per logical element.
pub const DEFAULT_FAN_OUT_FACTOR: u64 = 100;

/// Configuration for a [`QueryPlanner`](super::QueryPlanner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Multiplier applied to a logical limit to obtain the physical row limit.
    pub fan_out_factor: u64,
}

impl PlannerConfig {
    /// Create a configuration with the default fan-out factor.
    #[must_use]
    pub const fn new() -> Self {
        Self { fan_out_factor: DEFAULT_FAN_OUT_FACTOR }
    }

    /// Set the fan-out factor.
    #[must_use]
    pub const fn with_fan_out_factor(mut self, factor: u64) -> Self {
        self.fan_out_factor = factor;
        self
    }

    /// The physical row limit for a logical limit.
    #[must_use]
    pub const fn physical_limit(&self, limit: u64) -> u64 {
        limit.saturating_mul(self.fan_out_factor)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_limit_saturates() {
        let config = PlannerConfig::default();
        assert_eq!(config.physical_limit(5), 500);
        assert_eq!(config.physical_limit(u64::MAX), u64::MAX);
        assert_eq!(config.with_fan_out_factor(1).physical_limit(7), 7);
    }
}
