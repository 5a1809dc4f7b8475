use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::CraftError;

/// Physics configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Modulus of elasticity of the beam material (N/m²)
    pub modulus_of_elasticity: f32,
    /// Cross-sectional beam profile area (m²)
    pub profile_area: f32,
    /// Dilatation above which beams deform plastically (m)
    pub deform_threshold: f32,
    /// Dilatation above which beams break (m)
    pub break_threshold: f32,
    /// Multiplier on the pull vector of a grabbed particle
    pub pull_gain: f32,
    /// Multiplier on BACK thrusters while turbo is active
    pub turbo_multiplier: f32,
    /// Fixed step used by the game loop (s)
    pub tick_seconds: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            modulus_of_elasticity: MODULUS_OF_ELASTICITY,
            profile_area: PROFILE_AREA,
            deform_threshold: DEFORM_THRESHOLD,
            break_threshold: BREAK_THRESHOLD,
            pull_gain: PULL_GAIN,
            turbo_multiplier: TURBO_MULTIPLIER,
            tick_seconds: TICK_SECONDS,
        }
    }
}

impl PhysicsConfig {
    /// E * A, the axial stiffness shared by every beam
    pub fn axial_stiffness(&self) -> f32 {
        self.modulus_of_elasticity * self.profile_area
    }

    pub fn validate(&self) -> Result<(), CraftError> {
        if !(self.axial_stiffness() > 0.0) {
            return Err(CraftError::InvalidConfig("axial stiffness must be positive"));
        }
        if !(self.deform_threshold >= 0.0 && self.deform_threshold < self.break_threshold) {
            return Err(CraftError::InvalidConfig(
                "deform threshold must be below the break threshold",
            ));
        }
        if !(self.tick_seconds > 0.0) {
            return Err(CraftError::InvalidConfig("tick must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.axial_stiffness() - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = PhysicsConfig {
            deform_threshold: 0.1,
            break_threshold: 0.05,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CraftError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_stiffness() {
        let config = PhysicsConfig {
            profile_area: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
