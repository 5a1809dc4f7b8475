// Structural material model (SI units)
// A beam of rest length L behaves as a spring with k = E * A / L.

/// Modulus of elasticity of the beam material (N/m²)
pub const MODULUS_OF_ELASTICITY: f32 = 1.0e6;

/// Cross-sectional area of a beam profile (m²)
pub const PROFILE_AREA: f32 = 0.001;

/// Dilatation (m) above which a beam yields and its rest length changes permanently
pub const DEFORM_THRESHOLD: f32 = 0.05;

/// Dilatation (m) above which a beam breaks for good
pub const BREAK_THRESHOLD: f32 = 0.075;

/// Gain applied to the pull vector of a grabbed particle
pub const PULL_GAIN: f32 = 10.0;

/// Force multiplier for BACK thrusters while turbo is held
pub const TURBO_MULTIPLIER: f32 = 5.0;

/// Fixed simulation step (seconds)
pub const TICK_SECONDS: f32 = 0.01;

/// Mass used for generated particles (kg)
pub const DEFAULT_PARTICLE_MASS: f32 = 1.0;
