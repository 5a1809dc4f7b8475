use softcraft_core::{CraftError, InputState, PhysicsConfig, Structure};

use crate::{forces, integrator};

/// Beams that changed state during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Beams that broke this step
    pub broken: Vec<usize>,
    /// Beams that yielded (rest length changed) this step
    pub deformed: Vec<usize>,
}

/// Advance the structure by `dt` seconds.
///
/// Runs four passes in order: pull on the grabbed particle, thrusters, beams, then
/// integration (which also clears the force accumulators). The input is validated up
/// front, so an error leaves the structure untouched.
pub fn simulate(
    structure: &mut Structure,
    input: &InputState,
    config: &PhysicsConfig,
    dt: f32,
) -> Result<StepReport, CraftError> {
    if let Some(index) = input.grabbed {
        let count = structure.particle_count();
        if index >= count {
            return Err(CraftError::InvalidIndex { index, count });
        }
    }

    let mut report = StepReport::default();
    let (particles, beams, thrusters) = structure.parts_mut();

    forces::apply_pull(particles, input, config.pull_gain);
    forces::apply_thrusters(particles, thrusters, input, config.turbo_multiplier);
    forces::apply_beams(particles, beams, config, &mut report);
    integrator::integrate(particles, dt);

    Ok(report)
}
