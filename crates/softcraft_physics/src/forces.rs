use softcraft_core::{Beam, BeamState, InputState, Particle, PhysicsConfig, Thruster, Vec2, BEAM_BROKEN};

use crate::step::StepReport;

/// Pull the grabbed particle toward the cursor
pub fn apply_pull(particles: &mut [Particle], input: &InputState, gain: f32) {
    if let Some(p) = input.grabbed.and_then(|i| particles.get_mut(i)) {
        p.force += input.pull * gain;
    }
}

/// Force a thruster exerts on each of its two mount particles this step.
/// Zero when its controls are inactive or its mounts coincide.
pub fn thruster_force(
    thruster: &Thruster,
    particles: &[Particle],
    input: &InputState,
    turbo_multiplier: f32,
) -> Vec2 {
    if !thruster.is_active(input.controls) {
        return Vec2::ZERO;
    }
    let line = particles[thruster.i2].position - particles[thruster.i1].position;
    let Some(dir) = line.try_normalize() else {
        return Vec2::ZERO;
    };

    // Turbo only boosts BACK thrusters
    let magnitude = if input.turbo && thruster.is_back() {
        thruster.force * turbo_multiplier
    } else {
        thruster.force
    };
    dir * magnitude
}

/// Both mount particles receive the full thrust
pub fn apply_thrusters(
    particles: &mut [Particle],
    thrusters: &[Thruster],
    input: &InputState,
    turbo_multiplier: f32,
) {
    if input.controls == 0 {
        return;
    }
    for t in thrusters {
        let force = thruster_force(t, particles, input, turbo_multiplier);
        particles[t.i1].force += force;
        particles[t.i2].force += force;
    }
}

/// Rest length minus current length. Positive when compressed.
pub fn dilatation(beam: &Beam, particles: &[Particle]) -> f32 {
    let length = particles[beam.i1]
        .position
        .distance(particles[beam.i2].position);
    beam.rest_length - length
}

/// Elastic, plastic and breaking behavior of every intact beam
pub fn apply_beams(
    particles: &mut [Particle],
    beams: &mut [Beam],
    config: &PhysicsConfig,
    report: &mut StepReport,
) {
    let axial_stiffness = config.axial_stiffness();

    for (index, beam) in beams.iter_mut().enumerate() {
        if beam.is_broken() {
            continue;
        }

        let delta = particles[beam.i2].position - particles[beam.i1].position;
        let length = delta.length();
        let dilatation = beam.rest_length - length;

        // A beam that yielded down to nothing has no stiffness left
        let force = if beam.rest_length > 0.0 {
            axial_stiffness / beam.rest_length * dilatation
        } else {
            0.0
        };

        match beam.classify(dilatation, config) {
            BeamState::Broken => {
                beam.flags |= BEAM_BROKEN;
                report.broken.push(index);
                log::debug!(
                    "beam {} ({} - {}) broke at dilatation {:.4} m",
                    index,
                    beam.i1,
                    beam.i2,
                    dilatation
                );
                continue;
            }
            BeamState::Deformed => {
                // Applied force below still uses the pre-yield rest length
                let yield_length = force / axial_stiffness * beam.rest_length;
                beam.rest_length = (beam.rest_length - yield_length).max(0.0);
                report.deformed.push(index);
            }
            BeamState::Intact => {}
        }

        // Coincident endpoints: no direction to push along this step
        let Some(dir) = delta.try_normalize() else {
            continue;
        };
        particles[beam.i1].force -= dir * force;
        particles[beam.i2].force += dir * force;
    }
}
