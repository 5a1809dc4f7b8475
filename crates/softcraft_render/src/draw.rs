use bevy::prelude::*;
use softcraft_core::PhysicsConfig;
use softcraft_physics::forces::dilatation;
use softcraft_sim::CraftState;

const PARTICLE_RADIUS: f32 = 0.04;
/// Length of the flame drawn per newton of thrust
const FLAME_SCALE: f32 = 0.01;

/// Beam colour from relaxed green through yellow to red at the break threshold
pub fn strain_color(dilatation: f32, config: &PhysicsConfig) -> Color {
    let strain = (dilatation.abs() / config.break_threshold).clamp(0.0, 1.0);
    if strain < 0.5 {
        Color::srgb(strain * 2.0, 0.9, 0.2)
    } else {
        Color::srgb(1.0, 0.9 * (1.0 - strain) * 2.0, 0.2)
    }
}

/// Draw beams, particles and firing thrusters with gizmos
pub fn draw_craft(craft: Res<CraftState>, mut gizmos: Gizmos) {
    let particles = craft.structure.particles();

    // Broken beams are not drawn
    for beam in craft.structure.beams().iter().filter(|b| !b.is_broken()) {
        let a = Vec2::from(particles[beam.i1].position);
        let b = Vec2::from(particles[beam.i2].position);
        gizmos.line_2d(a, b, strain_color(dilatation(beam, particles), &craft.config));
    }

    for p in particles {
        let color = if p.is_selected() {
            Color::srgb(1.0, 0.3, 0.9)
        } else {
            Color::srgb(0.8, 0.85, 1.0)
        };
        gizmos.circle_2d(Vec2::from(p.position), PARTICLE_RADIUS, color);
    }

    if let Some(p) = craft.input.grabbed.and_then(|i| particles.get(i)) {
        let from = Vec2::from(p.position);
        let to = from + Vec2::from(craft.input.pull);
        gizmos.line_2d(from, to, Color::srgba(1.0, 0.3, 0.9, 0.6));
    }

    for t in craft.structure.thrusters() {
        if !t.is_active(craft.input.controls) {
            continue;
        }
        let a = Vec2::from(particles[t.i1].position);
        let b = Vec2::from(particles[t.i2].position);
        let Some(dir) = (b - a).try_normalize() else {
            continue;
        };
        let mut force = t.force;
        if craft.input.turbo && t.is_back() {
            force *= craft.config.turbo_multiplier;
        }
        // Flame points away from the push direction
        gizmos.line_2d(a, a - dir * force * FLAME_SCALE, Color::srgb(1.0, 0.55, 0.1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strain_color_ends() {
        let config = PhysicsConfig::default();
        assert_eq!(strain_color(0.0, &config), Color::srgb(0.0, 0.9, 0.2));
        assert_eq!(strain_color(1.0, &config), Color::srgb(1.0, 0.0, 0.2));
        assert_eq!(strain_color(-1.0, &config), strain_color(1.0, &config));
    }
}
