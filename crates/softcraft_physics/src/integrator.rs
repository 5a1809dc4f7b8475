use softcraft_core::{Particle, Vec2};

/// Semi-implicit Euler: velocity first, then position from the new velocity.
/// Clears the force accumulators for the next step.
pub fn integrate(particles: &mut [Particle], dt: f32) {
    for p in particles.iter_mut() {
        let acceleration = p.force / p.mass;
        p.velocity += acceleration * dt;
        p.position += p.velocity * dt;
        p.force = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_updated_before_position() {
        let mut particles = [Particle::new(Vec2::ZERO, 2.0)];
        particles[0].force = Vec2::new(4.0, 0.0);
        integrate(&mut particles, 0.5);

        // a = 2, v = 1, x = v * dt = 0.5 (explicit Euler would leave x at 0)
        assert!((particles[0].velocity.x - 1.0).abs() < 1e-6);
        assert!((particles[0].position.x - 0.5).abs() < 1e-6);
        assert_eq!(particles[0].force, Vec2::ZERO);
    }

    #[test]
    fn test_free_particle_drifts() {
        let mut particles = [Particle::new(Vec2::new(1.0, 1.0), 1.0)];
        particles[0].velocity = Vec2::new(0.0, -2.0);
        for _ in 0..10 {
            integrate(&mut particles, 0.1);
        }
        assert!((particles[0].position.y + 1.0).abs() < 1e-5);
        assert_eq!(particles[0].velocity, Vec2::new(0.0, -2.0));
    }
}
