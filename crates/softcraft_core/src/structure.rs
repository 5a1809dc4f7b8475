use crate::error::CraftError;
use crate::math::Vec2;
use crate::types::{Beam, Particle, Thruster};

/// One craft: particles plus the beams and thrusters linking them.
///
/// Beams and thrusters refer to particles by index into `particles`. Particles are only
/// ever appended, so an index stays valid and keeps naming the same particle for the
/// lifetime of the structure. Every mutation validates its inputs, which keeps the
/// physics step free of bounds and mass checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    particles: Vec<Particle>,
    beams: Vec<Beam>,
    thrusters: Vec<Thruster>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty structure with room for the given number of elements
    pub fn with_capacity(particles: usize, beams: usize, thrusters: usize) -> Self {
        Self {
            particles: Vec::with_capacity(particles),
            beams: Vec::with_capacity(beams),
            thrusters: Vec::with_capacity(thrusters),
        }
    }

    /// Rebuild a structure from raw parts, validating every mass and index
    pub fn from_parts(
        particles: Vec<Particle>,
        beams: Vec<Beam>,
        thrusters: Vec<Thruster>,
    ) -> Result<Self, CraftError> {
        for p in &particles {
            check_mass(p.mass)?;
        }
        let structure = Self {
            particles,
            beams,
            thrusters,
        };
        for b in &structure.beams {
            structure.check_indices(b.i1, b.i2)?;
        }
        for t in &structure.thrusters {
            structure.check_indices(t.i1, t.i2)?;
        }
        Ok(structure)
    }

    /// Append a particle at rest and return its index
    pub fn add_particle(&mut self, x: f32, y: f32, mass: f32) -> Result<usize, CraftError> {
        check_mass(mass)?;
        self.particles.push(Particle::new(Vec2::new(x, y), mass));
        Ok(self.particles.len() - 1)
    }

    /// Append a beam whose rest length is the current distance between its endpoints
    pub fn add_beam(&mut self, i1: usize, i2: usize) -> Result<usize, CraftError> {
        let rest_length = self.check_link(i1, i2)?;
        self.beams.push(Beam::new(i1, i2, rest_length));
        Ok(self.beams.len() - 1)
    }

    pub fn add_thruster(
        &mut self,
        i1: usize,
        i2: usize,
        force: f32,
        controlled_by: u8,
    ) -> Result<usize, CraftError> {
        self.check_link(i1, i2)?;
        self.thrusters.push(Thruster {
            i1,
            i2,
            force,
            controlled_by,
        });
        Ok(self.thrusters.len() - 1)
    }

    fn check_indices(&self, i1: usize, i2: usize) -> Result<(), CraftError> {
        let count = self.particles.len();
        for index in [i1, i2] {
            if index >= count {
                return Err(CraftError::InvalidIndex { index, count });
            }
        }
        if i1 == i2 {
            return Err(CraftError::SameEndpoints(i1));
        }
        Ok(())
    }

    /// Validate a new link and return the current distance between its endpoints
    fn check_link(&self, i1: usize, i2: usize) -> Result<f32, CraftError> {
        self.check_indices(i1, i2)?;
        let distance = self.particles[i1]
            .position
            .distance(self.particles[i2].position);
        if distance == 0.0 {
            return Err(CraftError::DegenerateGeometry { i1, i2 });
        }
        Ok(distance)
    }

    /// Mean position of all particles, `None` when there are none
    pub fn particle_center(&self) -> Option<Vec2> {
        if self.particles.is_empty() {
            return None;
        }
        let n = self.particles.len() as f32;
        let sum = self
            .particles
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.position);
        Some(sum / n)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn thrusters(&self) -> &[Thruster] {
        &self.thrusters
    }

    /// Mutable particle access. A slice cannot grow or shrink, so links stay valid.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Split borrow used by the physics step
    pub fn parts_mut(&mut self) -> (&mut [Particle], &mut [Beam], &[Thruster]) {
        (&mut self.particles, &mut self.beams, &self.thrusters)
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn beam_count(&self) -> usize {
        self.beams.len()
    }

    pub fn thruster_count(&self) -> usize {
        self.thrusters.len()
    }

    /// Beams that are not broken
    pub fn intact_beam_count(&self) -> usize {
        self.beams.iter().filter(|b| !b.is_broken()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn check_mass(mass: f32) -> Result<(), CraftError> {
    if mass > 0.0 && mass.is_finite() {
        Ok(())
    } else {
        Err(CraftError::NonPositiveMass(mass))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BEAM_BROKEN, THRUSTER_BACK};

    fn triangle() -> Structure {
        let mut s = Structure::new();
        s.add_particle(0.0, 0.0, 1.0).unwrap();
        s.add_particle(3.0, 0.0, 1.0).unwrap();
        s.add_particle(0.0, 4.0, 2.0).unwrap();
        s.add_beam(0, 1).unwrap();
        s.add_beam(1, 2).unwrap();
        s.add_beam(2, 0).unwrap();
        s
    }

    #[test]
    fn test_rest_length_from_geometry() {
        let s = triangle();
        let lengths: Vec<f32> = s.beams().iter().map(|b| b.rest_length).collect();
        assert!((lengths[0] - 3.0).abs() < 1e-6);
        assert!((lengths[1] - 5.0).abs() < 1e-6);
        assert!((lengths[2] - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_add_returns_indices() {
        let mut s = triangle();
        assert_eq!(s.add_particle(9.0, 9.0, 1.0), Ok(3));
        assert_eq!(s.add_beam(3, 0), Ok(3));
        assert_eq!(s.add_thruster(0, 1, 50.0, THRUSTER_BACK), Ok(0));
    }

    #[test]
    fn test_rejects_invalid_index() {
        let mut s = triangle();
        assert_eq!(
            s.add_beam(0, 7),
            Err(CraftError::InvalidIndex { index: 7, count: 3 })
        );
        assert_eq!(
            s.add_thruster(5, 0, 1.0, THRUSTER_BACK),
            Err(CraftError::InvalidIndex { index: 5, count: 3 })
        );
        assert_eq!(s.beam_count(), 3);
        assert_eq!(s.thruster_count(), 0);
    }

    #[test]
    fn test_rejects_same_endpoints_and_coincident_particles() {
        let mut s = triangle();
        assert_eq!(s.add_beam(1, 1), Err(CraftError::SameEndpoints(1)));
        let twin = s.add_particle(3.0, 0.0, 1.0).unwrap();
        assert_eq!(
            s.add_beam(1, twin),
            Err(CraftError::DegenerateGeometry { i1: 1, i2: twin })
        );
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        let mut s = Structure::new();
        assert_eq!(s.add_particle(0.0, 0.0, 0.0), Err(CraftError::NonPositiveMass(0.0)));
        assert!(s.add_particle(0.0, 0.0, -1.0).is_err());
        assert!(s.add_particle(0.0, 0.0, f32::NAN).is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn test_index_stability_under_growth() {
        let mut s = triangle();
        s.add_thruster(0, 2, 10.0, THRUSTER_BACK).unwrap();
        let before: Vec<(Vec2, Vec2)> = s
            .beams()
            .iter()
            .map(|b| (s.particles()[b.i1].position, s.particles()[b.i2].position))
            .collect();

        for i in 0..1000 {
            s.add_particle(i as f32, -(i as f32), 1.0).unwrap();
        }

        let after: Vec<(Vec2, Vec2)> = s
            .beams()
            .iter()
            .map(|b| (s.particles()[b.i1].position, s.particles()[b.i2].position))
            .collect();
        assert_eq!(before, after);
        let t = s.thrusters()[0];
        assert_eq!(s.particles()[t.i1].position, Vec2::new(0.0, 0.0));
        assert_eq!(s.particles()[t.i2].position, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_particle_center() {
        let s = triangle();
        let c = s.particle_center().unwrap();
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(Structure::new().particle_center(), None);
    }

    #[test]
    fn test_from_parts_validates() {
        let s = triangle();
        let mut beams = s.beams().to_vec();
        beams[0].flags |= BEAM_BROKEN;
        let rebuilt =
            Structure::from_parts(s.particles().to_vec(), beams.clone(), Vec::new()).unwrap();
        assert_eq!(rebuilt.intact_beam_count(), 2);

        beams.push(Beam::new(0, 12, 1.0));
        assert!(Structure::from_parts(s.particles().to_vec(), beams, Vec::new()).is_err());
    }
}
