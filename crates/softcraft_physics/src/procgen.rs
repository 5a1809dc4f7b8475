use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use softcraft_core::*;

/// Loose cloud of unlinked particles with random velocities, reproducible from `seed`
pub fn random_particles(
    seed: u64,
    count: usize,
    extent: f32,
    max_speed: f32,
    mass: f32,
) -> Result<Structure, CraftError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut structure = Structure::with_capacity(count, 0, 0);

    for _ in 0..count {
        let x = symmetric(&mut rng, extent);
        let y = symmetric(&mut rng, extent);
        let index = structure.add_particle(x, y, mass)?;
        structure.particles_mut()[index].velocity =
            Vec2::new(symmetric(&mut rng, max_speed), symmetric(&mut rng, max_speed));
    }

    log::info!("generated {} random particles (seed {})", count, seed);
    Ok(structure)
}

// Uniform in [-half_width, half_width], also fine for a zero width
fn symmetric(rng: &mut impl Rng, half_width: f32) -> f32 {
    (rng.r#gen::<f32>() * 2.0 - 1.0) * half_width
}

/// Rectangular truss: `cols` x `rows` particles `spacing` apart, braced in both diagonals.
/// Particle (c, r) has index `r * cols + c`.
pub fn lattice(cols: usize, rows: usize, spacing: f32, mass: f32) -> Result<Structure, CraftError> {
    let index = |c: usize, r: usize| r * cols + c;
    let horizontal = rows * cols.saturating_sub(1);
    let vertical = cols * rows.saturating_sub(1);
    let diagonal = 2 * cols.saturating_sub(1) * rows.saturating_sub(1);
    let mut structure = Structure::with_capacity(cols * rows, horizontal + vertical + diagonal, 0);

    for r in 0..rows {
        for c in 0..cols {
            structure.add_particle(c as f32 * spacing, r as f32 * spacing, mass)?;
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                structure.add_beam(index(c, r), index(c + 1, r))?;
            }
            if r + 1 < rows {
                structure.add_beam(index(c, r), index(c, r + 1))?;
            }
            if c + 1 < cols && r + 1 < rows {
                structure.add_beam(index(c, r), index(c + 1, r + 1))?;
                structure.add_beam(index(c + 1, r), index(c, r + 1))?;
            }
        }
    }

    log::debug!(
        "generated {}x{} lattice: {} particles, {} beams",
        cols,
        rows,
        structure.particle_count(),
        structure.beam_count()
    );
    Ok(structure)
}

/// Small hull pointing along +x with main engines at the rear and steering at the nose
pub fn default_craft() -> Result<Structure, CraftError> {
    let (cols, rows) = (6, 3);
    let index = |c: usize, r: usize| r * cols + c;
    let mut craft = lattice(cols, rows, 0.5, DEFAULT_PARTICLE_MASS)?;

    // Main engines push the rear edge forward
    craft.add_thruster(index(0, 0), index(1, 0), 40.0, THRUSTER_BACK)?;
    craft.add_thruster(index(0, rows - 1), index(1, rows - 1), 40.0, THRUSTER_BACK)?;
    // Retro thruster on the nose
    craft.add_thruster(index(cols - 1, 1), index(cols - 2, 1), 20.0, THRUSTER_FRONT)?;
    // Steering lifts or lowers the nose
    craft.add_thruster(index(cols - 1, 0), index(cols - 1, 1), 10.0, THRUSTER_LEFT)?;
    craft.add_thruster(index(cols - 1, rows - 1), index(cols - 1, rows - 2), 10.0, THRUSTER_RIGHT)?;

    log::info!(
        "built default craft: {} particles, {} beams, {} thrusters",
        craft.particle_count(),
        craft.beam_count(),
        craft.thruster_count()
    );
    Ok(craft)
}
