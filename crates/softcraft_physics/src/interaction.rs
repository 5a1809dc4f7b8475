use softcraft_core::{CraftError, InputState, Structure, Vec2, PARTICLE_SELECTED};

use crate::query::nearest_particle;

/// Grab the particle nearest to `point` (world space).
/// The pull is the vector from that particle to the cursor and stays applied until release.
pub fn grab(
    input: &mut InputState,
    structure: &mut Structure,
    point: Vec2,
) -> Result<usize, CraftError> {
    let nearest = nearest_particle(structure, point)?;
    release(input, structure);

    structure.particles_mut()[nearest.index].flags |= PARTICLE_SELECTED;
    input.grabbed = Some(nearest.index);
    input.pull = -nearest.offset;
    Ok(nearest.index)
}

/// Re-aim the pull at a new cursor position while a particle is held
pub fn drag(input: &mut InputState, structure: &Structure, point: Vec2) {
    let Some(p) = input.grabbed.and_then(|i| structure.particles().get(i)) else {
        return;
    };
    input.pull = point - p.position;
}

pub fn release(input: &mut InputState, structure: &mut Structure) {
    if let Some(p) = input
        .grabbed
        .take()
        .and_then(|i| structure.particles_mut().get_mut(i))
    {
        p.flags &= !PARTICLE_SELECTED;
    }
    input.pull = Vec2::ZERO;
}
