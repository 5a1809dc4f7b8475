use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;
use crate::math::Vec2;

// Particle flag bits
pub const PARTICLE_TRAVERSED: u32 = 1 << 0;
pub const PARTICLE_SELECTED: u32 = 1 << 1;

// Beam flag bits
pub const BEAM_TRAVERSED: u32 = 1 << 0;
pub const BEAM_FOLLOWED: u32 = 1 << 1;
pub const BEAM_BROKEN: u32 = 1 << 2;

// Thruster control bits
pub const THRUSTER_BACK: u8 = 1 << 0;
pub const THRUSTER_FRONT: u8 = 1 << 1;
pub const THRUSTER_LEFT: u8 = 1 << 2;
pub const THRUSTER_RIGHT: u8 = 1 << 3;

/// Point mass of a structure.
/// repr(C) and Pod so the particle slice can be uploaded as a vertex buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Particle {
    /// Position (m)
    pub position: Vec2,
    /// Velocity (m/s)
    pub velocity: Vec2,
    /// Force accumulated during the current step (N)
    pub force: Vec2,
    /// Mass (kg), always > 0
    pub mass: f32,
    /// Bitflags: bit 0 = traversed, bit 1 = selected
    pub flags: u32,
}

impl Particle {
    pub fn new(position: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
            flags: 0,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.flags & PARTICLE_SELECTED != 0
    }
}

/// Elastic, breakable link between two particles (by index)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub i1: usize,
    pub i2: usize,
    /// Length at which the beam exerts no force (m)
    pub rest_length: f32,
    /// Bitflags: bit 0 = traversed, bit 1 = followed, bit 2 = broken
    pub flags: u32,
}

/// Behavioral zone of a beam for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeamState {
    Intact,
    Deformed,
    Broken,
}

impl Beam {
    pub fn new(i1: usize, i2: usize, rest_length: f32) -> Self {
        Self {
            i1,
            i2,
            rest_length,
            flags: 0,
        }
    }

    pub fn is_broken(&self) -> bool {
        self.flags & BEAM_BROKEN != 0
    }

    /// Zone the beam falls into at the given dilatation (rest length - current length).
    /// Breaking applies to the magnitude, so over-stretching and over-compression both
    /// break. Yielding only happens under compression, where it shortens the rest length.
    pub fn classify(&self, dilatation: f32, config: &PhysicsConfig) -> BeamState {
        if self.is_broken() || dilatation.abs() > config.break_threshold {
            BeamState::Broken
        } else if dilatation > config.deform_threshold {
            BeamState::Deformed
        } else {
            BeamState::Intact
        }
    }
}

/// Directional force generator mounted between two particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thruster {
    pub i1: usize,
    pub i2: usize,
    /// Thrust (N)
    pub force: f32,
    /// Control bits that fire this thruster
    pub controlled_by: u8,
}

impl Thruster {
    pub fn is_active(&self, controls: u8) -> bool {
        self.controlled_by & controls != 0
    }

    pub fn is_back(&self) -> bool {
        self.controlled_by & THRUSTER_BACK != 0
    }
}
