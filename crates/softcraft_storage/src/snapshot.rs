use serde::{Deserialize, Serialize};
use softcraft_core::{Beam, Particle, PhysicsConfig, Structure, Thruster};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::StorageError;

/// Complete simulation state for save/load.
/// Unlike the text format this keeps velocities, yielded rest lengths and broken beams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftSnapshot {
    pub id: Uuid,
    pub tick: u64,
    /// Simulated seconds
    pub elapsed: f64,
    pub config: PhysicsConfig,
    pub particles: Vec<Particle>,
    pub beams: Vec<Beam>,
    pub thrusters: Vec<Thruster>,
}

impl CraftSnapshot {
    pub fn capture(structure: &Structure, config: &PhysicsConfig, tick: u64, elapsed: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            tick,
            elapsed,
            config: *config,
            particles: structure.particles().to_vec(),
            beams: structure.beams().to_vec(),
            thrusters: structure.thrusters().to_vec(),
        }
    }

    /// Rebuild the structure, rejecting snapshots with dangling indices or bad masses
    pub fn restore(&self) -> Result<Structure, StorageError> {
        let structure = Structure::from_parts(
            self.particles.clone(),
            self.beams.clone(),
            self.thrusters.clone(),
        )?;
        Ok(structure)
    }
}

/// Save a snapshot to disk as bincode
pub fn save_snapshot(snapshot: &CraftSnapshot, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = bincode::serialize(snapshot)?;
    fs::write(path, data)?;
    log::info!("saved snapshot {} (tick {}) to {}", snapshot.id, snapshot.tick, path.display());
    Ok(())
}

/// Load a snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<CraftSnapshot, StorageError> {
    let data = fs::read(path)?;
    let snapshot: CraftSnapshot = bincode::deserialize(&data)?;
    log::info!("loaded snapshot {} (tick {}) from {}", snapshot.id, snapshot.tick, path.display());
    Ok(snapshot)
}
