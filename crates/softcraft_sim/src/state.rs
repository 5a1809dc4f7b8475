use bevy::prelude::*;
use softcraft_core::{CraftError, InputState, PhysicsConfig, Structure, Vec2, PARTICLE_SELECTED};
use softcraft_physics::{interaction, simulate, StepReport};
use softcraft_storage::{CraftSnapshot, StorageError};
use std::path::{Path, PathBuf};

/// Model file used by save/reload when the app was started without one
pub const DEFAULT_MODEL_PATH: &str = "craft.txt";

/// The simulated craft and its clock, tracked as a Bevy Resource
#[derive(Resource)]
pub struct CraftState {
    pub structure: Structure,
    pub input: InputState,
    pub config: PhysicsConfig,
    /// Whether simulation is paused
    pub paused: bool,
    /// Fixed steps taken since start or last reload
    pub tick: u64,
    /// Simulated seconds since start or last reload
    pub elapsed: f64,
    /// Text model backing save/reload
    pub model_path: Option<PathBuf>,
}

impl CraftState {
    pub fn new(structure: Structure, config: PhysicsConfig) -> Self {
        Self {
            structure,
            input: InputState::default(),
            config,
            paused: false,
            tick: 0,
            elapsed: 0.0,
            model_path: None,
        }
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Advance one fixed tick. Does nothing while paused.
    pub fn step(&mut self) -> Result<StepReport, CraftError> {
        if self.paused {
            return Ok(StepReport::default());
        }

        let dt = self.config.tick_seconds;
        let report = simulate(&mut self.structure, &self.input, &self.config, dt)?;
        self.tick += 1;
        self.elapsed += f64::from(dt);

        if !report.broken.is_empty() {
            info!(
                "tick {}: {} beam(s) broke, {}/{} intact",
                self.tick,
                report.broken.len(),
                self.structure.intact_beam_count(),
                self.structure.beam_count()
            );
        }
        Ok(report)
    }

    pub fn grab(&mut self, point: Vec2) -> Result<usize, CraftError> {
        interaction::grab(&mut self.input, &mut self.structure, point)
    }

    pub fn drag(&mut self, point: Vec2) {
        interaction::drag(&mut self.input, &self.structure, point);
    }

    pub fn release(&mut self) {
        interaction::release(&mut self.input, &mut self.structure);
    }

    pub fn model_path(&self) -> &Path {
        self.model_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_MODEL_PATH))
    }

    /// Write the structure to the model path, which later reloads read back
    pub fn save_model(&mut self) -> Result<PathBuf, StorageError> {
        let path = self.model_path().to_path_buf();
        softcraft_storage::save_structure(&self.structure, &path)?;
        self.model_path = Some(path.clone());
        Ok(path)
    }

    /// Replace the structure with the model file, restarting the clock.
    /// On failure the current structure is kept.
    pub fn reload_model(&mut self) -> Result<(), StorageError> {
        let structure = softcraft_storage::load_structure(self.model_path())?;
        self.replace_structure(structure);
        self.tick = 0;
        self.elapsed = 0.0;
        Ok(())
    }

    pub fn snapshot(&self) -> CraftSnapshot {
        CraftSnapshot::capture(&self.structure, &self.config, self.tick, self.elapsed)
    }

    /// Resume from a snapshot, including its clock and physics configuration
    pub fn restore(&mut self, snapshot: &CraftSnapshot) -> Result<(), StorageError> {
        let structure = snapshot.restore()?;
        snapshot.config.validate()?;
        self.replace_structure(structure);
        self.config = snapshot.config;
        self.tick = snapshot.tick;
        self.elapsed = snapshot.elapsed;
        Ok(())
    }

    /// Swap in a new structure with nothing held. Selection marks saved with it are dropped.
    fn replace_structure(&mut self, mut structure: Structure) {
        self.release();
        for p in structure.particles_mut() {
            p.flags &= !PARTICLE_SELECTED;
        }
        self.structure = structure;
    }
}
