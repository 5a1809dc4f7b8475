use bevy::prelude::*;
use softcraft_core::{Vec2, THRUSTER_BACK, THRUSTER_FRONT, THRUSTER_LEFT, THRUSTER_RIGHT};
use std::path::PathBuf;
use std::time::Duration;

use super::state::CraftState;

/// Cursor activity in world space, applied in the order it was sent
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor pressed: hold the nearest particle
    Grab { point: Vec2 },
    /// Cursor moved while held
    Drag { point: Vec2 },
    /// Cursor let go
    Release,
}

/// Keys held to fire each thruster group
const CONTROL_KEYS: [(KeyCode, u8); 4] = [
    (KeyCode::ArrowUp, THRUSTER_BACK),
    (KeyCode::ArrowDown, THRUSTER_FRONT),
    (KeyCode::ArrowLeft, THRUSTER_LEFT),
    (KeyCode::ArrowRight, THRUSTER_RIGHT),
];

/// Bevy plugin for the fixed-rate craft simulation
pub struct CraftSimPlugin;

impl Plugin for CraftSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerEvent>()
            .add_systems(Startup, sync_fixed_tick)
            .add_systems(FixedUpdate, simulation_tick)
            .add_systems(
                Update,
                (
                    control_system,
                    interaction_system,
                    model_file_system,
                    snapshot_system,
                    sync_fixed_tick.after(snapshot_system),
                ),
            );
    }
}

/// Run FixedUpdate at the configured physics tick, which a restored snapshot may change
fn sync_fixed_tick(craft: Res<CraftState>, mut time: ResMut<Time<Fixed>>) {
    let tick = Duration::from_secs_f64(f64::from(craft.config.tick_seconds));
    if time.timestep() == tick || tick.is_zero() {
        return;
    }
    time.set_timestep(tick);
    info!("Fixed physics tick: {:.0} Hz", 1.0 / tick.as_secs_f64());
}

/// One physics step per fixed tick
fn simulation_tick(mut craft: ResMut<CraftState>) {
    if let Err(e) = craft.step() {
        error!("Simulation step failed: {e}");
        craft.release();
    }
}

/// Map held keys to thruster controls, Space toggles pause
fn control_system(keyboard: Res<ButtonInput<KeyCode>>, mut craft: ResMut<CraftState>) {
    let input = &mut craft.input;
    for (key, bit) in CONTROL_KEYS {
        input.set_control(bit, keyboard.pressed(key));
    }
    input.set_turbo(keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]));

    if keyboard.just_pressed(KeyCode::Space) {
        craft.paused = !craft.paused;
        info!("Simulation {}", if craft.paused { "paused" } else { "resumed" });
    }
}

/// Apply cursor events to the grab state in the order they arrived
fn interaction_system(mut craft: ResMut<CraftState>, mut pointer: EventReader<PointerEvent>) {
    for event in pointer.read() {
        match *event {
            PointerEvent::Grab { point } => match craft.grab(point) {
                Ok(index) => debug!("Grabbed particle {index}"),
                Err(e) => warn!("Nothing to grab: {e}"),
            },
            PointerEvent::Drag { point } => craft.drag(point),
            PointerEvent::Release => craft.release(),
        }
    }
}

/// Handle F5 (save) / F9 (reload) of the text model
fn model_file_system(keyboard: Res<ButtonInput<KeyCode>>, mut craft: ResMut<CraftState>) {
    if keyboard.just_pressed(KeyCode::F5) {
        match craft.save_model() {
            Ok(path) => info!("Model saved: {}", path.display()),
            Err(e) => error!("Failed to save model: {e}"),
        }
    }

    if keyboard.just_pressed(KeyCode::F9) {
        match craft.reload_model() {
            Ok(()) => info!("Model reloaded: {}", craft.model_path().display()),
            Err(e) => error!("Failed to reload {}: {e}", craft.model_path().display()),
        }
    }
}

fn saves_dir() -> PathBuf {
    PathBuf::from("saves")
}

/// Handle F6 (save) / F10 (load latest) snapshot hotkeys
fn snapshot_system(keyboard: Res<ButtonInput<KeyCode>>, mut craft: ResMut<CraftState>) {
    if keyboard.just_pressed(KeyCode::F6) {
        let snapshot = craft.snapshot();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let path = saves_dir().join(format!("snapshot_{timestamp}_{}.bin", snapshot.tick));
        match softcraft_storage::save_snapshot(&snapshot, &path) {
            Ok(()) => info!("Snapshot saved: {}", path.display()),
            Err(e) => error!("Failed to save snapshot: {e}"),
        }
    }

    if keyboard.just_pressed(KeyCode::F10) {
        let dir = saves_dir();
        let latest = std::fs::read_dir(&dir).ok().and_then(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "bin"))
                .max_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()))
                .map(|e| e.path())
        });

        let Some(path) = latest else {
            warn!("No snapshots found in {}", dir.display());
            return;
        };

        let loaded = softcraft_storage::load_snapshot(&path)
            .and_then(|snapshot| craft.restore(&snapshot));
        match loaded {
            Ok(()) => info!("Snapshot loaded: {} (tick {})", path.display(), craft.tick),
            Err(e) => error!("Failed to load snapshot: {e}"),
        }
    }
}
