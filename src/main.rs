use bevy::prelude::*;
use softcraft_core::{PhysicsConfig, Structure};
use softcraft_physics::procgen;
use softcraft_render::CraftRenderPlugin;
use softcraft_sim::{CraftSimPlugin, CraftState};
use std::path::PathBuf;

/// Load the model named on the command line, falling back to the built-in craft
fn initial_structure(model: Option<&PathBuf>) -> Structure {
    if let Some(path) = model {
        match softcraft_storage::load_structure(path) {
            Ok(structure) => return structure,
            Err(e) => warn!("Failed to load {}: {e}, using the default craft", path.display()),
        }
    }
    procgen::default_craft().unwrap_or_else(|e| {
        error!("Failed to build the default craft: {e}");
        Structure::new()
    })
}

fn main() {
    let model = std::env::args().nth(1).map(PathBuf::from);

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "softcraft".into(),
            resolution: (1280.0, 720.0).into(),
            ..default()
        }),
        ..default()
    }));

    // Loaded after DefaultPlugins so load warnings reach the log
    let mut craft = CraftState::new(initial_structure(model.as_ref()), PhysicsConfig::default());
    craft.model_path = model;

    app.insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.02)))
        .insert_resource(craft)
        .add_plugins(CraftSimPlugin)
        .add_plugins(CraftRenderPlugin)
        .run();
}
