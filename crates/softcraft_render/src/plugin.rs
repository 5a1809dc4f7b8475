use bevy::prelude::*;

use super::camera;
use super::draw;
use super::ui;

/// Render plugin: follow camera, gizmo drawing, HUD and mouse picking
pub struct CraftRenderPlugin;

impl Plugin for CraftRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (camera::spawn_camera, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    camera::pointer_system,
                    camera::follow_system,
                    draw::draw_craft.after(camera::follow_system),
                    ui::update_hud,
                ),
            );
    }
}
