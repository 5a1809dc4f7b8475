use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use softcraft_sim::{CraftState, PointerEvent};

/// Marker for the camera that follows the craft
#[derive(Component)]
pub struct CraftCamera {
    /// How quickly the camera catches up with the craft, per second
    pub follow_rate: f32,
}

impl Default for CraftCamera {
    fn default() -> Self {
        Self { follow_rate: 4.0 }
    }
}

/// World height visible on screen, in meters
const VIEW_HEIGHT: f32 = 8.0;

/// Spawn the 2D camera centred on the craft
pub fn spawn_camera(mut commands: Commands, craft: Res<CraftState>) {
    let center = craft
        .structure
        .particle_center()
        .map(Vec2::from)
        .unwrap_or(Vec2::ZERO);

    info!("Camera spawned at ({:.2}, {:.2})", center.x, center.y);

    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        },
        Transform::from_translation(center.extend(0.0)),
        CraftCamera::default(),
    ));
}

/// Ease the camera towards the craft's particle center
pub fn follow_system(
    craft: Res<CraftState>,
    time: Res<Time>,
    mut camera_query: Query<(&mut Transform, &CraftCamera)>,
) {
    let Some(center) = craft.structure.particle_center() else {
        return;
    };
    let Ok((mut transform, cam)) = camera_query.get_single_mut() else {
        return;
    };
    let target = Vec2::from(center).extend(transform.translation.z);
    let t = (cam.follow_rate * time.delta_secs()).min(1.0);
    transform.translation = transform.translation.lerp(target, t);
}

/// Turn left mouse button activity into world-space pointer events
pub fn pointer_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<CraftCamera>>,
    mut pointer: EventWriter<PointerEvent>,
) {
    if mouse.just_released(MouseButton::Left) {
        pointer.send(PointerEvent::Release);
        return;
    }
    if !mouse.pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_gtf)) = camera_query.get_single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(cam_gtf, cursor_pos) else {
        return;
    };

    let point = world.into();
    if mouse.just_pressed(MouseButton::Left) {
        pointer.send(PointerEvent::Grab { point });
    } else {
        pointer.send(PointerEvent::Drag { point });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_conversion() {
        let craft_point = softcraft_core::Vec2::new(1.5, -2.25);
        let world = Vec2::from(craft_point);
        assert_eq!(world, Vec2::new(1.5, -2.25));
        assert_eq!(softcraft_core::Vec2::from(world), craft_point);
    }
}
