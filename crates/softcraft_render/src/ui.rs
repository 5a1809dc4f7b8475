use bevy::prelude::*;
use softcraft_core::{THRUSTER_BACK, THRUSTER_FRONT, THRUSTER_LEFT, THRUSTER_RIGHT};
use softcraft_sim::CraftState;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("softcraft"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(0.0, 1.0, 0.4, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Active controls as a short label, e.g. "BACK+LEFT"
fn controls_label(controls: u8, turbo: bool) -> String {
    let names = [
        (THRUSTER_BACK, "BACK"),
        (THRUSTER_FRONT, "FRONT"),
        (THRUSTER_LEFT, "LEFT"),
        (THRUSTER_RIGHT, "RIGHT"),
    ];
    let mut active: Vec<&str> = names
        .iter()
        .filter(|(bit, _)| controls & bit != 0)
        .map(|(_, name)| *name)
        .collect();
    if turbo {
        active.push("TURBO");
    }
    if active.is_empty() {
        "-".to_string()
    } else {
        active.join("+")
    }
}

pub fn update_hud(craft: Res<CraftState>, mut hud_query: Query<&mut Text, With<HudText>>) {
    if !craft.is_changed() {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let s = &craft.structure;
    let mut lines = vec![
        format!(
            "t = {:.2} s (tick {}){}",
            craft.elapsed,
            craft.tick,
            if craft.paused { "  PAUSED" } else { "" }
        ),
        format!(
            "particles {} | beams {}/{} | thrusters {}",
            s.particle_count(),
            s.intact_beam_count(),
            s.beam_count(),
            s.thruster_count()
        ),
        format!("controls {}", controls_label(craft.input.controls, craft.input.turbo)),
    ];
    if let Some(i) = craft.input.grabbed {
        lines.push(format!("holding particle {i}"));
    }
    lines.push(String::new());
    lines.push("arrows thrust | shift turbo | space pause | drag to pull".to_string());
    lines.push("F5 save model | F9 reload | F6 snapshot | F10 load snapshot".to_string());

    **text = lines.join("\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_label() {
        assert_eq!(controls_label(0, false), "-");
        assert_eq!(controls_label(THRUSTER_BACK | THRUSTER_LEFT, false), "BACK+LEFT");
        assert_eq!(controls_label(THRUSTER_BACK, true), "BACK+TURBO");
    }
}
