use bevy::prelude::*;

use crate::parallax::anchor::ParallaxAnchor;

#[derive(Component)]
pub struct DebugHudText;

pub fn spawn_debug_hud(mut commands: Commands) {
    commands.spawn((
        DebugHudText,
        Text::new("cam 0.0, 0.0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn update_debug_hud(
    camera_query: Query<&Transform, With<Camera2d>>,
    anchor_query: Query<(&ParallaxAnchor, &Transform), Without<Camera2d>>,
    mut text_query: Query<&mut Text, With<DebugHudText>>,
) {
    let Ok(camera_tf) = camera_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let cam = camera_tf.translation;
    **text = match anchor_query.single() {
        Ok((anchor, anchor_tf)) => format!(
            "cam {:.1}, {:.1} | anchor {:.1}, {:.1} | origin {:.1}, {:.1}",
            cam.x,
            cam.y,
            anchor_tf.translation.x,
            anchor_tf.translation.y,
            anchor.start_position.x,
            anchor.start_position.y,
        ),
        Err(_) => format!("cam {:.1}, {:.1}", cam.x, cam.y),
    };
}
