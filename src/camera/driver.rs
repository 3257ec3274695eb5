use bevy::prelude::*;

/// Manual camera driver configuration, from the validated settings asset.
#[derive(Resource, Debug, Clone)]
pub struct DriverConfig {
    /// When true the camera moves on its own; when false it is driven with
    /// the W/A/S/D keys.
    pub auto_scroll: bool,
    pub speed_x: f32,
    pub speed_y: f32,
}

/// Move the camera to exercise the parallax effect.
///
/// Steps are per frame, not time-scaled, so the drift rate tracks the frame
/// rate. Each axis resolves to a two-way exclusive choice when both of its
/// keys are held: W wins over S, A wins over D.
pub fn drive_camera(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<DriverConfig>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    if config.auto_scroll {
        transform.translation.x += config.speed_x;
        transform.translation.y += config.speed_y;
        return;
    }

    if keys.pressed(KeyCode::KeyW) {
        transform.translation.y += config.speed_y;
    } else if keys.pressed(KeyCode::KeyS) {
        transform.translation.y -= config.speed_y;
    }

    if keys.pressed(KeyCode::KeyA) {
        transform.translation.x -= config.speed_x;
    } else if keys.pressed(KeyCode::KeyD) {
        transform.translation.x += config.speed_x;
    }
}
