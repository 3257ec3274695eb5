pub mod driver;

use bevy::prelude::*;

use crate::sets::GameSet;
use crate::settings::AppState;

const CAMERA_SCALE: f32 = 1.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            driver::drive_camera
                .in_set(GameSet::Camera)
                .run_if(in_state(AppState::Ready)),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
