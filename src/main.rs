mod backdrop;
mod camera;
mod parallax;
mod sets;
mod settings;
#[cfg(test)]
mod test_helpers;
mod ui;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::sets::GameSet;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Backdrift".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(settings::SettingsPlugin)
        .add_plugins(backdrop::BackdropPlugin)
        .add_plugins(camera::CameraPlugin)
        .add_plugins(parallax::ParallaxPlugin)
        .add_plugins(ui::UiPlugin)
        .configure_sets(
            Update,
            (GameSet::Camera, GameSet::Parallax, GameSet::Ui).chain(),
        )
        .run();
}
