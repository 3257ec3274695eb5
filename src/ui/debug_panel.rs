use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::driver::DriverConfig;
use crate::parallax::anchor::{BufferTile, ParallaxAnchor};
use crate::parallax::config::ParallaxConfig;

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the parallax inspector panel using egui.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    camera_query: Query<&Transform, With<Camera2d>>,
    anchor_query: Query<(&ParallaxAnchor, &Transform), Without<Camera2d>>,
    tiles: Query<&BufferTile>,
    parallax: Option<Res<ParallaxConfig>>,
    driver: Option<Res<DriverConfig>>,
    diagnostics: Res<DiagnosticsStore>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Parallax debug")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .default_width(240.0)
        .show(ctx, |ui| {
            if let Some(fps) = diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(|d| d.smoothed())
            {
                ui.label(format!("FPS: {fps:.0}"));
            }

            if let Ok(camera_tf) = camera_query.single() {
                ui.label(format!(
                    "camera: {:.1}, {:.1}",
                    camera_tf.translation.x, camera_tf.translation.y
                ));
            }

            if let Ok((anchor, anchor_tf)) = anchor_query.single() {
                ui.label(format!(
                    "anchor: {:.1}, {:.1}",
                    anchor_tf.translation.x, anchor_tf.translation.y
                ));
                ui.label(format!(
                    "origin: {:.1}, {:.1}",
                    anchor.start_position.x, anchor.start_position.y
                ));
                ui.label(format!(
                    "tile: {:.1} x {:.1}",
                    anchor.tile_size.x, anchor.tile_size.y
                ));
            }
            ui.label(format!("buffer tiles: {}", tiles.iter().count()));

            if let Some(p) = parallax {
                ui.separator();
                ui.label(format!(
                    "scroll h/v: {} / {}",
                    p.scroll_horizontal, p.scroll_vertical
                ));
                ui.label(format!("movement offset: {}", p.movement_offset));
            }
            if let Some(d) = driver {
                ui.label(format!(
                    "driver: {} ({}, {})",
                    if d.auto_scroll { "auto" } else { "WASD" },
                    d.speed_x,
                    d.speed_y
                ));
            }
        });
    Ok(())
}
