pub mod debug_hud;
pub mod debug_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::sets::GameSet;
use crate::settings::AppState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<debug_panel::DebugUiState>()
            .add_systems(OnEnter(AppState::Ready), debug_hud::spawn_debug_hud)
            .add_systems(
                Update,
                (debug_panel::toggle_debug_panel, debug_hud::update_debug_hud)
                    .in_set(GameSet::Ui)
                    .run_if(in_state(AppState::Ready)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                debug_panel::draw_debug_panel.run_if(in_state(AppState::Ready)),
            );
    }
}
