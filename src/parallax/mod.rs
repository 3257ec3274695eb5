pub mod anchor;
pub mod buffers;
pub mod config;
pub mod motion;
pub mod scroll;

use bevy::prelude::*;

use crate::sets::GameSet;
use crate::settings::AppState;

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                buffers::spawn_buffer_tiles,
                scroll::parallax_scroll,
                scroll::position_buffer_tiles,
            )
                .chain()
                .in_set(GameSet::Parallax)
                .run_if(in_state(AppState::Ready)),
        );
    }
}
