pub mod texture;

use bevy::prelude::*;

use crate::parallax::anchor::ParallaxAnchor;
use crate::settings::AppState;

// Behind anything else the harness might draw.
const BACKDROP_Z: f32 = -10.0;

/// Generated backdrop parameters, from the validated settings asset.
#[derive(Resource, Debug, Clone)]
pub struct BackdropConfig {
    pub size_px: u32,
    pub seed: u32,
    pub star_count: u32,
}

pub struct BackdropPlugin;

impl Plugin for BackdropPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Ready), spawn_backdrop);
    }
}

/// Spawn the anchor sprite carrying the generated texture. The parallax
/// systems pick it up from here and build the buffer tiles around it.
fn spawn_backdrop(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    config: Res<BackdropConfig>,
) {
    let handle = images.add(texture::generate_backdrop(&config));
    commands.spawn((
        ParallaxAnchor::default(),
        Sprite::from_image(handle),
        Transform::from_xyz(0.0, 0.0, BACKDROP_Z),
    ));
    info!(
        "Spawned generated backdrop ({}px tile, seed {})",
        config.size_px, config.seed
    );
}
