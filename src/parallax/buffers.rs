use bevy::asset::LoadState;
use bevy::prelude::*;
use thiserror::Error;

use super::anchor::{BufferTile, ParallaxAnchor};
use super::config::ParallaxConfig;

#[derive(Debug, Error)]
pub enum ParallaxError {
    #[error("parallax anchor entity has no Sprite component")]
    MissingSprite,
    #[error("parallax anchor sprite has no renderable image data")]
    MissingImage,
}

/// Compass offsets for the duplicate tiles around the anchor: west/east when
/// scrolling horizontally, north/south when scrolling vertically, plus the
/// four diagonals when both axes are enabled. 0, 2 or 8 tiles.
pub fn buffer_offsets(tile: Vec2, horizontal: bool, vertical: bool) -> Vec<Vec2> {
    let mut offsets = Vec::new();
    if horizontal {
        offsets.push(Vec2::new(-tile.x, 0.0));
        offsets.push(Vec2::new(tile.x, 0.0));
    }
    if vertical {
        offsets.push(Vec2::new(0.0, tile.y));
        offsets.push(Vec2::new(0.0, -tile.y));
        if horizontal {
            offsets.push(Vec2::new(-tile.x, tile.y));
            offsets.push(Vec2::new(tile.x, tile.y));
            offsets.push(Vec2::new(-tile.x, -tile.y));
            offsets.push(Vec2::new(tile.x, -tile.y));
        }
    }
    offsets
}

/// One-shot initialization of a parallax anchor.
///
/// Waits until the anchor's image is available, then resolves the tile size
/// in world units, captures the start origin from the camera, and spawns the
/// surrounding buffer tiles. Each tile takes a value copy of the anchor's
/// `Sprite`, so the duplicates are visually indistinguishable from the
/// anchor except for position. A failed image load is a fatal configuration
/// error: proceeding would render a blank, broken backdrop.
pub fn spawn_buffer_tiles(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    config: Res<ParallaxConfig>,
    camera_query: Query<&Transform, With<Camera2d>>,
    mut anchor_query: Query<(Entity, &mut ParallaxAnchor, &Transform, &Sprite), Without<Camera2d>>,
    bare_anchors: Query<Entity, (With<ParallaxAnchor>, Without<Sprite>)>,
) -> Result {
    if !bare_anchors.is_empty() {
        return Err(ParallaxError::MissingSprite.into());
    }
    let Ok(camera_tf) = camera_query.single() else {
        return Ok(());
    };

    for (entity, mut anchor, transform, sprite) in &mut anchor_query {
        if anchor.initialized {
            continue;
        }
        let Some(image) = images.get(&sprite.image) else {
            if matches!(
                asset_server.get_load_state(&sprite.image),
                Some(LoadState::Failed(_))
            ) {
                return Err(ParallaxError::MissingImage.into());
            }
            continue; // image not loaded yet
        };

        anchor.tile_size = image.size_f32() / config.pixels_per_unit;
        anchor.start_position = camera_tf.translation.truncate();

        let offsets = buffer_offsets(
            anchor.tile_size,
            config.scroll_horizontal,
            config.scroll_vertical,
        );
        for &offset in &offsets {
            commands.spawn((
                BufferTile {
                    anchor: entity,
                    offset,
                },
                sprite.clone(),
                Transform::from_translation(transform.translation + offset.extend(0.0)),
            ));
        }
        anchor.initialized = true;

        info!(
            "Spawned {} buffer tiles ({}x{} world units per tile)",
            offsets.len(),
            anchor.tile_size.x,
            anchor.tile_size.y
        );
    }
    Ok(())
}
