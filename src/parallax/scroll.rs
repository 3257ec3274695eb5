use bevy::prelude::*;

use super::anchor::{BufferTile, ParallaxAnchor};
use super::config::ParallaxConfig;
use super::motion;

/// Scroll initialized anchors against the camera.
///
/// Runs the motion step once per anchor per frame and commits the new
/// position and start origin. Only x and y are written; the z set at spawn
/// passes through so backdrop layering is unaffected.
pub fn parallax_scroll(
    config: Res<ParallaxConfig>,
    camera_query: Query<&Transform, With<Camera2d>>,
    mut anchor_query: Query<(&mut ParallaxAnchor, &mut Transform), Without<Camera2d>>,
) {
    let Ok(camera_tf) = camera_query.single() else {
        return;
    };
    let camera = camera_tf.translation.truncate();

    for (mut anchor, mut transform) in &mut anchor_query {
        if !anchor.initialized {
            continue;
        }
        let step = motion::advance(
            camera,
            transform.translation.truncate(),
            anchor.start_position,
            anchor.tile_size,
            &config,
        );
        transform.translation.x = step.position.x;
        transform.translation.y = step.position.y;
        anchor.start_position = step.start_position;
    }
}

/// Keep each buffer tile at its fixed offset from its anchor.
pub fn position_buffer_tiles(
    anchor_query: Query<&Transform, (With<ParallaxAnchor>, Without<BufferTile>)>,
    mut tile_query: Query<(&BufferTile, &mut Transform), Without<ParallaxAnchor>>,
) {
    for (tile, mut transform) in &mut tile_query {
        let Ok(anchor_tf) = anchor_query.get(tile.anchor) else {
            continue;
        };
        transform.translation.x = anchor_tf.translation.x + tile.offset.x;
        transform.translation.y = anchor_tf.translation.y + tile.offset.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallax::buffers::spawn_buffer_tiles;
    use crate::test_helpers::fixtures;

    #[test]
    fn buffers_spawn_and_anchor_scrolls() {
        let mut app = fixtures::test_app();
        app.add_systems(
            Update,
            (spawn_buffer_tiles, parallax_scroll, position_buffer_tiles).chain(),
        );

        let image = fixtures::test_image(64, 32);
        let handle = app.world_mut().resource_mut::<Assets<Image>>().add(image);

        let camera = app
            .world_mut()
            .spawn((Camera2d, Transform::default()))
            .id();
        app.world_mut().spawn((
            ParallaxAnchor::default(),
            Sprite::from_image(handle),
            Transform::from_xyz(0.0, 0.0, -10.0),
        ));

        // First frame: buffers spawn, start origin captured at (0, 0).
        app.update();
        let tile_count = app
            .world_mut()
            .query::<&BufferTile>()
            .iter(app.world())
            .count();
        assert_eq!(tile_count, 8);

        // Move the camera one frame and scroll.
        app.world_mut()
            .entity_mut(camera)
            .get_mut::<Transform>()
            .unwrap()
            .translation
            .x = 12.0;
        app.update();

        let mut anchors = app
            .world_mut()
            .query::<(&ParallaxAnchor, &Transform)>();
        let (anchor, anchor_tf) = anchors.iter(app.world()).next().unwrap();
        assert_eq!(anchor.tile_size, Vec2::new(64.0, 32.0));
        assert_eq!(anchor_tf.translation.x, 12.0 * 0.3);
        assert_eq!(anchor_tf.translation.z, -10.0, "z passes through untouched");
    }

    #[test]
    fn buffer_tiles_trail_anchor_at_fixed_offsets() {
        let mut app = fixtures::test_app();
        app.add_systems(
            Update,
            (spawn_buffer_tiles, parallax_scroll, position_buffer_tiles).chain(),
        );

        let image = fixtures::test_image(16, 16);
        let handle = app.world_mut().resource_mut::<Assets<Image>>().add(image);

        let camera = app
            .world_mut()
            .spawn((Camera2d, Transform::default()))
            .id();
        app.world_mut().spawn((
            ParallaxAnchor::default(),
            Sprite::from_image(handle),
            Transform::default(),
        ));

        app.update();
        app.world_mut()
            .entity_mut(camera)
            .get_mut::<Transform>()
            .unwrap()
            .translation = Vec3::new(5.0, -3.0, 0.0);
        app.update();

        let mut anchors = app
            .world_mut()
            .query_filtered::<&Transform, With<ParallaxAnchor>>();
        let anchor_pos = anchors.iter(app.world()).next().unwrap().translation;

        let mut tiles = app.world_mut().query::<(&BufferTile, &Transform)>();
        for (tile, transform) in tiles.iter(app.world()) {
            assert_eq!(
                transform.translation.truncate(),
                anchor_pos.truncate() + tile.offset
            );
        }
    }

    #[test]
    fn uninitialized_anchor_does_not_scroll() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, parallax_scroll);

        app.world_mut().spawn((Camera2d, Transform::from_xyz(50.0, 0.0, 0.0)));
        app.world_mut().spawn((
            ParallaxAnchor::default(),
            Transform::from_xyz(1.0, 2.0, 0.0),
        ));

        app.update();

        let mut anchors = app
            .world_mut()
            .query_filtered::<&Transform, With<ParallaxAnchor>>();
        let pos = anchors.iter(app.world()).next().unwrap().translation;
        assert_eq!(pos, Vec3::new(1.0, 2.0, 0.0));
    }
}
