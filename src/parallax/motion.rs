use bevy::prelude::*;

use super::config::ParallaxConfig;

/// Result of one frame of parallax motion.
#[derive(Debug, Clone, Copy)]
pub struct MotionStep {
    pub position: Vec2,
    pub start_position: Vec2,
}

/// Advance the backdrop one frame against the camera.
///
/// The backdrop trails the camera by `movement_offset`: its position is the
/// remembered start origin plus `camera * movement_offset`, per enabled
/// axis. A disabled axis leaves that coordinate untouched.
///
/// Wraparound: `adjusted` is where the camera appears to be once the lag is
/// applied. When it exits the tile footprint around `start`, the origin
/// shifts one tile dimension in that direction; the buffer tile already
/// sitting there covers the newly exposed area, so the tiling reads as
/// endless. The shift lands in `start_position` only; the committed
/// `position` still uses this frame's origin. At most one shift per axis
/// per frame, even if the camera jumped several tile widths.
pub fn advance(
    camera: Vec2,
    position: Vec2,
    start: Vec2,
    tile: Vec2,
    config: &ParallaxConfig,
) -> MotionStep {
    let adjusted = camera * (1.0 - config.movement_offset);
    let distance = camera * config.movement_offset;

    let x = if config.scroll_horizontal {
        start.x + distance.x
    } else {
        position.x
    };
    let y = if config.scroll_vertical {
        start.y + distance.y
    } else {
        position.y
    };

    let mut next_start = start;
    if config.scroll_horizontal {
        if adjusted.x > start.x + tile.x {
            next_start.x += tile.x;
        } else if adjusted.x < start.x - tile.x {
            next_start.x -= tile.x;
        }
    }
    if config.scroll_vertical {
        if adjusted.y > start.y + tile.y {
            next_start.y += tile.y;
        } else if adjusted.y < start.y - tile.y {
            next_start.y -= tile.y;
        }
    }

    MotionStep {
        position: Vec2::new(x, y),
        start_position: next_start,
    }
}
