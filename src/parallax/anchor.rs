use bevy::prelude::*;

/// The backdrop sprite the effect is attached to.
///
/// `tile_size` starts at `Vec2::ZERO` and is resolved once from the sprite's
/// image the first frame it is available; it is never recomputed after that.
/// `start_position` is the receding reference origin the per-frame offset is
/// computed against, shifted one tile dimension at a time by the wraparound
/// rule.
#[derive(Component, Debug, Default)]
pub struct ParallaxAnchor {
    pub tile_size: Vec2,
    pub start_position: Vec2,
    pub initialized: bool,
}

/// A duplicate tile holding its fixed offset from the anchor. Buffer tiles
/// are independent entities, repositioned to `anchor + offset` every frame
/// rather than parented under the anchor.
#[derive(Component, Debug)]
pub struct BufferTile {
    pub anchor: Entity,
    pub offset: Vec2,
}
