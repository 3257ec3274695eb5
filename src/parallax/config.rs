use bevy::prelude::*;

/// Effect configuration, built once from the validated settings asset and
/// immutable for the lifetime of the effect.
#[derive(Resource, Debug, Clone)]
pub struct ParallaxConfig {
    /// Scroll along the x axis.
    pub scroll_horizontal: bool,
    /// Scroll along the y axis.
    pub scroll_vertical: bool,
    /// Fraction of the camera's displacement applied to the backdrop.
    /// 0 leaves the backdrop frozen, 1 locks it to the camera. Clamped to
    /// `[0, 1]` at settings validation, never re-checked per frame.
    pub movement_offset: f32,
    /// Scale from texture pixels to world units when sizing the tile grid.
    pub pixels_per_unit: f32,
}
