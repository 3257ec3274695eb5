use bevy::prelude::*;

/// Top-level system ordering sets for the frame loop.
///
/// Configured as a chain: Camera → Parallax → Ui. The manual camera driver
/// writes the camera transform in `Camera`, so the parallax systems in
/// `Parallax` always read this frame's camera position, never last frame's.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Camera,
    Parallax,
    Ui,
}
