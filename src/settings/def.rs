use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

/// Asset loaded from backdrift.settings.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct SettingsAsset {
    pub parallax: ParallaxDef,
    pub driver: DriverDef,
    pub backdrop: BackdropDef,
}

/// Parallax effect section. Fields mirror the in-editor surface of the
/// effect: which axes scroll and how strongly the backdrop follows the
/// camera (0 = frozen, 1 = locked to the camera).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParallaxDef {
    pub scroll_horizontal: bool,
    pub scroll_vertical: bool,
    pub movement_offset: f32,
    pub pixels_per_unit: f32,
}

impl Default for ParallaxDef {
    fn default() -> Self {
        Self {
            scroll_horizontal: true,
            scroll_vertical: true,
            movement_offset: 0.3,
            pixels_per_unit: 1.0,
        }
    }
}

/// Manual camera driver section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DriverDef {
    pub auto_scroll: bool,
    pub speed_x: f32,
    pub speed_y: f32,
}

impl Default for DriverDef {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            speed_x: 1.5,
            speed_y: 0.5,
        }
    }
}

/// Generated backdrop texture section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackdropDef {
    pub size_px: u32,
    pub seed: u32,
    pub star_count: u32,
}

impl Default for BackdropDef {
    fn default() -> Self {
        Self {
            size_px: 512,
            seed: 7,
            star_count: 220,
        }
    }
}
