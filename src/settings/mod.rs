pub mod def;
pub mod loader;

use bevy::prelude::*;
use thiserror::Error;

use crate::backdrop::BackdropConfig;
use crate::camera::driver::DriverConfig;
use crate::parallax::config::ParallaxConfig;
use def::SettingsAsset;
use loader::SettingsLoader;

/// Application state: Loading waits for the settings asset, Ready runs the
/// effect and the test harness.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("pixels_per_unit must be positive, got {0}")]
    NonPositivePixelsPerUnit(f32),
    #[error("backdrop size_px must be positive")]
    ZeroBackdropSize,
}

/// Handle for the settings asset while it loads.
#[derive(Resource)]
struct LoadingSettings(Handle<SettingsAsset>);

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<SettingsAsset>()
            .register_asset_loader(SettingsLoader)
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)));
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let settings = asset_server.load::<SettingsAsset>("data/backdrift.settings.ron");
    commands.insert_resource(LoadingSettings(settings));
}

fn check_loading(
    mut commands: Commands,
    loading: Res<LoadingSettings>,
    settings_assets: Res<Assets<SettingsAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) -> Result {
    let Some(settings) = settings_assets.get(&loading.0) else {
        return Ok(()); // not loaded yet
    };

    let (parallax, driver, backdrop) = validate(settings)?;
    commands.insert_resource(parallax);
    commands.insert_resource(driver);
    commands.insert_resource(backdrop);

    commands.remove_resource::<LoadingSettings>();
    next_state.set(AppState::Ready);
    info!("Settings loaded and validated, entering Ready state");
    Ok(())
}

/// Turn the raw asset into typed config resources.
///
/// `movement_offset` is clamped into `[0, 1]` here so the per-frame motion
/// math never has to range-check it. Non-positive scale factors are fatal:
/// the effect cannot produce a sensible tile size from them.
fn validate(
    settings: &SettingsAsset,
) -> Result<(ParallaxConfig, DriverConfig, BackdropConfig), SettingsError> {
    let p = &settings.parallax;
    if p.pixels_per_unit <= 0.0 {
        return Err(SettingsError::NonPositivePixelsPerUnit(p.pixels_per_unit));
    }
    if settings.backdrop.size_px == 0 {
        return Err(SettingsError::ZeroBackdropSize);
    }

    let movement_offset = if (0.0..=1.0).contains(&p.movement_offset) {
        p.movement_offset
    } else {
        let clamped = p.movement_offset.clamp(0.0, 1.0);
        warn!(
            "movement_offset {} outside [0, 1], clamped to {}",
            p.movement_offset, clamped
        );
        clamped
    };

    Ok((
        ParallaxConfig {
            scroll_horizontal: p.scroll_horizontal,
            scroll_vertical: p.scroll_vertical,
            movement_offset,
            pixels_per_unit: p.pixels_per_unit,
        },
        DriverConfig {
            auto_scroll: settings.driver.auto_scroll,
            speed_x: settings.driver.speed_x,
            speed_y: settings.driver.speed_y,
        },
        BackdropConfig {
            size_px: settings.backdrop.size_px,
            seed: settings.backdrop.seed,
            star_count: settings.backdrop.star_count,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::def::{BackdropDef, DriverDef, ParallaxDef};

    fn asset_with_offset(movement_offset: f32) -> SettingsAsset {
        SettingsAsset {
            parallax: ParallaxDef {
                movement_offset,
                ..ParallaxDef::default()
            },
            driver: DriverDef::default(),
            backdrop: BackdropDef::default(),
        }
    }

    #[test]
    fn movement_offset_in_range_passes_through() {
        let (parallax, _, _) = validate(&asset_with_offset(0.3)).unwrap();
        assert_eq!(parallax.movement_offset, 0.3);
    }

    #[test]
    fn movement_offset_clamped_to_unit_range() {
        let (parallax, _, _) = validate(&asset_with_offset(1.7)).unwrap();
        assert_eq!(parallax.movement_offset, 1.0);

        let (parallax, _, _) = validate(&asset_with_offset(-0.4)).unwrap();
        assert_eq!(parallax.movement_offset, 0.0);
    }

    #[test]
    fn non_positive_pixels_per_unit_rejected() {
        let mut asset = asset_with_offset(0.3);
        asset.parallax.pixels_per_unit = 0.0;
        assert!(matches!(
            validate(&asset),
            Err(SettingsError::NonPositivePixelsPerUnit(_))
        ));
    }

    #[test]
    fn zero_backdrop_size_rejected() {
        let mut asset = asset_with_offset(0.3);
        asset.backdrop.size_px = 0;
        assert!(matches!(validate(&asset), Err(SettingsError::ZeroBackdropSize)));
    }

    #[test]
    fn ron_defaults_cover_missing_sections() {
        let asset: SettingsAsset = ron::from_str("(parallax: (), driver: (), backdrop: ())").unwrap();
        assert!(asset.parallax.scroll_horizontal);
        assert!(asset.parallax.scroll_vertical);
        assert_eq!(asset.parallax.movement_offset, 0.3);
    }
}
