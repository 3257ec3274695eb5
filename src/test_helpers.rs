pub mod fixtures {
    use bevy::asset::RenderAssetUsages;
    use bevy::prelude::*;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

    use crate::camera::driver::DriverConfig;
    use crate::parallax::config::ParallaxConfig;

    pub fn test_parallax_config() -> ParallaxConfig {
        ParallaxConfig {
            scroll_horizontal: true,
            scroll_vertical: true,
            movement_offset: 0.3,
            pixels_per_unit: 1.0,
        }
    }

    pub fn test_driver_config() -> DriverConfig {
        DriverConfig {
            auto_scroll: true,
            speed_x: 2.0,
            speed_y: 0.0,
        }
    }

    /// A plain white image for anchors under test.
    pub fn test_image(width: u32, height: u32) -> Image {
        Image::new_fill(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &[255, 255, 255, 255],
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
        )
    }

    /// Create a minimal headless App with the resources the parallax and
    /// driver systems need. Systems under test are added by each test.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()));
        app.init_asset::<Image>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(test_parallax_config());
        app.insert_resource(test_driver_config());
        app
    }
}
