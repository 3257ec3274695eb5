use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::reflect::TypePath;
use thiserror::Error;

use super::def::SettingsAsset;

#[derive(Debug, Error)]
pub enum SettingsLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Loads `*.settings.ron` files into a [`SettingsAsset`].
#[derive(Default, TypePath)]
pub struct SettingsLoader;

impl AssetLoader for SettingsLoader {
    type Asset = SettingsAsset;
    type Settings = ();
    type Error = SettingsLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let asset = ron::de::from_bytes::<SettingsAsset>(&bytes)?;
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        &["settings.ron"]
    }
}
