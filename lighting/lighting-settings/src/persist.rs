//! JSON persistence of settings values. Metadata is never written.

use std::path::Path;

use log::info;

use crate::descriptor::SettingKey;
use crate::error::{Result, SettingsError};
use crate::schema::LightingSettings;

impl LightingSettings {
    /// First field holding a NaN or infinite float, if any.
    pub fn first_non_finite(&self) -> Option<SettingKey> {
        SettingKey::ALL.into_iter().find(|key| !self.get(*key).is_finite())
    }

    /// Fails with [`SettingsError::NonFinite`] rather than writing `null`, which could not be loaded back.
    pub fn to_json_string(&self) -> Result<String> {
        if let Some(key) = self.first_non_finite() {
            return Err(SettingsError::NonFinite(key));
        }
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Missing fields take their defaults; unknown fields are an error.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json_string()?;
        std::fs::write(path, text).map_err(|source| SettingsError::Io { path: path.to_path_buf(), source })?;
        info!("saved settings to {}", path.display());
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io { path: path.to_path_buf(), source })?;
        let settings = Self::from_json_str(&text)?;
        info!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lighting.json");
        let mut settings = LightingSettings::default();
        settings.scene.current_scene = Scene::Skull;
        settings.spot.inner_angle_degrees = 35.0;
        settings.save_json(&path).unwrap();
        assert_eq!(LightingSettings::load_json(&path).unwrap(), settings);
    }

    #[test]
    fn partial_document_fills_defaults() {
        let loaded = LightingSettings::from_json_str(r#"{ "point": { "range": 12.0 } }"#).unwrap();
        assert_eq!(loaded.point.range, 12.0);
        assert_eq!(loaded.point.linear_attenuation, 0.08);
        assert_eq!(loaded.spot, LightingSettings::default().spot);
    }

    #[test]
    fn rejects_unknown_fields_and_scenes() {
        assert!(matches!(
            LightingSettings::from_json_str(r#"{ "auto_exposure": true }"#),
            Err(SettingsError::Parse(_))
        ));
        assert!(LightingSettings::from_json_str(r#"{ "scene": { "current_scene": "Forest" } }"#).is_err());
    }

    #[test]
    fn non_finite_values_are_not_saved() {
        let mut settings = LightingSettings::default();
        settings.point.range = f32::INFINITY;
        assert!(matches!(
            settings.to_json_string(),
            Err(SettingsError::NonFinite(SettingKey::PointLightRange))
        ));

        settings.point.range = 30.0;
        settings.spot.color = [0.7, f32::NAN, 0.0];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lighting.json");
        assert!(matches!(
            settings.save_json(&path),
            Err(SettingsError::NonFinite(SettingKey::SpotLightColor))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn saved_defaults_load_back() {
        let text = LightingSettings::default().to_json_string().unwrap();
        assert_eq!(LightingSettings::from_json_str(&text).unwrap(), LightingSettings::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LightingSettings::load_json(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
