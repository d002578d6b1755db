//! Demo scene selection.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Which demo scene is rendered. Closed set; index order matches the GPU constant buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scene {
    #[default]
    Terrain,
    Skull,
}

impl Scene {
    pub const ALL: [Scene; 2] = [Scene::Terrain, Scene::Skull];

    pub fn label(self) -> &'static str {
        match self {
            Scene::Terrain => "Terrain",
            Scene::Skull => "Skull",
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Scene::Terrain => 0,
            Scene::Skull => 1,
        }
    }

    /// Camera position applied when the scene becomes current.
    pub fn camera_preset(self) -> [f32; 3] {
        match self {
            Scene::Terrain => [0.0, 100.0, -180.0],
            Scene::Skull => [0.0, 25.0, -25.0],
        }
    }
}

impl TryFrom<i32> for Scene {
    type Error = SettingsError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Scene::ALL
            .into_iter()
            .find(|s| s.index() == index)
            .ok_or_else(|| SettingsError::InvalidScene(index.to_string()))
    }
}

impl TryFrom<&str> for Scene {
    type Error = SettingsError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        Scene::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .ok_or_else(|| SettingsError::InvalidScene(label.to_string()))
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_terrain() {
        assert_eq!(Scene::default(), Scene::Terrain);
    }

    #[test]
    fn only_two_scenes_exist() {
        assert_eq!(Scene::try_from(0).unwrap(), Scene::Terrain);
        assert_eq!(Scene::try_from(1).unwrap(), Scene::Skull);
        assert!(matches!(Scene::try_from(2), Err(SettingsError::InvalidScene(_))));
        assert!(matches!(Scene::try_from(-1), Err(SettingsError::InvalidScene(_))));
        assert_eq!(Scene::try_from("Skull").unwrap(), Scene::Skull);
        assert!(Scene::try_from("Forest").is_err());
    }

    #[test]
    fn serde_rejects_unknown_variant() {
        let parsed: Scene = serde_json::from_str("\"Skull\"").unwrap();
        assert_eq!(parsed, Scene::Skull);
        assert!(serde_json::from_str::<Scene>("\"Forest\"").is_err());
    }

    #[test]
    fn labels_and_serde_agree_on_case() {
        for scene in Scene::ALL {
            let json = format!("\"{}\"", scene.label());
            assert_eq!(serde_json::from_str::<Scene>(&json).unwrap(), scene);
            assert_eq!(Scene::try_from(scene.label()).unwrap(), scene);
        }
        assert!(Scene::try_from("skull").is_err());
        assert!(serde_json::from_str::<Scene>("\"skull\"").is_err());
    }
}
