//! Settings groups and their defaults.
//!
//! Values only; per-field metadata (labels, help text, ranges) lives in the
//! [`descriptor`](crate::descriptor) side-table.

use serde::{Deserialize, Serialize};

use crate::scene::Scene;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneControls {
    pub current_scene: Scene,
    /// Present every second vertical blank instead of every one.
    pub double_sync_interval: bool,
}

impl Default for SceneControls {
    fn default() -> Self {
        Self {
            current_scene: Scene::Terrain,
            double_sync_interval: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectionalLightControls {
    pub enable_ambient_lighting: bool,
    pub enable_directional_light: bool,
    pub direction: [f32; 3],
    pub color: [f32; 3],
}

impl Default for DirectionalLightControls {
    fn default() -> Self {
        Self {
            enable_ambient_lighting: true,
            enable_directional_light: true,
            direction: [0.57735, -0.57735, 0.57735],
            color: [0.5, 0.5, 0.5],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointLightControls {
    pub enable_point_light: bool,
    pub enable_point_light_anim: bool,
    pub color: [f32; 3],
    pub constant_attenuation: f32,
    pub linear_attenuation: f32,
    pub quadratic_attenuation: f32,
    pub range: f32,
}

impl Default for PointLightControls {
    fn default() -> Self {
        Self {
            enable_point_light: true,
            enable_point_light_anim: true,
            color: [0.7, 0.7, 0.7],
            constant_attenuation: 1.0,
            linear_attenuation: 0.08,
            quadratic_attenuation: 0.0,
            range: 30.0,
        }
    }
}

impl PointLightControls {
    /// (constant, linear, quadratic)
    pub fn attenuation(&self) -> [f32; 3] {
        [self.constant_attenuation, self.linear_attenuation, self.quadratic_attenuation]
    }
}

/// Spot light controls. `inner_angle_degrees <= outer_angle_degrees` is expected
/// by the lighting model but not enforced here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpotLightControls {
    pub enable_spot_light: bool,
    pub enable_spot_light_anim: bool,
    pub color: [f32; 3],
    pub range: f32,
    pub inner_angle_degrees: f32,
    pub outer_angle_degrees: f32,
    pub cone_falloff: f32,
}

impl Default for SpotLightControls {
    fn default() -> Self {
        Self {
            enable_spot_light: true,
            enable_spot_light_anim: true,
            color: [0.7, 0.7, 0.0],
            range: 30.0,
            inner_angle_degrees: 20.0,
            outer_angle_degrees: 50.0,
            cone_falloff: 0.60,
        }
    }
}

/// All tunable parameters of the lighting demo. One instance per running demo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightingSettings {
    pub scene: SceneControls,
    pub directional: DirectionalLightControls,
    pub point: PointLightControls,
    pub spot: SpotLightControls,
}

impl LightingSettings {
    pub fn vsync_intervals(&self) -> u32 {
        if self.scene.double_sync_interval {
            2
        } else {
            1
        }
    }
}
