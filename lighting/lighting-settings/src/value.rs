//! Dynamic, key-addressed access to settings values for the editor path.

use serde::{Deserialize, Serialize};

use crate::descriptor::SettingKey;
use crate::error::{Result, SettingsError};
use crate::scene::Scene;
use crate::schema::LightingSettings;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    Scene(Scene),
    Float(f32),
    Color([f32; 3]),
    Direction([f32; 3]),
}

impl SettingValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Scene(_) => "scene",
            SettingValue::Float(_) => "float",
            SettingValue::Color(_) => "color",
            SettingValue::Direction(_) => "direction",
        }
    }

    /// Bitwise equality for floats, so a stored NaN compares equal to itself.
    pub fn same_as(&self, other: &SettingValue) -> bool {
        fn bits(c: &[f32; 3]) -> [u32; 3] {
            c.map(f32::to_bits)
        }
        match (self, other) {
            (SettingValue::Float(a), SettingValue::Float(b)) => a.to_bits() == b.to_bits(),
            (SettingValue::Color(a), SettingValue::Color(b)) | (SettingValue::Direction(a), SettingValue::Direction(b)) => {
                bits(a) == bits(b)
            }
            (a, b) => a == b,
        }
    }

    /// False if any float component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            SettingValue::Bool(_) | SettingValue::Scene(_) => true,
            SettingValue::Float(v) => v.is_finite(),
            SettingValue::Color(c) | SettingValue::Direction(c) => c.iter().all(|ch| ch.is_finite()),
        }
    }
}

fn mismatch(key: SettingKey, expected: &'static str, found: &SettingValue) -> SettingsError {
    SettingsError::TypeMismatch { key, expected, found: found.type_name() }
}

impl LightingSettings {
    pub fn get(&self, key: SettingKey) -> SettingValue {
        use SettingKey::*;
        match key {
            CurrentScene => SettingValue::Scene(self.scene.current_scene),
            DoubleSyncInterval => SettingValue::Bool(self.scene.double_sync_interval),
            EnableAmbientLighting => SettingValue::Bool(self.directional.enable_ambient_lighting),
            EnableDirectionalLight => SettingValue::Bool(self.directional.enable_directional_light),
            DirLightDirection => SettingValue::Direction(self.directional.direction),
            DirLightColor => SettingValue::Color(self.directional.color),
            EnablePointLight => SettingValue::Bool(self.point.enable_point_light),
            EnablePointLightAnim => SettingValue::Bool(self.point.enable_point_light_anim),
            PointLightColor => SettingValue::Color(self.point.color),
            PointLightConstAtten => SettingValue::Float(self.point.constant_attenuation),
            PointLightLinAtten => SettingValue::Float(self.point.linear_attenuation),
            PointLightQuadAtten => SettingValue::Float(self.point.quadratic_attenuation),
            PointLightRange => SettingValue::Float(self.point.range),
            EnableSpotLight => SettingValue::Bool(self.spot.enable_spot_light),
            EnableSpotLightAnim => SettingValue::Bool(self.spot.enable_spot_light_anim),
            SpotLightColor => SettingValue::Color(self.spot.color),
            SpotLightRange => SettingValue::Float(self.spot.range),
            SpotInnerAngle => SettingValue::Float(self.spot.inner_angle_degrees),
            SpotOuterAngle => SettingValue::Float(self.spot.outer_angle_degrees),
            SpotLightConeFalloff => SettingValue::Float(self.spot.cone_falloff),
        }
    }

    /// Store `value` as given. No range checks; see [`SettingsStore`](crate::SettingsStore) for policies.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        use SettingKey::*;
        match (key, value) {
            (CurrentScene, SettingValue::Scene(v)) => self.scene.current_scene = v,
            (CurrentScene, other) => return Err(mismatch(key, "scene", &other)),

            (DirLightDirection, SettingValue::Direction(v)) => self.directional.direction = v,
            (DirLightDirection, other) => return Err(mismatch(key, "direction", &other)),

            (DirLightColor, SettingValue::Color(v)) => self.directional.color = v,
            (PointLightColor, SettingValue::Color(v)) => self.point.color = v,
            (SpotLightColor, SettingValue::Color(v)) => self.spot.color = v,
            (DirLightColor | PointLightColor | SpotLightColor, other) => {
                return Err(mismatch(key, "color", &other))
            }

            (_, SettingValue::Bool(v)) => *self.bool_mut(key).ok_or_else(|| mismatch(key, "float", &value))? = v,
            (_, SettingValue::Float(v)) => *self.float_mut(key).ok_or_else(|| mismatch(key, "bool", &value))? = v,
            (_, other) => {
                let expected = if self.bool_mut(key).is_some() { "bool" } else { "float" };
                return Err(mismatch(key, expected, &other));
            }
        }
        Ok(())
    }

    fn bool_mut(&mut self, key: SettingKey) -> Option<&mut bool> {
        use SettingKey::*;
        Some(match key {
            DoubleSyncInterval => &mut self.scene.double_sync_interval,
            EnableAmbientLighting => &mut self.directional.enable_ambient_lighting,
            EnableDirectionalLight => &mut self.directional.enable_directional_light,
            EnablePointLight => &mut self.point.enable_point_light,
            EnablePointLightAnim => &mut self.point.enable_point_light_anim,
            EnableSpotLight => &mut self.spot.enable_spot_light,
            EnableSpotLightAnim => &mut self.spot.enable_spot_light_anim,
            _ => return None,
        })
    }

    fn float_mut(&mut self, key: SettingKey) -> Option<&mut f32> {
        use SettingKey::*;
        Some(match key {
            PointLightConstAtten => &mut self.point.constant_attenuation,
            PointLightLinAtten => &mut self.point.linear_attenuation,
            PointLightQuadAtten => &mut self.point.quadratic_attenuation,
            PointLightRange => &mut self.point.range,
            SpotLightRange => &mut self.spot.range,
            SpotInnerAngle => &mut self.spot.inner_angle_degrees,
            SpotOuterAngle => &mut self.spot.outer_angle_degrees,
            SpotLightConeFalloff => &mut self.spot.cone_falloff,
            _ => return None,
        })
    }
}
