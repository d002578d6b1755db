//! GPU mirror of the settings, packed for a uniform/constant buffer.

use crate::schema::LightingSettings;

/// Shader register the settings buffer is bound to in every stage.
pub const CBUFFER_SLOT: u32 = 7;

/// All settings laid out by 16-byte register rules: a float3 never straddles a
/// register, bools are 32-bit. Colours that follow a float3 start a new register.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SettingsCBuffer {
    pub current_scene: i32,
    pub double_sync_interval: u32,
    pub enable_ambient_lighting: u32,
    pub enable_directional_light: u32,
    pub dir_light_direction: [f32; 3],
    _pad0: f32,
    pub dir_light_color: [f32; 3],
    pub enable_point_light: u32,
    pub enable_point_light_anim: u32,
    pub point_light_color: [f32; 3],
    pub point_light_const_atten: f32,
    pub point_light_lin_atten: f32,
    pub point_light_quad_atten: f32,
    pub point_light_range: f32,
    pub enable_spot_light: u32,
    pub enable_spot_light_anim: u32,
    _pad1: [f32; 2],
    pub spot_light_color: [f32; 3],
    pub spot_light_range: f32,
    pub spot_inner_angle: f32,
    pub spot_outer_angle: f32,
    pub spot_light_cone_falloff: f32,
    _pad2: f32,
}

impl SettingsCBuffer {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn from_settings(s: &LightingSettings) -> Self {
        Self {
            current_scene: s.scene.current_scene.index(),
            double_sync_interval: s.scene.double_sync_interval as u32,
            enable_ambient_lighting: s.directional.enable_ambient_lighting as u32,
            enable_directional_light: s.directional.enable_directional_light as u32,
            dir_light_direction: s.directional.direction,
            _pad0: 0.0,
            dir_light_color: s.directional.color,
            enable_point_light: s.point.enable_point_light as u32,
            enable_point_light_anim: s.point.enable_point_light_anim as u32,
            point_light_color: s.point.color,
            point_light_const_atten: s.point.constant_attenuation,
            point_light_lin_atten: s.point.linear_attenuation,
            point_light_quad_atten: s.point.quadratic_attenuation,
            point_light_range: s.point.range,
            enable_spot_light: s.spot.enable_spot_light as u32,
            enable_spot_light_anim: s.spot.enable_spot_light_anim as u32,
            _pad1: [0.0; 2],
            spot_light_color: s.spot.color,
            spot_light_range: s.spot.range,
            spot_inner_angle: s.spot.inner_angle_degrees,
            spot_outer_angle: s.spot.outer_angle_degrees,
            spot_light_cone_falloff: s.spot.cone_falloff,
            _pad2: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    use crate::scene::Scene;

    #[test]
    fn layout_follows_register_packing() {
        assert_eq!(SettingsCBuffer::SIZE, 128);
        assert_eq!(offset_of!(SettingsCBuffer, dir_light_direction), 16);
        assert_eq!(offset_of!(SettingsCBuffer, dir_light_color), 32);
        assert_eq!(offset_of!(SettingsCBuffer, point_light_color), 52);
        assert_eq!(offset_of!(SettingsCBuffer, point_light_const_atten), 64);
        assert_eq!(offset_of!(SettingsCBuffer, enable_spot_light), 80);
        assert_eq!(offset_of!(SettingsCBuffer, spot_light_color), 96);
        assert_eq!(offset_of!(SettingsCBuffer, spot_inner_angle), 112);
        assert_eq!(offset_of!(SettingsCBuffer, spot_light_cone_falloff), 120);
    }

    #[test]
    fn packs_current_values() {
        let mut s = LightingSettings::default();
        s.scene.current_scene = Scene::Skull;
        s.scene.double_sync_interval = true;
        s.spot.enable_spot_light = false;
        let cb = SettingsCBuffer::from_settings(&s);
        assert_eq!(cb.current_scene, 1);
        assert_eq!(cb.double_sync_interval, 1);
        assert_eq!(cb.enable_spot_light, 0);
        assert_eq!(cb.point_light_range, 30.0);
        assert_eq!(cb.spot_outer_angle, 50.0);
        assert_eq!(cb.point_light_lin_atten, 0.08);

        let bytes = cb.as_bytes();
        assert_eq!(bytes.len(), 128);
        assert_eq!(&bytes[0..4], &1i32.to_ne_bytes());
    }
}
