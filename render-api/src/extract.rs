//! Data types for extraction from the demo host into the render world.
//! The host fills these each frame from the current lighting settings.

/// Directional light (sun-like). Direction is a unit vector pointing from the light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: [f32; 3],
    /// Used for both diffuse and specular terms.
    pub color: [f32; 3],
}

/// Point light with constant/linear/quadratic attenuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub color: [f32; 3],
    /// (constant, linear, quadratic)
    pub attenuation: [f32; 3],
    pub range: f32,
}

/// Spot light. Angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub color: [f32; 3],
    /// (constant, linear, quadratic)
    pub attenuation: [f32; 3],
    pub range: f32,
    pub inner_angle: f32,
    pub outer_angle: f32,
    /// Brightness falloff between the inner and outer cone.
    pub falloff: f32,
}

/// All lights for the current frame. Disabled lights are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractedLights {
    pub ambient: Option<[f32; 3]>,
    pub directional: Option<DirectionalLight>,
    pub point: Option<PointLight>,
    pub spot: Option<SpotLight>,
}

impl ExtractedLights {
    /// Number of enabled direct lights (ambient not counted).
    pub fn active_count(&self) -> usize {
        self.directional.is_some() as usize + self.point.is_some() as usize + self.spot.is_some() as usize
    }
}

/// View/camera data for the current frame.
#[derive(Clone, Debug)]
pub struct ExtractedView {
    pub view_proj: [f32; 16],
    pub viewport_size: (u32, u32),
    pub camera_position: [f32; 3],
    pub lights: ExtractedLights,
    /// Number of vertical blanks to wait per present (1 or 2).
    pub vsync_intervals: u32,
}

impl Default for ExtractedView {
    fn default() -> Self {
        Self {
            view_proj: [
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
            viewport_size: (1280, 720),
            camera_position: [0.0, 0.0, 0.0],
            lights: ExtractedLights::default(),
            vsync_intervals: 1,
        }
    }
}
