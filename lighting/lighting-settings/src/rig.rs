//! Per-frame light setup driven by the current settings.

use log::debug;
use render_api::{DirectionalLight, ExtractedLights, PointLight, SpotLight};

use crate::policy::normalize;
use crate::scene::Scene;
use crate::schema::LightingSettings;

const AMBIENT: [f32; 3] = [0.05, 0.05, 0.05];
const SPOT_ATTENUATION: [f32; 3] = [1.0, 0.08, 0.0];
const SKULL_SPOT_DIRECTION: [f32; 3] = [0.2, -0.8, 0.0];
const ORBIT_SPEED: f32 = 0.2;

/// Terrain surface height used to keep the orbiting point light above the hills.
pub fn hill_height(x: f32, z: f32) -> f32 {
    0.3 * (z * (0.1 * x).sin() + x * (0.1 * z).cos())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: [f32; 3],
    /// Unit view direction.
    pub forward: [f32; 3],
}

impl Default for CameraPose {
    fn default() -> Self {
        Self { position: Scene::Terrain.camera_preset(), forward: [0.0, 0.0, 1.0] }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RigFrame {
    pub lights: ExtractedLights,
    /// Set on the first frame and whenever the scene changes; the host moves its camera there.
    pub camera_reset: Option<[f32; 3]>,
    pub vsync_intervals: u32,
}

/// Keeps animated light positions between frames; a light whose animation is
/// switched off stays where it last was.
#[derive(Clone, Debug)]
pub struct LightRig {
    scene: Option<Scene>,
    point_position: [f32; 3],
    spot_position: [f32; 3],
    spot_direction: [f32; 3],
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            scene: None,
            point_position: [0.0; 3],
            spot_position: [0.0; 3],
            spot_direction: [0.0, -1.0, 0.0],
        }
    }
}

impl LightRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, settings: &LightingSettings, elapsed_secs: f32, camera: &CameraPose) -> RigFrame {
        let scene = settings.scene.current_scene;
        let camera_reset = if self.scene != Some(scene) {
            debug!("scene -> {}", scene);
            self.scene = Some(scene);
            Some(scene.camera_preset())
        } else {
            None
        };

        let t = elapsed_secs;
        let orbit = ORBIT_SPEED * t;
        match scene {
            Scene::Terrain => {
                if settings.point.enable_point_light_anim {
                    let x = 70.0 * orbit.cos();
                    let z = 70.0 * orbit.sin();
                    self.point_position = [x, hill_height(x, z).max(-3.0) + 10.0, z];
                }
                // Flashlight: the spot follows the camera.
                let position = camera_reset.unwrap_or(camera.position);
                self.spot_position = position;
                if let Some(forward) = normalize(camera.forward) {
                    self.spot_direction = forward;
                }
            }
            Scene::Skull => {
                if settings.point.enable_point_light_anim {
                    self.point_position = [10.0 * orbit.cos(), 2.0 + t.cos(), 10.0 * orbit.sin()];
                }
                if settings.spot.enable_spot_light_anim {
                    self.spot_position = [8.0 * orbit.sin(), 8.0, 8.0 * orbit.cos()];
                    self.spot_direction = normalize(SKULL_SPOT_DIRECTION).unwrap_or([0.0, -1.0, 0.0]);
                }
            }
        }

        let dir = &settings.directional;
        let point = &settings.point;
        let spot = &settings.spot;
        let lights = ExtractedLights {
            ambient: dir.enable_ambient_lighting.then_some(AMBIENT),
            directional: dir
                .enable_directional_light
                .then(|| DirectionalLight { direction: dir.direction, color: dir.color }),
            point: point.enable_point_light.then(|| PointLight {
                position: self.point_position,
                color: point.color,
                attenuation: point.attenuation(),
                range: point.range,
            }),
            spot: spot.enable_spot_light.then(|| SpotLight {
                position: self.spot_position,
                direction: self.spot_direction,
                color: spot.color,
                attenuation: SPOT_ATTENUATION,
                range: spot.range,
                inner_angle: spot.inner_angle_degrees.to_radians(),
                outer_angle: spot.outer_angle_degrees.to_radians(),
                falloff: spot.cone_falloff,
            }),
        };

        RigFrame { lights, camera_reset, vsync_intervals: settings.vsync_intervals() }
    }
}
