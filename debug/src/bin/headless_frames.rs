//! Headless frame loop: an editor thread tweaks settings while the render loop
//! packs them into the constant buffer, uploads it and derives the frame's lights.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p debug --bin headless_frames [settings.json]

use std::time::Duration;

use lighting_settings::{
    CameraPose, LightRig, LightingSettings, Scene, SettingKey, SettingValue, SettingsCBuffer, SettingsStore,
    SettingsUniform, SharedSettings, WritePolicy,
};
use log::info;
use render_api::{ExtractedView, RenderBackend};

const FRAMES: u32 = 120;
const FRAME_TIME: f32 = 1.0 / 60.0;

/// Backend that only owns the settings uniform; enough to exercise the upload path without a window.
struct UniformBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    uniform: SettingsUniform,
    frames: u64,
}

impl UniformBackend {
    fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        let uniform = SettingsUniform::new(&device);
        Self { device, queue, uniform, frames: 0 }
    }
}

impl RenderBackend for UniformBackend {
    fn prepare(&mut self, uniform_bytes: &[u8]) {
        if let Err(e) = self.uniform.upload_bytes(&self.queue, uniform_bytes) {
            log::error!("{}", e);
        }
    }

    fn render_frame(&mut self, view: &ExtractedView) -> Result<(), String> {
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("headless_frame"),
        });
        self.queue.submit([encoder.finish()]);
        self.frames += 1;
        if self.frames % 30 == 0 {
            info!(
                "frame {}: {} lights, vsync x{}, camera {:?}",
                self.frames,
                view.lights.active_count(),
                view.vsync_intervals,
                view.camera_position
            );
            if let Some(point) = view.lights.point {
                info!("  point light at {:?}", point.position);
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let initial = match std::env::args().nth(1) {
        Some(path) => LightingSettings::load_json(&path).map_err(|e| e.to_string())?,
        None => LightingSettings::default(),
    };
    let shared = SharedSettings::new(SettingsStore::with_settings(initial, WritePolicy::Clamp));

    let editor = shared.clone();
    let edits = std::thread::spawn(move || -> lighting_settings::Result<()> {
        std::thread::sleep(Duration::from_millis(300));
        editor.set(SettingKey::SpotInnerAngle, SettingValue::Float(35.0))?;
        editor.set(SettingKey::PointLightColor, SettingValue::Color([1.2, 0.4, 0.4]))?;
        std::thread::sleep(Duration::from_millis(300));
        editor.set(SettingKey::CurrentScene, SettingValue::Scene(Scene::Skull))?;
        editor.set(SettingKey::DoubleSyncInterval, SettingValue::Bool(true))?;
        Ok(())
    });

    let (device, queue) = pollster::block_on(request_device())?;
    let mut backend: Box<dyn RenderBackend> = Box::new(UniformBackend::new(device, queue));
    let mut rig = LightRig::new();
    let mut camera = CameraPose::default();

    for frame in 0..FRAMES {
        let (settings, changes) = shared.begin_frame();
        for key in changes.iter() {
            info!("changed: {} = {:?}", key.descriptor().label(), settings.get(key));
        }
        let rig_frame = rig.update(&settings, frame as f32 * FRAME_TIME, &camera);
        if let Some(position) = rig_frame.camera_reset {
            camera.position = position;
        }

        backend.prepare(SettingsCBuffer::from_settings(&settings).as_bytes());
        let view = ExtractedView {
            camera_position: camera.position,
            lights: rig_frame.lights,
            vsync_intervals: rig_frame.vsync_intervals,
            ..ExtractedView::default()
        };
        backend.render_frame(&view)?;
        std::thread::sleep(Duration::from_secs_f32(FRAME_TIME));
    }

    edits
        .join()
        .map_err(|_| "editor thread panicked".to_string())?
        .map_err(|e| e.to_string())?;
    println!("headless_frames: {} frames OK", FRAMES);
    Ok(())
}

async fn request_device() -> Result<(wgpu::Device, wgpu::Queue), String> {
    let instance = wgpu::Instance::default();
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions::default())
        .await
        .ok_or("No adapter")?;
    adapter
        .request_device(&wgpu::DeviceDescriptor::default(), None)
        .await
        .map_err(|e| e.to_string())
}
