//! wgpu uniform buffer holding [`SettingsCBuffer`].

use crate::cbuffer::{SettingsCBuffer, CBUFFER_SLOT};

pub struct SettingsUniform {
    buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl SettingsUniform {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("settings_uniform"),
            size: SettingsCBuffer::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("settings_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: CBUFFER_SLOT,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT | wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(SettingsCBuffer::SIZE),
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("settings_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry { binding: CBUFFER_SLOT, resource: buffer.as_entire_binding() }],
        });
        Self { buffer, bind_group_layout, bind_group }
    }

    /// Upload already-packed bytes (e.g. received through a `RenderBackend`).
    pub fn upload_bytes(&self, queue: &wgpu::Queue, bytes: &[u8]) -> Result<(), String> {
        check_len(bytes)?;
        queue.write_buffer(&self.buffer, 0, bytes);
        Ok(())
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

fn check_len(bytes: &[u8]) -> Result<(), String> {
    if bytes.len() as u64 != SettingsCBuffer::SIZE {
        return Err(format!("settings uniform expects {} bytes, got {}", SettingsCBuffer::SIZE, bytes.len()));
    }
    Ok(())
}
