#![allow(dead_code)]

use cgmath::{Vector3, Vector4};
use mesh_sandbox::{camera::MeshUniform, math::Mat4};
use winit::keyboard::Key;

pub const EPS: f32 = 1e-4;

pub fn key(c: &str) -> Key {
    Key::Character(c.into())
}

pub fn assert_mat_approx(actual: &Mat4, expected: &Mat4) {
    let a: &[f32; 16] = actual.as_ref();
    let e: &[f32; 16] = expected.as_ref();
    for (i, (x, y)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            (x - y).abs() < EPS,
            "element {} differs: {} vs {}\nactual: {:?}\nexpected: {:?}",
            i,
            x,
            y,
            actual,
            expected
        );
    }
}

/// Normalized device coordinates of a model-space point under `uniform`.
pub fn ndc(uniform: &MeshUniform, point: [f32; 3]) -> Vector3<f32> {
    let clip = uniform.matrix() * Vector4::new(point[0], point[1], point[2], 1.0);
    clip.truncate() / clip.w
}

#[cfg(feature = "integration-tests")]
pub async fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = match instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
    {
        Ok(adapter) => adapter,
        Err(e) => {
            eprintln!("No graphics adapter available, skipping: {}", e);
            return None;
        }
    };
    match adapter.request_device(&wgpu::DeviceDescriptor::default()).await {
        Ok(pair) => Some(pair),
        Err(e) => {
            eprintln!("Could not open a device, skipping: {}", e);
            None
        }
    }
}
