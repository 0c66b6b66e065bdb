//! Triangle meshes and their GPU buffers.
//!
//! A [`Mesh`] owns its CPU-side geometry (positions, vertex normals and index
//! triples) and, once uploaded, the GPU handles created from it. Geometry is
//! uploaded exactly once; only the per-mesh uniform buffer is rewritten each
//! frame.

use anyhow::ensure;
use cgmath::{InnerSpace, Vector3, Zero};
use wgpu::util::DeviceExt;

use crate::camera::MeshUniform;

/// Interleaved vertex as stored in the vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Buffer layout matching `@location(0) position` and `@location(1) normal`.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// GPU resources owned by one mesh.
#[derive(Debug)]
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub num_elements: u32,
}

#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    triangles: Vec<[u32; 3]>,
    gpu: Option<GpuMesh>,
}

impl Mesh {
    /// Build a mesh and derive its vertex normals from the triangles.
    ///
    /// Fails if a triangle references a vertex that does not exist.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<[f32; 3]>,
        triangles: Vec<[u32; 3]>,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        let nv = positions.len();
        if let Some(bad) = triangles
            .iter()
            .flatten()
            .find(|&&index| index as usize >= nv)
        {
            anyhow::bail!("mesh {name:?} references vertex {bad} but only has {nv} vertices");
        }
        ensure!(
            u32::try_from(triangles.len() * 3).is_ok(),
            "mesh {name:?} has too many triangles"
        );
        let normals = vertex_normals(&positions, &triangles);
        Ok(Self {
            name,
            positions,
            normals,
            triangles,
            gpu: None,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| MeshVertex { position, normal })
            .collect()
    }

    pub fn gpu(&self) -> Option<&GpuMesh> {
        self.gpu.as_ref()
    }

    pub fn is_uploaded(&self) -> bool {
        self.gpu.is_some()
    }

    /// Create the vertex, index and uniform buffers for this mesh.
    ///
    /// Geometry is written once; calling this again on an uploaded mesh is a
    /// no-op.
    pub fn upload(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        if self.gpu.is_some() {
            log::warn!("Mesh {:?} is already on the GPU, skipping upload", self.name);
            return;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", self.name)),
            contents: bytemuck::cast_slice(&self.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", self.name)),
            contents: bytemuck::cast_slice(&self.triangles),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Uniform Buffer", self.name)),
            contents: bytemuck::cast_slice(&[MeshUniform::new(
                &crate::math::IDENTITY,
                &crate::math::IDENTITY,
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some(&format!("{:?} Bind Group", self.name)),
        });

        log::debug!(
            "Uploaded mesh {:?}: {} vertices, {} triangles",
            self.name,
            self.num_vertices(),
            self.num_triangles()
        );

        self.gpu = Some(GpuMesh {
            vertex_buffer,
            index_buffer,
            uniform_buffer,
            bind_group,
            num_elements: (self.triangles.len() * 3) as u32,
        });
    }
}

/// Area-weighted vertex normals: every triangle adds its (unnormalised) face
/// normal to its three corners, the sums are normalised at the end. Vertices
/// that no triangle touches keep a zero normal.
pub fn vertex_normals(positions: &[[f32; 3]], triangles: &[[u32; 3]]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vector3::<f32>::zero(); positions.len()];
    for &[a, b, c] in triangles {
        let p0 = Vector3::from(positions[a as usize]);
        let p1 = Vector3::from(positions[b as usize]);
        let p2 = Vector3::from(positions[c as usize]);
        let face = (p1 - p0).cross(p2 - p0);
        sums[a as usize] += face;
        sums[b as usize] += face;
        sums[c as usize] += face;
    }
    sums.into_iter()
        .map(|n| -> [f32; 3] {
            if n.magnitude2() > 0.0 {
                n.normalize().into()
            } else {
                [0.0; 3]
            }
        })
        .collect()
}
