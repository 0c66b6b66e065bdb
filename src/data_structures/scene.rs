//! The set of meshes to draw and where each one is placed.

use std::collections::HashMap;

use crate::{
    data_structures::{
        mesh::Mesh,
        mesh_list::{MeshId, MeshList},
    },
    math::{self, Mat4, Vec3},
};

/// Scale, Euler rotation (degrees) and translation of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: Vec3::new(1.0, 1.0, 1.0),
        rotation: Vec3::new(0.0, 0.0, 0.0),
        translation: Vec3::new(0.0, 0.0, 0.0),
    };

    pub fn new(scale: Vec3, rotation: Vec3, translation: Vec3) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        math::model_matrix(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Meshes in draw order plus a transform per mesh identity.
#[derive(Debug, Default)]
pub struct Scene {
    meshes: MeshList<Mesh>,
    transforms: HashMap<MeshId, Transform>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `mesh` and place it with `transform`.
    pub fn insert(&mut self, mesh: Mesh, transform: Transform) -> MeshId {
        let id = self.meshes.prepend(mesh);
        self.transforms.insert(id, transform);
        id
    }

    /// Returns `false` if no mesh with this identity exists.
    pub fn set_transform(&mut self, id: MeshId, transform: Transform) -> bool {
        if self.meshes.get(id).is_none() {
            return false;
        }
        self.transforms.insert(id, transform);
        true
    }

    /// Transform of `id`, identity when none was recorded.
    pub fn transform(&self, id: MeshId) -> Transform {
        self.transforms.get(&id).copied().unwrap_or_default()
    }

    pub fn meshes(&self) -> &MeshList<Mesh> {
        &self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Upload every mesh's geometry. Meshes already on the GPU are left alone.
    pub fn upload(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        self.meshes
            .iter_mut()
            .for_each(|(_, mesh)| mesh.upload(device, layout));
        log::info!("Uploaded {} meshes", self.meshes.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(name: &str) -> Mesh {
        Mesh::new(
            name,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn transforms_follow_mesh_identity() {
        let mut scene = Scene::new();
        let moved = Transform::new(
            Vec3::new(3.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 30.0, -40.0),
        );
        let a = scene.insert(triangle("a"), Transform::IDENTITY);
        let b = scene.insert(triangle("b"), moved);

        assert_eq!(scene.transform(a), Transform::IDENTITY);
        assert_eq!(scene.transform(b), moved);

        let order: Vec<_> = scene.meshes().iter().map(|(id, _)| id).collect();
        assert_eq!(order, [b, a]);
    }

    #[test]
    fn identity_transform_is_identity_matrix() {
        assert_eq!(Transform::default().to_matrix(), math::IDENTITY);
    }

    #[test]
    fn set_transform_rejects_unknown_ids() {
        let mut scene = Scene::new();
        let id = scene.insert(triangle("a"), Transform::IDENTITY);
        let mut other = Scene::new();
        other.insert(triangle("x"), Transform::IDENTITY);
        let unknown = other.insert(triangle("y"), Transform::IDENTITY);

        assert!(scene.set_transform(id, Transform::default()));
        assert!(!scene.set_transform(unknown, Transform::default()));
    }
}
