use anyhow::Context;

use crate::{
    data_structures::{
        mesh::Mesh,
        mesh_list::{MeshId, MeshList},
        scene::{Scene, Transform},
    },
    math::Vec3,
};

/**
 * Shapes are compiled in as constant data; nothing is read from disk.
 */
pub mod models;

use models::ModelData;

/// Build a [`Mesh`] from constant model data, multiplying every vertex
/// position by `scale`. Vertex normals are derived from the scaled geometry.
pub fn load_model(model: &ModelData, scale: f32) -> anyhow::Result<Mesh> {
    let positions = model
        .vertices
        .iter()
        .map(|[x, y, z]| [x * scale, y * scale, z * scale])
        .collect();
    Mesh::new(model.name, positions, model.triangles.to_vec())
        .with_context(|| format!("Failed to load model {:?}", model.name))
}

/// Load `model` at `scale` and prepend it to `list`.
pub fn insert_model(
    list: &mut MeshList<Mesh>,
    model: &ModelData,
    scale: f32,
) -> anyhow::Result<MeshId> {
    let mesh = load_model(model, scale)?;
    Ok(list.prepend(mesh))
}

/// The sandbox scene: three shapes, each with its own placement.
pub fn demo_scene() -> anyhow::Result<Scene> {
    let mut scene = Scene::new();

    scene.insert(
        load_model(&models::CUBE, 5.0)?,
        Transform::new(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, -90.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        ),
    );
    scene.insert(
        load_model(&models::OCTAHEDRON, 6.0)?,
        Transform::new(
            Vec3::new(3.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 30.0, -40.0),
        ),
    );
    scene.insert(
        load_model(&models::ICOSAHEDRON, 4.0)?,
        Transform::new(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-60.0, 0.0, 0.0),
            Vec3::new(-25.0, 0.0, 0.0),
        ),
    );

    Ok(scene)
}
