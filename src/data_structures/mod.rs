//! Sandbox data structures: meshes, the mesh list, the scene and textures.
//!
//! - `mesh` holds CPU geometry, vertex layout and per-mesh GPU buffers
//! - `mesh_list` is the prepend-only container meshes are stored in
//! - `scene` pairs the mesh list with a transform per mesh identity
//! - `texture` wraps the depth attachment

pub mod mesh;
pub mod mesh_list;
pub mod scene;
pub mod texture;
