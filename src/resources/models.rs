//! Compiled-in triangle meshes.
//!
//! All shapes are centred on the origin with a radius of roughly one unit;
//! [`crate::resources::insert_model`] scales them into the scene.

/// Constant geometry: vertex positions and triangle vertex-index triples.
#[derive(Debug, Clone, Copy)]
pub struct ModelData {
    pub name: &'static str,
    pub vertices: &'static [[f32; 3]],
    pub triangles: &'static [[u32; 3]],
}

impl ModelData {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }
}

pub const TETRAHEDRON: ModelData = ModelData {
    name: "tetrahedron",
    vertices: &[
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ],
    triangles: &[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
};

pub const CUBE: ModelData = ModelData {
    name: "cube",
    vertices: &[
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ],
    triangles: &[
        // +z
        [4, 5, 6],
        [4, 6, 7],
        // -z
        [1, 0, 3],
        [1, 3, 2],
        // -x
        [0, 4, 7],
        [0, 7, 3],
        // +x
        [5, 1, 2],
        [5, 2, 6],
        // +y
        [7, 6, 2],
        [7, 2, 3],
        // -y
        [0, 1, 5],
        [0, 5, 4],
    ],
};

pub const OCTAHEDRON: ModelData = ModelData {
    name: "octahedron",
    vertices: &[
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ],
    triangles: &[
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ],
};

// golden ratio
const T: f32 = 1.618_034;

pub const ICOSAHEDRON: ModelData = ModelData {
    name: "icosahedron",
    vertices: &[
        [-1.0, T, 0.0],
        [1.0, T, 0.0],
        [-1.0, -T, 0.0],
        [1.0, -T, 0.0],
        [0.0, -1.0, T],
        [0.0, 1.0, T],
        [0.0, -1.0, -T],
        [0.0, 1.0, -T],
        [T, 0.0, -1.0],
        [T, 0.0, 1.0],
        [-T, 0.0, -1.0],
        [-T, 0.0, 1.0],
    ],
    triangles: &[
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ],
};

pub const ALL: [ModelData; 4] = [TETRAHEDRON, CUBE, OCTAHEDRON, ICOSAHEDRON];
