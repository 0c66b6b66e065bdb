//! Hand-derived vector and matrix helpers.
//!
//! All matrices follow one convention: right-handed eye space looking down
//! `-Z`, column vectors (`p' = M * p`), column-major storage. Projections map
//! into OpenGL clip space (`z` in `[-1, 1]`); [`OPENGL_TO_WGPU`] remaps that to
//! the `[0, 1]` depth range wgpu expects and is applied once when a combined
//! matrix is uploaded to the GPU.
//!
//! Euler rotations are given in degrees and applied in X, Y, Z order, so the
//! rotation part of a model matrix is `Rz * Ry * Rx`.

use cgmath::{Deg, Matrix4, Rad, Vector3};

pub type Vec3 = Vector3<f32>;
pub type Mat4 = Matrix4<f32>;

/// Remaps clip-space depth from OpenGL's `[-1, 1]` to wgpu's `[0, 1]`.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU: Mat4 = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[rustfmt::skip]
pub const IDENTITY: Mat4 = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
);

fn sin_cos(angle: f32) -> (f32, f32) {
    let Rad(radians) = Rad::from(Deg(angle));
    radians.sin_cos()
}

/// 4x4 by 4x4 multiplication, `a * b`.
pub fn mat_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    a * b
}

#[rustfmt::skip]
pub fn translation(t: Vec3) -> Mat4 {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        t.x, t.y, t.z, 1.0,
    )
}

#[rustfmt::skip]
pub fn scaling(s: Vec3) -> Mat4 {
    Matrix4::new(
        s.x, 0.0, 0.0, 0.0,
        0.0, s.y, 0.0, 0.0,
        0.0, 0.0, s.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
pub fn rotation_x(degrees: f32) -> Mat4 {
    let (s, c) = sin_cos(degrees);
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0,   c,   s, 0.0,
        0.0,  -s,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
pub fn rotation_y(degrees: f32) -> Mat4 {
    let (s, c) = sin_cos(degrees);
    Matrix4::new(
          c, 0.0,  -s, 0.0,
        0.0, 1.0, 0.0, 0.0,
          s, 0.0,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
pub fn rotation_z(degrees: f32) -> Mat4 {
    let (s, c) = sin_cos(degrees);
    Matrix4::new(
          c,   s, 0.0, 0.0,
         -s,   c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Euler rotation in degrees, X first, then Y, then Z.
pub fn rotation_xyz(r: Vec3) -> Mat4 {
    rotation_z(r.z) * rotation_y(r.y) * rotation_x(r.x)
}

/// Local-to-world transform: scale, then rotate, then translate.
pub fn model_matrix(s: Vec3, r: Vec3, t: Vec3) -> Mat4 {
    translation(t) * rotation_xyz(r) * scaling(s)
}

/// View matrix for a camera that is only moved, never rotated.
pub fn translation_camera(x: f32, y: f32, z: f32) -> Mat4 {
    translation(Vec3::new(x, y, z))
}

/// View matrix of a camera placed at `position` with Euler `rotation`.
///
/// This is the inverse of the camera's own placement `T(p) * Rz * Ry * Rx`,
/// i.e. `Rx(-x) * Ry(-y) * Rz(-z) * T(-p)`.
pub fn camera_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    rotation_x(-rotation.x)
        * rotation_y(-rotation.y)
        * rotation_z(-rotation.z)
        * translation(-position)
}

/// Orthographic projection of the box `[left, right] x [bottom, top] x [-near, -far]`.
#[rustfmt::skip]
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;
    Matrix4::new(
        2.0 / w,              0.0,                  0.0,                0.0,
        0.0,                  2.0 / h,              0.0,                0.0,
        0.0,                  0.0,                 -2.0 / d,            0.0,
        -(right + left) / w, -(top + bottom) / h,  -(far + near) / d,   1.0,
    )
}

/// Symmetric perspective projection with a vertical field of view in degrees.
#[rustfmt::skip]
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let Rad(half_fovy) = Rad::from(Deg(fovy / 2.0));
    let f = 1.0 / half_fovy.tan();
    let a = (far + near) / (near - far);
    let b = 2.0 * far * near / (near - far);
    Matrix4::new(
        f / aspect, 0.0, 0.0,  0.0,
        0.0,        f,   0.0,  0.0,
        0.0,        0.0, a,   -1.0,
        0.0,        0.0, b,    0.0,
    )
}
