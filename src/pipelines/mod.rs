//! Render pipelines.
//!
//! The sandbox has a single pipeline: `basic` compiles the fixed
//! normal-to-colour vertex shader and the interpolated-colour fragment shader
//! and links them with the mesh vertex layout and depth testing.

pub mod basic;
