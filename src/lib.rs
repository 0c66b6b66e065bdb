//! mesh-sandbox
//!
//! A small windowed renderer for experimenting with hand-built transform
//! matrices. A handful of compiled-in meshes are placed in world space, viewed
//! through a movable camera and coloured by their surface normals.
//!
//! High-level modules
//! - `app`: window, event loop and per-frame rendering
//! - `camera`: camera parameters, projection modes and the per-draw uniform
//! - `config`: start-up configuration and command-line parsing
//! - `context`: GPU and window context that owns surface/device/queue/shader
//! - `data_structures`: meshes, the ordered mesh list and the scene
//! - `input`: keyboard handling
//! - `math`: 4x4 matrix helpers and the transform convention
//! - `pipelines`: the shader program and its render pipeline
//! - `render`: per-frame matrices and draw submission
//! - `resources`: compiled-in model data and the demo scene
//!

pub mod app;
pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod input;
pub mod math;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Matrix4, Vector3};
pub use winit::keyboard::Key;
