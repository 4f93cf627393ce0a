//! Vectra engine crate.
//!
//! Geometry model, affine resolution, convex hull and a wgpu renderer for 2D
//! vector shapes, plus the winit/wgpu runtime that drives frames.

pub mod device;
pub mod window;
pub mod core;
pub mod frame;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod transform;
pub mod hull;
