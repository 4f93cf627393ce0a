//! Transform engine.
//!
//! Builds elementary affine matrices from a shape's [`Effect`](crate::scene::Effect)
//! and produces resolved (world-space) copies of shapes.

mod matrix;
mod resolve;

pub use matrix::Mat4;
pub use resolve::{effect_matrix, pivot_effect_matrix, resolve_matrix, Resolve};
