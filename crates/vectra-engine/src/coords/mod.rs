//! Coordinate types shared across the geometry core and renderers.
//!
//! World space:
//! - +X right, +Y up
//! - unit-less; the render `scale` uniform maps world units to NDC
//!
//! The viewport is expressed in physical pixels of the drawable surface.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
