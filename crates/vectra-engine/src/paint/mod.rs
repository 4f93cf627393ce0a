//! Color model shared between the geometry core and renderers.

pub mod color;

pub use color::Color;
