//! Frame driver: sizes the drawable, clears it and draws a shape collection.

mod driver;
mod metrics;

pub use driver::{FrameDriver, FrameStatus, RenderConfig};
pub use metrics::SurfaceMetrics;
