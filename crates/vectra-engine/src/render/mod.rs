//! GPU rendering subsystem.
//!
//! Turns one resolved shape into one draw call via wgpu.
//!
//! Convention:
//! - CPU geometry is in world units (+Y up).
//! - x is divided by the drawable aspect ratio before upload.
//! - The vertex shader multiplies by the global `scale` uniform to reach NDC.

mod ctx;
mod error;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::{RenderError, ShaderStage};
