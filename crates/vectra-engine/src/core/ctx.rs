use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::frame::{FrameDriver, FrameStatus, SurfaceMetrics};
use crate::scene::Shape;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Displayed size and pixel ratio of this window.
    pub fn surface_metrics(&self) -> SurfaceMetrics {
        SurfaceMetrics::from_physical(self.window.inner_size(), self.window.scale_factor())
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Draws `shapes` into this window through `driver` and presents the frame.
    pub fn render_shapes(&mut self, driver: &mut FrameDriver, shapes: &[Shape]) -> AppControl {
        let metrics = self.window.surface_metrics();
        self.window.window.pre_present_notify();

        match driver.render(self.gpu, metrics, shapes) {
            FrameStatus::Presented { drawn, skipped } => {
                if drawn < shapes.len() {
                    log::debug!(
                        "frame presented with {drawn}/{} shapes ({skipped} degenerate)",
                        shapes.len()
                    );
                }
                AppControl::Continue
            }
            FrameStatus::Skipped => AppControl::Continue,
            FrameStatus::Fatal => {
                log::error!("surface lost beyond recovery; exiting");
                AppControl::Exit
            }
        }
    }
}
