use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::shapes::{DrawOutcome, ShapeRenderer, DEFAULT_SCALE};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::Shape;

use super::SurfaceMetrics;

/// Per-driver rendering settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    /// Global zoom uploaded as the shader's `scale` uniform.
    pub zoom: f32,
    /// Color the surface is cleared to before shapes are drawn.
    pub clear: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_SCALE,
            clear: Color::transparent(),
        }
    }
}

/// Outcome of one [`FrameDriver::render`] call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// A frame was submitted. `drawn` counts shapes that issued a draw call;
    /// `skipped` counts degenerate ones. The rest failed and were logged.
    Presented { drawn: usize, skipped: usize },
    /// Nothing was presented (empty drawable or transient surface error).
    Skipped,
    /// The surface cannot recover; the host should shut down.
    Fatal,
}

/// Owns the drawable's per-frame lifecycle: resize, clear, draw in order, present.
///
/// The driver is the only thing that touches the GPU surface; calls must not
/// interleave.
#[derive(Default)]
pub struct FrameDriver {
    renderer: ShapeRenderer,
    config: RenderConfig,
}

impl FrameDriver {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            renderer: ShapeRenderer::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Renders `shapes` in collection order; later shapes paint over earlier ones.
    ///
    /// Shader or buffer failures are logged and leave a blank or partial frame.
    pub fn render(&mut self, gpu: &mut Gpu<'_>, metrics: SurfaceMetrics, shapes: &[Shape]) -> FrameStatus {
        let backing = metrics.backing_size();
        if gpu.size() != backing {
            log::debug!(
                "backing buffer {}x{} -> {}x{} (pixel ratio {})",
                gpu.size().width,
                gpu.size().height,
                backing.width,
                backing.height,
                metrics.pixel_ratio
            );
            gpu.resize(backing);
        }

        if metrics.is_empty() {
            return FrameStatus::Skipped;
        }

        let mut frame = match gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => FrameStatus::Fatal,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        FrameStatus::Skipped
                    }
                };
            }
        };

        // Clear pass; dropped before the encoder is borrowed again.
        {
            let [r, g, b, a] = self.config.clear.to_rgba_f32();
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("vectra clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let mut drawn = 0;
        let mut skipped = 0;
        {
            let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), gpu.viewport());

            match self.renderer.prepare(&rctx, self.config.zoom) {
                Ok(()) => {
                    let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                    for shape in shapes {
                        match self.renderer.render(&rctx, &mut target, shape) {
                            Ok(DrawOutcome::Drawn) => drawn += 1,
                            Ok(DrawOutcome::Skipped) => skipped += 1,
                            Err(err) => log::error!("shape {:?} not drawn: {err}", shape.id()),
                        }
                    }
                }
                Err(err) => log::error!("shape program unavailable, presenting blank frame: {err}"),
            }
        }

        gpu.submit(frame);
        FrameStatus::Presented { drawn, skipped }
    }
}
