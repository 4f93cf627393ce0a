use crate::frame::RenderConfig;

/// Device and surface settings for [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format. Vertex colors are then treated as
    /// sRGB-encoded bytes and come out on screen as entered.
    pub prefer_srgb: bool,

    /// Frames are only produced when the shape collection changes, so FIFO
    /// costs nothing here.
    pub present_mode: wgpu::PresentMode,

    /// Composite the drawable with whatever is behind the window. Needed for a
    /// translucent clear color to show through.
    pub transparent: bool,

    pub required_limits: wgpu::Limits,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            transparent: false,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

impl GpuInit {
    /// Settings matching a frame driver: a clear color with alpha below 1
    /// requests a compositing surface.
    pub fn for_render(config: &RenderConfig) -> Self {
        Self {
            transparent: config.clear.a < 1.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn default_render_config_wants_transparency() {
        assert!(GpuInit::for_render(&RenderConfig::default()).transparent);
    }

    #[test]
    fn opaque_clear_keeps_opaque_surface() {
        let config = RenderConfig { clear: Color::white(), ..RenderConfig::default() };
        let init = GpuInit::for_render(&config);
        assert!(!init.transparent);
        assert!(init.prefer_srgb);
    }
}
