//! Shape renderer: one resolved shape, one draw call.

mod common;
mod program;

pub mod line;
pub mod polygon;
pub mod quad;

pub use common::{
    correct_aspect, ShapeMesh, ShapeVertex, Topology, DEFAULT_SCALE, FLOATS_PER_VERTEX,
};
pub use program::ShapeProgram;

use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderError, RenderTarget};
use crate::scene::Shape;
use crate::transform::Resolve;

/// Whether a call to [`ShapeRenderer::render`] recorded a draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawOutcome {
    Drawn,
    /// Degenerate geometry, an empty viewport or no prepared program.
    Skipped,
}

impl ShapeMesh {
    /// Packs an already-resolved shape and applies aspect correction.
    pub fn from_shape(shape: &Shape, aspect: f32) -> Self {
        let mut mesh = match shape {
            Shape::Line(s) => line::tessellate(s),
            Shape::Square(s) => quad::tessellate(s.corners()),
            Shape::Rectangle(s) => quad::tessellate(s.corners()),
            Shape::Polygon(s) => polygon::tessellate(s),
        };
        correct_aspect(&mut mesh.vertices, aspect);
        mesh
    }

    /// Resolves and packs `shape` for `viewport`, or `None` when nothing would be drawn.
    pub fn for_viewport(shape: &Shape, viewport: Viewport) -> Option<Self> {
        if !viewport.is_valid() {
            return None;
        }
        let mesh = Self::from_shape(&shape.resolved(), viewport.aspect_ratio());
        (!mesh.is_empty()).then_some(mesh)
    }
}

/// Draws shapes with a lazily created [`ShapeProgram`].
///
/// The program is rebuilt when the surface format changes. A failed build is
/// reported to the caller and retried on the next `prepare`.
#[derive(Default)]
pub struct ShapeRenderer {
    program_format: Option<wgpu::TextureFormat>,
    program: Option<ShapeProgram>,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a program exists for the current surface format and uploads `scale`.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, scale: f32) -> Result<(), RenderError> {
        if self.program_format != Some(ctx.surface_format) || self.program.is_none() {
            self.program = None;
            self.program_format = None;

            let program = ShapeProgram::new(ctx.device, ctx.surface_format)?;
            self.program = Some(program);
            self.program_format = Some(ctx.surface_format);
        }

        if let Some(program) = self.program.as_ref() {
            program.write_scale(ctx.queue, scale);
        }
        Ok(())
    }

    /// Resolves `shape`, packs it and issues its draw call.
    ///
    /// Degenerate geometry draws nothing. Without a prepared program this is a no-op.
    pub fn render(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        shape: &Shape,
    ) -> Result<DrawOutcome, RenderError> {
        let Some(program) = self.program.as_ref() else { return Ok(DrawOutcome::Skipped) };

        let Some(mesh) = ShapeMesh::for_viewport(shape, ctx.viewport) else {
            log::debug!("shape {:?} ({:?}) has no primitives; skipped", shape.id(), shape.kind());
            return Ok(DrawOutcome::Skipped);
        };

        program.draw(ctx, target, &mesh)
    }
}

/// Adapter-less device for tests; `None` on machines without a usable adapter.
#[cfg(test)]
pub(crate) fn headless_gpu() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default())).ok()?;
    pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::{Effect, Line, Point, Polygon, Rectangle, ShapeId, Square, VertexColors};

    #[test]
    fn line_is_stretch_corrected() {
        let line = Line::new(ShapeId(1), Point::at(-5.0, 5.0), Point::at(5.0, -5.0));
        let mesh = ShapeMesh::from_shape(&Shape::Line(line), 200.0 / 100.0);
        assert_eq!(mesh.vertices[0].coordinates, [-2.5, 5.0]);
        assert_eq!(mesh.vertices[1].coordinates, [2.5, -5.0]);
    }

    #[test]
    fn every_kind_is_corrected_alike() {
        let shapes: Vec<Shape> = vec![
            Line::new(ShapeId(1), Point::at(4.0, 1.0), Point::at(8.0, 1.0)).into(),
            Square::new(ShapeId(2), Point::at(4.0, 1.0), 4.0, VertexColors::default()).into(),
            Rectangle::new(ShapeId(3), Point::at(4.0, 1.0), 4.0, 3.0, VertexColors::default()).into(),
            Polygon::new(
                ShapeId(4),
                vec![Point::at(4.0, 1.0), Point::at(8.0, 1.0), Point::at(6.0, 3.0)],
            )
            .into(),
        ];
        for shape in &shapes {
            let plain = ShapeMesh::from_shape(shape, 1.0);
            let wide = ShapeMesh::from_shape(shape, 4.0);
            for (a, b) in plain.vertices.iter().zip(&wide.vertices) {
                assert_eq!(a.coordinates[0] / 4.0, b.coordinates[0]);
                assert_eq!(a.coordinates[1], b.coordinates[1]);
            }
        }
    }

    #[test]
    fn square_packs_six_vertices() {
        let sq = Square::new(ShapeId(1), Point::at(0.0, 0.0), 10.0, VertexColors::uniform(Color::white()));
        let mesh = ShapeMesh::from_shape(&Shape::Square(sq), 1.0);
        assert_eq!(mesh.topology, Topology::Triangles);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.as_floats().len(), 6 * FLOATS_PER_VERTEX);
    }

    #[test]
    fn packing_uses_resolved_geometry_when_resolved_first() {
        let sq = Square::new(ShapeId(1), Point::at(0.0, 0.0), 10.0, VertexColors::default())
            .with_effect(Effect::translate(5.0, 0.0));
        let mesh = ShapeMesh::from_shape(&Shape::Square(sq).resolved(), 1.0);
        assert_eq!(mesh.vertices[0].coordinates, [5.0, 0.0]);
        assert_eq!(mesh.vertices[4].coordinates, [15.0, 10.0]);
    }

    #[test]
    fn degenerate_shapes_have_no_mesh() {
        let viewport = Viewport::new(200.0, 100.0);
        let two_points = Polygon::new(ShapeId(1), vec![Point::at(0.0, 0.0), Point::at(1.0, 0.0)]);
        assert_eq!(ShapeMesh::for_viewport(&Shape::Polygon(two_points), viewport), None);

        let line: Shape = Line::new(ShapeId(2), Point::at(0.0, 0.0), Point::at(1.0, 0.0)).into();
        assert!(ShapeMesh::for_viewport(&line, viewport).is_some());
        assert_eq!(ShapeMesh::for_viewport(&line, Viewport::new(0.0, 100.0)), None);
    }

    #[test]
    fn render_reports_skipped_and_drawn_shapes() {
        let Some((device, queue)) = headless_gpu() else { return };
        let format = wgpu::TextureFormat::Rgba8UnormSrgb;
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("test target"),
            size: wgpu::Extent3d { width: 64, height: 32, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor::default());

        let ctx = RenderCtx::new(&device, &queue, format, Viewport::new(64.0, 32.0));
        let mut renderer = ShapeRenderer::new();
        renderer.prepare(&ctx, DEFAULT_SCALE).unwrap();

        let degenerate: Shape = Polygon::new(ShapeId(1), vec![Point::at(0.0, 0.0)]).into();
        let line: Shape = Line::new(ShapeId(2), Point::at(-5.0, 0.0), Point::at(5.0, 0.0)).into();

        let mut target = RenderTarget::new(&mut encoder, &view);
        assert_eq!(renderer.render(&ctx, &mut target, &degenerate), Ok(DrawOutcome::Skipped));
        assert_eq!(renderer.render(&ctx, &mut target, &line), Ok(DrawOutcome::Drawn));
        drop(target);
        queue.submit(std::iter::once(encoder.finish()));
    }

    #[test]
    fn polygon_packs_fan() {
        let poly = Polygon::new(
            ShapeId(1),
            vec![Point::at(0.0, 0.0), Point::at(5.0, 0.0), Point::at(5.0, 5.0), Point::at(0.0, 5.0)],
        );
        let mesh = ShapeMesh::from_shape(&Shape::Polygon(poly), 1.0);
        assert_eq!(mesh.topology, Topology::TriangleFan);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }
}
