//! Shared GPU types and CPU-side packing used by all shape kinds.

use bytemuck::{Pod, Zeroable};

use crate::scene::Point;

// ── scale uniform ─────────────────────────────────────────────────────────

/// Global zoom applied in the vertex shader (`coordinates * scale`).
pub const DEFAULT_SCALE: f32 = 0.05;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ScaleUniform {
    pub scale: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

impl ScaleUniform {
    #[inline]
    pub(super) fn new(scale: f32) -> Self {
        Self { scale, _pad: [0.0; 3] }
    }
}

/// Returns the `wgpu` minimum binding size for the scale uniform buffer.
pub(super) fn scale_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ScaleUniform>() as u64)
        .expect("ScaleUniform has non-zero size by construction")
}

// ── vertex ────────────────────────────────────────────────────────────────

/// Floats per interleaved vertex: position (2) + color (3).
pub const FLOATS_PER_VERTEX: usize = 5;

/// Interleaved vertex as uploaded: `coordinates` at location 0, `vertex_color` at location 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    pub coordinates: [f32; 2],
    /// Normalized RGB; alpha is not forwarded to the shader.
    pub vertex_color: [f32; 3],
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // coordinates
        1 => Float32x3  // vertex_color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Uncorrected vertex for a world-space point.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self { coordinates: [p.x, p.y], vertex_color: p.color.to_rgb_f32() }
    }
}

/// Divides every x coordinate by `aspect` (`drawable width / height`).
///
/// Applied once, after assembly and before upload, to every shape kind alike.
pub fn correct_aspect(vertices: &mut [ShapeVertex], aspect: f32) {
    if !(aspect.is_finite() && aspect > 0.0) {
        log::debug!("correct_aspect: ignoring invalid aspect ratio {aspect}");
        return;
    }
    for v in vertices {
        v.coordinates[0] /= aspect;
    }
}

// ── mesh ──────────────────────────────────────────────────────────────────

/// Primitive topology of a [`ShapeMesh`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Independent segments, two vertices each.
    Lines,
    /// Independent triangles, three vertices each, no index buffer.
    Triangles,
    /// Fan around vertex 0; drawn as an indexed triangle list.
    TriangleFan,
}

/// CPU-side geometry for one draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMesh {
    pub topology: Topology,
    pub vertices: Vec<ShapeVertex>,
    /// Only populated for [`Topology::TriangleFan`].
    pub indices: Vec<u32>,
}

impl ShapeMesh {
    #[inline]
    pub fn empty(topology: Topology) -> Self {
        Self { topology, vertices: Vec::new(), indices: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// Number of lines or triangles this mesh draws.
    pub fn primitive_count(&self) -> usize {
        match self.topology {
            Topology::Lines => self.vertices.len() / 2,
            Topology::Triangles => self.vertices.len() / 3,
            Topology::TriangleFan => self.indices.len() / 3,
        }
    }

    /// Number of vertices (or indices, when indexed) passed to the draw call.
    #[inline]
    pub fn draw_count(&self) -> u32 {
        if self.indices.is_empty() {
            self.vertices.len() as u32
        } else {
            self.indices.len() as u32
        }
    }

    /// Flat float view in upload order, `FLOATS_PER_VERTEX` per vertex.
    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn vertex_stride_is_five_floats() {
        assert_eq!(
            std::mem::size_of::<ShapeVertex>(),
            FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
        assert_eq!(ShapeVertex::layout().array_stride, 20);
    }

    #[test]
    fn from_point_normalizes_color() {
        let v = ShapeVertex::from_point(Point::new(1.5, -2.0, Color::rgb(255, 0, 51)));
        assert_eq!(v.coordinates, [1.5, -2.0]);
        assert_eq!(v.vertex_color, [1.0, 0.0, 0.2]);
    }

    #[test]
    fn aspect_correction_only_touches_x() {
        let mut vs = [
            ShapeVertex::from_point(Point::at(-5.0, 5.0)),
            ShapeVertex::from_point(Point::at(5.0, -5.0)),
        ];
        correct_aspect(&mut vs, 2.0);
        assert_eq!(vs[0].coordinates, [-2.5, 5.0]);
        assert_eq!(vs[1].coordinates, [2.5, -5.0]);
    }

    #[test]
    fn aspect_correction_ignores_invalid_ratio() {
        let mut vs = [ShapeVertex::from_point(Point::at(4.0, 1.0))];
        correct_aspect(&mut vs, 0.0);
        correct_aspect(&mut vs, f32::NAN);
        assert_eq!(vs[0].coordinates, [4.0, 1.0]);
    }

    #[test]
    fn uniform_is_sixteen_bytes() {
        assert_eq!(scale_ubo_min_binding_size().get(), 16);
        assert_eq!(ScaleUniform::new(DEFAULT_SCALE).scale, 0.05);
    }

    #[test]
    fn floats_view_is_interleaved() {
        let mesh = ShapeMesh {
            topology: Topology::Lines,
            vertices: vec![
                ShapeVertex::from_point(Point::new(1.0, 2.0, Color::white())),
                ShapeVertex::from_point(Point::new(3.0, 4.0, Color::black())),
            ],
            indices: Vec::new(),
        };
        assert_eq!(mesh.as_floats(), &[1.0, 2.0, 1.0, 1.0, 1.0, 3.0, 4.0, 0.0, 0.0, 0.0]);
        assert_eq!(mesh.primitive_count(), 1);
        assert_eq!(mesh.draw_count(), 2);
    }
}
