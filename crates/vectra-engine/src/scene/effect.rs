/// Per-shape affine transformation.
///
/// Absent effects (`Option::None` on a shape) are equivalent to [`Effect::IDENTITY`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Effect {
    /// Translation along X.
    pub dx: f32,
    /// Translation along Y.
    pub dy: f32,
    /// Counter-clockwise rotation about the Z axis, in degrees.
    pub rotate: f32,
    /// Uniform scale on X and Y (Z scale stays `1`). Expected `>= 0`.
    pub scale: f32,
}

impl Effect {
    pub const IDENTITY: Self = Self { dx: 0.0, dy: 0.0, rotate: 0.0, scale: 1.0 };

    #[inline]
    pub const fn new(dx: f32, dy: f32, rotate: f32, scale: f32) -> Self {
        Self { dx, dy, rotate, scale }
    }

    #[inline]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self::new(dx, dy, 0.0, 1.0)
    }

    #[inline]
    pub const fn rotate(degrees: f32) -> Self {
        Self::new(0.0, 0.0, degrees, 1.0)
    }

    #[inline]
    pub const fn scale(factor: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, factor)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Resolves an optional effect to a concrete one.
    #[inline]
    pub fn or_identity(effect: Option<&Effect>) -> Effect {
        effect.copied().unwrap_or(Self::IDENTITY)
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::IDENTITY
    }
}
