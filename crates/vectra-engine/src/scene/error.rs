/// Structural violations of the geometry model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("vertex index {index} out of range for polygon with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("vertex {index} is referenced by an edge and cannot be removed")]
    VertexInUse { index: usize },

    #[error("polygon needs at least {min} vertices")]
    TooFewVertices { min: usize },
}
