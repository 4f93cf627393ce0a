use core::fmt;

/// Programmable stage a shader module targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Failures that abort a draw call or a frame, never the process.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The shader compiler rejected a stage; `log` holds its diagnostics.
    #[error("{stage} shader failed to compile:\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    /// The device rejected a render pipeline built from compiled stages.
    #[error("shape pipeline creation failed: {log}")]
    PipelineCreation { log: String },

    /// The device could not allocate a per-draw buffer.
    #[error("buffer `{label}` creation failed: {log}")]
    BufferCreation { label: &'static str, log: String },

    /// A per-shape vertex or index buffer exceeds the device's buffer size limit.
    #[error("buffer of {size} bytes exceeds the device limit of {limit} bytes")]
    BufferTooLarge { size: u64, limit: u64 },
}
