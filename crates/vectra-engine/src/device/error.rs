/// What the frame driver should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame may render normally.
    Reconfigured,
    /// Transient error; drop the current frame.
    SkipFrame,
    /// Unrecoverable (commonly OOM); the host should shut down.
    Fatal,
}
