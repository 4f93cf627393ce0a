//! Core engine-facing contracts.
//!
//! The stable interface between the window runtime and the host that owns the
//! shape collection.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
