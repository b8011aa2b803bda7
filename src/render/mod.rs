//! Drawing surfaces and frame rendering.

/// Surface seam, stroke styles and frame readback type.
pub mod backend;
/// CPU raster surface powered by `vello_cpu`.
pub mod cpu;
/// Per-frame wave field drawing.
pub mod frame;
/// Surface that records draw calls.
pub mod recording;
