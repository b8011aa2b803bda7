//! Renderer lifecycle, frame scheduling and offline rendering.

/// Offline rendering into frame sinks.
pub mod offline;
/// `WaveFieldRenderer` lifecycle.
pub mod renderer;
/// Frame scheduling and clocks.
pub mod schedule;
