//! Wave model, field generation and per-frame sampling.

/// Field generation from archetypes.
pub mod generate;
/// `Wave`, `WaveField`, archetypes and palette.
pub mod model;
/// Seedable random source.
pub mod rng;
/// Sampling a wave into a poly-line for one frame.
pub mod sample;
