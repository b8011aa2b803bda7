//! Scene configuration for offline renders.

/// JSON scene config.
pub mod config;
