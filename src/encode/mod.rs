//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order and are used by
//! [`crate::session::offline::render_animation`].

/// Generic frame sink trait and built-in sinks.
pub mod sink;
