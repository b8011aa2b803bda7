//! Portfolio project list and HTML card rendering.

/// HTML card markup.
pub mod card;
/// Project records and loading.
pub mod model;

#[cfg(test)]
#[path = "../../tests/unit/projects/cards.rs"]
mod tests;
