//! Mouse interaction.
//!
//! Render code registers a [`HitArea`] for every clickable region; the
//! event loop hit-tests mouse events against the registry.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
