//! Terminal input module.
//!
//! Maps `crossterm` events into the framework-free [`types::InputEvent`]
//! queue the session consumes. The session itself never sees crossterm.

pub mod map;

pub use dragon_typer_types as types;

pub use map::{cell_center, drain_events, translate, viewport_for_cells, Translated};
