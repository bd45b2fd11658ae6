//! Terminal front end for the typing game.
//!
//! Renders into a cell framebuffer through the [`types::Canvas`] contract and
//! flushes it to the terminal with diffed writes. The core never sees any of
//! this; it only hands out read-only session state.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use dragon_typer_core as core;
pub use dragon_typer_types as types;

pub use canvas::CellCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
