//! Dragon Typer (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks share a single import path.

pub use dragon_typer_core as core;
pub use dragon_typer_input as input;
pub use dragon_typer_store as store;
pub use dragon_typer_term as term;
pub use dragon_typer_types as types;
