//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every game rule of the falling-words typing game. It has
//! no dependency on a terminal, a window or the file system: rendering goes
//! through [`types::Canvas`] and persistence through [`Persistence`].
//!
//! - **Deterministic**: the same seed and the same inputs produce the same game
//! - **Testable**: the session can be driven entirely from unit tests
//! - **Portable**: any front end that can produce [`types::InputEvent`]s can host it
//!
//! # Module Structure
//!
//! - [`dictionary`]: word list loaded once at startup
//! - [`entity`]: a falling word with position, speed and prefix matching
//! - [`spawner`]: score-dependent spawn probability and speed
//! - [`matcher`]: input buffer editing, submit and scoring tiers
//! - [`collision`]: deadline crossing and life accounting
//! - [`scores`]: high-score list and place labels
//! - [`snapshot`]: save slot text format
//! - [`persist`]: persistence contract plus an in-memory store
//! - [`machine`]: mode transition table
//! - [`controls`]: per-mode mapping of input events to actions
//! - [`session`]: the controller that ties it all together
//!
//! # Game Rules
//!
//! - A word spawns at the top of the viewport with probability `2 / max(1, 300 - 2*score)`
//!   per frame and falls at `70 + score` px/sec
//! - Typing the whole word and pressing Enter clears it: 1 point for up to 5
//!   letters, 2 points for 6 to 9, 3 points for 10 or more
//! - A word reaching the deadline, 100px above the viewport bottom, costs a life
//! - The game ends when the third life is lost
//!
//! # Example
//!
//! ```
//! use dragon_typer_core::{HighScores, MemoryStore, Session, WordList};
//! use dragon_typer_core::types::{Action, Mode};
//!
//! let words = WordList::from_text("ember wyrm hoard").unwrap();
//! let mut store = MemoryStore::new();
//! let mut session = Session::new(words, HighScores::new(), 12345);
//!
//! session.apply(Action::Start, &mut store);
//! assert_eq!(session.mode(), Mode::Playing);
//!
//! // One 16ms frame.
//! session.tick(0.016, &mut store);
//! assert_eq!(session.lives(), 3);
//! ```
//!
//! # Timing
//!
//! [`Session::tick`](session::Session::tick) takes the elapsed time in seconds
//! since the previous frame. Movement is frame-rate independent; the spawn
//! check runs once per tick.

pub mod collision;
pub mod controls;
pub mod dictionary;
pub mod entity;
pub mod error;
pub mod machine;
pub mod matcher;
pub mod persist;
pub mod rng;
pub mod scores;
pub mod session;
pub mod snapshot;
pub mod spawner;

pub use dragon_typer_types as types;

// Re-export commonly used types for convenience
pub use dictionary::WordList;
pub use entity::FallingWord;
pub use error::GameError;
pub use machine::{transition, Effect, Step, Trigger};
pub use persist::{MemoryStore, Persistence};
pub use rng::SimpleRng;
pub use scores::{place_label, HighScores, Standing};
pub use session::{Session, TickReport, Transition};
pub use snapshot::{EntitySnapshot, SessionSnapshot};
pub use spawner::Spawner;
