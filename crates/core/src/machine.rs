//! Mode transition table.
//!
//! `transition` is the single place that decides which mode follows which.
//! It is a pure function of `(mode, trigger)`; the session runs the returned
//! effect and moves to the returned mode.

use crate::types::{Action, Mode};

/// What can move a session between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Action(Action),
    /// Collision pass took the last life.
    LivesExhausted,
}

impl From<Action> for Trigger {
    fn from(value: Action) -> Self {
        Trigger::Action(value)
    }
}

/// Side effect attached to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fresh game: score 0, full lives, empty field and input.
    NewGame,
    /// Restore from the save slot; the transition is cancelled without one.
    Restore,
    /// Save on the way into `Paused`.
    AutoSave,
    /// Explicit save; mode unchanged.
    Save,
    /// Resume from the save slot rather than the in-memory state.
    Reload,
    /// Drop the in-memory game, keep the save slot.
    Discard,
    /// Record the final score and empty the save slot.
    RecordGameOver,
    /// Leave the program.
    Exit,
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub to: Mode,
    pub effect: Effect,
}

const fn step(to: Mode, effect: Effect) -> Option<Step> {
    Some(Step { to, effect })
}

/// Look up the transition for `trigger` in `from`. `None` means the trigger
/// does not change modes (it may still be an in-mode edit).
pub fn transition(from: Mode, trigger: Trigger) -> Option<Step> {
    use Action as A;
    use Mode as M;

    let action = match trigger {
        Trigger::LivesExhausted => {
            return match from {
                M::Playing => step(M::GameOver, Effect::RecordGameOver),
                _ => None,
            };
        }
        Trigger::Action(action) => action,
    };

    match (from, action) {
        (M::Menu, A::Start) => step(M::Playing, Effect::NewGame),
        (M::Menu, A::Load) => step(M::Playing, Effect::Restore),
        (M::Menu, A::OpenScoreboard) => step(M::Scoreboard, Effect::None),
        (M::Menu, A::OpenSettings) => step(M::Settings, Effect::None),
        (M::Menu, A::Quit) => step(M::Menu, Effect::Exit),

        (M::Playing, A::Pause) => step(M::Paused, Effect::AutoSave),

        (M::Paused, A::Resume) => step(M::Playing, Effect::Reload),
        (M::Paused, A::QuitToMenu) => step(M::Menu, Effect::Discard),
        (M::Paused, A::Save) => step(M::Paused, Effect::Save),

        (M::GameOver | M::Scoreboard | M::Settings, A::Dismiss) => step(M::Menu, Effect::None),

        _ => None,
    }
}
