//! Shared types module - constants, modes, actions and the collaborator contracts
//!
//! Everything in here is pure data with no external dependencies, so it can be
//! used by the simulation core, the terminal front end and tests alike.
//!
//! # Gameplay constants
//!
//! Distances are in viewport pixels, speeds in pixels per second:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_LIVES` | 3 | Lives at the start of a new game |
//! | `BASE_SPEED` | 70.0 | Fall speed of a word spawned at score 0 |
//! | `DEADLINE_OFFSET` | 100.0 | Deadline line distance from the viewport bottom |
//! | `SPAWN_X_MARGIN` | 150.0 | Horizontal room reserved for the word label |
//! | `SPAWN_RANGE_BASE` | 300 | Spawn draw range at score 0 |
//! | `SPAWN_SCORE_FACTOR` | 2 | Range shrink per point of score |
//! | `SPAWN_THRESHOLD` | 1.5 | A draw below this spawns a word |
//! | `DEFAULT_FONT_SIZE` | 24 | Font size on a fresh start |
//! | `FONT_SIZE_MIN`/`MAX` | 4 / 40 | Settings clamp range |
//!
//! # Examples
//!
//! ```
//! use dragon_typer_types::{Action, FontFamily, Mode};
//!
//! assert_eq!(Mode::default(), Mode::Menu);
//! assert_eq!(FontFamily::BitFont.toggled(), FontFamily::Arial);
//! assert_eq!(FontFamily::from_file_name("arial.ttf"), Some(FontFamily::Arial));
//! assert!(Action::Submit.is_edit());
//! ```

pub mod canvas;
pub mod geometry;
pub mod input;
pub mod layout;

pub use canvas::Canvas;
pub use geometry::{Point, Rect, Rgb, Size, ViewportSize};
pub use input::{InputEvent, Key, PointerButton};
pub use layout::{widget_at, widget_rect, widgets_for, Widget};

/// Lives granted by a fresh start.
pub const START_LIVES: u32 = 3;

/// Fall speed (px/sec) of a word spawned at score 0. Each point of score adds 1.
pub const BASE_SPEED: f32 = 70.0;

/// Distance of the deadline line from the bottom of the viewport.
pub const DEADLINE_OFFSET: f32 = 100.0;

/// Horizontal space kept free to the right of a spawned word.
pub const SPAWN_X_MARGIN: f32 = 150.0;

/// Spawn draw range at score 0.
pub const SPAWN_RANGE_BASE: i64 = 300;

/// Range shrink per point of score.
pub const SPAWN_SCORE_FACTOR: i64 = 2;

/// A spawn draw strictly below this value spawns a word.
///
/// The draw is an integer compared against a fractional threshold, so draws
/// `0` and `1` both spawn.
pub const SPAWN_THRESHOLD: f64 = 1.5;

/// Font size used on a fresh start.
pub const DEFAULT_FONT_SIZE: u8 = 24;

/// Smallest font size reachable from settings.
pub const FONT_SIZE_MIN: u8 = 4;

/// Largest font size reachable from settings.
pub const FONT_SIZE_MAX: u8 = 40;

/// Frame interval of the terminal front end (16ms ≈ 60 FPS).
pub const FRAME_MS: u64 = 16;

/// Width of one terminal cell in viewport pixels.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Height of one terminal cell in viewport pixels.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Top-level mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    Scoreboard,
    Settings,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 6] = [
        Mode::Menu,
        Mode::Playing,
        Mode::Paused,
        Mode::GameOver,
        Mode::Scoreboard,
        Mode::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Menu => "menu",
            Mode::Playing => "playing",
            Mode::Paused => "paused",
            Mode::GameOver => "game_over",
            Mode::Scoreboard => "scoreboard",
            Mode::Settings => "settings",
        }
    }

    /// Modes left by any key press or a click outside every widget.
    pub fn dismissable(&self) -> bool {
        matches!(self, Mode::GameOver | Mode::Scoreboard | Mode::Settings)
    }
}

/// The two selectable label fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    BitFont,
    Arial,
}

impl FontFamily {
    /// Font file name as written to the save slot.
    pub fn file_name(&self) -> &'static str {
        match self {
            FontFamily::BitFont => "8BitFont.ttf",
            FontFamily::Arial => "arial.ttf",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "8BitFont.ttf" => Some(FontFamily::BitFont),
            "arial.ttf" => Some(FontFamily::Arial),
            _ => None,
        }
    }

    /// Display name shown in settings.
    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::BitFont => "BitFont",
            FontFamily::Arial => "Arial",
        }
    }

    /// The other font. Cycling in either direction lands here.
    pub fn toggled(&self) -> Self {
        match self {
            FontFamily::BitFont => FontFamily::Arial,
            FontFamily::Arial => FontFamily::BitFont,
        }
    }
}

/// Player intents understood by the session.
///
/// Mode-changing intents go through the transition table; the rest are edits
/// gated by the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Load,
    OpenScoreboard,
    OpenSettings,
    Quit,
    Pause,
    Resume,
    QuitToMenu,
    Save,
    /// Leave a dismissable screen (any key / background click).
    Dismiss,
    Type(char),
    Backspace,
    Submit,
    FontPrev,
    FontNext,
    FontSizeDown,
    FontSizeUp,
}

impl Action {
    /// True for intents that edit the session without changing its mode.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Action::Type(_)
                | Action::Backspace
                | Action::Submit
                | Action::FontPrev
                | Action::FontNext
                | Action::FontSizeDown
                | Action::FontSizeUp
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Load => "load",
            Action::OpenScoreboard => "openScoreboard",
            Action::OpenSettings => "openSettings",
            Action::Quit => "quit",
            Action::Pause => "pause",
            Action::Resume => "resume",
            Action::QuitToMenu => "quitToMenu",
            Action::Save => "save",
            Action::Dismiss => "dismiss",
            Action::Type(_) => "type",
            Action::Backspace => "backspace",
            Action::Submit => "submit",
            Action::FontPrev => "fontPrev",
            Action::FontNext => "fontNext",
            Action::FontSizeDown => "fontSizeDown",
            Action::FontSizeUp => "fontSizeUp",
        }
    }
}
