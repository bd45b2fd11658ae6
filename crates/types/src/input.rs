//! Discrete input events delivered by the input collaborator.

/// Pointer button of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Non-text key identity for `KeyDown` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Backspace,
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Char(char),
    Other,
}

/// One event from the per-tick input queue.
///
/// A typed character usually arrives twice: once as `KeyDown` (key identity)
/// and once as `TextInput` (the character the key produced).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Closed,
    PointerDown { button: PointerButton, x: f32, y: f32 },
    TextInput(char),
    KeyDown(Key),
    Resized { width: f32, height: f32 },
}

/// Character delivered for the enter key.
pub const ENTER_CHAR: char = '\r';

/// Character delivered for the backspace key.
pub const BACKSPACE_CHAR: char = '\u{8}';
