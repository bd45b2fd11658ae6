//! Input interpretation - turns raw input events into session intents.

use crate::matcher::accepts_char;
use crate::types::input::{BACKSPACE_CHAR, ENTER_CHAR};
use crate::types::{widget_at, Action, InputEvent, Key, Mode, PointerButton, ViewportSize};

/// What an input event asks of the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Action(Action),
    Resize(ViewportSize),
    Close,
}

/// Interpret `event` for a session in `mode` drawn into `viewport`.
pub fn interpret(mode: Mode, event: &InputEvent, viewport: ViewportSize) -> Option<Control> {
    match *event {
        InputEvent::Closed => Some(Control::Close),
        InputEvent::Resized { width, height } => {
            Some(Control::Resize(ViewportSize::new(width, height)))
        }
        InputEvent::PointerDown { button, x, y } => {
            if button != PointerButton::Left {
                return None;
            }
            match widget_at(mode, viewport, x, y) {
                Some(widget) => Some(Control::Action(widget.action())),
                None if mode.dismissable() => Some(Control::Action(Action::Dismiss)),
                None => None,
            }
        }
        InputEvent::TextInput(c) => text_action(mode, c).map(Control::Action),
        InputEvent::KeyDown(key) => key_action(mode, key).map(Control::Action),
    }
}

fn text_action(mode: Mode, c: char) -> Option<Action> {
    if mode != Mode::Playing {
        return None;
    }
    match c {
        ENTER_CHAR => Some(Action::Submit),
        BACKSPACE_CHAR => Some(Action::Backspace),
        c if accepts_char(c) => Some(Action::Type(c)),
        _ => None,
    }
}

fn key_action(mode: Mode, key: Key) -> Option<Action> {
    if mode.dismissable() {
        return Some(Action::Dismiss);
    }
    match (mode, key) {
        (Mode::Playing, Key::Escape) => Some(Action::Pause),

        // Keyboard shortcuts for the clickable menus.
        (Mode::Menu, Key::Char('s' | 'S')) => Some(Action::Start),
        (Mode::Menu, Key::Char('l' | 'L')) => Some(Action::Load),
        (Mode::Menu, Key::Char('b' | 'B')) => Some(Action::OpenScoreboard),
        (Mode::Menu, Key::Char('o' | 'O')) => Some(Action::OpenSettings),
        (Mode::Menu, Key::Char('q' | 'Q')) => Some(Action::Quit),
        (Mode::Paused, Key::Char('r' | 'R') | Key::Escape) => Some(Action::Resume),
        (Mode::Paused, Key::Char('q' | 'Q')) => Some(Action::QuitToMenu),
        (Mode::Paused, Key::Char('s' | 'S')) => Some(Action::Save),
        _ => None,
    }
}
