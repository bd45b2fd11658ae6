//! Mapping from terminal events to game input events.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::types::input::{BACKSPACE_CHAR, ENTER_CHAR};
use crate::types::{
    InputEvent, Key, Point, PointerButton, ViewportSize, CELL_HEIGHT_PX, CELL_WIDTH_PX,
};

/// Events produced by one terminal event. A printable key yields both a key
/// press and the text it typed.
pub type Translated = ArrayVec<InputEvent, 2>;

/// Viewport size, in pixels, of a terminal of `cols` x `rows` cells.
pub fn viewport_for_cells(cols: u16, rows: u16) -> ViewportSize {
    ViewportSize::new(
        f32::from(cols) * CELL_WIDTH_PX,
        f32::from(rows) * CELL_HEIGHT_PX,
    )
}

/// Pixel position of the center of cell (`col`, `row`).
pub fn cell_center(col: u16, row: u16) -> Point {
    Point::new(
        f32::from(col) * CELL_WIDTH_PX + CELL_WIDTH_PX / 2.0,
        f32::from(row) * CELL_HEIGHT_PX + CELL_HEIGHT_PX / 2.0,
    )
}

/// Translate one terminal event.
pub fn translate(event: &Event) -> Translated {
    let mut out = Translated::new();
    match event {
        Event::Key(key) => translate_key(key, &mut out),
        Event::Mouse(mouse) => translate_mouse(mouse, &mut out),
        Event::Resize(cols, rows) => {
            let vp = viewport_for_cells(*cols, *rows);
            out.push(InputEvent::Resized {
                width: vp.width,
                height: vp.height,
            });
        }
        _ => {}
    }
    out
}

fn translate_key(key: &KeyEvent, out: &mut Translated) {
    // Auto-repeat types like a press; releases are not needed.
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('c' | 'C')) {
            out.push(InputEvent::Closed);
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => {
            out.push(InputEvent::KeyDown(Key::Char(c)));
            out.push(InputEvent::TextInput(c));
        }
        KeyCode::Enter => {
            out.push(InputEvent::KeyDown(Key::Enter));
            out.push(InputEvent::TextInput(ENTER_CHAR));
        }
        KeyCode::Backspace => {
            out.push(InputEvent::KeyDown(Key::Backspace));
            out.push(InputEvent::TextInput(BACKSPACE_CHAR));
        }
        KeyCode::Esc => out.push(InputEvent::KeyDown(Key::Escape)),
        KeyCode::Tab => out.push(InputEvent::KeyDown(Key::Tab)),
        KeyCode::Left => out.push(InputEvent::KeyDown(Key::Left)),
        KeyCode::Right => out.push(InputEvent::KeyDown(Key::Right)),
        KeyCode::Up => out.push(InputEvent::KeyDown(Key::Up)),
        KeyCode::Down => out.push(InputEvent::KeyDown(Key::Down)),
        _ => out.push(InputEvent::KeyDown(Key::Other)),
    }
}

fn translate_mouse(mouse: &MouseEvent, out: &mut Translated) {
    let MouseEventKind::Down(button) = mouse.kind else {
        return;
    };
    let button = match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    };
    let at = cell_center(mouse.column, mouse.row);
    out.push(InputEvent::PointerDown {
        button,
        x: at.x,
        y: at.y,
    });
}

/// Wait up to `timeout` for terminal input, then drain everything queued.
///
/// Translated events are appended to `queue` in arrival order.
pub fn drain_events(timeout: Duration, queue: &mut Vec<InputEvent>) -> io::Result<()> {
    if !event::poll(timeout)? {
        return Ok(());
    }
    loop {
        let ev = event::read()?;
        queue.extend(translate(&ev));
        if !event::poll(Duration::ZERO)? {
            return Ok(());
        }
    }
}
