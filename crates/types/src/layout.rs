//! Clickable widget placement.
//!
//! Both the scene view (drawing) and the session controls (hit testing) read
//! widget rectangles from here, so what is drawn is what gets clicked.

use crate::geometry::{Rect, ViewportSize};
use crate::{Action, Mode, CELL_HEIGHT_PX, CELL_WIDTH_PX};

const BUTTON_W: f32 = 160.0;
const BUTTON_H: f32 = 16.0;
const ROW_STEP: f32 = 32.0;
const ARROW_W: f32 = 16.0;

/// A clickable element of some mode's screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Start,
    Load,
    Scoreboard,
    Settings,
    Quit,
    Pause,
    Resume,
    QuitToMenu,
    Save,
    FontPrev,
    FontNext,
    FontSizeDown,
    FontSizeUp,
}

const MENU: [Widget; 5] = [
    Widget::Start,
    Widget::Load,
    Widget::Scoreboard,
    Widget::Settings,
    Widget::Quit,
];
const PLAYING: [Widget; 1] = [Widget::Pause];
const PAUSED: [Widget; 3] = [Widget::Resume, Widget::QuitToMenu, Widget::Save];
const SETTINGS: [Widget; 4] = [
    Widget::FontPrev,
    Widget::FontNext,
    Widget::FontSizeDown,
    Widget::FontSizeUp,
];

impl Widget {
    pub fn label(&self) -> &'static str {
        match self {
            Widget::Start => "START",
            Widget::Load => "LOAD",
            Widget::Scoreboard => "SCOREBOARD",
            Widget::Settings => "SETTINGS",
            Widget::Quit => "QUIT",
            Widget::Pause => "PAUSE",
            Widget::Resume => "RESUME",
            Widget::QuitToMenu => "QUIT",
            Widget::Save => "SAVE",
            Widget::FontPrev | Widget::FontSizeDown => "<",
            Widget::FontNext | Widget::FontSizeUp => ">",
        }
    }

    pub fn action(&self) -> Action {
        match self {
            Widget::Start => Action::Start,
            Widget::Load => Action::Load,
            Widget::Scoreboard => Action::OpenScoreboard,
            Widget::Settings => Action::OpenSettings,
            Widget::Quit => Action::Quit,
            Widget::Pause => Action::Pause,
            Widget::Resume => Action::Resume,
            Widget::QuitToMenu => Action::QuitToMenu,
            Widget::Save => Action::Save,
            Widget::FontPrev => Action::FontPrev,
            Widget::FontNext => Action::FontNext,
            Widget::FontSizeDown => Action::FontSizeDown,
            Widget::FontSizeUp => Action::FontSizeUp,
        }
    }
}

/// Widgets shown in `mode`, in drawing order.
pub fn widgets_for(mode: Mode) -> &'static [Widget] {
    match mode {
        Mode::Menu => &MENU,
        Mode::Playing => &PLAYING,
        Mode::Paused => &PAUSED,
        Mode::Settings => &SETTINGS,
        Mode::GameOver | Mode::Scoreboard => &[],
    }
}

/// Round down onto the terminal cell grid, so a widget's drawn cells and its
/// clickable area coincide.
fn snap(v: f32, cell: f32) -> f32 {
    ((v / cell).floor() * cell).max(0.0)
}

/// Left edge of the settings rows.
pub fn settings_origin_x(viewport: ViewportSize) -> f32 {
    snap(viewport.width / 2.0 - 176.0, CELL_WIDTH_PX)
}

/// Top of the first settings row (font family); the size row follows one step below.
pub fn settings_origin_y(viewport: ViewportSize) -> f32 {
    snap(viewport.height / 2.0 - ROW_STEP, CELL_HEIGHT_PX)
}

/// Rectangle of `widget` for the given viewport.
pub fn widget_rect(widget: Widget, viewport: ViewportSize) -> Rect {
    let column_x = snap(viewport.width / 2.0 - BUTTON_W / 2.0, CELL_WIDTH_PX);
    let column_y = snap(viewport.height / 2.0 - 2.0 * ROW_STEP, CELL_HEIGHT_PX);
    let row = |i: f32| column_y + i * ROW_STEP;

    let sx = settings_origin_x(viewport);
    let sy = settings_origin_y(viewport);

    match widget {
        Widget::Start => Rect::new(column_x, row(0.0), BUTTON_W, BUTTON_H),
        Widget::Load => Rect::new(column_x, row(1.0), BUTTON_W, BUTTON_H),
        Widget::Scoreboard => Rect::new(column_x, row(2.0), BUTTON_W, BUTTON_H),
        Widget::Settings => Rect::new(column_x, row(3.0), BUTTON_W, BUTTON_H),
        Widget::Quit => Rect::new(column_x, row(4.0), BUTTON_W, BUTTON_H),
        Widget::Pause => Rect::new(0.0, 0.0, 64.0, BUTTON_H),
        Widget::Resume => Rect::new(column_x, row(1.0), BUTTON_W, BUTTON_H),
        Widget::QuitToMenu => Rect::new(column_x, row(2.0), BUTTON_W, BUTTON_H),
        Widget::Save => Rect::new(column_x, row(3.0), BUTTON_W, BUTTON_H),
        Widget::FontPrev => Rect::new(sx + 200.0, sy, ARROW_W, BUTTON_H),
        Widget::FontNext => Rect::new(sx + 320.0, sy, ARROW_W, BUTTON_H),
        Widget::FontSizeDown => Rect::new(sx + 200.0, sy + ROW_STEP, ARROW_W, BUTTON_H),
        Widget::FontSizeUp => Rect::new(sx + 320.0, sy + ROW_STEP, ARROW_W, BUTTON_H),
    }
}

/// The widget of `mode` under `(x, y)`, if any.
pub fn widget_at(mode: Mode, viewport: ViewportSize, x: f32, y: f32) -> Option<Widget> {
    widgets_for(mode)
        .iter()
        .copied()
        .find(|w| widget_rect(*w, viewport).contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widgets_of_a_mode_do_not_overlap() {
        let vp = ViewportSize::new(640.0, 384.0);
        for mode in Mode::ALL {
            let widgets = widgets_for(mode);
            for (i, a) in widgets.iter().enumerate() {
                for b in &widgets[i + 1..] {
                    let ra = widget_rect(*a, vp);
                    let rb = widget_rect(*b, vp);
                    assert!(
                        !ra.contains(rb.origin.x, rb.origin.y),
                        "{a:?} overlaps {b:?} in {mode:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn hit_test_finds_widget_by_its_center() {
        let vp = ViewportSize::default();
        for mode in Mode::ALL {
            for w in widgets_for(mode) {
                let r = widget_rect(*w, vp);
                let hit = widget_at(
                    mode,
                    vp,
                    r.origin.x + r.size.width / 2.0,
                    r.origin.y + r.size.height / 2.0,
                );
                assert_eq!(hit, Some(*w));
            }
        }
    }

    #[test]
    fn widgets_sit_on_the_cell_grid() {
        let vp = ViewportSize::new(808.0, 600.0);
        for mode in Mode::ALL {
            for w in widgets_for(mode) {
                let r = widget_rect(*w, vp);
                assert_eq!(r.origin.x % CELL_WIDTH_PX, 0.0, "{w:?}");
                assert_eq!(r.origin.y % CELL_HEIGHT_PX, 0.0, "{w:?}");
            }
        }
        assert_eq!(widget_rect(Widget::Start, vp).origin.y, 224.0);
    }

    #[test]
    fn result_screens_have_no_widgets() {
        let vp = ViewportSize::default();
        assert_eq!(widget_at(Mode::GameOver, vp, 400.0, 300.0), None);
        assert_eq!(widget_at(Mode::Scoreboard, vp, 0.0, 0.0), None);
    }
}
