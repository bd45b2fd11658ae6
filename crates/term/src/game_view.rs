//! GameView: draws a [`Session`] through the [`Canvas`] contract.
//!
//! This module is pure (no I/O). Layout works in viewport pixels; the widget
//! rectangles come from the same table the session hit-tests against.

use crate::canvas::CellCanvas;
use crate::core::Session;
use crate::fb::FrameBuffer;
use crate::types::layout::{settings_origin_x, settings_origin_y};
use crate::types::{
    widget_rect, widgets_for, Canvas, FontFamily, Mode, Point, Rgb, Size, ViewportSize, Widget,
    CELL_HEIGHT_PX, CELL_WIDTH_PX,
};

const TITLE: &str = "Dragon Typer";
const GAME_OVER_TEXT: &str = "Game Over! Press any key to return to menu.";
const BACK_TEXT: &str = "Press any key to return to menu";

const TITLE_SIZE: u8 = 50;
const BUTTON_SIZE: u8 = 34;
const HUD_SIZE: u8 = 24;

/// Distance of the score/lives/input row from the viewport bottom.
const HUD_OFFSET: f32 = 75.0;
const DEADLINE_THICKNESS: f32 = 4.0;
const LIST_STEP: f32 = 32.0;
const LIST_MARGIN: f32 = 100.0;

/// Stateless scene renderer; one method per mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Draw the current mode's scene.
    pub fn render(&self, session: &Session, canvas: &mut dyn Canvas) {
        let vp = canvas.viewport_size();
        match session.mode() {
            Mode::Menu => self.draw_menu(canvas, vp),
            Mode::Playing => self.draw_playing(session, canvas, vp),
            Mode::Paused => self.draw_buttons(Mode::Paused, canvas, vp, Rgb::WHITE),
            Mode::GameOver => self.draw_game_over(canvas, vp),
            Mode::Scoreboard => self.draw_scoreboard(session, canvas),
            Mode::Settings => self.draw_settings(session, canvas, vp),
        }
    }

    /// Render into a framebuffer sized to the session viewport.
    pub fn render_into(&self, session: &Session, fb: &mut FrameBuffer) {
        let vp = session.viewport();
        fb.resize(
            (vp.width / CELL_WIDTH_PX) as u16,
            (vp.height / CELL_HEIGHT_PX) as u16,
        );
        let mut canvas = CellCanvas::new(fb);
        canvas.clear(Rgb::BLACK);
        self.render(session, &mut canvas);
    }

    fn draw_menu(&self, canvas: &mut dyn Canvas, vp: ViewportSize) {
        let start = widget_rect(Widget::Start, vp);
        let title_y = (start.origin.y - 3.0 * CELL_HEIGHT_PX).max(0.0);
        centered(canvas, vp, TITLE, title_y, Rgb::GREEN, TITLE_SIZE);
        self.draw_buttons(Mode::Menu, canvas, vp, Rgb::GREEN);
    }

    fn draw_buttons(&self, mode: Mode, canvas: &mut dyn Canvas, vp: ViewportSize, color: Rgb) {
        for widget in widgets_for(mode) {
            let rect = widget_rect(*widget, vp);
            canvas.draw_label(
                widget.label(),
                rect.origin,
                color,
                BUTTON_SIZE,
                FontFamily::BitFont,
            );
        }
    }

    fn draw_playing(&self, session: &Session, canvas: &mut dyn Canvas, vp: ViewportSize) {
        self.draw_buttons(Mode::Playing, canvas, vp, Rgb::WHITE);

        canvas.draw_rect(
            Point::new(0.0, session.deadline_y()),
            Size::new(vp.width, DEADLINE_THICKNESS),
            Rgb::WHITE,
        );

        let font = session.font();
        for (entity, matched_len) in session.highlights() {
            let (matched, rest) = entity.word().split_at(matched_len);
            let at = Point::new(entity.x(), entity.y());
            let size = entity.font_size();
            canvas.draw_label(matched, at, Rgb::GREEN, size, font);
            let advance = canvas.measure(matched, size, font);
            canvas.draw_label(rest, Point::new(at.x + advance, at.y), Rgb::WHITE, size, font);
        }

        let hud_y = vp.height - HUD_OFFSET;
        centered(canvas, vp, session.input(), hud_y, Rgb::WHITE, HUD_SIZE);

        let score = format!("Score: {}", session.score());
        canvas.draw_label(&score, Point::new(10.0, hud_y), Rgb::WHITE, HUD_SIZE, FontFamily::BitFont);

        let lives = format!("Lives: {}", session.lives());
        let width = canvas.measure(&lives, HUD_SIZE, FontFamily::BitFont);
        let x = (vp.width - width - 10.0).max(0.0);
        canvas.draw_label(&lives, Point::new(x, hud_y), Rgb::WHITE, HUD_SIZE, FontFamily::BitFont);
    }

    fn draw_game_over(&self, canvas: &mut dyn Canvas, vp: ViewportSize) {
        centered(canvas, vp, GAME_OVER_TEXT, vp.height / 2.0, Rgb::RED, BUTTON_SIZE);
    }

    fn draw_scoreboard(&self, session: &Session, canvas: &mut dyn Canvas) {
        let mut y = LIST_MARGIN;
        for standing in session.high_scores().standings() {
            let line = format!("{}: {}", standing.label, standing.score);
            canvas.draw_label(&line, Point::new(LIST_MARGIN, y), Rgb::GREEN, HUD_SIZE, FontFamily::BitFont);
            y += LIST_STEP;
        }
        canvas.draw_label(BACK_TEXT, Point::new(LIST_MARGIN, y), Rgb::RED, HUD_SIZE, FontFamily::BitFont);
    }

    fn draw_settings(&self, session: &Session, canvas: &mut dyn Canvas, vp: ViewportSize) {
        canvas.draw_label(
            BACK_TEXT,
            Point::new(LIST_MARGIN, LIST_MARGIN),
            Rgb::RED,
            HUD_SIZE,
            FontFamily::BitFont,
        );

        let sx = settings_origin_x(vp);
        let sy = settings_origin_y(vp);
        let value_x = sx + 232.0;
        let font = session.font();
        let bit = FontFamily::BitFont;

        canvas.draw_label("FONT", Point::new(sx, sy), Rgb::GREEN, BUTTON_SIZE, bit);
        canvas.draw_label(font.display_name(), Point::new(value_x, sy), Rgb::GREEN, BUTTON_SIZE, font);

        let row2 = sy + LIST_STEP;
        canvas.draw_label("FONT SIZE", Point::new(sx, row2), Rgb::GREEN, BUTTON_SIZE, bit);
        let size = session.font_size().to_string();
        canvas.draw_label(&size, Point::new(value_x, row2), Rgb::GREEN, BUTTON_SIZE, bit);

        self.draw_buttons(Mode::Settings, canvas, vp, Rgb::GREEN);
    }
}

/// Draw `text` horizontally centered at height `y`.
fn centered(canvas: &mut dyn Canvas, vp: ViewportSize, text: &str, y: f32, color: Rgb, size: u8) {
    let width = canvas.measure(text, size, FontFamily::BitFont);
    let x = ((vp.width - width) / 2.0).max(0.0);
    canvas.draw_label(text, Point::new(x, y), color, size, FontFamily::BitFont);
}
