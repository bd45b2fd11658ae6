//! [`Canvas`] over a cell framebuffer.
//!
//! Viewport pixels map onto cells of `CELL_WIDTH_PX` x `CELL_HEIGHT_PX`. Text is
//! one glyph per cell whatever the requested font size; the bit font is drawn
//! bold and Arial plain.

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{
    Canvas, FontFamily, Point, Rgb, Size, ViewportSize, CELL_HEIGHT_PX, CELL_WIDTH_PX,
};

/// Terminal cell containing pixel coordinate `v`, `None` left of / above the screen.
fn to_cell(v: f32, cell: f32) -> Option<u16> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    Some((v / cell) as u16)
}

/// Number of cells touched by a span of `len` pixels starting at `start`.
fn span_cells(start: f32, len: f32, cell: f32) -> u16 {
    let first = (start / cell).floor();
    let last = ((start + len) / cell).ceil();
    (last - first).max(1.0) as u16
}

pub struct CellCanvas<'a> {
    fb: &'a mut FrameBuffer,
    background: Rgb,
}

impl<'a> CellCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer) -> Self {
        Self {
            fb,
            background: Rgb::BLACK,
        }
    }

    /// Fill the whole framebuffer with `color`; labels drawn afterwards sit on it.
    pub fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.fb.clear(CellStyle::plain(Rgb::WHITE, color).into_cell(' '));
    }
}

impl Canvas for CellCanvas<'_> {
    fn viewport_size(&self) -> ViewportSize {
        ViewportSize::new(
            f32::from(self.fb.width()) * CELL_WIDTH_PX,
            f32::from(self.fb.height()) * CELL_HEIGHT_PX,
        )
    }

    fn draw_label(&mut self, text: &str, position: Point, color: Rgb, _font_size: u8, font: FontFamily) {
        let (Some(col), Some(row)) = (
            to_cell(position.x, CELL_WIDTH_PX),
            to_cell(position.y, CELL_HEIGHT_PX),
        ) else {
            return;
        };
        let style = CellStyle {
            fg: color,
            bg: self.background,
            bold: font == FontFamily::BitFont,
        };
        self.fb.put_str(col, row, text, style);
    }

    fn draw_rect(&mut self, position: Point, size: Size, color: Rgb) {
        let (Some(col), Some(row)) = (
            to_cell(position.x, CELL_WIDTH_PX),
            to_cell(position.y, CELL_HEIGHT_PX),
        ) else {
            return;
        };
        let w = span_cells(position.x, size.width, CELL_WIDTH_PX);
        let h = span_cells(position.y, size.height, CELL_HEIGHT_PX);

        // Shapes thinner than a cell become a rule line.
        let cell = if size.height < CELL_HEIGHT_PX {
            CellStyle::plain(color, self.background).into_cell('─')
        } else {
            CellStyle::plain(color, color).into_cell(' ')
        };
        self.fb.fill(col, row, w, h, cell);
    }

    fn measure(&self, text: &str, _font_size: u8, _font: FontFamily) -> f32 {
        text.chars().count() as f32 * CELL_WIDTH_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lands_in_containing_cell() {
        let mut fb = FrameBuffer::new(10, 4);
        let mut canvas = CellCanvas::new(&mut fb);
        canvas.draw_label("elf", Point::new(17.0, 33.0), Rgb::GREEN, 24, FontFamily::BitFont);
        assert_eq!(fb.row_text(2), "  elf     ");
        let cell = fb.get(2, 2).unwrap();
        assert_eq!(cell.style.fg, Rgb::GREEN);
        assert!(cell.style.bold);
    }

    #[test]
    fn test_offscreen_label_is_dropped() {
        let mut fb = FrameBuffer::new(4, 1);
        let mut canvas = CellCanvas::new(&mut fb);
        canvas.draw_label("x", Point::new(-3.0, 0.0), Rgb::WHITE, 24, FontFamily::Arial);
        canvas.draw_label("x", Point::new(0.0, f32::NAN), Rgb::WHITE, 24, FontFamily::Arial);
        assert_eq!(fb.row_text(0), "    ");
    }

    #[test]
    fn test_thin_rect_is_a_rule() {
        let mut fb = FrameBuffer::new(4, 3);
        let mut canvas = CellCanvas::new(&mut fb);
        canvas.draw_rect(Point::new(0.0, 16.0), Size::new(32.0, 4.0), Rgb::WHITE);
        assert_eq!(fb.row_text(1), "────");
        assert_eq!(fb.row_text(0), "    ");
    }

    #[test]
    fn test_measure_and_viewport_use_cell_size() {
        let mut fb = FrameBuffer::new(100, 40);
        let canvas = CellCanvas::new(&mut fb);
        assert_eq!(canvas.viewport_size(), ViewportSize::new(800.0, 640.0));
        assert_eq!(canvas.measure("wyrm", 24, FontFamily::BitFont), 32.0);
    }
}
