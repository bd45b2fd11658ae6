//! Render collaborator contract.
//!
//! The simulation never draws. A front end implements [`Canvas`] and the view
//! layer feeds it simulation data (word text, positions, matched lengths).

use crate::geometry::{Point, Rgb, Size, ViewportSize};
use crate::FontFamily;

/// Minimal drawing surface consumed by the view layer.
pub trait Canvas {
    /// Current drawable area in viewport pixels.
    fn viewport_size(&self) -> ViewportSize;

    /// Draw `text` with its top-left corner at `position`.
    fn draw_label(
        &mut self,
        text: &str,
        position: Point,
        color: Rgb,
        font_size: u8,
        font: FontFamily,
    );

    /// Fill a rectangle.
    fn draw_rect(&mut self, position: Point, size: Size, color: Rgb);

    /// Horizontal advance of `text` in viewport pixels.
    ///
    /// Text measurement belongs to the renderer; callers use it to place the
    /// unmatched part of a word right after the matched part.
    fn measure(&self, text: &str, font_size: u8, font: FontFamily) -> f32;
}
