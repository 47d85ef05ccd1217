//! Drawing seam between the particle field and whatever rasterizes it.

use glam::Vec2;

/// Minimal immediate-mode 2D surface.
///
/// The web frontend implements this over a Canvas 2D context; tests record
/// the calls instead.
pub trait Surface {
    /// Clear the whole `size` area.
    fn clear(&mut self, size: Vec2);
    /// Stroke a line with the link colour at `opacity` in \[0, 1\].
    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32);
    /// Fill a circle with the particle colour.
    fn fill_circle(&mut self, center: Vec2, radius: f32);
}
