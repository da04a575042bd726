//! The raster target: a fixed-size `tiny-skia` pixmap.
//!
//! Every colour written is opaque, so the pixmap's premultiplied RGBA bytes
//! equal the straight RGB values.

use crate::colour::Colour;
use crate::error::{CanvasError, CanvasResult};
use tiny_skia::Pixmap;

/// Background every fresh or cleared surface is filled with.
pub const BACKGROUND: Colour = Colour::WHITE;

/// An owned `width × height` pixel buffer.
///
/// Only the canvas mutates it; hosts receive `&Surface` for display.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a surface filled with [`BACKGROUND`].
    ///
    /// Fails with `InvalidArgument` for non-positive dimensions and with
    /// `Render` when the pixmap cannot be created.
    pub fn new(width: i32, height: i32) -> CanvasResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::invalid(format!(
                "surface dimensions must be positive, got {width}x{height}"
            )));
        }
        let (w, h) = (width as u32, height as u32);
        let pixmap = Pixmap::new(w, h).ok_or_else(|| {
            CanvasError::Render(format!("cannot allocate a {w}x{h} pixmap"))
        })?;

        let mut surface = Self { pixmap };
        surface.fill(BACKGROUND);
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Colour at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Colour> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let p = self.pixmap.pixel(x, y)?;
        Some(Colour::new(p.red(), p.green(), p.blue()))
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Colour> + '_ {
        self.rgba().iter().map(|&[r, g, b, _]| Colour::new(r, g, b))
    }

    /// Packed `RGBA8` bytes, row-major. Alpha is always 255.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Packed `RGB8` bytes, row-major, for handing to an image encoder.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.rgba().iter().flat_map(|&[r, g, b, _]| [r, g, b]).collect()
    }

    /// Read-only view of the backing pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn is_blank(&self) -> bool {
        self.pixels().all(|p| p == BACKGROUND)
    }

    /// Number of pixels that differ from the background.
    pub fn count_painted(&self) -> usize {
        self.pixels().filter(|&p| p != BACKGROUND).count()
    }

    pub(crate) fn fill(&mut self, colour: Colour) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(colour.r, colour.g, colour.b, 255));
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    fn rgba(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(self.pixmap.data())
    }
}

impl PartialEq for Surface {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.pixmap.data() == other.pixmap.data()
    }
}

impl Eq for Surface {}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("painted", &self.count_painted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_surface_is_white_and_sized() {
        let s = Surface::new(4, 3).unwrap();
        assert_eq!((s.width(), s.height()), (4, 3));
        assert_eq!(s.pixels().len(), 12);
        assert!(s.is_blank());
        assert_eq!(s.to_rgb_bytes().len(), 36);
        assert_eq!(s.as_rgba_bytes().len(), 48);
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        for (w, h) in [(0, 10), (10, 0), (-5, 10), (10, -1)] {
            assert!(
                matches!(Surface::new(w, h), Err(CanvasError::InvalidArgument(_))),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn oversized_pixmap_is_a_render_error() {
        assert!(matches!(
            Surface::new(i32::MAX, i32::MAX),
            Err(CanvasError::Render(_))
        ));
    }

    #[test]
    fn pixel_outside_is_none() {
        let s = Surface::new(2, 2).unwrap();
        assert_eq!(s.pixel(1, 1), Some(BACKGROUND));
        assert_eq!(s.pixel(-1, 0), None);
        assert_eq!(s.pixel(2, 1), None);
        assert_eq!(s.pixel(0, i64::MAX), None);
    }

    #[test]
    fn bytes_are_row_major() {
        let mut s = Surface::new(2, 2).unwrap();
        s.fill(Colour::new(9, 8, 7));
        assert_eq!(&s.to_rgb_bytes()[3..6], &[9, 8, 7]);
        assert_eq!(&s.as_rgba_bytes()[4..8], &[9, 8, 7, 255]);
        assert_eq!(s.count_painted(), 4);
    }
}
