//! Turtle-graphics canvas: a pen plus the surface it draws on.
//!
//! Every shape is anchored at the pen position. Arguments are validated
//! and any allocation is done before anything is mutated, so a rejected
//! call leaves the pen and the pixels untouched.

use crate::colour::Colour;
use crate::error::{CanvasError, CanvasResult};
use crate::font;
use crate::raster;
use crate::surface::{BACKGROUND, Surface};
use crate::target::DrawTarget;
use kurbo::{BezPath, Circle, Rect};

/// Pen position and colour.
///
/// The position is unconstrained and may lie off the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenState {
    pub x: i32,
    pub y: i32,
    pub colour: Colour,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            colour: Colour::BLACK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    pen: PenState,
    surface: Surface,
}

impl Canvas {
    /// Create a white `width × height` canvas with the pen at the origin
    /// in black.
    pub fn new(width: i32, height: i32) -> CanvasResult<Self> {
        let surface = Surface::new(width, height)?;
        log::debug!("canvas created {width}x{height}");
        Ok(Self {
            pen: PenState::default(),
            surface,
        })
    }

    pub fn pen(&self) -> PenState {
        self.pen
    }

    pub fn position(&self) -> (i32, i32) {
        (self.pen.x, self.pen.y)
    }

    pub fn colour(&self) -> Colour {
        self.pen.colour
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Read-only view of the raster for display. Borrowing it blocks any
    /// further drawing until the view is dropped.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        log::trace!("moveto {x},{y}");
        self.pen.x = x;
        self.pen.y = y;
    }

    /// Line from the pen to `(x, y)`; the pen ends at `(x, y)` even when
    /// the whole segment is clipped away.
    pub fn draw_to(&mut self, x: i32, y: i32) -> CanvasResult<()> {
        log::trace!("drawto {},{} -> {x},{y}", self.pen.x, self.pen.y);
        raster::draw_line(
            &mut self.surface,
            (self.pen.x as i64, self.pen.y as i64),
            (x as i64, y as i64),
            self.pen.colour,
        );
        self.pen.x = x;
        self.pen.y = y;
        Ok(())
    }

    pub fn circle(&mut self, radius: i32, filled: bool) -> CanvasResult<()> {
        if radius <= 0 {
            return Err(CanvasError::invalid(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        log::trace!("circle r={radius} filled={filled} @{},{}", self.pen.x, self.pen.y);
        let shape = Circle::new(self.pen_point(), radius as f64);
        self.paint(&shape, filled);
        Ok(())
    }

    pub fn rect(&mut self, width: i32, height: i32, filled: bool) -> CanvasResult<()> {
        check_extent("rectangle", width, height)?;
        log::trace!(
            "rect {width}x{height} filled={filled} @{},{}",
            self.pen.x,
            self.pen.y
        );
        let (x, y) = (self.pen.x as f64, self.pen.y as f64);
        let shape = Rect::new(x, y, x + width as f64, y + height as f64);
        self.paint(&shape, filled);
        Ok(())
    }

    /// Outline of an isosceles triangle whose base runs right from the pen
    /// and whose apex sits `height` above the base midpoint.
    pub fn tri(&mut self, width: i32, height: i32) -> CanvasResult<()> {
        check_extent("triangle", width, height)?;
        log::trace!("tri {width}x{height} @{},{}", self.pen.x, self.pen.y);
        let (x, y) = (self.pen.x as i64, self.pen.y as i64);
        let (w, h) = (width as i64, height as i64);

        let mut path = BezPath::new();
        path.move_to((x as f64, y as f64));
        path.line_to(((x + w) as f64, y as f64));
        path.line_to(((x + w / 2) as f64, (y - h) as f64));
        path.close_path();
        raster::stroke_shape(&mut self.surface, &path, self.pen.colour);
        Ok(())
    }

    /// Text with its top-left corner at the pen, in the built-in font.
    pub fn write_text(&mut self, text: &str) -> CanvasResult<()> {
        if text.trim().is_empty() {
            return Err(CanvasError::invalid("text cannot be empty"));
        }
        if log::log_enabled!(log::Level::Trace) {
            let (w, h) = font::measure(text);
            log::trace!("write {text:?} ({w}x{h}) @{},{}", self.pen.x, self.pen.y);
        }
        font::draw_text(
            &mut self.surface,
            self.pen.x as i64,
            self.pen.y as i64,
            text,
            self.pen.colour,
        );
        Ok(())
    }

    pub fn set_colour(&mut self, r: i32, g: i32, b: i32) -> CanvasResult<()> {
        self.pen.colour = Colour::from_channels(r, g, b)?;
        log::trace!("colour {}", self.pen.colour);
        Ok(())
    }

    /// Fill the whole surface with the background; the pen is untouched.
    pub fn clear(&mut self) {
        log::debug!("clear");
        self.surface.fill(BACKGROUND);
    }

    /// Pen back to the origin in black; the pixels are untouched.
    pub fn reset(&mut self) {
        log::debug!("reset pen");
        self.pen = PenState::default();
    }

    /// Swap in a fresh blank surface of the given size, dropping the old
    /// one and everything drawn on it. The pen is kept.
    pub fn resize(&mut self, width: i32, height: i32) -> CanvasResult<()> {
        let surface = Surface::new(width, height)?;
        log::debug!(
            "resize {}x{} -> {width}x{height}",
            self.surface.width(),
            self.surface.height()
        );
        self.surface = surface;
        Ok(())
    }

    fn pen_point(&self) -> (f64, f64) {
        (self.pen.x as f64, self.pen.y as f64)
    }

    fn paint(&mut self, shape: &impl kurbo::Shape, filled: bool) {
        if filled {
            raster::fill_shape(&mut self.surface, shape, self.pen.colour);
        } else {
            raster::stroke_shape(&mut self.surface, shape, self.pen.colour);
        }
    }
}

fn check_extent(what: &str, width: i32, height: i32) -> CanvasResult<()> {
    if width <= 0 || height <= 0 {
        return Err(CanvasError::invalid(format!(
            "{what} dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

impl DrawTarget for Canvas {
    fn move_to(&mut self, x: i32, y: i32) {
        Canvas::move_to(self, x, y)
    }

    fn draw_to(&mut self, x: i32, y: i32) -> CanvasResult<()> {
        Canvas::draw_to(self, x, y)
    }

    fn circle(&mut self, radius: i32, filled: bool) -> CanvasResult<()> {
        Canvas::circle(self, radius, filled)
    }

    fn rect(&mut self, width: i32, height: i32, filled: bool) -> CanvasResult<()> {
        Canvas::rect(self, width, height, filled)
    }

    fn tri(&mut self, width: i32, height: i32) -> CanvasResult<()> {
        Canvas::tri(self, width, height)
    }

    fn write_text(&mut self, text: &str) -> CanvasResult<()> {
        Canvas::write_text(self, text)
    }

    fn set_colour(&mut self, r: i32, g: i32, b: i32) -> CanvasResult<()> {
        Canvas::set_colour(self, r, g, b)
    }

    fn clear(&mut self) {
        Canvas::clear(self)
    }

    fn reset(&mut self) {
        Canvas::reset(self)
    }

    fn resize(&mut self, width: i32, height: i32) -> CanvasResult<()> {
        Canvas::resize(self, width, height)
    }

    fn surface(&self) -> CanvasResult<&Surface> {
        Ok(&self.surface)
    }
}
