//! The drawing vocabulary an interpreter drives.

use crate::error::CanvasResult;
use crate::surface::Surface;

/// Anything that can execute the BOOSE drawing primitives.
///
/// One method per textual command, so a command runner can render onto a
/// [`Canvas`](crate::Canvas), a recorder, or any other sink without knowing
/// which one it has.
pub trait DrawTarget {
    fn move_to(&mut self, x: i32, y: i32);

    fn draw_to(&mut self, x: i32, y: i32) -> CanvasResult<()>;

    fn circle(&mut self, radius: i32, filled: bool) -> CanvasResult<()>;

    fn rect(&mut self, width: i32, height: i32, filled: bool) -> CanvasResult<()>;

    fn tri(&mut self, width: i32, height: i32) -> CanvasResult<()>;

    fn write_text(&mut self, text: &str) -> CanvasResult<()>;

    fn set_colour(&mut self, r: i32, g: i32, b: i32) -> CanvasResult<()>;

    fn clear(&mut self);

    fn reset(&mut self);

    /// Replace the raster with a blank one of the given size.
    fn resize(&mut self, width: i32, height: i32) -> CanvasResult<()>;

    /// The raster to display. Targets without one return
    /// [`CanvasError::NotInitialized`](crate::CanvasError::NotInitialized).
    fn surface(&self) -> CanvasResult<&Surface>;
}
