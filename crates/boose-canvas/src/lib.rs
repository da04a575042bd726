//! Turtle-graphics canvas for BOOSE drawing commands.
//!
//! A [`Canvas`] holds a pen (position and colour) and a [`Surface`] backed
//! by a `tiny-skia` pixmap. Primitives are anchored at the pen and
//! rasterized immediately; the host reads the surface back for display.

pub mod canvas;
pub mod colour;
pub mod error;
pub mod font;
pub mod raster;
pub mod surface;
pub mod target;

pub use canvas::{Canvas, PenState};
pub use colour::Colour;
pub use error::{CanvasError, CanvasResult};
pub use surface::{BACKGROUND, Surface};
pub use target::DrawTarget;
