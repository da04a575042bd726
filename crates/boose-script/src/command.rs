//! One drawing command per script line.

use boose_canvas::{CanvasResult, Colour, DrawTarget};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo { x: i32, y: i32 },
    DrawTo { x: i32, y: i32 },
    Circle { radius: i32, filled: bool },
    Rect { width: i32, height: i32, filled: bool },
    Tri { width: i32, height: i32 },
    Write { text: String },
    Colour { r: i32, g: i32, b: i32 },
    Clear,
    Reset,
    Set { width: i32, height: i32 },
}

impl Command {
    /// Run this command against any draw target.
    pub fn apply<T: DrawTarget + ?Sized>(&self, target: &mut T) -> CanvasResult<()> {
        match self {
            Command::MoveTo { x, y } => {
                target.move_to(*x, *y);
                Ok(())
            }
            Command::DrawTo { x, y } => target.draw_to(*x, *y),
            Command::Circle { radius, filled } => target.circle(*radius, *filled),
            Command::Rect {
                width,
                height,
                filled,
            } => target.rect(*width, *height, *filled),
            Command::Tri { width, height } => target.tri(*width, *height),
            Command::Write { text } => target.write_text(text),
            Command::Colour { r, g, b } => target.set_colour(*r, *g, *b),
            Command::Clear => {
                target.clear();
                Ok(())
            }
            Command::Reset => {
                target.reset();
                Ok(())
            }
            Command::Set { width, height } => target.resize(*width, *height),
        }
    }

    pub fn from_colour(colour: Colour) -> Self {
        Command::Colour {
            r: colour.r as i32,
            g: colour.g as i32,
            b: colour.b as i32,
        }
    }
}

/// Emits the canonical script form, which parses back to the same command.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveTo { x, y } => write!(f, "moveto {x},{y}"),
            Command::DrawTo { x, y } => write!(f, "drawto {x},{y}"),
            Command::Circle { radius, filled } => write!(f, "circle {radius},{filled}"),
            Command::Rect {
                width,
                height,
                filled,
            } => write!(f, "rect {width},{height},{filled}"),
            Command::Tri { width, height } => write!(f, "tri {width},{height}"),
            Command::Write { text } => write!(f, "write \"{text}\""),
            Command::Colour { r, g, b } => write!(f, "colour {r},{g},{b}"),
            Command::Clear => f.write_str("clear"),
            Command::Reset => f.write_str("reset"),
            Command::Set { width, height } => write!(f, "set {width},{height}"),
        }
    }
}
