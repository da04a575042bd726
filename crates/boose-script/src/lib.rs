//! BOOSE command scripts: text lines mapped 1:1 onto canvas primitives.
//!
//! This is the host-side adapter between script text and any
//! [`DrawTarget`](boose_canvas::DrawTarget). It has no loops, variables or
//! user-defined commands; each line is exactly one drawing call.

pub mod command;
pub mod error;
pub mod parser;
pub mod program;

pub use command::Command;
pub use error::ScriptError;
pub use parser::{parse_line, parse_program};
pub use program::{Program, Statement, run_script};
