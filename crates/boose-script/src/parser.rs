//! Parser for BOOSE command scripts → `Program`.
//!
//! Built on `winnow` 0.7. One command per line: a case-insensitive keyword
//! followed by arguments separated by commas and/or spaces. Blank lines and
//! `#` comment lines are skipped. `write` takes the rest of the line as its
//! text, optionally wrapped in double quotes.

use crate::command::Command;
use crate::error::ScriptError;
use crate::program::{Program, Statement};
use boose_canvas::Colour;
use smallvec::SmallVec;
use winnow::ascii::space0;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{rest, take_while};

/// A single parsed argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg {
    Int(i32),
    Bool(bool),
    Hex(Colour),
}

type Args = SmallVec<[Arg; 4]>;

/// Parse a whole script. Stops at the first bad line.
#[must_use = "parsing result should be used"]
pub fn parse_program(input: &str) -> Result<Program, ScriptError> {
    let mut statements = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let command = parse_line(text, line)?;
        log::trace!("line {line}: {command}");
        statements.push(Statement { line, command });
    }
    Ok(Program::new(statements))
}

/// Parse one non-blank, non-comment line.
pub fn parse_line(text: &str, line: usize) -> Result<Command, ScriptError> {
    let mut input = text;
    let keyword = parse_keyword
        .parse_next(&mut input)
        .map_err(|_| ScriptError::Syntax {
            line,
            message: format!("expected a command, found `{text}`"),
        })?
        .to_ascii_lowercase();

    if !input.is_empty() && !input.starts_with(char::is_whitespace) {
        return Err(ScriptError::Syntax {
            line,
            message: format!("expected a space after `{keyword}` in `{text}`"),
        });
    }

    if keyword == "write" {
        let text = parse_text.parse_next(&mut input).unwrap_or_default();
        return Ok(Command::Write { text });
    }

    let args = parse_args.parse_next(&mut input).map_err(|_| ScriptError::Syntax {
        line,
        message: format!("bad argument in `{text}`"),
    })?;

    build_command(&keyword, &args).ok_or_else(|| match usage(&keyword) {
        Some(usage) => ScriptError::Syntax {
            line,
            message: format!("expected `{usage}`"),
        },
        None => ScriptError::UnknownCommand {
            line,
            name: keyword.clone(),
        },
    })
}

fn build_command(keyword: &str, args: &[Arg]) -> Option<Command> {
    use Arg::*;
    let command = match (keyword, args) {
        ("moveto", [Int(x), Int(y)]) => Command::MoveTo { x: *x, y: *y },
        ("drawto", [Int(x), Int(y)]) => Command::DrawTo { x: *x, y: *y },
        ("circle", [Int(radius)]) => Command::Circle {
            radius: *radius,
            filled: false,
        },
        ("circle", [Int(radius), Bool(filled)]) => Command::Circle {
            radius: *radius,
            filled: *filled,
        },
        ("rect", [Int(width), Int(height)]) => Command::Rect {
            width: *width,
            height: *height,
            filled: false,
        },
        ("rect", [Int(width), Int(height), Bool(filled)]) => Command::Rect {
            width: *width,
            height: *height,
            filled: *filled,
        },
        ("tri", [Int(width), Int(height)]) => Command::Tri {
            width: *width,
            height: *height,
        },
        ("colour" | "color" | "pen", [Int(r), Int(g), Int(b)]) => Command::Colour {
            r: *r,
            g: *g,
            b: *b,
        },
        ("colour" | "color" | "pen", [Hex(c)]) => Command::from_colour(*c),
        ("clear", []) => Command::Clear,
        ("reset", []) => Command::Reset,
        ("set" | "resize", [Int(width), Int(height)]) => Command::Set {
            width: *width,
            height: *height,
        },
        _ => return None,
    };
    Some(command)
}

/// Expected form of a known keyword, for error messages.
fn usage(keyword: &str) -> Option<&'static str> {
    Some(match keyword {
        "moveto" => "moveto <x>,<y>",
        "drawto" => "drawto <x>,<y>",
        "circle" => "circle <radius>[,<filled>]",
        "rect" => "rect <width>,<height>[,<filled>]",
        "tri" => "tri <width>,<height>",
        "colour" | "color" | "pen" => "colour <r>,<g>,<b> | colour #RRGGBB",
        "clear" => "clear",
        "reset" => "reset",
        "set" | "resize" => "set <width>,<height>",
        _ => return None,
    })
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn parse_keyword<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

/// Rest of the line after the keyword, minus one pair of surrounding quotes.
fn parse_text(input: &mut &str) -> ModalResult<String> {
    skip_space(input);
    let text: &str = rest::<_, ErrMode<ContextError>>.parse_next(input)?;
    let text = text.trim_end();
    let unquoted = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    Ok(unquoted.to_string())
}

fn parse_args(input: &mut &str) -> ModalResult<Args> {
    let mut args = Args::new();
    skip_space(input);
    while !input.is_empty() {
        args.push(parse_arg.parse_next(input)?);
        if skip_separator(input) && input.is_empty() {
            // trailing comma
            return Err(ErrMode::Backtrack(ContextError::new()));
        }
    }
    Ok(args)
}

fn parse_arg(input: &mut &str) -> ModalResult<Arg> {
    if input.starts_with('#') {
        return parse_hex_colour.map(Arg::Hex).parse_next(input);
    }
    if input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return parse_bool.map(Arg::Bool).parse_next(input);
    }
    parse_int.map(Arg::Int).parse_next(input)
}

fn parse_int(input: &mut &str) -> ModalResult<i32> {
    let start = *input;
    if input.starts_with('-') || input.starts_with('+') {
        *input = &input[1..];
    }
    let _ = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let matched = &start[..start.len() - input.len()];
    matched
        .parse::<i32>()
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}

fn parse_bool(input: &mut &str) -> ModalResult<bool> {
    let word = parse_keyword.parse_next(input)?;
    if word.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if word.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ErrMode::Backtrack(ContextError::new()))
    }
}

fn parse_hex_colour(input: &mut &str) -> ModalResult<Colour> {
    let _ = '#'.parse_next(input)?;
    let digits: &str = take_while(1..=6, |c: char| c.is_ascii_hexdigit()).parse_next(input)?;
    Colour::from_hex(digits).ok_or_else(|| ErrMode::Backtrack(ContextError::new()))
}

/// Consume optional whitespace (concrete error type avoids inference issues).
fn skip_space(input: &mut &str) {
    let _: Result<&str, ErrMode<ContextError>> = space0.parse_next(input);
}

/// Consume `,` and/or whitespace between arguments. Returns whether a
/// comma was consumed.
fn skip_separator(input: &mut &str) -> bool {
    skip_space(input);
    let comma = input.starts_with(',');
    if comma {
        *input = &input[1..];
        skip_space(input);
    }
    comma
}
