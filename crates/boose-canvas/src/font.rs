//! Built-in stroke font for `write_text`.
//!
//! Each glyph is a list of polylines on a 4×6 unit grid (y grows down,
//! the top of a capital sits at y = 0). Every polyline is a pen-down run;
//! lifting the pen between runs is implicit. Each run is stroked as one
//! hairline path at a fixed [`SCALE`].

use crate::colour::Colour;
use crate::raster;
use crate::surface::Surface;
use kurbo::BezPath;

type Glyph = &'static [&'static [(i8, i8)]];

/// Pixels per grid unit.
pub const SCALE: i64 = 3;
/// Horizontal advance per character, in grid units.
pub const ADVANCE: i64 = 6;
/// Distance between baselines of successive lines, in grid units.
pub const LINE_HEIGHT: i64 = 8;

/// Render `text` with its top-left corner at `(x, y)`.
///
/// `\n` starts a new line at the original `x`. Lowercase letters use the
/// uppercase shapes; characters without a glyph render as an empty box.
pub fn draw_text(surface: &mut Surface, x: i64, y: i64, text: &str, colour: Colour) {
    for (row, line) in text.split('\n').enumerate() {
        let top = y + row as i64 * LINE_HEIGHT * SCALE;
        for (col, ch) in line.chars().enumerate() {
            let left = x + col as i64 * ADVANCE * SCALE;
            draw_glyph(surface, left, top, glyph(ch), colour);
        }
    }
}

/// Pixel size of the box `text` occupies: `(width, height)`.
pub fn measure(text: &str) -> (i64, i64) {
    let lines = text.split('\n');
    let rows = lines.clone().count() as i64;
    let cols = lines.map(|l| l.chars().count()).max().unwrap_or(0) as i64;
    let width = if cols == 0 {
        0
    } else {
        ((cols - 1) * ADVANCE + 4) * SCALE
    };
    let height = ((rows - 1) * LINE_HEIGHT + 6) * SCALE;
    (width, height)
}

fn draw_glyph(surface: &mut Surface, left: i64, top: i64, glyph: Glyph, colour: Colour) {
    let at = |(gx, gy): (i8, i8)| {
        (
            (left + gx as i64 * SCALE) as f64,
            (top + gy as i64 * SCALE) as f64,
        )
    };
    for stroke in glyph {
        let Some((&first, rest)) = stroke.split_first() else {
            continue;
        };
        let mut path = BezPath::new();
        path.move_to(at(first));
        for &p in rest {
            path.line_to(at(p));
        }
        raster::stroke_shape(surface, &path, colour);
    }
}

fn glyph(ch: char) -> Glyph {
    match ch.to_ascii_uppercase() {
        ' ' | '\t' | '\r' => &[],
        'A' => &[&[(0, 6), (0, 2), (2, 0), (4, 2), (4, 6)], &[(0, 3), (4, 3)]],
        'B' => &[
            &[(0, 0), (0, 6), (3, 6), (4, 5), (4, 4), (3, 3), (0, 3)],
            &[(0, 0), (3, 0), (4, 1), (4, 2), (3, 3)],
        ],
        'C' => &[&[(4, 1), (3, 0), (1, 0), (0, 1), (0, 5), (1, 6), (3, 6), (4, 5)]],
        'D' => &[&[(0, 0), (0, 6), (2, 6), (4, 4), (4, 2), (2, 0), (0, 0)]],
        'E' => &[&[(4, 0), (0, 0), (0, 6), (4, 6)], &[(0, 3), (3, 3)]],
        'F' => &[&[(4, 0), (0, 0), (0, 6)], &[(0, 3), (3, 3)]],
        'G' => &[&[
            (4, 1),
            (3, 0),
            (1, 0),
            (0, 1),
            (0, 5),
            (1, 6),
            (3, 6),
            (4, 5),
            (4, 3),
            (2, 3),
        ]],
        'H' => &[&[(0, 0), (0, 6)], &[(4, 0), (4, 6)], &[(0, 3), (4, 3)]],
        'I' => &[&[(1, 0), (3, 0)], &[(2, 0), (2, 6)], &[(1, 6), (3, 6)]],
        'J' => &[&[(4, 0), (4, 5), (3, 6), (1, 6), (0, 5)]],
        'K' => &[&[(0, 0), (0, 6)], &[(4, 0), (0, 3), (4, 6)]],
        'L' => &[&[(0, 0), (0, 6), (4, 6)]],
        'M' => &[&[(0, 6), (0, 0), (2, 3), (4, 0), (4, 6)]],
        'N' => &[&[(0, 6), (0, 0), (4, 6), (4, 0)]],
        'O' => &[RING],
        'P' => &[&[(0, 6), (0, 0), (3, 0), (4, 1), (4, 2), (3, 3), (0, 3)]],
        'Q' => &[RING, &[(2, 4), (4, 6)]],
        'R' => &[
            &[(0, 6), (0, 0), (3, 0), (4, 1), (4, 2), (3, 3), (0, 3)],
            &[(2, 3), (4, 6)],
        ],
        'S' => &[&[
            (4, 1),
            (3, 0),
            (1, 0),
            (0, 1),
            (0, 2),
            (1, 3),
            (3, 3),
            (4, 4),
            (4, 5),
            (3, 6),
            (1, 6),
            (0, 5),
        ]],
        'T' => &[&[(0, 0), (4, 0)], &[(2, 0), (2, 6)]],
        'U' => &[&[(0, 0), (0, 5), (1, 6), (3, 6), (4, 5), (4, 0)]],
        'V' => &[&[(0, 0), (2, 6), (4, 0)]],
        'W' => &[&[(0, 0), (1, 6), (2, 3), (3, 6), (4, 0)]],
        'X' => &[&[(0, 0), (4, 6)], &[(4, 0), (0, 6)]],
        'Y' => &[&[(0, 0), (2, 3), (4, 0)], &[(2, 3), (2, 6)]],
        'Z' => &[&[(0, 0), (4, 0), (0, 6), (4, 6)]],

        '0' => &[RING, &[(4, 1), (0, 5)]],
        '1' => &[&[(1, 1), (2, 0), (2, 6)], &[(1, 6), (3, 6)]],
        '2' => &[&[(0, 1), (1, 0), (3, 0), (4, 1), (4, 2), (0, 6), (4, 6)]],
        '3' => &[
            &[
                (0, 1),
                (1, 0),
                (3, 0),
                (4, 1),
                (4, 2),
                (3, 3),
                (4, 4),
                (4, 5),
                (3, 6),
                (1, 6),
                (0, 5),
            ],
            &[(1, 3), (3, 3)],
        ],
        '4' => &[&[(3, 6), (3, 0), (0, 4), (4, 4)]],
        '5' => &[&[(4, 0), (0, 0), (0, 3), (3, 3), (4, 4), (4, 5), (3, 6), (0, 6)]],
        '6' => &[&[
            (3, 0),
            (1, 0),
            (0, 1),
            (0, 5),
            (1, 6),
            (3, 6),
            (4, 5),
            (4, 4),
            (3, 3),
            (0, 3),
        ]],
        '7' => &[&[(0, 0), (4, 0), (1, 6)]],
        '8' => &[
            &[(1, 0), (3, 0), (4, 1), (4, 2), (3, 3), (1, 3), (0, 2), (0, 1), (1, 0)],
            &[(1, 3), (0, 4), (0, 5), (1, 6), (3, 6), (4, 5), (4, 4), (3, 3)],
        ],
        '9' => &[&[
            (4, 3),
            (1, 3),
            (0, 2),
            (0, 1),
            (1, 0),
            (3, 0),
            (4, 1),
            (4, 5),
            (3, 6),
            (1, 6),
        ]],

        '.' => &[&[(2, 5), (2, 6)]],
        ',' => &[&[(2, 5), (1, 7)]],
        '!' => &[&[(2, 0), (2, 4)], &[(2, 5), (2, 6)]],
        '?' => &[
            &[(0, 1), (1, 0), (3, 0), (4, 1), (4, 2), (2, 3), (2, 4)],
            &[(2, 5), (2, 6)],
        ],
        '-' => &[&[(1, 3), (3, 3)]],
        '+' => &[&[(0, 3), (4, 3)], &[(2, 1), (2, 5)]],
        '=' => &[&[(0, 2), (4, 2)], &[(0, 4), (4, 4)]],
        '_' => &[&[(0, 6), (4, 6)]],
        ':' => &[&[(2, 1), (2, 2)], &[(2, 4), (2, 5)]],
        ';' => &[&[(2, 1), (2, 2)], &[(2, 4), (1, 6)]],
        '\'' => &[&[(2, 0), (2, 2)]],
        '"' => &[&[(1, 0), (1, 2)], &[(3, 0), (3, 2)]],
        '(' => &[&[(3, 0), (1, 2), (1, 4), (3, 6)]],
        ')' => &[&[(1, 0), (3, 2), (3, 4), (1, 6)]],
        '[' => &[&[(3, 0), (1, 0), (1, 6), (3, 6)]],
        ']' => &[&[(1, 0), (3, 0), (3, 6), (1, 6)]],
        '/' => &[&[(0, 6), (4, 0)]],
        '\\' => &[&[(0, 0), (4, 6)]],
        '<' => &[&[(4, 0), (0, 3), (4, 6)]],
        '>' => &[&[(0, 0), (4, 3), (0, 6)]],
        '*' => &[&[(0, 1), (4, 5)], &[(4, 1), (0, 5)], &[(2, 0), (2, 6)]],
        '#' => &[
            &[(1, 0), (1, 6)],
            &[(3, 0), (3, 6)],
            &[(0, 2), (4, 2)],
            &[(0, 4), (4, 4)],
        ],
        '%' => &[
            &[(0, 6), (4, 0)],
            &[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)],
            &[(3, 5), (4, 5), (4, 6), (3, 6), (3, 5)],
        ],
        _ => &[&[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)]],
    }
}

const RING: &[(i8, i8)] = &[
    (1, 0),
    (3, 0),
    (4, 1),
    (4, 5),
    (3, 6),
    (1, 6),
    (0, 5),
    (0, 1),
    (1, 0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INK: Colour = Colour::new(200, 0, 0);

    #[test]
    fn h_has_two_stems_and_a_bar() {
        let mut s = Surface::new(40, 40).unwrap();
        draw_text(&mut s, 10, 10, "H", INK);
        // left stem, right stem, crossbar
        assert_eq!(s.pixel(10, 15), Some(INK));
        assert_eq!(s.pixel(22, 15), Some(INK));
        assert_eq!(s.pixel(16, 19), Some(INK));
        // open above the bar, between the stems
        assert_eq!(s.pixel(16, 12), Some(Colour::WHITE));
    }

    #[test]
    fn lowercase_matches_uppercase() {
        let mut upper = Surface::new(60, 30).unwrap();
        let mut lower = Surface::new(60, 30).unwrap();
        draw_text(&mut upper, 2, 2, "OK", INK);
        draw_text(&mut lower, 2, 2, "ok", INK);
        assert_eq!(upper, lower);
    }

    #[test]
    fn space_draws_nothing() {
        let mut s = Surface::new(30, 30).unwrap();
        draw_text(&mut s, 0, 0, "   ", INK);
        assert!(s.is_blank());
    }

    #[test]
    fn unknown_character_draws_a_box() {
        let mut s = Surface::new(30, 30).unwrap();
        draw_text(&mut s, 0, 0, "€", INK);
        assert_eq!(s.pixel(6, 0), Some(INK));
        assert_eq!(s.pixel(12, 9), Some(INK));
        assert_eq!(s.pixel(6, 18), Some(INK));
        assert_eq!(s.pixel(0, 9), Some(INK));
        assert_eq!(s.pixel(6, 9), Some(Colour::WHITE));
    }

    #[test]
    fn newline_moves_down_one_line() {
        let mut s = Surface::new(40, 80).unwrap();
        draw_text(&mut s, 0, 0, "\nL", INK);
        let top = LINE_HEIGHT * SCALE;
        assert_eq!(s.pixel(0, top + 6), Some(INK));
        assert_eq!(s.pixel(0, top - 3), Some(Colour::WHITE));
        assert_eq!(s.pixel(0, 6), Some(Colour::WHITE));
    }

    #[test]
    fn measure_reports_the_inked_box() {
        assert_eq!(measure("A"), (12, 18));
        assert_eq!(measure("AB"), (30, 18));
        assert_eq!(measure("AB\nC"), (30, 42));
        assert_eq!(measure(""), (0, 18));
    }
}
