//! Integration tests: the public canvas contract.
//!
//! Pen bookkeeping, surface lifecycle (clear / resize), rejection without
//! side effects, and clipping at the surface edge.

use boose_canvas::{Canvas, CanvasError, Colour, DrawTarget, PenState};
use pretty_assertions::assert_eq;

const RED: Colour = Colour::new(255, 0, 0);
const BLUE: Colour = Colour::new(0, 0, 255);

fn scribbled() -> Canvas {
    let mut c = Canvas::new(120, 80).unwrap();
    c.set_colour(10, 200, 30).unwrap();
    c.move_to(5, 5);
    c.draw_to(100, 70).unwrap();
    c.circle(15, true).unwrap();
    c
}

// ─── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn red_filled_circle() {
    let mut c = Canvas::new(300, 300).unwrap();
    c.set_colour(255, 0, 0).unwrap();
    c.move_to(150, 150);
    c.circle(50, true).unwrap();

    assert_eq!(c.surface().pixel(150, 150), Some(RED));
    assert_eq!(c.surface().pixel(150, 90), Some(Colour::WHITE));
    assert_eq!(c.surface().pixel(150, 102), Some(RED));
    assert_eq!(c.position(), (150, 150));
}

#[test]
fn blue_diagonal_line() {
    let mut c = Canvas::new(300, 300).unwrap();
    c.set_colour(0, 0, 255).unwrap();
    c.move_to(100, 100);
    c.draw_to(200, 200).unwrap();

    for i in [101, 120, 150, 180, 199] {
        assert_eq!(c.surface().pixel(i, i), Some(BLUE), "pixel {i},{i}");
    }
    assert_eq!(c.surface().pixel(150, 160), Some(Colour::WHITE));
    assert_eq!(c.surface().pixel(50, 50), Some(Colour::WHITE));
    assert!(c.surface().count_painted() <= 102);
    assert_eq!(c.position(), (200, 200));
}

#[test]
fn zero_sizes_change_nothing() {
    let mut c = scribbled();
    let before = c.clone();

    assert!(matches!(c.circle(0, true), Err(CanvasError::InvalidArgument(_))));
    assert!(matches!(
        c.rect(0, 5, false),
        Err(CanvasError::InvalidArgument(_))
    ));

    assert_eq!(c.pen(), before.pen());
    assert_eq!(c.surface(), before.surface());
}

#[test]
fn outline_circle_is_hollow() {
    let mut c = Canvas::new(300, 300).unwrap();
    c.move_to(150, 150);
    c.circle(50, false).unwrap();
    assert_eq!(c.surface().pixel(200, 150), Some(Colour::BLACK));
    assert_eq!(c.surface().pixel(150, 150), Some(Colour::WHITE));
}

// ─── Pen state ──────────────────────────────────────────────────────────

#[test]
fn set_colour_round_trips_every_channel_value() {
    let mut c = Canvas::new(1, 1).unwrap();
    for v in 0..=255 {
        c.set_colour(v, 255 - v, v / 2).unwrap();
        assert_eq!(
            c.colour(),
            Colour::new(v as u8, (255 - v) as u8, (v / 2) as u8)
        );
    }
}

#[test]
fn out_of_range_colour_keeps_previous() {
    let mut c = Canvas::new(1, 1).unwrap();
    c.set_colour(1, 2, 3).unwrap();
    for (r, g, b) in [(256, 0, 0), (0, -1, 0), (0, 0, 1000), (-255, 300, 12)] {
        assert!(matches!(
            c.set_colour(r, g, b),
            Err(CanvasError::OutOfRange { .. })
        ));
        assert_eq!(c.colour(), Colour::new(1, 2, 3));
    }
}

#[test]
fn move_to_never_touches_pixels() {
    let mut c = scribbled();
    let pixels = c.surface().clone();
    for (x, y) in [(0, 0), (-40, 9000), (i32::MAX, i32::MIN), (60, 40)] {
        c.move_to(x, y);
        assert_eq!(c.position(), (x, y));
    }
    assert_eq!(c.surface(), &pixels);
}

#[test]
fn reset_restores_origin_and_black_only() {
    let mut c = scribbled();
    let pixels = c.surface().clone();
    c.reset();
    assert_eq!(c.pen(), PenState::default());
    assert_eq!(c.position(), (0, 0));
    assert_eq!(c.colour(), Colour::BLACK);
    assert_eq!(c.surface(), &pixels);

    c.reset();
    assert_eq!(c.pen(), PenState::default());
}

// ─── Surface lifecycle ──────────────────────────────────────────────────

#[test]
fn clear_whitens_everything_and_keeps_pen() {
    let mut c = scribbled();
    let pen = c.pen();
    assert!(c.surface().count_painted() > 0);
    c.clear();
    assert!(c.surface().is_blank());
    assert_eq!(c.pen(), pen);
}

#[test]
fn resize_allocates_blank_surface_and_keeps_pen() {
    let mut c = scribbled();
    let pen = c.pen();
    c.resize(33, 17).unwrap();

    let s = c.surface();
    assert_eq!((s.width(), s.height()), (33, 17));
    assert_eq!(s.pixels().len(), 33 * 17);
    assert!(s.is_blank());
    assert_eq!(c.pen(), pen);
}

#[test]
fn rejected_resize_keeps_old_surface() {
    let mut c = scribbled();
    let before = c.surface().clone();
    assert!(matches!(
        c.resize(0, 10),
        Err(CanvasError::InvalidArgument(_))
    ));
    assert!(matches!(
        c.resize(10, -10),
        Err(CanvasError::InvalidArgument(_))
    ));
    assert_eq!(c.surface(), &before);
}

// ─── Clipping ───────────────────────────────────────────────────────────

#[test]
fn line_off_the_edge_draws_visible_part_and_moves_pen() {
    let mut c = Canvas::new(100, 100).unwrap();
    c.move_to(-100, 50);
    c.draw_to(50, 50).unwrap();
    assert_eq!(c.surface().pixel(0, 50), Some(Colour::BLACK));
    assert_eq!(c.surface().pixel(25, 50), Some(Colour::BLACK));
    assert_eq!(c.surface().pixel(25, 49), Some(Colour::WHITE));
    assert_eq!(c.surface().pixel(60, 50), Some(Colour::WHITE));
    assert_eq!(c.position(), (50, 50));
}

#[test]
fn fully_off_canvas_shapes_leave_surface_blank() {
    let mut c = Canvas::new(100, 100).unwrap();
    c.move_to(-500, -500);
    c.circle(20, true).unwrap();
    c.circle(20, false).unwrap();
    c.rect(50, 50, true).unwrap();
    c.tri(30, 30).unwrap();
    c.write_text("nowhere").unwrap();
    c.draw_to(-400, -900).unwrap();
    assert!(c.surface().is_blank());
    assert_eq!(c.position(), (-400, -900));
}

#[test]
fn circle_straddling_corner_is_partly_drawn() {
    let mut c = Canvas::new(100, 100).unwrap();
    c.circle(10, true).unwrap();
    assert_eq!(c.surface().pixel(0, 0), Some(Colour::BLACK));
    assert_eq!(c.surface().pixel(5, 5), Some(Colour::BLACK));
    assert_eq!(c.surface().pixel(12, 0), Some(Colour::WHITE));
}

#[test]
fn extreme_pen_and_size_do_not_overflow() {
    let mut c = Canvas::new(50, 50).unwrap();
    c.move_to(i32::MAX, i32::MAX);
    c.rect(i32::MAX, i32::MAX, false).unwrap();
    c.tri(i32::MAX, i32::MAX).unwrap();
    c.move_to(i32::MIN, i32::MIN);
    c.draw_to(i32::MAX, i32::MAX).unwrap();
    assert_eq!(c.position(), (i32::MAX, i32::MAX));

    // far outside the surface, but well inside f32 precision
    c.move_to(-100_000, 25);
    c.draw_to(100_000, 25).unwrap();
    assert_eq!(c.surface().pixel(25, 25), Some(Colour::BLACK));
}

// ─── Display boundary ───────────────────────────────────────────────────

#[test]
fn surface_bytes_match_pixels() {
    let mut c = Canvas::new(4, 2).unwrap();
    c.set_colour(1, 2, 3).unwrap();
    c.move_to(3, 1);
    c.draw_to(3, 1).unwrap();

    let rgb = c.surface().to_rgb_bytes();
    assert_eq!(rgb.len(), 4 * 2 * 3);
    assert_eq!(&rgb[rgb.len() - 3..], &[1, 2, 3]);
    assert_eq!(&rgb[..3], &[255, 255, 255]);

    let rgba = c.surface().as_rgba_bytes();
    assert_eq!(&rgba[rgba.len() - 4..], &[1, 2, 3, 255]);
    assert_eq!(c.surface().pixels().last(), Some(Colour::new(1, 2, 3)));
}

#[test]
fn canvas_through_trait_object() {
    let mut c = Canvas::new(40, 40).unwrap();
    {
        let target: &mut dyn DrawTarget = &mut c;
        target.set_colour(255, 0, 0).unwrap();
        target.move_to(5, 5);
        target.rect(10, 10, true).unwrap();
        target.resize(20, 20).unwrap();
        target.draw_to(0, 0).unwrap();
        assert_eq!(target.surface().unwrap().width(), 20);
    }
    // the filled rect went with the old surface; only the line remains
    assert_eq!(c.surface().pixel(4, 4), Some(RED));
    assert_eq!(c.surface().pixel(2, 2), Some(RED));
    assert_eq!(c.surface().pixel(5, 8), Some(Colour::WHITE));
    assert_eq!(c.surface().pixel(10, 10), Some(Colour::WHITE));
}
