//! Vector primitives on top of the SDL2 canvas
//!
//! SDL2's renderer only knows points, lines and rectangles, so filled circles
//! are built from one horizontal span per row. Coordinates are `f32` in the
//! 320x240 logical space and get rounded to whole pixels here.

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Filled axis-aligned rectangle
pub fn fill_rect(
    canvas: &mut Canvas<Window>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: Color,
) -> Result<(), String> {
    if w <= 0.0 || h <= 0.0 {
        return Ok(());
    }
    canvas.set_draw_color(color);
    canvas.fill_rect(Rect::new(
        x.round() as i32,
        y.round() as i32,
        w.round().max(1.0) as u32,
        h.round().max(1.0) as u32,
    ))
}

/// Horizontal `(x_start, width)` spans covering a disc, one per row offset
pub fn circle_spans(radius: f32) -> Vec<(i32, i32, u32)> {
    let r = radius.max(0.0);
    let ri = r.ceil() as i32;
    let mut spans = Vec::with_capacity((ri * 2 + 1) as usize);

    for dy in -ri..=ri {
        let dy_f = dy as f32;
        if dy_f.abs() > r {
            continue;
        }
        let half = (r * r - dy_f * dy_f).sqrt();
        let half_px = half.round() as i32;
        spans.push((dy, -half_px, (half_px * 2 + 1) as u32));
    }

    spans
}

/// Filled circle centred on `(cx, cy)`
pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    cx: f32,
    cy: f32,
    radius: f32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    let (cx, cy) = (cx.round() as i32, cy.round() as i32);

    for (dy, dx, width) in circle_spans(radius) {
        canvas.fill_rect(Rect::new(cx + dx, cy + dy, width, 1))?;
    }
    Ok(())
}

/// Line of the given thickness (1 or more pixels)
pub fn stroke_line(
    canvas: &mut Canvas<Window>,
    from: (f32, f32),
    to: (f32, f32),
    thickness: u32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    let start = Point::new(from.0.round() as i32, from.1.round() as i32);
    let end = Point::new(to.0.round() as i32, to.1.round() as i32);

    // Thicker lines are stacked copies shifted across the steeper axis
    let steep = (end.y() - start.y()).abs() > (end.x() - start.x()).abs();
    for i in 0..thickness.max(1) as i32 {
        let offset = i - thickness as i32 / 2;
        let (ox, oy) = if steep { (offset, 0) } else { (0, offset) };
        canvas.draw_line(start.offset(ox, oy), end.offset(ox, oy))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_spans_are_symmetric() {
        let spans = circle_spans(5.0);
        assert_eq!(spans.len(), 11);
        assert_eq!(spans.first().map(|s| s.0), Some(-5));
        assert_eq!(spans.last().map(|s| s.0), Some(5));

        for (dy, dx, width) in &spans {
            assert_eq!(*width as i32, -dx * 2 + 1, "row {dy}");
        }
    }

    #[test]
    fn test_widest_span_at_centre() {
        let spans = circle_spans(8.0);
        let centre = spans.iter().find(|s| s.0 == 0).unwrap();
        assert_eq!(centre.2, 17);
        assert!(spans.iter().all(|s| s.2 <= centre.2));
    }

    #[test]
    fn test_zero_radius_is_a_pixel() {
        assert_eq!(circle_spans(0.0), vec![(0, 0, 1)]);
    }
}
