//! Character art: the panda, the gopher and a few props
//!
//! Everything is built from circles, rectangles and lines; no textures.
//! `(x, y)` is roughly the centre of the character's head.

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::draw::{fill_circle, fill_rect, stroke_line};

const PANDA_DARK: Color = Color::RGB(20, 20, 20);
const WHITE: Color = Color::RGB(255, 255, 255);

const GOPHER_BLUE: Color = Color::RGB(0x7f, 0xd5, 0xea);
const GOPHER_DARK: Color = Color::RGB(0x00, 0x00, 0x00);
const GOPHER_SNOUT: Color = Color::RGB(0xfd, 0xe6, 0x8a);
const GOPHER_TOOTH: Color = Color::RGB(0xff, 0xff, 0xff);

const HEART: Color = Color::RGB(0xff, 0x6b, 0x6b);
const ROD: Color = Color::RGB(139, 69, 19);
const BAMBOO: Color = Color::RGB(0x6a, 0xbe, 0x30);
const BAMBOO_NODE: Color = Color::RGB(0x3f, 0x7f, 0x1c);

const DESK: Color = Color::RGB(0x8b, 0x5a, 0x2b);
const KEY_BASE: Color = Color::RGB(0x20, 0x20, 0x20);
const KEY_DARK: Color = Color::RGB(0x40, 0x40, 0x40);
const KEY_LIGHT: Color = Color::RGB(0x80, 0x80, 0x80);
const KEY_SPACE: Color = Color::RGB(0xaa, 0xaa, 0xaa);

/// What the panda is holding or doing below the neck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Costume {
    /// Sitting with arms and feet out
    Plain,
    /// At a desk with a keyboard; paws bob while `paws_down` flips
    Typing { paws_down: bool },
    /// Holding a fishing rod
    Rod,
    /// Holding a bamboo stalk up to its mouth
    Munching { paws_down: bool },
}

pub fn draw_panda(
    canvas: &mut Canvas<Window>,
    x: f32,
    y: f32,
    costume: Costume,
) -> Result<(), String> {
    // Ears, head, eye patches, eyes, nose, body
    fill_circle(canvas, x - 12.0, y - 15.0, 8.0, PANDA_DARK)?;
    fill_circle(canvas, x + 12.0, y - 15.0, 8.0, PANDA_DARK)?;
    fill_circle(canvas, x, y, 20.0, WHITE)?;
    fill_circle(canvas, x - 8.0, y - 2.0, 6.0, PANDA_DARK)?;
    fill_circle(canvas, x + 8.0, y - 2.0, 6.0, PANDA_DARK)?;
    fill_circle(canvas, x - 8.0, y - 3.0, 2.0, WHITE)?;
    fill_circle(canvas, x + 8.0, y - 3.0, 2.0, WHITE)?;
    fill_circle(canvas, x, y + 5.0, 3.0, PANDA_DARK)?;
    fill_rect(canvas, x - 15.0, y + 15.0, 30.0, 25.0, WHITE)?;

    match costume {
        Costume::Plain => {
            fill_circle(canvas, x - 18.0, y + 20.0, 7.0, PANDA_DARK)?;
            fill_circle(canvas, x + 18.0, y + 20.0, 7.0, PANDA_DARK)?;
            draw_feet(canvas, x, y)?;
        }
        Costume::Typing { paws_down } => {
            fill_rect(canvas, x - 40.0, y + 25.0, 80.0, 20.0, DESK)?;
            draw_keyboard(canvas, x - 25.0, y + 25.0)?;

            let bob = if paws_down { -3.0 } else { 0.0 };
            fill_circle(canvas, x - 15.0, y + 30.0 + bob, 6.0, PANDA_DARK)?;
            fill_circle(canvas, x + 15.0, y + 30.0 - bob, 6.0, PANDA_DARK)?;
        }
        Costume::Rod => {
            stroke_line(canvas, (x + 15.0, y + 20.0), (x + 40.0, y - 10.0), 2, ROD)?;
            draw_feet(canvas, x, y)?;
        }
        Costume::Munching { paws_down } => {
            let lift = if paws_down { 2.0 } else { 0.0 };
            draw_bamboo(canvas, x - 4.0, y + 2.0 + lift, 24.0)?;
            fill_circle(canvas, x - 8.0, y + 18.0 + lift, 6.0, PANDA_DARK)?;
            fill_circle(canvas, x + 8.0, y + 18.0 - lift, 6.0, PANDA_DARK)?;
            draw_feet(canvas, x, y)?;
        }
    }

    Ok(())
}

fn draw_feet(canvas: &mut Canvas<Window>, x: f32, y: f32) -> Result<(), String> {
    fill_circle(canvas, x - 12.0, y + 40.0, 7.0, PANDA_DARK)?;
    fill_circle(canvas, x + 12.0, y + 40.0, 7.0, PANDA_DARK)
}

/// 50x15 keyboard with its top-left corner at `(kx, ky)`
fn draw_keyboard(canvas: &mut Canvas<Window>, kx: f32, ky: f32) -> Result<(), String> {
    fill_rect(canvas, kx, ky, 50.0, 15.0, KEY_BASE)?;
    for i in 0..10 {
        fill_rect(canvas, kx + 1.0 + i as f32 * 5.0, ky + 1.0, 4.0, 3.0, KEY_DARK)?;
    }
    for row_y in [ky + 5.0, ky + 9.0] {
        for i in 0..9 {
            fill_rect(canvas, kx + 3.0 + i as f32 * 5.0, row_y, 4.0, 3.0, KEY_LIGHT)?;
        }
    }
    fill_rect(canvas, kx + 15.0, ky + 13.0, 20.0, 2.0, KEY_SPACE)
}

/// Vertical bamboo stalk of `length` with its top at `(x, y)`
pub fn draw_bamboo(canvas: &mut Canvas<Window>, x: f32, y: f32, length: f32) -> Result<(), String> {
    fill_rect(canvas, x, y, 4.0, length, BAMBOO)?;
    let mut node_y = y + 6.0;
    while node_y < y + length {
        fill_rect(canvas, x - 1.0, node_y, 6.0, 1.0, BAMBOO_NODE)?;
        node_y += 8.0;
    }
    Ok(())
}

/// Small panda head for the maze
pub fn draw_panda_head(canvas: &mut Canvas<Window>, x: f32, y: f32, r: f32) -> Result<(), String> {
    fill_circle(canvas, x - 4.0, y - 5.0, r / 2.0, PANDA_DARK)?;
    fill_circle(canvas, x + 4.0, y - 5.0, r / 2.0, PANDA_DARK)?;
    fill_circle(canvas, x, y, r, WHITE)?;
    fill_circle(canvas, x - 3.0, y - 1.0, 2.0, PANDA_DARK)?;
    fill_circle(canvas, x + 3.0, y - 1.0, 2.0, PANDA_DARK)
}

pub fn draw_gopher(canvas: &mut Canvas<Window>, x: f32, y: f32) -> Result<(), String> {
    // Body
    fill_circle(canvas, x, y + 15.0, 18.0, GOPHER_BLUE)?;
    fill_circle(canvas, x - 5.0, y - 10.0, 16.0, GOPHER_BLUE)?;
    fill_rect(canvas, x - 20.0, y - 10.0, 35.0, 25.0, GOPHER_BLUE)?;
    // Eyes
    fill_circle(canvas, x - 12.0, y - 12.0, 7.0, WHITE)?;
    fill_circle(canvas, x - 10.0, y - 12.0, 2.0, GOPHER_DARK)?;
    fill_circle(canvas, x + 2.0, y - 12.0, 7.0, WHITE)?;
    fill_circle(canvas, x + 4.0, y - 12.0, 2.0, GOPHER_DARK)?;
    // Snout and tooth
    fill_rect(canvas, x - 10.0, y - 2.0, 14.0, 8.0, GOPHER_SNOUT)?;
    fill_circle(canvas, x - 10.0, y + 2.0, 4.0, GOPHER_SNOUT)?;
    fill_circle(canvas, x + 4.0, y + 2.0, 4.0, GOPHER_SNOUT)?;
    fill_circle(canvas, x - 3.0, y - 1.0, 3.0, GOPHER_DARK)?;
    fill_rect(canvas, x - 5.0, y + 4.0, 4.0, 5.0, GOPHER_TOOTH)?;
    // Ears
    fill_circle(canvas, x - 18.0, y - 18.0, 4.0, GOPHER_BLUE)?;
    fill_circle(canvas, x + 8.0, y - 20.0, 4.0, GOPHER_BLUE)
}

/// Small gopher head for the maze
pub fn draw_gopher_head(canvas: &mut Canvas<Window>, x: f32, y: f32) -> Result<(), String> {
    fill_circle(canvas, x, y, 7.0, GOPHER_BLUE)?;
    fill_circle(canvas, x - 6.0, y - 5.0, 2.0, GOPHER_BLUE)?;
    fill_circle(canvas, x + 6.0, y - 5.0, 2.0, GOPHER_BLUE)?;
    for eye_x in [x - 3.0, x + 3.0] {
        fill_circle(canvas, eye_x, y - 2.0, 3.0, WHITE)?;
        fill_circle(canvas, eye_x, y - 2.0, 1.0, GOPHER_DARK)?;
    }
    fill_circle(canvas, x, y + 2.0, 3.0, GOPHER_SNOUT)?;
    fill_circle(canvas, x, y + 1.0, 1.0, GOPHER_DARK)?;
    fill_rect(canvas, x - 1.0, y + 3.0, 2.0, 2.0, GOPHER_TOOTH)
}

pub fn draw_heart(canvas: &mut Canvas<Window>, x: f32, y: f32) -> Result<(), String> {
    fill_circle(canvas, x - 3.0, y, 3.0, HEART)?;
    fill_circle(canvas, x + 3.0, y, 3.0, HEART)?;
    fill_circle(canvas, x, y + 4.0, 3.0, HEART)
}

/// Where the heart is along its hop from the gopher at `(gx, gy)`
///
/// `progress` 0.0 is at the gopher, 1.0 is 60 px to the left, arcing up 20 px.
pub fn heart_position(gx: f32, gy: f32, progress: f32) -> (f32, f32) {
    let p = progress.clamp(0.0, 1.0);
    (
        gx - p * 60.0,
        gy - 10.0 - (p * std::f32::consts::PI).sin() * 20.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_arc_endpoints() {
        let (x0, y0) = heart_position(240.0, 120.0, 0.0);
        assert_eq!((x0, y0), (240.0, 110.0));

        let (x1, y1) = heart_position(240.0, 120.0, 1.0);
        assert_eq!(x1, 180.0);
        assert!((y1 - 110.0).abs() < 0.001);
    }

    #[test]
    fn test_heart_peaks_midway() {
        let (_, y_mid) = heart_position(240.0, 120.0, 0.5);
        assert!((y_mid - 90.0).abs() < 0.001);
    }
}
