//! Progress bar component
//!
//! A stateless horizontal bar used for the fishing reel, the chew meter and
//! the focus countdown. Fill colour is passed per call so the bar follows the
//! active colour profile.
//!
//! # Example
//!
//! ```ignore
//! let reel_bar = ProgressBar::new();
//! reel_bar.render(&mut canvas, 110, 120, fishing.reel_fraction(), palette.accent)?;
//! ```

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for progress bar appearance
#[derive(Debug, Clone)]
pub struct ProgressBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Empty part of the bar
    pub background_color: Color,

    /// Fill used below `warn_below` instead of the caller's colour
    pub warning_color: Color,

    /// Fraction under which the warning colour kicks in (0.0 disables it)
    pub warn_below: f32,

    /// Border color
    pub border_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        ProgressBarStyle {
            width: 100,
            height: 10,
            background_color: Color::RGB(50, 50, 50),
            warning_color: Color::RGB(200, 0, 0),
            warn_below: 0.0,
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 1,
        }
    }
}

pub struct ProgressBar {
    style: ProgressBarStyle,
}

impl ProgressBar {
    /// 100x10 bar, dark background, no warning colour
    pub fn new() -> Self {
        ProgressBar {
            style: ProgressBarStyle::default(),
        }
    }

    pub fn with_style(style: ProgressBarStyle) -> Self {
        ProgressBar { style }
    }

    /// Filled width in pixels for `fraction` (clamped to 0.0..=1.0)
    pub fn fill_width(&self, fraction: f32) -> u32 {
        (self.style.width as f32 * fraction.clamp(0.0, 1.0)) as u32
    }

    /// Colour the filled part should use at `fraction`
    pub fn fill_color(&self, fraction: f32, color: Color) -> Color {
        if fraction < self.style.warn_below {
            self.style.warning_color
        } else {
            color
        }
    }

    /// Renders the bar with its top-left corner at `(x, y)`
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        fraction: f32,
        color: Color,
    ) -> Result<(), String> {
        let background_rect = Rect::new(x, y, self.style.width, self.style.height);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(background_rect)?;

        let fill_width = self.fill_width(fraction);
        if fill_width > 0 {
            canvas.set_draw_color(self.fill_color(fraction, color));
            canvas.fill_rect(Rect::new(x, y, fill_width, self.style.height))?;
        }

        canvas.set_draw_color(self.style.border_color);
        for ring in self.border_rects(x, y) {
            canvas.draw_rect(ring)?;
        }

        Ok(())
    }

    /// One outline per pixel of border, each inset by one more pixel
    ///
    /// Stops early once the rings would close up the bar.
    pub fn border_rects(&self, x: i32, y: i32) -> Vec<Rect> {
        let mut rings = Vec::new();
        for i in 0..self.style.border_thickness {
            let inset = i * 2;
            if inset >= self.style.width || inset >= self.style.height {
                break;
            }
            rings.push(Rect::new(
                x + i as i32,
                y + i as i32,
                self.style.width - inset,
                self.style.height - inset,
            ));
        }
        rings
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_progress_bar_style() {
        let style = ProgressBarStyle::default();
        assert_eq!(style.width, 100);
        assert_eq!(style.height, 10);
        assert_eq!(style.warn_below, 0.0);
    }

    #[test]
    fn test_fill_width_clamps() {
        let bar = ProgressBar::new();
        assert_eq!(bar.fill_width(0.5), 50);
        assert_eq!(bar.fill_width(-1.0), 0);
        assert_eq!(bar.fill_width(3.0), 100);
    }

    #[test]
    fn test_warning_colour() {
        let bar = ProgressBar::with_style(ProgressBarStyle {
            warn_below: 0.3,
            ..Default::default()
        });
        let accent = Color::RGB(1, 2, 3);

        assert_eq!(bar.fill_color(0.1, accent), Color::RGB(200, 0, 0));
        assert_eq!(bar.fill_color(0.3, accent), accent);
    }

    #[test]
    fn test_border_rings_follow_thickness() {
        let none = ProgressBar::with_style(ProgressBarStyle {
            border_thickness: 0,
            ..Default::default()
        });
        assert!(none.border_rects(0, 0).is_empty());

        let double = ProgressBar::with_style(ProgressBarStyle {
            border_thickness: 2,
            ..Default::default()
        });
        assert_eq!(
            double.border_rects(10, 20),
            vec![Rect::new(10, 20, 100, 10), Rect::new(11, 21, 98, 8)]
        );
    }

    #[test]
    fn test_border_stops_before_closing_bar() {
        let bar = ProgressBar::with_style(ProgressBarStyle {
            height: 4,
            border_thickness: 5,
            ..Default::default()
        });
        assert_eq!(bar.border_rects(0, 0).len(), 2);
    }

    #[test]
    fn test_custom_style() {
        let bar = ProgressBar::with_style(ProgressBarStyle {
            width: 60,
            ..Default::default()
        });
        assert_eq!(bar.fill_width(1.0), 60);
    }
}
