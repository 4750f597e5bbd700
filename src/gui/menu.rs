//! Base Menu Component
//!
//! A list of labelled items with a wrapping selection cursor, drawn into a
//! box at a given position. Colours come from the style so the menu can
//! follow the active profile.

use crate::text::{LINE_HEIGHT, draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Background color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Title text color
    pub title_color: Color,

    /// Normal item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,

    /// Selection highlight color
    pub highlight_color: Color,

    /// Vertical distance between items
    pub item_spacing: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 140,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            title_color: Color::RGB(220, 220, 240),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(80, 100, 140),
            item_spacing: 14,
        }
    }
}

/// A menu item with its label
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        MenuItem { text: text.into() }
    }
}

/// A stateful list menu
///
/// Holds the items and the selection; wrappers such as
/// [`DirectoryMenu`](super::DirectoryMenu) map the index to something typed.
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    selected_index: usize,
    style: MenuStyle,
}

const PADDING: u32 = 6;

impl Menu {
    /// Creates a new menu with default styling
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self::with_style(title, items, MenuStyle::default())
    }

    pub fn with_style(title: impl Into<String>, items: Vec<MenuItem>, style: MenuStyle) -> Self {
        Menu {
            title: title.into(),
            items,
            selected_index: 0,
            style,
        }
    }

    pub fn style_mut(&mut self) -> &mut MenuStyle {
        &mut self.style
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    /// Get currently selected index
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Box height for the current items
    pub fn height(&self) -> u32 {
        PADDING * 2 + LINE_HEIGHT as u32 + PADDING + self.items.len() as u32 * self.style.item_spacing
    }

    /// Render the menu box with its top-left corner at `(x, y)`
    pub fn render(&self, canvas: &mut Canvas<Window>, x: i32, y: i32) -> Result<(), String> {
        let frame = Rect::new(x, y, self.style.width, self.height());

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(frame)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(frame)?;

        // Title (centered)
        let title_x = x + (self.style.width as i32 - text_width(&self.title, 1) as i32) / 2;
        draw_simple_text(
            canvas,
            &self.title,
            title_x,
            y + PADDING as i32,
            self.style.title_color,
            1,
        )?;

        let item_start_y = y + (PADDING * 2) as i32 + LINE_HEIGHT;

        for (i, item) in self.items.iter().enumerate() {
            let item_y = item_start_y + (i as u32 * self.style.item_spacing) as i32;
            let is_selected = i == self.selected_index;

            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(
                    x + 3,
                    item_y - 3,
                    self.style.width - 6,
                    self.style.item_spacing - 1,
                ))?;
            }

            let text_color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };

            draw_simple_text(
                canvas,
                &item.text,
                x + PADDING as i32 + 2,
                item_y,
                text_color,
                1,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_items() -> Menu {
        Menu::new(
            "TEST",
            vec![MenuItem::new("A"), MenuItem::new("B"), MenuItem::new("C")],
        )
    }

    #[test]
    fn test_selection_wraps_down() {
        let mut menu = three_items();
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected_index(), 2);
        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_selection_wraps_up() {
        let mut menu = three_items();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 2);
        menu.select_previous();
        assert_eq!(menu.selected_index(), 1);
    }

    #[test]
    fn test_empty_menu_does_not_panic() {
        let mut menu = Menu::new("EMPTY", Vec::new());
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_height_grows_with_items() {
        let menu = three_items();
        let spacing = menu.style.item_spacing;
        assert_eq!(
            menu.height(),
            PADDING * 3 + LINE_HEIGHT as u32 + 3 * spacing
        );
    }
}
