//! Directory menu: the home screen's list of modes

use super::{Menu, MenuItem, MenuStyle};
use crate::game::Mode;
use crate::settings::Palette;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Mode picker wrapped around the base [`Menu`]
///
/// Items follow [`Mode::MENU`], so the selected index maps straight back to
/// a mode.
pub struct DirectoryMenu {
    menu: Menu,
}

impl DirectoryMenu {
    pub fn new() -> Self {
        let items = Mode::MENU
            .iter()
            .map(|mode| MenuItem::new(mode.menu_label()))
            .collect();

        DirectoryMenu {
            menu: Menu::new(Mode::Directory.menu_label(), items),
        }
    }

    /// Navigate up (wraps to bottom)
    pub fn navigate_up(&mut self) {
        self.menu.select_previous();
    }

    /// Navigate down (wraps to top)
    pub fn navigate_down(&mut self) {
        self.menu.select_next();
    }

    pub fn selected_mode(&self) -> Mode {
        Mode::MENU
            .get(self.menu.selected_index())
            .copied()
            .unwrap_or(Mode::Relax)
    }

    /// Recolour to match the active profile
    pub fn apply_palette(&mut self, palette: &Palette) {
        let style: &mut MenuStyle = self.menu.style_mut();
        style.background_color = palette.background;
        style.border_color = palette.accent;
        style.title_color = palette.accent;
        style.highlight_color = palette.accent;
        style.selected_item_color = contrast(palette.accent);
        style.item_color = contrast(palette.background);
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, x: i32, y: i32) -> Result<(), String> {
        self.menu.render(canvas, x, y)
    }
}

impl Default for DirectoryMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// Black or white, whichever reads better on `color`
pub fn contrast(color: Color) -> Color {
    let luma = 299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32;
    if luma > 128_000 {
        Color::RGB(0, 0, 0)
    } else {
        Color::RGB(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_mode() {
        let menu = DirectoryMenu::new();
        assert_eq!(menu.selected_mode(), Mode::Relax);
    }

    #[test]
    fn test_navigation_maps_to_modes() {
        let mut menu = DirectoryMenu::new();
        menu.navigate_down();
        assert_eq!(menu.selected_mode(), Mode::Focus);

        menu.navigate_up();
        menu.navigate_up();
        assert_eq!(menu.selected_mode(), Mode::Settings);
    }

    #[test]
    fn test_every_menu_mode_reachable() {
        let mut menu = DirectoryMenu::new();
        let mut seen = Vec::new();
        for _ in 0..Mode::MENU.len() {
            seen.push(menu.selected_mode());
            menu.navigate_down();
        }
        assert_eq!(seen, Mode::MENU.to_vec());
    }

    #[test]
    fn test_contrast() {
        assert_eq!(contrast(Color::RGB(0xfd, 0xf6, 0xe3)), Color::RGB(0, 0, 0));
        assert_eq!(contrast(Color::RGB(0x2d, 0x2d, 0x2d)), Color::RGB(255, 255, 255));
    }
}
