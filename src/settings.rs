//! Colour profiles
//!
//! The settings file holds a list of named profiles and which one is active.
//! Colours are stored as `#rrggbb` strings so the file stays hand-editable.

use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};

use crate::save::Saveable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    pub name: String,
    pub bg_hex: String,
    pub accent_hex: String,
}

impl ColorProfile {
    fn new(name: &str, bg_hex: &str, accent_hex: &str) -> Self {
        ColorProfile {
            name: name.to_string(),
            bg_hex: bg_hex.to_string(),
            accent_hex: accent_hex.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(rename = "active_profile_index")]
    pub active_index: usize,
    pub profiles: Vec<ColorProfile>,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            active_index: 0,
            profiles: vec![
                ColorProfile::new("Retro", "#2d2d2d", "#ff6b6b"),
                ColorProfile::new("Light", "#fdf6e3", "#2aa198"),
                ColorProfile::new("Matrix", "#000000", "#00ff00"),
            ],
        }
    }
}

impl Saveable for AppSettings {
    const FILE_NAME: &'static str = "settings.json";

    fn after_load(&mut self) {
        if self.profiles.is_empty() {
            self.profiles = AppSettings::default().profiles;
        }
        if self.active_index >= self.profiles.len() {
            self.active_index = 0;
        }
    }
}

impl AppSettings {
    pub fn active_profile(&self) -> Option<&ColorProfile> {
        self.profiles
            .get(self.active_index)
            .or_else(|| self.profiles.first())
    }

    /// Select the next profile, wrapping to the first
    pub fn next_profile(&mut self) {
        if self.profiles.is_empty() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.profiles.len();
    }

    /// Select the previous profile, wrapping to the last
    pub fn previous_profile(&mut self) {
        if self.profiles.is_empty() {
            return;
        }
        self.active_index = match self.active_index {
            0 => self.profiles.len() - 1,
            i => (i - 1).min(self.profiles.len() - 1),
        };
    }

    pub fn palette(&self) -> Palette {
        self.active_profile()
            .map(Palette::from_profile)
            .unwrap_or_default()
    }
}

/// Resolved colours for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub accent: Color,
}

impl Palette {
    pub fn from_profile(profile: &ColorProfile) -> Self {
        Palette {
            background: parse_hex(&profile.bg_hex),
            accent: parse_hex(&profile.accent_hex),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::RGB(0x2d, 0x2d, 0x2d),
            accent: Color::RGB(0xff, 0x6b, 0x6b),
        }
    }
}

/// Parse `#rrggbb` (the `#` is optional); anything else is opaque black
pub fn parse_hex(s: &str) -> Color {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Color::RGB(0, 0, 0);
    }

    match u32::from_str_radix(digits, 16) {
        Ok(v) => Color::RGB((v >> 16) as u8, (v >> 8) as u8, v as u8),
        Err(_) => Color::RGB(0, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff6b6b"), Color::RGB(0xff, 0x6b, 0x6b));
        assert_eq!(parse_hex("2aa198"), Color::RGB(0x2a, 0xa1, 0x98));
        assert_eq!(parse_hex("#FDF6E3"), Color::RGB(0xfd, 0xf6, 0xe3));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex("#fff"), Color::RGB(0, 0, 0));
        assert_eq!(parse_hex("#zzzzzz"), Color::RGB(0, 0, 0));
        assert_eq!(parse_hex("+12345"), Color::RGB(0, 0, 0));
        assert_eq!(parse_hex(""), Color::RGB(0, 0, 0));
    }

    #[test]
    fn test_profile_cycling_wraps() {
        let mut settings = AppSettings::default();
        settings.previous_profile();
        assert_eq!(settings.active_index, 2);
        settings.next_profile();
        assert_eq!(settings.active_index, 0);
        settings.next_profile();
        assert_eq!(settings.active_profile().unwrap().name, "Light");
    }

    #[test]
    fn test_palette_follows_active_profile() {
        let mut settings = AppSettings::default();
        settings.next_profile();
        settings.next_profile();

        let palette = settings.palette();
        assert_eq!(palette.background, Color::RGB(0, 0, 0));
        assert_eq!(palette.accent, Color::RGB(0, 0xff, 0));
    }

    #[test]
    fn test_after_load_repairs_index_and_profiles() {
        let mut settings = AppSettings {
            active_index: 7,
            profiles: vec![ColorProfile::new("Only", "#111111", "#222222")],
        };
        settings.after_load();
        assert_eq!(settings.active_index, 0);

        let mut empty = AppSettings {
            active_index: 0,
            profiles: Vec::new(),
        };
        empty.after_load();
        assert_eq!(empty.profiles.len(), 3);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(json["active_profile_index"], 0);
        assert_eq!(json["profiles"][1]["name"], "Light");
        assert_eq!(json["profiles"][2]["accent_hex"], "#00ff00");
    }
}
